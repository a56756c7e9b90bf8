use csv::Writer;
use std::fs::File;
use std::io::{self, Write};

pub fn save_table_to_file(
    columns: &Vec<Vec<f64>>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &Vec<f64>,
    arg: &String,
) -> io::Result<()> {
    assert!(
        columns.iter().all(|col| col.len() == x_mesh.len()),
        "All vectors must have the same length"
    );
    let mut file = File::create(filename)?;
    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    // Write headers
    writeln!(file, "{}", headers_with_x.join("\t"))?;
    for (i, x) in x_mesh.iter().enumerate() {
        let mut row_data = Vec::new();
        row_data.push(x.to_string());
        row_data.extend(columns.iter().map(|col| col[i].to_string()));
        writeln!(file, "{}", row_data.join("\t"))?;
    }

    Ok(())
}

pub fn save_table_to_csv(
    columns: &Vec<Vec<f64>>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &Vec<f64>,
    arg: &String,
) -> io::Result<()> {
    assert!(
        columns.iter().all(|col| col.len() == x_mesh.len()),
        "All vectors must have the same length"
    );
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    // Prepare and write headers
    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    writer.write_record(&headers_with_x)?;

    // Write data rows
    for (i, x) in x_mesh.iter().enumerate() {
        let mut row_data = Vec::new();
        row_data.push(x.to_string());
        row_data.extend(columns.iter().map(|col| col[i].to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

//___________________________________TESTS____________________________________
