pub fn plots(arg: String, values: Vec<String>, x_result: Vec<f64>, y_result: Vec<Vec<f64>>) {
    use plotters::prelude::*;
    let x = x_result;
    let y = y_result;
    let x_min = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    for (col, y_col) in y.iter().enumerate() {
        let y_min = y_col.iter().cloned().fold(f64::INFINITY, f64::min);
        let y_max = y_col.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let varname = values[col].clone();
        let filename = format!("{}.png", varname);
        let root_area = BitMapBackend::new(&filename, (800, 600)).into_drawing_area();
        root_area.fill(&WHITE).unwrap();

        // Create a chart builder
        let mut chart = ChartBuilder::on(&root_area)
            .caption(format!("{}", varname), ("sans-serif", 50))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(x_min * 0.95..x_max * 1.05, y_min * 0.95..y_max * 1.05)
            .unwrap();

        // Configure the mesh
        chart
            .configure_mesh()
            .x_desc(&arg)
            .y_desc(&varname)
            .draw()
            .unwrap();

        // Plot the curve
        let series: Vec<(f64, f64)> = x.iter().zip(y_col.iter()).map(|(&x, &y)| (x, y)).collect();
        chart
            .draw_series(LineSeries::new(series, &Palette99::pick(col)))
            .unwrap()
            .label(format!(" {}", varname))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(col))
            });

        // Configure the legend
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .unwrap();
    }
}

use gnuplot::{AxesCommon, Caption, Color, Figure};
pub fn plots_gnulot(arg: String, values: Vec<String>, x_result: Vec<f64>, y_result: Vec<Vec<f64>>) {
    let x = x_result;
    // Create a new figure for each curve
    for (col, y_col) in y_result.iter().enumerate() {
        let mut fg = Figure::new();
        let varname = &values[col];

        fg.axes2d()
            .set_title(varname, &[])
            .set_x_label(&arg, &[])
            .set_y_label(varname, &[])
            .lines(x.as_slice(), y_col, &[Caption(varname), Color("blue".into())]);

        // Save the plot to a file
        let filename = format!("{}.png", varname);
        fg.save_to_png(&filename, 800, 600).unwrap();
    }
}

//___________________________________TESTS____________________________________
