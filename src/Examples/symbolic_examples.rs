// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::{save_table_to_csv, save_table_to_file};
use crate::Utils::plots::{plots, plots_gnulot};
use crate::global::DEFAULT_TOLERANCE;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use std::sync::Arc;
#[allow(dead_code)]
pub fn sym_examples(example: usize) {
    match example {
        0 => {
            // FUNCTION OF 1 VARIABLE
            // construct the expression f(x) = (x^2 + 3*x)*sin(x) directly from enum variants,
            // the same x handle is shared between all the places where x occurs
            let x = Expr::Var.shared();
            let quadratic = Expr::Add(
                Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
                Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
            )
            .shared();
            let f = Expr::Mul(quadratic, Expr::sin(Arc::clone(&x)).shared());
            // render the expression as a fully parenthesized string
            println!("f = {}", f);
            // differentiate with respect to x; simplification is built into the rules,
            // so zero terms are dropped and factors of one are elided on the fly
            let df = f.derivative();
            println!("df = {}", df);
            // evaluate both at a point
            println!("f(2) = {}", f.evaluate(2.0));
            println!("df(2) = {}", df.evaluate(2.0));
            // compare numerical and analtical derivatives for a given linspace defined by
            // start, end values and number of values.
            // a norm of the difference between the two of them is returned, and the answer
            // is true if the norm is below max_norm
            let (norm, within) = f.compare_num1D(0.0, 2.0, 100, DEFAULT_TOLERANCE);
            println!("norm = {}, within tolerance = {}", norm, within);
        }
        1 => {
            // OPERATOR SYNTAX
            // a symbolic function can be defined in a more straightforward way with
            // the overloaded operators, no need to spell out the enum variants
            let f = (Expr::Var.pow(Expr::Const(2.0)) + Expr::Const(3.0) * Expr::Var)
                * Expr::sin(Expr::Var.shared());
            println!("f = {}", f);
            println!("df = {}", f.derivative());
            // compound assignment also works
            let mut g = Expr::Var.pow(Expr::Const(3.0));
            g += Expr::Const(2.0) * Expr::Var;
            println!("g = {}", g);
            g *= Expr::Var;
            println!("g after *= x: {}", g);
            // unary minus multiplies by -1
            println!("-g = {}", -g);
            // constants know whether they are the additive or multiplicative identity
            println!(
                "is_zero = {}, is_one = {}",
                Expr::Const(0.0).is_zero(),
                Expr::Const(1.0).is_one()
            );
        }
        2 => {
            // LAMBDIFY AND MESH EVALUATION
            let f = Expr::Var.pow(Expr::Const(3.0)) + Expr::Const(2.0) * Expr::Var;
            //convert symbolic expression to a Rust function and evaluate the function
            let f_res = f.lambdify1D()(1.0);
            println!("f(1) = {}", f_res);
            // evaluate the function over an explicit mesh
            let x_mesh = linspace(0.0, 1.0, 11);
            let y = f.calc_vector_lambdified1D(&x_mesh);
            println!("y = {:?}", y);
            // the same in parallel, the mesh is split between threads
            let y_par = f.calc_vector_lambdified1D_par(&x_mesh);
            println!("y_par = {:?}", y_par);
            // or let the method generate the linspace itself
            let y2 = f.lambdify1D_from_linspace(0.0, 1.0, 11);
            println!("y2 = {:?}", y2);
        }
        3 => {
            // POWER RULE AND ITS LIMITS
            // the exponent of a power is sampled at x = 0 and treated as a constant
            // coefficient, so only constant exponents differentiate correctly
            let f = Expr::Pow(Expr::Var.shared(), Expr::Const(4.0).shared());
            println!("d({}) = {}", f, f.derivative());
            // the exponent is never collapsed, x^1 stays in the output
            let g = Expr::Var.pow(Expr::Const(2.0));
            println!("d({}) = {}", g, g.derivative());
            // a variable exponent is read off at x = 0, the derivative collapses to zero
            let h = Expr::Pow(Expr::Var.shared(), Expr::Var.shared());
            println!("d({}) = {}", h, h.derivative());
            // the numerical cross-check catches the wrong derivative
            let (norm, within) = h.compare_num1D(0.5, 1.5, 100, 0.05);
            println!("norm = {}, within tolerance = {}", norm, within);
        }
        4 => {
            // SAVING EVALUATION TABLES
            // tabulate f and df over a mesh and save the table to disk
            let x = Expr::Var.shared();
            let f = Expr::Mul(
                Expr::Add(
                    Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
                    Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
                )
                .shared(),
                Expr::sin(Arc::clone(&x)).shared(),
            );
            let df = f.derivative();
            let x_mesh = linspace(0.0, 2.0, 50);
            let columns = vec![
                f.calc_vector_lambdified1D(&x_mesh),
                df.calc_vector_lambdified1D(&x_mesh),
            ];
            let headers = vec!["f".to_string(), "df".to_string()];
            // tab separated table
            let _ = save_table_to_file(
                &columns,
                &headers,
                "symbolic_table.txt",
                &x_mesh,
                &"x".to_string(),
            );
            // and the same table in csv format
            let _ = save_table_to_csv(
                &columns,
                &headers,
                "symbolic_table.csv",
                &x_mesh,
                &"x".to_string(),
            );
            println!("tables saved");
        }
        5 => {
            // PLOTTING
            // plot f and df against the mesh, one png per backend
            let x = Expr::Var.shared();
            let f = Expr::Mul(
                Expr::Add(
                    Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
                    Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
                )
                .shared(),
                Expr::sin(Arc::clone(&x)).shared(),
            );
            let df = f.derivative();
            let x_mesh = linspace(0.0, 6.0, 200);
            let y_result = vec![
                f.calc_vector_lambdified1D(&x_mesh),
                df.calc_vector_lambdified1D(&x_mesh),
            ];
            let values = vec!["f".to_string(), "df".to_string()];
            plots(
                "x".to_string(),
                values.clone(),
                x_mesh.clone(),
                y_result.clone(),
            );
            plots_gnulot("x".to_string(), values, x_mesh, y_result);
        }
        _ => {
            println!("example not found");
        }
    }
    //_________________________________________________
}
