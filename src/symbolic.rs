#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds symbolic expressions of a single variable from constants, x and operations
/// 2) turns a symbolic expression into a new symbolic expression - its analytical derivative
/// 3) turns a symbolic expression into a Rust function
/// 4) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// use std::sync::Arc;
/// // f(x) = (x^2 + 3*x) * sin(x)
/// let x = Expr::Var.shared();
/// let f = Expr::Mul(
///     Expr::Add(
///         Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
///         Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
///     )
///     .shared(),
///     Expr::sin(Arc::clone(&x)).shared(),
/// );
/// let df = f.derivative();
/// println!("f(x)  = {}", f);
/// println!("f'(x) = {}", df);
/// println!("f(2)  = {}", f.evaluate(2.0));
/// println!("f'(2) = {}", df.evaluate(2.0));
/// ```
/// Example2#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// // build with operator sugar, then check the derivative numerically
/// let f = Expr::Var.pow(Expr::Const(3.0)) + Expr::Const(2.0) * Expr::Var;
/// let f_res = f.lambdify1D()(1.0);
/// println!("f(1) = {}", f_res);
/// let start = 0.0;
/// let end = 10 as f64;
/// let num_values = 100;
/// let max_norm = 1e-6;
/// // compare numerical and analtical derivatives for a given linspace defined by start, end values and number of values.
/// // a norm of the difference between the two of them is returned, and the answer is true if the norm is below max_norm
/// let (norm, res) = f.compare_num1D(start, end, num_values, max_norm);
/// println!("norm = {}, res = {}", norm, res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///______________________________________________________________________________________________________________________________________________
/// the collection of numeric utility functions used to cross-check symbolic derivatives
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;

#[cfg(test)]
mod symbolic_engine_tests;
