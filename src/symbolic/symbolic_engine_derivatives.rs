//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with differentiation, evaluation,
//! and function conversion capabilities. It provides the computational backbone for
//! converting symbolic expressions into executable functions and for checking
//! analytical derivatives against numerical approximations.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `derivative()` - Analytical derivative with simplification built into every rule
//!
//! ### Function evaluation
//! - `evaluate(x)` - Direct evaluation without closure creation
//! - `lambdify1D()` - Converting symbolic expressions to executable Rust closures
//! - `calc_vector_lambdified1D()` / `calc_vector_lambdified1D_par()` - Vectorized evaluation
//! - `lambdify1D_from_linspace()` - Evaluation over a uniform grid
//!
//! ### Numerical Validation
//! - `compare_num1D()` - Validate derivatives against finite differences
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Differentiation Rules**: power rule, product rule and chain rule
//!    for every node variant, with trivial terms elided while the result is built
//!
//! 2. **Closure Generation**: Creates Rust closures from symbolic expressions,
//!    enabling high-performance numerical computation
//!
//! 3. **Subtree Sharing**: derivative results reuse operands of the original tree
//!    by handle, no subtree is ever deep-copied
//!
//! 4. **Numerical Validation**: comparison between analytical and numerical
//!    derivatives using configurable tolerance and step sizes

use crate::global::STEP_SCALE;
use crate::symbolic::symbolic_engine::{Expr, ExprRef};
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use rayon::prelude::*;
use std::sync::Arc;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to x.
    ///
    /// Implements the standard differentiation rules from calculus:
    /// - Power rule: d/dx(x^n) = n*x^(n-1)
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Chain rule: d/dx(sin(u)) = cos(u)*u'
    ///
    /// Simplification happens while the result is constructed: zero terms are
    /// dropped and factors of one are elided, following a fixed order of checks
    /// (zero before one, left term before right term) so the resulting tree is
    /// deterministic. Operands of the receiver are reused by handle, never copied.
    ///
    /// The exponent of a power is treated as a constant coefficient: it is
    /// sampled at x = 0 and the power rule is applied with that value.
    ///
    /// # Returns
    /// Shared handle to a new expression tree representing the derivative
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::Var.pow(Expr::Const(2.0)); // x^2
    /// let df = f.derivative(); // (2 * (x^1))
    /// ```
    pub fn derivative(&self) -> ExprRef {
        match self {
            Expr::Const(_) => Expr::Const(0.0).shared(),
            Expr::Var => Expr::Const(1.0).shared(),
            Expr::Add(lhs, rhs) => {
                let dl = lhs.derivative();
                let dr = rhs.derivative();
                if dl.is_zero() {
                    dr
                } else if dr.is_zero() {
                    dl
                } else {
                    Expr::Add(dl, dr).shared()
                }
            }
            Expr::Mul(lhs, rhs) => {
                let dl = lhs.derivative();
                let dr = rhs.derivative();
                let t1 = if dl.is_zero() {
                    Expr::Const(0.0).shared()
                } else if dl.is_one() {
                    Arc::clone(rhs)
                } else {
                    Expr::Mul(dl, Arc::clone(rhs)).shared()
                };
                let t2 = if dr.is_zero() {
                    Expr::Const(0.0).shared()
                } else if dr.is_one() {
                    Arc::clone(lhs)
                } else {
                    Expr::Mul(Arc::clone(lhs), dr).shared()
                };
                if t1.is_zero() {
                    t2
                } else if t2.is_zero() {
                    t1
                } else {
                    Expr::Add(t1, t2).shared()
                }
            }
            Expr::Pow(base, exp) => {
                let n = exp.evaluate(0.0); // exponent treated as a constant, sampled at x = 0
                if n == 0.0 {
                    Expr::Const(0.0).shared()
                } else {
                    let inner = Expr::Mul(
                        Expr::Const(n).shared(),
                        Expr::Pow(Arc::clone(base), Expr::Const(n - 1.0).shared()).shared(),
                    )
                    .shared();
                    let bd = base.derivative();
                    if bd.is_one() {
                        inner
                    } else {
                        Expr::Mul(inner, bd).shared()
                    }
                }
            }
            Expr::sin(arg) => {
                let cos_u = Expr::cos(Arc::clone(arg)).shared();
                let ad = arg.derivative();
                if ad.is_one() {
                    cos_u
                } else {
                    Expr::Mul(cos_u, ad).shared()
                }
            }
            Expr::cos(arg) => {
                let outer = Expr::Mul(
                    Expr::Const(-1.0).shared(),
                    Expr::sin(Arc::clone(arg)).shared(),
                )
                .shared();
                let ad = arg.derivative();
                if ad.is_one() {
                    outer
                } else {
                    Expr::Mul(outer, ad).shared()
                }
            }
        }
    }

    /// EVALUATION

    /// Evaluates the expression numerically at the given point.
    ///
    /// Substitutes x for the free variable and computes the result recursively.
    /// The tree is never mutated. Domain errors (like 0^negative) follow IEEE 754
    /// semantics and propagate as NaN or infinity instead of panicking.
    ///
    /// # Arguments
    /// * `x` - Value substituted for the free variable
    ///
    /// # Returns
    /// Numerical result of the evaluation
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Expr::Const(val) => *val,
            Expr::Var => x,
            Expr::Add(lhs, rhs) => {
                let lhs_val = lhs.evaluate(x);
                let rhs_val = rhs.evaluate(x);
                lhs_val + rhs_val
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_val = lhs.evaluate(x);
                let rhs_val = rhs.evaluate(x);
                lhs_val * rhs_val
            }
            Expr::Pow(base, exp) => {
                let base_val = base.evaluate(x);
                let exp_val = exp.evaluate(x);
                base_val.powf(exp_val)
            }
            Expr::sin(arg) => arg.evaluate(x).sin(),
            Expr::cos(arg) => arg.evaluate(x).cos(),
        }
    }

    /// Converts the symbolic expression into an executable Rust closure.
    ///
    /// The closure owns everything it captures, so it can outlive the expression
    /// it was compiled from.
    ///
    /// # Returns
    /// Boxed closure computing f(x)
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::Var * Expr::Var; // x*x
    /// let f_fn = f.lambdify1D();
    /// assert_eq!(f_fn(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Var => Box::new(|x| x),
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::sin(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).sin())
            }
            Expr::cos(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).cos())
            }
        }
    }

    //___________________________________________________________________________________________________________________
    //                    1D FUNCTION PROCESSING - Single Variable Functions y = f(x)
    // _________________________________________________________________________________________________________________

    /// Evaluates 1D function over a vector of input values.
    ///
    /// # Arguments
    /// * `x` - Vector of input values
    ///
    /// # Returns
    /// Vector of function evaluations f(x[i])
    pub fn calc_vector_lambdified1D(&self, x: &Vec<f64>) -> Vec<f64> {
        let mut result = Vec::new();
        for xi in x {
            result.push(self.lambdify1D()(*xi));
        }
        result
    }

    /// Parallel version of calc_vector_lambdified1D for large grids.
    ///
    /// Safe to call from several threads at once since the tree is immutable.
    pub fn calc_vector_lambdified1D_par(&self, x: &Vec<f64>) -> Vec<f64> {
        x.par_iter().map(|xi| self.lambdify1D()(*xi)).collect()
    }

    /// Evaluates 1D function over a linearly spaced domain.
    ///
    /// Convenience method combining linspace generation with function evaluation.
    /// Useful for plotting and numerical analysis.
    ///
    /// # Arguments
    /// * `start` - Domain start value
    /// * `end` - Domain end value
    /// * `num_values` - Number of evaluation points
    ///
    /// # Returns
    /// Vector of function values over the specified domain
    pub fn lambdify1D_from_linspace(&self, start: f64, end: f64, num_values: usize) -> Vec<f64> {
        let x = linspace(start, end, num_values);
        self.calc_vector_lambdified1D(&x)
    }

    /// Validates analytical derivative against numerical approximation.
    ///
    /// Computes both analytical and numerical derivatives over a domain and compares
    /// their L2 norm difference. Essential for verifying differentiation correctness.
    ///
    /// # Arguments
    /// * `start` - Domain start
    /// * `end` - Domain end
    /// * `num_values` - Number of test points
    /// * `max_norm` - Maximum acceptable norm difference
    ///
    /// # Returns
    /// Tuple of (actual_norm, is_within_tolerance)
    ///
    /// # Algorithm
    /// Uses central finite differences with a step proportional to the grid spacing
    pub fn compare_num1D(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let deriv = &self.derivative(); // get the analtical derivative
        let analytical_derivative = deriv.lambdify1D_from_linspace(start, end, num_values); // calculate values of the analtical derivative on the linspace
        let analitical_function = &self.lambdify1D(); // get the analtical function
        let step = STEP_SCALE * (end - start) / (num_values as f64 - 1.0);
        let domain = linspace(start, end, num_values);
        let numerical_derivative = numerical_derivative(analitical_function, domain, step); // calculate values of the numerical derivative on the linspace
        let norma_val = norm(analytical_derivative, numerical_derivative);

        if max_norm > norma_val {
            (norma_val, true)
        } else {
            (norma_val, false)
        }
    }
}
