//! # Symbolic Engine Module
//!
//! This module provides the symbolic core of the crate: an immutable expression
//! tree for single-variable mathematical expressions. It is the foundation for
//! analytical differentiation, numeric evaluation and conversion of expressions
//! to executable functions.
//!
//! ## Purpose
//!
//! The symbolic engine allows users to:
//! - Build expression trees from constants, the free variable x and operations
//! - Render expressions into fully parenthesized human-readable strings
//! - Share subtrees between expressions without copying (reference-counted nodes)
//! - Feed trees into analytical differentiation and lambdification (see the
//!   derivatives module)
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Variable**: `Var` - the single free variable, printed as "x"
//! - **Operations**: `Add`, `Mul`, `Pow` - basic arithmetic
//! - **Functions**: `sin`, `cos` - trigonometric functions
//!
//! ### Key Methods
//! - `shared()` - wrap a node into a reference-counted handle (`ExprRef`)
//! - `pow(rhs)` - build a power expression
//! - `is_zero()` / `is_one()` - exact checks used by derivative simplification
//!
//! ## Interesting Code Features
//!
//! 1. **Shared Subtrees**: children are `Arc<Expr>`, so one subtree may be a
//!    child of several parents and the same tree can be evaluated from several
//!    threads at once
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Mul, Neg) for
//!    natural mathematical syntax: `x + y * z`
//!
//! 3. **Immutability**: nodes are never mutated after construction; every
//!    operation builds new nodes and reuses old ones by handle

#![allow(non_camel_case_types)]

use std::fmt;
use std::sync::Arc;

/// Shared handle to an expression node. Cloning the handle is cheap and never
/// copies the subtree.
pub type ExprRef = Arc<Expr>;

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// Each variant represents a different type of mathematical construct. The enum uses
/// `ExprRef` (`Arc<Expr>`) for recursive structures, allowing arbitrarily deep trees
/// whose subtrees are shared rather than copied.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::Expr;
/// let x = Expr::Var;
/// let expr = Expr::Add(x.shared(), Expr::Const(2.0).shared());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// The free variable, printed as "x"
    Var,
    /// Addition operation: left + right
    Add(ExprRef, ExprRef),
    /// Multiplication operation: left * right
    Mul(ExprRef, ExprRef),
    /// Power operation: base ^ exponent
    Pow(ExprRef, ExprRef),
    /// Sine function: sin(x)
    sin(ExprRef),
    /// Cosine function: cos(x)
    cos(ExprRef),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Every binary node is wrapped in parentheses, so the output is unambiguous
/// without precedence rules. Constants holding a whole number within i64
/// range are printed without a decimal part ("3", not "3.0"); larger
/// magnitudes keep the plain float formatting.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => {
                if val.fract() == 0.0 && val.abs() < 9.2e18 {
                    write!(f, "{}", *val as i64)
                } else {
                    write!(f, "{}", val)
                }
            }
            Expr::Var => write!(f, "x"),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({}^{})", base, exp),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.shared(), rhs.shared())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.shared(), rhs.shared())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Add(Arc::new(self.clone()), Arc::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Mul(Arc::new(self.clone()), Arc::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Arc::new(Expr::Const(-1.0)), Arc::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Convenience method to wrap an expression into a shared handle.
    ///
    /// Essential for creating nested expressions since Expr variants hold `ExprRef`
    /// children. The same handle may be stored in several parents.
    pub fn shared(self) -> ExprRef {
        Arc::new(self)
    }

    /// Creates power expression self^rhs.
    ///
    /// # Arguments
    /// * `rhs` - Exponent expression
    ///
    /// # Returns
    /// New Expr::Pow with self as base and rhs as exponent
    pub fn pow(mut self, rhs: Expr) -> Expr {
        self = Expr::Pow(self.shared(), rhs.shared());
        self
    }

    /// Checks if expression is exactly zero (constant 0.0).
    ///
    /// # Returns
    /// true if expression is Const(0.0), false otherwise
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    /// Checks if expression is exactly one (constant 1.0).
    ///
    /// Together with is_zero this drives the simplification built into
    /// differentiation: factors of one and terms of zero are elided while the
    /// derivative is constructed.
    ///
    /// # Returns
    /// true if expression is Const(1.0), false otherwise
    pub fn is_one(&self) -> bool {
        match self {
            Expr::Const(val) => val == &1.0,
            _ => false,
        }
    }
}
