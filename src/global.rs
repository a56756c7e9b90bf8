//! Crate-wide numeric constants.

/// Scale factor applied to the grid spacing when choosing the finite difference step.
pub const STEP_SCALE: f64 = 1.0 / 1e4;

/// Default norm tolerance when comparing analytical and numerical derivatives.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
