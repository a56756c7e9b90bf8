//! different utility modules used throughout the project
/// tiny module to save evaluated curves into file
pub mod logger;
/// tiny module to plot expression curves
pub mod plots;
