//! examples of usage of RustedSymDiff
/// Design pattern demos examples (ledger, render backends, graph walks)
pub mod demo_examples;
/// Symbolic operations examples
pub mod symbolic_examples;
