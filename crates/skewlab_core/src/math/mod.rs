//! Numerical routines: distribution functions, polynomial fitting, and
//! solver configuration.

pub mod distributions;
pub mod polyfit;
pub mod solver;

pub use polyfit::{FitError, Polynomial};
pub use solver::SolverConfig;
