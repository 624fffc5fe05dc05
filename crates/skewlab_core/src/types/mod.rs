//! Contract and result types shared across the kernel.

pub mod contract;
pub mod error;
pub mod results;
pub mod time;

pub use contract::{OptionKind, OptionSpec, OptionSpecBuilder};
pub use error::SpecError;
pub use results::{ImpliedVolResult, PricingResult};
