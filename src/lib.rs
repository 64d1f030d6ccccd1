pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod sampler;

pub use error::{FitError, Result};
pub use models::{MetabolicResult, PlanResult, UserProfile};
pub use report::Report;
