//! Microarchitectural units: cache model and branch predictor.

pub mod cache;
pub mod predictor;

pub use cache::Cache;
pub use predictor::BranchPredictor;
