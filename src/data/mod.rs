//! Input loading for perturbation results

pub mod loader;

pub use loader::{load_results, parse_results, ResultsFile};
