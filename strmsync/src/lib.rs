mod cli;
mod report;
pub use cli::*;
pub use report::*;
pub mod fetch;
pub mod logging;
pub mod reconcile;
