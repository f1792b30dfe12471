pub mod error;
pub mod lint;
pub mod finding;
pub mod config;

pub use error::*;
pub use lint::*;
pub use finding::*;
pub use config::*;
