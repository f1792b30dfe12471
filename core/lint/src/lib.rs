pub mod paragraph;
pub mod table;
pub mod rules;
pub mod width;
pub mod ops;
pub mod linter;

pub use paragraph::*;
pub use table::*;
pub use rules::*;
pub use width::*;
pub use ops::*;
pub use linter::*;
