pub mod board;
pub mod queries;
pub mod types;

pub use board::*;
pub use queries::*;
pub use types::*;
