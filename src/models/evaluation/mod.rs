pub mod criteria;
pub mod queries;
pub mod ranking;
pub mod types;

pub use criteria::*;
pub use queries::*;
pub use ranking::*;
pub use types::*;
