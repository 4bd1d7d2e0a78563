pub mod assignment;
pub mod camp;
pub mod evaluation;
pub mod participant;
pub mod user;
