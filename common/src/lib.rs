pub mod error;
pub mod maze;
