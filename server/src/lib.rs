pub mod config;
pub mod difficulty;
pub mod error;
pub mod protocol;
pub mod run;
