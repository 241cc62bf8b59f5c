pub mod backtrack;
pub mod shortcuts;
