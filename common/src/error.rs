use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("maze size must be at least 1")]
    EmptyGrid,

    /// Every attempt produced a maze that failed a solvability check.
    #[error("no solvable {size}x{size} maze found after {attempts} attempts")]
    Exhausted { size: usize, attempts: usize },
}
