/// Size served when the requested difficulty is missing or unknown.
pub const DEFAULT_SIZE: usize = 4;

pub fn size_for_difficulty(level: Option<i64>) -> usize {
    match level {
        Some(1) => 4,
        Some(2) => 5,
        Some(3) => 6,
        Some(4) => 7,
        _ => DEFAULT_SIZE,
    }
}
