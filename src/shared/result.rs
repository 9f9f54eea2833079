/// Result alias used throughout the crate.
/// Domain errors are `DiffError` values carried inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
