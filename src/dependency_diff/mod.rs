/// Domain layer - Pure business logic for dependency comparison
///
/// Nothing in this layer performs I/O; manifests arrive already parsed
/// and diffs leave as plain values.
pub mod domain;
pub mod services;
