/// Application layer - Use cases, DTOs and factories
///
/// This layer orchestrates the domain services and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
