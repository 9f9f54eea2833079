/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the output
/// adapters, keeping the domain layer free of I/O concerns.
mod compare_request;
mod compare_response;
mod output_format;

pub use compare_request::CompareRequest;
pub use compare_response::CompareResponse;
pub use output_format::OutputFormat;
