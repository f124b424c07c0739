/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back out,
/// keeping the domain types out of the adapters' signatures.
mod inspect_request;
mod inspect_response;
mod output_format;
mod split_request;
mod split_response;

pub use inspect_request::{InspectRequest, InspectSections};
pub use inspect_response::InspectResponse;
pub use output_format::OutputFormat;
pub use split_request::SplitRequest;
pub use split_response::SplitResponse;
