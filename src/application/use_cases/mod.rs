/// Use cases - Application business logic
///
/// Each use case represents a specific application operation that
/// orchestrates domain logic and infrastructure through ports.
mod inspect_scan;
mod split_report;

pub use inspect_scan::InspectScanUseCase;
pub use split_report::SplitReportUseCase;
