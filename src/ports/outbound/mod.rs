/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod output_presenter;
pub mod part_writer;
pub mod progress_reporter;
pub mod scan_file_reader;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use part_writer::PartWriter;
pub use progress_reporter::ProgressReporter;
pub use scan_file_reader::ScanFileReader;
