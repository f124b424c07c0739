/// Mock implementations for testing
mod mock_part_writer;
mod mock_progress_reporter;
mod mock_scan_file_reader;

pub use mock_part_writer::MockPartWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_file_reader::MockScanFileReader;
