use crate::application::dto::{SplitRequest, SplitResponse};
use crate::nessus::services::report_splitter;
use crate::ports::outbound::{PartWriter, ProgressReporter, ScanFileReader};
use crate::shared::Result;

/// SplitReportUseCase - splits a scan file into parts of at most N hosts
///
/// Parts are written next to the source as `<stem>_part<N>.<ext>`. The
/// source file itself is never modified.
///
/// # Type Parameters
/// * `R` - ScanFileReader implementation
/// * `W` - PartWriter implementation
/// * `P` - ProgressReporter implementation
pub struct SplitReportUseCase<R, W, P> {
    scan_file_reader: R,
    part_writer: W,
    progress_reporter: P,
}

impl<R, W, P> SplitReportUseCase<R, W, P>
where
    R: ScanFileReader,
    W: PartWriter,
    P: ProgressReporter,
{
    pub fn new(scan_file_reader: R, part_writer: W, progress_reporter: P) -> Self {
        Self {
            scan_file_reader,
            part_writer,
            progress_reporter,
        }
    }

    /// Executes the split
    ///
    /// Every part is built in memory before the first one is written, so a
    /// malformed source leaves no partial output behind.
    pub fn execute(&self, request: SplitRequest) -> Result<SplitResponse> {
        self.progress_reporter
            .report(&format!("📖 Loading scan file: {}", request.file.display()));
        let raw = self.scan_file_reader.read_scan_file(&request.file)?;

        let host_count = report_splitter::count_hosts(&raw.content)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} host(s)", host_count));

        let parts = report_splitter::split(&raw.content, request.batch_size)?;
        let total = parts.len();
        let mut written = Vec::with_capacity(total);

        for (index, part) in parts.iter().enumerate() {
            let path = report_splitter::part_path(&raw.path, index + 1);
            let label = path.display().to_string();
            self.progress_reporter
                .report_progress(index, total, Some(label.as_str()));
            self.part_writer.write_part(&path, part)?;
            written.push(path);
        }
        self.progress_reporter.report_progress(total, total, None);

        self.progress_reporter.report_completion(&format!(
            "✅ Split {} host(s) into {} file(s) of at most {} host(s)",
            host_count, total, request.batch_size
        ));

        Ok(SplitResponse::new(written, host_count))
    }
}
