use crate::application::dto::{InspectRequest, InspectResponse, InspectSections};
use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
use crate::nessus::domain::ScanFile;
use crate::ports::outbound::{ProgressReporter, ScanFileReader};
use crate::shared::error::NessusError;
use crate::shared::Result;
use std::path::Path;

/// InspectScanUseCase - read-only queries over one or more scan files
///
/// Files are processed in the order given and the first failure aborts the
/// whole query, so a result never silently misses a file.
///
/// # Type Parameters
/// * `R` - ScanFileReader implementation
/// * `P` - ProgressReporter implementation
pub struct InspectScanUseCase<R, P> {
    scan_file_reader: R,
    progress_reporter: P,
}

impl<R, P> InspectScanUseCase<R, P>
where
    R: ScanFileReader,
    P: ProgressReporter,
{
    pub fn new(scan_file_reader: R, progress_reporter: P) -> Self {
        Self {
            scan_file_reader,
            progress_reporter,
        }
    }

    /// Executes the query
    ///
    /// # Errors
    /// `Validation` when no file or no section was requested; otherwise the
    /// first read or parse failure
    pub fn execute(&self, request: InspectRequest) -> Result<InspectResponse> {
        if request.files.is_empty() {
            return Err(NessusError::Validation {
                message: "at least one scan file is required".to_string(),
            }
            .into());
        }
        if request.sections.is_empty() {
            return Err(NessusError::Validation {
                message: "no output section selected".to_string(),
            }
            .into());
        }

        let total = request.files.len();
        let mut model = ReportReadModel::default();

        for (index, path) in request.files.iter().enumerate() {
            if total > 1 {
                let name = display_name(path);
                self.progress_reporter
                    .report_progress(index, total, Some(name.as_str()));
            }
            self.inspect_file(path, request.sections, &mut model)?;
        }

        if total > 1 {
            self.progress_reporter.report_progress(total, total, None);
        }

        Ok(InspectResponse::new(model, total))
    }

    fn inspect_file(
        &self,
        path: &Path,
        sections: InspectSections,
        model: &mut ReportReadModel,
    ) -> Result<()> {
        self.progress_reporter
            .report(&format!("📖 Loading scan file: {}", path.display()));

        let raw = self.scan_file_reader.read_scan_file(path)?;
        let name = display_name(path);

        if sections.file_size {
            model
                .files
                .push(ReportReadModelBuilder::file_view(&name, &raw.path, raw.size));
        }
        if !sections.needs_document() {
            return Ok(());
        }

        let file = ScanFile::parse(raw)?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} host(s)",
            file.document().scanned_host_count()
        ));

        if sections.scan_summary {
            model
                .scan_summaries
                .push(ReportReadModelBuilder::scan_summary(&name, &file));
        }
        if sections.scan_file_source {
            model
                .scan_file_sources
                .push(ReportReadModelBuilder::source(&name, &file));
        }
        if sections.policy_summary {
            model
                .policy_summaries
                .push(ReportReadModelBuilder::policy_summary(&name, &file));
        }
        if sections.hosts {
            model
                .hosts
                .extend(ReportReadModelBuilder::hosts(&name, &file));
        }
        Ok(())
    }
}

/// File name without directories, as shown in the first column of every table
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
