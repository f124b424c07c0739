//! nessus-file-reader - read-only queries over Nessus scan result files
//!
//! This library loads `.nessus` (NessusClientData_v2) files and answers
//! questions about them: scanned and not scanned targets, credentialed
//! checks, plugin outputs, risk factor counts, policy settings and scan
//! times. It can also split a file into parts with a bounded number of
//! hosts. It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`nessus`): Scan document model, score policies and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nessus_file_reader::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = InspectScanUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let sections = InspectSections {
//!     scan_summary: true,
//!     ..Default::default()
//! };
//! let request = InspectRequest::new(vec![PathBuf::from("scan.nessus")], sections);
//! let response = use_case.execute(request)?;
//!
//! let output = TableFormatter::new().format(&response.model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The domain can also be used directly on an in-memory document:
//!
//! ```
//! use nessus_file_reader::prelude::*;
//!
//! let xml = r#"<NessusClientData_v2><Report name="weekly">
//!   <ReportHost name="10.0.0.1"><HostProperties/></ReportHost>
//! </Report></NessusClientData_v2>"#;
//! let document = ScanDocument::parse(xml).unwrap();
//! assert_eq!(document.report_name(), Some("weekly"));
//! assert_eq!(document.scanned_host_names(), vec!["10.0.0.1"]);
//! ```

pub mod adapters;
pub mod application;
pub mod nessus;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemPartWriter, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::application::dto::{
        InspectRequest, InspectResponse, InspectSections, OutputFormat, SplitRequest,
        SplitResponse,
    };
    pub use crate::application::read_models::ReportReadModel;
    pub use crate::application::use_cases::{InspectScanUseCase, SplitReportUseCase};
    pub use crate::nessus::domain::{
        CredentialedChecks, DatabaseCredentials, PluginOutput, RawScanFile, ReportHost,
        ReportItem, ScanDocument, ScanFile, ScanFileSource, ScanWindow,
    };
    pub use crate::nessus::policies::{ScoreLabel, SeverityPolicy};
    pub use crate::nessus::services::{report_splitter, AddressRange};
    pub use crate::ports::outbound::{
        OutputPresenter, PartWriter, ProgressReporter, ReportFormatter, ScanFileReader,
    };
    pub use crate::shared::error::{ExitCode, NessusError};
    pub use crate::shared::Result;
}
