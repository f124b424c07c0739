//! Report read model for query output
//!
//! Every section is a list of flat rows, one per scan file (or per host for
//! the host section). Formatters render each non-empty section as a table.

use super::host_view::HostView;
use super::scan_views::{FileView, PolicySummaryView, ScanSummaryView, SourceView};
use serde::Serialize;

/// A view that can be rendered as one row of a titled table
pub trait TableSection {
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];

    /// Cells in `HEADERS` order; absent values are empty strings
    fn cells(&self) -> Vec<String>;

    /// Optional lines printed under the table
    fn legend() -> &'static [&'static str] {
        &[]
    }
}

/// Main read model for query results
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportReadModel {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scan_summaries: Vec<ScanSummaryView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scan_file_sources: Vec<SourceView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policy_summaries: Vec<PolicySummaryView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostView>,
    /// Print the scan summary legend under the table
    #[serde(skip)]
    pub show_legend: bool,
}

impl ReportReadModel {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.scan_summaries.is_empty()
            && self.scan_file_sources.is_empty()
            && self.policy_summaries.is_empty()
            && self.hosts.is_empty()
    }
}

/// Renders an optional value as a table cell
pub(crate) fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
