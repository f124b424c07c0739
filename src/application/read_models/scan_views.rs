//! Scan-level view structs, one row per scan file

use super::report_read_model::{cell, TableSection};
use serde::Serialize;

/// File name and size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileView {
    /// Name as given on the command line
    pub file_name: String,
    /// Absolute path
    pub path: String,
    pub size: u64,
    pub size_human: String,
}

impl TableSection for FileView {
    const TITLE: &'static str = "Files";
    const HEADERS: &'static [&'static str] = &["File name", "Size"];

    fn cells(&self) -> Vec<String> {
        vec![self.file_name.clone(), self.size_human.clone()]
    }
}

/// Scan summary: host counts, credentialed hosts and risk totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummaryView {
    pub file_name: String,
    pub report_name: Option<String>,
    pub target_hosts: Option<usize>,
    pub scanned_hosts: usize,
    pub not_scanned_hosts: Option<usize>,
    pub credentialed_hosts: Option<usize>,
    pub credentialed_databases: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
    pub scan_start: Option<String>,
    pub scan_end: Option<String>,
    pub elapsed: Option<String>,
}

impl TableSection for ScanSummaryView {
    const TITLE: &'static str = "Scan summary";
    const HEADERS: &'static [&'static str] = &[
        "File name",
        "Report name",
        "TH",
        "SH",
        "NSH",
        "CC",
        "CDB",
        "C",
        "H",
        "M",
        "L",
        "N",
        "Elapsed",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.file_name.clone(),
            cell(&self.report_name),
            cell(&self.target_hosts),
            self.scanned_hosts.to_string(),
            cell(&self.not_scanned_hosts),
            cell(&self.credentialed_hosts),
            self.credentialed_databases.to_string(),
            self.critical.to_string(),
            self.high.to_string(),
            self.medium.to_string(),
            self.low.to_string(),
            self.none.to_string(),
            cell(&self.elapsed),
        ]
    }

    fn legend() -> &'static [&'static str] {
        &[
            "Legend for scan summary:",
            "File name - nessus file name",
            "Report name - report name for given nessus file name",
            "TH - number of target hosts",
            "SH - number of scanned hosts",
            "NSH - number of target hosts that were not scanned",
            "CC - number of hosts scanned with credentials (Credentialed checks yes in Plugin ID 19506)",
            "CDB - number of databases scanned with credentials (Plugin IDs 91825, 91827)",
            "C - number of plugins with Critical risk factor for whole scan",
            "H - number of plugins with High risk factor for whole scan",
            "M - number of plugins with Medium risk factor for whole scan",
            "L - number of plugins with Low risk factor for whole scan",
            "N - number of plugins with None risk factor for whole scan",
            "Elapsed - earliest host start to latest host end (H:MM:SS)",
        ]
    }
}

/// Product that produced the scan file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceView {
    pub file_name: String,
    pub source: String,
}

impl TableSection for SourceView {
    const TITLE: &'static str = "Scan file source";
    const HEADERS: &'static [&'static str] = &["File name", "Source"];

    fn cells(&self) -> Vec<String> {
        vec![self.file_name.clone(), self.source.clone()]
    }
}

/// Policy settings recorded in the scan file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySummaryView {
    pub file_name: String,
    pub policy_name: Option<String>,
    pub max_hosts: Option<String>,
    pub max_checks: Option<String>,
    pub checks_timeout: Option<String>,
    pub plugins_number: Option<usize>,
    pub reverse_lookup: Option<String>,
    pub login: Option<String>,
    pub db_sid: Option<String>,
    pub db_port: Option<String>,
}

impl TableSection for PolicySummaryView {
    const TITLE: &'static str = "Policy summary";
    const HEADERS: &'static [&'static str] = &[
        "File name",
        "Policy name",
        "Max hosts",
        "Max checks",
        "Checks timeout",
        "Plugins number",
        "Login",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.file_name.clone(),
            cell(&self.policy_name),
            cell(&self.max_hosts),
            cell(&self.max_checks),
            cell(&self.checks_timeout),
            cell(&self.plugins_number),
            cell(&self.login),
        ]
    }
}
