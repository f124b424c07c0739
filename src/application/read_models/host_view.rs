//! Host view struct, one row per report host

use super::report_read_model::{cell, TableSection};
use serde::Serialize;

/// Per-host identity, credential status, finding counts and scan window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostView {
    pub file_name: String,
    pub name: String,
    pub ip: Option<String>,
    pub fqdn: Option<String>,
    pub hostname: String,
    pub operating_system: String,
    pub netbios_computer_name: String,
    pub netbios_domain_name: String,
    pub scanner_ip: Option<String>,
    pub login_used: Option<String>,
    /// Empty when the scan information plugin gave no verdict
    pub credentialed_checks: String,
    pub credentialed_checks_db: String,
    pub plugins: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
    pub compliance_plugins: usize,
    pub compliance_passed: usize,
    pub compliance_failed: usize,
    pub compliance_warning: usize,
    pub start: Option<String>,
    pub end: Option<String>,
    pub elapsed: Option<String>,
}

impl TableSection for HostView {
    const TITLE: &'static str = "Hosts";
    const HEADERS: &'static [&'static str] = &[
        "File name",
        "Host",
        "IP",
        "FQDN",
        "OS",
        "CC",
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
            self.name.clone(),
            cell(&self.ip),
            cell(&self.fqdn),
            self.operating_system.clone(),
            self.credentialed_checks.clone(),
            self.critical.to_string(),
            self.high.to_string(),
            self.medium.to_string(),
            self.low.to_string(),
            self.none.to_string(),
            cell(&self.elapsed),
        ]
    }
}
