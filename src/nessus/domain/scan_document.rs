use super::credentials::DATABASE_LOGIN_CHECKS;
use super::credentials::{CredentialedChecks, DatabaseCredentials, SCAN_INFORMATION_PLUGIN_ID};
use super::element::Element;
use super::report_host::{ReportHost, RiskFactorCounts};
use super::scan_time::ScanWindow;
use crate::shared::Result;
use std::collections::HashSet;

/// Parsed scan file (`NessusClientData_v2`)
///
/// Owns the whole element tree; hosts and findings are borrowed views into
/// it. Nothing is cached, so a document can be queried from several threads
/// at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDocument {
    root: Element,
}

impl ScanDocument {
    /// Parses the text of a scan file
    ///
    /// Fails only when the text is not well-formed XML. Missing sections are
    /// reported by the individual queries.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = Element::parse_document(xml)?;
        Ok(Self { root })
    }

    pub(super) fn root(&self) -> &Element {
        &self.root
    }

    /// Name of the root element, `NessusClientData_v2` for scanner exports
    pub fn root_name(&self) -> &str {
        self.root.name()
    }

    pub fn report_name(&self) -> Option<&str> {
        self.root.child("Report")?.attribute("name")
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.root.find("Policy/policyName").map(Element::text)
    }

    pub fn report_hosts(&self) -> impl Iterator<Item = ReportHost<'_>> {
        self.root
            .child("Report")
            .into_iter()
            .flat_map(|report| report.children_named("ReportHost"))
            .map(ReportHost::new)
    }

    /// Host names as they appear in the report, in document order
    pub fn scanned_host_names(&self) -> Vec<&str> {
        self.report_hosts().map(|host| host.name()).collect()
    }

    pub fn scanned_host_count(&self) -> usize {
        self.report_hosts().count()
    }

    /// Targets that do not appear as a host in the report
    ///
    /// Kept in target order without duplicates. `None` when the policy
    /// records no targets, which is not the same as "every target scanned".
    pub fn not_scanned_hosts(&self) -> Option<Vec<String>> {
        let targets = self.target_hosts()?;
        let scanned: HashSet<&str> = self.report_hosts().map(|host| host.name()).collect();
        let mut seen = HashSet::new();
        Some(
            targets
                .into_iter()
                .filter(|target| !scanned.contains(target.as_str()))
                .filter(|target| seen.insert(target.clone()))
                .collect(),
        )
    }

    pub fn not_scanned_host_count(&self) -> Option<usize> {
        self.not_scanned_hosts().map(|hosts| hosts.len())
    }

    /// Hosts on which credentialed checks ran
    ///
    /// `None` when no host reported the scan information plugin, since the
    /// count would then say nothing about credentials.
    pub fn credentialed_host_count(&self) -> Option<usize> {
        let plugin_set = self.plugin_set();
        let mut reported = false;
        let mut count = 0;
        for host in self.report_hosts() {
            let output = host.plugin_output_in(plugin_set.as_ref(), SCAN_INFORMATION_PLUGIN_ID);
            if output.is_found() {
                reported = true;
            }
            if CredentialedChecks::from_plugin_output(&output).is_yes() {
                count += 1;
            }
        }
        reported.then_some(count)
    }

    /// Database login checks, over all hosts, that confirmed credentialed access
    pub fn credentialed_db_count(&self) -> usize {
        let plugin_set = self.plugin_set();
        self.report_hosts()
            .map(|host| {
                DATABASE_LOGIN_CHECKS
                    .iter()
                    .filter(|(plugin_id, _)| {
                        let output = host.plugin_output_in(plugin_set.as_ref(), plugin_id);
                        matches!(
                            DatabaseCredentials::from_plugin_outputs(&[(*plugin_id, output)]),
                            DatabaseCredentials::Yes { .. }
                        )
                    })
                    .count()
            })
            .sum()
    }

    /// Earliest host start to latest host end; `None` when no host carries a start time
    pub fn scan_window(&self) -> Option<ScanWindow> {
        self.report_hosts()
            .filter_map(|host| host.time_window())
            .reduce(ScanWindow::merge)
    }

    /// Findings per risk factor over every host
    pub fn risk_factor_totals(&self) -> RiskFactorCounts {
        self.report_hosts()
            .map(|host| host.risk_factor_counts())
            .fold(RiskFactorCounts::default(), RiskFactorCounts::add)
    }
}
