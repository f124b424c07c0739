//! Builder for constructing view rows from parsed scan files
//!
//! This is the only place the application layer walks the domain accessors;
//! formatters only ever see the flat views.

use super::host_view::HostView;
use super::scan_views::{FileView, PolicySummaryView, ScanSummaryView, SourceView};
use crate::nessus::domain::{ReportHost, ScanDocument, ScanFile, ScanWindow};
use chrono::NaiveDateTime;

const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builder for the rows of `ReportReadModel`
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// # Arguments
    /// * `file_name` - Name as given by the user, used as the row label
    /// * `path` - Absolute path the file was read from
    /// * `size` - Size in bytes
    pub fn file_view(file_name: &str, path: &std::path::Path, size: u64) -> FileView {
        FileView {
            file_name: file_name.to_string(),
            path: path.display().to_string(),
            size,
            size_human: crate::nessus::domain::human_size(size),
        }
    }

    pub fn scan_summary(file_name: &str, file: &ScanFile) -> ScanSummaryView {
        let document = file.document();
        let totals = document.risk_factor_totals();
        let window = document.scan_window();

        ScanSummaryView {
            file_name: file_name.to_string(),
            report_name: document.report_name().map(str::to_string),
            target_hosts: document.target_host_count(),
            scanned_hosts: document.scanned_host_count(),
            not_scanned_hosts: document.not_scanned_host_count(),
            credentialed_hosts: document.credentialed_host_count(),
            credentialed_databases: document.credentialed_db_count(),
            critical: totals.critical,
            high: totals.high,
            medium: totals.medium,
            low: totals.low,
            none: totals.none,
            scan_start: window.map(|w| Self::timestamp(w.start())),
            scan_end: window.and_then(|w| w.end()).map(Self::timestamp),
            elapsed: window.as_ref().and_then(ScanWindow::elapsed_display),
        }
    }

    pub fn source(file_name: &str, file: &ScanFile) -> SourceView {
        SourceView {
            file_name: file_name.to_string(),
            source: file.document().scan_file_source().to_string(),
        }
    }

    pub fn policy_summary(file_name: &str, file: &ScanFile) -> PolicySummaryView {
        let document = file.document();
        let owned = |value: Option<&str>| value.map(str::to_string);

        PolicySummaryView {
            file_name: file_name.to_string(),
            policy_name: owned(document.policy_name()),
            max_hosts: owned(document.policy_max_hosts()),
            max_checks: owned(document.policy_max_checks()),
            checks_timeout: owned(document.policy_checks_read_timeout()),
            plugins_number: document.plugin_set_count(),
            reverse_lookup: owned(document.reverse_lookup()),
            login: document.policy_login_specified(),
            db_sid: owned(document.policy_db_sid()),
            db_port: owned(document.policy_db_port()),
        }
    }

    pub fn hosts(file_name: &str, file: &ScanFile) -> Vec<HostView> {
        let document = file.document();
        document
            .report_hosts()
            .map(|host| Self::host(file_name, document, host))
            .collect()
    }

    fn host(file_name: &str, document: &ScanDocument, host: ReportHost<'_>) -> HostView {
        let counts = host.risk_factor_counts();
        let netbios = host.netbios_network_name(document);
        let window = host.time_window();

        HostView {
            file_name: file_name.to_string(),
            name: host.name().to_string(),
            ip: host.resolved_ip().map(str::to_string),
            fqdn: host.resolved_fqdn(),
            hostname: host.resolved_hostname(),
            operating_system: host.detected_os(),
            netbios_computer_name: netbios.computer_name,
            netbios_domain_name: netbios.domain_name,
            scanner_ip: host.scanner_ip(document),
            login_used: host.login_used().map(str::to_string),
            credentialed_checks: host.credentialed_checks(document).to_string(),
            credentialed_checks_db: host.credentialed_checks_db(document).to_string(),
            plugins: host.plugin_count(),
            critical: counts.critical,
            high: counts.high,
            medium: counts.medium,
            low: counts.low,
            none: counts.none,
            compliance_plugins: host.compliance_plugin_count(),
            compliance_passed: host.compliance_count_by_result("PASSED"),
            compliance_failed: host.compliance_count_by_result("FAILED"),
            compliance_warning: host.compliance_count_by_result("WARNING"),
            start: host.time_start().map(Self::timestamp),
            end: host.time_end().map(Self::timestamp),
            elapsed: window.as_ref().and_then(ScanWindow::elapsed_display),
        }
    }

    fn timestamp(value: NaiveDateTime) -> String {
        value.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nessus::domain::RawScanFile;
    use std::path::{Path, PathBuf};

    const SCAN: &str = r#"<?xml version="1.0" ?>
<NessusClientData_v2>
<Policy><policyName>Internal</policyName><Preferences><ServerPreferences>
<preference><name>TARGET</name><value>10.0.0.1-10.0.0.3</value></preference>
<preference><name>max_hosts</name><value>30</value></preference>
<preference><name>sc_version</name><value>6.1.0</value></preference>
<preference><name>plugin_set</name><value>19506;10150;</value></preference>
</ServerPreferences><PluginsPreferences>
<item><fullName>SSH settings[entry]:SSH user name :</fullName><selectedValue>scanner</selectedValue></item>
</PluginsPreferences></Preferences></Policy>
<Report name="Internal weekly" xmlns:cm="http://www.nessus.org/cm">
<ReportHost name="10.0.0.1"><HostProperties>
<tag name="HOST_START">Thu Feb 25 10:00:00 2021</tag>
<tag name="HOST_END">Thu Feb 25 10:20:00 2021</tag>
<tag name="host-ip">10.0.0.1</tag>
<tag name="host-fqdn">DB01.corp.local</tag>
<tag name="operating-system">["Linux Kernel 5.4"]</tag>
</HostProperties>
<ReportItem pluginID="19506" pluginName="Nessus Scan Information"><risk_factor>None</risk_factor><plugin_output>Scanner IP : 10.0.0.250
Credentialed checks : yes, as 'scanner' via ssh</plugin_output></ReportItem>
<ReportItem pluginID="1001" pluginName="Bad"><risk_factor>High</risk_factor></ReportItem>
</ReportHost>
</Report>
</NessusClientData_v2>"#;

    fn scan_file() -> ScanFile {
        ScanFile::parse(RawScanFile::new(
            PathBuf::from("/scans/internal.nessus"),
            SCAN.len() as u64,
            SCAN.to_string(),
        ))
        .unwrap()
    }

    #[test]
    fn test_file_view() {
        let view =
            ReportReadModelBuilder::file_view("internal.nessus", Path::new("/scans/internal.nessus"), 1536);
        assert_eq!(view.size_human, "1.5 KiB");
        assert_eq!(view.path, "/scans/internal.nessus");
    }

    #[test]
    fn test_scan_summary() {
        let view = ReportReadModelBuilder::scan_summary("internal.nessus", &scan_file());
        assert_eq!(view.report_name.as_deref(), Some("Internal weekly"));
        assert_eq!(view.target_hosts, Some(3));
        assert_eq!(view.scanned_hosts, 1);
        assert_eq!(view.not_scanned_hosts, Some(2));
        assert_eq!(view.credentialed_hosts, Some(1));
        assert_eq!(view.credentialed_databases, 0);
        assert_eq!((view.high, view.none), (1, 1));
        assert_eq!(view.scan_start.as_deref(), Some("2021-02-25 10:00:00"));
        assert_eq!(view.elapsed.as_deref(), Some("0:20:00"));
    }

    #[test]
    fn test_source_and_policy_summary() {
        let file = scan_file();
        assert_eq!(
            ReportReadModelBuilder::source("internal.nessus", &file).source,
            "Tenable.sc"
        );

        let policy = ReportReadModelBuilder::policy_summary("internal.nessus", &file);
        assert_eq!(policy.policy_name.as_deref(), Some("Internal"));
        assert_eq!(policy.max_hosts.as_deref(), Some("30"));
        assert_eq!(policy.max_checks, None);
        assert_eq!(policy.plugins_number, Some(2));
        assert_eq!(policy.login.as_deref(), Some("scanner"));
    }

    #[test]
    fn test_hosts() {
        let hosts = ReportReadModelBuilder::hosts("internal.nessus", &scan_file());
        assert_eq!(hosts.len(), 1);
        let host = &hosts[0];
        assert_eq!(host.name, "10.0.0.1");
        assert_eq!(host.fqdn.as_deref(), Some("db01.corp.local"));
        assert_eq!(host.operating_system, "Linux Kernel 5.4");
        assert_eq!(host.scanner_ip.as_deref(), Some("10.0.0.250"));
        assert_eq!(host.credentialed_checks, "yes, as 'scanner' via ssh");
        assert_eq!(host.credentialed_checks_db, "no");
        assert_eq!(host.plugins, 2);
        assert_eq!(host.elapsed.as_deref(), Some("0:20:00"));
        assert_eq!(host.netbios_computer_name, "");
    }
}
