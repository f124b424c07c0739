use super::credentials::{
    CredentialedChecks, DatabaseCredentials, NetbiosIdentity, DATABASE_LOGIN_CHECKS,
    NETBIOS_PLUGIN_ID, SCAN_INFORMATION_PLUGIN_ID,
};
use super::element::Element;
use super::plugin_output::{PluginOutput, PluginSet};
use super::report_item::ReportItem;
use super::scan_document::ScanDocument;
use super::scan_time::{parse_host_timestamp, ScanWindow};
use chrono::{NaiveDateTime, TimeDelta};

/// Finding counts per risk factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskFactorCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
}

impl RiskFactorCounts {
    fn record(&mut self, risk_factor: &str) {
        match risk_factor {
            "Critical" => self.critical += 1,
            "High" => self.high += 1,
            "Medium" => self.medium += 1,
            "Low" => self.low += 1,
            "None" => self.none += 1,
            _ => {}
        }
    }

    /// Element-wise sum, used to reduce per-host counts into a scan total
    pub fn add(self, other: RiskFactorCounts) -> RiskFactorCounts {
        RiskFactorCounts {
            critical: self.critical + other.critical,
            high: self.high + other.high,
            medium: self.medium + other.medium,
            low: self.low + other.low,
            none: self.none + other.none,
        }
    }
}

/// ReportHost view - one scanned (or attempted) target
#[derive(Debug, Clone, Copy)]
pub struct ReportHost<'a> {
    node: &'a Element,
}

impl<'a> ReportHost<'a> {
    pub(crate) fn new(node: &'a Element) -> Self {
        Self { node }
    }

    /// Producer-assigned host name; not necessarily the resolved IP or hostname
    pub fn name(&self) -> &'a str {
        self.node.attribute("name").unwrap_or_default()
    }

    /// Value of a `HostProperties/tag[@name]` entry, `None` if the tag is missing
    pub fn property(&self, name: &str) -> Option<&'a str> {
        self.tags()
            .find(|tag| tag.attribute("name") == Some(name))
            .map(Element::text)
    }

    fn tags(&self) -> impl Iterator<Item = &'a Element> {
        self.node
            .child("HostProperties")
            .into_iter()
            .flat_map(|properties| properties.children_named("tag"))
    }

    /// Lower-cased first DNS label of the `hostname` property, empty when absent
    pub fn resolved_hostname(&self) -> String {
        self.property("hostname")
            .map(|hostname| hostname.to_lowercase())
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    pub fn resolved_ip(&self) -> Option<&'a str> {
        self.property("host-ip")
    }

    pub fn resolved_fqdn(&self) -> Option<String> {
        self.property("host-fqdn").map(str::to_lowercase)
    }

    /// `operating-system` property without list quoting
    ///
    /// Producers wrap the value as `["Linux Kernel 3.10"]`, and some double
    /// escape it as `[&quot;Linux Kernel 3.10&quot;]`. Empty when absent.
    pub fn detected_os(&self) -> String {
        let Some(os) = self.property("operating-system") else {
            return String::new();
        };
        let os = os.trim();
        if os.contains("&quot;") {
            let os = os.strip_prefix('[').unwrap_or(os);
            let os = os.strip_suffix(']').unwrap_or(os);
            let os = os.strip_prefix("&quot;").unwrap_or(os);
            os.strip_suffix("&quot;").unwrap_or(os).to_string()
        } else {
            os.trim_start_matches(['[', '"'])
                .trim_end_matches(['"', ']'])
                .to_string()
        }
    }

    /// Login recorded in any `*login-used` property
    pub fn login_used(&self) -> Option<&'a str> {
        self.tags()
            .filter(|tag| {
                tag.attribute("name")
                    .is_some_and(|name| name.contains("login-used"))
            })
            .map(Element::text)
            .last()
    }

    pub fn report_items(&self) -> impl Iterator<Item = ReportItem<'a>> {
        self.node.children_named("ReportItem").map(ReportItem::new)
    }

    fn occurrences(&self, plugin_id: &str) -> Vec<Option<&'a str>> {
        self.report_items()
            .filter(|item| item.plugin_id() == Some(plugin_id))
            .map(|item| item.plugin_output())
            .collect()
    }

    /// Output of a plugin for this host
    ///
    /// When the plugin reported more than once, the last occurrence wins.
    /// When it did not report at all, the policy's plugin set decides between
    /// `NotEnabled`, `NotInReport` and `EnablementUnknown`.
    pub fn plugin_output(&self, document: &ScanDocument, plugin_id: &str) -> PluginOutput {
        self.plugin_output_in(document.plugin_set().as_ref(), plugin_id)
    }

    /// Like `plugin_output`, but keeps every occurrence, joined with newlines
    pub fn plugin_outputs(&self, document: &ScanDocument, plugin_id: &str) -> PluginOutput {
        PluginOutput::from_all_occurrences(plugin_id, &self.occurrences(plugin_id))
            .unwrap_or_else(|| {
                PluginOutput::for_absent_plugin(plugin_id, document.plugin_set().as_ref())
            })
    }

    /// `plugin_output` against a plugin set the caller already resolved
    pub(crate) fn plugin_output_in(
        &self,
        plugin_set: Option<&PluginSet<'_>>,
        plugin_id: &str,
    ) -> PluginOutput {
        PluginOutput::from_last_occurrence(&self.occurrences(plugin_id))
            .unwrap_or_else(|| PluginOutput::for_absent_plugin(plugin_id, plugin_set))
    }

    pub fn netbios_network_name(&self, document: &ScanDocument) -> NetbiosIdentity {
        NetbiosIdentity::from_plugin_output(&self.plugin_output(document, NETBIOS_PLUGIN_ID))
    }

    /// Scanner address from the `Scanner IP : x` line of plugin 19506
    pub fn scanner_ip(&self, document: &ScanDocument) -> Option<String> {
        self.plugin_output(document, SCAN_INFORMATION_PLUGIN_ID)
            .text()?
            .lines()
            .filter_map(|line| line.split_once("Scanner IP :"))
            .map(|(_, ip)| ip.trim().to_string())
            .last()
    }

    pub fn credentialed_checks(&self, document: &ScanDocument) -> CredentialedChecks {
        self.credentialed_checks_in(document.plugin_set().as_ref())
    }

    pub(crate) fn credentialed_checks_in(
        &self,
        plugin_set: Option<&PluginSet<'_>>,
    ) -> CredentialedChecks {
        CredentialedChecks::from_plugin_output(
            &self.plugin_output_in(plugin_set, SCAN_INFORMATION_PLUGIN_ID),
        )
    }

    pub fn credentialed_checks_db(&self, document: &ScanDocument) -> DatabaseCredentials {
        self.credentialed_checks_db_in(document.plugin_set().as_ref())
    }

    pub(crate) fn credentialed_checks_db_in(
        &self,
        plugin_set: Option<&PluginSet<'_>>,
    ) -> DatabaseCredentials {
        let outputs: Vec<_> = DATABASE_LOGIN_CHECKS
            .iter()
            .map(|(plugin_id, _)| (*plugin_id, self.plugin_output_in(plugin_set, plugin_id)))
            .collect();
        DatabaseCredentials::from_plugin_outputs(&outputs)
    }

    /// Number of report items, counting repeated plugins once per occurrence
    pub fn plugin_count(&self) -> usize {
        self.report_items().count()
    }

    /// Number of items whose `risk_factor` equals `risk_factor` (Critical, High, Medium, Low, None)
    pub fn plugin_count_by_risk(&self, risk_factor: &str) -> usize {
        self.report_items()
            .filter(|item| item.risk_factor() == Some(risk_factor))
            .count()
    }

    pub fn risk_factor_counts(&self) -> RiskFactorCounts {
        self.report_items()
            .filter_map(|item| item.risk_factor())
            .fold(RiskFactorCounts::default(), |mut counts, risk_factor| {
                counts.record(risk_factor);
                counts
            })
    }

    pub fn compliance_plugin_count(&self) -> usize {
        self.report_items().filter(ReportItem::is_compliance).count()
    }

    /// Number of compliance items with the given result (PASSED, FAILED, WARNING, ...)
    pub fn compliance_count_by_result(&self, compliance_result: &str) -> usize {
        self.report_items()
            .filter(|item| item.compliance_result() == Some(compliance_result))
            .count()
    }

    pub fn time_start(&self) -> Option<NaiveDateTime> {
        self.property("HOST_START").and_then(parse_host_timestamp)
    }

    pub fn time_end(&self) -> Option<NaiveDateTime> {
        self.property("HOST_END").and_then(parse_host_timestamp)
    }

    /// Scan window of this host, `None` without a start time
    pub fn time_window(&self) -> Option<ScanWindow> {
        self.time_start()
            .map(|start| ScanWindow::new(start, self.time_end()))
    }

    /// End minus start, `None` when either timestamp is missing
    pub fn time_elapsed(&self) -> Option<TimeDelta> {
        self.time_window()?.elapsed()
    }
}
