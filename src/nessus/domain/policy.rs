use super::element::Element;
use super::plugin_output::PluginSet;
use super::scan_document::ScanDocument;
use crate::nessus::services::address_range;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

const SERVER_PREFERENCES_PATH: &str = "Policy/Preferences/ServerPreferences";
const PLUGIN_PREFERENCES_PATH: &str = "Policy/Preferences/PluginsPreferences";

const VCENTER_USER: &str = "VMware vCenter SOAP API Settings[entry]:VMware vCenter user name :";
const DATABASE_LOGIN: &str = "Database settings[entry]:Login :";
const DATABASE_SID: &str = "Database settings[entry]:Database SID :";
const DATABASE_PORT: &str = "Database settings[entry]:Database port to use :";
const SMB_ACCOUNT: &str = "Login configurations[entry]:SMB account :";
const SMB_DOMAIN: &str = "Login configurations[entry]:SMB domain (optional) :";
const SSH_USER: &str = "SSH settings[entry]:SSH user name :";

/// Product that produced the scan file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanFileSource {
    #[serde(rename = "Tenable.io")]
    TenableIo,
    #[serde(rename = "Tenable.sc")]
    TenableSc,
    Nessus,
}

impl fmt::Display for ScanFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanFileSource::TenableIo => write!(f, "Tenable.io"),
            ScanFileSource::TenableSc => write!(f, "Tenable.sc"),
            ScanFileSource::Nessus => write!(f, "Nessus"),
        }
    }
}

/// Target written as `fqdn[ip]`, as Tenable.sc does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScTarget {
    pub fqdn: String,
    pub ip: String,
}

/// Policy and preference queries
impl ScanDocument {
    fn server_preferences(&self) -> impl Iterator<Item = &Element> {
        self.root()
            .find(SERVER_PREFERENCES_PATH)
            .into_iter()
            .flat_map(|preferences| preferences.children_named("preference"))
    }

    /// Value of a server-wide preference; when the name repeats, the last one wins
    pub fn server_preference(&self, name: &str) -> Option<&str> {
        self.server_preferences()
            .filter(|preference| preference.child_text("name") == Some(name))
            .filter_map(|preference| preference.child_text("value"))
            .last()
    }

    /// Selected value of a plugin preference, addressed by its full name,
    /// e.g. `SSH settings[entry]:SSH user name :`
    pub fn plugin_preference(&self, full_name: &str) -> Option<&str> {
        self.root()
            .find(PLUGIN_PREFERENCES_PATH)?
            .children_named("item")
            .find(|item| item.child_text("fullName") == Some(full_name))?
            .child_text("selectedValue")
    }

    /// Plugins enabled in the policy; `None` when the file does not record them
    pub fn plugin_set(&self) -> Option<PluginSet<'_>> {
        self.server_preference("plugin_set")
            .map(PluginSet::from_preference)
    }

    pub fn plugin_set_count(&self) -> Option<usize> {
        self.plugin_set().map(|set| set.len())
    }

    /// Max simultaneous hosts per scan
    pub fn policy_max_hosts(&self) -> Option<&str> {
        self.server_preference("max_hosts")
    }

    /// Max simultaneous checks per host
    pub fn policy_max_checks(&self) -> Option<&str> {
        self.server_preference("max_checks")
    }

    /// Network timeout in seconds
    pub fn policy_checks_read_timeout(&self) -> Option<&str> {
        self.server_preference("checks_read_timeout")
    }

    /// `yes` when hosts are designated by their DNS name
    pub fn reverse_lookup(&self) -> Option<&str> {
        self.server_preference("reverse_lookup")
    }

    pub fn policy_db_sid(&self) -> Option<&str> {
        self.plugin_preference(DATABASE_SID)
    }

    pub fn policy_db_port(&self) -> Option<&str> {
        self.plugin_preference(DATABASE_PORT)
    }

    /// Login configured in the policy
    ///
    /// Checked in order: vCenter user, database login, SMB account (as
    /// `DOMAIN\account` when an SMB domain is set), SSH user. Empty values
    /// are skipped.
    pub fn policy_login_specified(&self) -> Option<String> {
        let configured = |full_name| self.plugin_preference(full_name).filter(|v| !v.is_empty());

        if let Some(login) = configured(VCENTER_USER).or_else(|| configured(DATABASE_LOGIN)) {
            return Some(login.to_string());
        }
        if let Some(account) = configured(SMB_ACCOUNT) {
            return Some(match configured(SMB_DOMAIN) {
                Some(domain) => format!("{}\\{}", domain, account),
                None => account.to_string(),
            });
        }
        configured(SSH_USER).map(str::to_string)
    }

    /// Tenable.io files carry a site id, Tenable.sc files an sc version;
    /// anything else is a plain Nessus export
    pub fn scan_file_source(&self) -> ScanFileSource {
        if self.server_preference("tenableio.site_id").is_some() {
            ScanFileSource::TenableIo
        } else if self.server_preference("sc_version").is_some() {
            ScanFileSource::TenableSc
        } else {
            ScanFileSource::Nessus
        }
    }

    fn target_value(&self) -> Option<&str> {
        self.server_preference("TARGET")
    }

    /// Target entries as configured: split on commas and lower-cased
    pub fn target_hosts_raw(&self) -> Option<Vec<String>> {
        self.target_value().map(|value| {
            value
                .split(',')
                .map(|entry| entry.to_lowercase())
                .collect()
        })
    }

    /// Target entries resolved to individual hosts
    ///
    /// Entries are trimmed, a Tenable.sc `[ip]` suffix is dropped, and dash
    /// ranges or CIDR blocks are expanded. Order of appearance is kept,
    /// duplicates included. `None` when the policy records no targets.
    pub fn target_hosts(&self) -> Option<Vec<String>> {
        let raw = self.target_hosts_raw()?;
        let mut hosts = Vec::new();
        for entry in raw {
            let entry = entry.split('[').next().unwrap_or_default().trim();
            if entry.is_empty() {
                continue;
            }
            if address_range::looks_like_range(entry) {
                hosts.extend(
                    address_range::expand(entry)
                        .into_iter()
                        .map(|address| address.to_string()),
                );
            } else {
                hosts.push(entry.to_string());
            }
        }
        Some(hosts)
    }

    /// Targets written as `fqdn[ip]`; other entries are skipped
    pub fn target_hosts_sc_fqdn_ip(&self) -> Option<Vec<ScTarget>> {
        let value = self.target_value()?;
        let targets = value
            .split(',')
            .filter_map(|entry| {
                let entry = entry.trim().strip_suffix(']')?;
                let (fqdn, ip) = entry.split_once('[')?;
                (!ip.contains('[')).then(|| ScTarget {
                    fqdn: fqdn.to_string(),
                    ip: ip.to_string(),
                })
            })
            .collect();
        Some(targets)
    }

    pub fn target_host_count(&self) -> Option<usize> {
        self.target_hosts().map(|hosts| hosts.len())
    }

    pub fn target_host_count_unique(&self) -> Option<usize> {
        self.target_hosts()
            .map(|hosts| hosts.iter().collect::<HashSet<_>>().len())
    }
}
