use super::plugin_output::PluginOutput;
use std::fmt;

/// "Nessus Scan Information", reports whether credentialed checks ran
pub const SCAN_INFORMATION_PLUGIN_ID: &str = "19506";

/// Database login checks and the sentence each one prints on success
pub const DATABASE_LOGIN_CHECKS: [(&str, &str); 2] = [
    (
        "91825",
        "Credentialed checks have been enabled for Oracle RDBMS server",
    ),
    ("91827", "Credentialed checks have been enabled for MSSQL server"),
];

const CREDENTIALED_CHECKS_MARKER: &str = "Credentialed checks :";

/// Credentialed check status of a host, read from plugin 19506
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialedChecks {
    /// Credentialed checks ran; holds the scanner's wording,
    /// e.g. `yes, as 'root' via ssh`
    Yes(String),
    No,
    /// Plugin 19506 reported without a "Credentialed checks" line, or the
    /// file does not record whether it was enabled
    Undetermined,
}

impl CredentialedChecks {
    pub fn from_plugin_output(output: &PluginOutput) -> Self {
        let text = match output {
            PluginOutput::Found(text) => text,
            PluginOutput::EnablementUnknown => return CredentialedChecks::Undetermined,
            PluginOutput::NoOutput | PluginOutput::NotEnabled | PluginOutput::NotInReport => {
                return CredentialedChecks::No
            }
        };

        let value = text
            .lines()
            .filter_map(|line| line.split_once(CREDENTIALED_CHECKS_MARKER))
            .map(|(_, value)| value.replace("&apos;", "").trim().to_string())
            .last();

        match value {
            Some(value) if value.starts_with("yes") => CredentialedChecks::Yes(value),
            Some(_) => CredentialedChecks::No,
            None => CredentialedChecks::Undetermined,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, CredentialedChecks::Yes(_))
    }
}

impl fmt::Display for CredentialedChecks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialedChecks::Yes(value) => write!(f, "{}", value),
            CredentialedChecks::No => write!(f, "no"),
            CredentialedChecks::Undetermined => Ok(()),
        }
    }
}

/// Credentialed database check status of a host, read from the database login checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseCredentials {
    /// Confirmed by the given plugin; the first confirming check in
    /// `DATABASE_LOGIN_CHECKS` order is reported
    Yes { plugin_id: &'static str },
    /// At least one database login check is unavailable for the host and none confirmed
    No,
    /// Nothing confirmed and nothing known to be unavailable, e.g. the file
    /// does not record which plugins were enabled
    Undetermined,
}

impl DatabaseCredentials {
    /// # Arguments
    /// * `outputs` - Output of each check in `DATABASE_LOGIN_CHECKS`, same order
    pub fn from_plugin_outputs(outputs: &[(&'static str, PluginOutput)]) -> Self {
        let confirmed = outputs.iter().find(|(plugin_id, output)| {
            let phrase = DATABASE_LOGIN_CHECKS
                .iter()
                .find(|(id, _)| id == plugin_id)
                .map(|(_, phrase)| *phrase);
            match (phrase, output.text()) {
                (Some(phrase), Some(text)) => text.contains(phrase),
                _ => false,
            }
        });

        if let Some((plugin_id, _)) = confirmed {
            DatabaseCredentials::Yes {
                plugin_id: *plugin_id,
            }
        } else if outputs.iter().any(|(_, output)| {
            matches!(
                output,
                PluginOutput::NoOutput | PluginOutput::NotEnabled | PluginOutput::NotInReport
            )
        }) {
            DatabaseCredentials::No
        } else {
            DatabaseCredentials::Undetermined
        }
    }
}

impl fmt::Display for DatabaseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseCredentials::Yes { plugin_id } => {
                write!(f, "yes, based on plugin id {}", plugin_id)
            }
            DatabaseCredentials::No => write!(f, "no"),
            DatabaseCredentials::Undetermined => Ok(()),
        }
    }
}

/// NetBIOS identity reported by plugin 10150
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetbiosIdentity {
    pub computer_name: String,
    pub domain_name: String,
}

/// "Windows NetBIOS / SMB Remote Host Information Disclosure"
pub const NETBIOS_PLUGIN_ID: &str = "10150";

impl NetbiosIdentity {
    /// Reads lines such as `  WIN-SRV01        = Computer name`
    pub fn from_plugin_output(output: &PluginOutput) -> Self {
        let mut identity = NetbiosIdentity::default();
        for line in output.text().unwrap_or_default().lines() {
            let name = || {
                line.split('=')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_lowercase()
            };
            if line.contains("Computer name") {
                identity.computer_name = name();
            }
            if line.contains("Workgroup / Domain name") {
                identity.domain_name = name();
            }
        }
        identity
    }
}
