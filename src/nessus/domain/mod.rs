mod credentials;
mod element;
mod plugin_output;
mod policy;
mod report_host;
mod report_item;
mod scan_document;
mod scan_file;
mod scan_time;

pub use credentials::{
    CredentialedChecks, DatabaseCredentials, NetbiosIdentity, DATABASE_LOGIN_CHECKS,
    NETBIOS_PLUGIN_ID, SCAN_INFORMATION_PLUGIN_ID,
};
pub use plugin_output::{PluginOutput, PluginSet};
pub use policy::{ScanFileSource, ScTarget};
pub use report_host::{ReportHost, RiskFactorCounts};
pub use report_item::{parse_plugin_date, ReportItem, COMPLIANCE_NAMESPACE_PREFIX};
pub use scan_document::ScanDocument;
pub use scan_file::{human_size, RawScanFile, ScanFile};
pub use scan_time::{format_elapsed, parse_host_timestamp, ScanWindow, HOST_TIMESTAMP_FORMAT};
