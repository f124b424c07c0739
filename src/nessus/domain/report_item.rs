use super::element::Element;
use crate::nessus::policies::{ScoreLabel, SeverityPolicy};
use chrono::NaiveDate;

/// Namespace prefix used by compliance checks (`xmlns:cm="http://www.nessus.org/cm"`)
pub const COMPLIANCE_NAMESPACE_PREFIX: &str = "cm:";

/// ReportItem view - one finding reported by one plugin for one host
///
/// The same plugin may report several items for a host (e.g. once per port),
/// so a plugin id does not identify an item.
#[derive(Debug, Clone, Copy)]
pub struct ReportItem<'a> {
    node: &'a Element,
}

impl<'a> ReportItem<'a> {
    pub(crate) fn new(node: &'a Element) -> Self {
        Self { node }
    }

    /// Value of a field stored either as an attribute (e.g. `pluginName`)
    /// or as a child element (e.g. `risk_factor`)
    ///
    /// # Returns
    /// The attribute if present, else the text of the first matching child,
    /// else `None`.
    pub fn field_value(&self, name: &str) -> Option<&'a str> {
        self.node
            .attribute(name)
            .or_else(|| self.node.child_text(name))
    }

    /// Text of every child element with the given name, in document order
    /// (e.g. all `cve` entries)
    pub fn field_values(&self, name: &str) -> Vec<&'a str> {
        self.node
            .children()
            .iter()
            .filter(|child| child.name() == name)
            .map(Element::text)
            .collect()
    }

    pub fn plugin_id(&self) -> Option<&'a str> {
        self.node.attribute("pluginID")
    }

    pub fn plugin_name(&self) -> Option<&'a str> {
        self.field_value("pluginName")
    }

    pub fn port(&self) -> Option<&'a str> {
        self.node.attribute("port")
    }

    pub fn protocol(&self) -> Option<&'a str> {
        self.node.attribute("protocol")
    }

    pub fn risk_factor(&self) -> Option<&'a str> {
        self.node.child_text("risk_factor")
    }

    /// Severity ordinal (0-4) as recorded by the scanner
    pub fn severity(&self) -> Option<i64> {
        self.field_value("severity")?.trim().parse().ok()
    }

    pub fn severity_label(&self) -> Option<ScoreLabel> {
        self.severity().map(SeverityPolicy::severity_label)
    }

    /// Text of the `plugin_output` child, `None` when the item carries no payload
    pub fn plugin_output(&self) -> Option<&'a str> {
        self.node.child_text("plugin_output")
    }

    /// True if the item comes from a compliance (audit) check
    pub fn is_compliance(&self) -> bool {
        self.field_value("compliance") == Some("true")
    }

    /// Value of a namespaced compliance child, e.g. `cm:compliance-check-name`
    ///
    /// Only compliance items carry these children; for any other item the
    /// result is `None`.
    pub fn compliance_check_value(&self, name: &str) -> Option<&'a str> {
        if !self.is_compliance() {
            return None;
        }
        self.node.child_text(name)
    }

    /// `cm:compliance-result` (PASSED, FAILED, WARNING, ...)
    pub fn compliance_result(&self) -> Option<&'a str> {
        self.compliance_check_value(&format!("{}compliance-result", COMPLIANCE_NAMESPACE_PREFIX))
    }
}

/// Parses plugin dates such as `plugin_publication_date`
///
/// Both `2019-03-27` and `2019/03/27` are used by different producers.
pub fn parse_plugin_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
}
