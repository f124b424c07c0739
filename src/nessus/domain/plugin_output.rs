/// Set of plugin ids selected in the scan policy
///
/// Borrows the `plugin_set` server preference, a `;`-separated list that
/// usually ends with a trailing separator. Real policies list well over a
/// hundred thousand ids, so membership is tested on the raw text instead of
/// building an index per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PluginSet<'a> {
    raw: &'a str,
}

impl<'a> PluginSet<'a> {
    pub fn from_preference(raw: &'a str) -> Self {
        let raw = raw.trim();
        let raw = raw.strip_suffix(';').unwrap_or(raw);
        Self { raw }
    }

    /// Plugin ids in policy order
    pub fn ids(&self) -> impl Iterator<Item = &'a str> {
        self.raw
            .split(';')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn contains(&self, plugin_id: &str) -> bool {
        let plugin_id = plugin_id.trim();
        if plugin_id.is_empty() {
            return false;
        }
        let bytes = self.raw.as_bytes();
        let is_boundary = |byte: u8| byte == b';' || byte.is_ascii_whitespace();
        self.raw.match_indices(plugin_id).any(|(start, _)| {
            let end = start + plugin_id.len();
            (start == 0 || is_boundary(bytes[start - 1]))
                && (end == bytes.len() || is_boundary(bytes[end]))
        })
    }

    pub fn len(&self) -> usize {
        self.ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.ids().next().is_none()
    }
}

/// Result of looking up what a plugin reported for a host
///
/// Every state is kept distinct so callers never have to match on
/// sentinel strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginOutput {
    /// The plugin reported for the host and carried a `plugin_output` payload
    Found(String),
    /// The plugin reported for the host without any payload
    NoOutput,
    /// The plugin is absent from the report and was not selected in the policy
    NotEnabled,
    /// The plugin was selected in the policy but did not report for the host;
    /// the scanner audit trail explains why
    NotInReport,
    /// The plugin is absent and the file does not record which plugins were enabled
    EnablementUnknown,
}

impl PluginOutput {
    /// Classifies a plugin that has no occurrence for the host
    ///
    /// # Arguments
    /// * `plugin_id` - The plugin that was looked up
    /// * `plugin_set` - Plugins enabled in the policy, `None` if not recorded
    pub fn for_absent_plugin(plugin_id: &str, plugin_set: Option<&PluginSet<'_>>) -> Self {
        match plugin_set {
            Some(set) if set.contains(plugin_id) => PluginOutput::NotInReport,
            Some(_) => PluginOutput::NotEnabled,
            None => PluginOutput::EnablementUnknown,
        }
    }

    /// Keeps the payload of the last occurrence
    pub(crate) fn from_last_occurrence(occurrences: &[Option<&str>]) -> Option<Self> {
        occurrences.last().map(|last| match last {
            Some(text) => PluginOutput::Found((*text).to_string()),
            None => PluginOutput::NoOutput,
        })
    }

    /// Joins the payload of every occurrence with newlines
    ///
    /// An occurrence without payload contributes the "no output recorded"
    /// line, unless it is the only occurrence.
    pub(crate) fn from_all_occurrences(plugin_id: &str, occurrences: &[Option<&str>]) -> Option<Self> {
        match occurrences {
            [] => None,
            [None] => Some(PluginOutput::NoOutput),
            [Some(text)] => Some(PluginOutput::Found((*text).to_string())),
            many => {
                let joined = many
                    .iter()
                    .map(|occurrence| match occurrence {
                        Some(text) => (*text).to_string(),
                        None => PluginOutput::NoOutput.describe(plugin_id),
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                Some(PluginOutput::Found(joined))
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PluginOutput::Found(_))
    }

    /// Payload text, `None` for every state other than `Found`
    pub fn text(&self) -> Option<&str> {
        match self {
            PluginOutput::Found(text) => Some(text),
            _ => None,
        }
    }

    /// Human readable rendering, using the wording scan analysts know from
    /// earlier tooling for the non-found states
    pub fn describe(&self, plugin_id: &str) -> String {
        match self {
            PluginOutput::Found(text) => text.clone(),
            PluginOutput::NoOutput => format!("{} - no output recorded", plugin_id),
            PluginOutput::NotEnabled => format!("{} - not enabled", plugin_id),
            PluginOutput::NotInReport => format!("{} - check Audit Trail", plugin_id),
            PluginOutput::EnablementUnknown => {
                format!("{} - info about used plugins not available", plugin_id)
            }
        }
    }
}
