use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the read model as pretty-printed JSON
///
/// Each requested section becomes an array; sections that were not requested
/// are left out of the object.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(model)?;
        output.push('\n');
        Ok(output)
    }
}
