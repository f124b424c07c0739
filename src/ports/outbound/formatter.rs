use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering query results
///
/// Implemented once per output format (aligned text tables, JSON).
pub trait ReportFormatter {
    /// Renders every non-empty section of the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
