use crate::application::read_models::ReportReadModel;

/// InspectResponse - result of a query over one or more scan files
///
/// Holds the read model ready to be rendered by a `ReportFormatter`.
#[derive(Debug, Clone)]
pub struct InspectResponse {
    pub model: ReportReadModel,
    /// Number of scan files that were read
    pub files_processed: usize,
}

impl InspectResponse {
    pub fn new(model: ReportReadModel, files_processed: usize) -> Self {
        Self {
            model,
            files_processed,
        }
    }
}
