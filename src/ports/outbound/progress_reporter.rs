/// ProgressReporter port for user feedback while loading and splitting scan files
///
/// Messages go to a side channel (stderr for the CLI) so that stdout only
/// carries query results.
pub trait ProgressReporter {
    /// Reports a step, e.g. which file is being loaded
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps done so far
    /// * `total` - Total number of steps
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a failure that does not stop the operation
    fn report_error(&self, message: &str);

    /// Reports that an operation finished
    fn report_completion(&self, message: &str);
}
