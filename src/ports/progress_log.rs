/// Port for user-facing progress lines.
pub trait ProgressLog {
    /// Emit one progress line.
    fn log(&self, message: &str);
}
