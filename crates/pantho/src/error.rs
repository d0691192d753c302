/// Errors that can occur when starting the application with [`crate::run_pantho`].
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    /// The global tracing subscriber could not be installed
    #[error("Failed to initialize logging")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The windowing system or the iced runtime failed
    #[error("Failed to run the window")]
    Window(#[from] iced::Error),
}

impl StartupError {
    /// Formats the error followed by all of its causes, separated by `": "`.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            report.push_str(": ");
            report.push_str(&cause.to_string());
            source = cause.source();
        }
        report
    }
}
