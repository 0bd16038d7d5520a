//! User-facing notification abstract Trait

/// Notifier Trait
///
/// The platform layer shows these as alerts (title + message).
/// Provides a default logging implementation, `LogNotifier`.
pub trait Notifier: Send + Sync {
    /// Show an alert to the user
    ///
    /// # Arguments
    /// * `title` - Short title, e.g. `Error`
    /// * `message` - Body text
    fn alert(&self, title: &str, message: &str);

    /// Convenience for the `Success` title
    fn success(&self, message: &str) {
        self.alert("Success", message);
    }

    /// Convenience for the `Error` title
    fn error(&self, message: &str) {
        self.alert("Error", message);
    }
}

/// Notifier that only writes to the log
///
/// Used for headless runs where nothing can display an alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, title: &str, message: &str) {
        log::info!("[alert] {title}: {message}");
    }
}
