pub trait ResultExt<T> {
    /// Log the error, if any, and turn the result into an [`Option`].
    fn log_error(self, what: &str) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn log_error(self, what: &str) -> Option<T> {
        self.map_err(|e| log::error!("{what}: {e:?}")).ok()
    }
}
