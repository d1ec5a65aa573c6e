use schemeview_core::host::UiContext;
use std::sync::Mutex;

/// Remembers every context flag write in order.
#[derive(Debug, Default)]
pub struct RecordingUiContext {
    writes: Mutex<Vec<(String, bool)>>,
}

impl RecordingUiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written for `key`, if any.
    pub fn flag(&self, key: &str) -> Option<bool> {
        let writes = self.writes.lock().expect("context log poisoned");
        writes.iter().rev().find(|(name, _)| name == key).map(|(_, value)| *value)
    }

    pub fn writes(&self) -> Vec<(String, bool)> {
        self.writes.lock().expect("context log poisoned").clone()
    }
}

impl UiContext for RecordingUiContext {
    fn set_flag(&self, key: &str, value: bool) {
        tracing::trace!(key, value, "recording context flag");
        self.writes.lock().expect("context log poisoned").push((key.to_owned(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flag_reports_latest_write() {
        let context = RecordingUiContext::new();
        assert_eq!(context.flag("view.empty"), None);

        context.set_flag("view.empty", true);
        context.set_flag("other", true);
        context.set_flag("view.empty", false);

        assert_eq!(context.flag("view.empty"), Some(false));
        assert_eq!(context.writes().len(), 3);
    }
}
