use crate::config::ValidationMode;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct Metrics {
    /// Values that went through the document check
    pub checked: Counter,
    /// Values that failed the document check and got an error
    pub rejected: Counter,
    /// Values skipped by `allow_nil`, `allow_blank`, `if`, `unless` or `on`
    pub skipped: Counter,
}

const MODE: &str = "mode";

impl Metrics {
    pub fn new(mode: ValidationMode, labels: &Labels) -> Self {
        let labels = labels.clone_with_labels(&[(MODE, mode.to_string())]);
        Metrics {
            checked: counter!("validation.checked", labels.clone()),
            rejected: counter!("validation.rejected", labels.clone()),
            skipped: counter!("validation.skipped", labels),
        }
    }
}
