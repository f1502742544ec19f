use std::fmt::{self, Write as _};

const REQUEST_ARROW: &str = "->";
const RESPONSE_ARROW: &str = "->>";

/// Accumulates the line-oriented sequence text for one diagram.
///
/// Each row is `{source}{arrow}{target}: ({n}) {label}` terminated by `\n`, where `n` counts
/// rows from 1 across both requests (`->`) and responses (`->>`).
#[derive(Debug, Clone, Default)]
pub struct SequenceText {
    data: String,
    count: usize,
}

impl SequenceText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_request_row(&mut self, source: &str, target: &str, label: &str) {
        self.add_row(REQUEST_ARROW, source, target, label);
    }

    pub fn add_response_row(&mut self, source: &str, target: &str, label: &str) {
        self.add_row(RESPONSE_ARROW, source, target, label);
    }

    pub fn row_count(&self) -> usize {
        self.count
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    fn add_row(&mut self, arrow: &str, source: &str, target: &str, label: &str) {
        self.count += 1;
        let _ = writeln!(
            &mut self.data,
            "{source}{arrow}{target}: ({n}) {label}",
            n = self.count
        );
    }
}

impl fmt::Display for SequenceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl From<SequenceText> for String {
    fn from(value: SequenceText) -> Self {
        value.data
    }
}
