use std::collections::VecDeque;

/// How many recognized signs the application keeps on screen.
pub const DEFAULT_HISTORY_LENGTH: usize = 10;

/// Rolling record of recognized signs, oldest first.
///
/// A sign is only appended when it differs from the current prediction, so
/// holding the same pose over many frames produces a single entry.
#[derive(Debug, Clone)]
pub struct RecognitionHistory {
    data: VecDeque<String>,
    current: Option<String>,
    max_length: usize,
}

impl Default for RecognitionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}

impl RecognitionHistory {
    pub fn new(max_length: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(max_length),
            current: None,
            max_length,
        }
    }

    /// Records `name` as the latest prediction. Returns `true` if it was appended.
    pub fn push(&mut self, name: &str) -> bool {
        if self.current.as_deref() == Some(name) {
            return false;
        }
        self.current = Some(name.to_string());

        self.data.push_back(name.to_string());
        while self.data.len() > self.max_length {
            self.data.pop_front();
        }
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(String::as_str)
    }

    pub fn transcript(&self) -> String {
        self.entries().collect::<Vec<_>>().join(" ")
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
