use std::collections::HashSet;

const ENGLISH: &str = include_str!("english_stop_words.txt");

/// Low-information words excluded from the ranking dictionary.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// One word per line; blank lines and `#` comments are skipped.
    fn from_list(list: &'static str) -> Self {
        let words = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self { words }
    }

    /// Expects an already lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
