use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Snowball (Porter2) stemmer for English.
pub struct Stemmer {
    inner: SnowballStemmer,
}

impl Stemmer {
    pub fn english() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer").field("language", &"english").finish()
    }
}
