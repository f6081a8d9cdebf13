//! Extractive title generation for idea lists.
//!
//! The ideas are joined into one English document, the sentences are ranked
//! with latent semantic analysis, and the best one becomes the title.

pub mod error;
pub mod idea;
pub mod summarizer;
pub mod text;
pub mod title;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use idea::Idea;
pub use summarizer::LsaSummarizer;
pub use text::document::{Document, Paragraph, Sentence};
pub use text::stemmer::Stemmer;
pub use text::stop_words::StopWords;
pub use text::tokenizer::Tokenizer;
pub use title::{
    ELLIPSIS, FALLBACK_TITLE, MAX_TITLE_LENGTH, TRUNCATED_TITLE_LENGTH, TitleGenerator,
    generate_title, truncate_title,
};
