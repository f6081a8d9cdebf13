//! Title generation for an idea list.

use crate::summarizer::LsaSummarizer;
use crate::text::document::Document;
use crate::text::tokenizer::Tokenizer;
use crate::{Idea, Result as CoreErrorResult};

use log::debug;

/// Returned for an empty idea list, and by the CLI on any failure.
pub const FALLBACK_TITLE: &str = "My Ideas";
pub const MAX_TITLE_LENGTH: usize = 50;
pub const TRUNCATED_TITLE_LENGTH: usize = 47;
pub const ELLIPSIS: &str = "...";

const SUMMARY_SENTENCES: usize = 1;

/// Builds a short title for an idea list by extracting its most
/// representative sentence.
#[derive(Debug)]
pub struct TitleGenerator {
    tokenizer: Tokenizer,
    summarizer: LsaSummarizer,
}

impl TitleGenerator {
    pub fn new(tokenizer: Tokenizer, summarizer: LsaSummarizer) -> Self {
        Self {
            tokenizer,
            summarizer,
        }
    }

    pub fn english() -> Self {
        Self::new(Tokenizer::english(), LsaSummarizer::english())
    }

    /// Generate a title.
    ///
    /// * empty list: [`FALLBACK_TITLE`]
    /// * no rankable sentence: the first idea's title, verbatim
    /// * otherwise: the top sentence, trimmed and capped at [`MAX_TITLE_LENGTH`] characters
    pub fn generate(&self, ideas: &[Idea]) -> CoreErrorResult<String> {
        let Some(first) = ideas.first() else {
            return Ok(FALLBACK_TITLE.to_string());
        };

        let text = combine(ideas);
        let document = Document::parse(&text, &self.tokenizer);
        let summary = self.summarizer.summarize(&document, SUMMARY_SENTENCES)?;

        match summary.first() {
            Some(sentence) => Ok(truncate_title(sentence.text())),
            None => {
                debug!("No sentence ranked, using the first idea title");
                Ok(first.title.clone())
            }
        }
    }
}

/// Generate a title with the English pipeline.
pub fn generate_title(ideas: &[Idea]) -> CoreErrorResult<String> {
    TitleGenerator::english().generate(ideas)
}

/// Every idea as `"{title}. {description}"`, joined by single spaces.
pub fn combine(ideas: &[Idea]) -> String {
    ideas
        .iter()
        .map(Idea::passage)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim, then cut to [`TRUNCATED_TITLE_LENGTH`] characters plus [`ELLIPSIS`]
/// when longer than [`MAX_TITLE_LENGTH`] characters.
pub fn truncate_title(sentence: &str) -> String {
    let title = sentence.trim();
    if title.chars().count() <= MAX_TITLE_LENGTH {
        return title.to_string();
    }

    let mut truncated: String = title.chars().take(TRUNCATED_TITLE_LENGTH).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
