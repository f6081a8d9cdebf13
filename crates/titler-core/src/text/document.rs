//! Plain-text document model: paragraphs of sentences, with all-uppercase
//! lines kept apart as headings.

use crate::text::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    words: Vec<String>,
    is_heading: bool,
}

impl Sentence {
    fn new(text: &str, tokenizer: &Tokenizer, is_heading: bool) -> Self {
        Self {
            text: text.to_string(),
            words: tokenizer
                .to_words(text)
                .into_iter()
                .map(String::from)
                .collect(),
            is_heading,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_heading(&self) -> bool {
        self.is_heading
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}

/// Lines of a paragraph, in order, before sentence segmentation.
enum Line<'t> {
    Heading(Sentence),
    Text(&'t str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Parse plain text.
    ///
    /// Blank lines separate paragraphs. A line whose cased characters are all
    /// uppercase becomes a heading; other lines of a paragraph are joined
    /// and split into sentences.
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<Line<'_>> = Vec::new();

        for line in text.lines().map(str::trim) {
            if is_heading(line) {
                current.push(Line::Heading(Sentence::new(line, tokenizer, true)));
            } else if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(Self::to_paragraph(std::mem::take(&mut current), tokenizer));
                }
            } else {
                current.push(Line::Text(line));
            }
        }
        paragraphs.push(Self::to_paragraph(current, tokenizer));

        Self { paragraphs }
    }

    fn to_paragraph(lines: Vec<Line<'_>>, tokenizer: &Tokenizer) -> Paragraph {
        let mut sentences = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for line in lines {
            match line {
                Line::Text(text) => pending.push(text),
                Line::Heading(heading) => {
                    Self::flush(&mut pending, &mut sentences, tokenizer);
                    sentences.push(heading);
                }
            }
        }
        Self::flush(&mut pending, &mut sentences, tokenizer);

        Paragraph { sentences }
    }

    fn flush(pending: &mut Vec<&str>, sentences: &mut Vec<Sentence>, tokenizer: &Tokenizer) {
        if pending.is_empty() {
            return;
        }
        let text = pending.join(" ");
        pending.clear();
        sentences.extend(
            tokenizer
                .to_sentences(&text)
                .into_iter()
                .map(|sentence| Sentence::new(sentence, tokenizer, false)),
        );
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Ranking candidates: every non-heading sentence in document order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.all_sentences().filter(|sentence| !sentence.is_heading())
    }

    /// Every word of every sentence, headings included.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.all_sentences()
            .flat_map(|sentence| sentence.words().iter().map(String::as_str))
    }

    fn all_sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs
            .iter()
            .flat_map(|paragraph| paragraph.sentences().iter())
    }
}

/// At least one cased character, and none of them lowercase.
fn is_heading(line: &str) -> bool {
    let mut cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}
