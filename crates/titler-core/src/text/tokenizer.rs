//! English sentence and word segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

/// A word starts with a letter and continues with letters, apostrophes or hyphens.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\W\d_](?:[^\W\d_]|['’-])*").expect("word pattern is valid"));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSING_PUNCTUATION: [char; 7] = ['"', '\'', '”', '’', ')', ']', '}'];
const OPENING_PUNCTUATION: [char; 7] = ['"', '\'', '“', '‘', '(', '[', '{'];

/// Abbreviations that end in a period without ending the sentence.
///
/// Short words that commonly end a sentence ("no", "co", "st") are left out.
const ABBREVIATIONS: &[&str] = &[
    "approx", "apr", "aug", "ave", "corp", "dec", "dept", "dr", "e.g", "est", "etc", "feb", "fig",
    "gov", "i.e", "inc", "jan", "jr", "jul", "jun", "ltd", "mar", "misc", "mr", "mrs", "ms", "mt",
    "nov", "oct", "p.m", "a.m", "prof", "rev", "sep", "sept", "sr", "u.s", "vol", "vs",
];

/// Segments English prose into sentences and words.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn english() -> Self {
        Tokenizer
    }

    /// Split text into trimmed, non-empty sentences, keeping their original wording.
    pub fn to_sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((index, ch)) = chars.next() {
            if !SENTENCE_TERMINATORS.contains(&ch) {
                continue;
            }

            let mut end = index + ch.len_utf8();
            let mut single_period = ch == '.';
            while let Some(&(next_index, next)) = chars.peek() {
                if SENTENCE_TERMINATORS.contains(&next) {
                    single_period = false;
                } else if !CLOSING_PUNCTUATION.contains(&next) {
                    break;
                }
                end = next_index + next.len_utf8();
                chars.next();
            }

            let at_break = match chars.peek() {
                None => true,
                Some(&(_, next)) => next.is_whitespace(),
            };
            if !at_break {
                continue;
            }

            if single_period && ends_with_abbreviation(&text[start..index]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    /// Extract the words of a sentence. Numbers and punctuation are not words.
    pub fn to_words<'t>(&self, sentence: &'t str) -> Vec<&'t str> {
        WORD_PATTERN
            .find_iter(sentence)
            .map(|found| found.as_str().trim_end_matches(['\'', '’', '-']))
            .collect()
    }
}

fn push_trimmed<'t>(sentences: &mut Vec<&'t str>, candidate: &'t str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() {
        sentences.push(candidate);
    }
}

/// True when the token right before a period is an initial or a known abbreviation.
fn ends_with_abbreviation(preceding: &str) -> bool {
    let Some(token) = preceding.split_whitespace().next_back() else {
        return false;
    };
    let token = token.trim_start_matches(OPENING_PUNCTUATION);

    let mut letters = token.chars();
    if let (Some(first), None) = (letters.next(), letters.next())
        && first.is_alphabetic()
    {
        return true;
    }

    let token = token.to_lowercase();
    ABBREVIATIONS.contains(&token.as_str())
}
