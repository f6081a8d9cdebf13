use crate::{Document, Tokenizer};

#[test]
fn given_plain_text_when_parsed_then_sentences_in_order() {
    // Given
    let tokenizer = Tokenizer::english();

    // When
    let document = Document::parse("Buy milk. Need 2% milk from store", &tokenizer);

    // Then
    let sentences: Vec<&str> = document.sentences().map(|s| s.text()).collect();
    assert_eq!(sentences, vec!["Buy milk.", "Need 2% milk from store"]);
    let words: Vec<&str> = document.words().collect();
    assert_eq!(words, vec!["Buy", "milk", "Need", "milk", "from", "store"]);
}

#[test]
fn given_uppercase_line_when_parsed_then_heading_not_ranked_but_words_kept() {
    // Given
    let tokenizer = Tokenizer::english();
    let text = "GROCERY LIST\nBuy fresh milk. Pick up bread.";

    // When
    let document = Document::parse(text, &tokenizer);

    // Then
    let sentences: Vec<&str> = document.sentences().map(|s| s.text()).collect();
    assert_eq!(sentences, vec!["Buy fresh milk.", "Pick up bread."]);
    let words: Vec<&str> = document.words().collect();
    assert_eq!(words[..2], ["GROCERY", "LIST"]);
    assert!(document.paragraphs()[0].sentences()[0].is_heading());
}

#[test]
fn given_only_uppercase_text_when_parsed_then_no_sentences() {
    let tokenizer = Tokenizer::english();
    let document = Document::parse("AI. ML", &tokenizer);
    assert_eq!(document.sentences().count(), 0);
    assert_eq!(document.words().count(), 2);
}

#[test]
fn given_digits_only_line_when_parsed_then_not_a_heading() {
    let tokenizer = Tokenizer::english();
    let document = Document::parse("2024", &tokenizer);
    assert_eq!(document.sentences().count(), 1);
}

#[test]
fn given_blank_line_when_parsed_then_two_paragraphs() {
    let tokenizer = Tokenizer::english();
    let document = Document::parse("First idea.\n\nSecond idea.", &tokenizer);
    assert_eq!(document.paragraphs().len(), 2);
    assert_eq!(document.sentences().count(), 2);
}

#[test]
fn given_wrapped_lines_when_parsed_then_joined_into_one_sentence() {
    let tokenizer = Tokenizer::english();
    let document = Document::parse("a sentence that\n  wraps over lines.", &tokenizer);
    let sentences: Vec<&str> = document.sentences().map(|s| s.text()).collect();
    assert_eq!(sentences, vec!["a sentence that wraps over lines."]);
}
