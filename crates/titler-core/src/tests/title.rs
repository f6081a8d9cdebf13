use crate::tests::buy_milk;
use crate::title::combine;
use crate::{
    ELLIPSIS, FALLBACK_TITLE, Idea, MAX_TITLE_LENGTH, TRUNCATED_TITLE_LENGTH, generate_title,
    truncate_title,
};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
fn given_no_ideas_when_generated_then_fallback_title() {
    // When
    let result = generate_title(&[]);

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().as_str(), eq(FALLBACK_TITLE));
}

#[test]
fn given_single_idea_when_generated_then_top_sentence() {
    // When
    let title = generate_title(&buy_milk()).unwrap();

    // Then
    assert_that!(title.as_str(), eq("Need 2% milk from store"));
    assert!(title.chars().count() <= MAX_TITLE_LENGTH);
}

#[test]
fn given_long_top_sentence_when_generated_then_truncated_with_ellipsis() {
    // Given
    let ideas = vec![Idea::new(
        "Launch",
        "A weekly newsletter that summarizes the best open source releases for busy developers",
    )];

    // When
    let title = generate_title(&ideas).unwrap();

    // Then
    assert_that!(
        title.as_str(),
        eq("A weekly newsletter that summarizes the best op...")
    );
    assert_eq!(title.chars().count(), MAX_TITLE_LENGTH);
}

#[test]
fn given_several_ideas_when_generated_then_title_is_one_of_their_sentences() {
    // Given
    let ideas = vec![
        Idea::new("Recipe app", "Share family recipes with friends"),
        Idea::new("Garden planner", "Plan vegetable beds and track watering"),
        Idea::new("Recipe box", "Save recipes and plan weekly meals"),
    ];
    let text = combine(&ideas);

    // When
    let title = generate_title(&ideas).unwrap();

    // Then
    assert!(!title.is_empty());
    assert!(title.chars().count() <= MAX_TITLE_LENGTH);
    assert!(text.contains(title.trim_end_matches(ELLIPSIS)));
}

// =========================================================================
// Degenerate Input Tests
// =========================================================================

#[test]
fn given_only_stop_words_when_generated_then_first_title_verbatim() {
    let ideas = vec![Idea::new("It is", "This was all of it")];

    let title = generate_title(&ideas).unwrap();

    assert_that!(title.as_str(), eq("It is"));
}

#[test]
fn given_uppercase_only_text_when_generated_then_first_title_verbatim() {
    let ideas = vec![Idea::new("AI", "ML")];

    let title = generate_title(&ideas).unwrap();

    assert_that!(title.as_str(), eq("AI"));
}

#[test]
fn given_fallback_to_long_title_when_generated_then_not_truncated() {
    let long_title = "THIS TITLE IS WRITTEN IN CAPITALS AND IS LONGER THAN FIFTY CHARACTERS";
    let ideas = vec![Idea::new(long_title, "NO LOWERCASE HERE")];

    let title = generate_title(&ideas).unwrap();

    assert_that!(title.as_str(), eq(long_title));
}

#[test]
fn given_same_ideas_when_generated_twice_then_identical() {
    let ideas = vec![
        Idea::new("Recipe app", "Share family recipes with friends"),
        Idea::new("Garden planner", "Plan vegetable beds and track watering"),
    ];

    assert_eq!(
        generate_title(&ideas).unwrap(),
        generate_title(&ideas).unwrap()
    );
}

// =========================================================================
// Truncation Tests
// =========================================================================

#[test]
fn given_exactly_max_length_when_truncated_then_unchanged() {
    let sentence = "x".repeat(MAX_TITLE_LENGTH);
    assert_eq!(truncate_title(&sentence), sentence);
}

#[test]
fn given_one_over_max_length_when_truncated_then_prefix_and_ellipsis() {
    let sentence = "y".repeat(MAX_TITLE_LENGTH + 1);
    let title = truncate_title(&sentence);
    assert_eq!(title, format!("{}{}", "y".repeat(TRUNCATED_TITLE_LENGTH), ELLIPSIS));
}

#[test]
fn given_surrounding_whitespace_when_truncated_then_trimmed_first() {
    let sentence = format!("  {}  ", "z".repeat(MAX_TITLE_LENGTH));
    assert_eq!(truncate_title(&sentence), "z".repeat(MAX_TITLE_LENGTH));
}

#[test]
fn given_multibyte_characters_when_truncated_then_counted_as_characters() {
    let sentence = "é".repeat(60);
    let title = truncate_title(&sentence);
    assert_eq!(title.chars().count(), MAX_TITLE_LENGTH);
    assert!(title.starts_with(&"é".repeat(TRUNCATED_TITLE_LENGTH)));
    assert!(title.ends_with(ELLIPSIS));
}

#[test]
fn test_combine_joins_passages_with_single_space() {
    let ideas = vec![Idea::new("A", "one"), Idea::new("B", "two")];
    assert_eq!(combine(&ideas), "A. one B. two");
}

#[test]
fn given_several_stop_word_ideas_when_generated_then_first_title_verbatim() {
    let ideas = vec![Idea::new("It is", "all of it"), Idea::new("So what", "was it")];

    let title = generate_title(&ideas).unwrap();

    assert_that!(title.as_str(), eq("It is"));
}
