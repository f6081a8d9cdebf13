pub mod document;
pub mod stemmer;
pub mod stop_words;
pub mod tokenizer;
