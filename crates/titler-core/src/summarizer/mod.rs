pub mod lsa;

pub use lsa::LsaSummarizer;
