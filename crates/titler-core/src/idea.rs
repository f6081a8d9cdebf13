use crate::Result as CoreErrorResult;

use serde::Deserialize;

/// A single idea submitted to a list.
///
/// Only the text fields take part in title generation. Any other fields
/// present in the JSON record (ids, vote counts, ordering) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
}

impl Idea {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Parse an ordered idea list from a JSON array.
    ///
    /// Anything other than an array of records with string `title` and
    /// `description` fields is rejected.
    #[track_caller]
    pub fn list_from_json(json: &str) -> CoreErrorResult<Vec<Idea>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The idea rendered as prose: `"{title}. {description}"`.
    pub fn passage(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}
