use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{CategoryId, LoadError};

/// One entry of the category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// A category with every clue the source knows for it, unsampled and unescaped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// Remote provider of trivia data.
///
/// Implementations own transport concerns and report any failure to reach the
/// data, or to make sense of it, as [`LoadError::SourceUnavailable`].
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Lists up to `count` categories.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, LoadError>;

    /// Fetches a single category together with all of its clues.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetails, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_ignores_unknown_fields() {
        let json = r#"[{"id":11531,"title":"mixed bag","clues_count":5}]"#;

        let listing: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(listing[0].id, CategoryId(11531));
        assert_eq!(listing[0].title, "mixed bag");
    }

    #[test]
    fn details_decode_clue_text() {
        let json = r#"{
            "id": 1,
            "title": "math",
            "clues_count": 1,
            "clues": [{"id": 9, "answer": "4", "question": "2+2", "value": 200}]
        }"#;

        let details: CategoryDetails = serde_json::from_str(json).unwrap();

        assert_eq!(
            details.clues,
            [RawClue {
                question: "2+2".into(),
                answer: "4".into()
            }]
        );
    }
}
