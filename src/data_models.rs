use serde::{Deserialize, Serialize};

/// One ranked snippet from the search provider. Read-only input to the
/// processor; never persisted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

/// The model's summary of one search result. Owned by the report, never
/// mutated after construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Analysis {
    pub result_index: usize,
    pub title: String,
    pub url: String,
    pub score: f64,
    pub analysis: String,
}

/// The single return value of a chat run. Serializes to the flat
/// success/failure shape with a `success` flag; in code the two outcomes
/// are separate variants so callers can match instead of flag-checking.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ChatReport {
    Completed {
        success: bool,
        query: String,
        total_results: usize,
        analyses: Vec<Analysis>,
    },
    Failed {
        success: bool,
        query: String,
        error: String,
    },
}

impl ChatReport {
    pub fn completed(query: String, analyses: Vec<Analysis>) -> ChatReport {
        ChatReport::Completed {
            success: true,
            query,
            total_results: analyses.len(),
            analyses,
        }
    }

    pub fn failed(query: String, error: String) -> ChatReport {
        ChatReport::Failed {
            success: false,
            query,
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChatReport::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_report_wire_shape() {
        let report = ChatReport::completed(
            "rust async".to_string(),
            vec![Analysis {
                result_index: 0,
                title: "Async Book".to_string(),
                url: "https://rust-lang.github.io/async-book/".to_string(),
                score: 0.87,
                analysis: "# Summary".to_string(),
            }],
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["query"], "rust async");
        assert_eq!(value["total_results"], 1);
        assert_eq!(value["analyses"][0]["result_index"], 0);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_report_wire_shape() {
        let report = ChatReport::failed(
            "rust async".to_string(),
            "No search results found".to_string(),
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "No search results found");
        assert!(value.get("analyses").is_none());
        assert!(value.get("total_results").is_none());
    }

    #[test]
    fn test_search_result_defaults_for_missing_fields() {
        let result: SearchResult =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.title, "");
        assert_eq!(result.content, "");
        assert_eq!(result.score, 0.0);
    }
}
