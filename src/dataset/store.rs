use std::path::Path;

use super::types::{DrugSummary, SummaryDataset};
use crate::error::RxError;

/// Bundled dataset, embedded at compile time
const BUNDLED_DATASET: &str = include_str!("../../data/drug_summaries.json");

/// Read-only store of pre-computed drug summaries
pub struct SummaryStore {
    dataset: SummaryDataset,
}

impl SummaryStore {
    /// Load the dataset that ships inside the binary
    pub fn bundled() -> Result<Self, RxError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load a dataset from an external file (the `--data` override)
    pub fn from_file(path: &Path) -> Result<Self, RxError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, RxError> {
        let dataset: SummaryDataset =
            serde_json::from_str(json).map_err(|e| RxError::InvalidDataset(e.to_string()))?;
        Ok(Self { dataset })
    }

    pub fn len(&self) -> usize {
        self.dataset.drug_summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.drug_summaries.is_empty()
    }

    /// Find the summary record for a display name
    ///
    /// Matching is case-insensitive against the trimmed input, in order:
    /// exact equality, then dataset name contained in the input, then input
    /// contained in a dataset name. First match in dataset order wins.
    ///
    /// This is deliberately loose and can false-positive on short names
    /// (a 2-letter input will substring-match unrelated longer names);
    /// that fuzziness is intended, not a bug. Not-found is a normal
    /// outcome and renders as an empty state.
    pub fn find(&self, name: &str) -> Option<&DrugSummary> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.dataset.drug_summaries.iter().find(|summary| {
            let entry = summary.drug_name.to_lowercase();
            entry == needle || needle.contains(&entry) || entry.contains(&needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> SummaryStore {
        let summaries: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "drug_name": name,
                    "total_posts": 10,
                    "summary": "text",
                    "sentiment_analysis": {
                        "average_positive": 0.5,
                        "average_neutral": 0.3,
                        "average_negative": 0.2
                    },
                    "key_themes": [],
                    "subreddit_distribution": {},
                    "post_examples": {
                        "positive_experiences": [],
                        "neutral_discussions": [],
                        "negative_experiences": []
                    },
                    "analysis_date": "2025-11-01"
                })
            })
            .collect();
        let json = serde_json::json!({
            "metadata": {
                "total_drugs_analyzed": names.len(),
                "total_posts_across_all_drugs": 10 * names.len(),
                "generation_date": "2025-11-18",
                "data_source": "reddit",
                "analysis_description": "test fixture"
            },
            "drug_summaries": summaries
        });
        SummaryStore::from_json(&json.to_string()).unwrap()
    }

    #[test]
    fn test_find_exact_case_insensitive() {
        let store = store_with(&["advil"]);
        let found = store.find("Advil").unwrap();
        assert_eq!(found.drug_name, "advil");
    }

    #[test]
    fn test_find_input_substring_of_entry() {
        // "ibu" matches "ibuprofen" under the substring policy even though
        // the names are not equal; intended fuzzy behavior
        let store = store_with(&["ibuprofen"]);
        let found = store.find("ibu").unwrap();
        assert_eq!(found.drug_name, "ibuprofen");
    }

    #[test]
    fn test_find_entry_substring_of_input() {
        let store = store_with(&["aspirin"]);
        let found = store.find("aspirin extra strength").unwrap();
        assert_eq!(found.drug_name, "aspirin");
    }

    #[test]
    fn test_find_first_match_in_dataset_order() {
        // Short inputs can match several entries; the first in load order wins
        let store = store_with(&["sertraline", "trazodone"]);
        let found = store.find("ra").unwrap();
        assert_eq!(found.drug_name, "sertraline");
    }

    #[test]
    fn test_find_trims_and_normalizes() {
        let store = store_with(&["metformin"]);
        assert!(store.find("  METFORMIN  ").is_some());
    }

    #[test]
    fn test_find_not_found_is_none() {
        let store = store_with(&["metformin"]);
        assert!(store.find("xylitol").is_none());
    }

    #[test]
    fn test_find_blank_input_is_none() {
        let store = store_with(&["metformin"]);
        assert!(store.find("   ").is_none());
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let store = SummaryStore::bundled().unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_bundled_dataset_error_records_survive_decode() {
        let store = SummaryStore::bundled().unwrap();
        let ozempic = store.find("ozempic").unwrap();
        assert!(ozempic.error.is_some());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        // Round-trip through a real file like the --data override does
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "metadata": {
                "total_drugs_analyzed": 0,
                "total_posts_across_all_drugs": 0,
                "generation_date": "2025-11-18",
                "data_source": "reddit",
                "analysis_description": "empty"
            },
            "drug_summaries": []
        });
        file.write_all(json.to_string().as_bytes()).unwrap();
        let loaded = SummaryStore::from_file(file.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let result = SummaryStore::from_file(Path::new("/nonexistent/summaries.json"));
        assert!(matches!(result, Err(RxError::Io(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(SummaryStore::from_json(r#"{"drug_summaries": "nope"}"#).is_err());
    }
}
