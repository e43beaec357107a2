use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentAverages {
    pub average_positive: f64,
    pub average_neutral: f64,
    pub average_negative: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostExamples {
    pub positive_experiences: Vec<String>,
    pub neutral_discussions: Vec<String>,
    pub negative_experiences: Vec<String>,
}

/// One pre-computed summary record
#[derive(Debug, Clone, Deserialize)]
pub struct DrugSummary {
    pub drug_name: String,
    pub total_posts: u64,
    pub summary: String,
    pub sentiment_analysis: SentimentAverages,
    pub key_themes: Vec<String>,
    // BTreeMap keeps community listings in a stable order across renders
    pub subreddit_distribution: BTreeMap<String, u64>,
    pub post_examples: PostExamples,
    pub analysis_date: String,
    /// Set when the offline analysis failed for this drug; the UI renders
    /// an error state instead of the summary
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetMetadata {
    pub total_drugs_analyzed: u64,
    pub total_posts_across_all_drugs: u64,
    pub generation_date: String,
    pub data_source: String,
    pub analysis_description: String,
}

/// Top-level shape of the bundled dataset file
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDataset {
    pub metadata: DatasetMetadata,
    pub drug_summaries: Vec<DrugSummary>,
}
