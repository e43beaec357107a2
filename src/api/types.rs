use serde::Deserialize;

/// One drug entry in the search results
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Drug {
    pub drugbank_id: String,
    pub name: String,
    pub generic_name: String,
    pub brand_names: Vec<String>,
    pub drug_class: String,
    pub description: String,
    pub match_score: f64,
    pub match_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Drug>,
    pub total_found: u64,
}

/// Daily sentiment breakdown; the three fractions are expected (not
/// enforced) to sum to ~1
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SentimentPoint {
    pub date: String,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub post_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentResponse {
    pub drug_name: String,
    pub sentiment_data: Vec<SentimentPoint>,
    pub overall_sentiment: String,
    pub sentiment_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub similarity_score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    pub original_drug: String,
    pub recommendations: Vec<Recommendation>,
}

/// Free-text frequency/severity categories, used only for display styling
#[derive(Debug, Clone, Deserialize)]
pub struct SideEffect {
    pub effect: String,
    pub frequency: String,
    pub severity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SideEffectsResponse {
    pub drug_name: String,
    pub common_side_effects: Vec<SideEffect>,
    pub serious_side_effects: Vec<SideEffect>,
}

/// Aggregate of the three per-drug detail endpoints
///
/// All-or-nothing: this struct only exists once all three requests have
/// succeeded.
#[derive(Debug, Clone)]
pub struct DrugDetails {
    pub sentiment: SentimentResponse,
    pub recommendations: RecommendationResponse,
    pub side_effects: SideEffectsResponse,
}
