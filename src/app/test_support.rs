//! Shared fixtures for app tests

use crate::api::{Drug, DrugDetails, RecommendationResponse, SentimentPoint, SentimentResponse, SideEffectsResponse};
use crate::app::App;
use crate::dataset::SummaryStore;
use crate::suggest::SuggestionIndex;

pub fn test_index() -> SuggestionIndex {
    SuggestionIndex::new(vec![
        "Aspirin".to_string(),
        "Ibuprofen".to_string(),
        "Naproxen".to_string(),
    ])
}

pub fn test_store() -> SummaryStore {
    let json = serde_json::json!({
        "metadata": {
            "total_drugs_analyzed": 1,
            "total_posts_across_all_drugs": 12,
            "generation_date": "2025-11-18",
            "data_source": "reddit",
            "analysis_description": "test fixture"
        },
        "drug_summaries": [{
            "drug_name": "ibuprofen",
            "total_posts": 12,
            "summary": "Mostly positive discussions.",
            "sentiment_analysis": {
                "average_positive": 0.5,
                "average_neutral": 0.3,
                "average_negative": 0.2
            },
            "key_themes": ["headaches"],
            "subreddit_distribution": {"AskDocs": 12},
            "post_examples": {
                "positive_experiences": ["Works fast."],
                "neutral_discussions": [],
                "negative_experiences": []
            },
            "analysis_date": "2025-11-01"
        }]
    });
    SummaryStore::from_json(&json.to_string()).unwrap()
}

pub fn test_app() -> App {
    App::new(test_index(), test_store())
}

pub fn test_drug(name: &str) -> Drug {
    Drug {
        drugbank_id: format!("DB-{}", name.to_lowercase()),
        name: name.to_string(),
        generic_name: name.to_lowercase(),
        brand_names: vec![],
        drug_class: "NSAID".to_string(),
        description: "Test drug.".to_string(),
        match_score: 90.0,
        match_type: "name".to_string(),
    }
}

pub fn test_details(name: &str) -> DrugDetails {
    DrugDetails {
        sentiment: SentimentResponse {
            drug_name: name.to_string(),
            sentiment_data: vec![
                SentimentPoint {
                    date: "2025-11-01".to_string(),
                    positive: 0.5,
                    neutral: 0.3,
                    negative: 0.2,
                    post_count: 40,
                },
                SentimentPoint {
                    date: "2025-11-02".to_string(),
                    positive: 0.6,
                    neutral: 0.25,
                    negative: 0.15,
                    post_count: 52,
                },
            ],
            overall_sentiment: "positive".to_string(),
            sentiment_score: 0.62,
        },
        recommendations: RecommendationResponse {
            original_drug: name.to_string(),
            recommendations: vec![],
        },
        side_effects: SideEffectsResponse {
            drug_name: name.to_string(),
            common_side_effects: vec![],
            serious_side_effects: vec![],
        },
    }
}
