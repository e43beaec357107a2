//! Remote drug insights API
//!
//! Typed client for the search, sentiment, recommendation and side-effect
//! endpoints, plus the background worker thread that keeps HTTP off the UI
//! loop. Responses are decoded into explicit record types at the boundary;
//! a body that does not match the expected shape is an error.

mod client;
mod types;
mod worker;

pub use client::{ApiClient, ApiError};
pub use types::{
    Drug, DrugDetails, Recommendation, RecommendationResponse, SearchResponse, SentimentPoint,
    SentimentResponse, SideEffect, SideEffectsResponse,
};
pub use worker::{ApiRequest, ApiResponse, spawn_worker};
