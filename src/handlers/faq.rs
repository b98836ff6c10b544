// src/handlers/faq.rs

use axum::{Json, extract::Query, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
    data,
    error::AppError,
    models::faq::{self, Faq, FaqCategory},
};

/// Query parameters for the FAQ list.
#[derive(Debug, Deserialize)]
pub struct FaqListParams {
    /// Free-text search term, matched against question and answer.
    pub q: Option<String>,

    /// Single optional category; absent means "All Categories".
    pub category: Option<FaqCategory>,
}

#[derive(Debug, Serialize)]
pub struct FaqListResponse {
    pub count: usize,

    /// Filter chips, derived from the categories present in the data.
    pub categories: Vec<FaqCategory>,

    pub faqs: Vec<Faq>,
}

/// Lists FAQs, optionally narrowed by a search term and a category filter.
pub async fn list_faqs(
    Query(params): Query<FaqListParams>,
) -> Result<impl IntoResponse, AppError> {
    let all = data::faqs();
    let term = params.q.unwrap_or_default();

    let faqs: Vec<Faq> = faq::filter(&all, &term, params.category)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(FaqListResponse {
        count: faqs.len(),
        categories: faq::categories(&all),
        faqs,
    }))
}
