// src/models/faq.rs

use serde::{Deserialize, Serialize};

use crate::models::guide::DocumentType;

/// FAQ category. A closed set; the filter bar derives its chips from the
/// categories actually present in the data, not from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Aadhaar,
    Pan,
    Voting,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,

    /// Document types this entry links to, so clients can jump to a guide.
    pub related_documents: Vec<DocumentType>,
}

/// An entry passes when the term occurs case-insensitively in the question or
/// the answer (an empty term passes everything), and the category filter
/// matches (no filter passes everything).
pub fn matches(faq: &Faq, term: &str, category: Option<FaqCategory>) -> bool {
    let term = term.to_lowercase();
    let matches_search = term.is_empty()
        || faq.question.to_lowercase().contains(&term)
        || faq.answer.to_lowercase().contains(&term);
    let matches_category = category.map_or(true, |wanted| faq.category == wanted);
    matches_search && matches_category
}

pub fn filter<'a>(faqs: &'a [Faq], term: &str, category: Option<FaqCategory>) -> Vec<&'a Faq> {
    faqs.iter().filter(|faq| matches(faq, term, category)).collect()
}

/// Distinct categories in first-appearance order. Adding a record with a new
/// category to the data surfaces it here automatically.
pub fn categories(faqs: &[Faq]) -> Vec<FaqCategory> {
    let mut seen = Vec::new();
    for faq in faqs {
        if !seen.contains(&faq.category) {
            seen.push(faq.category);
        }
    }
    seen
}
