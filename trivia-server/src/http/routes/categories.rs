//! Category endpoints: listing and category-scoped questions

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::{Category, CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

use super::questions::QuestionResponse;

/// Categories are served as an id-to-name object, ids stringified.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<String, String> {
    categories
        .into_iter()
        .map(|c| (c.id.to_string(), c.name))
        .collect()
}

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: BTreeMap<String, String>,
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub current_category: String,
}

/// GET /categories - all categories as an id-to-name mapping
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - every question in one category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = CategoryRepo::new(&state.pool).get(id).await?;
    let questions = QuestionRepo::new(&state.pool).list_for_category(id).await?;
    let total = questions.len() as i64;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: questions.into_iter().map(QuestionResponse::from).collect(),
        total_questions: total,
        current_category: category.name,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
