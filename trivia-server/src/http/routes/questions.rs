//! Question endpoints: paginated listing, create, delete, and search

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{NewQuestion, PageParams, SearchTerm};

use super::categories::category_map;

/// Question wire shape
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i16,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category_id,
            difficulty: q.difficulty,
        }
    }
}

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i16,
}

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub categories: BTreeMap<String, String>,
}

#[derive(Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub searched_question: Vec<QuestionResponse>,
    pub total_questions: i64,
}

/// GET /questions?page=N - one fixed-size page of questions
///
/// A page past the end of the data is a client error, not an empty success.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = params.resolve()?;
    let result = QuestionRepo::new(&state.pool).list_page(page).await?;

    if result.items.is_empty() {
        return Err(ApiError::NotFound {
            resource: "questions page",
            id: page.page.to_string(),
        });
    }

    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.items.into_iter().map(QuestionResponse::from).collect(),
        total_questions: result.total,
        categories: category_map(categories),
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;
    let created = QuestionRepo::new(&state.pool).create(&new).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
    }))
}

/// DELETE /questions/{id} - hard-delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let deleted = QuestionRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// Zero matches is a successful empty result; an empty term is rejected by
/// SearchTerm validation.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = SearchTerm::new(&req.search_term)?;
    let matches = QuestionRepo::new(&state.pool).search(&term).await?;
    let total = matches.len() as i64;

    Ok(Json(SearchResponse {
        success: true,
        searched_question: matches.into_iter().map(QuestionResponse::from).collect(),
        total_questions: total,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_wire_shape() {
        let q = Question {
            id: 7,
            question: "is a test?".into(),
            answer: "yes".into(),
            category_id: 2,
            difficulty: 1,
            created_at: chrono::Utc::now(),
        };
        let value = serde_json::to_value(QuestionResponse::from(q)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "question": "is a test?",
                "answer": "yes",
                "category": 2,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn search_request_uses_camel_case_field() {
        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.search_term, "title");
    }

    #[test]
    fn delete_response_envelope() {
        let value = serde_json::to_value(DeleteQuestionResponse {
            success: true,
            deleted: 42,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "deleted": 42}));
    }
}
