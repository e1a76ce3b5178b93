//! Quiz endpoint: one random question from the eligible set

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{pick, CategoryFilter};

/// Quiz play request
#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

/// Wire-level category selector; `id` may be a number, a numeric string,
/// or the ALL sentinel.
#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: Value,
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: super::questions::QuestionResponse,
}

/// POST /quiz - draw a random question not yet seen
///
/// An exhausted eligible set and an unknown category both end the game
/// with a 404.
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let filter = CategoryFilter::parse(req.quiz_category.as_ref().map(|c| &c.id))?;

    if let CategoryFilter::Id(id) = filter {
        CategoryRepo::new(&state.pool).get(id).await?;
    }

    let candidates = QuestionRepo::new(&state.pool)
        .quiz_candidates(filter, &req.previous_questions)
        .await?;

    let question = pick(&candidates, &mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ApiError::NotFound {
            resource: "quiz question",
            id: match filter {
                CategoryFilter::All => "all".to_owned(),
                CategoryFilter::Id(id) => id.to_string(),
            },
        })?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quiz", post(play_quiz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_string_and_numeric_ids() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [13], "quiz_category": {"type": "Entertainment", "id": "3"}}"#,
        )
        .unwrap();
        assert_eq!(req.previous_questions, vec![13]);
        let filter = CategoryFilter::parse(req.quiz_category.as_ref().map(|c| &c.id)).unwrap();
        assert_eq!(filter, CategoryFilter::Id(3));

        let req: QuizRequest =
            serde_json::from_str(r#"{"previous_questions": [], "quiz_category": {"id": 0}}"#)
                .unwrap();
        let filter = CategoryFilter::parse(req.quiz_category.as_ref().map(|c| &c.id)).unwrap();
        assert_eq!(filter, CategoryFilter::All);
    }

    #[test]
    fn request_defaults() {
        let req: QuizRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.previous_questions.is_empty());
        assert!(req.quiz_category.is_none());
    }
}
