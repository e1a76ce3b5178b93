//! Question repository
//!
//! Handles question CRUD plus the two read paths with extra shape:
//! - Paginated listing with the total in the same query (COUNT(*) OVER())
//! - Quiz candidate selection (category filter + seen-id exclusion)

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use crate::models::{CategoryFilter, NewQuestion, Paginated, Pagination, SearchTerm};

use super::DbError;

/// Question record from database
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i16,
    pub created_at: DateTime<Utc>,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of questions in id order, with the overall total.
    ///
    /// An empty page is returned as-is; whether that is an error is the
    /// caller's policy.
    pub async fn list_page(&self, page: Pagination) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id, question, answer, category_id, difficulty, created_at,
                COUNT(*) OVER() AS total
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
        let items = rows
            .into_iter()
            .map(|r| Question {
                id: r.get("id"),
                question: r.get("question"),
                answer: r.get("answer"),
                category_id: r.get("category_id"),
                difficulty: r.get("difficulty"),
                created_at: r.get("created_at"),
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
        })
    }

    /// Count all questions.
    pub async fn count(&self) -> Result<i64, DbError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;
        Ok(row.0)
    }

    /// Case-insensitive substring search against question text.
    ///
    /// LIKE metacharacters in the term are escaped so they match literally.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{}%", escape_like(term.as_str()));

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category_id, difficulty, created_at
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// List every question in one category, in id order.
    pub async fn list_for_category(&self, category_id: i64) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category_id, difficulty, created_at
            FROM questions
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a new question, verifying the category reference first.
    ///
    /// The existence check runs in the same transaction as the insert so a
    /// concurrently deleted category cannot slip through; the schema-level
    /// foreign key is the final backstop.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let mut tx = self.pool.begin().await?;

        let category_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(new.category_id)
                .fetch_one(&mut *tx)
                .await?;

        if !category_exists.0 {
            return Err(DbError::NotFound {
                resource: "category",
                id: new.category_id.to_string(),
            });
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category_id, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category_id, difficulty, created_at
            "#,
        )
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category_id)
        .bind(new.difficulty.value())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(question)
    }

    /// Hard-delete a question by id, returning the deleted id.
    pub async fn delete(&self, id: i64) -> Result<i64, DbError> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(|r| r.get::<i64, _>("id"))
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        Ok(deleted)
    }

    /// Questions eligible for quiz play: inside the category filter and not
    /// among the previously seen ids.
    pub async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        previous: &[i64],
    ) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category_id, difficulty, created_at
            FROM questions
            WHERE ($1::bigint IS NULL OR category_id = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(filter.id())
        .bind(previous)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

/// Escape LIKE/ILIKE metacharacters so user input matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
