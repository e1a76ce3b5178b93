//! Question input validation
//!
//! User-supplied question fields are validated into newtypes before they
//! reach the database layer. Text is trimmed; blank-after-trim input is
//! rejected rather than stored.

use super::ValidationError;

/// Maximum length for question text
const MAX_QUESTION_LEN: usize = 1000;

/// Maximum length for answer text
const MAX_ANSWER_LEN: usize = 500;

/// Difficulty rating bounds
const MIN_DIFFICULTY: i16 = 1;
const MAX_DIFFICULTY: i16 = 5;

/// Validated question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create question text, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if trimmed.len() > MAX_QUESTION_LEN {
            return Err(ValidationError::TooLong {
                field: "question",
                max: MAX_QUESTION_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated answer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }
        if trimmed.len() > MAX_ANSWER_LEN {
            return Err(ValidationError::TooLong {
                field: "answer",
                max: MAX_ANSWER_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated difficulty rating (1 = easiest, 5 = hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(i16);

impl Difficulty {
    pub fn new(value: i16) -> Result<Self, ValidationError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY as i64,
                max: MAX_DIFFICULTY as i64,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// A fully validated question ready for insertion
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category_id: i64,
    pub difficulty: Difficulty,
}

impl NewQuestion {
    /// Validate raw request fields into an insertable question.
    ///
    /// The category id is only checked for referential existence at write
    /// time, inside the insert transaction.
    pub fn new(
        question: &str,
        answer: &str,
        category_id: i64,
        difficulty: i16,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: QuestionText::new(question)?,
            answer: AnswerText::new(answer)?,
            category_id,
            difficulty: Difficulty::new(difficulty)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_question() {
        let q = NewQuestion::new("Whose autobiography is 'Moonwalk'?", "Michael Jackson", 5, 3)
            .unwrap();
        assert_eq!(q.question.as_str(), "Whose autobiography is 'Moonwalk'?");
        assert_eq!(q.difficulty.value(), 3);
    }

    #[test]
    fn trims_whitespace() {
        let q = QuestionText::new("  is a test?  ").unwrap();
        assert_eq!(q.as_str(), "is a test?");
    }

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(
            QuestionText::new("   ").unwrap_err(),
            ValidationError::Empty { field: "question" }
        ));
        assert!(matches!(
            AnswerText::new("").unwrap_err(),
            ValidationError::Empty { field: "answer" }
        ));
    }

    #[test]
    fn rejects_overlong_text() {
        let long = "q".repeat(MAX_QUESTION_LEN + 1);
        assert!(matches!(
            QuestionText::new(&long).unwrap_err(),
            ValidationError::TooLong { max: 1000, .. }
        ));
    }

    #[test]
    fn difficulty_bounds() {
        assert!(Difficulty::new(1).is_ok());
        assert!(Difficulty::new(5).is_ok());
        assert!(matches!(
            Difficulty::new(0).unwrap_err(),
            ValidationError::OutOfRange { field: "difficulty", .. }
        ));
        assert!(Difficulty::new(6).is_err());
        assert!(Difficulty::new(-2).is_err());
    }
}
