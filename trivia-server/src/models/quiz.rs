//! Quiz category filter and random selection
//!
//! Clients send the quiz category id as a number, a numeric string, or the
//! `ALL` sentinel (id 0 is accepted as a legacy spelling of the same thing).
//! Selection itself is a pure function over the candidate list with an
//! injectable RNG, so tests can seed it and assert membership.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use super::ValidationError;

/// Category restriction for quiz play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Draw from every category
    All,
    /// Draw only from the given category
    Id(i64),
}

impl CategoryFilter {
    /// Parse the wire-level category id.
    ///
    /// Accepted spellings: absent/null ("no restriction"), an integer, a
    /// string holding an integer, or the string `ALL` (case-insensitive).
    /// Id 0 means all categories. Anything else is malformed input.
    pub fn parse(id: Option<&Value>) -> Result<Self, ValidationError> {
        let id = match id {
            None | Some(Value::Null) => return Ok(Self::All),
            Some(v) => v,
        };

        match id {
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(Self::All),
                Some(id) => Ok(Self::Id(id)),
                None => Err(Self::malformed()),
            },
            Value::String(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("all") {
                    return Ok(Self::All);
                }
                match s.parse::<i64>() {
                    Ok(0) => Ok(Self::All),
                    Ok(id) => Ok(Self::Id(id)),
                    Err(_) => Err(Self::malformed()),
                }
            }
            _ => Err(Self::malformed()),
        }
    }

    /// The category id to filter on, if any.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(*id),
        }
    }

    fn malformed() -> ValidationError {
        ValidationError::InvalidFormat {
            field: "quiz category id",
            reason: "must be an integer or the ALL sentinel",
        }
    }
}

/// Pick one candidate uniformly at random, or `None` if the set is empty.
pub fn pick<'a, T, R: Rng>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    candidates.choose(rng)
}
