//! The `inc_votes` request field.
//!
//! Clients send the delta either as a JSON integer or as an integer-valued
//! string (`"3"`), which PostgreSQL would also coerce. Anything else is a
//! malformed input.

use serde::Deserialize;

/// A signed vote delta applied with `votes = votes + delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawVoteDelta")]
pub struct VoteDelta(pub i32);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("vote delta must be an integer, got {0}")]
pub struct InvalidVoteDelta(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVoteDelta {
    Number(serde_json::Number),
    Text(String),
}

impl TryFrom<RawVoteDelta> for VoteDelta {
    type Error = InvalidVoteDelta;

    fn try_from(raw: RawVoteDelta) -> Result<Self, Self::Error> {
        match raw {
            RawVoteDelta::Number(n) => number_to_delta(&n)
                .map(VoteDelta)
                .ok_or_else(|| InvalidVoteDelta(n.to_string())),
            RawVoteDelta::Text(s) => s
                .trim()
                .parse::<i32>()
                .map(VoteDelta)
                .map_err(|_| InvalidVoteDelta(format!("{s:?}"))),
        }
    }
}

/// Integral floats (`5.0`) are accepted, fractional ones are not.
fn number_to_delta(n: &serde_json::Number) -> Option<i32> {
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    let f = n.as_f64()?;
    if f.fract() != 0.0 || f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
        return None;
    }
    Some(f as i32)
}
