//! Request-scoped value types for the score page.

use serde::{Deserialize, Serialize};

/// Computed score payload for a user. The page hands it through to the
/// visualization untouched; nothing here is recomputed or validated, so
/// every field tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub rank: Option<String>,
}

/// Profile data for the scored user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Error surfaced by the loader. `unauthorized` is true only when the
/// upstream score API answered 401.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreError {
    pub message: String,
    pub unauthorized: bool,
}

impl ScoreError {
    /// Whether the error view should include the login affordance.
    pub fn shows_login(&self) -> bool {
        self.unauthorized
    }
}

/// Page props, one instance per request, immutable after construction.
///
/// The page has exactly two render branches, so the "either an error with a
/// message, or a score payload" invariant is structural: there is no state
/// where both or neither exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoreProps {
    Ready {
        user_score: Option<UserScore>,
        user: Option<User>,
    },
    Failed(ScoreError),
}

impl ScoreProps {
    /// Missing/empty username, detected before any network call.
    pub fn bad_request() -> Self {
        Self::Failed(ScoreError {
            message: "Bad Request".into(),
            unauthorized: false,
        })
    }

    /// Transport or parse failure talking to the score API.
    pub fn service_unavailable() -> Self {
        Self::Failed(ScoreError {
            message: "Service Unavailable".into(),
            unauthorized: false,
        })
    }

    /// Upstream non-200 with a readable error body.
    pub fn upstream(message: impl Into<String>, unauthorized: bool) -> Self {
        Self::Failed(ScoreError {
            message: message.into(),
            unauthorized,
        })
    }
}
