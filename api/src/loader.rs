//! Pure request/response plumbing for the score loader.
//!
//! Everything here is a function of plain values so the status/body → props
//! mapping can be exercised without a network or a running server.

use serde::Deserialize;

use crate::types::{ScoreProps, User, UserScore};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreBody {
    #[serde(default)]
    user_score: Option<UserScore>,
    #[serde(default)]
    user: Option<User>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Validates the route's username ahead of any network call. `Err` carries
/// the Bad Request props the page renders instead of fetching.
pub fn validate_username(raw: &str) -> Result<&str, ScoreProps> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ScoreProps::bad_request())
    } else {
        Ok(trimmed)
    }
}

/// `http` for local development, `https` everywhere else. The Host header is
/// the only signal available to the loader.
pub fn scheme_for_host(host: &str) -> &'static str {
    if host.contains("localhost") {
        "http"
    } else {
        "https"
    }
}

pub fn score_url(host: &str, username: &str) -> String {
    format!("{}://{}/api/score/{}", scheme_for_host(host), host, username)
}

/// Maps an upstream status/body pair onto page props.
///
/// Transport-level failures never reach here; callers map those to
/// [`ScoreProps::service_unavailable`] themselves. An unparseable body lands
/// in the same branch, whatever the status was.
pub fn props_from_response(status: u16, body: &str) -> ScoreProps {
    if status != 200 {
        return match serde_json::from_str::<ErrorBody>(body) {
            Ok(error) => ScoreProps::upstream(error.message, status == 401),
            Err(_) => ScoreProps::service_unavailable(),
        };
    }

    match serde_json::from_str::<ScoreBody>(body) {
        Ok(data) => ScoreProps::Ready {
            user_score: data.user_score,
            user: data.user,
        },
        Err(_) => ScoreProps::service_unavailable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreError;

    #[test]
    fn blank_usernames_yield_bad_request_before_any_request() {
        assert_eq!(validate_username(""), Err(ScoreProps::bad_request()));
        assert_eq!(validate_username("   "), Err(ScoreProps::bad_request()));
        assert_eq!(validate_username("alice"), Ok("alice"));
        assert_eq!(validate_username(" alice "), Ok("alice"));
    }

    #[test]
    fn localhost_hosts_get_plain_http() {
        assert_eq!(scheme_for_host("localhost:3000"), "http");
        assert_eq!(scheme_for_host("app.localhost"), "http");
        assert_eq!(scheme_for_host("example.com"), "https");
    }

    #[test]
    fn url_targets_the_internal_score_endpoint() {
        assert_eq!(
            score_url("localhost:3000", "alice"),
            "http://localhost:3000/api/score/alice"
        );
        assert_eq!(
            score_url("example.com", "alice"),
            "https://example.com/api/score/alice"
        );
    }

    #[test]
    fn upstream_401_sets_the_unauthorized_flag() {
        let props = props_from_response(401, r#"{"message":"Unauthorized"}"#);
        assert_eq!(
            props,
            ScoreProps::Failed(ScoreError {
                message: "Unauthorized".into(),
                unauthorized: true,
            })
        );
    }

    #[test]
    fn other_upstream_errors_surface_the_message_verbatim() {
        let props = props_from_response(500, r#"{"message":"Server error"}"#);
        assert_eq!(
            props,
            ScoreProps::Failed(ScoreError {
                message: "Server error".into(),
                unauthorized: false,
            })
        );
    }

    #[test]
    fn success_body_carries_score_and_user_through() {
        let props = props_from_response(
            200,
            r#"{"userScore":{"value":87.5,"rank":"Top 5%"},"user":{"username":"alice","displayName":"Alice","avatarUrl":null}}"#,
        );
        match props {
            ScoreProps::Ready { user_score, user } => {
                let score = user_score.expect("score present");
                assert_eq!(score.value, Some(87.5));
                assert_eq!(score.rank.as_deref(), Some("Top 5%"));
                let user = user.expect("user present");
                assert_eq!(user.username, "alice");
                assert_eq!(user.display_name.as_deref(), Some("Alice"));
                assert_eq!(user.avatar_url, None);
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn missing_score_field_becomes_none() {
        let props = props_from_response(200, r#"{"user":{"username":"alice"}}"#);
        match props {
            ScoreProps::Ready { user_score, user } => {
                assert!(user_score.is_none());
                assert_eq!(user.map(|u| u.username).as_deref(), Some("alice"));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn score_object_without_value_still_renders_ready() {
        let props = props_from_response(
            200,
            r#"{"userScore":{"rank":"Top 5%"},"user":{"username":"alice"}}"#,
        );
        match props {
            ScoreProps::Ready { user_score, .. } => {
                let score = user_score.expect("score present");
                assert_eq!(score.value, None);
                assert_eq!(score.rank.as_deref(), Some("Top 5%"));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_bodies_map_to_service_unavailable() {
        assert_eq!(
            props_from_response(502, "<html>bad gateway</html>"),
            ScoreProps::service_unavailable()
        );
        assert_eq!(
            props_from_response(200, "not json"),
            ScoreProps::service_unavailable()
        );
    }
}
