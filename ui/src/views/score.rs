//! The score page. Loads props on the server, then renders one of two
//! terminal branches; nothing refetches after the initial load.

use api::fetch_score;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::{ScoreVisual, TwitterLogin};

const SCORE_CSS: Asset = asset!("/assets/styling/score.css");

/// DOM id of the region handed to the capture helper.
const CAPTURE_REGION_ID: &str = "score-capture";

#[component]
pub fn Score(username: String) -> Element {
    let lookup = username.clone();
    let resource = use_server_future(move || fetch_score(lookup.clone()))?;

    let props = match resource() {
        Some(Ok(props)) => props,
        Some(Err(err)) => {
            // Transport failure of the server function itself.
            tracing::warn!("score loader transport failed: {err}");
            api::ScoreProps::service_unavailable()
        }
        // `?` above suspends until the future resolves, so no pending branch
        // remains by the time we read the resource.
        None => api::ScoreProps::service_unavailable(),
    };

    let share = move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            if let Err(err) = crate::core::capture::append_capture(CAPTURE_REGION_ID).await {
                tracing::warn!("share capture failed: {err}");
            }
        });
    };

    match props {
        api::ScoreProps::Failed(error) => rsx! {
            document::Link { rel: "stylesheet", href: SCORE_CSS }
            section { class: "score-page score-page--error",
                h1 { class: "score-page__message", "{error.message}" }
                if error.shows_login() {
                    TwitterLogin {}
                }
            }
        },
        api::ScoreProps::Ready { user_score, user } => rsx! {
            document::Link { rel: "stylesheet", href: SCORE_CSS }
            section { class: "score-page",
                div { class: "score-page__frame",
                    div { id: CAPTURE_REGION_ID, class: "score-page__visual",
                        ScoreVisual { user_score, user }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--share",
                    onclick: share,
                    "Share"
                }
            }
        },
    }
}
