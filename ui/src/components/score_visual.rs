use api::{User, UserScore};
use dioxus::prelude::*;

/// Lays out the score itself. The page hands the payload through untouched;
/// missing pieces render as placeholders rather than hiding the card.
#[component]
pub fn ScoreVisual(user_score: Option<UserScore>, user: Option<User>) -> Element {
    let score_label = user_score
        .as_ref()
        .and_then(|score| score.value)
        .map(|value| format!("{value:.0}"))
        .unwrap_or_else(|| "—".to_string());
    let rank = user_score.as_ref().and_then(|score| score.rank.clone());
    let name = user.as_ref().map(|user| {
        user.display_name
            .clone()
            .unwrap_or_else(|| format!("@{}", user.username))
    });
    let avatar = user.as_ref().and_then(|user| user.avatar_url.clone());

    rsx! {
        div { class: "score-visual",
            if let Some(avatar) = avatar {
                img { class: "score-visual__avatar", src: "{avatar}", alt: "" }
            }
            if let Some(name) = name {
                p { class: "score-visual__name", "{name}" }
            }
            p { class: "score-visual__value", "{score_label}" }
            if let Some(rank) = rank {
                p { class: "score-visual__rank", "{rank}" }
            }
        }
    }
}
