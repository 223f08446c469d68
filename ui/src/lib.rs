//! Shared UI crate for scoreshare. Views and the capture helper live here.

pub mod core;
pub mod views;

pub mod components {
    // Score layout card (components/score_visual.rs)
    pub mod score_visual;
    pub use score_visual::ScoreVisual;

    // Login affordance for unauthorized score lookups
    pub mod twitter_login;
    pub use twitter_login::TwitterLogin;
}
