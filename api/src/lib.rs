//! Wire types and the score loader shared by every platform crate.

pub mod loader;
pub mod score;
pub mod types;

pub use score::fetch_score;
pub use types::{ScoreError, ScoreProps, User, UserScore};
