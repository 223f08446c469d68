mod home;
mod score;

pub use home::Home;
pub use score::Score;
