pub mod auth;
#[cfg(feature = "e2e")]
pub mod registration;
pub mod reviews;
pub mod scenario;

pub use auth::{AuthError, AuthHelper};
pub use reviews::{ReviewSubmissionError, ensure_review_accepted};
pub use scenario::ScenarioHelper;
