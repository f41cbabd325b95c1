use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewSubmissionError {
    #[error("Review submission failed with status {status}")]
    Rejected { status: u16 },
}

/// Turns the review endpoint's response status into the scenario's outcome.
pub fn ensure_review_accepted(status: u16) -> Result<(), ReviewSubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ReviewSubmissionError::Rejected { status })
    }
}

#[cfg(feature = "e2e")]
pub use form::{ReviewForm, ReviewFormError};

#[cfg(feature = "e2e")]
mod form {
    use thiserror::Error;

    use super::{ReviewSubmissionError, ensure_review_accepted};
    use crate::browser::network::{NetworkProbe, ObservedCall, RequestMatcher};
    use crate::browser::{BrowserError, BrowserSession, forms};
    use crate::domain::reviews::Rating;

    const SUBMIT_LABELS: [&str; 2] = ["Submit Review", "Submitting..."];

    #[derive(Debug, Error)]
    pub enum ReviewFormError {
        #[error(transparent)]
        Browser(#[from] BrowserError),
        #[error(transparent)]
        Submission(#[from] ReviewSubmissionError),
    }

    fn review_submission() -> RequestMatcher {
        RequestMatcher::url_containing(&["/api/books/", "/reviews"]).with_method("POST")
    }

    /// The review form on a book page.
    pub struct ReviewForm<'a> {
        page: &'a BrowserSession,
    }

    impl<'a> ReviewForm<'a> {
        pub fn new(page: &'a BrowserSession) -> Self {
            Self { page }
        }

        pub async fn fill(
            &self,
            content: &str,
            rating: Option<Rating>,
        ) -> Result<(), BrowserError> {
            forms::fill_by_label(self.page, "Review", content).await?;
            if let Some(rating) = rating {
                forms::select_by_label(self.page, "Rating", &rating.to_string()).await?;
            }
            Ok(())
        }

        pub async fn click_submit(&self) -> Result<(), BrowserError> {
            forms::click_by_text(self.page, &SUBMIT_LABELS).await
        }

        /// Submits and waits for the review POST to come back successful.
        pub async fn submit_and_confirm(&self) -> Result<ObservedCall, ReviewFormError> {
            let probe = NetworkProbe::observe(self.page, &review_submission()).await?;
            self.click_submit().await?;
            let response = probe.wait_for_response().await?;
            ensure_review_accepted(response.status)?;
            Ok(response)
        }

        /// Stubs the review endpoint so any submission is recorded but never sent.
        pub async fn stub_submissions(&self) -> Result<NetworkProbe<'a>, BrowserError> {
            NetworkProbe::fulfill(self.page, &review_submission()).await
        }
    }
}
