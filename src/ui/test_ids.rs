use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Categories of `data-testid` the application renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDataId {
    BookCard,
    BookTitle,
    BookDescription,
    DateCreated,
}

impl TestDataId {
    pub fn as_str(self) -> &'static str {
        match self {
            TestDataId::BookCard => "book-card",
            TestDataId::BookTitle => "book-title",
            TestDataId::BookDescription => "book-description",
            TestDataId::DateCreated => "date-created",
        }
    }
}

/// Test identifier for one element of a category, e.g. `book-card-<title>`.
pub fn generate_test_id(prefix: TestDataId, value: &str) -> String {
    format!("{}-{value}", prefix.as_str())
}

/// Renders a timestamp the way an en-US short date does: `M/D/YYYY`, in the
/// host's local timezone as the application's pages do.
pub fn format_created_date(at: DateTime<Utc>) -> String {
    format_date_in(at, &Local)
}

pub fn format_date_in<Tz: TimeZone>(at: DateTime<Utc>, zone: &Tz) -> String {
    let local = at.with_timezone(zone);
    format!("{}/{}/{}", local.month(), local.day(), local.year())
}
