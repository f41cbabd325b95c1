//! What the application renders and where, as the scenarios observe it.

pub mod limits;
pub mod messages;
pub mod routes;
pub mod test_ids;

pub use test_ids::{TestDataId, format_created_date, format_date_in, generate_test_id};
