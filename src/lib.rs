// Declare all our modules
mod client;
mod error;
mod fetcher;
mod models;
pub mod parsers;
mod url;

// Publicly export the parts of our library that users will need
pub use client::SusyClient;
pub use error::{Result, SusyError};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use models::*;
pub use parsers::assignments::parse_assignment_rows;
pub use parsers::due_date::parse_due_date;
pub use parsers::groups::parse_groups;
pub use parsers::sections::parse_sections_from_html;
pub use parsers::users::{format_user_id, parse_users};
pub use url::join_url;
