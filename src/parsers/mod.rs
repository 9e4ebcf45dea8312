//! Pure page-to-data transformations. None of these functions perform I/O.

pub mod assignments;
pub mod due_date;
pub mod groups;
pub mod sections;
pub mod table;
pub mod users;

use crate::error::{Result, SusyError};
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SusyError::ParsingError(format!("Invalid selector '{}': {}", css, e)))
}
