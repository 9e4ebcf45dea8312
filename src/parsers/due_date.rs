//! Deadline extraction for assignment pages.
//!
//! Assignment pages carry no label next to the deadline. Every page starts
//! with a "generated at" timestamp, so the deadline is the date and time that
//! come second in document order. If the layout ever changes so that fewer
//! than two of either are present, parsing fails instead of guessing.

use crate::error::{Result, SusyError};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Zero-based position of the deadline among the dates and times on a page.
pub const DEADLINE_OCCURRENCE: usize = 1;

/// SuSy writes "end of day" as this out-of-range clock value.
pub const END_OF_DAY_SENTINEL: &str = "24:00:00";
const END_OF_DAY: &str = "23:59:59";

const DUE_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+/\d+/\d+").expect("date pattern is valid"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d+:\d+").expect("time pattern is valid"));

/// Extracts the submission deadline from an assignment page.
pub fn parse_due_date(html: &str) -> Result<NaiveDateTime> {
    let dates: Vec<&str> = DATE_PATTERN.find_iter(html).map(|m| m.as_str()).collect();
    let times: Vec<&str> = TIME_PATTERN.find_iter(html).map(|m| m.as_str()).collect();

    let (Some(date), Some(time)) = (dates.get(DEADLINE_OCCURRENCE), times.get(DEADLINE_OCCURRENCE))
    else {
        return Err(SusyError::DueDateNotFound {
            dates: dates.len(),
            times: times.len(),
        });
    };

    let time = if *time == END_OF_DAY_SENTINEL { END_OF_DAY } else { *time };
    let value = format!("{} {}", date, time);

    NaiveDateTime::parse_from_str(&value, DUE_DATE_FORMAT)
        .map_err(|source| SusyError::InvalidDueDate { value, source })
}
