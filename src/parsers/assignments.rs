use super::table::{data_cells, first_link, first_table_rows};
use crate::error::{Result, SusyError};
use crate::models::AssignmentRow;
use crate::url::join_url;
use scraper::Html;
use tracing::debug;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Parses the assignment table of a section page.
///
/// The code is the link text of the first cell and the assignment URL is the
/// section URL joined with that code. The name is the text of the second cell.
pub fn parse_assignment_rows(html: &str, section_url: &str) -> Result<Vec<AssignmentRow>> {
    let document = Html::parse_document(html);
    let mut rows = Vec::new();

    for row in first_table_rows(&document)? {
        let cells = data_cells(&row)?;
        let Some(first_cell) = cells.first() else {
            continue;
        };

        let (code, _) = first_link(first_cell, "assignment")?;
        let name_cell = cells.get(1).ok_or_else(|| {
            SusyError::ElementNotFound(format!("name cell of assignment '{}'", code))
        })?;
        let name = name_cell
            .text()
            .collect::<String>()
            .replace(NO_BREAK_SPACE, " ");

        let url = join_url(section_url, &code);
        debug!(%code, %url, "found assignment");
        rows.push(AssignmentRow { code, url, name });
    }

    Ok(rows)
}
