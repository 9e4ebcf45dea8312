use super::table::{data_cells, first_link, first_table_rows};
use crate::error::{Result, SusyError};
use crate::models::SectionMap;
use crate::url::join_url;
use scraper::Html;
use tracing::debug;

/// Parses SuSy's main page into section code -> section URL.
///
/// Rows without `<td>` cells (headers) are skipped, so a maintenance page with
/// an empty table gives an empty map. A data row whose first cell has no link
/// is an error.
pub fn parse_sections_from_html(html: &str, base_url: &str) -> Result<SectionMap> {
    let document = Html::parse_document(html);
    let mut sections = SectionMap::new();

    for row in first_table_rows(&document)? {
        let cells = data_cells(&row)?;
        let Some(first_cell) = cells.first() else {
            continue;
        };

        let (code, href) = first_link(first_cell, "section")?;
        let href = href.ok_or_else(|| {
            SusyError::ElementNotFound(format!("href of section link '{}'", code))
        })?;

        let url = join_url(base_url, href);
        debug!(%code, %url, "found section");
        sections.insert(code, url);
    }

    Ok(sections)
}
