use super::selector;
use super::table::data_cells;
use crate::error::Result;
use scraper::Html;

const ROLE_PREFIX: &str = "ra";

/// Strips the leading `ra` from a user id, unless nothing would be left.
pub fn format_user_id(user_id: &str) -> String {
    match user_id.strip_prefix(ROLE_PREFIX) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => user_id.to_string(),
    }
}

/// Lists the user ids on a group roster page.
///
/// The roster is the first table of the page; each data row holds one user id
/// at the start of its first cell. Pages without a table or without data rows
/// (maintenance pages included) have no users.
pub fn parse_users(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(Vec::new());
    };

    let mut users = Vec::new();
    for row in table.select(&row_selector) {
        let cells = data_cells(&row)?;
        let token = cells
            .first()
            .map(|cell| cell.text().collect::<String>())
            .and_then(|text| text.split_whitespace().next().map(str::to_string));

        if let Some(token) = token {
            users.push(format_user_id(&token));
        }
    }

    Ok(users)
}
