use super::selector;
use crate::error::{Result, SusyError};
use scraper::{ElementRef, Html};

/// Returns the rows of the first `<table>` in document order.
///
/// A page without any table is not a page this crate knows how to read, so
/// that is an error rather than an empty result.
pub fn first_table_rows(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| SusyError::ElementNotFound("table".to_string()))?;

    Ok(table.select(&row_selector).collect())
}

/// The `<td>` cells of a row. Header rows made only of `<th>` yield nothing.
pub fn data_cells<'a>(row: &ElementRef<'a>) -> Result<Vec<ElementRef<'a>>> {
    let cell_selector = selector("td")?;
    Ok(row.select(&cell_selector).collect())
}

/// The first `<a>` inside `cell`, as (link text, href).
pub(crate) fn first_link<'a>(
    cell: &ElementRef<'a>,
    what: &str,
) -> Result<(String, Option<&'a str>)> {
    let anchor_selector = selector("a")?;
    let anchor = cell
        .select(&anchor_selector)
        .next()
        .ok_or_else(|| SusyError::ElementNotFound(format!("link to {}", what)))?;

    let text = anchor.text().collect::<String>().trim().to_string();
    Ok((text, anchor.value().attr("href")))
}
