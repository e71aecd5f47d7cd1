//! Browser DOM glue for the signup table

use web_sys::{Document, Element};

use crate::api::SignupRow;
use crate::error::BoardError;
use crate::render::row_html;

/// Selector for the table body owned by the host page
pub const TARGET_SELECTOR: &str = "#data-table tbody";

/// Look up the table body that receives the rendered rows
pub fn target_element(document: &Document) -> crate::Result<Element> {
    document
        .query_selector(TARGET_SELECTOR)
        .map_err(|e| BoardError::Dom(format!("querying {TARGET_SELECTOR}: {e:?}")))?
        .ok_or_else(|| BoardError::Dom(format!("no element matches {TARGET_SELECTOR}")))
}

/// Clear the table body and append one row per signup, preserving order
pub fn render_rows(document: &Document, tbody: &Element, rows: &[SignupRow]) -> crate::Result<()> {
    tbody.set_inner_html("");

    for row in rows {
        let tr = document
            .create_element("tr")
            .map_err(|e| BoardError::Dom(format!("creating row element: {e:?}")))?;
        tr.set_inner_html(&row_html(row));
        tbody
            .append_child(&tr)
            .map_err(|e| BoardError::Dom(format!("appending row element: {e:?}")))?;
    }

    Ok(())
}
