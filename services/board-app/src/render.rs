//! HTML synthesis for signup table rows

use crate::api::SignupRow;

/// Display width for costume preview images, in pixels
pub const COSTUME_IMG_WIDTH: u32 = 100;

/// Build the cell markup for one table row
///
/// Four cells in sheet column order: name, date, time, and the costume
/// image. Values are passed through verbatim.
pub fn row_html(row: &SignupRow) -> String {
    format!(
        r#"<td>{}</td><td>{}</td><td>{}</td><td><img src="{}" alt="Costume" width="{}"></td>"#,
        row.name, row.date, row.time, row.costume, COSTUME_IMG_WIDTH
    )
}
