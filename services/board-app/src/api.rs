//! Signup sheet types and the `/data` fetch
//!
//! The types mirror the JSON the backend serves; decoding is kept separate
//! from transport so it can be tested without a browser.

use serde::{Deserialize, Serialize};

/// Resource path the backend serves the signup sheet under
pub const DATA_PATH: &str = "/data";

/// One signup entry as returned by `/data`
///
/// All fields are display-formatted text supplied by the sheet; absent
/// fields decode to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub costume: String,
}

/// Decode a `/data` response body into signup rows, preserving order
pub fn parse_rows(body: &str) -> crate::Result<Vec<SignupRow>> {
    let rows = serde_json::from_str(body)?;
    Ok(rows)
}

/// Fetch the signup sheet from the backend
#[cfg(target_arch = "wasm32")]
pub async fn fetch_rows() -> crate::Result<Vec<SignupRow>> {
    let response = gloo_net::http::Request::get(DATA_PATH)
        .send()
        .await
        .map_err(|e| crate::BoardError::Http(format!("GET {} failed: {}", DATA_PATH, e)))?;

    if !response.ok() {
        return Err(crate::BoardError::Http(format!(
            "GET {} returned status {}",
            DATA_PATH,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| crate::BoardError::Http(format!("Reading response body: {}", e)))?;

    parse_rows(&body)
}

/// Fetch the signup sheet from the backend
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_rows() -> crate::Result<Vec<SignupRow>> {
    // Off-browser builds have no fetch API; the sheet is empty.
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardError;

    #[test]
    fn parse_single_row() {
        let body =
            r#"[{"name":"Ann","date":"2024-10-31","time":"19:00","costume":"/img/ghost.png"}]"#;

        let rows = parse_rows(body).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
        assert_eq!(rows[0].date, "2024-10-31");
        assert_eq!(rows[0].time, "19:00");
        assert_eq!(rows[0].costume, "/img/ghost.png");
    }

    #[test]
    fn parse_preserves_order() {
        let body = r#"[
            {"name":"Ann","date":"2024-10-31","time":"19:00","costume":"/img/ghost.png"},
            {"name":"Bo","date":"2024-10-31","time":"19:30","costume":"/img/bat.png"},
            {"name":"Cal","date":"2024-11-01","time":"20:00","costume":"/img/witch.png"}
        ]"#;

        let rows = parse_rows(body).unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bo", "Cal"]);
    }

    #[test]
    fn parse_empty_array() {
        let rows = parse_rows("[]").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn parse_missing_fields_default_to_empty() {
        let rows = parse_rows(r#"[{"name":"Ann"}]"#).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
        assert_eq!(rows[0].date, "");
        assert_eq!(rows[0].time, "");
        assert_eq!(rows[0].costume, "");
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let body = r#"[{"name":"Ann","date":"2024-10-31","time":"19:00","costume":"/img/ghost.png","plus_one":"yes"}]"#;

        let rows = parse_rows(body).unwrap();
        assert_eq!(rows[0].name, "Ann");
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = parse_rows("<!DOCTYPE html><html></html>").unwrap_err();

        match err {
            BoardError::Json(_) => {}
            other => panic!("expected BoardError::Json, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_rows(r#"{"error":"sheet unavailable"}"#).unwrap_err();

        match err {
            BoardError::Json(_) => {}
            other => panic!("expected BoardError::Json, got {other:?}"),
        }
    }
}
