//! Decoding and validation of the menu response body.
//!
//! The endpoint is expected to return a JSON array of food item objects with
//! at least `name` and `type` string fields. Validation happens here, at the
//! fetch boundary, so malformed entries cannot surface as faults later in the
//! filter or render paths.

use crate::domain::error::{Result, SnackbarError};
use crate::domain::FoodItem;

/// Decodes a fetched response body into validated food items.
///
/// The body must parse as a JSON array. Each element is decoded individually:
/// well-formed entries are kept in source order, while entries missing a
/// required field (or with the wrong type) are rejected with a warning log
/// and skipped rather than failing the whole fetch.
///
/// # Parameters
///
/// * `body` - Raw response body bytes
///
/// # Errors
///
/// Returns [`SnackbarError::Fetch`] if the body is not a JSON array, or
/// [`SnackbarError::Decode`] if it is not valid JSON at all.
///
/// # Examples
///
/// ```
/// use snackbar::menu::decode_menu;
///
/// let body = br#"[{"name":"Pancake","type":"Breakfast"}]"#;
/// let items = decode_menu(body)?;
/// assert_eq!(items.len(), 1);
/// # Ok::<(), snackbar::domain::SnackbarError>(())
/// ```
pub fn decode_menu(body: &[u8]) -> Result<Vec<FoodItem>> {
    let _span = tracing::debug_span!("decode_menu", body_len = body.len()).entered();

    let value: serde_json::Value = serde_json::from_slice(body)?;

    let serde_json::Value::Array(entries) = value else {
        return Err(SnackbarError::Fetch(
            "response body is not a JSON array".to_string(),
        ));
    };

    let total = entries.len();
    let items: Vec<FoodItem> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index = index, error = %e, "skipping malformed menu entry");
                None
            }
        })
        .collect();

    tracing::debug!(
        decoded = items.len(),
        skipped = total - items.len(),
        "menu decoded"
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_array_in_order() {
        let body = br#"[
            {"name":"Boiled Egg","price":10,"text":"protein rich","image":"/images/egg.png","type":"breakfast"},
            {"name":"RAMEN","price":25,"text":"noodle soup","image":"/images/ramen.png","type":"lunch"}
        ]"#;

        let items = decode_menu(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Boiled Egg");
        assert_eq!(items[0].kind, "breakfast");
        assert_eq!(items[1].name, "RAMEN");
        assert_eq!(items[1].price, Some(25.0));
    }

    #[test]
    fn skips_entries_missing_required_fields() {
        let body = br#"[
            {"name":"Pancake","type":"Breakfast"},
            {"name":"No Type Here"},
            {"type":"dinner"},
            {"name":"Burger","type":"Lunch"}
        ]"#;

        let items = decode_menu(body).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pancake", "Burger"]);
    }

    #[test]
    fn non_array_body_is_a_fetch_error() {
        let err = decode_menu(br#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, SnackbarError::Fetch(_)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode_menu(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SnackbarError::Decode(_)));
    }

    #[test]
    fn empty_array_decodes_to_empty_menu() {
        assert!(decode_menu(b"[]").unwrap().is_empty());
    }
}
