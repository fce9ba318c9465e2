//! Food item domain model and category tags.
//!
//! This module defines the core `FoodItem` type representing one entry of the
//! fetched menu, and the fixed [`Category`] enumeration used by the category
//! filter. Items are decoded once at the fetch boundary and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single menu entry.
///
/// `name` and `kind` (the JSON `type` field) are required and validated at the
/// decode boundary; the remaining fields are optional display data carried by
/// the endpoint's dataset.
///
/// # Fields
///
/// - `name`: Display name of the dish, target of the query filter
/// - `kind`: Meal-type tag (e.g. "breakfast"), target of the category filter
/// - `text`: Optional one-line description
/// - `price`: Optional price in the endpoint's currency
/// - `image`: Optional image path (unused by the terminal UI, kept for fidelity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodItem {
    /// Creates a new item with just the required fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use snackbar::domain::FoodItem;
    ///
    /// let item = FoodItem::new("Pancake".to_string(), "Breakfast".to_string());
    /// assert_eq!(item.name, "Pancake");
    /// assert!(item.price.is_none());
    /// ```
    #[must_use]
    pub const fn new(name: String, kind: String) -> Self {
        Self {
            name,
            kind,
            text: None,
            price: None,
            image: None,
        }
    }
}

/// Meal-type category tag.
///
/// A small fixed enumeration backing the four filter tabs. Exactly one
/// category is marked selected in the UI at any time; [`Category::All`]
/// disables category filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// No category restriction; the full collection is shown.
    #[default]
    All,
    /// Breakfast dishes.
    Breakfast,
    /// Lunch dishes.
    Lunch,
    /// Dinner dishes.
    Dinner,
}

impl Category {
    /// All categories in tab display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Returns the lowercase tag string used for display and matching.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Returns whether an item's meal-type tag matches this category.
    ///
    /// The match is deliberately loose: the item's `type` field only has to
    /// *contain* the tag, case-insensitively, as a substring. `All` matches
    /// every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use snackbar::domain::{Category, FoodItem};
    ///
    /// let item = FoodItem::new("Pancake".to_string(), "Breakfast".to_string());
    /// assert!(Category::Breakfast.matches(&item));
    /// assert!(Category::All.matches(&item));
    /// assert!(!Category::Dinner.matches(&item));
    /// ```
    #[must_use]
    pub fn matches(self, item: &FoodItem) -> bool {
        match self {
            Self::All => true,
            _ => item.kind.to_lowercase().contains(self.as_str()),
        }
    }
}

/// Returns a human-readable string describing how long ago the menu was fetched.
///
/// The format varies based on the time elapsed since the `fetched_at` Unix
/// timestamp:
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
/// - Less than 1 day: "Xh ago" (e.g., "3h ago")
/// - 1 day or more: "Xd ago" (e.g., "7d ago")
#[must_use]
pub fn fetched_ago(fetched_at: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let diff = now - fetched_at;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_are_lowercase_and_ordered() {
        let tags: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(tags, vec!["all", "breakfast", "lunch", "dinner"]);
    }

    #[test]
    fn category_match_is_case_insensitive_substring() {
        let item = FoodItem::new("Toast".to_string(), "BreakFast Special".to_string());
        assert!(Category::Breakfast.matches(&item));
        assert!(!Category::Lunch.matches(&item));
    }

    #[test]
    fn all_matches_anything() {
        let item = FoodItem::new("Mystery".to_string(), "brunch".to_string());
        assert!(Category::All.matches(&item));
    }

    #[test]
    fn fetched_ago_formats_by_magnitude() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(fetched_ago(now), "just now");
        assert_eq!(fetched_ago(now - 300), "5m ago");
        assert_eq!(fetched_ago(now - 2 * 3600), "2h ago");
        assert_eq!(fetched_ago(now - 3 * 86400), "3d ago");
    }

    #[test]
    fn food_item_decodes_type_field() {
        let item: FoodItem =
            serde_json::from_str(r#"{"name":"Burger","type":"Lunch","price":9.5}"#).unwrap();
        assert_eq!(item.kind, "Lunch");
        assert_eq!(item.price, Some(9.5));
        assert!(item.text.is_none());
    }
}
