//! Pure filtering functions over the fetched menu.
//!
//! Both operations derive a new view from the full collection without touching
//! it; relative order of the source collection is always preserved. The two
//! filters are independent by design (see [`super::modes::FilterState`]).

use crate::domain::{Category, FoodItem};

/// Filters the collection by meal-type category.
///
/// Returns the full collection unchanged for [`Category::All`]; otherwise the
/// ordered subsequence of items whose `type` field contains the tag
/// case-insensitively as a substring. The loose substring match is deliberate
/// policy, not an exact comparison.
///
/// # Examples
///
/// ```
/// use snackbar::app::filter::by_category;
/// use snackbar::domain::{Category, FoodItem};
///
/// let menu = vec![FoodItem::new("Pancake".to_string(), "Breakfast".to_string())];
/// assert_eq!(by_category(&menu, Category::Breakfast).len(), 1);
/// assert!(by_category(&menu, Category::Dinner).is_empty());
/// ```
#[must_use]
pub fn by_category(items: &[FoodItem], tag: Category) -> Vec<FoodItem> {
    if tag == Category::All {
        return items.to_vec();
    }
    items.iter().filter(|item| tag.matches(item)).cloned().collect()
}

/// Filters the collection by a free-text name query.
///
/// Returns the ordered subsequence of items whose `name` contains `text`
/// case-insensitively as a substring.
///
/// When `text` is empty the result is `None`: explicitly "no filter applied",
/// an absent view, rather than the full collection. Clearing the search box
/// therefore leaves no view at all, even while a category tab might logically
/// still apply.
#[must_use]
pub fn by_query(items: &[FoodItem], text: &str) -> Option<Vec<FoodItem>> {
    if text.is_empty() {
        return None;
    }

    let needle = text.to_lowercase();
    Some(
        items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

/// Computes the character ranges of `needle` occurrences within `name`.
///
/// Used by the view-model layer to highlight query matches in the NAME
/// column. Matching is case-insensitive; ranges are `(start, end)` character
/// indices with exclusive end, in ascending order and non-overlapping.
#[must_use]
pub fn match_ranges(name: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = name.to_lowercase().chars().collect();
    let pattern: Vec<char> = needle.to_lowercase().chars().collect();
    if pattern.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + pattern.len() <= haystack.len() {
        if haystack[pos..pos + pattern.len()] == pattern[..] {
            ranges.push((pos, pos + pattern.len()));
            pos += pattern.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Pancake".to_string(), "Breakfast".to_string()),
            FoodItem::new("Burger".to_string(), "Lunch".to_string()),
            FoodItem::new("Grilled Salmon".to_string(), "Dinner".to_string()),
            FoodItem::new("Breakfast Burrito".to_string(), "breakfast".to_string()),
        ]
    }

    #[test]
    fn all_returns_full_collection_unchanged() {
        let menu = sample_menu();
        assert_eq!(by_category(&menu, Category::All), menu);
    }

    #[test]
    fn category_filter_matches_type_case_insensitively_in_order() {
        let menu = sample_menu();
        let filtered = by_category(&menu, Category::Breakfast);
        let names: Vec<&str> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pancake", "Breakfast Burrito"]);
        assert!(filtered.iter().all(|i| i.kind.to_lowercase().contains("breakfast")));
    }

    #[test]
    fn category_filter_end_to_end_example() {
        let menu = vec![
            FoodItem::new("Pancake".to_string(), "Breakfast".to_string()),
            FoodItem::new("Burger".to_string(), "Lunch".to_string()),
        ];
        let filtered = by_category(&menu, Category::Breakfast);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pancake");
    }

    #[test]
    fn query_filter_matches_name_case_insensitively() {
        let menu = sample_menu();
        let filtered = by_query(&menu, "bur").unwrap();
        let names: Vec<&str> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Breakfast Burrito"]);
    }

    #[test]
    fn query_filter_end_to_end_example() {
        let menu = vec![
            FoodItem::new("Pancake".to_string(), "Breakfast".to_string()),
            FoodItem::new("Burger".to_string(), "Lunch".to_string()),
        ];
        let filtered = by_query(&menu, "bur").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Burger");
    }

    // Documented quirk, preserved deliberately: an empty query yields an
    // absent view, not the full collection.
    #[test]
    fn empty_query_yields_no_view_quirk() {
        let menu = sample_menu();
        assert_eq!(by_query(&menu, ""), None);
    }

    #[test]
    fn query_with_no_matches_yields_empty_view() {
        let menu = sample_menu();
        assert_eq!(by_query(&menu, "sushi"), Some(vec![]));
    }

    #[test]
    fn match_ranges_finds_all_case_insensitive_occurrences() {
        assert_eq!(match_ranges("Burger", "bur"), vec![(0, 3)]);
        assert_eq!(match_ranges("Banana Bar", "ba"), vec![(0, 2), (7, 9)]);
        assert_eq!(match_ranges("Burger", ""), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("Egg", "omelette"), Vec::<(usize, usize)>::new());
    }
}
