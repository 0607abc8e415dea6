//! Item filtering for the combo box list.
//!
//! The default rule keeps an entry when its rendered string contains the
//! filter text. Callers can replace it with any [`FilterPredicate`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::item::{ComboItem, ListItem};

/// Controls how the default filter handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "an" won't match "ANANAS").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "an" will match "Banana" and "ANANAS").
    #[default]
    CaseInsensitive,
}

/// A caller-supplied filter: `(entry, filter_text) -> keep`.
pub type FilterPredicate<T> = Arc<dyn Fn(&ComboItem<T>, &str) -> bool + Send + Sync>;

/// The default filter rule: substring containment of the entry's string.
///
/// Row wrappers are matched through their content.
pub fn default_matches<T: ListItem>(
    item: &ComboItem<T>,
    filter_text: &str,
    case_sensitivity: CaseSensitivity,
) -> bool {
    let text = item.render_to_string();
    match case_sensitivity {
        CaseSensitivity::CaseSensitive => text.contains(filter_text),
        CaseSensitivity::CaseInsensitive => text
            .to_lowercase()
            .contains(&filter_text.to_lowercase()),
    }
}

/// Build the default predicate for a case sensitivity.
pub fn default_predicate<T: ListItem>(case_sensitivity: CaseSensitivity) -> FilterPredicate<T> {
    Arc::new(move |item, filter_text| default_matches(item, filter_text, case_sensitivity))
}

/// Keep the entries of `items` that match `filter_text`, preserving order.
///
/// An empty filter keeps everything.
pub fn filter_items<T: ListItem>(
    items: &[ComboItem<T>],
    filter_text: &str,
    predicate: &FilterPredicate<T>,
) -> Vec<ComboItem<T>> {
    if filter_text.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| predicate(item, filter_text))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::plain_items;

    fn fruits() -> Vec<ComboItem<String>> {
        plain_items(["Apple", "Banana", "Peach", "ANANAS"])
    }

    fn texts(items: &[ComboItem<String>]) -> Vec<String> {
        items.iter().map(ComboItem::render_to_string).collect()
    }

    #[test]
    fn test_default_filter_is_case_insensitive_substring() {
        let predicate = default_predicate(CaseSensitivity::CaseInsensitive);
        let filtered = filter_items(&fruits(), "an", &predicate);
        assert_eq!(texts(&filtered), vec!["Banana", "ANANAS"]);
    }

    #[test]
    fn test_case_sensitive_filter() {
        let predicate = default_predicate(CaseSensitivity::CaseSensitive);
        let filtered = filter_items(&fruits(), "an", &predicate);
        assert_eq!(texts(&filtered), vec!["Banana"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let predicate = default_predicate(CaseSensitivity::CaseInsensitive);
        assert_eq!(filter_items(&fruits(), "", &predicate), fruits());
    }

    #[test]
    fn test_rows_match_through_content() {
        let items = vec![
            ComboItem::row("Cherry".to_string()),
            ComboItem::plain("Peach".to_string()),
        ];
        let predicate = default_predicate(CaseSensitivity::CaseInsensitive);
        let filtered = filter_items(&items, "ERR", &predicate);
        assert_eq!(filtered, vec![ComboItem::row("Cherry".to_string())]);
    }

    #[test]
    fn test_custom_predicate_prefix() {
        let predicate: FilterPredicate<String> =
            Arc::new(|item, text| item.render_to_string().starts_with(text));
        let filtered = filter_items(&fruits(), "A", &predicate);
        assert_eq!(texts(&filtered), vec!["Apple", "ANANAS"]);
    }
}
