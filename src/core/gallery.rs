//! Pure filtering logic for the item gallery.
//!
//! The gallery never stores a filtered collection as an independent source of
//! truth; the functions here are recomputed from (items, search term, type
//! filter) on every input change.

use crate::models::Item;

/// Sentinel filter value meaning "no type filter".
pub const ALL_TYPES: &str = "all";

/// Whether an item matches the current search term and type filter.
///
/// Search: case-insensitive substring match against `name` or `description`.
/// An empty term matches everything. Type: case-insensitive equality against
/// `item_type`, with [`ALL_TYPES`] matching everything. No trimming or fuzzy
/// matching beyond case folding.
pub fn matches_query(item: &Item, search_term: &str, filter_type: &str) -> bool {
    let term = search_term.to_lowercase();
    let matches_search = item.name.to_lowercase().contains(&term)
        || item.description.to_lowercase().contains(&term);

    let matches_type =
        filter_type == ALL_TYPES || item.item_type.to_lowercase() == filter_type.to_lowercase();

    matches_search && matches_type
}

/// Stable filter over the fetched collection.
///
/// The result is a subsequence of `items` in original (server) order.
pub fn filter_items(items: &[Item], search_term: &str, filter_type: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_query(item, search_term, filter_type))
        .cloned()
        .collect()
}

/// Distinct `item_type` values in first-seen order, for the filter dropdown.
pub fn available_types(items: &[Item]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for item in items {
        if !types.contains(&item.item_type) {
            types.push(item.item_type.clone());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, item_type: &str, description: &str) -> Item {
        Item {
            id: format!("id-{}", name),
            name: name.to_string(),
            item_type: item_type.to_string(),
            description: description.to_string(),
            images: vec!["img0.jpg".to_string()],
            created_at: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Red Chair", "Furniture", "A comfortable red armchair"),
            item("Blue Lamp", "Lighting", "Desk lamp with a blue shade"),
            item("Oak Table", "Furniture", "Solid oak dining table"),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = sample();
        assert_eq!(filter_items(&items, "", ALL_TYPES), items);
    }

    #[test]
    fn test_search_matches_name() {
        let items = sample();
        let result = filter_items(&items, "lamp", ALL_TYPES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Blue Lamp");
    }

    #[test]
    fn test_search_matches_description() {
        let items = sample();
        let result = filter_items(&items, "dining", ALL_TYPES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Oak Table");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = sample();
        assert_eq!(filter_items(&items, "RED", ALL_TYPES).len(), 1);
        assert_eq!(filter_items(&items, "oAk", ALL_TYPES).len(), 1);
    }

    #[test]
    fn test_type_filter() {
        let items = sample();
        let result = filter_items(&items, "", "Furniture");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Red Chair");
        assert_eq!(result[1].name, "Oak Table");
    }

    #[test]
    fn test_type_filter_is_case_insensitive() {
        let items = sample();
        assert_eq!(filter_items(&items, "", "furniture").len(), 2);
        assert_eq!(filter_items(&items, "", "LIGHTING").len(), 1);
    }

    #[test]
    fn test_search_and_filter_compose() {
        let items = sample();
        let result = filter_items(&items, "table", "Furniture");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Oak Table");

        // A name match in the wrong category is excluded
        assert!(filter_items(&items, "lamp", "Furniture").is_empty());
    }

    #[test]
    fn test_filter_soundness_and_completeness() {
        let items = sample();
        let result = filter_items(&items, "a", "furniture");

        // Every result satisfies the predicate and came from the input
        for kept in &result {
            assert!(matches_query(kept, "a", "furniture"));
            assert!(items.contains(kept));
        }
        // Every matching input appears in the result
        for candidate in &items {
            if matches_query(candidate, "a", "furniture") {
                assert!(result.contains(candidate));
            }
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = sample();
        let result = filter_items(&items, "", ALL_TYPES);
        let positions: Vec<usize> = result
            .iter()
            .map(|r| items.iter().position(|i| i == r).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_available_types_first_seen_order_no_duplicates() {
        let items = vec![
            item("a", "Furniture", ""),
            item("b", "Lighting", ""),
            item("c", "Furniture", ""),
            item("d", "Decor", ""),
        ];
        assert_eq!(available_types(&items), vec!["Furniture", "Lighting", "Decor"]);
    }

    #[test]
    fn test_available_types_empty_collection() {
        assert!(available_types(&[]).is_empty());
    }

    #[test]
    fn test_search_without_type_filter() {
        let items = vec![
            item("Red Chair", "Furniture", "a chair"),
            item("Blue Lamp", "Lighting", "a lamp"),
        ];
        let result = filter_items(&items, "lamp", ALL_TYPES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Blue Lamp");
    }

    #[test]
    fn test_type_filter_without_search() {
        let items = vec![
            item("Red Chair", "Furniture", "a chair"),
            item("Blue Lamp", "Lighting", "a lamp"),
        ];
        let result = filter_items(&items, "", "Furniture");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Red Chair");
    }
}
