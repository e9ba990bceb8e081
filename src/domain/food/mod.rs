//! Food domain — catalog items, price filtering, sorting.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::FoodId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── FoodItem ────────────────────────────────────────────────────────────────

/// A catalog food item with a defensively-parsed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// Catalog sort key. Defaults to name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Category,
}

/// Sort direction. Defaults to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable in-place sort of a catalog slice.
///
/// String keys compare case-insensitively; equal keys keep their input order.
pub fn sort_catalog(items: &mut [FoodItem], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

// ─── Price filter ────────────────────────────────────────────────────────────

/// Keep items whose price lies in `[min, max]` (inclusive bounds).
///
/// Items whose price failed to parse carry price 0 and are tested against the
/// bounds as such; they are never dropped outright.
pub fn filter_by_price(items: &[FoodItem], min: Decimal, max: Decimal) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|item| item.price >= min && item.price <= max)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str, price: i64, category: &str) -> FoodItem {
        FoodItem {
            id: FoodId::from(id),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            category: category.to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let mut items = vec![food("a", "a", 30, "x"), food("b", "b", 10, "x"), food("c", "c", 20, "x")];
        sort_catalog(&mut items, SortKey::Price, SortDirection::Ascending);
        let prices: Vec<Decimal> = items.iter().map(|f| f.price).collect();
        assert_eq!(
            prices,
            vec![Decimal::from(10), Decimal::from(20), Decimal::from(30)]
        );
    }

    #[test]
    fn test_sort_by_name_descending_is_case_insensitive() {
        let mut items = vec![food("1", "apple", 1, "x"), food("2", "Banana", 1, "x"), food("3", "cherry", 1, "x")];
        sort_catalog(&mut items, SortKey::Name, SortDirection::Descending);
        let names: Vec<&str> = items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["cherry", "Banana", "apple"]);
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let mut items = vec![food("1", "Pasta", 1, "x"), food("2", "burger", 1, "x")];
        sort_catalog(&mut items, SortKey::default(), SortDirection::default());
        assert_eq!(items[0].name, "burger");
        assert_eq!(items[1].name, "Pasta");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            food("first", "Same", 5, "x"),
            food("second", "same", 5, "x"),
            food("third", "SAME", 5, "x"),
        ];
        sort_catalog(&mut items, SortKey::Name, SortDirection::Ascending);
        let ids: Vec<&str> = items.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_by_price_inclusive_bounds() {
        let items = vec![food("a", "a", 5, "x"), food("b", "b", 10, "x"), food("c", "c", 20, "x"), food("d", "d", 21, "x")];
        let kept = filter_by_price(&items, Decimal::from(10), Decimal::from(20));
        let ids: Vec<&str> = kept.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_filter_keeps_zero_priced_items_when_in_range() {
        // Unparsable prices decode to zero upstream.
        let items = vec![food("zero", "z", 0, "x"), food("ten", "t", 10, "x")];
        let kept = filter_by_price(&items, Decimal::ZERO, Decimal::from(5));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id.as_str(), "zero");
    }
}
