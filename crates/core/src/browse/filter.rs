use crate::category::{Categories, CategoryFilter};
use crate::events::Event;

/// Something the browse pages can search and filter.
pub trait Searchable {
    /// Fields matched by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Derived category tags.
    fn categories(&self) -> Categories;
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        if let Some(location) = &self.location {
            fields.push(location);
        }
        fields
    }

    fn categories(&self) -> Categories {
        Event::categories(self)
    }
}

/// Returns true if `item` matches an already lower-cased, trimmed needle.
fn matches_needle<T: Searchable>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keeps items where the query is a substring of any search field.
///
/// Matching is case-insensitive and unanchored. A blank query keeps
/// everything in its original order.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| matches_needle(*item, &needle))
        .collect()
}

/// Keeps items whose derived categories contain the active category.
pub fn filter_by_category<'a, T: Searchable>(items: &'a [T], filter: CategoryFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.accepts(&item.categories()))
        .collect()
}

/// Applies the search query and the category filter together.
pub fn apply_filters<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || matches_needle(*item, &needle))
        .filter(|item| filter.accepts(&item.categories()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use chrono::NaiveDate;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("Sunday Worship", make_date(2026, 2, 1))
                .with_description("Morning service with communion"),
            Event::new("Prayer & Bible Study", make_date(2026, 1, 28))
                .with_description("Midweek gathering"),
            Event::new("Youth Night", make_date(2026, 1, 30)).with_location("Youth Room"),
            Event::new("Christmas Cantata", make_date(2026, 12, 20)),
        ]
    }

    #[test]
    fn test_blank_query_is_identity() {
        let events = sample_events();
        for query in ["", "   ", "\t\n"] {
            let filtered = filter_by_query(&events, query);
            assert_eq!(filtered.len(), events.len());
            assert!(filtered.iter().zip(&events).all(|(a, b)| std::ptr::eq(*a, b)));
        }
    }

    #[test]
    fn test_query_matches_any_field_case_insensitive() {
        let events = sample_events();

        let by_name = filter_by_query(&events, "WORSHIP");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sunday Worship");

        let by_description = filter_by_query(&events, "communion");
        assert_eq!(by_description.len(), 1);

        let by_location = filter_by_query(&events, "room");
        assert_eq!(by_location[0].name, "Youth Night");
    }

    #[test]
    fn test_query_is_unanchored_substring() {
        let events = sample_events();
        assert_eq!(filter_by_query(&events, "ship").len(), 1);
        assert!(filter_by_query(&events, "worship night").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let events = sample_events();

        assert_eq!(filter_by_category(&events, CategoryFilter::All).len(), 4);

        let study = filter_by_category(&events, CategoryFilter::Only(Category::BibleStudy));
        assert_eq!(study.len(), 1);
        assert_eq!(study[0].name, "Prayer & Bible Study");

        let special = filter_by_category(&events, CategoryFilter::Only(Category::Special));
        assert_eq!(special[0].name, "Christmas Cantata");
    }

    #[test]
    fn test_filters_compose_in_either_order() {
        let events = sample_events();
        let filter = CategoryFilter::Only(Category::Wednesday);

        let combined: Vec<&str> = apply_filters(&events, "study", filter)
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        let search_first: Vec<Event> = filter_by_query(&events, "study").into_iter().cloned().collect();
        let then_category: Vec<&str> = filter_by_category(&search_first, filter)
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        let category_first: Vec<Event> = filter_by_category(&events, filter).into_iter().cloned().collect();
        let then_search: Vec<&str> = filter_by_query(&category_first, "study")
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(combined, vec!["Prayer & Bible Study"]);
        assert_eq!(combined, then_category);
        assert_eq!(combined, then_search);
    }
}
