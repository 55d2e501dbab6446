/// Categories offered when the search bar is empty.
pub const POPULAR_CATEGORIES: [&str; 8] = [
    "Gaming Laptops",
    "Wireless Headphones",
    "Smart Home",
    "Fitness Trackers",
    "Kitchen Appliances",
    "Phone Cases",
    "Books",
    "Office Chairs",
];

/// Query completions for the search bar.
///
/// An empty query yields the popular categories and a query of one or two
/// characters yields nothing.
pub fn search_suggestions(query: &str) -> Vec<String> {
    let query = query.trim();

    if query.is_empty() {
        return POPULAR_CATEGORIES
            .iter()
            .map(|category| (*category).to_string())
            .collect();
    }

    if query.chars().count() <= 2 {
        return Vec::new();
    }

    let lowered = query.to_lowercase();
    [
        format!("{query} under $100"),
        format!("best {query} 2024"),
        format!("{query} with good reviews"),
        format!("{query} on sale"),
        format!("{query} for beginners"),
    ]
    .into_iter()
    .filter(|suggestion| suggestion.to_lowercase().contains(&lowered))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_popular_categories() {
        let suggestions = search_suggestions("   ");

        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0], "Gaming Laptops");
    }

    #[test]
    fn short_query_has_no_suggestions() {
        assert!(search_suggestions("tv").is_empty());
    }

    #[test]
    fn query_is_expanded_into_templates() {
        assert_eq!(
            search_suggestions(" Laptop "),
            vec![
                "Laptop under $100",
                "best Laptop 2024",
                "Laptop with good reviews",
                "Laptop on sale",
                "Laptop for beginners",
            ]
        );
    }
}
