//! Static suggestion chips and category cards for the hero screen.

/// Quick-pick dish suggestions shown under the search bar.
pub const SUGGESTIONS: &[&str] = &[
    "Paneer Butter Masala",
    "Chicken Biryani",
    "Masala Dosa",
    "Aloo Gobi",
    "Dal Makhani",
    "Samosa",
];

/// A browsable category card.
///
/// Each card displays a name and description but searches for a concrete
/// representative dish, so selecting one behaves exactly like typing that
/// dish and submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Display name (e.g. "Quick Meals").
    pub name: &'static str,
    /// One-line description shown under the name.
    pub description: &'static str,
    /// The dish actually searched for when the card is selected.
    pub search_term: &'static str,
}

/// All category cards in display order.
#[must_use]
pub const fn categories() -> &'static [Category] {
    &[
        Category {
            name: "Quick Meals",
            description: "Under 30 minutes",
            search_term: "Quick 20-minute Paneer Bhurji",
        },
        Category {
            name: "Healthy & Light",
            description: "Nutritious & wholesome",
            search_term: "Healthy Moong Dal Cheela",
        },
        Category {
            name: "Decadent Desserts",
            description: "Sweet indulgences",
            search_term: "Royal Shahi Tukda",
        },
        Category {
            name: "Vegetarian Mains",
            description: "Hearty & flavorful",
            search_term: "Palak Paneer",
        },
        Category {
            name: "Chicken Classics",
            description: "All-time favorites",
            search_term: "Classic Chicken Korma",
        },
        Category {
            name: "Breads & Rice",
            description: "Perfect accompaniments",
            search_term: "Garlic Naan on Tawa",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_suggestions_and_six_categories() {
        assert_eq!(SUGGESTIONS.len(), 6);
        assert_eq!(categories().len(), 6);
    }

    #[test]
    fn every_category_has_a_search_term() {
        for category in categories() {
            assert!(!category.name.is_empty());
            assert!(!category.description.is_empty());
            assert!(!category.search_term.is_empty());
        }
    }

    #[test]
    fn suggestions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for dish in SUGGESTIONS {
            assert!(seen.insert(dish), "duplicate suggestion: {dish}");
        }
    }
}
