use crate::domain::item::{Item, ItemId, Priority};
use std::{fmt, str::FromStr};

/// Priority facet of the board filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFacet {
    #[default]
    All,
    High,
    Normal,
    Low,
}

impl PriorityFacet {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::High => priority == Priority::High,
            Self::Normal => priority == Priority::Normal,
            Self::Low => priority == Priority::Low,
        }
    }
}

impl From<Priority> for PriorityFacet {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => Self::High,
            Priority::Normal => Self::Normal,
            Priority::Low => Self::Low,
        }
    }
}

impl fmt::Display for PriorityFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Priorities"),
            Self::High => write!(f, "High Priority"),
            Self::Normal => write!(f, "Normal Priority"),
            Self::Low => write!(f, "Low Priority"),
        }
    }
}

impl FromStr for PriorityFacet {
    type Err = crate::error::CardboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => other.parse::<Priority>().map(Self::from),
        }
    }
}

/// Search text and priority facet applied to every list of a board.
///
/// Both criteria narrow the visible set: an item is shown only when its tags
/// match the search text and its priority matches the facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    search_text: String,
    priority: PriorityFacet,
}

impl ItemFilter {
    /// Creates a filter, trimming and lowercasing the search text
    pub fn new(search_text: &str, priority: PriorityFacet) -> Self {
        Self {
            search_text: normalize(search_text),
            priority,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn priority(&self) -> PriorityFacet {
        self.priority
    }

    pub fn set_search_text(&mut self, search_text: &str) {
        self.search_text = normalize(search_text);
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn set_priority(&mut self, priority: PriorityFacet) {
        self.priority = priority;
    }

    /// Whether a search is active, i.e. the clear-search control should be shown
    pub fn search_active(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// No search text and every priority: everything is visible
    pub fn is_default(&self) -> bool {
        self.search_text.is_empty() && self.priority == PriorityFacet::All
    }

    pub fn matches(&self, item: &Item) -> bool {
        let matches_tag =
            self.search_text.is_empty() || item.has_tag_containing(&self.search_text);
        matches_tag && self.priority.matches(item.priority)
    }

    /// Returns the ids of visible items, in list order
    pub fn apply(&self, items: &[Item]) -> Vec<ItemId> {
        if self.is_default() {
            return items.iter().map(|item| item.id).collect();
        }

        items
            .iter()
            .filter(|item| self.matches(item))
            .map(|item| item.id)
            .collect()
    }
}

fn normalize(search_text: &str) -> String {
    search_text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::ListId;

    fn todo_items() -> Vec<Item> {
        let list = ListId::new(1);
        let a = Item::new(ItemId::new(1), list, "A");
        let mut b = Item::new(ItemId::new(2), list, "B");
        b.priority = Priority::High;
        b.add_tag("urgent");
        vec![a, b]
    }

    #[test]
    fn test_search_by_tag() {
        let items = todo_items();
        let filter = ItemFilter::new("urgent", PriorityFacet::All);
        assert_eq!(filter.apply(&items), vec![ItemId::new(2)]);
    }

    #[test]
    fn test_filter_by_priority() {
        let items = todo_items();
        let filter = ItemFilter::new("", PriorityFacet::High);
        assert_eq!(filter.apply(&items), vec![ItemId::new(2)]);
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let items = todo_items();
        let filter = ItemFilter::default();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&items), vec![ItemId::new(1), ItemId::new(2)]);
    }

    #[test]
    fn test_search_text_is_normalized() {
        let items = todo_items();
        let filter = ItemFilter::new("  URG ", PriorityFacet::All);
        assert_eq!(filter.search_text(), "urg");
        assert!(filter.search_active());
        assert_eq!(filter.apply(&items), vec![ItemId::new(2)]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let items = todo_items();

        let filter = ItemFilter::new("urgent", PriorityFacet::Low);
        assert!(filter.apply(&items).is_empty());

        let filter = ItemFilter::new("urgent", PriorityFacet::High);
        assert_eq!(filter.apply(&items), vec![ItemId::new(2)]);
    }

    #[test]
    fn test_search_ignores_item_text() {
        let items = todo_items();
        let filter = ItemFilter::new("A", PriorityFacet::All);
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = todo_items();
        let filter = ItemFilter::new("urg", PriorityFacet::High);
        assert_eq!(filter.apply(&items), filter.apply(&items));
    }

    #[test]
    fn test_default_filter_is_superset() {
        let items = todo_items();
        let everything = ItemFilter::default().apply(&items);

        for facet in [
            PriorityFacet::All,
            PriorityFacet::High,
            PriorityFacet::Normal,
            PriorityFacet::Low,
        ] {
            for text in ["", "urgent", "nothing"] {
                let visible = ItemFilter::new(text, facet).apply(&items);
                assert!(visible.iter().all(|id| everything.contains(id)));
            }
        }
    }

    #[test]
    fn test_clear_search_keeps_priority() {
        let mut filter = ItemFilter::new("urgent", PriorityFacet::Low);
        filter.clear_search();
        assert!(!filter.search_active());
        assert_eq!(filter.priority(), PriorityFacet::Low);
        assert!(!filter.is_default());
    }

    #[test]
    fn test_priority_facet_parsing() {
        assert_eq!("all".parse::<PriorityFacet>().unwrap(), PriorityFacet::All);
        assert_eq!("Normal".parse::<PriorityFacet>().unwrap(), PriorityFacet::Normal);
        assert!("none".parse::<PriorityFacet>().is_err());
    }
}
