use crate::domain::filter::{ItemFilter, PriorityFacet};
use crate::domain::item::{Item, ItemId};
use crate::domain::list::{BoardList, ListId};
use crate::error::{CardboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(u64);

impl BoardId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board-{}", self.0)
    }
}

/// Items of one list that pass the current board filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub list_id: ListId,
    pub visible: Vec<ItemId>,
}

/// Kanban board: an ordered sequence of lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub lists: Vec<BoardList>,
    /// Search and priority controls shared by every list. Presentation state only.
    #[serde(skip)]
    filter: ItemFilter,
}

impl Board {
    /// Creates an empty board. The name must not be blank.
    pub fn new(id: BoardId, name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardboardError::EmptyName("Board"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            lists: Vec::new(),
            filter: ItemFilter::default(),
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardboardError::EmptyName("Board"));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Appends a list, taking ownership of it
    pub fn add_list(&mut self, mut list: BoardList) {
        list.board_id = self.id;
        self.lists.push(list);
    }

    /// Removes a list together with its items
    pub fn remove_list(&mut self, id: ListId) -> Option<BoardList> {
        let index = self.lists.iter().position(|list| list.id == id)?;
        Some(self.lists.remove(index))
    }

    pub fn list(&self, id: ListId) -> Option<&BoardList> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut BoardList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Finds the list holding an item and the item's position in it
    pub fn locate_item(&self, id: ItemId) -> Option<(ListId, usize)> {
        self.lists
            .iter()
            .find_map(|list| list.position(id).map(|index| (list.id, index)))
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.locate_item(id).is_some()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.lists.iter().find_map(|list| list.item(id))
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.lists.iter_mut().find_map(|list| list.item_mut(id))
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        self.lists.iter_mut().find_map(|list| list.remove_item(id))
    }

    pub fn item_count(&self) -> usize {
        self.lists.iter().map(BoardList::len).sum()
    }

    pub fn filter(&self) -> &ItemFilter {
        &self.filter
    }

    pub fn set_search_text(&mut self, search_text: &str) {
        self.filter.set_search_text(search_text);
    }

    pub fn clear_search(&mut self) {
        self.filter.clear_search();
    }

    pub fn set_priority_facet(&mut self, priority: PriorityFacet) {
        self.filter.set_priority(priority);
    }

    /// Applies the board filter to each list independently
    pub fn visible_items(&self) -> Vec<ListView> {
        self.lists
            .iter()
            .map(|list| ListView {
                list_id: list.id,
                visible: list.visible_item_ids(&self.filter),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Priority;
    use crate::domain::list::ListColor;

    const A: ItemId = ItemId::new(1);
    const B: ItemId = ItemId::new(2);
    const C: ItemId = ItemId::new(3);

    /// Todo: [A (normal), B (high, "urgent")], Doing: [C]
    fn board() -> Board {
        let mut board = Board::new(BoardId::new(1), "Sprint").unwrap();

        let mut todo =
            BoardList::new(ListId::new(1), board.id, "Todo", ListColor::LightGreen).unwrap();
        todo.add_item(Item::new(A, todo.id, "A"));
        let mut b = Item::new(B, todo.id, "B");
        b.priority = Priority::High;
        b.add_tag("urgent");
        todo.add_item(b);

        let mut doing =
            BoardList::new(ListId::new(2), board.id, "Doing", ListColor::Amber500).unwrap();
        doing.add_item(Item::new(C, doing.id, "C"));

        board.add_list(todo);
        board.add_list(doing);
        board
    }

    fn visible_in(board: &Board, list: ListId) -> Vec<ItemId> {
        board
            .visible_items()
            .into_iter()
            .find(|view| view.list_id == list)
            .map(|view| view.visible)
            .unwrap_or_default()
    }

    #[test]
    fn test_board_requires_name() {
        assert!(Board::new(BoardId::new(1), "").is_err());
        assert!(Board::new(BoardId::new(1), " Roadmap ").unwrap().name == "Roadmap");
    }

    #[test]
    fn test_locate_item() {
        let board = board();
        assert_eq!(board.locate_item(B), Some((ListId::new(1), 1)));
        assert_eq!(board.locate_item(C), Some((ListId::new(2), 0)));
        assert_eq!(board.locate_item(ItemId::new(9)), None);
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_remove_list_cascades_items() {
        let mut board = board();
        let removed = board.remove_list(ListId::new(1)).unwrap();

        assert_eq!(removed.len(), 2);
        assert!(!board.contains_item(A));
        assert!(!board.contains_item(B));
        assert_eq!(board.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut board = board();
        assert_eq!(board.remove_item(C).map(|item| item.id), Some(C));
        assert!(board.list(ListId::new(2)).unwrap().is_empty());
        assert!(board.remove_item(C).is_none());
    }

    #[test]
    fn test_search_scenario() {
        let mut board = board();

        board.set_search_text("urgent");
        assert_eq!(visible_in(&board, ListId::new(1)), vec![B]);
        assert!(visible_in(&board, ListId::new(2)).is_empty());

        board.clear_search();
        board.set_priority_facet(PriorityFacet::High);
        assert_eq!(visible_in(&board, ListId::new(1)), vec![B]);

        board.set_priority_facet(PriorityFacet::All);
        assert_eq!(visible_in(&board, ListId::new(1)), vec![A, B]);
        assert_eq!(visible_in(&board, ListId::new(2)), vec![C]);
    }

    #[test]
    fn test_filter_does_not_touch_items() {
        let mut board = board();
        board.set_search_text("nothing matches");

        assert!(board.visible_items().iter().all(|view| view.visible.is_empty()));
        assert_eq!(board.item_count(), 3);
        assert_eq!(board.list(ListId::new(1)).unwrap().item_ids(), vec![A, B]);
    }

    #[test]
    fn test_filter_is_not_serialized() {
        let mut board = board();
        board.set_search_text("urgent");

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert!(restored.filter().is_default());
        assert_eq!(restored.item_count(), 3);
    }
}
