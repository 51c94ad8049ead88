//! Drag-and-drop reordering of items within and across board lists.
//!
//! [`reorder`] is the pure algorithm run on a drop. [`DragSession`] tracks the
//! hover feedback a presentation layer shows while a drag is in flight.

use crate::domain::item::ItemId;
use crate::domain::list::{BoardList, ListId};
use tracing::debug;

/// Elevation of a card at rest
pub const RESTING_ELEVATION: u32 = 1;

/// Elevation of a card while a dragged item hovers over it
pub const HOVER_ELEVATION: u32 = 20;

/// Where a dragged item was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped onto another item
    Item(ItemId),
    /// Dropped onto empty space of a list; the dragged item lands at the tail
    EndOfList(ListId),
}

/// Result of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The item was dropped onto itself
    SelfDrop,
    /// The item moved within one list
    Reordered { list: ListId },
    /// The item moved to a different list
    Moved { from: ListId, to: ListId },
    /// The dragged item or the target could not be found; nothing changed
    NotFound,
}

impl ReorderOutcome {
    /// Whether any list sequence was changed
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Reordered { .. } | Self::Moved { .. })
    }
}

/// Moves `dragged` to the position described by `target`.
///
/// Cases are checked in order: self-drop, same-list reorder, cross-list move.
/// Within one list the dragged item takes over the slot of the target, so
/// dragging an item onto its lower neighbour swaps the two. Across lists the
/// dragged item lands immediately before the target. Every position is
/// resolved by item identity at the time of the drop.
///
/// # Examples
/// ```
/// use cardboard_core::domain::{reorder, BoardId, BoardList, DropTarget, Item, ItemId, ListColor, ListId};
///
/// let mut todo = BoardList::new(ListId::new(1), BoardId::new(1), "Todo", ListColor::default()).unwrap();
/// todo.add_item(Item::new(ItemId::new(1), todo.id, "A"));
/// todo.add_item(Item::new(ItemId::new(2), todo.id, "B"));
///
/// let mut lists = vec![todo];
/// reorder(&mut lists, ItemId::new(1), DropTarget::Item(ItemId::new(2)));
/// assert_eq!(lists[0].item_ids(), vec![ItemId::new(2), ItemId::new(1)]);
/// ```
pub fn reorder(lists: &mut [BoardList], dragged: ItemId, target: DropTarget) -> ReorderOutcome {
    let Some(from) = list_index_of(lists, dragged) else {
        debug!(item_id = %dragged, "dragged item not found, ignoring drop");
        return ReorderOutcome::NotFound;
    };

    let outcome = match target {
        DropTarget::Item(target_id) if target_id == dragged => ReorderOutcome::SelfDrop,
        DropTarget::Item(target_id) => match list_index_of(lists, target_id) {
            Some(to) if to == from => {
                lists[from].move_into_slot_of(dragged, target_id);
                ReorderOutcome::Reordered {
                    list: lists[from].id,
                }
            }
            Some(to) => match lists[from].remove_item(dragged) {
                Some(item) => {
                    lists[to].insert_before(item, target_id);
                    ReorderOutcome::Moved {
                        from: lists[from].id,
                        to: lists[to].id,
                    }
                }
                None => ReorderOutcome::NotFound,
            },
            None => {
                debug!(item_id = %dragged, target = %target_id, "drop target not found, ignoring drop");
                ReorderOutcome::NotFound
            }
        },
        DropTarget::EndOfList(list_id) => match lists.iter().position(|list| list.id == list_id) {
            Some(to) if to == from => {
                lists[from].move_to_end(dragged);
                ReorderOutcome::Reordered { list: list_id }
            }
            Some(to) => match lists[from].remove_item(dragged) {
                Some(item) => {
                    lists[to].add_item(item);
                    ReorderOutcome::Moved {
                        from: lists[from].id,
                        to: list_id,
                    }
                }
                None => ReorderOutcome::NotFound,
            },
            None => {
                debug!(item_id = %dragged, list_id = %list_id, "drop list not found, ignoring drop");
                ReorderOutcome::NotFound
            }
        },
    };

    debug!(item_id = %dragged, ?outcome, "item dropped");
    outcome
}

fn list_index_of(lists: &[BoardList], item: ItemId) -> Option<usize> {
    lists.iter().position(|list| list.contains(item))
}

/// Drag state and hover feedback for one board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<ItemId>,
    hovered: Option<DropTarget>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins dragging `item`, dropping any stale hover state
    pub fn start(&mut self, item: ItemId) {
        self.dragged = Some(item);
        self.hovered = None;
    }

    pub fn dragged(&self) -> Option<ItemId> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// A drag entered `target`. Returns whether the target will accept the drop.
    pub fn hover(&mut self, target: DropTarget) -> bool {
        if self.dragged.is_none() {
            return false;
        }
        self.hovered = Some(target);
        true
    }

    /// The drag left whatever it was hovering
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn highlighted(&self) -> Option<DropTarget> {
        self.hovered
    }

    pub fn elevation_of(&self, item: ItemId) -> u32 {
        if self.hovered == Some(DropTarget::Item(item)) {
            HOVER_ELEVATION
        } else {
            RESTING_ELEVATION
        }
    }

    /// Whether the insertion indicator above `target` is shown
    pub fn indicator_visible(&self, target: DropTarget) -> bool {
        self.hovered == Some(target)
    }

    /// Releases the dragged item onto `target`. Feedback is cleared whatever the outcome.
    pub fn drop_on(&mut self, lists: &mut [BoardList], target: DropTarget) -> ReorderOutcome {
        let outcome = match self.dragged {
            Some(dragged) => reorder(lists, dragged, target),
            None => ReorderOutcome::NotFound,
        };
        self.cancel();
        outcome
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::BoardId;
    use crate::domain::item::Item;
    use crate::domain::list::ListColor;

    const A: ItemId = ItemId::new(1);
    const B: ItemId = ItemId::new(2);
    const C: ItemId = ItemId::new(3);
    const D: ItemId = ItemId::new(4);
    const E: ItemId = ItemId::new(5);

    fn list(id: u64, name: &str, items: &[ItemId]) -> BoardList {
        let mut list =
            BoardList::new(ListId::new(id), BoardId::new(1), name, ListColor::default()).unwrap();
        for item in items {
            list.add_item(Item::new(*item, list.id, format!("{}", item)));
        }
        list
    }

    /// Todo: [A, B, C], Doing: [D, E]
    fn board_lists() -> Vec<BoardList> {
        vec![list(1, "Todo", &[A, B, C]), list(2, "Doing", &[D, E])]
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut lists = board_lists();
        let outcome = reorder(&mut lists, B, DropTarget::Item(B));

        assert_eq!(outcome, ReorderOutcome::SelfDrop);
        assert_eq!(lists[0].item_ids(), vec![A, B, C]);
        assert_eq!(lists[1].item_ids(), vec![D, E]);
    }

    #[test]
    fn test_same_list_drag_onto_next_item_swaps() {
        let mut lists = vec![list(1, "Todo", &[A, B])];
        let outcome = reorder(&mut lists, A, DropTarget::Item(B));

        assert_eq!(outcome, ReorderOutcome::Reordered { list: ListId::new(1) });
        assert_eq!(lists[0].item_ids(), vec![B, A]);
    }

    #[test]
    fn test_same_list_drag_forward() {
        let mut lists = board_lists();
        reorder(&mut lists, A, DropTarget::Item(C));
        assert_eq!(lists[0].item_ids(), vec![B, C, A]);
    }

    #[test]
    fn test_same_list_drag_backward_lands_before_target() {
        let mut lists = board_lists();
        reorder(&mut lists, C, DropTarget::Item(A));
        assert_eq!(lists[0].item_ids(), vec![C, A, B]);
    }

    #[test]
    fn test_same_list_reorder_keeps_length_and_uniqueness() {
        for dragged in [A, B, C] {
            for target in [A, B, C] {
                if dragged == target {
                    continue;
                }
                let mut lists = board_lists();
                let target_slot = lists[0].position(target).unwrap();
                reorder(&mut lists, dragged, DropTarget::Item(target));

                let ids = lists[0].item_ids();
                assert_eq!(ids.len(), 3);
                assert_eq!(ids.iter().filter(|id| **id == dragged).count(), 1);
                assert_eq!(lists[0].position(dragged), Some(target_slot));
                assert_eq!(lists[1].item_ids(), vec![D, E]);
            }
        }
    }

    #[test]
    fn test_cross_list_move() {
        let mut lists = board_lists();
        let outcome = reorder(&mut lists, A, DropTarget::Item(E));

        assert_eq!(
            outcome,
            ReorderOutcome::Moved {
                from: ListId::new(1),
                to: ListId::new(2)
            }
        );
        assert_eq!(lists[0].item_ids(), vec![B, C]);
        assert_eq!(lists[1].item_ids(), vec![D, A, E]);
        assert_eq!(lists[1].item(A).unwrap().list_id, ListId::new(2));
    }

    #[test]
    fn test_cross_list_move_onto_first_item() {
        let mut lists = board_lists();
        reorder(&mut lists, C, DropTarget::Item(D));

        assert_eq!(lists[0].len(), 2);
        assert_eq!(lists[1].len(), 3);
        assert_eq!(lists[1].position(C).unwrap() + 1, lists[1].position(D).unwrap());
    }

    #[test]
    fn test_drop_to_end_of_other_list() {
        let mut lists = board_lists();
        let outcome = reorder(&mut lists, B, DropTarget::EndOfList(ListId::new(2)));

        assert!(outcome.is_mutation());
        assert_eq!(lists[0].item_ids(), vec![A, C]);
        assert_eq!(lists[1].item_ids(), vec![D, E, B]);
    }

    #[test]
    fn test_drop_to_end_of_empty_list() {
        let mut lists = vec![list(1, "Todo", &[A]), list(2, "Done", &[])];
        reorder(&mut lists, A, DropTarget::EndOfList(ListId::new(2)));

        assert!(lists[0].is_empty());
        assert_eq!(lists[1].item_ids(), vec![A]);
    }

    #[test]
    fn test_drop_to_end_of_own_list() {
        let mut lists = board_lists();
        let outcome = reorder(&mut lists, A, DropTarget::EndOfList(ListId::new(1)));

        assert_eq!(outcome, ReorderOutcome::Reordered { list: ListId::new(1) });
        assert_eq!(lists[0].item_ids(), vec![B, C, A]);
    }

    #[test]
    fn test_missing_items_are_ignored() {
        let mut lists = board_lists();
        let missing = ItemId::new(42);

        assert_eq!(reorder(&mut lists, missing, DropTarget::Item(A)), ReorderOutcome::NotFound);
        assert_eq!(reorder(&mut lists, A, DropTarget::Item(missing)), ReorderOutcome::NotFound);
        assert_eq!(
            reorder(&mut lists, A, DropTarget::EndOfList(ListId::new(7))),
            ReorderOutcome::NotFound
        );
        assert_eq!(lists[0].item_ids(), vec![A, B, C]);
        assert_eq!(lists[1].item_ids(), vec![D, E]);
    }

    #[test]
    fn test_session_hover_feedback() {
        let mut session = DragSession::new();
        assert!(!session.hover(DropTarget::Item(B)));

        session.start(A);
        assert!(session.hover(DropTarget::Item(B)));
        assert_eq!(session.elevation_of(B), HOVER_ELEVATION);
        assert_eq!(session.elevation_of(C), RESTING_ELEVATION);
        assert!(session.indicator_visible(DropTarget::Item(B)));

        session.leave();
        assert_eq!(session.elevation_of(B), RESTING_ELEVATION);
        assert!(!session.indicator_visible(DropTarget::Item(B)));
        assert!(session.is_dragging());
    }

    #[test]
    fn test_session_drop_clears_feedback() {
        let mut lists = board_lists();
        let mut session = DragSession::new();

        session.start(A);
        session.hover(DropTarget::Item(D));
        let outcome = session.drop_on(&mut lists, DropTarget::Item(D));

        assert!(outcome.is_mutation());
        assert_eq!(session.highlighted(), None);
        assert_eq!(session.dragged(), None);
        assert_eq!(lists[1].item_ids(), vec![A, D, E]);
    }

    #[test]
    fn test_session_self_drop_clears_feedback() {
        let mut lists = board_lists();
        let mut session = DragSession::new();

        session.start(A);
        session.hover(DropTarget::Item(A));
        assert_eq!(session.drop_on(&mut lists, DropTarget::Item(A)), ReorderOutcome::SelfDrop);
        assert_eq!(session.elevation_of(A), RESTING_ELEVATION);
        assert_eq!(lists[0].item_ids(), vec![A, B, C]);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut lists = board_lists();
        let mut session = DragSession::new();
        assert_eq!(session.drop_on(&mut lists, DropTarget::Item(A)), ReorderOutcome::NotFound);
    }
}
