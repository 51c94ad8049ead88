pub mod board;
pub mod filter;
pub mod item;
pub mod list;
pub mod reorder;
pub mod user;

pub use board::{Board, BoardId, ListView};
pub use filter::{ItemFilter, PriorityFacet};
pub use item::{Item, ItemId, Priority};
pub use list::{BoardList, ListColor, ListId};
pub use reorder::{reorder, DragSession, DropTarget, ReorderOutcome};
pub use user::{Theme, ThemePalette, User};
