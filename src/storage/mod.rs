use crate::{
    domain::{Board, BoardId, BoardList, ItemId, ListId, User},
    error::Result,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

/// Hands out board, list and item ids.
///
/// Each kind has its own counter starting at 1. Ids are never reused.
#[derive(Debug)]
pub struct IdAllocator {
    next_board: AtomicU64,
    next_list: AtomicU64,
    next_item: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_board: AtomicU64::new(1),
            next_list: AtomicU64::new(1),
            next_item: AtomicU64::new(1),
        }
    }

    pub fn next_board_id(&self) -> BoardId {
        BoardId::new(self.next_board.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_list_id(&self) -> ListId {
        ListId::new(self.next_list.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_item_id(&self) -> ItemId {
        ItemId::new(self.next_item.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage trait for boards, lists and users.
///
/// Drag reordering and item edits happen on in-memory boards; callers hand the
/// whole board back with [`Storage::save_board`] once they are done.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Id allocator owned by this store
    fn allocator(&self) -> &IdAllocator;

    /// Returns all boards in creation order
    async fn get_boards(&self) -> Result<Vec<Board>>;

    /// Loads a board by ID
    async fn get_board(&self, id: BoardId) -> Result<Board>;

    /// Adds a new board
    async fn add_board(&self, board: &Board) -> Result<()>;

    /// Removes a board with its lists and items
    async fn remove_board(&self, id: BoardId) -> Result<()>;

    /// Replaces the stored copy of a board
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Returns the lists of a board in display order
    async fn get_lists_by_board(&self, board_id: BoardId) -> Result<Vec<BoardList>>;

    /// Appends a list to a board
    async fn add_list(&self, board_id: BoardId, list: &BoardList) -> Result<()>;

    /// Removes a list and its items from a board
    async fn remove_list(&self, board_id: BoardId, list_id: ListId) -> Result<()>;

    /// Returns all registered users
    async fn get_users(&self) -> Result<Vec<User>>;

    /// Registers a user; names are unique
    async fn add_user(&self, user: User) -> Result<()>;

    /// Replaces a stored user, matched by name
    async fn save_user(&self, user: &User) -> Result<()>;
}
