use crate::{
    domain::{Board, BoardId, BoardList, ListId, User},
    error::{CardboardError, Result},
    storage::{IdAllocator, Storage},
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Default)]
struct State {
    boards: Vec<Board>,
    users: Vec<User>,
}

impl State {
    fn board_mut(&mut self, id: BoardId) -> Result<&mut Board> {
        self.boards
            .iter_mut()
            .find(|board| board.id == id)
            .ok_or(CardboardError::BoardNotFound(id))
    }
}

/// Process-memory storage. Everything is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    ids: IdAllocator,
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn allocator(&self) -> &IdAllocator {
        &self.ids
    }

    async fn get_boards(&self) -> Result<Vec<Board>> {
        Ok(self.state.lock().await.boards.clone())
    }

    async fn get_board(&self, id: BoardId) -> Result<Board> {
        let state = self.state.lock().await;
        state
            .boards
            .iter()
            .find(|board| board.id == id)
            .cloned()
            .ok_or(CardboardError::BoardNotFound(id))
    }

    async fn add_board(&self, board: &Board) -> Result<()> {
        let mut state = self.state.lock().await;
        info!(board_id = %board.id, name = %board.name, "board added");
        state.boards.push(board.clone());
        Ok(())
    }

    async fn remove_board(&self, id: BoardId) -> Result<()> {
        let mut state = self.state.lock().await;
        let index = state
            .boards
            .iter()
            .position(|board| board.id == id)
            .ok_or(CardboardError::BoardNotFound(id))?;
        state.boards.remove(index);
        info!(board_id = %id, "board removed");
        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let mut state = self.state.lock().await;
        *state.board_mut(board.id)? = board.clone();
        Ok(())
    }

    async fn get_lists_by_board(&self, board_id: BoardId) -> Result<Vec<BoardList>> {
        let mut state = self.state.lock().await;
        Ok(state.board_mut(board_id)?.lists.clone())
    }

    async fn add_list(&self, board_id: BoardId, list: &BoardList) -> Result<()> {
        let mut state = self.state.lock().await;
        state.board_mut(board_id)?.add_list(list.clone());
        info!(board_id = %board_id, list_id = %list.id, name = %list.name, "list added");
        Ok(())
    }

    async fn remove_list(&self, board_id: BoardId, list_id: ListId) -> Result<()> {
        let mut state = self.state.lock().await;
        state
            .board_mut(board_id)?
            .remove_list(list_id)
            .ok_or(CardboardError::ListNotFound(list_id))?;
        info!(board_id = %board_id, list_id = %list_id, "list removed");
        Ok(())
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        Ok(self.state.lock().await.users.clone())
    }

    async fn add_user(&self, user: User) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.users.iter().any(|existing| existing.name == user.name) {
            return Err(CardboardError::UserExists(user.name));
        }
        info!(user = %user.name, "user registered");
        state.users.push(user);
        Ok(())
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.users.iter_mut().find(|existing| existing.name == user.name) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(CardboardError::UserNotFound(user.name.clone())),
        }
    }
}
