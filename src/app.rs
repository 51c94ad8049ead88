//! Application state: the single writer for every board, list and item change.
//!
//! All mutating operations take `&mut self`, so changes are applied one at a
//! time and run to completion. Structural changes (boards and lists added or
//! removed) are forwarded to storage as they happen; item edits and drag
//! reorders are applied to the loaded board and then saved as a whole.

use crate::{
    config::Settings,
    domain::{
        Board, BoardId, BoardList, DragSession, DropTarget, Item, ItemId, ListColor, ListId,
        ListView, Priority, PriorityFacet, ReorderOutcome, Theme, User,
    },
    error::{CardboardError, Result},
    storage::Storage,
};
use tracing::{debug, info, warn};

/// What the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Board at this position in the board sequence
    Board(usize),
}

pub struct App<S: Storage> {
    settings: Settings,
    storage: S,
    boards: Vec<Board>,
    current_user: Option<User>,
    route: Route,
    drag: DragSession,
}

impl<S: Storage> App<S> {
    /// Creates an app with no boards loaded
    pub fn new(storage: S, settings: Settings) -> Self {
        Self {
            settings,
            storage,
            boards: Vec::new(),
            current_user: None,
            route: Route::Home,
            drag: DragSession::new(),
        }
    }

    /// Creates an app and loads every board from storage
    pub async fn load(storage: S, settings: Settings) -> Result<Self> {
        let mut app = Self::new(storage, settings);
        app.boards = app.storage.get_boards().await?;

        if app.boards.is_empty() && app.settings.seed_demo_board {
            app.seed_demo_board().await?;
        }

        debug!(boards = app.boards.len(), "boards loaded");
        Ok(app)
    }

    async fn seed_demo_board(&mut self) -> Result<()> {
        let board_id = self.create_board("My Board").await?;
        for (name, color) in [
            ("Todo", ListColor::LightGreen),
            ("Doing", ListColor::Amber500),
            ("Done", ListColor::Teal500),
        ] {
            self.add_list(board_id, name, Some(color)).await?;
        }
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // Users

    pub async fn register(&mut self, name: &str, password: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardboardError::EmptyName("User"));
        }
        self.storage.add_user(User::new(name, password)).await
    }

    pub async fn login(&mut self, name: &str, password: &str) -> Result<&User> {
        let user = self
            .storage
            .get_users()
            .await?
            .into_iter()
            .find(|user| user.name == name.trim() && user.check_password(password));

        match user {
            Some(user) => {
                info!(user = %user.name, "user logged in");
                let user: &User = self.current_user.insert(user);
                Ok(user)
            }
            None => {
                warn!(user = %name, "login failed");
                Err(CardboardError::InvalidCredentials)
            }
        }
    }

    pub fn logout(&mut self) -> Result<User> {
        self.current_user.take().ok_or(CardboardError::NotLoggedIn)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Active theme: the logged-in user's preference, else the configured one
    pub fn theme(&self) -> Theme {
        self.current_user
            .as_ref()
            .map(User::theme)
            .unwrap_or(self.settings.theme)
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        match self.current_user.as_mut() {
            Some(user) => {
                let theme = user.toggle_theme();
                self.storage.save_user(user).await?;
                Ok(theme)
            }
            None => {
                self.settings.theme = self.settings.theme.toggle();
                Ok(self.settings.theme)
            }
        }
    }

    // Navigation

    pub fn route(&self) -> Route {
        self.route
    }

    /// Switches the main view. An unknown board falls back to the home view.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.route = match route {
            Route::Board(index) if index >= self.boards.len() => {
                warn!(index, boards = self.boards.len(), "board route out of range, showing home");
                Route::Home
            }
            route => route,
        };
        self.drag.cancel();
        self.route
    }

    pub fn current_board(&self) -> Option<&Board> {
        match self.route {
            Route::Board(index) => self.boards.get(index),
            Route::Home => None,
        }
    }

    // Boards

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    fn board_index(&self, id: BoardId) -> Result<usize> {
        self.boards
            .iter()
            .position(|board| board.id == id)
            .ok_or(CardboardError::BoardNotFound(id))
    }

    fn board_mut(&mut self, id: BoardId) -> Result<&mut Board> {
        let index = self.board_index(id)?;
        Ok(&mut self.boards[index])
    }

    fn board_index_of_item(&self, id: ItemId) -> Result<usize> {
        self.boards
            .iter()
            .position(|board| board.contains_item(id))
            .ok_or(CardboardError::ItemNotFound(id))
    }

    pub async fn create_board(&mut self, name: &str) -> Result<BoardId> {
        let board = Board::new(self.storage.allocator().next_board_id(), name)?;
        self.storage.add_board(&board).await?;
        let id = board.id;
        self.boards.push(board);
        Ok(id)
    }

    pub async fn rename_board(&mut self, id: BoardId, name: &str) -> Result<()> {
        let index = self.board_index(id)?;
        self.boards[index].rename(name)?;
        self.storage.save_board(&self.boards[index]).await
    }

    /// Deletes a board with all of its lists and items
    pub async fn delete_board(&mut self, id: BoardId) -> Result<()> {
        let index = self.board_index(id)?;
        self.storage.remove_board(id).await?;
        self.boards.remove(index);

        if let Route::Board(current) = self.route {
            let route = if current == index {
                Route::Home
            } else if current > index {
                Route::Board(current - 1)
            } else {
                Route::Board(current)
            };
            self.navigate(route);
        }
        Ok(())
    }

    // Lists

    /// Adds a list to a board. Without a color the configured default is used.
    pub async fn add_list(
        &mut self,
        board_id: BoardId,
        name: &str,
        color: Option<ListColor>,
    ) -> Result<ListId> {
        let index = self.board_index(board_id)?;
        let color = color.unwrap_or(self.settings.default_list_color);
        let list = BoardList::new(self.storage.allocator().next_list_id(), board_id, name, color)?;
        self.storage.add_list(board_id, &list).await?;

        let id = list.id;
        self.boards[index].add_list(list);
        Ok(id)
    }

    pub async fn delete_list(&mut self, board_id: BoardId, list_id: ListId) -> Result<()> {
        let index = self.board_index(board_id)?;
        if self.boards[index].list(list_id).is_none() {
            return Err(CardboardError::ListNotFound(list_id));
        }
        self.storage.remove_list(board_id, list_id).await?;
        self.boards[index].remove_list(list_id);
        Ok(())
    }

    // Items

    pub async fn add_item(&mut self, board_id: BoardId, list_id: ListId, text: &str) -> Result<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CardboardError::EmptyName("Item"));
        }

        let index = self.board_index(board_id)?;
        let id = self.storage.allocator().next_item_id();
        self.boards[index]
            .list_mut(list_id)
            .ok_or(CardboardError::ListNotFound(list_id))?
            .add_item(Item::new(id, list_id, text));

        self.storage.save_board(&self.boards[index]).await?;
        Ok(id)
    }

    /// Applies `edit` to an item and saves its board
    async fn update_item<T>(&mut self, id: ItemId, edit: impl FnOnce(&mut Item) -> T) -> Result<T> {
        let index = self.board_index_of_item(id)?;
        let item = self.boards[index]
            .item_mut(id)
            .ok_or(CardboardError::ItemNotFound(id))?;
        let result = edit(item);
        self.storage.save_board(&self.boards[index]).await?;
        Ok(result)
    }

    pub async fn edit_item(&mut self, id: ItemId, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CardboardError::EmptyName("Item"));
        }
        self.update_item(id, |item| item.set_text(text)).await
    }

    pub async fn cycle_item_priority(&mut self, id: ItemId) -> Result<Priority> {
        self.update_item(id, Item::cycle_priority).await
    }

    /// Adds a tag; returns false when it was empty or already present
    pub async fn add_item_tag(&mut self, id: ItemId, tag: &str) -> Result<bool> {
        self.update_item(id, |item| item.add_tag(tag)).await
    }

    pub async fn remove_item_tag(&mut self, id: ItemId, tag: &str) -> Result<bool> {
        self.update_item(id, |item| item.remove_tag(tag)).await
    }

    pub async fn toggle_item_completed(&mut self, id: ItemId) -> Result<bool> {
        self.update_item(id, Item::toggle_completed).await
    }

    pub async fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let index = self.board_index_of_item(id)?;
        self.boards[index].remove_item(id);
        self.storage.save_board(&self.boards[index]).await
    }

    // Drag and drop

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn drag_start(&mut self, item: ItemId) {
        self.drag.start(item);
    }

    /// Returns whether the hovered target accepts the drop
    pub fn drag_over(&mut self, target: DropTarget) -> bool {
        self.drag.hover(target)
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Drops the dragged item onto `target` within the board that holds it
    pub async fn drop_on(&mut self, target: DropTarget) -> Result<ReorderOutcome> {
        let board_index = self
            .drag
            .dragged()
            .and_then(|dragged| self.board_index_of_item(dragged).ok());

        let Some(index) = board_index else {
            debug!("drop without a known dragged item, ignoring");
            self.drag.cancel();
            return Ok(ReorderOutcome::NotFound);
        };

        let outcome = self.drag.drop_on(&mut self.boards[index].lists, target);
        if outcome.is_mutation() {
            self.storage.save_board(&self.boards[index]).await?;
        }
        Ok(outcome)
    }

    // Filtering

    pub fn set_search_text(&mut self, board_id: BoardId, search_text: &str) -> Result<()> {
        self.board_mut(board_id)?.set_search_text(search_text);
        Ok(())
    }

    pub fn clear_search(&mut self, board_id: BoardId) -> Result<()> {
        self.board_mut(board_id)?.clear_search();
        Ok(())
    }

    pub fn set_priority_facet(&mut self, board_id: BoardId, facet: PriorityFacet) -> Result<()> {
        self.board_mut(board_id)?.set_priority_facet(facet);
        Ok(())
    }

    pub fn visible_items(&self, board_id: BoardId) -> Result<Vec<ListView>> {
        let index = self.board_index(board_id)?;
        Ok(self.boards[index].visible_items())
    }
}
