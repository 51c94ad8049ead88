use crate::domain::board::BoardId;
use crate::domain::filter::ItemFilter;
use crate::domain::item::{Item, ItemId};
use crate::error::{CardboardError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a board list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListId(u64);

impl ListId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list-{}", self.0)
    }
}

/// Accent color chosen when a list is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListColor {
    #[default]
    LightGreen,
    Red200,
    Amber500,
    Pink300,
    Orange300,
    LightBlue,
    DeepOrange300,
    Purple100,
    Red700,
    Teal500,
    Yellow400,
    Purple400,
    Brown300,
    Cyan500,
    BlueGrey500,
}

impl ListColor {
    pub const ALL: [Self; 15] = [
        Self::LightGreen,
        Self::Red200,
        Self::Amber500,
        Self::Pink300,
        Self::Orange300,
        Self::LightBlue,
        Self::DeepOrange300,
        Self::Purple100,
        Self::Red700,
        Self::Teal500,
        Self::Yellow400,
        Self::Purple400,
        Self::Brown300,
        Self::Cyan500,
        Self::BlueGrey500,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightGreen => "light-green",
            Self::Red200 => "red200",
            Self::Amber500 => "amber500",
            Self::Pink300 => "pink300",
            Self::Orange300 => "orange300",
            Self::LightBlue => "light-blue",
            Self::DeepOrange300 => "deep-orange300",
            Self::Purple100 => "purple100",
            Self::Red700 => "red700",
            Self::Teal500 => "teal500",
            Self::Yellow400 => "yellow400",
            Self::Purple400 => "purple400",
            Self::Brown300 => "brown300",
            Self::Cyan500 => "cyan500",
            Self::BlueGrey500 => "blue-grey500",
        }
    }

    /// Material palette value as `#RRGGBB`
    pub const fn hex(self) -> &'static str {
        match self {
            Self::LightGreen => "#8BC34A",
            Self::Red200 => "#EF9A9A",
            Self::Amber500 => "#FFC107",
            Self::Pink300 => "#F06292",
            Self::Orange300 => "#FFB74D",
            Self::LightBlue => "#03A9F4",
            Self::DeepOrange300 => "#FF8A65",
            Self::Purple100 => "#E1BEE7",
            Self::Red700 => "#D32F2F",
            Self::Teal500 => "#009688",
            Self::Yellow400 => "#FFEE58",
            Self::Purple400 => "#AB47BC",
            Self::Brown300 => "#A1887F",
            Self::Cyan500 => "#00BCD4",
            Self::BlueGrey500 => "#607D8B",
        }
    }
}

impl fmt::Display for ListColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListColor {
    type Err = CardboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| CardboardError::InvalidColor(s.to_string()))
    }
}

/// An ordered column of items on a board.
///
/// The order of `items` is the display order and is what drag reordering mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    pub name: String,
    pub color: ListColor,
    /// Owning board. Lookup only; the board owns the list.
    pub board_id: BoardId,
    pub items: Vec<Item>,
}

impl BoardList {
    /// Creates an empty list. The name must not be blank.
    pub fn new(id: ListId, board_id: BoardId, name: &str, color: ListColor) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardboardError::EmptyName("List"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            color,
            board_id,
            items: Vec::new(),
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardboardError::EmptyName("List"));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Appends an item at the tail of the list
    pub fn add_item(&mut self, mut item: Item) {
        item.list_id = self.id;
        self.items.push(item);
    }

    /// Inserts an item immediately before `target`, or at the tail if `target` is absent
    pub fn insert_before(&mut self, mut item: Item, target: ItemId) {
        item.list_id = self.id;
        match self.position(target) {
            Some(index) => self.items.insert(index, item),
            None => self.items.push(item),
        }
    }

    /// Moves `dragged` into the slot `target` occupies, shifting the items in between.
    ///
    /// Dragging downward lands the item just after `target`, dragging upward
    /// lands it just before. Returns false when either item is not in this list.
    pub fn move_into_slot_of(&mut self, dragged: ItemId, target: ItemId) -> bool {
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Moves an item of this list to the tail
    pub fn move_to_end(&mut self, id: ItemId) -> bool {
        let Some(item) = self.remove_item(id) else {
            return false;
        };
        self.items.push(item);
        true
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_items<'a>(&'a self, filter: &'a ItemFilter) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    pub fn visible_item_ids(&self, filter: &ItemFilter) -> Vec<ItemId> {
        filter.apply(&self.items)
    }
}
