//! Grid panel component: a ragged grid of selectable items with a cursor.
//!
//! Navigation uses bounds rejection: a move that would leave the grid, or
//! land past the end of a shorter row, is discarded and nothing changes.
//! Exactly one item is highlighted at any time, the one under the cursor.

use bevy_ecs::prelude::Component;

use crate::direction::Direction;

#[derive(Clone, Debug, PartialEq)]
pub struct GridItem {
    pub id: String,
    pub label: String,
    /// Opaque data handed to the host when the item is activated.
    pub payload: String,
    pub highlighted: bool,
}

impl GridItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            payload: payload.into(),
            highlighted: false,
        }
    }
}

/// Row/column position inside a [`GridPanel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}

impl GridCursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate in `direction`, or `None` when it would be
    /// negative. Does not check the upper bounds.
    pub fn step(self, direction: Direction) -> Option<GridCursor> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
            Direction::None => return None,
        };
        Some(GridCursor { row, col })
    }
}

#[derive(Component, Clone, Debug)]
pub struct GridPanel {
    rows: Vec<Vec<GridItem>>,
    cursor: GridCursor,
}

impl GridPanel {
    /// Build a panel from explicit rows. The cursor starts on the first item.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows or any row is empty.
    pub fn new(rows: Vec<Vec<GridItem>>) -> Self {
        assert!(!rows.is_empty(), "GridPanel needs at least one row");
        assert!(
            rows.iter().all(|row| !row.is_empty()),
            "GridPanel rows must not be empty"
        );
        let mut panel = Self {
            rows,
            cursor: GridCursor::default(),
        };
        for item in panel.rows.iter_mut().flatten() {
            item.highlighted = false;
        }
        panel.rows[0][0].highlighted = true;
        panel
    }

    /// Lay out a flat item list in rows of `per_row`; the last row may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty or `per_row` is zero.
    pub fn from_items(items: Vec<GridItem>, per_row: usize) -> Self {
        assert!(per_row > 0, "GridPanel row width must be positive");
        let mut rows: Vec<Vec<GridItem>> = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i % per_row == 0 {
                rows.push(Vec::with_capacity(per_row));
            }
            if let Some(row) = rows.last_mut() {
                row.push(item);
            }
        }
        Self::new(rows)
    }

    /// Start on a different item.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is not inside the grid.
    pub fn with_cursor(mut self, row: usize, col: usize) -> Self {
        let target = GridCursor::new(row, col);
        assert!(
            self.contains(target),
            "GridPanel cursor ({}, {}) is out of bounds",
            row,
            col
        );
        self.move_highlight(target);
        self
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    pub fn selected(&self) -> &GridItem {
        &self.rows[self.cursor.row][self.cursor.col]
    }

    pub fn rows(&self) -> &[Vec<GridItem>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn item(&self, cursor: GridCursor) -> Option<&GridItem> {
        self.rows.get(cursor.row)?.get(cursor.col)
    }

    /// `true` when `cursor` indexes an existing item. Column bounds are those
    /// of the cursor's own row.
    pub fn contains(&self, cursor: GridCursor) -> bool {
        cursor.row < self.rows.len() && cursor.col < self.rows[cursor.row].len()
    }

    /// Move the cursor one step. Returns `false`, leaving everything as is,
    /// when the target is outside the grid.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match self.cursor.step(direction) {
            Some(target) if self.contains(target) => {
                self.move_highlight(target);
                true
            }
            _ => false,
        }
    }

    fn move_highlight(&mut self, target: GridCursor) {
        let old = self.cursor;
        self.rows[old.row][old.col].highlighted = false;
        self.rows[target.row][target.col].highlighted = true;
        self.cursor = target;
    }
}
