//! Timetable grid: the Day × Slot matrix of cells.
//!
//! The grid is a dense arena of `|days| × |slots|` cells stored row-major
//! (day outer, slot inner). Its length never changes after construction;
//! every mutation replaces the fields of exactly one cell.
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Grid, WeekLayout};
//!
//! let layout = WeekLayout::new(
//!     vec!["Mon".into(), "Tue".into()],
//!     vec!["8-9".into(), "9-10".into()],
//! ).unwrap();
//! let mut grid = Grid::new(layout);
//!
//! let key = grid.layout().key("Tue", "8-9").unwrap();
//! grid.set_course(key, "CSE101").unwrap();
//! grid.set_room(key, Some("R101".into())).unwrap();
//!
//! let cell = grid.cell_by_label("Tue", "8-9").unwrap();
//! assert_eq!(cell.course_id.as_deref(), Some("CSE101"));
//! assert_eq!(cell.room_id.as_deref(), Some("R101"));
//! assert_eq!(grid.occupied_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::{CellKey, WeekLayout};
use crate::error::{Result, TimetableError};

/// A single (day, slot) entry.
///
/// A room only carries meaning while a course occupies the cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Occupying course, if any.
    pub course_id: Option<String>,
    /// Assigned classroom, if any.
    pub room_id: Option<String>,
}

impl Cell {
    /// Whether no course occupies this cell.
    pub fn is_empty(&self) -> bool {
        self.course_id.is_none()
    }

    /// Room, but only when a course occupies the cell.
    pub fn effective_room(&self) -> Option<&str> {
        self.course_id.as_ref()?;
        self.room_id.as_deref()
    }
}

/// The timetable matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    layout: WeekLayout,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(layout: WeekLayout) -> Self {
        let cells = vec![Cell::default(); layout.cell_count()];
        Self { layout, cells }
    }

    /// The day/slot axes.
    pub fn layout(&self) -> &WeekLayout {
        &self.layout
    }

    /// Number of cells (always `|days| × |slots|`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Never true for a valid layout.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `key`.
    pub fn cell(&self, key: CellKey) -> Result<&Cell> {
        self.layout.check(key)?;
        Ok(&self.cells[self.layout.offset(key)])
    }

    /// Returns the cell at the given labels.
    pub fn cell_by_label(&self, day: &str, slot: &str) -> Result<&Cell> {
        let key = self.layout.key(day, slot)?;
        self.cell(key)
    }

    fn cell_mut(&mut self, key: CellKey) -> Result<&mut Cell> {
        self.layout.check(key)?;
        let offset = self.layout.offset(key);
        Ok(&mut self.cells[offset])
    }

    /// Puts a course in a cell.
    ///
    /// An occupied cell keeps its room; a previously empty cell starts
    /// without one.
    pub fn set_course(&mut self, key: CellKey, course_id: impl Into<String>) -> Result<()> {
        let course_id = course_id.into();
        let cell = self.cell_mut(key)?;
        if cell.course_id.is_none() {
            cell.room_id = None;
        }
        tracing::debug!(%key, course = %course_id, "set course");
        cell.course_id = Some(course_id);
        Ok(())
    }

    /// Replaces the room of a cell, leaving its course untouched.
    pub fn set_room(&mut self, key: CellKey, room_id: Option<String>) -> Result<()> {
        let cell = self.cell_mut(key)?;
        tracing::debug!(%key, room = ?room_id, "set room");
        cell.room_id = room_id;
        Ok(())
    }

    /// Empties a cell.
    pub fn clear_cell(&mut self, key: CellKey) -> Result<()> {
        let cell = self.cell_mut(key)?;
        tracing::debug!(%key, "clear cell");
        *cell = Cell::default();
        Ok(())
    }

    /// Iterates `(key, cell)` pairs, days outer and slots inner.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, &Cell)> + '_ {
        self.layout.keys().zip(self.cells.iter())
    }

    /// Number of cells holding a course.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether `course_id` occupies any cell.
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.find_course(course_id).is_some()
    }

    /// First cell holding `course_id`, in day-then-slot order.
    pub fn find_course(&self, course_id: &str) -> Option<CellKey> {
        self.iter()
            .find(|(_, c)| c.course_id.as_deref() == Some(course_id))
            .map(|(k, _)| k)
    }

    /// Complete, ordered external view of the grid.
    pub fn snapshot(&self) -> GridSnapshot {
        let slots = self.layout.slots();
        let days = self
            .layout
            .days()
            .iter()
            .zip(self.cells.chunks(slots.len()))
            .map(|(day, row)| DayRow {
                day: day.clone(),
                slots: slots
                    .iter()
                    .zip(row)
                    .map(|(slot, cell)| SlotEntry {
                        slot: slot.clone(),
                        cell: cell.clone(),
                    })
                    .collect(),
            })
            .collect();
        GridSnapshot { days }
    }

    /// Rebuilds a grid from a snapshot.
    ///
    /// Every day row must list the same slots in the same order.
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self> {
        let slot_labels: Vec<String> = match snapshot.days.first() {
            Some(row) => row.slots.iter().map(|e| e.slot.clone()).collect(),
            None => Vec::new(),
        };
        let day_labels: Vec<String> = snapshot.days.iter().map(|r| r.day.clone()).collect();
        let layout = WeekLayout::new(day_labels, slot_labels)?;

        let mut cells = Vec::with_capacity(layout.cell_count());
        for row in snapshot.days {
            if !row.slots.iter().map(|e| &e.slot).eq(layout.slots().iter()) {
                return Err(TimetableError::config(format!(
                    "snapshot day '{}' does not list the same slots as the first day",
                    row.day
                )));
            }
            cells.extend(row.slots.into_iter().map(|e| e.cell));
        }
        Ok(Self { layout, cells })
    }
}

/// Ordered Day → Slot → Cell view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// One row per day, in layout order.
    pub days: Vec<DayRow>,
}

/// Cells of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    /// Day label.
    pub day: String,
    /// Cells in slot order.
    pub slots: Vec<SlotEntry>,
}

/// One labelled cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    /// Slot label.
    pub slot: String,
    /// Cell contents.
    pub cell: Cell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimetableConfig;

    fn grid() -> Grid {
        Grid::new(TimetableConfig::default().layout().unwrap())
    }

    #[test]
    fn test_empty_grid() {
        let g = grid();
        assert_eq!(g.len(), 30);
        assert_eq!(g.occupied_count(), 0);
        for day in g.layout().days() {
            for slot in g.layout().slots() {
                let cell = g.cell_by_label(day, slot).unwrap();
                assert_eq!(cell.course_id, None);
                assert_eq!(cell.room_id, None);
            }
        }
    }

    #[test]
    fn test_cells_are_independent() {
        let mut g = grid();
        g.set_course(CellKey::new(0, 0), "A").unwrap();
        assert!(g.cell(CellKey::new(0, 1)).unwrap().is_empty());
        assert!(g.cell(CellKey::new(1, 0)).unwrap().is_empty());
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn test_get_cell_out_of_range() {
        let g = grid();
        assert!(matches!(
            g.cell_by_label("Sun", "8-9"),
            Err(TimetableError::OutOfRange { .. })
        ));
        assert!(g.cell(CellKey::new(0, 6)).is_err());
    }

    #[test]
    fn test_set_course_preserves_room() {
        let mut g = grid();
        let k = CellKey::new(2, 3);
        g.set_course(k, "A").unwrap();
        g.set_room(k, Some("R101".into())).unwrap();
        g.set_course(k, "B").unwrap();

        let cell = g.cell(k).unwrap();
        assert_eq!(cell.course_id.as_deref(), Some("B"));
        assert_eq!(cell.room_id.as_deref(), Some("R101"));
    }

    #[test]
    fn test_set_course_on_empty_cell_drops_stale_room() {
        let mut g = grid();
        let k = CellKey::new(0, 0);
        g.set_room(k, Some("R101".into())).unwrap();
        assert_eq!(g.cell(k).unwrap().effective_room(), None);

        g.set_course(k, "A").unwrap();
        assert_eq!(g.cell(k).unwrap().room_id, None);
    }

    #[test]
    fn test_set_room_preserves_course() {
        let mut g = grid();
        let k = CellKey::new(4, 5);
        g.set_course(k, "A").unwrap();
        g.set_room(k, Some("LAB3".into())).unwrap();
        assert_eq!(g.cell(k).unwrap().course_id.as_deref(), Some("A"));
        g.set_room(k, None).unwrap();
        assert_eq!(g.cell(k).unwrap().course_id.as_deref(), Some("A"));
        assert_eq!(g.cell(k).unwrap().room_id, None);
    }

    #[test]
    fn test_clear_cell() {
        let mut g = grid();
        let k = CellKey::new(1, 1);
        g.set_course(k, "A").unwrap();
        g.set_room(k, Some("R1".into())).unwrap();
        g.clear_cell(k).unwrap();
        assert_eq!(g.cell(k).unwrap(), &Cell::default());

        // Clearing an empty cell is fine too.
        g.clear_cell(k).unwrap();
        assert!(g.cell(k).unwrap().is_empty());
        assert_eq!(g.len(), 30);
    }

    #[test]
    fn test_mutation_out_of_range_leaves_grid_untouched() {
        let mut g = grid();
        let before = g.clone();
        assert!(g.set_course(CellKey::new(9, 0), "A").is_err());
        assert!(g.set_room(CellKey::new(0, 9), Some("R".into())).is_err());
        assert!(g.clear_cell(CellKey::new(9, 9)).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn test_find_course() {
        let mut g = grid();
        g.set_course(CellKey::new(3, 2), "X").unwrap();
        assert_eq!(g.find_course("X"), Some(CellKey::new(3, 2)));
        assert!(g.contains_course("X"));
        assert!(!g.contains_course("Y"));
    }

    #[test]
    fn test_snapshot_is_complete_and_ordered() {
        let mut g = grid();
        g.set_course(CellKey::new(0, 1), "A").unwrap();
        let snap = g.snapshot();
        assert_eq!(snap.days.len(), 5);
        assert!(snap.days.iter().all(|d| d.slots.len() == 6));
        assert_eq!(snap.days[0].day, "Mon");
        assert_eq!(snap.days[0].slots[1].slot, "9-10");
        assert_eq!(snap.days[0].slots[1].cell.course_id.as_deref(), Some("A"));

        let restored = Grid::from_snapshot(snap).unwrap();
        assert_eq!(restored, g);
    }

    #[test]
    fn test_snapshot_json() {
        let mut g = grid();
        g.set_course(CellKey::new(0, 0), "CSE101").unwrap();
        let json = serde_json::to_string(&g.snapshot()).unwrap();
        assert!(json.contains("\"day\":\"Mon\""));
        assert!(json.contains("\"course_id\":\"CSE101\""));

        let back: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(Grid::from_snapshot(back).unwrap(), g);
    }

    #[test]
    fn test_from_snapshot_rejects_ragged_rows() {
        let mut snap = grid().snapshot();
        snap.days[2].slots.pop();
        assert!(Grid::from_snapshot(snap).is_err());
    }
}
