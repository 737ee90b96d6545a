//! Week layout: the ordered day and slot axes of a timetable.
//!
//! Placement scans days in order and slots in order within each day, so
//! label order is significant. Cells are addressed by [`CellKey`], a pair
//! of indices into the two axes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::check_labels;
use crate::error::{Result, TimetableError};

/// Ordered day and slot labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout {
    days: Vec<String>,
    slots: Vec<String>,
}

/// Position of a cell: (day index, slot index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// Index into the day axis.
    pub day: usize,
    /// Index into the slot axis.
    pub slot: usize,
}

impl CellKey {
    /// Creates a key. Not checked against any layout.
    pub const fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.day, self.slot)
    }
}

impl WeekLayout {
    /// Creates a layout. Fails on empty axes, blank or duplicate labels.
    pub fn new(days: Vec<String>, slots: Vec<String>) -> Result<Self> {
        check_labels("day", &days)?;
        check_labels("slot", &slots)?;
        Ok(Self { days, slots })
    }

    /// Day labels in order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Slot labels in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Total number of cells (`|days| × |slots|`).
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Resolves labels to a key.
    pub fn key(&self, day: &str, slot: &str) -> Result<CellKey> {
        let d = self.days.iter().position(|x| x == day);
        let s = self.slots.iter().position(|x| x == slot);
        match (d, s) {
            (Some(day), Some(slot)) => Ok(CellKey { day, slot }),
            _ => Err(TimetableError::out_of_range(day, slot)),
        }
    }

    /// Checks that a key lies inside this layout.
    pub fn check(&self, key: CellKey) -> Result<()> {
        if key.day < self.days.len() && key.slot < self.slots.len() {
            Ok(())
        } else {
            Err(TimetableError::out_of_range(key.day, key.slot))
        }
    }

    /// Labels for a key, if in range.
    pub fn labels(&self, key: CellKey) -> Option<(&str, &str)> {
        let day = self.days.get(key.day)?;
        let slot = self.slots.get(key.slot)?;
        Some((day.as_str(), slot.as_str()))
    }

    /// Row-major offset of a key. Caller must have checked the key.
    #[inline]
    pub(crate) fn offset(&self, key: CellKey) -> usize {
        key.day * self.slots.len() + key.slot
    }

    /// All keys, days outer and slots inner.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        (0..self.days.len())
            .flat_map(move |day| (0..self.slots.len()).map(move |slot| CellKey { day, slot }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> WeekLayout {
        WeekLayout::new(
            vec!["Mon".into(), "Tue".into()],
            vec!["8-9".into(), "9-10".into(), "10-11".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_key_resolution() {
        let l = layout();
        assert_eq!(l.key("Tue", "9-10").unwrap(), CellKey::new(1, 1));
        assert_eq!(l.labels(CellKey::new(0, 2)), Some(("Mon", "10-11")));
    }

    #[test]
    fn test_out_of_range() {
        let l = layout();
        assert!(matches!(
            l.key("Sat", "8-9"),
            Err(TimetableError::OutOfRange { .. })
        ));
        assert!(l.key("Mon", "7-8").is_err());
        assert!(l.check(CellKey::new(2, 0)).is_err());
        assert!(l.check(CellKey::new(0, 3)).is_err());
        assert!(l.check(CellKey::new(1, 2)).is_ok());
        assert_eq!(l.labels(CellKey::new(5, 5)), None);
    }

    #[test]
    fn test_keys_order() {
        let keys: Vec<_> = layout().keys().collect();
        assert_eq!(keys.len(), 6);
        assert_eq!(keys[0], CellKey::new(0, 0));
        assert_eq!(keys[1], CellKey::new(0, 1));
        assert_eq!(keys[3], CellKey::new(1, 0));
    }

    #[test]
    fn test_offset_is_row_major() {
        let l = layout();
        for (i, key) in l.keys().enumerate() {
            assert_eq!(l.offset(key), i);
        }
    }

    #[test]
    fn test_invalid_layout() {
        assert!(WeekLayout::new(vec![], vec!["a".into()]).is_err());
        assert!(WeekLayout::new(vec!["Mon".into(), "Mon".into()], vec!["a".into()]).is_err());
    }
}
