//! Teaching resources: faculty members and classrooms.
//!
//! Faculty are matched to courses for clash detection and load reports.
//! Classrooms are referenced by id from grid cells; their capacity is
//! informational and never checked against enrollment.

use serde::{Deserialize, Serialize};

/// A faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Stable identifier.
    pub id: String,
    /// Display name, as written on courses.
    pub name: String,
    /// Maximum teaching load in credit hours. Reported, not enforced.
    pub max_load_hours: u32,
}

impl Faculty {
    /// Creates a faculty member with a 12-hour maximum load.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_load_hours: 12,
        }
    }

    /// Sets the maximum teaching load.
    pub fn with_max_load(mut self, hours: u32) -> Self {
        self.max_load_hours = hours;
        self
    }
}

/// A classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seats.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }
}

/// Resolves a display name to a faculty id.
///
/// Returns `None` when no roster entry has that name, or when several do
/// (an ambiguous name cannot identify one person).
pub fn resolve_faculty_id<'a>(roster: &'a [Faculty], name: &str) -> Option<&'a str> {
    let mut matches = roster.iter().filter(|f| f.name == name);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.id.as_str())
}
