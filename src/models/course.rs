//! Course model.
//!
//! A course is the unit placed into a timetable cell. Each course is
//! tracked as scheduled or unscheduled as a whole and occupies exactly
//! one cell when scheduled, whatever its credit hours.

use serde::{Deserialize, Serialize};

/// A course offered in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Teaching faculty display name.
    pub faculty: String,
    /// Stable faculty identifier, when resolved against a roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    /// Owning department.
    pub dept: String,
    /// Credit hours.
    pub hours: u32,
}

impl Course {
    /// Creates a course in the "General" department with 3 credit hours.
    pub fn new(id: impl Into<String>, name: impl Into<String>, faculty: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faculty: faculty.into(),
            faculty_id: None,
            dept: "General".to_string(),
            hours: 3,
        }
    }

    /// Sets the department.
    pub fn with_dept(mut self, dept: impl Into<String>) -> Self {
        self.dept = dept.into();
        self
    }

    /// Sets the credit hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the stable faculty identifier.
    pub fn with_faculty_id(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = Some(faculty_id.into());
        self
    }

    /// Key used for clash comparison: the faculty id when known,
    /// otherwise the display name.
    pub fn faculty_key(&self) -> &str {
        self.faculty_id.as_deref().unwrap_or(&self.faculty)
    }
}
