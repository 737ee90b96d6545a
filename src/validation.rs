//! Integrity checks for timetable data.
//!
//! Checks structural consistency of the catalog, rosters and grid.
//! Detects:
//! - Duplicate ids (courses, faculty, classrooms)
//! - Courses taught by faculty not on the roster
//! - Roster display names shared by several faculty members
//! - Cells referencing unknown courses or rooms
//! - Rooms assigned to cells with no course
//! - Courses placed in more than one cell
//!
//! All issues are collected; nothing short-circuits.

use crate::models::{Classroom, Course, Faculty, Grid};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id.
    DuplicateId,
    /// A course names a faculty member missing from the roster.
    UnknownFaculty,
    /// Several roster entries share a display name.
    AmbiguousFacultyName,
    /// A cell holds a course id missing from the catalog.
    InvalidCourseReference,
    /// A cell holds a room id missing from the classroom list.
    InvalidRoomReference,
    /// A cell has a room but no course.
    OrphanRoom,
    /// A course occupies more than one cell.
    DuplicatePlacement,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates timetable data.
///
/// Checks:
/// 1. No duplicate course, faculty or classroom ids
/// 2. No two faculty share a display name
/// 3. Every course's faculty resolves (by `faculty_id`, else by name)
/// 4. Every occupied cell references a known course
/// 5. Every room reference points to a known classroom
/// 6. No room is set on an empty cell
/// 7. No course occupies more than one cell
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_session(
    courses: &[Course],
    faculty: &[Faculty],
    classrooms: &[Classroom],
    grid: &Grid,
) -> ValidationResult {
    let mut errors = Vec::new();

    let course_ids = collect_ids(courses.iter().map(|c| c.id.as_str()), "course", &mut errors);
    let faculty_ids = collect_ids(faculty.iter().map(|f| f.id.as_str()), "faculty", &mut errors);
    let room_ids = collect_ids(
        classrooms.iter().map(|r| r.id.as_str()),
        "classroom",
        &mut errors,
    );

    // Shared display names
    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for f in faculty {
        *name_counts.entry(f.name.as_str()).or_insert(0) += 1;
    }
    let mut reported = HashSet::new();
    for f in faculty {
        if name_counts[f.name.as_str()] > 1 && reported.insert(f.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::AmbiguousFacultyName,
                format!("Faculty name '{}' is shared by several roster entries", f.name),
            ));
        }
    }

    // Course → faculty
    for course in courses {
        let known = match &course.faculty_id {
            Some(id) => faculty_ids.contains(id.as_str()),
            None => name_counts.contains_key(course.faculty.as_str()),
        };
        if !known {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!(
                    "Course '{}' is taught by unknown faculty '{}'",
                    course.id,
                    course.faculty_key()
                ),
            ));
        }
    }

    // Grid references
    let mut placed: HashMap<&str, (&str, &str)> = HashMap::new();
    for (key, cell) in grid.iter() {
        let (day, slot) = grid.layout().labels(key).unwrap_or(("?", "?"));
        match &cell.course_id {
            Some(course_id) if !course_ids.contains(course_id.as_str()) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCourseReference,
                    format!("Cell {day} {slot} references unknown course '{course_id}'"),
                ));
            }
            None if cell.room_id.is_some() => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OrphanRoom,
                    format!("Cell {day} {slot} has a room but no course"),
                ));
            }
            _ => {}
        }
        if let Some(course_id) = cell.course_id.as_deref() {
            if let Some((first_day, first_slot)) = placed.get(course_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePlacement,
                    format!(
                        "Course '{course_id}' is placed at {first_day} {first_slot} and again at {day} {slot}"
                    ),
                ));
            } else {
                placed.insert(course_id, (day, slot));
            }
        }
        if let Some(room_id) = &cell.room_id {
            if !room_ids.contains(room_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRoomReference,
                    format!("Cell {day} {slot} references unknown room '{room_id}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut set = HashSet::new();
    for id in ids {
        if !set.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    set
}
