//! Timetable utilization metrics.
//!
//! Read-only aggregates derived from the grid, for dashboards and
//! reports.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Occupied cells | Cells holding a course |
//! | Utilization | round(occupied / total × 100) |
//! | Most-used room | Room on the most occupied cells, first seen wins ties |
//! | Faculty load | Scheduled credit hours against the max load |

use crate::models::{Catalog, Classroom, Faculty, Grid};

/// Grid-wide utilization figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilizationStats {
    /// Cells holding a course.
    pub occupied_cells: usize,
    /// All cells in the grid.
    pub total_cells: usize,
    /// Rounded percentage of occupied cells (0..=100).
    pub utilization_percent: u32,
    /// Courses in the catalog.
    pub course_count: usize,
    /// Known classrooms.
    pub room_count: usize,
    /// Room id assigned to the most occupied cells.
    pub most_used_room: Option<String>,
}

impl UtilizationStats {
    /// Computes the statistics. Pure function of its inputs.
    pub fn calculate(grid: &Grid, catalog: &Catalog, classrooms: &[Classroom]) -> Self {
        let occupied = grid.occupied_count();
        let total = grid.len();

        let utilization_percent = if total == 0 {
            0
        } else {
            (occupied as f64 / total as f64 * 100.0).round() as u32
        };

        // Insertion-ordered tally so ties resolve to the first room seen.
        let mut usage: Vec<(&str, usize)> = Vec::new();
        for (_, cell) in grid.iter() {
            if let Some(room) = cell.effective_room() {
                match usage.iter_mut().find(|(r, _)| *r == room) {
                    Some((_, n)) => *n += 1,
                    None => usage.push((room, 1)),
                }
            }
        }
        let mut most_used: Option<(&str, usize)> = None;
        for &(room, n) in &usage {
            if most_used.is_none_or(|(_, best)| n > best) {
                most_used = Some((room, n));
            }
        }

        Self {
            occupied_cells: occupied,
            total_cells: total,
            utilization_percent,
            course_count: catalog.len(),
            room_count: classrooms.len(),
            most_used_room: most_used.map(|(r, _)| r.to_string()),
        }
    }
}

/// Scheduled teaching load of one faculty member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyLoad {
    /// Faculty id.
    pub faculty_id: String,
    /// Faculty display name.
    pub name: String,
    /// Sum of credit hours of this member's scheduled courses.
    pub scheduled_hours: u32,
    /// Configured maximum.
    pub max_load_hours: u32,
}

impl FacultyLoad {
    /// Computes loads for every roster member, in roster order.
    ///
    /// A course counts toward a member when its `faculty_id` matches, or,
    /// lacking an id, when its display name matches.
    pub fn calculate(grid: &Grid, catalog: &Catalog, roster: &[Faculty]) -> Vec<Self> {
        let scheduled: Vec<_> = catalog
            .iter()
            .filter(|c| grid.contains_course(&c.id))
            .collect();

        roster
            .iter()
            .map(|f| {
                let scheduled_hours = scheduled
                    .iter()
                    .filter(|c| match &c.faculty_id {
                        Some(id) => *id == f.id,
                        None => c.faculty == f.name,
                    })
                    .map(|c| c.hours)
                    .sum();
                Self {
                    faculty_id: f.id.clone(),
                    name: f.name.clone(),
                    scheduled_hours,
                    max_load_hours: f.max_load_hours,
                }
            })
            .collect()
    }

    /// Whether scheduled hours exceed the maximum load.
    pub fn is_overloaded(&self) -> bool {
        self.scheduled_hours > self.max_load_hours
    }
}
