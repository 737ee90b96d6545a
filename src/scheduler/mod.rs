//! Scheduling engine: clash detection, auto-placement and grid queries.
//!
//! - [`has_clash`]: cell-local faculty double-booking check.
//! - [`AutoPlacer`]: greedy one-pass placement behind a pluggable
//!   [`PlacementStrategy`].
//! - [`unscheduled_courses`]: catalog courses that occupy no cell.
//! - [`UtilizationStats`], [`FacultyLoad`]: read-only metrics.

mod clash;
mod placement;
mod stats;

pub use clash::has_clash;
pub use placement::{AutoPlacer, FirstFit, PlacementReport, PlacementStrategy};
pub use stats::{FacultyLoad, UtilizationStats};

use std::collections::HashSet;

use crate::models::{Catalog, Course, Grid};

/// Catalog courses whose id appears in no cell, in catalog order.
pub fn unscheduled_courses<'a>(grid: &Grid, catalog: &'a Catalog) -> Vec<&'a Course> {
    let scheduled: HashSet<&str> = grid
        .iter()
        .filter_map(|(_, cell)| cell.course_id.as_deref())
        .collect();
    catalog
        .iter()
        .filter(|c| !scheduled.contains(c.id.as_str()))
        .collect()
}
