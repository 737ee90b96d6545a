//! Greedy auto-placement.
//!
//! # Algorithm
//!
//! 1. Visit courses in catalog order (no reordering by priority,
//!    department or hours).
//! 2. Skip courses that already occupy a cell.
//! 3. Ask the [`PlacementStrategy`] for a cell; [`FirstFit`] scans days
//!    in order, then slots in order, and takes the first cell that is
//!    empty and has no faculty clash.
//! 4. Place the course there with no room.
//! 5. A course with no feasible cell stays unplaced. Earlier decisions
//!    are never revisited.
//!
//! The result is deterministic for a given catalog order and starting
//! grid. It is not guaranteed to be a maximal packing.
//!
//! # Complexity
//! O(c × d × s) where c=courses, d=days, s=slots.

use std::fmt::Debug;
use std::sync::Arc;

use super::has_clash;
use crate::models::{Catalog, CellKey, Course, Grid};

/// Chooses a cell for one course.
///
/// Implementations must only return keys that lie inside the grid.
pub trait PlacementStrategy: Send + Sync + Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Picks a cell for `course`, or `None` if nothing is feasible.
    fn place(&self, course: &Course, grid: &Grid, catalog: &Catalog) -> Option<CellKey>;
}

/// First empty, clash-free cell in day-then-slot order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn place(&self, course: &Course, grid: &Grid, catalog: &Catalog) -> Option<CellKey> {
        grid.iter()
            .find(|(key, cell)| {
                cell.is_empty()
                    && !has_clash(grid, catalog, course.faculty_key(), *key, &course.id)
            })
            .map(|(key, _)| key)
    }
}

/// Outcome of one auto-placement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Courses placed during this pass, in placement order.
    pub placed: Vec<(String, CellKey)>,
    /// Courses that were unscheduled and found no feasible cell.
    pub unplaced: Vec<String>,
}

impl PlacementReport {
    /// Number of newly placed courses.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Cell assigned to a course during this pass.
    pub fn cell_for(&self, course_id: &str) -> Option<CellKey> {
        self.placed
            .iter()
            .find(|(id, _)| id == course_id)
            .map(|&(_, key)| key)
    }
}

/// Runs a placement strategy over the whole catalog.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
/// use u_timetable::models::{Catalog, CellKey, Course, Grid};
/// use u_timetable::scheduler::AutoPlacer;
///
/// let mut grid = Grid::new(TimetableConfig::default().layout().unwrap());
/// let catalog = Catalog::from(vec![
///     Course::new("A", "Algebra", "FacX"),
///     Course::new("B", "Biology", "FacX"),
/// ]);
///
/// let report = AutoPlacer::new().run(&mut grid, &catalog);
/// assert_eq!(report.placed_count(), 2);
/// assert_eq!(report.cell_for("B"), Some(CellKey::new(0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct AutoPlacer {
    strategy: Arc<dyn PlacementStrategy>,
}

impl Default for AutoPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlacer {
    /// Creates a placer using [`FirstFit`].
    pub fn new() -> Self {
        Self {
            strategy: Arc::new(FirstFit),
        }
    }

    /// Replaces the placement strategy.
    pub fn with_strategy<S: PlacementStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Places every unscheduled course it can. Mutates `grid` in place.
    pub fn run(&self, grid: &mut Grid, catalog: &Catalog) -> PlacementReport {
        let mut report = PlacementReport::default();

        for course in catalog {
            if grid.contains_course(&course.id) {
                continue;
            }

            let chosen = self
                .strategy
                .place(course, grid, catalog)
                .filter(|&key| grid.cell(key).is_ok_and(|c| c.is_empty()));

            match chosen.map(|key| (key, grid.set_course(key, course.id.clone()))) {
                Some((key, Ok(()))) => {
                    tracing::debug!(course = %course.id, %key, "auto-placed");
                    report.placed.push((course.id.clone(), key));
                }
                Some((key, Err(e))) => {
                    tracing::warn!(course = %course.id, %key, error = %e, "placement rejected");
                    report.unplaced.push(course.id.clone());
                }
                None => {
                    tracing::debug!(course = %course.id, "no feasible cell");
                    report.unplaced.push(course.id.clone());
                }
            }
        }

        tracing::info!(
            strategy = self.strategy.name(),
            placed = report.placed.len(),
            unplaced = report.unplaced.len(),
            "auto-placement pass complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimetableConfig;

    fn grid() -> Grid {
        Grid::new(TimetableConfig::default().layout().unwrap())
    }

    fn small_grid() -> Grid {
        let cfg = TimetableConfig::new().with_days(["Mon"]).with_slots(["8-9", "9-10"]);
        Grid::new(cfg.layout().unwrap())
    }

    #[test]
    fn test_three_course_scenario() {
        let mut g = grid();
        let catalog = Catalog::from(vec![
            Course::new("A", "A", "FacX"),
            Course::new("B", "B", "FacX"),
            Course::new("C", "C", "FacY"),
        ]);

        let report = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(report.placed_count(), 3);
        assert!(report.unplaced.is_empty());

        let layout = g.layout().clone();
        assert_eq!(report.cell_for("A"), Some(layout.key("Mon", "8-9").unwrap()));
        assert_eq!(report.cell_for("B"), Some(layout.key("Mon", "9-10").unwrap()));
        assert_eq!(report.cell_for("C"), Some(layout.key("Mon", "10-11").unwrap()));
        assert_eq!(
            g.cell_by_label("Mon", "10-11").unwrap().course_id.as_deref(),
            Some("C")
        );
    }

    #[test]
    fn test_placed_cells_have_no_room() {
        let mut g = grid();
        let catalog = Catalog::from(vec![Course::new("A", "A", "FacX")]);
        AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(g.cell(CellKey::new(0, 0)).unwrap().room_id, None);
    }

    #[test]
    fn test_fills_around_existing_placements() {
        let mut g = grid();
        g.set_course(CellKey::new(0, 0), "X").unwrap();
        g.set_course(CellKey::new(0, 2), "Y").unwrap();
        let catalog = Catalog::from(vec![
            Course::new("X", "X", "F1"),
            Course::new("Y", "Y", "F2"),
            Course::new("A", "A", "F3"),
            Course::new("B", "B", "F4"),
        ]);

        let report = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(report.placed_count(), 2);
        assert_eq!(report.cell_for("A"), Some(CellKey::new(0, 1)));
        assert_eq!(report.cell_for("B"), Some(CellKey::new(0, 3)));
    }

    #[test]
    fn test_scheduled_courses_not_placed_twice() {
        let mut g = grid();
        let catalog = Catalog::from(vec![
            Course::new("A", "A", "FacX"),
            Course::new("B", "B", "FacY"),
        ]);
        let first = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(first.placed_count(), 2);

        let second = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(second.placed_count(), 0);
        assert!(second.unplaced.is_empty());
        assert_eq!(g.occupied_count(), 2);
    }

    #[test]
    fn test_idempotent_on_full_grid() {
        let mut g = small_grid();
        let catalog = Catalog::from(vec![
            Course::new("A", "A", "F1"),
            Course::new("B", "B", "F2"),
        ]);
        AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(g.occupied_count(), 2);

        let before = g.clone();
        let report = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(report.placed_count(), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn test_overflow_left_unplaced() {
        let mut g = small_grid();
        let catalog = Catalog::from(vec![
            Course::new("A", "A", "F1"),
            Course::new("B", "B", "F2"),
            Course::new("C", "C", "F3"),
        ]);
        let report = AutoPlacer::new().run(&mut g, &catalog);
        assert_eq!(report.placed_count(), 2);
        assert_eq!(report.unplaced, vec!["C"]);
    }

    #[test]
    fn test_deterministic() {
        let catalog = Catalog::from(
            (0..12)
                .map(|i| Course::new(format!("C{i}"), "n", format!("F{}", i % 3)))
                .collect::<Vec<_>>(),
        );
        let mut g1 = grid();
        let mut g2 = grid();
        let r1 = AutoPlacer::new().run(&mut g1, &catalog);
        let r2 = AutoPlacer::new().run(&mut g2, &catalog);
        assert_eq!(r1, r2);
        assert_eq!(g1, g2);
    }

    #[derive(Debug)]
    struct LastFit;

    impl PlacementStrategy for LastFit {
        fn name(&self) -> &'static str {
            "last-fit"
        }

        fn place(&self, _course: &Course, grid: &Grid, _catalog: &Catalog) -> Option<CellKey> {
            grid.iter()
                .filter(|(_, c)| c.is_empty())
                .map(|(k, _)| k)
                .last()
        }
    }

    #[derive(Debug)]
    struct Occupied;

    impl PlacementStrategy for Occupied {
        fn name(&self) -> &'static str {
            "occupied"
        }

        fn place(&self, _course: &Course, _grid: &Grid, _catalog: &Catalog) -> Option<CellKey> {
            Some(CellKey::new(0, 0))
        }
    }

    #[test]
    fn test_custom_strategy() {
        let mut g = grid();
        let catalog = Catalog::from(vec![Course::new("A", "A", "F1")]);
        let placer = AutoPlacer::new().with_strategy(LastFit);
        assert_eq!(placer.strategy_name(), "last-fit");

        let report = placer.run(&mut g, &catalog);
        assert_eq!(report.cell_for("A"), Some(CellKey::new(4, 5)));
    }

    #[test]
    fn test_strategy_cannot_overwrite() {
        let mut g = grid();
        g.set_course(CellKey::new(0, 0), "X").unwrap();
        let catalog = Catalog::from(vec![
            Course::new("X", "X", "F1"),
            Course::new("A", "A", "F2"),
        ]);
        let report = AutoPlacer::new().with_strategy(Occupied).run(&mut g, &catalog);
        assert_eq!(report.placed_count(), 0);
        assert_eq!(report.unplaced, vec!["A"]);
        assert_eq!(
            g.cell(CellKey::new(0, 0)).unwrap().course_id.as_deref(),
            Some("X")
        );
    }
}
