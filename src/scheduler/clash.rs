//! Faculty clash detection.
//!
//! The check is local to one cell. It exists to stop a placement from
//! silently replacing another course taught by the same faculty member in
//! that exact slot. It does not scan the rest of the day or week.

use crate::models::{Catalog, CellKey, Grid};

/// Whether placing `candidate_course_id` at `key` would double-book
/// `faculty`.
///
/// `faculty` is compared against the occupying course's
/// [`faculty_key`](crate::models::Course::faculty_key).
///
/// | Target cell | Result |
/// |-------------|--------|
/// | empty or out of range | `false` |
/// | holds the candidate itself | `false` |
/// | holds an id missing from the catalog | `false` |
/// | holds another course with the same faculty | `true` |
/// | holds another course with a different faculty | `false` |
pub fn has_clash(
    grid: &Grid,
    catalog: &Catalog,
    faculty: &str,
    key: CellKey,
    candidate_course_id: &str,
) -> bool {
    let Ok(cell) = grid.cell(key) else {
        return false;
    };
    let Some(occupant_id) = cell.course_id.as_deref() else {
        return false;
    };
    if occupant_id == candidate_course_id {
        return false;
    }
    catalog
        .get(occupant_id)
        .is_some_and(|occupant| occupant.faculty_key() == faculty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimetableConfig;
    use crate::models::Course;

    fn setup() -> (Grid, Catalog) {
        let grid = Grid::new(TimetableConfig::default().layout().unwrap());
        let catalog = Catalog::from(vec![
            Course::new("A", "Algebra", "FacX"),
            Course::new("B", "Biology", "FacX"),
            Course::new("C", "Chemistry", "FacY"),
        ]);
        (grid, catalog)
    }

    #[test]
    fn test_empty_cell_never_clashes() {
        let (grid, catalog) = setup();
        for key in grid.layout().keys() {
            assert!(!has_clash(&grid, &catalog, "FacX", key, "A"));
            assert!(!has_clash(&grid, &catalog, "anyone", key, "nothing"));
        }
    }

    #[test]
    fn test_no_self_clash() {
        let (mut grid, catalog) = setup();
        let k = CellKey::new(0, 0);
        grid.set_course(k, "A").unwrap();
        assert!(!has_clash(&grid, &catalog, "FacX", k, "A"));
    }

    #[test]
    fn test_same_faculty_different_course_clashes() {
        let (mut grid, catalog) = setup();
        let k = CellKey::new(0, 0);
        grid.set_course(k, "A").unwrap();
        assert!(has_clash(&grid, &catalog, "FacX", k, "B"));
    }

    #[test]
    fn test_different_faculty_does_not_clash() {
        let (mut grid, catalog) = setup();
        let k = CellKey::new(0, 0);
        grid.set_course(k, "A").unwrap();
        assert!(!has_clash(&grid, &catalog, "FacY", k, "C"));
    }

    #[test]
    fn test_only_target_cell_inspected() {
        let (mut grid, catalog) = setup();
        grid.set_course(CellKey::new(0, 0), "A").unwrap();
        // Same slot on another day, and the next slot on the same day.
        assert!(!has_clash(&grid, &catalog, "FacX", CellKey::new(1, 0), "B"));
        assert!(!has_clash(&grid, &catalog, "FacX", CellKey::new(0, 1), "B"));
    }

    #[test]
    fn test_unknown_occupant_does_not_clash() {
        let (mut grid, catalog) = setup();
        let k = CellKey::new(2, 2);
        grid.set_course(k, "GHOST").unwrap();
        assert!(!has_clash(&grid, &catalog, "FacX", k, "A"));
    }

    #[test]
    fn test_out_of_range_does_not_clash() {
        let (grid, catalog) = setup();
        assert!(!has_clash(&grid, &catalog, "FacX", CellKey::new(99, 0), "A"));
    }

    #[test]
    fn test_faculty_id_takes_precedence_over_name() {
        let grid = Grid::new(TimetableConfig::default().layout().unwrap());
        let catalog = Catalog::from(vec![
            Course::new("A", "Algebra", "Dr. Lee").with_faculty_id("F1"),
            Course::new("B", "Botany", "Dr. Lee").with_faculty_id("F2"),
        ]);
        let mut grid = grid;
        let k = CellKey::new(0, 0);
        grid.set_course(k, "A").unwrap();

        let b = catalog.get("B").unwrap();
        // Same display name, different people.
        assert!(!has_clash(&grid, &catalog, b.faculty_key(), k, "B"));
        assert!(has_clash(&grid, &catalog, "F1", k, "B"));
    }
}
