//! Scheduling session: the aggregate callers drive.
//!
//! A session owns the grid, course catalog, faculty roster, classrooms
//! and notification feed, and applies user actions to them one at a
//! time. Every mutating method takes `&mut self`, so a session has a
//! single writer and each action completes before the next begins.
//!
//! # Roles
//!
//! | Role | Edit cells | Auto-schedule / import / publish |
//! |------|-----------|----------------------------------|
//! | Admin | yes | yes |
//! | Faculty | yes | no |
//! | Student | no | no |
//!
//! # Example
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//! use u_timetable::models::{Course, Faculty};
//! use u_timetable::session::{PlacementOutcome, SchedulingSession};
//!
//! let mut session = SchedulingSession::new(TimetableConfig::default())
//!     .unwrap()
//!     .with_faculty(vec![Faculty::new("F1", "Dr. Rao")])
//!     .with_courses(vec![
//!         Course::new("CSE101", "Data Structures", "Dr. Rao"),
//!         Course::new("CSE102", "Algorithms", "Dr. Rao"),
//!     ]);
//!
//! let outcome = session.place_course("Mon", "8-9", "CSE101").unwrap();
//! assert!(matches!(outcome, PlacementOutcome::Placed(_)));
//!
//! // Same faculty, same cell: refused.
//! let outcome = session.place_course("Mon", "8-9", "CSE102").unwrap();
//! assert!(matches!(outcome, PlacementOutcome::Clash { .. }));
//!
//! let report = session.auto_schedule().unwrap();
//! assert_eq!(report.placed_count(), 1);
//! assert_eq!(session.notifications().latest().unwrap().message, "Auto-scheduled 1 courses");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::config::TimetableConfig;
use crate::error::{Result, TimetableError};
use crate::import::{CourseImporter, ImportBatch};
use crate::models::{
    resolve_faculty_id, Catalog, Cell, CellKey, Classroom, Course, Faculty, Grid, GridSnapshot,
    NotificationFeed,
};
use crate::scheduler::{
    has_clash, unscheduled_courses, AutoPlacer, FacultyLoad, PlacementReport, UtilizationStats,
};
use crate::validation::{validate_session, ValidationResult};

/// Who is operating the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full control.
    #[default]
    Admin,
    /// May edit cells.
    Faculty,
    /// Read-only.
    Student,
}

impl Role {
    /// Whether this role may place, clear or re-room cells.
    pub fn can_edit_grid(self) -> bool {
        matches!(self, Role::Admin | Role::Faculty)
    }

    /// Whether this role may auto-schedule, import and publish.
    pub fn can_administer(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "Admin",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        };
        f.write_str(name)
    }
}

/// Result of a manual placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The course now occupies the cell.
    Placed(CellKey),
    /// The cell holds another course by the same faculty; nothing changed.
    Clash {
        /// Faculty display name of the refused course.
        faculty: String,
        /// Course currently in the cell.
        occupant: String,
    },
    /// The course already occupies another cell; nothing changed.
    AlreadyScheduled(CellKey),
    /// The course id is not in the catalog; nothing changed.
    UnknownCourse,
}

/// Grid, catalog, rosters and notifications under one owner.
#[derive(Debug, Clone)]
pub struct SchedulingSession {
    config: TimetableConfig,
    grid: Grid,
    catalog: Catalog,
    faculty: Vec<Faculty>,
    classrooms: Vec<Classroom>,
    notifications: NotificationFeed,
    role: Role,
    current_faculty: Option<String>,
    placer: AutoPlacer,
    importer: CourseImporter,
    resolved_ids: HashSet<String>,
}

impl SchedulingSession {
    /// Creates an empty session for the configured week.
    pub fn new(config: TimetableConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.layout()?);
        Ok(Self {
            notifications: NotificationFeed::with_capacity(config.notification_capacity),
            importer: CourseImporter::from_config(&config),
            config,
            grid,
            catalog: Catalog::new(),
            faculty: Vec::new(),
            classrooms: Vec::new(),
            role: Role::Admin,
            current_faculty: None,
            placer: AutoPlacer::new(),
            resolved_ids: HashSet::new(),
        })
    }

    /// Adds courses; ids already present are dropped.
    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.catalog.extend_new(courses);
        self.resolve_faculty_ids();
        self
    }

    /// Sets the faculty roster.
    ///
    /// Faculty ids filled in from an earlier roster are resolved again;
    /// ids supplied with a course are kept.
    pub fn with_faculty(mut self, faculty: Vec<Faculty>) -> Self {
        self.faculty = faculty;
        if self.current_faculty.is_none() {
            self.current_faculty = self.faculty.first().map(|f| f.name.clone());
        }
        self.resolve_faculty_ids();
        self
    }

    /// Sets the classrooms.
    pub fn with_classrooms(mut self, classrooms: Vec<Classroom>) -> Self {
        self.classrooms = classrooms;
        self
    }

    /// Sets the acting role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Replaces the auto-placement engine.
    pub fn with_placer(mut self, placer: AutoPlacer) -> Self {
        self.placer = placer;
        self
    }

    /// Fills in `faculty_id` for courses whose faculty name matches
    /// exactly one roster entry. `resolved_ids` holds the courses whose id
    /// came from the roster rather than from the caller.
    fn resolve_faculty_ids(&mut self) {
        let roster = &self.faculty;
        for course in self.catalog.iter_mut() {
            let derived = self.resolved_ids.contains(&course.id);
            if course.faculty_id.is_some() && !derived {
                continue;
            }
            course.faculty_id = resolve_faculty_id(roster, &course.faculty).map(str::to_string);
            if course.faculty_id.is_some() {
                self.resolved_ids.insert(course.id.clone());
            } else {
                self.resolved_ids.remove(&course.id);
            }
        }
    }

    fn require(&self, allowed: bool, action: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            tracing::warn!(role = %self.role, action, "action refused");
            Err(TimetableError::Forbidden {
                role: self.role,
                action,
            })
        }
    }

    fn notify(&mut self, message: String) {
        tracing::debug!(%message, "notify");
        self.notifications.push(message);
    }

    // ======================== Mutations ========================

    /// Places a course in the cell at (`day`, `slot`).
    ///
    /// An occupied cell keeps its room. A clash with the same faculty
    /// leaves the grid unchanged and is reported through the outcome and
    /// a notification. A course occupies at most one cell, so placing a
    /// course that is already elsewhere in the grid is refused.
    ///
    /// # Errors
    /// `Forbidden` for students, `OutOfRange` for unknown labels.
    pub fn place_course(
        &mut self,
        day: &str,
        slot: &str,
        course_id: &str,
    ) -> Result<PlacementOutcome> {
        self.require(self.role.can_edit_grid(), "edit the timetable")?;
        let key = self.grid.layout().key(day, slot)?;

        let Some(course) = self.catalog.get(course_id) else {
            tracing::debug!(course = course_id, "ignoring unknown course");
            return Ok(PlacementOutcome::UnknownCourse);
        };

        if let Some(current) = self.grid.find_course(course_id).filter(|&k| k != key) {
            let name = course.name.clone();
            let (at_day, at_slot) = self.grid.layout().labels(current).unwrap_or(("?", "?"));
            let message = format!("{name} is already scheduled at {at_day} {at_slot}");
            tracing::debug!(course = course_id, %current, "course already scheduled");
            self.notify(message);
            return Ok(PlacementOutcome::AlreadyScheduled(current));
        }

        if has_clash(&self.grid, &self.catalog, course.faculty_key(), key, course_id) {
            let faculty = course.faculty.clone();
            let occupant = self
                .grid
                .cell(key)?
                .course_id
                .clone()
                .unwrap_or_default();
            tracing::warn!(course = course_id, %faculty, day, slot, "faculty clash");
            self.notify(format!("Clash: {faculty} already has a class at {day} {slot}"));
            return Ok(PlacementOutcome::Clash { faculty, occupant });
        }

        let name = course.name.clone();
        self.grid.set_course(key, course_id)?;
        self.notify(format!("Placed {name} at {day} {slot}"));
        Ok(PlacementOutcome::Placed(key))
    }

    /// Empties the cell at (`day`, `slot`).
    pub fn clear_cell(&mut self, day: &str, slot: &str) -> Result<()> {
        self.require(self.role.can_edit_grid(), "edit the timetable")?;
        let key = self.grid.layout().key(day, slot)?;
        self.grid.clear_cell(key)
    }

    /// Sets or clears the room of the cell at (`day`, `slot`).
    pub fn set_room(&mut self, day: &str, slot: &str, room_id: Option<String>) -> Result<()> {
        self.require(self.role.can_edit_grid(), "edit the timetable")?;
        let key = self.grid.layout().key(day, slot)?;
        self.grid.set_room(key, room_id)
    }

    /// Runs one auto-placement pass over the catalog.
    pub fn auto_schedule(&mut self) -> Result<PlacementReport> {
        self.require(self.role.can_administer(), "auto-schedule")?;
        let report = self.placer.run(&mut self.grid, &self.catalog);
        self.notify(format!("Auto-scheduled {} courses", report.placed_count()));
        Ok(report)
    }

    /// Imports courses from CSV text using the thread-local RNG for
    /// generated ids.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportBatch> {
        self.import_csv_with_rng(text, &mut rand::rng())
    }

    /// Imports courses from CSV text with a caller-supplied RNG.
    ///
    /// On failure the catalog is unchanged.
    pub fn import_csv_with_rng<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<ImportBatch> {
        self.require(self.role.can_administer(), "import courses")?;
        let batch = match self.importer.parse(text, &self.catalog, rng) {
            Ok(batch) => batch,
            Err(e) => {
                tracing::warn!(error = %e, "course import failed");
                return Err(e);
            }
        };

        let added = self.catalog.extend_new(batch.courses.iter().cloned());
        self.resolve_faculty_ids();
        tracing::info!(parsed = batch.parsed, added = added.len(), "imported courses");
        self.notify(format!("Imported {} courses from CSV", batch.parsed));
        Ok(batch)
    }

    /// Reads a CSV file, then imports it. Nothing changes if the read fails.
    pub fn import_csv_file(&mut self, path: impl AsRef<Path>) -> Result<ImportBatch> {
        self.require(self.role.can_administer(), "import courses")?;
        let text = std::fs::read_to_string(path.as_ref()).inspect_err(|e| {
            tracing::warn!(path = %path.as_ref().display(), error = %e, "cannot read course file");
        })?;
        self.import_csv(&text)
    }

    /// Announces the timetable.
    pub fn publish(&mut self) -> Result<()> {
        self.require(self.role.can_administer(), "publish the timetable")?;
        tracing::info!(occupied = self.grid.occupied_count(), "timetable published");
        self.notify("Timetable published to all users".to_string());
        Ok(())
    }

    /// Switches the acting role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Selects the faculty member whose view is active.
    pub fn set_current_faculty(&mut self, name: impl Into<String>) {
        self.current_faculty = Some(name.into());
    }

    // ======================== Queries ========================

    /// The configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell at (`day`, `slot`).
    pub fn cell(&self, day: &str, slot: &str) -> Result<&Cell> {
        self.grid.cell_by_label(day, slot)
    }

    /// The course catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The faculty roster.
    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    /// The classrooms.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// The notification feed.
    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    /// The acting role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The selected faculty member, if any.
    pub fn current_faculty(&self) -> Option<&str> {
        self.current_faculty.as_deref()
    }

    /// Courses not yet in the grid.
    pub fn unscheduled(&self) -> Vec<&Course> {
        unscheduled_courses(&self.grid, &self.catalog)
    }

    /// Utilization statistics.
    pub fn stats(&self) -> UtilizationStats {
        UtilizationStats::calculate(&self.grid, &self.catalog, &self.classrooms)
    }

    /// Scheduled teaching load per roster member.
    pub fn faculty_load(&self) -> Vec<FacultyLoad> {
        FacultyLoad::calculate(&self.grid, &self.catalog, &self.faculty)
    }

    /// Distinct faculty display names, in roster order.
    pub fn faculty_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for f in &self.faculty {
            if !names.contains(&f.name.as_str()) {
                names.push(&f.name);
            }
        }
        names
    }

    /// Courses taught under the given display name, in catalog order.
    pub fn courses_for_faculty(&self, name: &str) -> Vec<&Course> {
        self.catalog.iter().filter(|c| c.faculty == name).collect()
    }

    /// Integrity check across catalog, rosters and grid.
    pub fn validate(&self) -> ValidationResult {
        validate_session(
            self.catalog.as_slice(),
            &self.faculty,
            &self.classrooms,
            &self.grid,
        )
    }

    /// Complete ordered view of the grid.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }
}
