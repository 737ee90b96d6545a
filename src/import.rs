//! Course catalog import from delimited text.
//!
//! # Format
//!
//! A comma-separated table whose first line is a header. The header must
//! name `id`, `name` and `faculty` (case-insensitive, any order); `dept`
//! and `hours` are optional. Row values map positionally onto header
//! fields and are trimmed.
//!
//! | Field | Missing / invalid value |
//! |-------|-------------------------|
//! | `id` | generated token `C-{hex}-{row}` |
//! | `dept` | configured default (`"General"`) |
//! | `hours` | configured default (`3`) |
//!
//! Rows whose id already exists in the catalog, or earlier in the same
//! text, are dropped. Parsing never touches the catalog; the caller
//! applies the returned [`ImportBatch`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::import::CourseImporter;
//! use u_timetable::models::Catalog;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = CourseImporter::new()
//!     .parse("id,name,faculty\nMAT201,Linear Algebra,Dr. Singh\n", &Catalog::new(), &mut rng)
//!     .unwrap();
//!
//! assert_eq!(batch.courses[0].id, "MAT201");
//! assert_eq!(batch.courses[0].dept, "General");
//! ```

use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::config::TimetableConfig;
use crate::error::{Result, TimetableError};
use crate::models::{Catalog, Course};

const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "faculty"];

/// Result of parsing one import text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Non-blank data rows read.
    pub parsed: usize,
    /// New courses, in row order.
    pub courses: Vec<Course>,
    /// Ids dropped because they already existed.
    pub duplicates: Vec<String>,
}

/// Parses course tables.
#[derive(Debug, Clone)]
pub struct CourseImporter {
    default_dept: String,
    default_hours: u32,
}

impl Default for CourseImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseImporter {
    /// Creates an importer with the standard defaults.
    pub fn new() -> Self {
        Self::from_config(&TimetableConfig::default())
    }

    /// Creates an importer using the config's defaults.
    pub fn from_config(config: &TimetableConfig) -> Self {
        Self {
            default_dept: config.default_department.clone(),
            default_hours: config.default_hours,
        }
    }

    /// Parses `text` into courses that are new relative to `existing`.
    ///
    /// # Errors
    /// [`TimetableError::Format`] when the text is empty or the header
    /// lacks a required field.
    pub fn parse<R: Rng + ?Sized>(
        &self,
        text: &str,
        existing: &Catalog,
        rng: &mut R,
    ) -> Result<ImportBatch> {
        let mut lines = text.trim().lines();
        let header: Vec<String> = match lines.next() {
            Some(line) if !line.trim().is_empty() => line
                .split(',')
                .map(|h| h.trim().to_lowercase())
                .collect(),
            _ => return Err(TimetableError::format("empty CSV")),
        };

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|f| !header.iter().any(|h| h == *f))
        {
            return Err(TimetableError::format(format!(
                "missing '{missing}' column; expected headers: id,name,faculty,dept,hours"
            )));
        }

        let mut batch = ImportBatch::default();
        let mut seen: HashSet<String> = HashSet::new();

        for (row, line) in lines.filter(|l| !l.trim().is_empty()).enumerate() {
            batch.parsed += 1;

            let mut fields: HashMap<&str, &str> = HashMap::new();
            for (i, value) in line.split(',').enumerate() {
                if let Some(name) = header.get(i) {
                    fields.insert(name.as_str(), value.trim());
                }
            }
            let field = |name: &str| fields.get(name).copied().filter(|v| !v.is_empty());

            let id = match field("id") {
                Some(id) => id.to_string(),
                None => generate_id(row, existing, &seen, rng),
            };
            if existing.contains(&id) || seen.contains(&id) {
                batch.duplicates.push(id);
                continue;
            }

            let hours = field("hours")
                .and_then(|h| h.parse::<u32>().ok())
                .unwrap_or(self.default_hours);

            let course = Course::new(
                id.clone(),
                field("name").unwrap_or_default(),
                field("faculty").unwrap_or_default(),
            )
            .with_dept(field("dept").unwrap_or(self.default_dept.as_str()))
            .with_hours(hours);

            seen.insert(id);
            batch.courses.push(course);
        }

        tracing::debug!(
            parsed = batch.parsed,
            accepted = batch.courses.len(),
            duplicates = batch.duplicates.len(),
            "parsed course table"
        );
        Ok(batch)
    }
}

fn generate_id<R: Rng + ?Sized>(
    row: usize,
    existing: &Catalog,
    seen: &HashSet<String>,
    rng: &mut R,
) -> String {
    loop {
        let id = format!("C-{:08x}-{row}", rng.random::<u32>());
        if !existing.contains(&id) && !seen.contains(&id) {
            return id;
        }
    }
}
