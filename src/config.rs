//! Timetable configuration.
//!
//! Holds the ordered day and slot labels plus the defaults applied by the
//! course importer. Every field falls back to the standard five-day,
//! six-slot week, so a TOML file only needs to name what it overrides:
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//!
//! let config = TimetableConfig::from_toml_str(r#"
//!     days = ["Mon", "Wed", "Fri"]
//!     notification_capacity = 10
//! "#).unwrap();
//!
//! assert_eq!(config.days.len(), 3);
//! assert_eq!(config.slots.len(), 6);
//! assert_eq!(config.default_department, "General");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TimetableError};
use crate::models::WeekLayout;

/// Default day labels (Mon–Fri).
pub const DEFAULT_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Default slot labels (six one-hour periods).
pub const DEFAULT_SLOTS: [&str; 6] = ["8-9", "9-10", "10-11", "11-12", "1-2", "2-3"];

/// Default notification feed length.
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 6;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Day labels in placement order.
    pub days: Vec<String>,
    /// Slot labels in placement order.
    pub slots: Vec<String>,
    /// Maximum retained notifications.
    pub notification_capacity: usize,
    /// Department assigned to imported courses without one.
    pub default_department: String,
    /// Credit hours assigned to imported courses without a valid value.
    pub default_hours: u32,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
            default_department: "General".to_string(),
            default_hours: 3,
        }
    }
}

impl TimetableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| TimetableError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the day labels.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the slot labels.
    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the notification capacity.
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    /// Sets the importer's fallback department.
    pub fn with_default_department(mut self, dept: impl Into<String>) -> Self {
        self.default_department = dept.into();
        self
    }

    /// Sets the importer's fallback credit hours.
    pub fn with_default_hours(mut self, hours: u32) -> Self {
        self.default_hours = hours;
        self
    }

    /// Checks that the layout is usable.
    pub fn validate(&self) -> Result<()> {
        check_labels("day", &self.days)?;
        check_labels("slot", &self.slots)?;
        if self.notification_capacity == 0 {
            return Err(TimetableError::config(
                "notification_capacity must be at least 1",
            ));
        }
        Ok(())
    }

    /// Builds the week layout described by this config.
    pub fn layout(&self) -> Result<WeekLayout> {
        WeekLayout::new(self.days.clone(), self.slots.clone())
    }
}

pub(crate) fn check_labels(kind: &str, labels: &[String]) -> Result<()> {
    if labels.is_empty() {
        return Err(TimetableError::config(format!("at least one {kind} is required")));
    }
    let mut seen = HashSet::new();
    for label in labels {
        if label.trim().is_empty() {
            return Err(TimetableError::config(format!("blank {kind} label")));
        }
        if !seen.insert(label.as_str()) {
            return Err(TimetableError::config(format!("duplicate {kind} label '{label}'")));
        }
    }
    Ok(())
}
