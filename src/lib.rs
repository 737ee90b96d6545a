//! Weekly timetable engine.
//!
//! Assigns courses to a Day × Slot grid, refuses placements that would
//! double-book a faculty member in the same cell, and auto-places
//! unscheduled courses with a deterministic greedy pass. Rendering,
//! drag-and-drop and printing are left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WeekLayout`, `Grid`, `Cell`, `Course`,
//!   `Catalog`, `Faculty`, `Classroom`, `NotificationFeed`
//! - **`scheduler`**: Clash detection, auto-placement strategies,
//!   unscheduled-course query, utilization statistics
//! - **`import`**: Course catalog CSV parsing
//! - **`validation`**: Integrity checks (duplicate ids, dangling references)
//! - **`session`**: `SchedulingSession`, the aggregate callers drive
//! - **`config`**: Week layout and import defaults, loadable from TOML
//! - **`error`**: `TimetableError` and the crate `Result` alias
//!
//! # Architecture
//!
//! The grid store sits at the bottom and knows nothing about courses.
//! The scheduler reads the grid and catalog and writes through the grid's
//! single-cell operations. The session owns everything and is the only
//! place roles and notifications are handled.

pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use error::{Result, TimetableError};
