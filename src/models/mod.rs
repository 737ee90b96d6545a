//! Timetable domain models.
//!
//! Provides the data types the scheduling engine works on: the week
//! layout and grid, the course catalog, the faculty and classroom
//! rosters, and the notification feed.
//!
//! # Relationships
//!
//! | From | To | By |
//! |------|----|----|
//! | Cell | Course | `course_id` (0..1) |
//! | Cell | Classroom | `room_id` (0..1) |
//! | Course | Faculty | `faculty_id` when resolved, else display name |

mod catalog;
mod course;
mod grid;
mod notification;
mod resource;
mod week;

pub use catalog::Catalog;
pub use course::Course;
pub use grid::{Cell, DayRow, Grid, GridSnapshot, SlotEntry};
pub use notification::{Notification, NotificationFeed};
pub use resource::{resolve_faculty_id, Classroom, Faculty};
pub use week::{CellKey, WeekLayout};
