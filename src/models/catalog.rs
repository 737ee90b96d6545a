//! Course catalog.
//!
//! Keeps courses in insertion order, which is the order auto-placement
//! visits them, with an index by id. Ids are unique: inserting an id that
//! is already present is refused rather than overwriting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Course;

/// The set of all known courses, independent of grid placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Course>", into = "Vec<Course>")]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course. Returns `false` (and drops it) if the id exists.
    pub fn insert(&mut self, course: Course) -> bool {
        if self.index.contains_key(&course.id) {
            return false;
        }
        self.index.insert(course.id.clone(), self.courses.len());
        self.courses.push(course);
        true
    }

    /// Adds every course whose id is new. Returns the ids actually added.
    pub fn extend_new<I: IntoIterator<Item = Course>>(&mut self, courses: I) -> Vec<String> {
        let mut added = Vec::new();
        for course in courses {
            let id = course.id.clone();
            if self.insert(course) {
                added.push(id);
            }
        }
        added
    }

    /// Looks up a course by id.
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }

    /// Mutable iteration. Callers must not change course ids.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Course> {
        self.courses.iter_mut()
    }

    /// Whether a course id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Courses in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Courses as a slice.
    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        let mut catalog = Self::new();
        catalog.extend_new(courses);
        catalog
    }
}

impl From<Catalog> for Vec<Course> {
    fn from(catalog: Catalog) -> Self {
        catalog.courses
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend_new(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut cat = Catalog::new();
        assert!(cat.insert(Course::new("A", "Algebra", "Dr. X")));
        assert!(cat.insert(Course::new("B", "Biology", "Dr. Y")));
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.get("B").unwrap().name, "Biology");
        assert!(cat.get("Z").is_none());
    }

    #[test]
    fn test_duplicate_is_dropped() {
        let mut cat = Catalog::new();
        cat.insert(Course::new("A", "Algebra", "Dr. X"));
        assert!(!cat.insert(Course::new("A", "Other", "Dr. Y")));
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.get("A").unwrap().name, "Algebra");
    }

    #[test]
    fn test_order_preserved() {
        let cat: Catalog = vec![
            Course::new("C", "c", "f"),
            Course::new("A", "a", "f"),
            Course::new("B", "b", "f"),
        ]
        .into_iter()
        .collect();
        let ids: Vec<_> = cat.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_extend_new_reports_added() {
        let mut cat = Catalog::from(vec![Course::new("A", "a", "f")]);
        let added = cat.extend_new(vec![
            Course::new("A", "dup", "f"),
            Course::new("B", "b", "f"),
            Course::new("B", "dup", "f"),
        ]);
        assert_eq!(added, vec!["B"]);
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn test_serde_as_list() {
        let cat = Catalog::from(vec![Course::new("A", "a", "f")]);
        let json = serde_json::to_string(&cat).unwrap();
        assert!(json.starts_with('['));
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert!(back.contains("A"));
    }
}
