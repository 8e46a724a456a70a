//! Domain types for the course catalog.
//!
//! The internal `Course` record carries `students_count`; the outward-facing
//! `CourseView` projection exposes only `id` and `title`. Every response
//! carrying course data goes through the projection, never the record.

use serde::{Deserialize, Serialize};

/// Internal course record. Not serialized to clients directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub students_count: u32,
}

impl Course {
    /// Outward-facing projection of this record.
    pub fn view(&self) -> CourseView {
        CourseView {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// External representation of a course: `id` and `title` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    pub id: i64,
    pub title: String,
}

/// Body of `POST /courses`.
///
/// `title` is optional at the serde level so a missing field reaches handler
/// validation (400) instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCourse {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `PUT /courses/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourse {
    #[serde(default)]
    pub title: Option<String>,
}

/// Query string of `GET /courses`.
#[derive(Debug, Default, Deserialize)]
pub struct CoursesQuery {
    pub title: Option<String>,
}
