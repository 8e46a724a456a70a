//! In-memory course store.
//!
//! # Responsibilities
//! - Own the single ordered collection of course records
//! - Serialize all read-modify-write sequences behind one mutex
//! - Assign ids to new records via the injected `IdSource`
//!
//! # Design Decisions
//! - One mutex around the whole vector: every operation is a single short
//!   critical section, so there is one logical writer at a time and no
//!   request ever observes a partial mutation.
//! - Path ids are compared as text against the stored id's decimal form.
//! - Delete never reports absence; get and update do. The asymmetry is part
//!   of the contract and kept as-is.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::courses::ids::{IdSource, WallClockIds};
use crate::courses::types::{Course, CourseView};

/// The catalog the service starts with.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: 342,
            title: "cours 1".into(),
            students_count: 12,
        },
        Course {
            id: 567,
            title: "courses 3".into(),
            students_count: 12,
        },
        Course {
            id: 234,
            title: "cours 4".into(),
            students_count: 12,
        },
        Course {
            id: 789,
            title: "courses 5".into(),
            students_count: 12,
        },
    ]
}

/// Mutex-guarded, insertion-ordered collection of course records.
pub struct CourseStore {
    courses: Mutex<Vec<Course>>,
    ids: Box<dyn IdSource>,
}

impl CourseStore {
    /// Store pre-loaded with the seed catalog, using wall-clock ids.
    pub fn seeded() -> Self {
        Self::with_records(seed_courses(), Box::new(WallClockIds))
    }

    pub fn with_records(records: Vec<Course>, ids: Box<dyn IdSource>) -> Self {
        Self {
            courses: Mutex::new(records),
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Course>> {
        self.courses.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Projections of all records, optionally narrowed to titles containing
    /// `filter` as a case-sensitive substring. An empty filter matches all.
    pub fn list(&self, filter: Option<&str>) -> Vec<CourseView> {
        self.lock()
            .iter()
            .filter(|c| match filter {
                Some(t) if !t.is_empty() => c.title.contains(t),
                _ => true,
            })
            .map(Course::view)
            .collect()
    }

    /// Projection of the first record whose id's decimal form equals `id`.
    pub fn get(&self, id: &str) -> Option<CourseView> {
        self.lock()
            .iter()
            .find(|c| c.id.to_string() == id)
            .map(Course::view)
    }

    /// Append a new record with a fresh id and zero students.
    ///
    /// Title validation happens at the handler boundary before this runs.
    pub fn create(&self, title: &str) -> CourseView {
        let course = Course {
            id: self.ids.next_id(),
            title: title.to_owned(),
            students_count: 0,
        };
        let view = course.view();
        self.lock().push(course);
        view
    }

    /// Overwrite the title of the matching record in place. `id` and
    /// `students_count` are untouched. Returns false when no record matches.
    pub fn update(&self, id: &str, title: &str) -> bool {
        let mut courses = self.lock();
        match courses.iter_mut().find(|c| c.id.to_string() == id) {
            Some(course) => {
                course.title = title.to_owned();
                true
            }
            None => false,
        }
    }

    /// Remove every record matching `id`. Removing nothing is not an error.
    pub fn remove(&self, id: &str) {
        self.lock().retain(|c| c.id.to_string() != id);
    }

    /// Empty the collection. Test-reset hook.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::ids::SequentialIds;

    fn test_store() -> CourseStore {
        CourseStore::with_records(seed_courses(), Box::new(SequentialIds::starting_at(1_000)))
    }

    #[test]
    fn list_without_filter_returns_all_in_order() {
        let store = test_store();
        let views = store.list(None);
        let ids: Vec<i64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![342, 567, 234, 789]);
    }

    #[test]
    fn list_filter_is_case_sensitive_substring() {
        let store = test_store();

        let views = store.list(Some("cours 4"));
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, 234);
        assert_eq!(views[0].title, "cours 4");

        // "courses" matches two of the seeds, insertion order kept.
        let ids: Vec<i64> = store.list(Some("courses")).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![567, 789]);

        assert!(store.list(Some("COURS")).is_empty());
    }

    #[test]
    fn empty_filter_behaves_like_no_filter() {
        let store = test_store();
        assert_eq!(store.list(Some("")).len(), 4);
    }

    #[test]
    fn get_compares_id_as_text() {
        let store = test_store();
        let view = store.get("342").unwrap();
        assert_eq!(view.title, "cours 1");

        assert!(store.get("999").is_none());
        assert!(store.get("342 ").is_none());
    }

    #[test]
    fn create_appends_with_fresh_id_and_zero_students() {
        let store = test_store();
        let view = store.create("rust 101");
        assert_eq!(view.id, 1_000);
        assert_eq!(view.title, "rust 101");
        assert_eq!(store.len(), 5);

        // The new record is last and retrievable by id.
        let all = store.list(None);
        assert_eq!(all.last().unwrap().id, 1_000);
        assert_eq!(store.get("1000").unwrap().title, "rust 101");
    }

    #[test]
    fn update_changes_only_the_matching_title() {
        let store = test_store();
        assert!(store.update("342", "updated"));

        let views = store.list(None);
        assert_eq!(views[0].title, "updated");
        assert_eq!(views[0].id, 342);
        assert_eq!(views[1].title, "courses 3");
        assert_eq!(views[2].title, "cours 4");
        assert_eq!(views[3].title, "courses 5");
    }

    #[test]
    fn update_unknown_id_mutates_nothing() {
        let store = test_store();
        assert!(!store.update("999", "updated"));
        let titles: Vec<String> = store.list(None).into_iter().map(|v| v.title).collect();
        assert_eq!(titles, vec!["cours 1", "courses 3", "cours 4", "courses 5"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let store = test_store();
        store.remove("999");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_drops_the_matching_record() {
        let store = test_store();
        store.remove("567");
        assert_eq!(store.len(), 3);
        assert!(store.get("567").is_none());
    }

    #[test]
    fn clear_empties_the_collection() {
        let store = test_store();
        store.clear();
        assert!(store.is_empty());
        assert!(store.list(None).is_empty());
    }
}
