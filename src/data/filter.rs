use std::cmp::Reverse;

use super::model::{AlumniDataset, AlumniRecord};

// ---------------------------------------------------------------------------
// Query: the user's search inputs
// ---------------------------------------------------------------------------

/// Search text and course selection.  Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search_term: String,
    pub selected_course: String,
}

impl DirectoryQuery {
    /// Whether `record` passes both the name and the course predicate.
    ///
    /// * Name: only checked when the term is not blank; the untrimmed term is
    ///   matched as a case-insensitive substring of the name.
    /// * Course: case-insensitive equality against the trimmed course.
    pub fn matches(&self, record: &AlumniRecord) -> bool {
        if !self.search_term.trim().is_empty() {
            let needle = self.search_term.to_lowercase();
            match &record.name {
                Some(name) if name.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        if !self.selected_course.is_empty() {
            let wanted = self.selected_course.to_lowercase();
            match record.course_trimmed() {
                Some(course) if course.to_lowercase() == wanted => {}
                _ => return false,
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_course.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filter + sort
// ---------------------------------------------------------------------------

/// Ordering key: newest batch first, then records with a photo first.
fn sort_key(record: &AlumniRecord) -> (Reverse<u32>, Reverse<bool>) {
    (Reverse(record.batch_year()), Reverse(record.has_image()))
}

/// Return indices of records passing `query`, ordered by [`sort_key`].
///
/// The sort is stable, so records that tie on year and photo keep their
/// dataset order.
pub fn filtered_indices(dataset: &AlumniDataset, query: &DirectoryQuery) -> Vec<usize> {
    let mut indices: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| query.matches(rec))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by_cached_key(|&i| sort_key(&dataset.records[i]));
    indices
}
