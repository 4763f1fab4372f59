use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::carousel::Carousel;
use crate::color::CourseColors;
use crate::config::DirectoryConfig;
use crate::data::filter::{DirectoryQuery, filtered_indices};
use crate::data::model::AlumniDataset;

/// Pending focus change for the search input, applied by the UI on the next
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Focus,
    Blur,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DirectoryConfig,

    /// Loaded dataset (None until the first successful load).
    pub dataset: Option<AlumniDataset>,

    /// Directory that relative image paths resolve against.
    pub asset_root: PathBuf,

    /// Set when the asset root came from the command line, so opening
    /// another dataset does not move it.
    pub asset_root_pinned: bool,

    /// Current search inputs.  Only changed through the setters so the
    /// cached `visible_indices` stay in sync.
    query: DirectoryQuery,

    /// Indices of records passing the current query, in display order (cached).
    pub visible_indices: Vec<usize>,

    /// How many of `visible_indices` are rendered.
    visible_count: usize,

    pub carousel: Carousel,

    /// Entries of the course selector, without the "All Courses" entry.
    pub course_options: Vec<String>,

    pub course_colors: CourseColors,

    pub focus_request: Option<FocusRequest>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the directory is live: timer armed and sentinel observed.
    mounted: bool,
}

impl AppState {
    pub fn new(config: DirectoryConfig, asset_root: PathBuf) -> Self {
        let carousel = Carousel::new(config.slides.clone(), config.carousel_interval());
        let course_options = config.course_options.clone();
        let course_colors = CourseColors::new(course_options.iter().map(String::as_str));
        let visible_count = config.page_size;

        Self {
            config,
            dataset: None,
            asset_root,
            asset_root_pinned: false,
            query: DirectoryQuery::default(),
            visible_indices: Vec::new(),
            visible_count,
            carousel,
            course_options,
            course_colors,
            focus_request: None,
            status_message: None,
            mounted: false,
        }
    }

    /// Ingest a newly loaded dataset and rebuild everything derived from it.
    pub fn set_dataset(&mut self, dataset: AlumniDataset) {
        self.course_options = merge_course_options(&self.config.course_options, &dataset);
        self.course_colors = CourseColors::new(self.course_options.iter().map(String::as_str));

        self.dataset = Some(dataset);
        self.refilter();
        self.visible_count = self.config.page_size;
        self.status_message = None;
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn selected_course(&self) -> &str {
        &self.query.selected_course
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn filtered_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Update the search text.  A real change refilters and collapses the
    /// reveal back to one page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.query.search_term {
            self.query.search_term = term;
            self.on_query_changed();
        }
    }

    /// Update the course selection (empty = all courses).
    pub fn set_selected_course(&mut self, course: impl Into<String>) {
        let course = course.into();
        if course != self.query.selected_course {
            self.query.selected_course = course;
            self.on_query_changed();
        }
    }

    fn on_query_changed(&mut self) {
        self.refilter();
        self.visible_count = self.config.page_size;
    }

    /// Recompute `visible_indices` from the dataset and query.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.query),
            None => Vec::new(),
        };
        log::debug!(
            "query {:?} matched {} records",
            self.query,
            self.visible_indices.len()
        );
    }

    /// The slice of `visible_indices` that is currently rendered.
    pub fn rendered_indices(&self) -> &[usize] {
        let end = self.visible_count.min(self.visible_indices.len());
        &self.visible_indices[..end]
    }

    /// Whether more matches exist beyond the rendered ones (the sentinel
    /// row is shown exactly when this holds).
    pub fn has_more(&self) -> bool {
        self.visible_count < self.visible_indices.len()
    }

    /// Reveal the next page, never past the number of matches.  Returns
    /// whether anything was revealed.
    pub fn reveal_more(&mut self) -> bool {
        if !self.mounted || !self.has_more() {
            return false;
        }
        let total = self.visible_indices.len();
        self.visible_count = (self.visible_count + self.config.page_size).min(total);
        log::debug!("revealed {} of {} alumni", self.visible_count, total);
        true
    }

    /// Search form submitted.  Filtering is already live, so this only
    /// drops focus from the search field.
    pub fn submit_search(&mut self) {
        self.focus_request = Some(FocusRequest::Blur);
    }

    /// Clear both filters, collapse to one page and refocus the search field.
    pub fn reset(&mut self) {
        let changed = !self.query.is_empty();
        self.query = DirectoryQuery::default();
        if changed {
            self.refilter();
        }
        self.visible_count = self.config.page_size;
        self.focus_request = Some(FocusRequest::Focus);
    }

    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.focus_request.take()
    }

    // -- Lifecycle --

    /// Make the directory live: arm the carousel timer and start observing
    /// the reveal sentinel.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.carousel.start(now);
    }

    /// Tear the directory down: cancel the timer and stop reacting to the
    /// sentinel.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.carousel.stop();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -- Presentation helpers --

    /// Message for an empty result list, or `None` when there are matches.
    pub fn empty_message(&self) -> Option<String> {
        if !self.visible_indices.is_empty() {
            return None;
        }
        let has_data = self.dataset.as_ref().is_some_and(|ds| !ds.is_empty());
        let message = if !self.query.search_term.is_empty() {
            format!("No alumni found matching \"{}\".", self.query.search_term)
        } else if has_data && !self.query.selected_course.is_empty() {
            format!("No alumni found for course \"{}\".", self.query.selected_course)
        } else {
            "No alumni data available.".to_string()
        };
        Some(message)
    }

    /// URI for an image path from the dataset or config.
    pub fn image_uri(&self, path: &str) -> String {
        resolve_image_uri(&self.asset_root, path)
    }

    /// URI of the configured placeholder image, if one overrides the
    /// built-in silhouette.
    pub fn placeholder_uri(&self) -> Option<String> {
        self.config
            .placeholder_image
            .as_deref()
            .map(|p| self.image_uri(p))
    }
}

/// Configured courses first, then any others present in the data.
/// Duplicates are dropped case-insensitively.
fn merge_course_options(configured: &[String], dataset: &AlumniDataset) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for course in configured.iter().chain(dataset.courses.iter()) {
        if !options.iter().any(|o| o.eq_ignore_ascii_case(course)) {
            options.push(course.clone());
        }
    }
    options
}

/// Web and file URIs pass through; anything else is a path under `root`.
pub fn resolve_image_uri(root: &Path, path: &str) -> String {
    let path = path.trim();
    let lower = path.to_ascii_lowercase();
    if ["http://", "https://", "file://", "bytes://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return path.to_string();
    }
    let full = root.join(path.trim_start_matches('/'));
    format!("file://{}", full.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AlumniRecord, Field};

    fn dataset(n: usize) -> AlumniDataset {
        let records = (0..n)
            .map(|i| {
                let mut rec = AlumniRecord::default();
                let name = if i % 2 == 0 { format!("Anna {i}") } else { format!("Bob {i}") };
                rec.set(Field::Name, Some(name));
                rec.set(Field::Course, Some(if i % 3 == 0 { "MCA" } else { "PhD" }.into()));
                rec.set(Field::Batch, Some(format!("{}", 2000 + i)));
                rec
            })
            .collect();
        AlumniDataset::from_records(records)
    }

    fn mounted_state(n: usize) -> AppState {
        let mut state = AppState::new(DirectoryConfig::default(), PathBuf::from("/srv/site"));
        state.set_dataset(dataset(n));
        state.mount(Instant::now());
        state
    }

    #[test]
    fn test_initial_view_shows_one_page() {
        let state = mounted_state(60);
        assert_eq!(state.filtered_count(), 60);
        assert_eq!(state.visible_count(), 25);
        assert_eq!(state.rendered_indices().len(), 25);
        assert!(state.has_more());
    }

    #[test]
    fn test_reveal_steps_and_clamps() {
        let mut state = mounted_state(60);
        assert!(state.reveal_more());
        assert_eq!(state.visible_count(), 50);
        assert!(state.reveal_more());
        assert_eq!(state.visible_count(), 60);
        assert!(!state.has_more());
        assert!(!state.reveal_more());
        assert_eq!(state.visible_count(), 60);
    }

    #[test]
    fn test_reveal_never_exceeds_filtered_count() {
        let mut state = mounted_state(100);
        state.set_search_term("anna");
        while state.reveal_more() {
            assert!(state.visible_count() <= state.filtered_count());
        }
        assert_eq!(state.visible_count(), state.filtered_count());
    }

    #[test]
    fn test_small_result_has_no_sentinel() {
        let mut state = mounted_state(10);
        assert!(!state.has_more());
        assert!(!state.reveal_more());
        assert_eq!(state.visible_count(), 25);
        assert_eq!(state.rendered_indices().len(), 10);
    }

    #[test]
    fn test_query_change_resets_visible_count() {
        let mut state = mounted_state(100);
        state.reveal_more();
        state.reveal_more();
        assert_eq!(state.visible_count(), 75);

        state.set_search_term("a");
        assert_eq!(state.visible_count(), 25);

        state.reveal_more();
        state.set_selected_course("PhD");
        assert_eq!(state.visible_count(), 25);
        assert!(
            state
                .rendered_indices()
                .iter()
                .all(|&i| state.dataset.as_ref().unwrap().records[i].course.as_deref() == Some("PhD"))
        );
    }

    #[test]
    fn test_unchanged_query_keeps_reveal() {
        let mut state = mounted_state(100);
        state.set_search_term("bob");
        state.reveal_more();
        assert_eq!(state.visible_count(), 50);
        state.set_search_term("bob");
        assert_eq!(state.visible_count(), 50);
    }

    #[test]
    fn test_reset_clears_filters_and_requests_focus() {
        let mut state = mounted_state(100);
        state.set_search_term("anna");
        state.set_selected_course("MCA");
        state.reveal_more();

        state.reset();
        assert_eq!(state.search_term(), "");
        assert_eq!(state.selected_course(), "");
        assert_eq!(state.visible_count(), 25);
        assert_eq!(state.filtered_count(), 100);
        assert_eq!(state.take_focus_request(), Some(FocusRequest::Focus));
        assert_eq!(state.take_focus_request(), None);
    }

    #[test]
    fn test_reset_without_filters_restores_page_size() {
        let mut state = mounted_state(100);
        state.reveal_more();
        state.reveal_more();
        state.reset();
        assert_eq!(state.visible_count(), 25);
    }

    #[test]
    fn test_submit_only_blurs() {
        let mut state = mounted_state(100);
        state.set_search_term("anna");
        state.reveal_more();
        let before = (state.filtered_count(), state.visible_count());

        state.submit_search();
        assert_eq!(state.take_focus_request(), Some(FocusRequest::Blur));
        assert_eq!((state.filtered_count(), state.visible_count()), before);
    }

    #[test]
    fn test_unmounted_directory_ignores_sentinel_and_timer() {
        let mut state = mounted_state(100);
        state.unmount();
        assert!(!state.is_mounted());
        assert!(!state.carousel.is_running());
        assert!(!state.reveal_more());
        assert_eq!(state.visible_count(), 25);
    }

    #[test]
    fn test_empty_messages() {
        let mut state = AppState::new(DirectoryConfig::default(), PathBuf::new());
        assert_eq!(state.empty_message().as_deref(), Some("No alumni data available."));

        state.set_dataset(dataset(5));
        assert_eq!(state.empty_message(), None);

        state.set_search_term("zed");
        assert_eq!(
            state.empty_message().as_deref(),
            Some("No alumni found matching \"zed\".")
        );

        state.reset();
        state.set_selected_course("M.Tech");
        assert_eq!(
            state.empty_message().as_deref(),
            Some("No alumni found for course \"M.Tech\".")
        );

        let mut empty = AppState::new(DirectoryConfig::default(), PathBuf::new());
        empty.set_dataset(AlumniDataset::default());
        assert_eq!(empty.empty_message().as_deref(), Some("No alumni data available."));
    }

    #[test]
    fn test_course_options_merge_dataset_courses() {
        let mut rec = AlumniRecord::default();
        rec.set(Field::Course, Some("Diploma".into()));
        let mut dup = AlumniRecord::default();
        dup.set(Field::Course, Some("mca".into()));

        let mut state = AppState::new(DirectoryConfig::default(), PathBuf::new());
        state.set_dataset(AlumniDataset::from_records(vec![rec, dup]));
        assert_eq!(
            state.course_options,
            vec!["MCA", "PhD", "B.Tech", "M.Tech", "Diploma"]
        );
    }

    #[test]
    fn test_image_uri_resolution() {
        let root = Path::new("/srv/site");
        assert_eq!(
            resolve_image_uri(root, "https://cdn.example.org/a.jpg"),
            "https://cdn.example.org/a.jpg"
        );
        assert_eq!(
            resolve_image_uri(root, "/images/user.jpg"),
            "file:///srv/site/images/user.jpg"
        );
        assert_eq!(
            resolve_image_uri(root, "images/slider1.jpg"),
            "file:///srv/site/images/slider1.jpg"
        );

        let mut state = AppState::new(DirectoryConfig::default(), root.to_path_buf());
        assert_eq!(state.placeholder_uri(), None);
        state.config.placeholder_image = Some("images/user.jpg".into());
        assert_eq!(
            state.placeholder_uri().as_deref(),
            Some("file:///srv/site/images/user.jpg")
        );
    }
}
