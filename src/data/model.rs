use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("year regex should compile"));

// ---------------------------------------------------------------------------
// Field – the known columns of an alumni record
// ---------------------------------------------------------------------------

/// One named column of the source data.  Keys are matched case-insensitively
/// so both `"Name"` (the JSON export) and `"name"` (hand-written CSV) load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Course,
    Batch,
    Occupation,
    Skill,
    Image,
    LinkedIn,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Course,
        Field::Batch,
        Field::Occupation,
        Field::Skill,
        Field::Image,
        Field::LinkedIn,
    ];

    /// Canonical key as it appears in the dataset.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Course => "Course",
            Field::Batch => "Batch",
            Field::Occupation => "Occupation",
            Field::Skill => "Skill",
            Field::Image => "Image",
            Field::LinkedIn => "LinkedIn",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }
}

// ---------------------------------------------------------------------------
// AlumniRecord – one alumnus
// ---------------------------------------------------------------------------

/// A single alumnus entry.  Every field is optional; an empty string in the
/// source is stored as `None` so "absent" has exactly one representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniRecord {
    pub name: Option<String>,
    pub course: Option<String>,
    pub batch: Option<String>,
    pub occupation: Option<String>,
    pub skill: Option<String>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

impl AlumniRecord {
    /// Store `value` under `field`, normalising `Some("")` to `None`.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Course => &mut self.course,
            Field::Batch => &mut self.batch,
            Field::Occupation => &mut self.occupation,
            Field::Skill => &mut self.skill,
            Field::Image => &mut self.image,
            Field::LinkedIn => &mut self.linkedin,
        };
        *slot = value;
    }

    /// Graduation year used for ordering (0 when the batch carries no year).
    pub fn batch_year(&self) -> u32 {
        self.batch.as_deref().map(extract_year).unwrap_or(0)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Trimmed course name, if any.
    pub fn course_trimmed(&self) -> Option<&str> {
        self.course.as_deref().map(str::trim)
    }
}

/// Largest run of four digits in a batch string, e.g. `"2016 - 2020"` → 2020.
/// Returns 0 when no such run exists.
pub fn extract_year(batch: &str) -> u32 {
    YEAR_PATTERN
        .find_iter(batch)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// AlumniDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All records in source order, plus the courses seen in them.
#[derive(Debug, Clone, Default)]
pub struct AlumniDataset {
    pub records: Vec<AlumniRecord>,
    /// Distinct trimmed course names, in sorted order.
    pub courses: BTreeSet<String>,
}

impl AlumniDataset {
    pub fn from_records(records: Vec<AlumniRecord>) -> Self {
        let courses = records
            .iter()
            .filter_map(AlumniRecord::course_trimmed)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        AlumniDataset { records, courses }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_takes_maximum() {
        assert_eq!(extract_year("2016 - 2020"), 2020);
        assert_eq!(extract_year("Graduated 2022"), 2022);
        assert_eq!(extract_year("2019"), 2019);
    }

    #[test]
    fn test_extract_year_without_year() {
        assert_eq!(extract_year(""), 0);
        assert_eq!(extract_year("batch of '19"), 0);
        assert_eq!(extract_year("123"), 0);
    }

    #[test]
    fn test_extract_year_non_overlapping_runs() {
        // "123456" splits into "1234" and the leftover "56"
        assert_eq!(extract_year("123456"), 1234);
        assert_eq!(extract_year("20182022"), 2022);
    }

    #[test]
    fn test_set_normalises_empty_strings() {
        let mut rec = AlumniRecord::default();
        rec.set(Field::Image, Some(String::new()));
        assert!(!rec.has_image());
        rec.set(Field::Image, Some("images/a.jpg".into()));
        assert!(rec.has_image());
        assert_eq!(rec.image.as_deref(), Some("images/a.jpg"));
    }

    #[test]
    fn test_field_keys_case_insensitive() {
        assert_eq!(Field::from_key("linkedin"), Some(Field::LinkedIn));
        assert_eq!(Field::from_key(" Batch "), Some(Field::Batch));
        assert_eq!(Field::from_key("Email"), None);
    }

    #[test]
    fn test_dataset_collects_trimmed_courses() {
        let mut a = AlumniRecord::default();
        a.set(Field::Course, Some("B.Tech ".into()));
        let mut b = AlumniRecord::default();
        b.set(Field::Course, Some("MCA".into()));
        let ds = AlumniDataset::from_records(vec![a, b, AlumniRecord::default()]);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.courses.iter().cloned().collect::<Vec<_>>(),
            vec!["B.Tech".to_string(), "MCA".to_string()]
        );
    }
}
