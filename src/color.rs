use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Course badge colours
// ---------------------------------------------------------------------------

/// Maps each course (compared case-insensitively) to a distinct badge colour.
#[derive(Debug, Clone)]
pub struct CourseColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CourseColors {
    /// Build the mapping from the selector's course list, in order.
    pub fn new<'a>(courses: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<String> = courses.into_iter().map(|c| c.to_lowercase()).collect();
        let palette = generate_palette(keys.len());
        let mapping = keys.into_iter().zip(palette).collect();

        CourseColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a course name; unknown courses get grey.
    pub fn color_for(&self, course: &str) -> Color32 {
        self.mapping
            .get(&course.trim().to_lowercase())
            .copied()
            .unwrap_or(self.default_color)
    }
}
