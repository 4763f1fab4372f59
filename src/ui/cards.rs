use eframe::egui::{self, Color32, RichText, Ui, vec2};

use crate::data::model::AlumniRecord;
use crate::state::AppState;

const CARD_IMAGE_HEIGHT: f32 = 220.0;
const BANNER_HEIGHT: f32 = 320.0;
/// Narrower than this, the banner is hidden.
const BANNER_MIN_WIDTH: f32 = 768.0;

/// Card columns for the available width.
pub fn grid_columns(width: f32) -> usize {
    if width < 768.0 {
        2
    } else if width < 1024.0 {
        3
    } else {
        4
    }
}

// ---------------------------------------------------------------------------
// Carousel banner
// ---------------------------------------------------------------------------

/// Render the active slide with a row of position dots.
pub fn banner(ui: &mut Ui, state: &AppState) {
    if ui.available_width() < BANNER_MIN_WIDTH {
        return;
    }
    let Some(slide) = state.carousel.active_slide() else {
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(state.image_uri(slide))
                .max_height(BANNER_HEIGHT)
                .max_width(ui.available_width())
                .maintain_aspect_ratio(true),
        );

        let active = state.carousel.active_index();
        let dots: String = (0..state.carousel.slides().len())
            .map(|i| if i == active { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        ui.label(RichText::new(dots).color(Color32::GRAY));
    });
}

// ---------------------------------------------------------------------------
// Card grid + reveal sentinel
// ---------------------------------------------------------------------------

/// Render the revealed cards, the "no results" message, and the sentinel.
pub fn alumni_grid(ui: &mut Ui, state: &mut AppState) {
    if let Some(message) = state.empty_message() {
        ui.add_space(40.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(message).color(Color32::GRAY));
        });
        return;
    }

    let Some(dataset) = &state.dataset else {
        return;
    };

    let n_cols = grid_columns(ui.available_width());
    for row in state.rendered_indices().chunks(n_cols) {
        ui.columns(n_cols, |cols: &mut [Ui]| {
            for (col, &idx) in cols.iter_mut().zip(row) {
                card(col, &*state, &dataset.records[idx]);
            }
        });
        ui.add_space(12.0);
    }

    if state.has_more() {
        let response = ui
            .vertical_centered(|ui: &mut Ui| {
                ui.add_space(16.0);
                ui.label(RichText::new("Loading more alumni...").color(Color32::GRAY));
                ui.add_space(16.0);
            })
            .response;

        // Fully scrolled into view
        if ui.clip_rect().contains_rect(response.rect) && state.reveal_more() {
            ui.ctx().request_repaint();
        }
    }
}

/// One alumnus card: photo, name, and whichever details are present.
fn card(ui: &mut Ui, state: &AppState, record: &AlumniRecord) {
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());

            let size = vec2(ui.available_width(), CARD_IMAGE_HEIGHT);
            let image = match (&record.image, state.placeholder_uri()) {
                (Some(path), _) => egui::Image::new(state.image_uri(path)),
                (None, Some(uri)) => egui::Image::new(uri),
                (None, None) => egui::Image::new(egui::include_image!("../../assets/user.png")),
            };
            ui.add(image.fit_to_exact_size(size).maintain_aspect_ratio(true));

            let name = record.name.as_deref().unwrap_or_default();
            ui.label(RichText::new(name).heading().strong());

            if let Some(course) = &record.course {
                ui.horizontal(|ui: &mut Ui| {
                    ui.strong("Course:");
                    ui.label(
                        RichText::new(course.trim()).color(state.course_colors.color_for(course)),
                    );
                });
            }
            detail(ui, "Batch:", record.batch.as_deref());
            detail(ui, "Occupation:", record.occupation.as_deref());
            detail(ui, "Skills:", record.skill.as_deref());

            if let Some(url) = &record.linkedin {
                ui.horizontal(|ui: &mut Ui| {
                    ui.strong("LinkedIn:");
                    ui.hyperlink_to(name, url);
                });
            }
        });
}

fn detail(ui: &mut Ui, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong(label);
            ui.label(value);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_by_width() {
        assert_eq!(grid_columns(400.0), 2);
        assert_eq!(grid_columns(767.9), 2);
        assert_eq!(grid_columns(768.0), 3);
        assert_eq!(grid_columns(1023.0), 3);
        assert_eq!(grid_columns(1600.0), 4);
    }
}
