use eframe::egui::{self, Color32, Key, RichText, TextEdit, Ui};

use crate::state::{AppState, FocusRequest};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} alumni loaded, {} matching, {} shown",
                ds.len(),
                state.filtered_count(),
                state.rendered_indices().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Search form
// ---------------------------------------------------------------------------

/// Search field, course selector and reset button.
pub fn search_form(ui: &mut Ui, state: &mut AppState) {
    let search_id = ui.make_persistent_id("alumni_search");

    ui.horizontal_wrapped(|ui: &mut Ui| {
        let mut term = state.search_term().to_string();
        let field_width = (ui.available_width() * 0.5).max(200.0);
        let response = ui.add(
            TextEdit::singleline(&mut term)
                .id(search_id)
                .hint_text("Search Alumni by Name...")
                .desired_width(field_width),
        );
        if response.changed() {
            state.set_search_term(term);
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            state.submit_search();
        }

        let selected = state.selected_course().to_string();
        let selected_text = if selected.is_empty() {
            "All Courses".to_string()
        } else {
            selected.clone()
        };
        let mut choice: Option<String> = None;
        egui::ComboBox::from_id_salt("course_filter")
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(selected.is_empty(), "All Courses").clicked() {
                    choice = Some(String::new());
                }
                for course in &state.course_options {
                    if ui.selectable_label(selected == *course, course).clicked() {
                        choice = Some(course.clone());
                    }
                }
            });
        if let Some(course) = choice {
            state.set_selected_course(course);
        }

        if ui.button("Reset").clicked() {
            state.reset();
        }

        match state.take_focus_request() {
            Some(FocusRequest::Focus) => response.request_focus(),
            Some(FocusRequest::Blur) => response.surrender_focus(),
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open alumni data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} alumni from {} with courses {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.courses
                );
                if !state.asset_root_pinned {
                    if let Some(dir) = path.parent() {
                        state.asset_root = dir.to_path_buf();
                    }
                }
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
