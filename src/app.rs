use std::time::Instant;

use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{cards, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AlumniDirectoryApp {
    pub state: AppState,
}

impl AlumniDirectoryApp {
    /// Wrap the state and bring the directory live.
    pub fn new(mut state: AppState) -> Self {
        state.mount(Instant::now());
        Self { state }
    }
}

impl eframe::App for AlumniDirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Carousel timer ----
        let now = Instant::now();
        self.state.carousel.tick(now);
        if let Some(wait) = self.state.carousel.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: banner, search, cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    cards::banner(ui, &self.state);

                    ui.add_space(12.0);
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading("All Alumni");
                    });
                    ui.add_space(12.0);

                    panels::search_form(ui, &mut self.state);
                    ui.add_space(24.0);

                    cards::alumni_grid(ui, &mut self.state);
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.state.is_mounted() {
            self.state.unmount();
            log::debug!("alumni directory unmounted");
        }
    }
}
