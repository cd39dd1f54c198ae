use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the two charts stacked ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = (ui.available_height() * 0.5 - 24.0).max(100.0);
            plot::proportion_chart(ui, &self.state, half);
            ui.separator();
            plot::scatter_chart(ui, &self.state, half);
        });
    }
}
