use eframe::egui::{self, Ui};

use crate::data::model::{SiteFilter, PAYLOAD_AXIS_MAX, PAYLOAD_AXIS_MIN, PAYLOAD_STEP};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the two selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site selector ----
    ui.strong("Launch Site");
    let current = state.bindings.site().clone();
    let mut chosen: Option<SiteFilter> = None;

    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in state.dataset.site_options() {
                if ui
                    .selectable_label(current == option.filter, &option.label)
                    .clicked()
                {
                    chosen = Some(option.filter);
                }
            }
        });

    if let Some(site) = chosen {
        state.bindings.set_site(&state.dataset, site);
    }

    ui.separator();

    // ---- Payload range selector ----
    ui.strong("Payload range (kg)");
    let mut range = state.bindings.range();
    ui.add(
        egui::Slider::new(&mut range.min, PAYLOAD_AXIS_MIN..=PAYLOAD_AXIS_MAX)
            .step_by(PAYLOAD_STEP)
            .text("min"),
    );
    ui.add(
        egui::Slider::new(&mut range.max, PAYLOAD_AXIS_MIN..=PAYLOAD_AXIS_MAX)
            .step_by(PAYLOAD_STEP)
            .text("max"),
    );
    // min > max is allowed; the charts just go empty.
    state.bindings.set_range(&state.dataset, range);

    if range.min > range.max {
        ui.small("Empty range: no launches match.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} shown",
            state.dataset.len(),
            state.bindings.visible_len()
        ));
    });
}
