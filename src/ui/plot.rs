use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::model::{PAYLOAD_AXIS_MAX, PAYLOAD_AXIS_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Proportion chart (success counts / sums per slice)
// ---------------------------------------------------------------------------

/// Render the proportion chart: one bar per published slice.
pub fn proportion_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let figure = state.bindings.proportion();
    ui.strong(&figure.title);

    let palette = generate_palette(figure.slices.len());

    Plot::new("proportion_chart")
        .legend(Legend::default())
        .height(height)
        .show_x(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, slice) in figure.slices.iter().enumerate() {
                let bar = Bar::new(i as f64, slice.value)
                    .name(&slice.label)
                    .width(0.6);
                let chart = BarChart::new(vec![bar])
                    .name(&slice.label)
                    .color(palette[i]);
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart (payload mass vs. outcome, colored by booster category)
// ---------------------------------------------------------------------------

/// Render the scatter chart, one point series per booster version category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let figure = state.bindings.scatter();
    ui.strong(&figure.title);

    Plot::new("scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .include_x(PAYLOAD_AXIS_MIN)
        .include_x(PAYLOAD_AXIS_MAX)
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points series per category so the legend picks up the
            // category names.
            for category in &state.dataset.booster_categories {
                let coords: Vec<[f64; 2]> = figure
                    .points
                    .iter()
                    .filter(|p| p.color_key == *category)
                    .map(|p| [p.x, p.y])
                    .collect();
                if coords.is_empty() {
                    continue;
                }
                let points = Points::new(PlotPoints::from(coords))
                    .name(category)
                    .color(state.color_map.color_for(category))
                    .radius(3.5)
                    .filled(true);
                plot_ui.points(points);
            }
        });
}
