use crate::color::ColorMap;
use crate::data::model::LaunchDataset;
use crate::reactive::ChartBindings;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is loaded once
/// before the window opens and never mutated afterwards.
pub struct AppState {
    /// Read-only launch records plus precomputed bounds and options.
    pub dataset: LaunchDataset,

    /// Current selector values and the figures published from them.
    pub bindings: ChartBindings,

    /// Colour per booster version category (scatter points and legend).
    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let bindings = ChartBindings::new(&dataset);
        let color_map = ColorMap::new(&dataset.booster_categories);
        AppState {
            dataset,
            bindings,
            color_map,
        }
    }
}
