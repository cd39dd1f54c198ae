use super::model::{LaunchRecord, SiteFilter};

// ---------------------------------------------------------------------------
// Pure aggregations feeding the two charts
// ---------------------------------------------------------------------------

/// One slice of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionSlice {
    pub label: String,
    pub value: f64,
}

/// One point of the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Outcome as 0.0 / 1.0.
    pub y: f64,
    /// Booster version category, drives point color.
    pub color_key: String,
}

/// Build the proportion chart slices from an already-filtered subset.
///
/// * With `SiteFilter::All`: one slice per outcome, valued by its record
///   count.
/// * With `SiteFilter::Named`: one slice per site (only the selected site
///   survives filtering), valued by its summed successes.
///
/// Slices keep the records' first-seen category order.
pub fn success_slices(
    records: &[LaunchRecord],
    indices: &[usize],
    site: &SiteFilter,
) -> Vec<ProportionSlice> {
    let mut slices: Vec<ProportionSlice> = Vec::new();

    let mut bump = |label: String, amount: f64| {
        match slices.iter_mut().find(|s| s.label == label) {
            Some(slice) => slice.value += amount,
            None => slices.push(ProportionSlice {
                label,
                value: amount,
            }),
        }
    };

    for &i in indices {
        let r = &records[i];
        match site {
            SiteFilter::All => bump(r.outcome.to_string(), 1.0),
            SiteFilter::Named(_) => bump(r.site.clone(), r.outcome.as_f64()),
        }
    }

    slices
}

/// Identity transform from the filtered subset to scatter points, preserving
/// record order.
pub fn scatter_points(records: &[LaunchRecord], indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .map(|&i| {
            let r = &records[i];
            ScatterPoint {
                x: r.payload_mass_kg,
                y: r.outcome.as_f64(),
                color_key: r.booster_category.clone(),
            }
        })
        .collect()
}
