use crate::data::aggregate::{scatter_points, success_slices, ProportionSlice, ScatterPoint};
use crate::data::filter::filtered_indices;
use crate::data::model::{LaunchDataset, PayloadRange, SiteFilter};

// ---------------------------------------------------------------------------
// Reactive bindings: (site, payload range) → chart descriptions
// ---------------------------------------------------------------------------

/// Published description of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionFigure {
    pub title: String,
    pub slices: Vec<ProportionSlice>,
}

/// Published description of the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Dispatcher holding the current selector values and the last published
/// figures. `set_site` / `set_range` are the two reactive edges: each
/// recomputes both figures from an immutable dataset snapshot, but only when
/// the input actually changed. Handlers run on the single UI thread and are
/// not reentrant.
pub struct ChartBindings {
    site: SiteFilter,
    range: PayloadRange,
    proportion: ProportionFigure,
    scatter: ScatterFigure,
}

impl ChartBindings {
    /// Initial state: all sites, range at the dataset's observed bounds.
    pub fn new(dataset: &LaunchDataset) -> Self {
        let mut bindings = ChartBindings {
            site: SiteFilter::All,
            range: dataset.payload_bounds(),
            proportion: ProportionFigure {
                title: String::new(),
                slices: Vec::new(),
            },
            scatter: ScatterFigure {
                title: String::new(),
                points: Vec::new(),
            },
        };
        bindings.publish(dataset);
        bindings
    }

    pub fn site(&self) -> &SiteFilter {
        &self.site
    }

    pub fn range(&self) -> PayloadRange {
        self.range
    }

    pub fn proportion(&self) -> &ProportionFigure {
        &self.proportion
    }

    pub fn scatter(&self) -> &ScatterFigure {
        &self.scatter
    }

    /// Number of records surviving the current filters.
    pub fn visible_len(&self) -> usize {
        self.scatter.points.len()
    }

    /// Site selector edge.
    pub fn set_site(&mut self, dataset: &LaunchDataset, site: SiteFilter) {
        if self.site != site {
            self.site = site;
            self.publish(dataset);
        }
    }

    /// Payload range selector edge.
    pub fn set_range(&mut self, dataset: &LaunchDataset, range: PayloadRange) {
        if self.range != range {
            self.range = range;
            self.publish(dataset);
        }
    }

    fn publish(&mut self, dataset: &LaunchDataset) {
        let indices = filtered_indices(&dataset.records, &self.site, &self.range);

        self.proportion = ProportionFigure {
            title: match &self.site {
                SiteFilter::All => "Total Launches for All Sites".to_string(),
                SiteFilter::Named(name) => format!("Total Launches for {name}"),
            },
            slices: success_slices(&dataset.records, &indices, &self.site),
        };
        self.scatter = ScatterFigure {
            title: match &self.site {
                SiteFilter::All => {
                    "Correlation between Payload and Success for All Sites".to_string()
                }
                SiteFilter::Named(name) => {
                    format!("Correlation between Payload and Success for {name}")
                }
            },
            points: scatter_points(&dataset.records, &indices),
        };

        log::debug!(
            "republished charts: site={}, range=[{}, {}], {} of {} records visible",
            self.site,
            self.range.min,
            self.range.max,
            indices.len(),
            dataset.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "A".to_string(),
                payload_mass_kg: 500.0,
                booster_category: "v1.0".to_string(),
                outcome: Outcome::Success,
            },
            LaunchRecord {
                site: "B".to_string(),
                payload_mass_kg: 9000.0,
                booster_category: "FT".to_string(),
                outcome: Outcome::Failure,
            },
        ])
    }

    #[test]
    fn initial_state_shows_all_records() {
        let dataset = sample();
        let bindings = ChartBindings::new(&dataset);
        assert_eq!(bindings.site(), &SiteFilter::All);
        assert_eq!(bindings.range(), dataset.payload_bounds());
        assert_eq!(bindings.visible_len(), 2);
        assert_eq!(bindings.proportion().title, "Total Launches for All Sites");
        let counts: Vec<(&str, f64)> = bindings
            .proportion()
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect();
        assert_eq!(counts, vec![("Success", 1.0), ("Failure", 1.0)]);
    }

    #[test]
    fn selecting_a_site_republishes_both_figures() {
        let dataset = sample();
        let mut bindings = ChartBindings::new(&dataset);
        bindings.set_site(&dataset, SiteFilter::Named("A".to_string()));

        assert_eq!(bindings.proportion().title, "Total Launches for A");
        assert_eq!(
            bindings.scatter().title,
            "Correlation between Payload and Success for A"
        );
        assert_eq!(bindings.visible_len(), 1);
        assert_eq!(bindings.scatter().points[0].x, 500.0);
        assert_eq!(bindings.scatter().points[0].y, 1.0);
    }

    #[test]
    fn excluding_range_empties_both_figures() {
        let dataset = sample();
        let mut bindings = ChartBindings::new(&dataset);
        bindings.set_range(&dataset, PayloadRange::new(600.0, 8000.0));

        assert!(bindings.proportion().slices.is_empty());
        assert!(bindings.scatter().points.is_empty());
    }

    #[test]
    fn unchanged_input_does_not_republish() {
        let dataset = sample();
        let mut bindings = ChartBindings::new(&dataset);
        let before = bindings.proportion().clone();

        bindings.set_site(&dataset, SiteFilter::All);
        bindings.set_range(&dataset, dataset.payload_bounds());

        assert_eq!(bindings.proportion(), &before);
    }

    #[test]
    fn inverted_range_renders_empty_charts() {
        let dataset = sample();
        let mut bindings = ChartBindings::new(&dataset);
        bindings.set_range(&dataset, PayloadRange::new(8000.0, 600.0));
        assert_eq!(bindings.visible_len(), 0);
        assert!(bindings.proportion().slices.is_empty());
    }

    #[test]
    fn unknown_site_renders_empty_charts() {
        let dataset = sample();
        let mut bindings = ChartBindings::new(&dataset);
        bindings.set_site(&dataset, SiteFilter::Named("Nowhere".to_string()));
        assert_eq!(bindings.visible_len(), 0);
        assert_eq!(bindings.proportion().title, "Total Launches for Nowhere");
    }
}
