use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Payload axis constants
// ---------------------------------------------------------------------------

/// Fixed outer bound of the payload range selector (kg).
pub const PAYLOAD_AXIS_MIN: f64 = 0.0;
pub const PAYLOAD_AXIS_MAX: f64 = 10_000.0;
/// Slider step for the payload range selector (kg).
pub const PAYLOAD_STEP: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Outcome – the boolean launch result
// ---------------------------------------------------------------------------

/// Launch result parsed from the `class` column (0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret the raw `class` cell. Anything other than 0 or 1 is invalid.
    pub fn from_class(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// 0.0 or 1.0, used as the scatter y value and for success sums.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV). Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// SiteFilter – the site selector value
// ---------------------------------------------------------------------------

/// Site selector value. An explicit variant instead of a magic "ALL" string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    All,
    Named(String),
}

impl SiteFilter {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Named(name) => name == site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "All Sites"),
            SiteFilter::Named(name) => write!(f, "{name}"),
        }
    }
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOption {
    pub label: String,
    pub filter: SiteFilter,
}

// ---------------------------------------------------------------------------
// PayloadRange – inclusive payload mass bounds
// ---------------------------------------------------------------------------

/// Inclusive payload mass bounds (kg). `min > max` is representable and
/// simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        PayloadRange { min, max }
    }

    /// The fixed outer bound of the range selector.
    pub fn axis() -> Self {
        PayloadRange::new(PAYLOAD_AXIS_MIN, PAYLOAD_AXIS_MAX)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site and payload indices.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    pub sites: Vec<String>,
    /// Booster version categories in first-seen order (scatter legend order).
    pub booster_categories: Vec<String>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Build site/booster indices and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites: Vec<String> = records
            .iter()
            .map(|r| r.site.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut booster_categories: Vec<String> = Vec::new();
        for r in &records {
            if !booster_categories.contains(&r.booster_category) {
                booster_categories.push(r.booster_category.clone());
            }
        }

        // Observed min/max; an empty dataset falls back to the axis bound.
        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<PayloadRange>, p| {
                Some(match acc {
                    None => PayloadRange::new(p, p),
                    Some(b) => PayloadRange::new(b.min.min(p), b.max.max(p)),
                })
            })
            .unwrap_or_else(PayloadRange::axis);

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Observed payload min/max, the initial position of the range selector.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// Dropdown entries: the synthetic "All Sites" option followed by the
    /// sorted distinct sites.
    pub fn site_options(&self) -> Vec<SiteOption> {
        let mut options = vec![SiteOption {
            label: SiteFilter::All.to_string(),
            filter: SiteFilter::All,
        }];
        options.extend(self.sites.iter().map(|s| SiteOption {
            label: s.clone(),
            filter: SiteFilter::Named(s.clone()),
        }));
        options
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
