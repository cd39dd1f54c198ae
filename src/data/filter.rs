use super::model::{LaunchRecord, PayloadRange, SiteFilter};

// ---------------------------------------------------------------------------
// Filter predicate: site selection ⨉ payload range
// ---------------------------------------------------------------------------

/// Return indices of records that pass both the site filter and the payload
/// range, in record order.
///
/// * `SiteFilter::All` applies only the payload bound.
/// * `SiteFilter::Named` restricts to that site first, then the payload bound.
/// * An unknown site or an inverted range (`min > max`) yields an empty
///   result, never an error.
pub fn filtered_indices(
    records: &[LaunchRecord],
    site: &SiteFilter,
    range: &PayloadRange,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| site.matches(&r.site) && range.contains(r.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}
