use crate::models::{LocationKind, LocationSuggestion};
use crate::services::places::PlacesProvider;

/// Hard cap on suggestion counts, whichever backend serves the search.
pub const MAX_RESULTS: usize = 50;

/// Case-insensitive substring search against name or address, with an
/// optional exact kind filter. Input order is preserved among matches.
pub fn search_gazetteer(
    gazetteer: &[LocationSuggestion],
    query: &str,
    limit: usize,
    kind: Option<LocationKind>,
) -> Vec<LocationSuggestion> {
    let needle = query.to_lowercase();
    gazetteer
        .iter()
        .filter(|loc| {
            loc.name.to_lowercase().contains(&needle)
                || loc.address.to_lowercase().contains(&needle)
        })
        .filter(|loc| kind.is_none() || loc.kind == kind)
        .take(limit.min(MAX_RESULTS))
        .cloned()
        .collect()
}

pub fn find_by_id<'a>(
    gazetteer: &'a [LocationSuggestion],
    id: &str,
) -> Option<&'a LocationSuggestion> {
    gazetteer.iter().find(|loc| loc.id == id)
}

/// Forward the query to the remote autocomplete backend and map its
/// predictions into suggestions. Backend order is kept; no deduplication.
pub async fn search_remote(
    places: &dyn PlacesProvider,
    query: &str,
    limit: usize,
) -> anyhow::Result<Vec<LocationSuggestion>> {
    let predictions = places.autocomplete(query).await?;

    Ok(predictions
        .into_iter()
        .take(limit.min(MAX_RESULTS))
        .map(|p| LocationSuggestion {
            id: p.place_id,
            name: p.description.clone(),
            address: p.description,
            coordinates: None,
            kind: None,
        })
        .collect())
}
