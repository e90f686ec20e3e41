use crate::models::{RouteConstraints, RouteOption};

pub const DEFAULT_LIMIT: usize = 10;

/// Case-insensitive two-way containment: a catalog entry "Coimbatore Airport"
/// matches a query "airport" and vice versa.
fn endpoints_match(catalog_name: &str, query_name: &str) -> bool {
    let a = catalog_name.to_lowercase();
    let b = query_name.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn passes_constraints(route: &RouteOption, constraints: &RouteConstraints) -> bool {
    if let Some(max_cost) = constraints.max_cost {
        if route.cost > max_cost {
            return false;
        }
    }
    if let Some(max_time) = constraints.max_time_min {
        if route.time_min > max_time {
            return false;
        }
    }
    if let Some(modes) = &constraints.modes {
        if !modes.contains(&route.mode) {
            return false;
        }
    }
    true
}

/// Filter the catalog to routes matching both endpoints, apply any explicit
/// constraints, rank by ascending cost (stable, so equal-cost routes keep
/// catalog order), and truncate to `limit`.
///
/// The caller guarantees both endpoint names are present and non-empty. An
/// empty result is a valid answer, not an error.
pub fn recommend(
    source: &str,
    destination: &str,
    constraints: Option<&RouteConstraints>,
    catalog: &[RouteOption],
    limit: usize,
) -> Vec<RouteOption> {
    let mut options: Vec<RouteOption> = catalog
        .iter()
        .filter(|r| endpoints_match(&r.from, source) && endpoints_match(&r.to, destination))
        .cloned()
        .collect();

    if let Some(constraints) = constraints {
        options.retain(|r| passes_constraints(r, constraints));
    }

    options.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    options.truncate(limit);
    options
}
