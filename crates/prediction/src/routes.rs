/// Train served when no route entry matches the query.
pub const DEFAULT_TRAIN: &str = "301";

// Order matters: the fuzzy match takes the first entry that fits.
const ROUTES: [((&str, &str), &str); 6] = [
    (("durban station", "umhlanga"), "205"),
    (("umhlanga", "durban station"), "206"),
    (("durban station", "pinetown"), "301"),
    (("pinetown", "durban station"), "302"),
    (("durban station", "westville"), "412"),
    (("berea", "ballito"), "518"),
];

/// Train number serving `origin` to `destination`.
///
/// An exact (case-insensitive) pair wins; otherwise the first route whose
/// origin and destination each contain, or are contained in, the query names.
/// Falls back to [`DEFAULT_TRAIN`]. Empty names are for the caller to reject.
#[must_use]
pub fn match_route(origin: &str, destination: &str) -> &'static str {
    let origin = origin.trim().to_lowercase();
    let destination = destination.trim().to_lowercase();

    if let Some(&(_, train)) =
        ROUTES.iter().find(|((from, to), _)| *from == origin && *to == destination)
    {
        return train;
    }

    if let Some(&(_, train)) = ROUTES
        .iter()
        .find(|((from, to), _)| overlaps(from, &origin) && overlaps(to, &destination))
    {
        tracing::debug!(%origin, %destination, train, "matched route by partial name");
        return train;
    }

    tracing::debug!(%origin, %destination, "no route matched; using default train");
    DEFAULT_TRAIN
}

fn overlaps(known: &str, query: &str) -> bool {
    known.contains(query) || query.contains(known)
}
