//! One-sided empirical p-values with add-one smoothing.
//!
//! Both formulas divide by `P + 1` and add one to the extreme-sample count,
//! so results always land strictly inside `(0, 1]` — a finite number of
//! permutations can never claim impossibility.

/// Smoothed empirical p-value from a raw extreme-sample count.
pub(crate) fn smoothed_p(extreme_hits: u64, n_perms: u64) -> f64 {
    (extreme_hits + 1) as f64 / (n_perms + 1) as f64
}

///
/// Clustering p-value: the smoothed fraction of permuted distances that the
/// observed distance exceeds.
///
/// The comparison direction matters: a small value means almost every random
/// placement is more spread out than the observed one, i.e. the observed
/// variants are unusually clustered.
///
pub fn distance_p_value<I>(observed: f64, perm_distances: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut hits = 0u64;
    let mut n_perms = 0u64;
    for perm in perm_distances {
        if observed > perm {
            hits += 1;
        }
        n_perms += 1;
    }
    smoothed_p(hits, n_perms)
}

///
/// Enrichment p-value for one domain: the smoothed fraction of permutations
/// whose count in that domain exceeds the observed count.
///
pub fn domain_p_value<I>(observed: u32, perm_counts: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    let mut hits = 0u64;
    let mut n_perms = 0u64;
    for perm in perm_counts {
        if observed < perm {
            hits += 1;
        }
        n_perms += 1;
    }
    smoothed_p(hits, n_perms)
}
