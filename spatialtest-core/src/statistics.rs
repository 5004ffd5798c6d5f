//! Clustering and occupancy statistics for variant positions.
//!
//! Two statistics are computed for the observed variants and for every
//! permuted sample: the geometric-mean pairwise distance (smaller means
//! tighter spatial clustering) and the per-domain occupancy count.

use crate::errors::SpatialTestError;
use crate::models::DomainMap;

///
/// Geometric mean of pairwise differences between positions.
///
/// Every unordered pair of distinct values contributes its absolute
/// difference; pairs of equal values contribute nothing. The mean is taken
/// with exponent `1/k` where `k` is the number of positions, not the number
/// of pairs — this matches the published statistic and existing results, so
/// it is kept as-is.
///
/// With `normalize` set, each difference is divided by the cDNA length
/// before the product, which makes values comparable between genes.
///
pub fn geometric_mean_distance(
    positions: &[u32],
    length: Option<u32>,
    normalize: bool,
) -> Result<f64, SpatialTestError> {
    if positions.len() < 2 {
        return Err(SpatialTestError::TooFewVariants(positions.len()));
    }

    let scale = if normalize {
        let length = length.ok_or(SpatialTestError::MissingLength)?;
        Some(f64::from(length))
    } else {
        None
    };

    Ok(geometric_mean_of_diffs(positions, scale))
}

/// Infallible inner statistic, used on permuted samples where the
/// preconditions (at least two positions, length known) already hold.
pub(crate) fn geometric_mean_of_diffs(positions: &[u32], scale: Option<f64>) -> f64 {
    let mut product = 1.0f64;

    for (i, &a) in positions.iter().enumerate() {
        for &b in positions.iter().skip(i + 1) {
            if a == b {
                continue;
            }
            let mut diff = f64::from(a.abs_diff(b));
            if let Some(scale) = scale {
                diff /= scale;
            }
            product *= diff;
        }
    }

    let k = positions.len() as f64;
    product.powf(1.0 / k)
}

///
/// Count how many positions fall in each domain.
///
/// Domains are scanned in ascending boundary order and a position belongs to
/// the first domain whose end boundary is at or after it. Positions beyond
/// the last boundary are counted in no domain; the caller sees this as the
/// counts summing to less than the number of positions.
///
/// Returns one count per domain, aligned with the [DomainMap] order.
///
pub fn domain_occupancy(positions: &[u32], domains: &DomainMap) -> Vec<u32> {
    let mut counts = vec![0u32; domains.len()];

    for &position in positions {
        for (slot, (_, boundary)) in counts.iter_mut().zip(domains.iter()) {
            if position <= *boundary {
                *slot += 1;
                break;
            }
        }
    }

    counts
}
