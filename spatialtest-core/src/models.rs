use std::slice;

use serde::Serialize;

use crate::errors::SpatialTestError;

///
/// Ordered protein-domain annotation along a transcript.
///
/// Each entry is a `(name, end_boundary)` pair; domain `k` covers the
/// coordinate range `(boundary[k-1], boundary[k]]`, with the first domain
/// starting at the coordinate origin. Entries are kept sorted ascending by
/// boundary, and that order drives occupancy counts, p-values, and the
/// report.
///
#[derive(Debug, Clone)]
pub struct DomainMap {
    entries: Vec<(String, u32)>,
}

impl DomainMap {
    ///
    /// Build a [DomainMap] from `(name, end_boundary)` pairs in any order.
    ///
    /// Entries are sorted ascending by boundary. Boundaries must be unique:
    /// domains are contiguous and non-overlapping, so two domains ending at
    /// the same coordinate cannot both exist.
    ///
    pub fn new<I>(mapping: I) -> Result<DomainMap, SpatialTestError>
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut entries: Vec<(String, u32)> = mapping.into_iter().collect();
        if entries.is_empty() {
            return Err(SpatialTestError::EmptyDomainMap);
        }

        entries.sort_by_key(|(_, boundary)| *boundary);

        for pair in entries.windows(2) {
            if pair[0].1 == pair[1].1 {
                return Err(SpatialTestError::DuplicateBoundary(
                    pair[0].0.clone(),
                    pair[1].0.clone(),
                    pair[0].1,
                ));
            }
        }

        Ok(DomainMap { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, boundary)` pairs in ascending boundary order.
    pub fn iter(&self) -> slice::Iter<'_, (String, u32)> {
        self.entries.iter()
    }

    /// Domain names in ascending boundary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The largest end boundary. Coordinates beyond it belong to no domain.
    pub fn last_boundary(&self) -> u32 {
        // entries is non-empty by construction
        self.entries[self.entries.len() - 1].1
    }
}

///
/// Normalized, immutable inputs for one spatial permutation test: the sorted
/// variant positions, the ordered domain annotation, and the optional cDNA
/// length.
///
#[derive(Debug, Clone)]
pub struct SpatialTest {
    variants: Vec<u32>,
    domains: DomainMap,
    length: Option<u32>,
}

impl SpatialTest {
    ///
    /// Create a new [SpatialTest] from raw inputs.
    ///
    /// Variant positions may arrive in any order and are sorted here. The
    /// length is optional; it is only required when normalizing distances or
    /// running permutations, and when present every variant must lie within
    /// `[1, length]`.
    ///
    pub fn new(
        mut variants: Vec<u32>,
        domains: DomainMap,
        length: Option<u32>,
    ) -> Result<SpatialTest, SpatialTestError> {
        if variants.len() < 2 {
            return Err(SpatialTestError::TooFewVariants(variants.len()));
        }

        if let Some(length) = length {
            // the sampler draws from [1, length), so a length below 2 leaves
            // nothing to draw from
            if length < 2 {
                return Err(SpatialTestError::InvalidLength(length));
            }
            for &position in &variants {
                if position < 1 || position > length {
                    return Err(SpatialTestError::VariantOutOfRange(position, length));
                }
            }
        } else if variants.contains(&0) {
            return Err(SpatialTestError::ZeroVariantPosition);
        }

        variants.sort_unstable();

        Ok(SpatialTest {
            variants,
            domains,
            length,
        })
    }

    pub fn variants(&self) -> &[u32] {
        &self.variants
    }

    pub fn domains(&self) -> &DomainMap {
        &self.domains
    }

    pub fn length(&self) -> Option<u32> {
        self.length
    }
}

/// Observed count and enrichment p-value for a single domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainResult {
    pub name: String,
    pub count: u32,
    pub p_value: f64,
}

///
/// Result record for one permutation run: the observed clustering statistic,
/// its one-sided empirical p-value, and per-domain occupancy counts with
/// enrichment p-values in domain order.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub length: u32,
    pub n_permutations: u64,
    pub observed_distance: f64,
    pub distance_p_value: f64,
    pub domains: Vec<DomainResult>,
}
