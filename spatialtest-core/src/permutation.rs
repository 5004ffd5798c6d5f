//! Run orchestration: observed statistics, null generation, and reduction
//! into a [TestResult].

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;

use crate::errors::SpatialTestError;
use crate::models::{DomainResult, SpatialTest, TestResult};
use crate::pvalues::smoothed_p;
use crate::sampling::NullSampler;
use crate::statistics::{domain_occupancy, geometric_mean_of_diffs};

impl SpatialTest {
    ///
    /// Run the permutation test with a seed drawn from OS entropy.
    ///
    /// This is the default mode: two runs over the same inputs draw different
    /// null distributions. Use [SpatialTest::run_seeded] for reproducible
    /// results.
    ///
    pub fn run(&self, n_perms: u64) -> Result<TestResult, SpatialTestError> {
        self.run_seeded(n_perms, rand::rng().random())
    }

    ///
    /// Run the permutation test against `n_perms` null samples drawn from a
    /// sampler seeded with `seed`.
    ///
    /// The observed distance is normalized by the cDNA length, as are all
    /// permuted distances, so a length is required here even though the
    /// model itself accepts its absence.
    ///
    /// Per-permutation work is independent, so permutations are processed in
    /// parallel and only the extreme-sample counters are merged at the end.
    ///
    pub fn run_seeded(&self, n_perms: u64, seed: u64) -> Result<TestResult, SpatialTestError> {
        let length = self.length().ok_or(SpatialTestError::MissingLength)?;
        let scale = Some(f64::from(length));

        let observed_distance = geometric_mean_of_diffs(self.variants(), scale);
        let observed_counts = domain_occupancy(self.variants(), self.domains());

        let sampler = NullSampler::new(self.variants().len(), length, seed);
        let n_domains = self.domains().len();

        let progress = ProgressBar::new(n_perms);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} permutations")
                .unwrap(),
        );

        let (distance_hits, domain_hits) = (0..n_perms)
            .into_par_iter()
            .fold(
                || (0u64, vec![0u64; n_domains]),
                |(mut dist_hits, mut dom_hits), index| {
                    let sample = sampler.sample(index);

                    if observed_distance > geometric_mean_of_diffs(&sample, scale) {
                        dist_hits += 1;
                    }

                    let perm_counts = domain_occupancy(&sample, self.domains());
                    for (hits, (&observed, &permuted)) in dom_hits
                        .iter_mut()
                        .zip(observed_counts.iter().zip(perm_counts.iter()))
                    {
                        if observed < permuted {
                            *hits += 1;
                        }
                    }

                    progress.inc(1);
                    (dist_hits, dom_hits)
                },
            )
            .reduce(
                || (0u64, vec![0u64; n_domains]),
                |(dist_a, doms_a), (dist_b, doms_b)| {
                    let merged: Vec<u64> = doms_a
                        .iter()
                        .zip(doms_b.iter())
                        .map(|(a, b)| a + b)
                        .collect();
                    (dist_a + dist_b, merged)
                },
            );
        progress.finish_and_clear();

        let domains = self
            .domains()
            .iter()
            .zip(observed_counts.iter().zip(domain_hits.iter()))
            .map(|((name, _), (&count, &hits))| DomainResult {
                name: name.clone(),
                count,
                p_value: smoothed_p(hits, n_perms),
            })
            .collect();

        Ok(TestResult {
            length,
            n_permutations: n_perms,
            observed_distance,
            distance_p_value: smoothed_p(distance_hits, n_perms),
            domains,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SpatialTestError;
    use crate::models::{DomainMap, SpatialTest};
    use crate::statistics::geometric_mean_distance;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn pair_test(length: u32) -> SpatialTest {
        let domains = DomainMap::new([("reg1".to_string(), 10)]).unwrap();
        SpatialTest::new(vec![1, 3], domains, Some(length)).unwrap()
    }

    #[rstest]
    fn test_run_requires_length() {
        let domains = DomainMap::new([("reg1".to_string(), 10)]).unwrap();
        let test = SpatialTest::new(vec![1, 3], domains, None).unwrap();
        assert!(matches!(
            test.run_seeded(10, 0),
            Err(SpatialTestError::MissingLength)
        ));
    }

    #[rstest]
    fn test_run_is_deterministic_under_fixed_seed() {
        let test = pair_test(10);
        let first = test.run_seeded(200, 42).unwrap();
        let second = test.run_seeded(200, 42).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_observed_fields_match_direct_statistics() {
        let test = pair_test(10);
        let result = test.run_seeded(50, 7).unwrap();

        let expected =
            geometric_mean_distance(test.variants(), test.length(), true).unwrap();
        assert_eq!(result.observed_distance, expected);
        assert_eq!(result.length, 10);
        assert_eq!(result.n_permutations, 50);
        assert_eq!(result.domains.len(), 1);
        assert_eq!(result.domains[0].name, "reg1");
        assert_eq!(result.domains[0].count, 2);
    }

    #[rstest]
    #[case(1)]
    #[case(50)]
    fn test_p_values_strictly_within_unit_interval(#[case] n_perms: u64) {
        let result = pair_test(10).run_seeded(n_perms, 3).unwrap();

        assert!(result.distance_p_value > 0.0 && result.distance_p_value <= 1.0);
        for domain in &result.domains {
            assert!(domain.p_value > 0.0 && domain.p_value <= 1.0);
        }
    }

    #[rstest]
    fn test_length_shifts_distance_p_but_not_domain_p() {
        let short = pair_test(10).run_seeded(1000, 11).unwrap();
        let long = pair_test(20).run_seeded(1000, 11).unwrap();

        assert_ne!(short.distance_p_value, long.distance_p_value);

        // no permuted sample of 2 positions can exceed the observed count of
        // 2, so the enrichment p-value pins to its smoothed floor either way
        assert_eq!(short.domains[0].p_value, long.domains[0].p_value);
        assert_eq!(short.domains[0].p_value, 1.0 / 1001.0);
    }

    #[rstest]
    fn test_reported_domains_follow_boundary_order() {
        let domains = DomainMap::new([
            ("outer".to_string(), 60),
            ("inner".to_string(), 30),
        ])
        .unwrap();
        let test = SpatialTest::new(vec![5, 40, 55], domains, Some(75)).unwrap();
        let result = test.run_seeded(10, 1).unwrap();

        let names: Vec<&str> = result.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["inner", "outer"]);
        assert_eq!(result.domains[0].count, 1);
        assert_eq!(result.domains[1].count, 2);
    }
}
