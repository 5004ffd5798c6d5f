//! Permutation testing for spatial clustering of variants and for presence
//! in protein domains.
//!
//! Given variant positions along a transcript (cDNA), this crate asks two
//! questions against a null model of uniformly random placement:
//!
//! - Do the variants cluster more tightly in space than expected? (geometric
//!   mean pairwise distance, one-sided empirical p-value)
//! - Do they land in annotated protein domains more often than expected?
//!   (per-domain occupancy counts, one enrichment p-value per domain)
//!
//! # Example
//!
//! ```no_run
//! use spatialtest_core::{DomainMap, SpatialTest};
//!
//! let domains = DomainMap::new([
//!     ("kinase".to_string(), 120),
//!     ("sh2".to_string(), 210),
//! ]).unwrap();
//!
//! let test = SpatialTest::new(vec![14, 33, 35, 160], domains, Some(300)).unwrap();
//! let result = test.run(1_000_000).unwrap();
//! print!("{result}");
//! ```

pub mod errors;
pub mod models;
pub mod permutation;
pub mod pvalues;
pub mod report;
pub mod sampling;
pub mod statistics;

// re-exports
pub use errors::SpatialTestError;
pub use models::{DomainMap, DomainResult, SpatialTest, TestResult};
pub use sampling::NullSampler;
pub use statistics::{domain_occupancy, geometric_mean_distance};
