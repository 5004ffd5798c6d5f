//! Text rendering of a [TestResult].

use std::fmt::{self, Display};

use crate::models::TestResult;

impl Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "length: {}", self.length)?;
        writeln!(f, "permutations: {}", self.n_permutations)?;
        writeln!(
            f,
            "observed geometric mean pairwise distance: {}",
            self.observed_distance
        )?;
        writeln!(f, "distance p-value: {}", self.distance_p_value)?;

        writeln!(f, "number of variants per domain:")?;
        for domain in &self.domains {
            writeln!(f, "  {}: {}", domain.name, domain.count)?;
        }

        writeln!(f, "p-values per domain:")?;
        for domain in &self.domains {
            writeln!(f, "  {}: {}", domain.name, domain.p_value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{DomainResult, TestResult};

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn sample_result() -> TestResult {
        TestResult {
            length: 75,
            n_permutations: 1000,
            observed_distance: 5.25,
            distance_p_value: 0.125,
            domains: vec![
                DomainResult {
                    name: "reg1".to_string(),
                    count: 3,
                    p_value: 0.5,
                },
                DomainResult {
                    name: "reg2".to_string(),
                    count: 0,
                    p_value: 1.0,
                },
            ],
        }
    }

    #[rstest]
    fn test_report_fields_and_order() {
        let rendered = sample_result().to_string();

        let expected = "\
length: 75
permutations: 1000
observed geometric mean pairwise distance: 5.25
distance p-value: 0.125
number of variants per domain:
  reg1: 3
  reg2: 0
p-values per domain:
  reg1: 0.5
  reg2: 1
";
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn test_zero_count_domains_still_reported() {
        let rendered = sample_result().to_string();
        assert!(rendered.contains("reg2: 0"));
    }
}
