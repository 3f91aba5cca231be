use std::ops::{Add, AddAssign};
use std::iter::Sum;

#[inline]
fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Matched/unmatched counts of one scoring category.
///
/// Precision, recall and F1 are derived on demand and are 0 whenever their denominator is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub num_matches: usize,
    pub num_only_guessed: usize,
    pub num_only_ref: usize,
}

impl SummaryStatistics {
    pub fn new(num_matches: usize, num_only_guessed: usize, num_only_ref: usize) -> SummaryStatistics {
        SummaryStatistics { num_matches, num_only_guessed, num_only_ref }
    }

    #[inline]
    pub fn num_guessed(&self) -> usize {
        self.num_matches + self.num_only_guessed
    }

    #[inline]
    pub fn num_ref(&self) -> usize {
        self.num_matches + self.num_only_ref
    }

    pub fn precision(&self) -> f64 {
        safe_div(self.num_matches as f64, self.num_guessed() as f64)
    }

    pub fn recall(&self) -> f64 {
        safe_div(self.num_matches as f64, self.num_ref() as f64)
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        safe_div(2.0 * p * r, p + r)
    }

    /// Column names matching `fields`
    pub fn titles() -> Vec<&'static str> {
        vec!["precision", "recall", "f1"]
    }

    pub fn fields(&self, digits: usize) -> Vec<String> {
        [self.precision(), self.recall(), self.f1()].iter()
            .map(|v| format!("{:.*}", digits, v))
            .collect()
    }
}

impl Add for SummaryStatistics {
    type Output = SummaryStatistics;

    fn add(self, rhs: SummaryStatistics) -> SummaryStatistics {
        SummaryStatistics {
            num_matches: self.num_matches + rhs.num_matches,
            num_only_guessed: self.num_only_guessed + rhs.num_only_guessed,
            num_only_ref: self.num_only_ref + rhs.num_only_ref,
        }
    }
}

impl AddAssign for SummaryStatistics {
    fn add_assign(&mut self, rhs: SummaryStatistics) {
        *self = *self + rhs;
    }
}

impl Sum for SummaryStatistics {
    fn sum<I: Iterator<Item=SummaryStatistics>>(iter: I) -> SummaryStatistics {
        iter.fold(SummaryStatistics::default(), |acc, s| acc + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_derived_scores() {
        let stats = SummaryStatistics::new(2, 1, 0);
        assert!((stats.precision() - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.recall() - 1.0).abs() < 1e-9);
        assert!((stats.f1() - 0.8).abs() < 1e-9);
        assert_eq!(stats.fields(3), vec!["0.667", "1.000", "0.800"]);
    }

    #[test]
    pub fn test_zero_denominators() {
        let empty = SummaryStatistics::default();
        assert_eq!((empty.precision(), empty.recall(), empty.f1()), (0.0, 0.0, 0.0));

        let only_ref = SummaryStatistics::new(0, 0, 4);
        assert_eq!((only_ref.precision(), only_ref.recall(), only_ref.f1()), (0.0, 0.0, 0.0));

        let only_guessed = SummaryStatistics::new(0, 3, 0);
        assert_eq!((only_guessed.precision(), only_guessed.recall(), only_guessed.f1()), (0.0, 0.0, 0.0));
    }

    #[test]
    pub fn test_aggregation_adds_counts() {
        let mut total = SummaryStatistics::new(2, 1, 0);
        total += SummaryStatistics::new(1, 0, 3);
        assert_eq!(total, SummaryStatistics::new(3, 1, 3));

        let summed: SummaryStatistics = vec![SummaryStatistics::new(1, 1, 1); 3].into_iter().sum();
        assert_eq!(summed, SummaryStatistics::new(3, 3, 3));
    }
}
