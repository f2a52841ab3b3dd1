use serde::Serialize;

/// Descriptive statistics over a sample set, all values in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (divisor N-1). Zero for fewer than two samples.
    pub stddev: f64,
}

impl Summary {
    /// Computes the summary of `samples`. Returns `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Summary {
            mean,
            median: median_of_sorted(&sorted),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            stddev: sample_stddev(samples, mean),
        })
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_stddev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn empty_has_no_summary() {
        assert!(Summary::from_samples(&[]).is_none());
    }

    #[test]
    fn single_sample_has_zero_stddev() {
        let s = Summary::from_samples(&[0.25]).unwrap();
        assert_eq!(s.stddev, 0.0);
        assert_eq!(s.mean, 0.25);
        assert_eq!(s.median, 0.25);
        assert_eq!(s.min, 0.25);
        assert_eq!(s.max, 0.25);
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        let s = Summary::from_samples(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let s = Summary::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.5);
    }

    #[test]
    fn stddev_uses_bessel_correction() {
        // Population stddev of this set is 2.0; sample stddev is sqrt(32/7).
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = Summary::from_samples(&data).unwrap();
        assert!(approx(s.mean, 5.0));
        assert!(approx(s.stddev, (32.0f64 / 7.0).sqrt()));
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let s = Summary::from_samples(&[0.01; 5]).unwrap();
        assert!(approx(s.mean, 0.01));
        assert_eq!(s.median, 0.01);
        assert_eq!(s.min, 0.01);
        assert_eq!(s.max, 0.01);
        assert!(s.stddev.abs() < 1e-15);
    }

    #[test]
    fn central_values_lie_between_extremes() {
        let sets: &[&[f64]] = &[
            &[0.5],
            &[0.1, 0.9],
            &[0.003, 0.001, 0.002, 0.010],
            &[1.0, 1.0, 1.0, 100.0, 0.5],
        ];
        for set in sets {
            let s = Summary::from_samples(set).unwrap();
            assert!(s.min <= s.median && s.median <= s.max, "median out of range for {:?}", set);
            assert!(s.min <= s.mean && s.mean <= s.max, "mean out of range for {:?}", set);
            assert!(s.stddev >= 0.0);
        }
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = Summary::from_samples(&[0.3, 0.1, 0.2]).unwrap();
        let b = Summary::from_samples(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(a.median, b.median);
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
        assert!(approx(a.mean, b.mean));
    }
}
