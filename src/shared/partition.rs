use chrono::{DateTime, Duration, Utc};

use crate::shared::types::PricePoint;

/// Price series split around a reference instant.
///
/// `past` holds every point at or before the reference, `future` every point
/// strictly after it. Both keep the input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricePartition {
    pub past: Vec<PricePoint>,
    pub future: Vec<PricePoint>,
}

/// The instant the series is split at: `now` moved forward by `shift`.
pub fn reference_instant(now: DateTime<Utc>, shift: Duration) -> DateTime<Utc> {
    now + shift
}

/// Stable filter of `points` into past (`<= reference`) and future (`> reference`).
/// Unsorted input is fine; nothing is reordered.
pub fn partition_prices(points: &[PricePoint], reference: DateTime<Utc>) -> PricePartition {
    let (past, future): (Vec<PricePoint>, Vec<PricePoint>) = points
        .iter()
        .cloned()
        .partition(|p| p.timestamp <= reference);
    PricePartition { past, future }
}

impl PricePartition {
    pub fn len(&self) -> usize {
        self.past.len() + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Past prices on the shared index axis, padded with `None` after the last past point.
    pub fn aligned_past(&self) -> Vec<Option<f64>> {
        self.past
            .iter()
            .map(|p| Some(p.price))
            .chain(std::iter::repeat(None).take(self.future.len()))
            .collect()
    }

    /// Future prices on the shared index axis: one `None` per past point, then the future prices.
    pub fn aligned_future(&self) -> Vec<Option<f64>> {
        std::iter::repeat(None)
            .take(self.past.len())
            .chain(self.future.iter().map(|p| Some(p.price)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 5, h, 0, 0).unwrap()
    }

    fn pt(h: u32, price: f64) -> PricePoint {
        PricePoint {
            timestamp: at(h),
            price,
        }
    }

    fn sample() -> Vec<PricePoint> {
        vec![pt(0, 30.0), pt(6, 32.0), pt(12, 35.0), pt(18, 31.0)]
    }

    #[test]
    fn splits_at_noon() {
        let split = partition_prices(&sample(), at(12));
        assert_eq!(split.past, vec![pt(0, 30.0), pt(6, 32.0), pt(12, 35.0)]);
        assert_eq!(split.future, vec![pt(18, 31.0)]);
    }

    #[test]
    fn point_on_reference_is_past() {
        let split = partition_prices(&[pt(12, 35.0)], at(12));
        assert_eq!(split.past.len(), 1);
        assert!(split.future.is_empty());
    }

    #[test]
    fn all_future_leaves_past_empty() {
        let s = sample();
        let reference = at(0) - Duration::hours(1);
        let split = partition_prices(&s, reference);
        assert!(split.past.is_empty());
        assert_eq!(split.future, s);
    }

    #[test]
    fn all_past_leaves_future_empty() {
        let s = sample();
        let split = partition_prices(&s, at(23));
        assert_eq!(split.past, s);
        assert!(split.future.is_empty());
        assert!(split.aligned_future().iter().all(Option::is_none));
    }

    #[test]
    fn empty_input() {
        let split = partition_prices(&[], at(12));
        assert!(split.is_empty());
        assert!(split.aligned_past().is_empty());
        assert!(split.aligned_future().is_empty());
    }

    #[test]
    fn unsorted_input_keeps_relative_order() {
        let s = vec![pt(18, 1.0), pt(3, 2.0), pt(20, 3.0), pt(1, 4.0), pt(12, 5.0)];
        let split = partition_prices(&s, at(12));
        assert_eq!(split.past, vec![pt(3, 2.0), pt(1, 4.0), pt(12, 5.0)]);
        assert_eq!(split.future, vec![pt(18, 1.0), pt(20, 3.0)]);
    }

    #[test]
    fn random_series_partition_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.gen_range(0..40);
            let s: Vec<PricePoint> = (0..n)
                .map(|_| pt(rng.gen_range(0..24), rng.gen_range(0..100) as f64))
                .collect();
            let reference = at(rng.gen_range(0..24));
            let split = partition_prices(&s, reference);

            assert_eq!(split.len(), s.len());
            assert!(split.past.iter().all(|p| p.timestamp <= reference));
            assert!(split.future.iter().all(|p| p.timestamp > reference));

            // Each side is the input filtered in order
            let expected_past: Vec<_> = s.iter().filter(|p| p.timestamp <= reference).cloned().collect();
            let expected_future: Vec<_> = s.iter().filter(|p| p.timestamp > reference).cloned().collect();
            assert_eq!(split.past, expected_past);
            assert_eq!(split.future, expected_future);

            assert_eq!(partition_prices(&s, reference), split);

            // Both aligned series span the whole axis and never overlap
            let past = split.aligned_past();
            let future = split.aligned_future();
            assert_eq!(past.len(), s.len());
            assert_eq!(future.len(), s.len());
            let k = split.past.len();
            assert!(future[..k].iter().all(Option::is_none));
            assert!(future[k..].iter().all(Option::is_some));
            assert!(past[..k].iter().all(Option::is_some));
            assert!(past[k..].iter().all(Option::is_none));
        }
    }

    #[test]
    fn sorted_input_concatenates_back() {
        let s = sample();
        for h in [0, 5, 12, 17, 23] {
            let split = partition_prices(&s, at(h));
            let joined: Vec<_> = split.past.iter().chain(split.future.iter()).cloned().collect();
            assert_eq!(joined, s);
        }
    }

    #[test]
    fn aligned_series_share_the_index_axis() {
        let split = partition_prices(&sample(), at(12));
        assert_eq!(
            split.aligned_future(),
            vec![None, None, None, Some(31.0)]
        );
        assert_eq!(
            split.aligned_past(),
            vec![Some(30.0), Some(32.0), Some(35.0), None]
        );
    }

    #[test]
    fn reference_is_shifted_now() {
        assert_eq!(
            reference_instant(at(6), Duration::minutes(330)),
            Utc.with_ymd_and_hms(2025, 4, 5, 11, 30, 0).unwrap()
        );
    }
}
