use macroquad::logging::info;
use rand::Rng;
use rand_distr::Distribution;

use crate::random_util::{DensityShape, SampleError, WeightedRandom};

// bucket count limits
pub const MIN_BUCKETS: usize = 2;
pub const MAX_BUCKETS: usize = 100;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum HistogramError {
    #[error("bucket count {0} is outside 2..=100")]
    BucketCount(usize),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/*
 * Accumulates weighted random samples into buckets. Each tick draws one
 * value in [0, buckets) and floors it into a bucket index.
 */
pub struct Histogram {
    counts: Vec<u64>,
    distribution: WeightedRandom,
    total: u64,
}

impl Histogram {
    pub fn new(shape: DensityShape, buckets: usize) -> Result<Self, HistogramError> {
        Ok(Self {
            counts: vec![0; buckets],
            distribution: Self::distribution(shape, buckets)?,
            total: 0,
        })
    }

    fn distribution(shape: DensityShape, buckets: usize) -> Result<WeightedRandom, HistogramError> {
        if !(MIN_BUCKETS..=MAX_BUCKETS).contains(&buckets) {
            return Err(HistogramError::BucketCount(buckets));
        }
        Ok(WeightedRandom::new(shape, 0.0, buckets as f32)?)
    }

    /*
     * switch shape and/or bucket count; counts are only cleared when
     * something actually changed. Returns whether they were.
     */
    pub fn reconfigure(&mut self, shape: DensityShape, buckets: usize) -> Result<bool, HistogramError> {
        if shape == self.shape() && buckets == self.buckets() {
            return Ok(false);
        }

        self.distribution = Self::distribution(shape, buckets)?;
        self.counts = vec![0; buckets];
        self.total = 0;
        info!("Reset histogram: {} with {} buckets", shape.name(), buckets);

        Ok(true)
    }

    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
    }

    // takes one sample and counts it, returning the bucket it landed in
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        // draws are strictly below the bucket count, so the floor is a valid index
        let index = self.distribution.sample(rng).floor() as usize;
        self.counts[index] += 1;
        self.total += 1;
        index
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    // counts as bar weights for the graph
    pub fn weights(&self) -> Vec<f32> {
        self.counts.iter().map(|&c| c as f32).collect()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn shape(&self) -> DensityShape {
        self.distribution.shape()
    }

    pub fn buckets(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn starts_empty() {
        let histogram = Histogram::new(DensityShape::Gaussian, 20).unwrap();
        assert_eq!(histogram.buckets(), 20);
        assert_eq!(histogram.total(), 0);
        assert!(histogram.counts().iter().all(|&c| c == 0));
    }

    #[test]
    fn rejects_bucket_counts_out_of_range() {
        assert_eq!(
            Histogram::new(DensityShape::Polynomial, 1).err(),
            Some(HistogramError::BucketCount(1))
        );
        assert_eq!(
            Histogram::new(DensityShape::Polynomial, 101).err(),
            Some(HistogramError::BucketCount(101))
        );

        let mut histogram = Histogram::new(DensityShape::Polynomial, 2).unwrap();
        assert_eq!(
            histogram.reconfigure(DensityShape::Polynomial, 0),
            Err(HistogramError::BucketCount(0))
        );
        assert_eq!(histogram.buckets(), 2);
    }

    #[test]
    fn tick_counts_into_returned_bucket() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut histogram = Histogram::new(DensityShape::Polynomial, 10).unwrap();
        let mut expected = [0u64; 10];
        for _ in 0..1_000 {
            let index = histogram.tick(&mut rng);
            assert!(index < 10);
            expected[index] += 1;
        }
        assert_eq!(histogram.counts(), &expected[..]);
        assert_eq!(histogram.total(), 1_000);
    }

    #[test]
    fn reconfigure_resets_only_on_change() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut histogram = Histogram::new(DensityShape::Polynomial, 20).unwrap();
        for _ in 0..100 {
            histogram.tick(&mut rng);
        }

        assert_eq!(histogram.reconfigure(DensityShape::Polynomial, 20), Ok(false));
        assert_eq!(histogram.total(), 100);

        assert_eq!(histogram.reconfigure(DensityShape::Gaussian, 20), Ok(true));
        assert_eq!(histogram.shape(), DensityShape::Gaussian);
        assert_eq!(histogram.total(), 0);
        assert!(histogram.counts().iter().all(|&c| c == 0));

        histogram.tick(&mut rng);
        assert_eq!(histogram.reconfigure(DensityShape::Gaussian, 35), Ok(true));
        assert_eq!(histogram.counts(), &[0; 35][..]);
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut histogram = Histogram::new(DensityShape::Gaussian, 12).unwrap();
        for _ in 0..50 {
            histogram.tick(&mut rng);
        }
        histogram.reset();
        assert_eq!(histogram.buckets(), 12);
        assert_eq!(histogram.shape(), DensityShape::Gaussian);
        assert_eq!(histogram.total(), 0);
        assert!(histogram.counts().iter().all(|&c| c == 0));
    }

    #[test]
    fn polynomial_fills_edges_before_middle() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut histogram = Histogram::new(DensityShape::Polynomial, 10).unwrap();
        for _ in 0..20_000 {
            histogram.tick(&mut rng);
        }
        let counts = histogram.counts();
        assert!(counts[0] > counts[4] * 10);
        assert!(counts[9] > counts[5] * 10);
    }

    #[test]
    fn counts_keep_adding_up_past_f32_precision() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut histogram = Histogram::new(DensityShape::Polynomial, 2).unwrap();
        // start both buckets where an f32 can no longer represent +1
        let start = 1u64 << 24;
        histogram.counts = vec![start; 2];
        histogram.total = 2 * start;

        for _ in 0..1_000 {
            histogram.tick(&mut rng);
        }

        let sum: u64 = histogram.counts().iter().sum();
        assert_eq!(sum, histogram.total());
        assert_eq!(sum, 2 * start + 1_000);
        assert!(histogram.counts().iter().all(|&c| c > start));
    }

    #[test]
    fn weights_mirror_counts() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut histogram = Histogram::new(DensityShape::Gaussian, 5).unwrap();
        for _ in 0..300 {
            histogram.tick(&mut rng);
        }
        let weights = histogram.weights();
        assert_eq!(weights.len(), 5);
        for (&w, &c) in weights.iter().zip(histogram.counts()) {
            assert_eq!(w, c as f32);
        }
        assert_eq!(weights.iter().sum::<f32>(), 300.0);
    }
}
