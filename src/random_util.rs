/*
 * Weighted random numbers. Values are drawn from a density shape over its
 * native interval by rejection sampling against a bounding box, then
 * rescaled into the interval the caller asked for.
 */

use clap::ValueEnum;
use rand::Rng;
use rand_distr::Distribution;

use crate::utils::rescale;

// peak of the standard normal density, 1 / sqrt(2 * PI)
pub const GAUSSIAN_PEAK: f32 = 0.398_942_3;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    #[error("region max ({max}) cannot be smaller than min ({min})")]
    MaxBelowMin { min: f32, max: f32 },
    #[error("region min and max cannot be equal ({0})")]
    EqualBounds(f32),
    #[error("region [{min}, {max}) must have a finite width")]
    NonFinite { min: f32, max: f32 },
}

// rectangle [x_min, x_max) x [y_min, y_max) enclosing the graph of a density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum DensityShape {
    // x^2 on [-10, 10)
    #[default]
    Polynomial,
    // standard normal density, truncated at three standard deviations
    Gaussian,
}

impl DensityShape {
    pub const ALL: [DensityShape; 2] = [DensityShape::Polynomial, DensityShape::Gaussian];

    pub fn density(self, x: f32) -> f32 {
        match self {
            DensityShape::Polynomial => x * x,
            // scaled by the peak so f(x) never exceeds the box, even after rounding
            DensityShape::Gaussian => GAUSSIAN_PEAK * (-(x * x) / 2.0).exp(),
        }
    }

    // y_max must be at least the supremum of density on [x_min, x_max);
    // re-derive it for any new shape
    pub const fn bounding_box(self) -> BoundingBox {
        match self {
            DensityShape::Polynomial => BoundingBox {
                x_min: -10.0,
                x_max: 10.0,
                y_min: 0.0,
                y_max: 100.0,
            },
            DensityShape::Gaussian => BoundingBox {
                x_min: -3.0,
                x_max: 3.0,
                y_min: 0.0,
                y_max: GAUSSIAN_PEAK,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DensityShape::Polynomial => "polynomial",
            DensityShape::Gaussian => "gaussian",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DensityShape::Polynomial => DensityShape::Gaussian,
            DensityShape::Gaussian => DensityShape::Polynomial,
        }
    }
}

/*
 * Acceptance-rejection: pick points uniformly in the box until one lands
 * under the curve of f. The expected number of loops is
 * (box area) / (area under f), a small constant for the shapes above.
 * Never terminates if f is zero everywhere on the box.
 */
pub fn sample_region<R, F>(rng: &mut R, f: F, bbox: &BoundingBox) -> f32
where
    R: Rng + ?Sized,
    F: Fn(f32) -> f32,
{
    loop {
        let x = rng.random_range(bbox.x_min..bbox.x_max);

        // float draws can round up onto x_max, which is exclusive
        if x == bbox.x_max {
            continue;
        }

        let y = rng.random_range(bbox.y_min..bbox.y_max);
        if y <= f(x) {
            return x;
        }
    }
}

// a validated [min, max) interval weighted by a density shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedRandom {
    shape: DensityShape,
    min: f32,
    max: f32,
}

impl WeightedRandom {
    pub fn new(shape: DensityShape, min: f32, max: f32) -> Result<Self, SampleError> {
        if max < min {
            return Err(SampleError::MaxBelowMin { min, max });
        }
        if max == min {
            return Err(SampleError::EqualBounds(min));
        }
        if !(max - min).is_finite() {
            return Err(SampleError::NonFinite { min, max });
        }

        Ok(Self { shape, min, max })
    }

    pub fn shape(&self) -> DensityShape {
        self.shape
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

impl Distribution<f32> for WeightedRandom {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let bbox = self.shape.bounding_box();
        loop {
            let x = sample_region(rng, |x| self.shape.density(x), &bbox);
            let v = rescale(x, bbox.x_min, bbox.x_max, self.min, self.max);

            // a draw just below x_max can still round onto max here
            if v < self.max {
                return v;
            }
        }
    }
}

// random number in [min, max) weighted by x^2 over [-10, 10)
pub fn polynomial<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Result<f32, SampleError> {
    Ok(WeightedRandom::new(DensityShape::Polynomial, min, max)?.sample(rng))
}

/*
 * random number in [min, max) weighted by a normal distribution spanning
 * three standard deviations either side of the interval's midpoint
 */
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Result<f32, SampleError> {
    Ok(WeightedRandom::new(DensityShape::Gaussian, min, max)?.sample(rng))
}
