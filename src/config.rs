use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::histogram::{MAX_BUCKETS, MIN_BUCKETS};
use crate::random_util::DensityShape;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Live histogram of weighted random numbers", long_about = None)]
pub struct Config {
    /// Density shape to sample from
    #[arg(short, long, value_enum, default_value_t = DensityShape::Polynomial)]
    pub shape: DensityShape,

    /// Number of histogram buckets
    #[arg(short, long, default_value_t = 20, value_parser = parse_buckets)]
    pub buckets: usize,

    /// Seed for the random source; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Samples taken per frame
    #[arg(long, default_value_t = 1)]
    pub samples_per_frame: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: DensityShape::Polynomial,
            buckets: 20,
            seed: None,
            samples_per_frame: 1,
        }
    }
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn parse_buckets(s: &str) -> Result<usize, String> {
    let buckets: usize = s.parse().map_err(|e| format!("{}", e))?;
    if (MIN_BUCKETS..=MAX_BUCKETS).contains(&buckets) {
        Ok(buckets)
    } else {
        Err(format!("must be between {} and {}", MIN_BUCKETS, MAX_BUCKETS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Config::try_parse_from(["weighted-random-graph"]).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn parses_all_flags() {
        let parsed = Config::try_parse_from([
            "weighted-random-graph",
            "--shape",
            "gaussian",
            "-b",
            "42",
            "--seed",
            "7",
            "--samples-per-frame",
            "10",
        ])
        .unwrap();
        assert_eq!(parsed.shape, DensityShape::Gaussian);
        assert_eq!(parsed.buckets, 42);
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.samples_per_frame, 10);
    }

    #[test]
    fn rejects_bucket_count_out_of_range() {
        assert!(Config::try_parse_from(["weighted-random-graph", "-b", "1"]).is_err());
        assert!(Config::try_parse_from(["weighted-random-graph", "-b", "101"]).is_err());
        assert!(Config::try_parse_from(["weighted-random-graph", "-b", "many"]).is_err());
        assert_eq!(parse_buckets("100"), Ok(100));
    }

    #[test]
    fn seed_makes_rng_repeatable() {
        let config = Config {
            seed: Some(1234),
            ..Config::default()
        };
        let a: Vec<u32> = config.rng().random_iter().take(8).collect();
        let b: Vec<u32> = config.rng().random_iter().take(8).collect();
        assert_eq!(a, b);
    }
}
