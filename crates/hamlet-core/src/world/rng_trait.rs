//! RNG trait abstraction for world generation
//!
//! Generators take any `WorldRng`, so hosts can pass a seeded
//! `Xoshiro256StarStar` for reproducible layouts or `thread_rng()` for a
//! fresh village every run.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Random number generator trait for world generation
pub trait WorldRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniform f32 in [min, max); returns `min` for an empty span
    fn gen_span(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        // Interpolate without forming `max - min`, which overflows for wide spans
        let t = self.gen_f32();
        let val = min * (1.0 - t) + max * t;
        // Rounding can land exactly on `max` for draws just below 1.0
        if val >= max {
            max - (max.abs() * f32::EPSILON).max(f32::MIN_POSITIVE)
        } else {
            val.max(min)
        }
    }

    /// Uniform integer in [min, max]
    fn gen_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f32;
        min + ((self.gen_f32() * span) as u32).min(max - min)
    }
}

impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

/// Deterministic RNG for a world seed
pub fn seeded_rng(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_rng_gen_bool() {
        let mut rng = seeded_rng(12345);

        let mut seen_true = false;
        let mut seen_false = false;

        for _ in 0..100 {
            if rng.gen_bool() {
                seen_true = true;
            } else {
                seen_false = true;
            }
        }

        assert!(seen_true);
        assert!(seen_false);
    }

    #[test]
    fn test_world_rng_gen_f32() {
        let mut rng = seeded_rng(12345);

        for _ in 0..100 {
            let val = rng.gen_f32();
            assert!(val >= 0.0);
            assert!(val < 1.0);
        }
    }

    #[test]
    fn test_world_rng_check_probability_extremes() {
        let mut rng = seeded_rng(12345);

        for _ in 0..100 {
            assert!(rng.check_probability(1.0));
            assert!(!rng.check_probability(0.0));
        }
    }

    #[test]
    fn test_gen_span_bounds() {
        let mut rng = seeded_rng(7);

        for _ in 0..1000 {
            let val = rng.gen_span(2.0, 4.0);
            assert!((2.0..4.0).contains(&val), "{val} out of [2, 4)");
        }

        // Inverted span collapses to min
        assert_eq!(rng.gen_span(3.0, 1.0), 3.0);
    }

    #[test]
    fn test_gen_span_full_float_range() {
        let mut rng = seeded_rng(1);
        let mut seen_negative = false;
        let mut seen_positive = false;

        for _ in 0..200 {
            let val = rng.gen_span(-f32::MAX, f32::MAX);
            assert!(val.is_finite(), "{val} is not finite");
            assert!(val < f32::MAX);
            seen_negative |= val < 0.0;
            seen_positive |= val > 0.0;
        }

        assert!(seen_negative);
        assert!(seen_positive);
    }

    #[test]
    fn test_gen_inclusive_covers_range() {
        let mut rng = seeded_rng(99);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let val = rng.gen_inclusive(2, 4);
            assert!((2..=4).contains(&val));
            seen[(val - 2) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.gen_inclusive(5, 5), 5);
    }

    #[test]
    fn test_world_rng_deterministic() {
        let mut rng1 = seeded_rng(42);
        let mut rng2 = seeded_rng(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f32(), rng2.gen_f32());
        }
    }
}
