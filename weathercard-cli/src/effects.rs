//! Decorative particles behind the card.
//!
//! Which effect runs is the classifier's decision; this module only
//! instantiates the chosen template. Placement and timing are randomized,
//! so the random source is injected and tests seed it.

use rand::Rng;
use weathercard_core::EffectCategory;

/// One decorative particle.
///
/// `top_pct` is set for floating blobs only; falling particles enter from
/// the top edge. Delay and duration describe the animation template the
/// particle was spawned with.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: Option<f64>,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Instantiate the particle template for an effect.
pub fn spawn_particles<R: Rng + ?Sized>(effect: EffectCategory, rng: &mut R) -> Vec<Particle> {
    let (delay_max, duration, floating) = match effect {
        EffectCategory::None => return Vec::new(),
        EffectCategory::Rain => (2.0, 0.5..1.0, false),
        EffectCategory::Snow => (3.0, 2.0..4.0, false),
        EffectCategory::Cloud => (4.0, 3.0..5.0, true),
    };

    (0..effect.particle_count())
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: floating.then(|| rng.random_range(0.0..100.0)),
            delay_s: rng.random_range(0.0..delay_max),
            duration_s: rng.random_range(duration.clone()),
        })
        .collect()
}

const BANNER_WIDTH: usize = 44;
const BANNER_ROWS: usize = 3;

/// Scatter the particles across a fixed-width text banner.
///
/// Percent positions are quantized onto character cells; falling particles
/// cycle through the rows, floating blobs pick theirs from `top_pct`.
pub fn banner(effect: EffectCategory, particles: &[Particle]) -> Option<String> {
    let glyph = match effect {
        EffectCategory::None => return None,
        EffectCategory::Rain => '|',
        EffectCategory::Snow => '*',
        EffectCategory::Cloud => '~',
    };

    let mut rows = vec![[' '; BANNER_WIDTH]; BANNER_ROWS];

    for (i, particle) in particles.iter().enumerate() {
        let col = cell(particle.left_pct, BANNER_WIDTH);
        let row = match particle.top_pct {
            Some(top) => cell(top, BANNER_ROWS),
            None => i % BANNER_ROWS,
        };
        rows[row][col] = glyph;
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(row.iter().collect::<String>().trim_end());
        out.push('\n');
    }

    Some(out)
}

fn cell(pct: f64, cells: usize) -> usize {
    let idx = (pct / 100.0 * cells as f64).floor() as usize;
    idx.min(cells - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn spawns_the_template_count_per_effect() {
        assert_eq!(spawn_particles(EffectCategory::Rain, &mut rng()).len(), 50);
        assert_eq!(spawn_particles(EffectCategory::Snow, &mut rng()).len(), 30);
        assert_eq!(spawn_particles(EffectCategory::Cloud, &mut rng()).len(), 20);
        assert!(spawn_particles(EffectCategory::None, &mut rng()).is_empty());
    }

    #[test]
    fn rain_particles_fall_fast_from_the_top_edge() {
        for p in spawn_particles(EffectCategory::Rain, &mut rng()) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!(p.top_pct.is_none());
            assert!((0.0..2.0).contains(&p.delay_s));
            assert!((0.5..1.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn snow_particles_drift_slower_than_rain() {
        for p in spawn_particles(EffectCategory::Snow, &mut rng()) {
            assert!(p.top_pct.is_none());
            assert!((0.0..3.0).contains(&p.delay_s));
            assert!((2.0..4.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn cloud_blobs_float_at_a_vertical_position() {
        for p in spawn_particles(EffectCategory::Cloud, &mut rng()) {
            let top = p.top_pct.expect("floating blobs have a vertical position");
            assert!((0.0..100.0).contains(&top));
            assert!((3.0..5.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn same_seed_spawns_the_same_particles() {
        let a = spawn_particles(EffectCategory::Snow, &mut rng());
        let b = spawn_particles(EffectCategory::Snow, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn banner_is_absent_without_an_effect() {
        assert_eq!(banner(EffectCategory::None, &[]), None);
    }

    #[test]
    fn banner_quantizes_particles_onto_rows() {
        let particles = spawn_particles(EffectCategory::Rain, &mut rng());
        let text = banner(EffectCategory::Rain, &particles).expect("rain has a banner");

        assert_eq!(text.lines().count(), BANNER_ROWS);
        assert!(text.contains('|'));
        for line in text.lines() {
            assert!(line.chars().count() <= BANNER_WIDTH);
        }
    }

    #[test]
    fn banner_glyph_follows_the_effect() {
        let particles = spawn_particles(EffectCategory::Snow, &mut rng());
        let text = banner(EffectCategory::Snow, &particles).expect("snow has a banner");
        assert!(text.contains('*'));
        assert!(!text.contains('|'));
    }

    #[test]
    fn cell_clamps_to_the_last_column() {
        assert_eq!(cell(0.0, 10), 0);
        assert_eq!(cell(99.9, 10), 9);
        assert_eq!(cell(100.0, 10), 9);
    }
}
