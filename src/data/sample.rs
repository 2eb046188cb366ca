use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::ExperimentRecord;

// ---------------------------------------------------------------------------
// Synthetic experiments for trying the viewer without the simulator
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (splitmix64)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Logistic growth from `start` toward `ceiling`, one sample per generation.
/// Every value is clamped to `[0, 1]`.
pub fn infection_curve(
    start: f64,
    ceiling: f64,
    growth: f64,
    generations: usize,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    let mut ratio = start.clamp(0.0, 1.0);
    (0..generations)
        .map(|_| {
            let current = ratio;
            ratio += growth * ratio * (1.0 - ratio / ceiling) + rng.gauss(0.0, 0.005);
            ratio = ratio.clamp(0.0, 1.0);
            current
        })
        .collect()
}

/// `count` experiments sweeping kill and rescue rates over a grid in `[0, 1]`.
pub fn generate(count: usize, seed: u64) -> Vec<ExperimentRecord> {
    let mut rng = SimpleRng::new(seed);
    let side = ((count as f64).sqrt().ceil() as usize).max(2);
    let step = (side - 1) as f64;

    (0..count)
        .map(|i| {
            let kill_rate = (i % side) as f64 / step;
            let rescue_rate = ((i / side) as f64 / step).min(1.0);

            // High kill rates with low rescue suppress the infection.
            let suppression = kill_rate * (1.0 - rescue_rate);
            let ceiling = (0.9 * (1.0 - suppression) + rng.gauss(0.0, 0.05)).clamp(0.02, 1.0);
            let growth = 0.05 + 0.25 * rng.next_f64();
            let generations = 50 + (rng.next_f64() * 150.0) as usize;

            let mut record = ExperimentRecord::new(
                kill_rate,
                rescue_rate,
                infection_curve(0.0625, ceiling, growth, generations, &mut rng),
            );
            record.start_time = Some(format!(
                "2023-04-01T10:{:02}:{:02}.000Z",
                i / 60 % 60,
                i % 60
            ));
            record.infected_males_at_start = Some(0.25);
            record.infected_females_at_start = Some(0.25);
            record.water_ratio = Some(0.125);
            record.simulation_length = Some(generations as u64);
            record
        })
        .collect()
}

/// Write `experiment_NNNN.json` files into `dir`, creating it if needed.
pub fn write_samples(dir: &Path, count: usize, seed: u64) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut paths = Vec::with_capacity(count);
    for (i, record) in generate(count, seed).iter().enumerate() {
        let path = dir.join(format!("experiment_{i:04}.json"));
        let text = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}
