//! Documented input ranges for every slider in the parameter form.

/// Inclusive slider range with a step size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

impl SliderRange<f64> {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Clamp into range and snap onto the step grid anchored at `min`
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let steps = ((value.clamp(self.min, self.max) - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

impl SliderRange<u32> {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn snap(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Time constant tau [s]
pub const TAU: SliderRange<f64> = SliderRange {
    min: 0.25,
    max: 2.0,
    step: 0.25,
};

/// Bandwidth factor, `omega_l = factor / tau`
pub const OMEGA_FACTOR: SliderRange<u32> = SliderRange {
    min: 1,
    max: 20,
    step: 1,
};

/// Sample period factor, `T = factor * pi / omega_l`
pub const T_FACTOR: SliderRange<f64> = SliderRange {
    min: 0.1,
    max: 1.0,
    step: 0.05,
};

/// Allowed sample counts (10^1 .. 10^5)
pub const SAMPLE_COUNTS: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

pub fn is_sample_count(n: usize) -> bool {
    SAMPLE_COUNTS.contains(&n)
}

/// Nearest allowed sample count, measured in decades
pub fn nearest_sample_count(n: usize) -> usize {
    let target = (n.max(1) as f64).log10();
    SAMPLE_COUNTS
        .iter()
        .copied()
        .min_by(|&a, &b| {
            let da = ((a as f64).log10() - target).abs();
            let db = ((b as f64).log10() - target).abs();
            da.total_cmp(&db)
        })
        .unwrap_or(SAMPLE_COUNTS[0])
}
