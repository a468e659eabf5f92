// File: crates/metrics-chart-core/src/rng.rs
// Summary: Injectable uniform random source used for series jitter.

/// Source of uniform samples in `[0, 1)`.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: JitterSource + ?Sized> JitterSource for &mut T {
    fn next_unit(&mut self) -> f64 { (**self).next_unit() }
}

impl<T: JitterSource + ?Sized> JitterSource for Box<T> {
    fn next_unit(&mut self) -> f64 { (**self).next_unit() }
}

/// 64-bit LCG (Numerical Recipes constants). Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Seed from the wall clock. The seed is logged so a run can be replayed.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .map(|n| n as u64)
            .unwrap_or_else(|| now.timestamp_micros() as u64);
        tracing::debug!(seed, "seeded jitter source from clock");
        Self::new(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}

impl JitterSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        // top 53 bits -> [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Always returns the same sample; clamped into `[0, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct ConstantJitter(pub f64);

impl JitterSource for ConstantJitter {
    fn next_unit(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
