//! Fixed-timestep animation loop.
//!
//! Nothing is presented on screen, so frames are not paced by wall-clock time:
//! every frame is exactly one [`FIXED_DT`] update. The same loop drives both
//! the batch run and `step` commands in interactive mode.

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Simulated time and update count across every run.
#[derive(Debug, Default)]
pub struct GameLoop {
    total_sim_time: f64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `frames` fixed updates. `update_fn(fixed_dt, total_sim_time)` sees
    /// the simulated time before each update.
    pub fn run_frames(&mut self, frames: u32, mut update_fn: impl FnMut(f64, f64)) {
        for _ in 0..frames {
            update_fn(FIXED_DT, self.total_sim_time);
            self.update_count += 1;
            // Derived from the count so long runs do not accumulate drift.
            self.total_sim_time = self.update_count as f64 * FIXED_DT;
        }
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dt_value() {
        assert!((FIXED_DT - 1.0 / 60.0).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn test_zero_frames_do_nothing() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.run_frames(0, |_, _| updates += 1);
        assert_eq!(updates, 0);
        assert_eq!(loop_.total_sim_time(), 0.0);
    }

    #[test]
    fn test_update_sees_time_before_step() {
        let mut loop_ = GameLoop::new();
        let mut seen = Vec::new();
        loop_.run_frames(3, |_, t| seen.push(t));
        assert_eq!(seen[0], 0.0);
        assert!((seen[2] - 2.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_run_frames_is_exact() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.run_frames(600, |dt, _| {
            assert_eq!(dt, FIXED_DT);
            updates += 1;
        });
        assert_eq!(updates, 600);
        assert_eq!(loop_.update_count(), 600);
        assert!((loop_.total_sim_time() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_runs_accumulate() {
        let mut loop_ = GameLoop::new();
        loop_.run_frames(30, |_, _| {});
        loop_.run_frames(30, |_, _| {});
        assert_eq!(loop_.update_count(), 60);
        assert!((loop_.total_sim_time() - 1.0).abs() < 1e-9);
    }
}
