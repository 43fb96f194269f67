//! Horizontal velocity estimation for drag release.
//!
//! Uses the impulse strategy: the samples are treated as pushes on a unit
//! mass and the resulting kinetic energy is converted back to a speed. This is
//! the same estimator touch toolkits use for fling detection.

use fulldrag_graphics::Point;

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap longer than this means the pointer came to rest.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct VelocitySample {
    uptime_ms: i64,
    x: f32,
}

/// Accumulates pointer samples for one drag and reports the horizontal
/// velocity in pixels per second.
///
/// ```ignore
/// let mut tracker = HorizontalVelocityTracker::new();
/// tracker.add_sample(0, Point::new(0.0, 0.0));
/// tracker.add_sample(10, Point::new(10.0, 0.0));
/// assert!(tracker.x_velocity() > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct HorizontalVelocityTracker {
    samples: [Option<VelocitySample>; HISTORY_SIZE],
    /// Slot holding the newest sample.
    head: usize,
    len: usize,
}

impl Default for HorizontalVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalVelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            head: 0,
            len: 0,
        }
    }

    pub fn add_sample(&mut self, uptime_ms: i64, position: Point) {
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Some(VelocitySample {
            uptime_ms,
            x: position.x,
        });
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn sample_count(&self) -> usize {
        self.len
    }

    /// Horizontal velocity in px/s; positive is rightward.
    ///
    /// Returns 0.0 when fewer than two usable samples remain in the window.
    pub fn x_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.head] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.head;
        let mut previous_time = newest.uptime_ms;

        while let Some(sample) = self.samples[index] {
            let age = newest.uptime_ms - sample.uptime_ms;
            let gap = (previous_time - sample.uptime_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.uptime_ms;

            positions[count] = sample.x;
            times[count] = -(age as f32);
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }

            index = if index == 0 { HISTORY_SIZE - 1 } else { index - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }
}

/// Samples are ordered newest first; `times` are non-positive ages in ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
