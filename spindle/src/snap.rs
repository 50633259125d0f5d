/// Constant-deceleration model used to project where a fling would stop.
///
/// The projection is deterministic and monotonic in the release velocity:
/// `distance = v² / (2 · rate)`, signed like `v`. Velocities below
/// `min_velocity` count as a dead stop so tiny release jitter does not move
/// the snap target off the nearest item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deceleration {
    /// Deceleration rate in px/s².
    pub rate: f32,
    /// Velocity threshold in px/s below which a release is treated as rest.
    pub min_velocity: f32,
}

impl Deceleration {
    pub const DEFAULT: Self = Self {
        rate: 1500.0,
        min_velocity: 10.0,
    };

    /// Signed distance, in pixels, a fling released at `velocity` px/s
    /// travels before friction stops it.
    pub fn stop_distance(&self, velocity: f32) -> i64 {
        let speed = if velocity < 0.0 { -velocity } else { velocity };
        if speed < self.min_velocity {
            return 0;
        }
        let rate = if self.rate > 0.0 {
            self.rate
        } else {
            Self::DEFAULT.rate
        };
        let distance = (speed * speed / (2.0 * rate)) as i64;
        if velocity < 0.0 { -distance } else { distance }
    }
}

impl Default for Deceleration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
