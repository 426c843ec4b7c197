/// Accumulates host frame deltas into an elapsed time.
///
/// Elapsed time is kept in `f64` so the phases of the sine rules stay
/// precise over long sessions; it is narrowed per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return the sanitized delta.
    ///
    /// Negative or non-finite deltas count as a zero-length frame.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(dt);
        dt
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.tick(1.0 / 60.0);
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_bad_deltas() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(-0.5), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.tick(f32::INFINITY), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_long_session_keeps_precision() {
        // Ten hours at 60 fps
        let frames = 60 * 60 * 60 * 10;
        let dt = 1.0f32 / 60.0;
        let mut clock = FrameClock::new();
        for _ in 0..frames {
            clock.tick(dt);
        }
        let exact = f64::from(dt) * frames as f64;
        assert!((f64::from(clock.elapsed()) - exact).abs() < 0.01);
    }
}
