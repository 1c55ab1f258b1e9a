//! Fake coordinate readout refreshed on a fixed interval

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::TelemetryConfig;

/// One randomly generated position fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryReading {
    /// Degrees in [-90, 90)
    pub lat: f64,
    /// Degrees in [-180, 180)
    pub lng: f64,
    /// Percent in [0, 100)
    pub sync: f64,
}

impl TelemetryReading {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            lat: rng.gen::<f64>() * 180.0 - 90.0,
            lng: rng.gen::<f64>() * 360.0 - 180.0,
            sync: rng.gen::<f64>() * 100.0,
        }
    }
}

impl fmt::Display for TelemetryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LAT: {:.4}° | LNG: {:.4}° | SYNC: {:.1}%",
            self.lat, self.lng, self.sync
        )
    }
}

/// Interval-driven readout state
#[derive(Debug, Clone)]
pub struct Telemetry {
    interval: Duration,
    next_at: Option<Instant>,
    reading: Option<TelemetryReading>,
}

impl Telemetry {
    pub fn new(config: &TelemetryConfig) -> Self {
        Self::with_interval(config.interval())
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_at: None,
            reading: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Latest reading; `None` until the first interval has elapsed
    pub fn reading(&self) -> Option<&TelemetryReading> {
        self.reading.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    /// Schedule the first reading one interval from `now`
    pub fn start(&mut self, now: Instant) {
        if self.next_at.is_none() {
            self.next_at = Some(now + self.interval);
        }
    }

    /// Stop refreshing; the last reading stays visible
    pub fn stop(&mut self) {
        self.next_at = None;
    }

    /// Sample a new reading when due. Returns true if the reading changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.next_at {
            Some(due) if now >= due => {
                self.reading = Some(TelemetryReading::sample(rng));
                // Late ticks do not queue up extra readings
                self.next_at = Some(now.max(due) + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let r = TelemetryReading::sample(&mut rng);
            assert!((-90.0..90.0).contains(&r.lat));
            assert!((-180.0..180.0).contains(&r.lng));
            assert!((0.0..100.0).contains(&r.sync));
        }
    }

    #[test]
    fn test_display_format() {
        let r = TelemetryReading {
            lat: 12.345678,
            lng: -120.5,
            sync: 99.96,
        };
        assert_eq!(r.to_string(), "LAT: 12.3457° | LNG: -120.5000° | SYNC: 100.0%");
    }

    #[test]
    fn test_first_reading_after_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut telemetry = Telemetry::with_interval(Duration::from_secs(2));
        let t0 = Instant::now();

        assert!(!telemetry.tick(t0, &mut rng));
        telemetry.start(t0);
        assert!(!telemetry.tick(t0 + Duration::from_millis(1999), &mut rng));
        assert!(telemetry.reading().is_none());

        assert!(telemetry.tick(t0 + Duration::from_secs(2), &mut rng));
        let first = *telemetry.reading().unwrap();

        assert!(!telemetry.tick(t0 + Duration::from_millis(3999), &mut rng));
        assert!(telemetry.tick(t0 + Duration::from_secs(4), &mut rng));
        assert_ne!(*telemetry.reading().unwrap(), first);
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut telemetry = Telemetry::with_interval(Duration::from_secs(2));
        let t0 = Instant::now();
        telemetry.start(t0);

        let late = t0 + Duration::from_secs(10);
        assert!(telemetry.tick(late, &mut rng));
        assert!(!telemetry.tick(late + Duration::from_secs(1), &mut rng));
    }

    #[test]
    fn test_stop_keeps_last_reading() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut telemetry = Telemetry::with_interval(Duration::from_millis(10));
        let t0 = Instant::now();
        telemetry.start(t0);
        telemetry.tick(t0 + Duration::from_millis(10), &mut rng);
        telemetry.stop();
        assert!(!telemetry.is_running());
        assert!(!telemetry.tick(t0 + Duration::from_secs(1), &mut rng));
        assert!(telemetry.reading().is_some());
    }
}
