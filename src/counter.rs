//! Count-up math for the statistics counters.

/// Display value `elapsed_ms` into an ease-out-quart run toward `end`. The
/// flag reports that the run has reached its end value, so the frame loop
/// driving it can stop.
pub fn eased_count(end: u32, duration_ms: f64, elapsed_ms: f64) -> (u32, bool) {
    let progress = (elapsed_ms / duration_ms).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(4);
    ((eased * f64::from(end)).floor() as u32, progress >= 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_its_end_value_and_finishes() {
        let (value, finished) = eased_count(10, 2000.0, 2000.0);
        assert_eq!(value, 10);
        assert!(finished);

        // overshooting the duration stays pinned at the end value
        let (value, finished) = eased_count(10, 2000.0, 2500.0);
        assert_eq!(value, 10);
        assert!(finished);
    }

    #[test]
    fn mid_run_values_rise_monotonically_and_do_not_finish() {
        let (early, finished) = eased_count(10, 2000.0, 500.0);
        assert!(!finished);
        let (late, finished) = eased_count(10, 2000.0, 1500.0);
        assert!(!finished);
        assert!(early <= late);
        assert!(late <= 10);
    }
}
