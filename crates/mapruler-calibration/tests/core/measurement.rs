use mapruler_calibration::{MeasurementEngine, ScaleEngine};
use mapruler_core::{Point, ScaleFactor};

#[test]
fn test_distance_reads_factor_at_call_time() {
    let mut scale = ScaleEngine::new(ScaleFactor::new(1.0));
    let mut ruler = MeasurementEngine::new();
    ruler.set_start(Point::new(0.0, 0.0));
    ruler.set_end(Point::new(30.0, 40.0));
    assert_eq!(ruler.distance(&scale).unwrap().meters, 50.0);

    scale.apply_calibration(225, 700.0).unwrap();
    let length = ruler.distance(&scale).unwrap();
    assert_eq!(length.pixels, 50.0);
    assert!((length.meters - 112.5).abs() < 1e-9);
}

#[test]
fn test_start_after_end_starts_over() {
    let scale = ScaleEngine::default();
    let mut ruler = MeasurementEngine::new();
    ruler.set_start(Point::new(0.0, 0.0));
    ruler.set_end(Point::new(30.0, 40.0));

    ruler.set_start(Point::new(100.0, 100.0));
    assert!(ruler.segment().end.is_none());
    // Only a stale hover (none here) could resolve a target
    assert!(ruler.distance(&scale).is_none());
}

#[test]
fn test_reset_then_distance_is_none() {
    let scale = ScaleEngine::default();
    let mut ruler = MeasurementEngine::new();
    ruler.set_start(Point::new(1.0, 1.0));
    ruler.set_end(Point::new(2.0, 2.0));
    ruler.reset();
    assert!(ruler.distance(&scale).is_none());
    assert!(ruler.segment().start.is_none());
    assert!(ruler.segment().hover.is_none());
}

#[test]
fn test_zero_length_measurement() {
    let scale = ScaleEngine::default();
    let mut ruler = MeasurementEngine::new();
    ruler.set_start(Point::new(5.0, 5.0));
    ruler.set_end(Point::new(5.0, 5.0));
    assert_eq!(ruler.distance(&scale).unwrap().meters, 0.0);
}
