use chrono::{DateTime, TimeZone, Utc};
use trackmetrics_rs::{
    analyze, place_markers, AnalyzeConfig, DistancePoint, DistanceUnit, MarkerError, MarkerOptions,
    TrackPoint,
};

fn ts(secs: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(secs as i64)
}

fn point(lat: f64, lon: f64, secs: u32) -> TrackPoint {
    TrackPoint {
        time: Some(ts(secs)),
        ..TrackPoint::new(lat, lon)
    }
}

/// Four points along the equator, 0.01 deg of longitude (~1.11 km) apart,
/// ~3.34 km in total.
fn equator_track() -> Vec<DistancePoint> {
    let points = vec![
        point(0.0, 0.0, 0),
        point(0.0, 0.01, 60),
        point(0.0, 0.02, 120),
        point(0.0, 0.03, 180),
    ];
    analyze(&points, &AnalyzeConfig::default()).path
}

fn km_options(interval: f64) -> MarkerOptions {
    MarkerOptions {
        interval,
        unit: DistanceUnit::Kilometers,
    }
}

#[test]
fn kilometer_markers_along_the_equator() {
    let path = equator_track();
    let markers = place_markers(&path, &km_options(1.0)).expect("markers");

    assert_eq!(markers.len(), 3);
    for (i, marker) in markers.iter().enumerate() {
        let k = (i + 1) as f64;
        assert_eq!(marker.label, format!("{} km", i + 1));
        assert_eq!(marker.distance_m, k * 1000.0);
        assert_eq!(marker.lat, 0.0);
        // Each marker sits strictly between the longitudes bracketing it.
        assert!(marker.lon > 0.0 && marker.lon < 0.03);
    }
    assert!(markers[0].lon < 0.01);
    assert!(markers[1].lon > 0.01 && markers[1].lon < 0.02);
    assert!(markers[2].lon > 0.02);
}

#[test]
fn track_shorter_than_interval_gets_no_markers() {
    // ~111 m of track against a 1 km interval.
    let points = vec![point(0.0, 0.0, 0), point(0.0, 0.001, 10)];
    let path = analyze(&points, &AnalyzeConfig::default()).path;

    let markers = place_markers(&path, &km_options(1.0)).expect("markers");
    assert!(markers.is_empty());
}

#[test]
fn half_kilometer_interval() {
    let path = equator_track();
    let markers = place_markers(&path, &km_options(0.5)).expect("markers");

    assert_eq!(markers.len(), 6);
    assert_eq!(markers[0].label, "0.5 km");
    assert_eq!(markers[1].label, "1 km");
    assert_eq!(markers[5].label, "3 km");
}

#[test]
fn mile_markers_along_the_equator() {
    let path = equator_track();
    let options = MarkerOptions {
        interval: 1.0,
        unit: DistanceUnit::Miles,
    };
    let markers = place_markers(&path, &options).expect("markers");

    // ~3.34 km is just over 2 miles.
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].label, "1 mi");
    assert_eq!(markers[1].label, "2 mi");
    assert_eq!(markers[0].distance_m, 1609.34);
}

#[test]
fn markers_interpolate_within_a_long_segment() {
    // One ~2.22 km segment, so both markers land inside it.
    let points = vec![point(0.0, 0.0, 0), point(0.0, 0.02, 120)];
    let track = analyze(&points, &AnalyzeConfig::default());
    let total = track.metrics.distance_m;

    let markers = place_markers(&track.path, &km_options(1.0)).expect("markers");

    assert_eq!(markers.len(), 2);
    let first = &markers[0];
    assert_eq!(first.lat, 0.0);
    assert!(first.lon > 0.0 && first.lon < 0.02);
    // The 1 km marker sits at fraction 1000 / total of the segment.
    let expected_lon = 0.02 * (1000.0 / total);
    assert!(
        (first.lon - expected_lon).abs() < 1e-9,
        "got {}, expected {expected_lon}",
        first.lon
    );
    assert!((first.lon - 0.009).abs() < 1e-3);
}

#[test]
fn marker_count_follows_the_interval_quotient() {
    let path = equator_track();
    let total = path.last().unwrap().distance_m;

    for interval in [0.25, 0.5, 1.0, 1.5, 4.0] {
        let markers = place_markers(&path, &km_options(interval)).expect("markers");
        let expected = (total / (interval * 1000.0)).floor() as usize;
        assert_eq!(markers.len(), expected, "interval {interval} km");
    }
}

#[test]
fn exact_multiple_ends_with_a_final_marker() {
    // Synthetic path with an exactly 2 km total.
    let path = vec![
        DistancePoint {
            distance_m: 0.0,
            point: TrackPoint::new(0.0, 0.0),
        },
        DistancePoint {
            distance_m: 2000.0,
            point: TrackPoint::new(0.0, 0.02),
        },
    ];

    let markers = place_markers(&path, &km_options(1.0)).expect("markers");

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[1].distance_m, 2000.0);
    assert_eq!(markers[1].lon, 0.02);
}

#[test]
fn coincident_points_never_duplicate_a_boundary_marker() {
    let anchor = TrackPoint::new(0.0, 0.01);
    let path = vec![
        DistancePoint {
            distance_m: 0.0,
            point: TrackPoint::new(0.0, 0.0),
        },
        DistancePoint {
            distance_m: 1000.0,
            point: anchor.clone(),
        },
        // Zero-length segment sharing the 1 km boundary.
        DistancePoint {
            distance_m: 1000.0,
            point: anchor,
        },
        DistancePoint {
            distance_m: 2500.0,
            point: TrackPoint::new(0.0, 0.025),
        },
    ];

    let markers = place_markers(&path, &km_options(1.0)).expect("markers");

    assert_eq!(markers.len(), 2);
    // The boundary marker anchors to the pair that reaches it exactly.
    assert_eq!(markers[0].distance_m, 1000.0);
    assert_eq!(markers[0].lon, 0.01);
    assert_eq!(markers[1].distance_m, 2000.0);
}

#[test]
fn non_positive_interval_is_a_configuration_error() {
    let path = equator_track();

    for bad in [0.0, -1.0] {
        let err = place_markers(&path, &km_options(bad)).unwrap_err();
        assert!(matches!(err, MarkerError::NonPositiveInterval(v) if v == bad));
    }
}

#[test]
fn short_paths_yield_no_markers_without_error() {
    let options = km_options(1.0);

    assert!(place_markers(&[], &options).expect("empty path").is_empty());

    let single = vec![DistancePoint {
        distance_m: 0.0,
        point: TrackPoint::new(0.0, 0.0),
    }];
    assert!(place_markers(&single, &options).expect("single point").is_empty());
}

#[test]
fn options_parse_validates_interval_and_unit() {
    let options = MarkerOptions::parse(0.5, "mi").expect("valid options");
    assert_eq!(options.interval, 0.5);
    assert_eq!(options.unit, DistanceUnit::Miles);
    assert_eq!(options.interval_meters(), 0.5 * 1609.34);

    assert!(matches!(
        MarkerOptions::parse(0.0, "km"),
        Err(MarkerError::NonPositiveInterval(_))
    ));
    assert!(matches!(
        MarkerOptions::parse(1.0, "furlongs"),
        Err(MarkerError::UnknownUnit(_))
    ));
}
