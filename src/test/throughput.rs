use super::{assert_close, ev};
use crate::metrics::{MAX_BUCKET, throughput};
use crate::trace::EventKind;

#[test]
fn receives_in_same_bucket_sum_to_one_rate() {
    let events = vec![
        ev(EventKind::Receive, 0.05, 0, 1, "tcp", 100, 1),
        ev(EventKind::Receive, 0.05, 0, 1, "tcp", 200, 2),
    ];
    let series = throughput(&events, 0.1);
    assert_eq!(series.points.len(), 1);
    assert_close(series.points[0].start_secs, 0.0);
    assert_close(series.points[0].bps, 24_000.0);
    assert_close(series.average_bps.expect("avg"), 24_000.0);
    assert_close(series.peak_bps.expect("peak"), 24_000.0);
}

#[test]
fn only_receive_events_count_and_empty_buckets_are_absent() {
    let events = vec![
        ev(EventKind::Enqueue, 0.05, 0, 1, "tcp", 1000, 1),
        ev(EventKind::Drop, 0.15, 0, 1, "tcp", 1000, 2),
        ev(EventKind::Receive, 0.35, 0, 1, "tcp", 125, 3),
        ev(EventKind::Receive, 0.01, 0, 1, "tcp", 250, 4),
    ];
    let series = throughput(&events, 0.1);
    let starts: Vec<f64> = series.points.iter().map(|p| p.start_secs).collect();
    assert_eq!(starts.len(), 2);
    assert_close(starts[0], 0.0);
    assert_close(starts[1], 0.30000000000000004);
    assert_close(series.points[0].bps, 20_000.0);
    assert_close(series.points[1].bps, 10_000.0);
    assert_close(series.average_bps.expect("avg"), 15_000.0);
    assert_close(series.peak_bps.expect("peak"), 20_000.0);
}

#[test]
fn dense_series_fills_gaps_with_zero() {
    let events = vec![
        ev(EventKind::Receive, 0.05, 0, 1, "tcp", 125, 1),
        ev(EventKind::Receive, 0.25, 0, 1, "tcp", 125, 2),
    ];
    let series = throughput(&events, 0.1);
    assert_eq!(series.points.len(), 2);
    let dense = series.dense(16).expect("fits");
    assert_eq!(dense.len(), 3);
    assert_close(dense[0].bps, 10_000.0);
    assert_close(dense[1].bps, 0.0);
    assert_close(dense[2].bps, 10_000.0);
}

#[test]
fn no_receives_gives_empty_series_without_scalars() {
    let events = vec![ev(EventKind::Enqueue, 0.05, 0, 1, "tcp", 100, 1)];
    let series = throughput(&events, 0.5);
    assert!(series.is_empty());
    assert_eq!(series.dense(0), Some(Vec::new()));
    assert_eq!(series.average_bps, None);
    assert_eq!(series.peak_bps, None);
}

#[test]
fn bucket_width_scales_rate() {
    let events = vec![ev(EventKind::Receive, 0.7, 0, 1, "tcp", 1000, 1)];
    let series = throughput(&events, 1.0);
    assert_eq!(series.points.len(), 1);
    assert_close(series.points[0].start_secs, 0.0);
    assert_close(series.points[0].bps, 8_000.0);
}

#[test]
fn dense_series_refuses_to_exceed_point_cap() {
    let events = vec![ev(EventKind::Receive, 1e9, 0, 1, "tcp", 125, 1)];
    let series = throughput(&events, 0.1);
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.dense(1_000), None);
}

#[test]
fn out_of_range_bucket_is_skipped_not_saturated() {
    let events = vec![
        ev(EventKind::Receive, 0.05, 0, 1, "tcp", 125, 1),
        ev(EventKind::Receive, 1e20, 0, 1, "tcp", 125, 2),
    ];
    let series = throughput(&events, 0.1);
    assert_eq!(series.skipped_events, 1);
    assert_eq!(series.points.len(), 1);
    assert_close(series.points[0].start_secs, 0.0);
    assert_close(series.peak_bps.expect("peak"), 10_000.0);
    assert!(series.points.iter().all(|p| p.start_secs < MAX_BUCKET as f64 * 0.1));
}

#[test]
fn in_range_receives_are_not_counted_as_skipped() {
    let events = vec![ev(EventKind::Receive, 0.05, 0, 1, "tcp", 125, 1)];
    assert_eq!(throughput(&events, 0.1).skipped_events, 0);
}
