use super::{assert_close, ev};
use crate::index::CorrelationIndex;
use crate::metrics::{DelayStats, end_to_end_delay};
use crate::trace::{EventKind, NodeId};

#[test]
fn delay_pairs_source_enqueue_with_destination_receive() {
    let events = vec![
        ev(EventKind::Enqueue, 0.0, 0, 2, "tcp", 1000, 7),
        ev(EventKind::Receive, 0.3, 2, 1, "tcp", 1000, 7),
        // 没有在源节点 enqueue 过的包被排除，不计为 receive_time
        ev(EventKind::Receive, 0.9, 2, 1, "tcp", 1000, 8),
    ];
    let idx = CorrelationIndex::build(&events, NodeId(0));
    let delays = end_to_end_delay(&events, &idx, NodeId(1));
    assert_eq!(delays.len(), 1);
    assert_close(delays[0], 0.3);
}

#[test]
fn receives_at_other_nodes_are_ignored() {
    let events = vec![
        ev(EventKind::Enqueue, 0.0, 0, 2, "tcp", 1000, 1),
        ev(EventKind::Receive, 0.1, 0, 2, "tcp", 1000, 1),
    ];
    let idx = CorrelationIndex::build(&events, NodeId(0));
    assert!(end_to_end_delay(&events, &idx, NodeId(1)).is_empty());
}

#[test]
fn receive_before_send_in_file_order_still_pairs() {
    let events = vec![
        ev(EventKind::Receive, 0.5, 2, 1, "tcp", 1000, 3),
        ev(EventKind::Enqueue, 0.2, 0, 2, "tcp", 1000, 3),
    ];
    let idx = CorrelationIndex::build(&events, NodeId(0));
    let delays = end_to_end_delay(&events, &idx, NodeId(1));
    assert_eq!(delays.len(), 1);
    assert_close(delays[0], 0.3);
}

#[test]
fn delay_stats_summarize_samples() {
    let stats = DelayStats::from_samples(&[0.4, 0.1, 0.3, 0.2]).expect("samples");
    assert_eq!(stats.count, 4);
    assert_close(stats.average, 0.25);
    assert_close(stats.min, 0.1);
    assert_close(stats.max, 0.4);
    assert_close(stats.median, 0.3);
    // 总体标准差 sqrt(0.0125)
    assert_close(stats.jitter, 0.0125f64.sqrt());
    assert_eq!(stats.samples(), &[0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn jitter_is_zero_for_single_sample_and_stats_absent_without_samples() {
    let stats = DelayStats::from_samples(&[0.7]).expect("one sample");
    assert_close(stats.jitter, 0.0);
    assert_close(stats.median, 0.7);
    assert!(DelayStats::from_samples(&[]).is_none());
}

#[test]
fn delay_stats_do_not_depend_on_sample_order() {
    let a = DelayStats::from_samples(&[0.31, 0.07, 0.19, 0.5, 0.11]).expect("samples");
    let b = DelayStats::from_samples(&[0.5, 0.11, 0.31, 0.19, 0.07]).expect("samples");
    assert_eq!(a, b);
}

#[test]
fn histogram_uses_equal_width_bins_and_includes_max() {
    let stats = DelayStats::from_samples(&[0.0, 1.0, 2.0, 3.0, 4.0]).expect("samples");
    let hist = stats.histogram(4);
    assert_eq!(hist.len(), 4);
    let counts: Vec<u64> = hist.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 1, 1, 2]);
    assert_close(hist[0].lower, 0.0);
    assert_close(hist[1].lower, 1.0);
    assert_close(hist[3].upper, 4.0);
    assert_eq!(counts.iter().sum::<u64>(), 5);
}

#[test]
fn histogram_of_identical_samples_fills_first_bin() {
    let stats = DelayStats::from_samples(&[0.2, 0.2, 0.2]).expect("samples");
    let hist = stats.histogram(3);
    assert_eq!(hist[0].count, 3);
    assert_eq!(hist[1].count + hist[2].count, 0);
    assert!(stats.histogram(0).is_empty());
}
