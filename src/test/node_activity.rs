use super::{assert_close, ev};
use crate::metrics::{basic_stats, node_activity};
use crate::trace::{EventKind, NodeId};

#[test]
fn counts_sent_received_dropped_per_node() {
    let events = vec![
        ev(EventKind::Enqueue, 0.0, 0, 2, "tcp", 100, 1),
        ev(EventKind::Enqueue, 0.1, 0, 2, "tcp", 100, 2),
        ev(EventKind::Dequeue, 0.1, 0, 2, "tcp", 100, 1),
        ev(EventKind::Receive, 0.2, 0, 2, "tcp", 100, 1),
        ev(EventKind::Drop, 0.2, 0, 2, "tcp", 100, 2),
        ev(EventKind::Receive, 0.3, 2, 1, "tcp", 100, 1),
    ];
    let act = node_activity(&events);
    let nodes: Vec<NodeId> = act.iter().map(|a| a.node).collect();
    assert_eq!(nodes, vec![NodeId(0), NodeId(1), NodeId(2)]);

    assert_eq!((act[0].sent, act[0].received, act[0].dropped), (2, 0, 1));
    assert_close(act[0].drop_ratio.expect("ratio"), 0.5);

    assert_eq!((act[1].sent, act[1].received, act[1].dropped), (0, 1, 0));
    assert_eq!(act[1].drop_ratio, None);

    assert_eq!((act[2].sent, act[2].received, act[2].dropped), (0, 1, 0));
}

#[test]
fn dequeue_only_nodes_are_not_active() {
    let events = vec![ev(EventKind::Dequeue, 0.0, 5, 6, "tcp", 100, 1)];
    assert!(node_activity(&events).is_empty());
    assert_eq!(basic_stats(&events).active_nodes, 0);
}

#[test]
fn basic_stats_report_count_duration_and_active_nodes() {
    let events = vec![
        ev(EventKind::Receive, 4.5, 0, 1, "tcp", 100, 1),
        ev(EventKind::Enqueue, 1.0, 0, 1, "tcp", 100, 1),
        ev(EventKind::Dequeue, 2.0, 3, 1, "tcp", 100, 1),
    ];
    let stats = basic_stats(&events);
    assert_eq!(stats.events, 3);
    assert_close(stats.duration_secs, 4.5);
    assert_eq!(stats.active_nodes, 2);

    let empty = basic_stats(&[]);
    assert_eq!(empty.events, 0);
    assert_close(empty.duration_secs, 0.0);
}
