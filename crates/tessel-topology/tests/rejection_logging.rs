//! Generators log rejected parameters even when called directly.

use std::io;
use std::sync::{Arc, Mutex};

use tessel_graph::InteractionGraph;
use tessel_topology::{hex2d, linear, rect2d_von_neumann, EdgeBehavior, NodeId, TopologyError};

type Graph = InteractionGraph<NodeId>;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a debug-level subscriber and return its log output.
fn logged<T>(f: impl FnOnce() -> T) -> (T, String) {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8_lossy(&out.0.lock().unwrap()).into_owned();
    (value, text)
}

#[test]
fn hex_parity_rejection_is_logged() {
    let (result, log) = logged(|| hex2d::<(), ()>(3, 4, EdgeBehavior::Wrap));
    assert_eq!(result.err(), Some(TopologyError::OddRowsWithWrap { rows: 3 }));
    assert!(log.contains("parameters rejected"), "log was: {log}");
    assert!(log.contains("hex2d"), "log was: {log}");
    assert!(log.contains("rows=3"), "log was: {log}");
}

#[test]
fn empty_dimensions_are_logged() {
    let (result, log) = logged(|| linear::<(), ()>(0, EdgeBehavior::Absorb));
    assert_eq!(result.err(), Some(TopologyError::EmptyTopology));
    assert!(log.contains("linear"), "log was: {log}");
    assert!(log.contains("parameters rejected"), "log was: {log}");

    let (result, log) = logged(|| rect2d_von_neumann::<(), ()>(0, 3, EdgeBehavior::Wrap));
    assert_eq!(result.err(), Some(TopologyError::EmptyTopology));
    assert!(log.contains("rect2d"), "log was: {log}");
    assert!(log.contains("parameters rejected"), "log was: {log}");
}

#[test]
fn accepted_parameters_log_no_rejection() {
    let (result, log) = logged(|| -> Result<Graph, _> { hex2d(4, 4, EdgeBehavior::Wrap) });
    assert!(result.is_ok());
    assert!(!log.contains("parameters rejected"), "log was: {log}");
    assert!(log.contains("topology generated"), "log was: {log}");
}
