//! Host logging tests
//!
//! The callback logger is process-global, so this binary holds a single
//! test that owns it.

use std::sync::{Arc, Mutex};

use touch::ffi::{FfiLogLevel, LOG_TAG, LogCallback, initialize_logging};
use touch::{GESTURE_CTRL_PATH, Gesture, GestureRegistry, InMemorySysfs, TouchscreenGesture};

#[derive(Default)]
struct Collector {
    records: Mutex<Vec<(FfiLogLevel, String, String)>>,
}

impl Collector {
    fn take(&self) -> Vec<(FfiLogLevel, String, String)> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

/// Forwards to a shared collector so the test keeps a handle to it
struct Forward(Arc<Collector>);

impl LogCallback for Forward {
    fn on_log(&self, level: FfiLogLevel, tag: String, message: String) {
        self.0.records.lock().unwrap().push((level, tag, message));
    }
}

#[test]
fn test_toggle_diagnostics_reach_host() {
    let collector = Arc::new(Collector::default());
    initialize_logging(Box::new(Forward(collector.clone())), FfiLogLevel::Trace).unwrap();
    // Re-initializing our own logger only swaps callback and level
    initialize_logging(Box::new(Forward(collector.clone())), FfiLogLevel::Trace).unwrap();

    let sysfs = Arc::new(InMemorySysfs::new());
    let service = TouchscreenGesture::new(GestureRegistry::default(), sysfs.clone());
    collector.take();

    // Failed write: exactly one error naming the node
    sysfs.fail_path(GESTURE_CTRL_PATH);
    assert!(!service.set_gesture_enabled(&Gesture::new(4, "Letter C", 252), true));

    let errors: Vec<_> = collector
        .take()
        .into_iter()
        .filter(|(level, _, _)| *level == FfiLogLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1, "errors: {:?}", errors);
    assert_eq!(errors[0].1, LOG_TAG);
    assert!(errors[0].2.contains(GESTURE_CTRL_PATH), "message: {}", errors[0].2);

    // Unknown gesture: debug only, nothing at error level
    assert!(!service.set_gesture_enabled(&Gesture::new(9, "Letter Z", 300), true));

    let records = collector.take();
    assert!(records.iter().all(|(level, _, _)| *level != FfiLogLevel::Error));
    assert!(records.iter().any(|(level, _, _)| *level == FfiLogLevel::Debug));
    assert_eq!(sysfs.write_count(), 0);
}
