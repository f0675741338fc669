use std::sync::Arc;
use timberline::writer::Capture;
use timberline::{LineHandler, LogHandler, Logger};

// the factory is process-global, so this binary holds exactly one test
#[test]
fn bootstrap_is_one_time_and_feeds_new_loggers() {
    let capture = Capture::new();
    let writer = capture.clone();

    timberline::bootstrap(move |label: &str| -> Arc<dyn LogHandler> {
        Arc::new(LineHandler::new(label).writer(writer.clone()))
    })
    .expect("first bootstrap succeeds");

    timberline::bootstrap(|label: &str| -> Arc<dyn LogHandler> {
        Arc::new(LineHandler::new(label))
    })
    .expect_err("second bootstrap is rejected");

    let logger = Logger::new("boot");
    assert_eq!(logger.label(), "boot");

    timberline::info!(logger, "wired through the factory");
    assert!(capture.contents().contains("wired through the factory"));
}
