#![cfg(feature = "log")]

use std::sync::Arc;
use timberline::writer::Capture;
use timberline::{Level, LineHandler, Logger};

// log's global registration is one-time, so this binary holds one test
#[test]
fn facade_records_render_through_the_bridge() {
    let capture = Capture::new();
    let handler = LineHandler::new("bridge").writer(capture.clone());
    let logger = Logger::with_handler(Arc::new(handler));
    logger.set_level(Level::Trace);

    timberline::bridge::install(logger).expect("no other global logger is installed");

    log::info!("facade info");
    log::error!("facade error");

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);

    assert!(lines[0].contains("[info ] facade info"), "{}", lines[0]);

    // error-class records keep the call-site suffix; the facade carries
    // no function name, so that segment is empty
    assert!(lines[1].contains("[error] @ bridge.rs:"), "{}", lines[1]);
    assert!(lines[1].ends_with("facade error"), "{}", lines[1]);
}
