//! Shared fixtures for unit and property tests.

use crate::pixels::{Pixel, PixelGrid};
use log::{Level, LevelFilter, Log, Metadata, Record};
use proptest::prelude::*;
use std::cell::RefCell;
use std::sync::Once;

/// A grid where every pixel encodes its own position.
pub fn position_grid(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        Pixel::new(x as u8, y as u8, ((y * width + x) % 256) as u8)
    })
}

/// Strategy for random grids of 1..=max_w by 1..=max_h pixels.
pub fn grid_strategy(max_w: u32, max_h: u32) -> impl Strategy<Value = PixelGrid> {
    (1u32..=max_w, 1u32..=max_h).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<[u8; 3]>(), (w * h) as usize).prop_map(move |raw| {
            let pixels = raw
                .into_iter()
                .map(|[r, g, b]| Pixel::new(r, g, b))
                .collect();
            PixelGrid::new(w, h, pixels)
        })
    })
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

/// Records log lines emitted on the current thread while capturing.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return every log record it emitted on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    let result = f();
    let lines = CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default());
    (result, lines)
}
