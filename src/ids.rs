//! Identity and Time
//!
//! Injectable sources for task ids and creation timestamps.

/// Produces task ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs (browser `crypto.getRandomValues` on wasm)
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Current time in milliseconds since the epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// `Date.now()`
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
