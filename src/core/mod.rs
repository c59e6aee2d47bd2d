pub mod draft;
pub mod markers;
pub mod session;
pub mod stopwatch;
pub mod timeline;
