//! Library entry for ayu-xcode exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod collect;
pub mod color;
pub mod convert;
pub mod palette;
pub mod template;
