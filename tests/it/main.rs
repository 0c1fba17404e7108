//! Single test binary entry point.
//!
//! All tests are compiled into one binary to keep linking overhead down.
//!
//! Structure:
//! - helpers: Event builders and a recording port
//! - integration: Pointer flows through hit testing and the mediator
//! - unit: Single-component unit tests

mod unit;
