//! Unit tests for the calendar interaction layer.

mod settings_tests;
mod types_tests;
