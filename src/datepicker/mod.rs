//! Floating-label date picker.
//!
//! A presentation-free model of a native date input wrapped with a floating
//! label: it parses raw input, reports every change to a handler, and derives
//! the display text and styling flags a view layer needs.

mod config;
mod picker;

#[cfg(test)]
mod picker_tests;

pub use config::DatePickerConfig;
pub use picker::{ChangeHandler, DateChange, FloatingDatePicker, VisualState};
