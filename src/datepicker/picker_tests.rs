//! Tests for the floating date picker.

use super::{DateChange, DatePickerConfig, FloatingDatePicker, VisualState};
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use std::sync::{Arc, Mutex};

struct Recorded {
    picker: FloatingDatePicker,
    changes: Arc<Mutex<Vec<DateChange>>>,
}

impl Recorded {
    fn changes(&self) -> Vec<DateChange> {
        self.changes.lock().expect("recorder lock").clone()
    }
}

#[fixture]
fn recorded() -> Recorded {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let picker = FloatingDatePicker::new("Due date", move |change: &DateChange| {
        sink.lock().expect("recorder lock").push(change.clone());
    });
    Recorded { picker, changes }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[rstest]
fn new_picker_is_unfilled_and_valid(recorded: Recorded) {
    assert_eq!(recorded.picker.value(), None);
    assert_eq!(recorded.picker.display_text(), None);
    assert_eq!(recorded.picker.placeholder(), "Due date");
    assert_eq!(recorded.picker.visual_state(), VisualState::default());
}

#[rstest]
fn valid_input_selects_and_notifies(mut recorded: Recorded) {
    let change = recorded.picker.handle_input("2024-03-09");

    assert_eq!(change, DateChange::Selected(date(2024, 3, 9)));
    assert_eq!(recorded.picker.value(), Some(date(2024, 3, 9)));
    assert_eq!(recorded.picker.display_text().as_deref(), Some("09.03.2024"));
    assert_eq!(recorded.changes(), vec![change]);
    assert!(recorded.picker.visual_state().filled);
}

#[rstest]
#[case("2024-02-30")]
#[case("tomorrow")]
#[case("09.03.2024")]
fn invalid_input_is_passed_through(mut recorded: Recorded, #[case] raw: &str) {
    recorded.picker.set_value(Some(date(2024, 1, 1)));

    let change = recorded.picker.handle_input(raw);

    assert_eq!(
        change,
        DateChange::Invalid {
            raw: raw.to_owned()
        }
    );
    assert!(!change.is_valid());
    assert_eq!(change.date(), None);
    assert_eq!(recorded.changes(), vec![change]);
    assert_eq!(recorded.picker.value(), Some(date(2024, 1, 1)));
}

#[rstest]
fn empty_input_clears_value(mut recorded: Recorded) {
    recorded.picker.handle_input("2024-03-09");

    let change = recorded.picker.handle_input("");

    assert_eq!(change, DateChange::Cleared);
    assert_eq!(recorded.picker.value(), None);
    assert!(!recorded.picker.visual_state().filled);
    assert_eq!(recorded.changes().len(), 2);
}

#[rstest]
fn error_message_marks_picker_invalid(mut recorded: Recorded) {
    recorded.picker.set_error("Pick a date in the future");
    assert_eq!(
        recorded.picker.visual_state(),
        VisualState {
            invalid: true,
            filled: false
        }
    );
    assert_eq!(
        recorded.picker.error_message(),
        Some("Pick a date in the future")
    );

    recorded.picker.clear_error();
    assert!(!recorded.picker.visual_state().invalid);
}

#[rstest]
fn set_value_does_not_notify(mut recorded: Recorded) {
    recorded.picker.set_value(Some(date(2025, 12, 31)));

    assert_eq!(recorded.picker.display_text().as_deref(), Some("31.12.2025"));
    assert!(recorded.changes().is_empty());
}

#[rstest]
fn custom_formats_drive_parsing_and_display() {
    let picker = FloatingDatePicker::new("Start", |_: &DateChange| {})
        .with_config(DatePickerConfig {
            input_format: "%d/%m/%Y".to_owned(),
            display_format: "%Y-%m-%d".to_owned(),
        })
        .with_value(date(2023, 7, 4));

    assert_eq!(picker.parse("05/07/2023"), DateChange::Selected(date(2023, 7, 5)));
    assert_eq!(picker.display_text().as_deref(), Some("2023-07-04"));
}

#[rstest]
fn iso_display_preset_keeps_iso_input() {
    let config = DatePickerConfig::iso_display();
    assert_eq!(config.input_format, DatePickerConfig::default().input_format);
    assert_eq!(config.display_format, "%Y-%m-%d");
}
