//! Date picker formats.

use serde::{Deserialize, Serialize};

/// `strftime`-style formats used by [`super::FloatingDatePicker`].
///
/// # Examples
///
/// ```
/// use taskboard::datepicker::DatePickerConfig;
///
/// let config = DatePickerConfig::default();
/// assert_eq!(config.input_format, "%Y-%m-%d");
/// assert_eq!(config.display_format, "%d.%m.%Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    /// Format of the raw value produced by the native date input.
    pub input_format: String,
    /// Format of the label shown above the input.
    pub display_format: String,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            input_format: "%Y-%m-%d".to_owned(),
            display_format: "%d.%m.%Y".to_owned(),
        }
    }
}

impl DatePickerConfig {
    /// Shows dates in ISO 8601 form instead of day-first.
    #[must_use]
    pub fn iso_display() -> Self {
        Self {
            display_format: "%Y-%m-%d".to_owned(),
            ..Self::default()
        }
    }
}
