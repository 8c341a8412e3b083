//! Floating-label date input state.

use super::DatePickerConfig;
use chrono::NaiveDate;
use std::fmt::{self, Write as _};
use tracing::debug;

/// Value handed to the change handler on every raw input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateChange {
    /// The input parsed to a date.
    Selected(NaiveDate),
    /// The input was emptied.
    Cleared,
    /// The input did not parse; validation is left to the handler.
    Invalid {
        /// Raw input as received.
        raw: String,
    },
}

impl DateChange {
    /// Returns the parsed date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Selected(date) => Some(*date),
            Self::Cleared | Self::Invalid { .. } => None,
        }
    }

    /// Returns `false` only for unparseable input.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }
}

/// Styling flags derived from the picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    /// An error message is set.
    pub invalid: bool,
    /// A date is held; the label floats above the input.
    pub filled: bool,
}

/// Callback invoked with every [`DateChange`].
pub type ChangeHandler = Box<dyn Fn(&DateChange) + Send + Sync>;

/// Headless model of a date input with a floating label.
pub struct FloatingDatePicker {
    label: String,
    value: Option<NaiveDate>,
    error_message: Option<String>,
    config: DatePickerConfig,
    on_change: ChangeHandler,
}

impl fmt::Debug for FloatingDatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingDatePicker")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("error_message", &self.error_message)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FloatingDatePicker {
    /// Creates an empty picker.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        on_change: impl Fn(&DateChange) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: None,
            error_message: None,
            config: DatePickerConfig::default(),
            on_change: Box::new(on_change),
        }
    }

    /// Replaces the formats.
    #[must_use]
    pub fn with_config(mut self, config: DatePickerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub const fn with_value(mut self, value: NaiveDate) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns the label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the placeholder of the native input, which is the label.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.label
    }

    /// Returns the held date.
    #[must_use]
    pub const fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Overwrites the held date without notifying the handler.
    pub const fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Marks the picker invalid with `message`.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clears the error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Parses a raw input value without touching the picker state.
    #[must_use]
    pub fn parse(&self, raw: &str) -> DateChange {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DateChange::Cleared;
        }
        NaiveDate::parse_from_str(trimmed, &self.config.input_format).map_or_else(
            |_| DateChange::Invalid {
                raw: raw.to_owned(),
            },
            DateChange::Selected,
        )
    }

    /// Handles a change of the native input.
    ///
    /// The handler is always called, including for unparseable input. The
    /// held value follows `Selected` and `Cleared`; an invalid input leaves it
    /// as it was.
    pub fn handle_input(&mut self, raw: &str) -> DateChange {
        let change = self.parse(raw);
        match &change {
            DateChange::Selected(date) => self.value = Some(*date),
            DateChange::Cleared => self.value = None,
            DateChange::Invalid { raw: input } => {
                debug!(label = %self.label, input = %input, "unparseable date input");
            }
        }
        (self.on_change)(&change);
        change
    }

    /// Returns the held date rendered with the display format.
    ///
    /// Returns `None` when no date is held or the format is unusable.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        let value = self.value?;
        let mut rendered = String::new();
        write!(rendered, "{}", value.format(&self.config.display_format)).ok()?;
        Some(rendered)
    }

    /// Returns the styling flags.
    #[must_use]
    pub const fn visual_state(&self) -> VisualState {
        VisualState {
            invalid: self.error_message.is_some(),
            filled: self.value.is_some(),
        }
    }
}
