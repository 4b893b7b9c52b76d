use thiserror::Error;

/// Errors raised by channel setters that receive an out-of-range value.
///
/// Validation is eager: the setter that receives the bad value fails, and the
/// previously stored value is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Image width outside `1..=144`.
    #[error("Image width {0} is out of range. Width should be from 1 to 144")]
    ImageWidthOutOfRange(u32),

    /// Image height outside `1..=400`.
    #[error("Image height {0} is out of range. Height should be from 1 to 400")]
    ImageHeightOutOfRange(u32),

    /// A skipHours entry outside `0..=23`.
    #[error("Skip hour {0} is out of range. Hours should be from 0 to 23")]
    SkipHourOutOfRange(i32),

    /// A skipDays entry that is not an English weekday name.
    #[error("Invalid skip day {0:?}. Expected one of Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday")]
    InvalidSkipDay(String),
}

/// Errors that can occur while writing a document.
///
/// Writing into memory does not fail in practice; the writer API is fallible,
/// so the error is carried rather than swallowed.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The render settings are unusable, e.g. an out-of-range UTC offset.
    #[error("Invalid render configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The XML writer rejected an event.
    #[error("Failed to write {element}: {message}")]
    Write {
        element: &'static str,
        message: String,
    },

    /// Writer output was not valid UTF-8.
    #[error("Generated XML contains invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
