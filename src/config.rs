//! Timestamp text format and element configuration.
//!
//! Timestamps are parsed and rendered with a single process-wide [`TimestampFormat`]. It is
//! installed at most once with [`init_timestamp_format`] (typically at startup, from an
//! [`ElementConfig`]); until then [`TimestampFormat::global`] returns the default
//! `%Y-%m-%d %H:%M:%S`. Callers that need a different format for a single call can pass an
//! explicit format to the `*_with` element methods instead.

use std::fmt;
use std::sync::OnceLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ElementError, ElementResult};

/// Default timestamp layout (UTC, second precision).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static GLOBAL_FORMAT: OnceLock<TimestampFormat> = OnceLock::new();

/// A `strftime`-style layout used symmetrically for parsing and rendering timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimestampFormat {
    pattern: String,
}

impl TimestampFormat {
    /// Create a format, rejecting patterns chrono can't interpret.
    pub fn new(pattern: impl Into<String>) -> ElementResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(ElementError::Config {
                message: "timestamp format must not be empty".to_string(),
            });
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ElementError::Config {
                message: format!("invalid timestamp format '{pattern}'"),
            });
        }
        Ok(Self { pattern })
    }

    /// The process-wide format: the installed one, or the default.
    pub fn global() -> &'static TimestampFormat {
        GLOBAL_FORMAT.get_or_init(TimestampFormat::default)
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `raw` into a UTC timestamp.
    ///
    /// Patterns carrying an offset (`%z`, `%:z`) are honoured; otherwise the text is read as UTC.
    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_str(raw, &self.pattern) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, &self.pattern)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Render `ts` with this layout.
    pub fn render(&self, ts: &DateTime<Utc>) -> String {
        ts.format(&self.pattern).to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Install the process-wide timestamp format.
///
/// Fails if a format was already installed or if [`TimestampFormat::global`] was already read
/// (which freezes the default). Installing the identical format twice is accepted.
pub fn init_timestamp_format(format: TimestampFormat) -> ElementResult<&'static TimestampFormat> {
    let installed = GLOBAL_FORMAT.get_or_init(|| format.clone());
    if *installed != format {
        return Err(ElementError::Config {
            message: format!(
                "timestamp format already set to '{installed}', refusing '{format}'"
            ),
        });
    }
    tracing::debug!(format = %installed, "timestamp format installed");
    Ok(installed)
}

/// Serializable element configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementConfig {
    /// `strftime`-style timestamp layout.
    pub timestamp_format: String,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl ElementConfig {
    /// Parse configuration from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ElementResult<Self> {
        serde_json::from_str(json).map_err(|e| ElementError::Config {
            message: e.to_string(),
        })
    }

    /// Validated timestamp format.
    pub fn timestamp_format(&self) -> ElementResult<TimestampFormat> {
        TimestampFormat::new(self.timestamp_format.clone())
    }

    /// Validate and install this configuration process-wide.
    pub fn install(&self) -> ElementResult<()> {
        init_timestamp_format(self.timestamp_format()?).map(|_| ())
    }
}
