// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder configuration.

use crate::error::DecodeError;

/// How numeric reading fields are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericPolicy {
    /// Read the leading integer of the text (`"72.0000"` reads as 72).
    ///
    /// Text without a leading integer leaves the field unset.
    #[default]
    Lenient,

    /// Require the whole text to be an integer.
    ///
    /// Anything else fails the decode with [`DecodeError::InvalidValue`].
    Strict,
}

impl NumericPolicy {
    /// Parses the text of a numeric field.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidValue` under [`NumericPolicy::Strict`] if
    /// `text` is not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcc_lib::decoder::NumericPolicy;
    ///
    /// assert_eq!(NumericPolicy::Lenient.parse("HeatSetpoint", "68.0000").unwrap(), Some(68));
    /// assert_eq!(NumericPolicy::Lenient.parse("HeatSetpoint", "n/a").unwrap(), None);
    /// assert!(NumericPolicy::Strict.parse("HeatSetpoint", "68.0000").is_err());
    /// ```
    pub fn parse(self, field: &'static str, text: &str) -> Result<Option<i32>, DecodeError> {
        match self {
            Self::Lenient => {
                let value = leading_integer(text);
                if value.is_none() {
                    tracing::debug!(field, text, "Ignoring non-numeric reading");
                }
                Ok(value)
            }
            Self::Strict => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| DecodeError::InvalidValue {
                    field,
                    value: text.to_string(),
                }),
        }
    }
}

/// Reads an optional sign followed by decimal digits, ignoring what follows.
fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

/// Configuration shared by all decode entry points.
///
/// # Examples
///
/// ```
/// use tcc_lib::decoder::{DecodeOptions, NumericPolicy};
///
/// // Defaults
/// let options = DecodeOptions::new();
/// assert_eq!(options.numeric_policy(), NumericPolicy::Lenient);
///
/// // Stricter validation for untrusted feeds
/// let options = DecodeOptions::new()
///     .with_numeric_policy(NumericPolicy::Strict)
///     .with_max_depth(16);
/// assert_eq!(options.max_depth(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    numeric_policy: NumericPolicy,
    max_depth: usize,
}

impl DecodeOptions {
    /// Default maximum element nesting.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates options with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numeric_policy: NumericPolicy::Lenient,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how numeric reading fields are parsed.
    #[must_use]
    pub const fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    /// Sets the maximum element nesting accepted before decoding fails.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the numeric policy.
    #[must_use]
    pub const fn numeric_policy(&self) -> NumericPolicy {
        self.numeric_policy
    }

    /// Returns the maximum element nesting.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
