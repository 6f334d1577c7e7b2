// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature display units.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit a thermostat displays its temperatures in.
///
/// The feed reports the unit as literal text. Known values map to
/// dedicated variants; anything else is preserved in [`DisplayUnits::Other`].
///
/// # Examples
///
/// ```
/// use tcc_lib::types::DisplayUnits;
///
/// assert_eq!(DisplayUnits::from("Fahrenheit"), DisplayUnits::Fahrenheit);
/// assert_eq!(DisplayUnits::from("Celsius").as_str(), "Celsius");
///
/// let other = DisplayUnits::from("Kelvin");
/// assert_eq!(other.as_str(), "Kelvin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayUnits {
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
    /// Any other literal reported by the feed.
    Other(String),
}

impl DisplayUnits {
    /// Returns the literal text as reported by the feed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fahrenheit => "Fahrenheit",
            Self::Celsius => "Celsius",
            Self::Other(text) => text,
        }
    }

    /// Returns the conventional unit symbol, if known.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Fahrenheit => Some("°F"),
            Self::Celsius => Some("°C"),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for DisplayUnits {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for DisplayUnits {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Fahrenheit" => Self::Fahrenheit,
            "Celsius" => Self::Celsius,
            _ => Self::Other(value),
        }
    }
}

impl From<DisplayUnits> for String {
    fn from(value: DisplayUnits) -> Self {
        match value {
            DisplayUnits::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DisplayUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
