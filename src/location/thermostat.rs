// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat records.

use serde::{Deserialize, Serialize};

use super::Reading;

/// A thermostat installed at a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thermostat {
    /// User-defined device name.
    pub name: String,

    /// Latest readings and setpoints.
    #[serde(default)]
    pub reading: Reading,
}

impl Thermostat {
    /// Creates a thermostat with the given name and no readings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reading: Reading::default(),
        }
    }
}
