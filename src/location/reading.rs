// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor readings reported for a thermostat.

use serde::{Deserialize, Serialize};

use crate::types::DisplayUnits;

/// Readings and setpoints from a thermostat's `UI` block.
///
/// Every field is optional. A field is `None` when its element was absent or
/// its text could not be read as an integer; it is never coerced to zero.
///
/// # Examples
///
/// ```
/// use tcc_lib::Reading;
///
/// let reading = Reading {
///     indoor_temp: Some(72),
///     heat_setpoint: Some(68),
///     cool_setpoint: Some(75),
///     ..Reading::default()
/// };
///
/// assert_eq!(reading.outdoor_temp, None);
/// assert!(!reading.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Indoor temperature shown on the thermostat (`DispTemperature`).
    #[serde(default)]
    pub indoor_temp: Option<i32>,

    /// Outdoor temperature (`OutdoorTemp`).
    #[serde(default)]
    pub outdoor_temp: Option<i32>,

    /// Heating setpoint (`HeatSetpoint`).
    #[serde(default)]
    pub heat_setpoint: Option<i32>,

    /// Cooling setpoint (`CoolSetpoint`).
    #[serde(default)]
    pub cool_setpoint: Option<i32>,

    /// Indoor relative humidity in percent (`IndoorHumidity`).
    #[serde(default)]
    pub indoor_humidity: Option<i32>,

    /// Outdoor relative humidity in percent (`OutdoorHumidity`).
    #[serde(default)]
    pub outdoor_humidity: Option<i32>,

    /// Unit the temperatures are expressed in (`DisplayedUnits`).
    #[serde(default)]
    pub display_units: Option<DisplayUnits>,
}

impl Reading {
    /// Returns true if no field has been populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
