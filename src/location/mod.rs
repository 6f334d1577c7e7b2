// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record tree produced by the locations decoder.
//!
//! A [`Locations`] list owns its [`Location`]s, each of which owns its
//! [`Thermostat`]s, each of which carries one [`Reading`]. Ordering follows
//! the source document: the first location and its first thermostat are the
//! ones a caller normally acts on.

mod reading;
mod thermostat;

pub use reading::Reading;
pub use thermostat::Thermostat;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A site registered with the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Service-assigned location identifier.
    pub id: String,

    /// Display name of the location.
    pub name: String,

    /// Thermostats at this location, in document order.
    #[serde(default)]
    pub thermostats: Vec<Thermostat>,
}

impl Location {
    /// Creates a location with no thermostats.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thermostats: Vec::new(),
        }
    }

    /// Returns the first thermostat at this location.
    #[must_use]
    pub fn primary_thermostat(&self) -> Option<&Thermostat> {
        self.thermostats.first()
    }
}

/// Ordered list of locations decoded from a locations response.
///
/// Dereferences to a slice of [`Location`].
///
/// # Examples
///
/// ```
/// use tcc_lib::{Location, Locations, Thermostat};
///
/// let mut home = Location::new("1", "Home");
/// home.thermostats.push(Thermostat::new("Main"));
///
/// let locations = Locations::from(vec![home, Location::new("2", "Cabin")]);
///
/// assert_eq!(locations.len(), 2);
/// assert_eq!(locations.primary().map(|l| l.name.as_str()), Some("Home"));
/// assert_eq!(
///     locations.primary_thermostat().map(|t| t.name.as_str()),
///     Some("Main")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locations(Vec<Location>);

impl Locations {
    /// Returns the first location in document order.
    #[must_use]
    pub fn primary(&self) -> Option<&Location> {
        self.0.first()
    }

    /// Returns the first thermostat of the first location.
    ///
    /// Returns `None` if there are no locations or the first location has no
    /// thermostats. Later locations are not consulted.
    #[must_use]
    pub fn primary_thermostat(&self) -> Option<&Thermostat> {
        self.primary().and_then(Location::primary_thermostat)
    }

    /// Consumes the list and returns the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Location> {
        self.0
    }
}

impl From<Vec<Location>> for Locations {
    fn from(value: Vec<Location>) -> Self {
        Self(value)
    }
}

impl Deref for Locations {
    type Target = [Location];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Locations {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Locations {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
