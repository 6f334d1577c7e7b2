// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the locations-listing response.
//!
//! The response nests thermostats inside locations:
//!
//! ```xml
//! <GetLocationsResult>
//!   <Result>Success</Result>
//!   <Locations>
//!     <LocationInfo>
//!       <LocationID>1</LocationID>
//!       <Name>Home</Name>
//!       <Thermostats>
//!         <ThermostatInfo>
//!           <UserDefinedDeviceName>Main</UserDefinedDeviceName>
//!           <UI>
//!             <DispTemperature>72</DispTemperature>
//!             <HeatSetpoint>68</HeatSetpoint>
//!             <CoolSetpoint>75</CoolSetpoint>
//!           </UI>
//!         </ThermostatInfo>
//!       </Thermostats>
//!     </LocationInfo>
//!   </Locations>
//! </GetLocationsResult>
//! ```
//!
//! Records are appended to their parent as soon as their start tag is read,
//! so the decoded order always matches the document order.

use std::io::BufRead;

use super::dispatch::check_status;
use super::options::{DecodeOptions, NumericPolicy};
use super::path::TagPath;
use super::scan::{self, Reducer};
use crate::error::DecodeError;
use crate::location::{Location, Locations, Thermostat};
use crate::types::{DisplayUnits, StatusCode};

const STATUS_PATH: &str = "GetLocationsResult.Result";
const LOCATION_PATH: &str = "GetLocationsResult.Locations.LocationInfo";
const THERMOSTATS_PATH: &str = "GetLocationsResult.Locations.LocationInfo.Thermostats";
const THERMOSTAT_PATH: &str =
    "GetLocationsResult.Locations.LocationInfo.Thermostats.ThermostatInfo";

/// Outcome of decoding a locations-listing response.
pub type LocationsResult = Result<Locations, DecodeError>;

#[derive(Debug)]
struct LocationsDecoder {
    numeric: NumericPolicy,
    status: Option<StatusCode>,
    locations: Vec<Location>,
    // Indices of the open LocationInfo and ThermostatInfo elements.
    location: Option<usize>,
    thermostat: Option<usize>,
}

impl LocationsDecoder {
    fn new(options: &DecodeOptions) -> Self {
        Self {
            numeric: options.numeric_policy(),
            status: None,
            locations: Vec::new(),
            location: None,
            thermostat: None,
        }
    }

    fn current_location_mut(&mut self) -> Option<&mut Location> {
        self.locations.get_mut(self.location?)
    }

    fn current_thermostat_mut(&mut self) -> Option<&mut Thermostat> {
        let index = self.thermostat?;
        self.current_location_mut()?.thermostats.get_mut(index)
    }

    fn location_text(&mut self, field: &str, text: &str) {
        let Some(location) = self.current_location_mut() else {
            return;
        };
        match field {
            "LocationID" => location.id = text.to_string(),
            "Name" => location.name = text.to_string(),
            _ => {}
        }
    }

    fn thermostat_text(&mut self, field: &str, text: &str) -> Result<(), DecodeError> {
        let numeric = self.numeric;
        let Some(thermostat) = self.current_thermostat_mut() else {
            return Ok(());
        };
        let reading = &mut thermostat.reading;
        match field {
            "UserDefinedDeviceName" => thermostat.name = text.to_string(),
            "UI.OutdoorTemp" => reading.outdoor_temp = numeric.parse("OutdoorTemp", text)?,
            "UI.DispTemperature" => {
                reading.indoor_temp = numeric.parse("DispTemperature", text)?;
            }
            "UI.HeatSetpoint" => reading.heat_setpoint = numeric.parse("HeatSetpoint", text)?,
            "UI.CoolSetpoint" => reading.cool_setpoint = numeric.parse("CoolSetpoint", text)?,
            "UI.DisplayedUnits" => reading.display_units = Some(DisplayUnits::from(text)),
            "UI.OutdoorHumidity" => {
                reading.outdoor_humidity = numeric.parse("OutdoorHumidity", text)?;
            }
            "UI.IndoorHumidity" => {
                reading.indoor_humidity = numeric.parse("IndoorHumidity", text)?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl Reducer for LocationsDecoder {
    type Output = Locations;

    fn open(mut self, path: &TagPath) -> Self {
        match path.as_str() {
            LOCATION_PATH => {
                self.locations.push(Location::default());
                self.location = Some(self.locations.len() - 1);
                self.thermostat = None;
                tracing::trace!(index = self.locations.len() - 1, "Opened location record");
            }
            // The thermostat list of a fresh location is already empty.
            THERMOSTATS_PATH => {}
            THERMOSTAT_PATH => {
                if let Some(location) = self.location.and_then(|i| self.locations.get_mut(i)) {
                    location.thermostats.push(Thermostat::default());
                    let index = location.thermostats.len() - 1;
                    self.thermostat = Some(index);
                    tracing::trace!(index, "Opened thermostat record");
                }
            }
            _ => {}
        }
        self
    }

    fn text(mut self, path: &TagPath, text: &str) -> Result<Self, DecodeError> {
        if path.as_str() == STATUS_PATH {
            self.status = Some(StatusCode::new(text));
        } else if let Some(field) = path.relative_to(THERMOSTAT_PATH) {
            self.thermostat_text(field, text)?;
        } else if let Some(field) = path.relative_to(LOCATION_PATH) {
            self.location_text(field, text);
        }
        Ok(self)
    }

    fn close(mut self, path: &TagPath) -> Self {
        match path.as_str() {
            LOCATION_PATH => {
                self.location = None;
                self.thermostat = None;
            }
            THERMOSTAT_PATH => self.thermostat = None,
            _ => {}
        }
        self
    }

    fn finish(self) -> LocationsResult {
        check_status(self.status)?;
        tracing::debug!(count = self.locations.len(), "Decoded locations response");
        Ok(Locations::from(self.locations))
    }
}

/// Decodes a locations-listing response.
///
/// Numeric readings that are absent or unreadable are left as `None`.
///
/// # Errors
///
/// Returns a `DecodeError` if the markup is malformed or the status is not
/// `Success`. No partially decoded list is returned on failure.
///
/// # Examples
///
/// ```
/// use tcc_lib::decode_locations;
///
/// let xml = br#"<GetLocationsResult>
///     <Result>Success</Result>
///     <Locations><LocationInfo>
///         <LocationID>1</LocationID><Name>Home</Name>
///         <Thermostats><ThermostatInfo>
///             <UserDefinedDeviceName>Main</UserDefinedDeviceName>
///             <UI><DispTemperature>72</DispTemperature></UI>
///         </ThermostatInfo></Thermostats>
///     </LocationInfo></Locations>
/// </GetLocationsResult>"#;
///
/// let locations = decode_locations(xml).unwrap();
/// let thermostat = locations.primary_thermostat().unwrap();
/// assert_eq!(thermostat.name, "Main");
/// assert_eq!(thermostat.reading.indoor_temp, Some(72));
/// assert_eq!(thermostat.reading.outdoor_temp, None);
/// ```
pub fn decode_locations(xml: &[u8]) -> LocationsResult {
    decode_locations_with(xml, &DecodeOptions::default())
}

/// Decodes a locations-listing response with explicit options.
///
/// # Errors
///
/// See [`decode_locations`]. Under [`NumericPolicy::Strict`], an unreadable
/// numeric reading fails with `DecodeError::InvalidValue`.
pub fn decode_locations_with(xml: &[u8], options: &DecodeOptions) -> LocationsResult {
    decode_locations_from_reader(xml, options)
}

/// Decodes a locations-listing response read from `reader`.
///
/// # Errors
///
/// See [`decode_locations_with`].
pub fn decode_locations_from_reader<R: BufRead>(
    reader: R,
    options: &DecodeOptions,
) -> LocationsResult {
    scan::run(reader, LocationsDecoder::new(options), options)
}

/// Decodes a locations-listing response read asynchronously from `reader`.
///
/// # Errors
///
/// See [`decode_locations_with`].
#[cfg(feature = "async")]
pub async fn decode_locations_async<R>(reader: R, options: &DecodeOptions) -> LocationsResult
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    scan::run_async(reader, LocationsDecoder::new(options), options).await
}
