// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tcc_lib` - Decoders for Total Connect Comfort thermostat service responses.
//!
//! The service answers its mobile API calls with XML documents. This library
//! turns those documents into typed values and tells a successful response
//! apart from an application-level failure. Fetching the documents is left to
//! the caller: any byte slice, `BufRead`, or (with the `async` feature) tokio
//! `AsyncBufRead` can be decoded.
//!
//! # Supported Responses
//!
//! - **Session authentication**: the session identifier issued after login
//! - **Locations listing**: locations, their thermostats, and current readings
//!
//! # Quick Start
//!
//! ## Session Authentication
//!
//! ```
//! use tcc_lib::decode_session;
//!
//! fn main() -> tcc_lib::Result<()> {
//!     let body = b"<AuthenticateLoginResult>\
//!         <Result>Success</Result>\
//!         <SessionID>abc123</SessionID>\
//!     </AuthenticateLoginResult>";
//!
//!     let session = decode_session(body)?;
//!     assert_eq!(session.as_str(), "abc123");
//!     Ok(())
//! }
//! ```
//!
//! ## Locations Listing
//!
//! ```
//! use tcc_lib::decode_locations;
//!
//! fn main() -> tcc_lib::Result<()> {
//!     let body = br#"<GetLocationsResult>
//!       <Result>Success</Result>
//!       <Locations>
//!         <LocationInfo>
//!           <LocationID>1</LocationID>
//!           <Name>Home</Name>
//!           <Thermostats>
//!             <ThermostatInfo>
//!               <UserDefinedDeviceName>Main</UserDefinedDeviceName>
//!               <UI>
//!                 <DispTemperature>72</DispTemperature>
//!                 <HeatSetpoint>68</HeatSetpoint>
//!                 <CoolSetpoint>75</CoolSetpoint>
//!                 <DisplayedUnits>Fahrenheit</DisplayedUnits>
//!               </UI>
//!             </ThermostatInfo>
//!           </Thermostats>
//!         </LocationInfo>
//!       </Locations>
//!     </GetLocationsResult>"#;
//!
//!     let locations = decode_locations(body)?;
//!     if let Some(thermostat) = locations.primary_thermostat() {
//!         println!(
//!             "{} reads {:?}, heating to {:?}",
//!             thermostat.name, thermostat.reading.indoor_temp, thermostat.reading.heat_setpoint
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Async Readers
//!
//! ```
//! use tcc_lib::decoder::{DecodeOptions, decode_session_async};
//!
//! #[tokio::main]
//! async fn main() -> tcc_lib::Result<()> {
//!     let body: &[u8] = b"<Result>Success</Result><SessionID>abc123</SessionID>";
//!     let session = decode_session_async(body, &DecodeOptions::default()).await?;
//!     assert_eq!(session.as_str(), "abc123");
//!     Ok(())
//! }
//! ```

pub mod decoder;
pub mod error;
mod location;
pub mod types;

pub use decoder::{
    DecodeOptions, LocationsResult, NumericPolicy, SessionResult, decode_locations,
    decode_session, dispatch,
};
pub use error::{DecodeError, Error, FailureKind, Result, ValueError};
pub use location::{Location, Locations, Reading, Thermostat};
pub use types::{DisplayUnits, SessionId, StatusCode};
