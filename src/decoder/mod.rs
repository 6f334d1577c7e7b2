// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Streaming decoders for Total Connect Comfort service responses.
//!
//! Both decoders scan the document once, tracking the open element path in a
//! [`TagPath`] and assigning text to fields by matching on that path. When the
//! document ends, the `Result` element decides the outcome: only the literal
//! `Success` yields a value, anything else becomes [`DecodeError::Status`].
//!
//! Each call builds its own state, so decoders can be used from any number of
//! threads or tasks at once.
//!
//! # Examples
//!
//! ```
//! use tcc_lib::decoder::{DecodeOptions, NumericPolicy, decode_locations_with};
//! use tcc_lib::FailureKind;
//!
//! let options = DecodeOptions::new().with_numeric_policy(NumericPolicy::Strict);
//! let xml = b"<GetLocationsResult><Result>InvalidSessionID</Result></GetLocationsResult>";
//!
//! match decode_locations_with(xml, &options) {
//!     Ok(locations) => println!("{} locations", locations.len()),
//!     Err(err) if err.kind() == FailureKind::Application => {
//!         assert_eq!(err.status(), Some("InvalidSessionID"));
//!     }
//!     Err(err) => panic!("unexpected failure: {err}"),
//! }
//! ```
//!
//! [`DecodeError::Status`]: crate::error::DecodeError::Status

mod dispatch;
mod locations;
mod options;
mod path;
mod scan;
mod session;

pub use dispatch::dispatch;
pub use locations::{
    LocationsResult, decode_locations, decode_locations_from_reader, decode_locations_with,
};
pub use options::{DecodeOptions, NumericPolicy};
pub use path::TagPath;
pub use session::{
    SessionResult, decode_session, decode_session_from_reader, decode_session_with,
};

#[cfg(feature = "async")]
pub use locations::decode_locations_async;
#[cfg(feature = "async")]
pub use session::decode_session_async;
