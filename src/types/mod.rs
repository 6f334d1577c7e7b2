// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the decoders and the record tree.
//!
//! # Types
//!
//! - [`StatusCode`] - Application-level status from the `Result` element
//! - [`SessionId`] - Non-empty session token
//! - [`DisplayUnits`] - Temperature unit literal reported by a thermostat

mod session;
mod status;
mod units;

pub use session::SessionId;
pub use status::StatusCode;
pub use units::DisplayUnits;
