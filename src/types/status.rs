// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service status codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application-level status reported in the `Result` element of a response.
///
/// Only the exact, case-sensitive literal `Success` marks a successful
/// response. Any other text is kept verbatim as the failure diagnostic.
///
/// # Examples
///
/// ```
/// use tcc_lib::types::StatusCode;
///
/// assert!(StatusCode::new("Success").is_success());
/// assert!(!StatusCode::new("success").is_success());
/// assert_eq!(StatusCode::new("InvalidSessionID").as_str(), "InvalidSessionID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(String);

impl StatusCode {
    /// The literal the service uses to signal success.
    pub const SUCCESS: &'static str = "Success";

    /// Placeholder used when a document carries no status element at all.
    pub const UNKNOWN: &'static str = "unknown";

    /// Creates a status code from the raw element text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates the placeholder status for documents without a status element.
    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns true if this is the success literal.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }

    /// Returns the raw status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
