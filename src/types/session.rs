// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session identifier issued by the authentication endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// An opaque, non-empty session token.
///
/// # Examples
///
/// ```
/// use tcc_lib::types::SessionId;
///
/// let id = SessionId::new("abc123").unwrap();
/// assert_eq!(id.as_str(), "abc123");
///
/// assert!(SessionId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptySessionId` if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ValueError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ValueError::EmptySessionId);
        }
        Ok(Self(token))
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the token text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(value: SessionId) -> Self {
        value.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
