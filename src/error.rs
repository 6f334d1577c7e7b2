// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tcc_lib` library.
//!
//! Decoding failures are reported through [`DecodeError`], which can be
//! classified with [`DecodeError::kind`] into malformed markup, a service-level
//! failure status, or a success document that lacks a required field.

use std::fmt;

use thiserror::Error;

use crate::types::StatusCode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding a service response.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A session identifier was empty.
    #[error("session identifier must not be empty")]
    EmptySessionId,
}

/// Broad classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The input was not well-formed XML.
    Parse,
    /// The document was well-formed but its status was not `Success`.
    Application,
    /// The document claimed success but violated the expected shape.
    Contract,
}

impl FailureKind {
    /// Returns a short lowercase label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Application => "application",
            Self::Contract => "contract",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while decoding a service response.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The markup is malformed.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        /// Byte offset at which the reader gave up.
        position: usize,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },

    /// An element name or text node was not valid UTF-8.
    #[error("invalid UTF-8 at byte {position}")]
    Utf8 {
        /// Byte offset of the offending event.
        position: usize,
    },

    /// Non-whitespace text appeared outside every element.
    #[error("text outside the root element at byte {position}")]
    TextOutsideRoot {
        /// Byte offset of the stray text.
        position: usize,
    },

    /// An element name is not a valid XML name.
    #[error("invalid element name {name:?} at byte {position}")]
    InvalidName {
        /// The name as it appeared in the tag.
        name: String,
        /// Byte offset of the tag.
        position: usize,
    },

    /// The input contained no element at all.
    #[error("document has no root element")]
    NoRoot,

    /// The input ended while elements were still open.
    #[error("unexpected end of document inside <{open}>")]
    UnexpectedEof {
        /// Joined path of the elements left open.
        open: String,
    },

    /// The document nests deeper than the configured limit.
    #[error("element nesting exceeds {limit} levels")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The service reported a status other than `Success`.
    #[error("service returned status {0}")]
    Status(StatusCode),

    /// The document reported success but lacks a required field.
    #[error("successful response is missing {0}")]
    MissingField(&'static str),

    /// A numeric field was present but could not be parsed.
    #[error("failed to parse {field}: {value:?} is not an integer")]
    InvalidValue {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw text found in the document.
        value: String,
    },
}

impl DecodeError {
    /// Classifies this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcc_lib::{decode_session, FailureKind};
    ///
    /// let err = decode_session(b"<Result>Success").unwrap_err();
    /// assert_eq!(err.kind(), FailureKind::Parse);
    /// ```
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Xml { .. }
            | Self::Utf8 { .. }
            | Self::TextOutsideRoot { .. }
            | Self::InvalidName { .. }
            | Self::NoRoot
            | Self::UnexpectedEof { .. }
            | Self::TooDeep { .. } => FailureKind::Parse,
            Self::Status(_) => FailureKind::Application,
            Self::MissingField(_) | Self::InvalidValue { .. } => FailureKind::Contract,
        }
    }

    /// Returns the status text when the service reported a failure status.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Status(code) => Some(code.as_str()),
            _ => None,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = DecodeError::Status(StatusCode::new("InvalidCredentials"));
        assert_eq!(
            err.to_string(),
            "service returned status InvalidCredentials"
        );
        assert_eq!(err.status(), Some("InvalidCredentials"));
        assert_eq!(err.kind(), FailureKind::Application);
    }

    #[test]
    fn missing_field_is_contract_violation() {
        let err = DecodeError::MissingField("SessionID");
        assert_eq!(err.to_string(), "successful response is missing SessionID");
        assert_eq!(err.kind(), FailureKind::Contract);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn invalid_value_display() {
        let err = DecodeError::InvalidValue {
            field: "DispTemperature",
            value: "warm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse DispTemperature: \"warm\" is not an integer"
        );
        assert_eq!(err.kind(), FailureKind::Contract);
    }

    #[test]
    fn structural_errors_are_parse_kind() {
        let eof = DecodeError::UnexpectedEof {
            open: "GetLocationsResult.Locations".to_string(),
        };
        assert_eq!(eof.kind(), FailureKind::Parse);
        assert_eq!(DecodeError::TooDeep { limit: 4 }.kind(), FailureKind::Parse);
        assert_eq!(DecodeError::Utf8 { position: 3 }.kind(), FailureKind::Parse);
    }

    #[test]
    fn markup_errors_are_parse_kind() {
        let stray = DecodeError::TextOutsideRoot { position: 0 };
        assert_eq!(stray.to_string(), "text outside the root element at byte 0");
        assert_eq!(stray.kind(), FailureKind::Parse);

        let name = DecodeError::InvalidName {
            name: "1SessionID".to_string(),
            position: 5,
        };
        assert_eq!(
            name.to_string(),
            "invalid element name \"1SessionID\" at byte 5"
        );
        assert_eq!(name.kind(), FailureKind::Parse);

        assert_eq!(DecodeError::NoRoot.kind(), FailureKind::Parse);
        assert_eq!(DecodeError::NoRoot.status(), None);
    }

    #[test]
    fn error_from_decode_error() {
        let err: Error = DecodeError::MissingField("SessionID").into();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::MissingField("SessionID"))
        ));
    }

    #[test]
    fn failure_kind_display() {
        assert_eq!(FailureKind::Application.to_string(), "application");
    }
}
