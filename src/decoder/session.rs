// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the session-authentication response.
//!
//! The authentication endpoint answers with a document such as:
//!
//! ```xml
//! <AuthenticateLoginResult>
//!   <Result>Success</Result>
//!   <SessionID>8A3C21F0-...</SessionID>
//! </AuthenticateLoginResult>
//! ```
//!
//! Fields are recognised by the name of the innermost element, so the wrapper
//! element is optional.

use std::io::BufRead;

use super::dispatch::check_status;
use super::options::DecodeOptions;
use super::path::TagPath;
use super::scan::{self, Reducer};
use crate::error::DecodeError;
use crate::types::{SessionId, StatusCode};

const STATUS_ELEMENT: &str = "Result";
const SESSION_ELEMENT: &str = "SessionID";

/// Outcome of decoding a session-authentication response.
pub type SessionResult = Result<SessionId, DecodeError>;

#[derive(Debug, Default)]
struct SessionDecoder {
    status: Option<StatusCode>,
    session_id: Option<String>,
}

impl Reducer for SessionDecoder {
    type Output = SessionId;

    fn text(mut self, path: &TagPath, text: &str) -> Result<Self, DecodeError> {
        match path.current() {
            Some(STATUS_ELEMENT) => self.status = Some(StatusCode::new(text)),
            Some(SESSION_ELEMENT) => self.session_id = Some(text.to_string()),
            _ => {}
        }
        Ok(self)
    }

    fn finish(self) -> SessionResult {
        check_status(self.status)?;
        let session = self
            .session_id
            .and_then(|token| SessionId::new(token).ok())
            .ok_or(DecodeError::MissingField(SESSION_ELEMENT))?;
        tracing::debug!("Decoded session response");
        Ok(session)
    }
}

/// Decodes a session-authentication response.
///
/// # Errors
///
/// Returns a `DecodeError` if the markup is malformed, the status is not
/// `Success`, or a successful response carries no session identifier.
///
/// # Examples
///
/// ```
/// use tcc_lib::decode_session;
///
/// let session = decode_session(b"<Result>Success</Result><SessionID>abc123</SessionID>").unwrap();
/// assert_eq!(session.as_str(), "abc123");
///
/// let err = decode_session(b"<Result>InvalidCredentials</Result>").unwrap_err();
/// assert_eq!(err.status(), Some("InvalidCredentials"));
/// ```
pub fn decode_session(xml: &[u8]) -> SessionResult {
    decode_session_with(xml, &DecodeOptions::default())
}

/// Decodes a session-authentication response with explicit options.
///
/// # Errors
///
/// See [`decode_session`].
pub fn decode_session_with(xml: &[u8], options: &DecodeOptions) -> SessionResult {
    decode_session_from_reader(xml, options)
}

/// Decodes a session-authentication response read from `reader`.
///
/// # Errors
///
/// See [`decode_session`]. I/O failures of `reader` are reported as
/// malformed input.
pub fn decode_session_from_reader<R: BufRead>(
    reader: R,
    options: &DecodeOptions,
) -> SessionResult {
    scan::run(reader, SessionDecoder::default(), options)
}

/// Decodes a session-authentication response read asynchronously from `reader`.
///
/// The future resolves once the reader reaches end of input. Callers that
/// need a deadline should wrap it in `tokio::time::timeout`.
///
/// # Errors
///
/// See [`decode_session_from_reader`].
#[cfg(feature = "async")]
pub async fn decode_session_async<R>(reader: R, options: &DecodeOptions) -> SessionResult
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    scan::run_async(reader, SessionDecoder::default(), options).await
}
