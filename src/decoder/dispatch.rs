// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status evaluation and continuation routing.

use crate::error::DecodeError;
use crate::types::StatusCode;

/// Evaluates the status recorded for a finished document.
///
/// Only the exact literal `Success` passes. A document that never carried a
/// status element fails with the `unknown` placeholder.
pub(crate) fn check_status(status: Option<StatusCode>) -> Result<(), DecodeError> {
    let status = status.unwrap_or_else(StatusCode::unknown);
    if status.is_success() {
        return Ok(());
    }
    tracing::debug!(status = %status, "Service reported failure");
    Err(DecodeError::Status(status))
}

/// Routes a decode result to exactly one of two continuations.
///
/// Returns whatever the invoked continuation returns.
///
/// # Examples
///
/// ```
/// use tcc_lib::decoder::{decode_session, dispatch};
///
/// let outcome = dispatch(
///     decode_session(b"<Result>Success</Result><SessionID>abc123</SessionID>"),
///     |session| format!("logged in as {session}"),
///     |err| format!("login failed: {err}"),
/// );
///
/// assert_eq!(outcome, "logged in as abc123");
/// ```
pub fn dispatch<T, R, S, F>(result: Result<T, DecodeError>, on_success: S, on_failure: F) -> R
where
    S: FnOnce(T) -> R,
    F: FnOnce(DecodeError) -> R,
{
    match result {
        Ok(value) => on_success(value),
        Err(err) => on_failure(err),
    }
}
