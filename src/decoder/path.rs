// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element nesting path.

use std::fmt;

/// The chain of open elements from the document root to the current element.
///
/// Element names are joined with [`TagPath::SEPARATOR`] so a path can be
/// compared against a literal such as `GetLocationsResult.Result`.
///
/// # Examples
///
/// ```
/// use tcc_lib::decoder::TagPath;
///
/// let mut path = TagPath::new();
/// path.push("GetLocationsResult");
/// path.push("Result");
/// assert_eq!(path.as_str(), "GetLocationsResult.Result");
/// assert_eq!(path.current(), Some("Result"));
///
/// path.pop();
/// assert_eq!(path.as_str(), "GetLocationsResult");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPath {
    names: Vec<String>,
    joined: String,
}

impl TagPath {
    /// Separator placed between element names in the joined path.
    pub const SEPARATOR: char = '.';

    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            joined: String::new(),
        }
    }

    /// Enters an element.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.is_empty() {
            self.joined.push(Self::SEPARATOR);
        }
        self.joined.push_str(&name);
        self.names.push(name);
    }

    /// Leaves the current element, returning its name.
    ///
    /// Popping an empty path is a no-op that returns `None`.
    pub fn pop(&mut self) -> Option<String> {
        let name = self.names.pop()?;
        let separator = usize::from(!self.names.is_empty());
        let len = self.joined.len() - name.len() - separator;
        self.joined.truncate(len);
        Some(name)
    }

    /// Returns the joined path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Returns the name of the innermost open element.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// Returns the number of open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no element is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the part of the path below `prefix`.
    ///
    /// The match must end on an element boundary, so `Root.Names` is below
    /// `Root` but not below `Root.Name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcc_lib::decoder::TagPath;
    ///
    /// let mut path = TagPath::new();
    /// for name in ["Root", "Item", "UI", "Temp"] {
    ///     path.push(name);
    /// }
    ///
    /// assert_eq!(path.relative_to("Root.Item"), Some("UI.Temp"));
    /// assert_eq!(path.relative_to("Root.It"), None);
    /// assert_eq!(path.relative_to("Root.Item.UI.Temp"), None);
    /// ```
    #[must_use]
    pub fn relative_to(&self, prefix: &str) -> Option<&str> {
        self.joined
            .strip_prefix(prefix)?
            .strip_prefix(Self::SEPARATOR)
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}
