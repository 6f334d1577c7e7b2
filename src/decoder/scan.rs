// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event scanning shared by the session and locations decoders.
//!
//! The XML reader produces a pull-based sequence of events. Each event is
//! folded into a [`Scan`], which owns the element path and the decoder state
//! for exactly one decode call.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::options::DecodeOptions;
use super::path::TagPath;
use crate::error::DecodeError;

/// A structural event delivered to a [`Reducer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum XmlEvent<'a> {
    /// An element was opened.
    Open(&'a str),
    /// Trimmed, unescaped text inside the current element.
    Text(&'a str),
    /// The current element was closed.
    Close,
}

/// Per-document decoding state driven by [`XmlEvent`]s.
///
/// Every callback takes the state by value and returns the next state.
pub(crate) trait Reducer: Sized {
    /// Value produced when the document ends successfully.
    type Output;

    /// Called after an element has been pushed onto `path`.
    fn open(self, _path: &TagPath) -> Self {
        self
    }

    /// Called for text inside the element at `path`.
    fn text(self, path: &TagPath, text: &str) -> Result<Self, DecodeError>;

    /// Called before the element at `path` is popped.
    fn close(self, _path: &TagPath) -> Self {
        self
    }

    /// Called once the whole document has been read.
    fn finish(self) -> Result<Self::Output, DecodeError>;
}

/// The element path and decoder state of a single decode call.
#[derive(Debug)]
pub(crate) struct Scan<D> {
    path: TagPath,
    decoder: D,
    max_depth: usize,
    rooted: bool,
}

impl<D: Reducer> Scan<D> {
    pub(crate) fn new(decoder: D, options: &DecodeOptions) -> Self {
        Self {
            path: TagPath::new(),
            decoder,
            max_depth: options.max_depth(),
            rooted: false,
        }
    }

    /// Folds one event into the state.
    pub(crate) fn step(self, event: XmlEvent<'_>) -> Result<Self, DecodeError> {
        let Self {
            mut path,
            decoder,
            max_depth,
            mut rooted,
        } = self;

        let decoder = match event {
            XmlEvent::Open(name) => {
                if path.depth() >= max_depth {
                    return Err(DecodeError::TooDeep { limit: max_depth });
                }
                path.push(name);
                rooted = true;
                decoder.open(&path)
            }
            XmlEvent::Text(text) => decoder.text(&path, text)?,
            XmlEvent::Close => {
                let decoder = decoder.close(&path);
                path.pop();
                decoder
            }
        };

        Ok(Self {
            path,
            decoder,
            max_depth,
            rooted,
        })
    }

    /// Translates a reader event and folds it into the state.
    ///
    /// `position` is the byte offset the event was read from and is only used
    /// for diagnostics.
    fn feed(self, event: Event<'_>, position: usize) -> Result<Self, DecodeError> {
        match event {
            Event::Start(start) => self.open(&start, position),
            Event::Empty(start) => self.open(&start, position)?.step(XmlEvent::Close),
            Event::End(_) => self.step(XmlEvent::Close),
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|source| DecodeError::Xml { position, source })?;
                self.text(&text, position)
            }
            Event::CData(data) => self.text(utf8(&data, position)?, position),
            // Declarations, comments, processing instructions, doctypes.
            _ => Ok(self),
        }
    }

    /// Checks the tag's name and attributes, then opens the element.
    fn open(self, start: &BytesStart<'_>, position: usize) -> Result<Self, DecodeError> {
        let name = start.name();
        let name = utf8(name.as_ref(), position)?;
        if !is_name(name) {
            tracing::debug!(position, element = name, "Invalid element name");
            return Err(DecodeError::InvalidName {
                name: name.to_string(),
                position,
            });
        }

        let mut attributes = start.attributes();
        attributes.with_checks(true);
        for attribute in attributes {
            attribute
                .map_err(|err| malformed(position, err.into()))?
                .unescape_value()
                .map_err(|source| malformed(position, source))?;
        }

        let local = start.local_name();
        self.step(XmlEvent::Open(utf8(local.as_ref(), position)?))
    }

    fn text(self, text: &str, position: usize) -> Result<Self, DecodeError> {
        if self.path.is_empty() && !is_blank(text) {
            tracing::debug!(position, "Text outside the root element");
            return Err(DecodeError::TextOutsideRoot { position });
        }
        let text = text.trim();
        if text.is_empty() {
            Ok(self)
        } else {
            self.step(XmlEvent::Text(text))
        }
    }

    /// Completes the decode once the reader reports end of input.
    pub(crate) fn finish(self) -> Result<D::Output, DecodeError> {
        if !self.path.is_empty() {
            return Err(DecodeError::UnexpectedEof {
                open: self.path.to_string(),
            });
        }
        if !self.rooted {
            return Err(DecodeError::NoRoot);
        }
        self.decoder.finish()
    }
}

fn utf8(bytes: &[u8], position: usize) -> Result<&str, DecodeError> {
    std::str::from_utf8(bytes).map_err(|_| DecodeError::Utf8 { position })
}

/// Whether `name` is an XML element name: a letter, `_` or `:` followed by
/// letters, digits, `-`, `.`, `_` or `:`. Non-ASCII characters are accepted.
fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    let start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | ':') || !c.is_ascii());
    start && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | ':') || !c.is_ascii())
}

/// XML whitespace only.
fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

fn configure<R>(reader: &mut Reader<R>) {
    reader.trim_text(true);
    reader.expand_empty_elements(true);
    reader.check_end_names(true);
}

fn malformed(position: usize, source: quick_xml::Error) -> DecodeError {
    tracing::debug!(position, error = %source, "Malformed XML");
    DecodeError::Xml { position, source }
}

/// Decodes one document read from `source`.
pub(crate) fn run<R, D>(
    source: R,
    decoder: D,
    options: &DecodeOptions,
) -> Result<D::Output, DecodeError>
where
    R: BufRead,
    D: Reducer,
{
    let mut reader = Reader::from_reader(source);
    configure(&mut reader);

    let mut scan = Scan::new(decoder, options);
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(event) => event,
            Err(source) => return Err(malformed(reader.buffer_position(), source)),
        };
        scan = scan.feed(event, position)?;
        buf.clear();
    }

    scan.finish()
}

/// Decodes one document read asynchronously from `source`.
#[cfg(feature = "async")]
pub(crate) async fn run_async<R, D>(
    source: R,
    decoder: D,
    options: &DecodeOptions,
) -> Result<D::Output, DecodeError>
where
    R: tokio::io::AsyncBufRead + Unpin,
    D: Reducer,
{
    let mut reader = Reader::from_reader(source);
    configure(&mut reader);

    let mut scan = Scan::new(decoder, options);
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = match reader.read_event_into_async(&mut buf).await {
            Ok(Event::Eof) => break,
            Ok(event) => event,
            Err(source) => return Err(malformed(reader.buffer_position(), source)),
        };
        scan = scan.feed(event, position)?;
        buf.clear();
    }

    scan.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback so ordering can be asserted.
    #[derive(Debug, Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl Reducer for Recorder {
        type Output = Vec<String>;

        fn open(mut self, path: &TagPath) -> Self {
            self.log.push(format!("open {path}"));
            self
        }

        fn text(mut self, path: &TagPath, text: &str) -> Result<Self, DecodeError> {
            self.log.push(format!("text {path} {text}"));
            Ok(self)
        }

        fn close(mut self, path: &TagPath) -> Self {
            self.log.push(format!("close {path}"));
            self
        }

        fn finish(mut self) -> Result<Self::Output, DecodeError> {
            self.log.push("end".to_string());
            Ok(self.log)
        }
    }

    fn record(xml: &str) -> Result<Vec<String>, DecodeError> {
        run(xml.as_bytes(), Recorder::default(), &DecodeOptions::new())
    }

    #[test]
    fn events_arrive_in_document_order() {
        let log = record("<a><b> hi </b><c/></a>").unwrap();
        assert_eq!(
            log,
            vec![
                "open a",
                "open a.b",
                "text a.b hi",
                "close a.b",
                "open a.c",
                "close a.c",
                "close a",
                "end",
            ]
        );
    }

    #[test]
    fn whitespace_only_text_is_skipped() {
        let log = record("<a>\n   <b>x</b>\n</a>").unwrap();
        assert!(!log.iter().any(|line| line.starts_with("text a ")));
    }

    #[test]
    fn entities_are_unescaped() {
        let log = record("<a>Tom &amp; Jerry</a>").unwrap();
        assert_eq!(log[1], "text a Tom & Jerry");
    }

    #[test]
    fn cdata_is_text() {
        let log = record("<a><![CDATA[ <raw> ]]></a>").unwrap();
        assert_eq!(log[1], "text a <raw>");
    }

    #[test]
    fn namespace_prefixes_are_stripped() {
        let log = record(r#"<s:Envelope xmlns:s="urn:x"><s:Body/></s:Envelope>"#).unwrap();
        assert_eq!(log[1], "open Envelope.Body");
    }

    #[test]
    fn declarations_and_comments_are_ignored() {
        let log = record(r#"<?xml version="1.0" encoding="utf-8"?><!-- c --><a/>"#).unwrap();
        assert_eq!(log, vec!["open a", "close a", "end"]);
    }

    #[test]
    fn unclosed_element_is_parse_error() {
        let err = record("<a><b>text</b>").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedEof { .. } | DecodeError::Xml { .. }
        ));
    }

    #[test]
    fn mismatched_end_tag_is_parse_error() {
        let err = record("<a><b></a></b>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));
    }

    #[test]
    fn unterminated_tag_is_parse_error() {
        let err = record("<a><b").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Xml { .. } | DecodeError::UnexpectedEof { .. }
        ));
    }

    #[test]
    fn attribute_without_value_is_parse_error() {
        let err = record("<a b=><c>x</c></a>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));

        let err = record("<a flag><c>x</c></a>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));
    }

    #[test]
    fn duplicate_attribute_is_parse_error() {
        let err = record(r#"<a id="1" id="2"><c>x</c></a>"#).unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));
    }

    #[test]
    fn bad_attribute_on_empty_element_is_parse_error() {
        let err = record("<a><c id=/></a>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));
    }

    #[test]
    fn well_formed_attributes_are_accepted() {
        let log = record(r#"<a id="1" kind='x &amp; y'><c/></a>"#).unwrap();
        assert_eq!(log[0], "open a");
    }

    #[test]
    fn text_before_root_is_parse_error() {
        let err = record("junk<a>x</a>").unwrap_err();
        assert!(matches!(err, DecodeError::TextOutsideRoot { .. }));
    }

    #[test]
    fn text_after_root_is_parse_error() {
        let err = record("<a>x</a>junk").unwrap_err();
        assert!(matches!(err, DecodeError::TextOutsideRoot { .. }));
    }

    #[test]
    fn cdata_outside_root_is_parse_error() {
        let err = record("<a>x</a><![CDATA[junk]]>").unwrap_err();
        assert!(matches!(err, DecodeError::TextOutsideRoot { .. }));
    }

    #[test]
    fn whitespace_around_root_is_accepted() {
        let log = record("\n  <a>x</a>\r\n").unwrap();
        assert_eq!(log, vec!["open a", "text a x", "close a", "end"]);
    }

    #[test]
    fn plain_text_body_is_parse_error() {
        let err = record("Service Unavailable").unwrap_err();
        assert!(matches!(err, DecodeError::TextOutsideRoot { position: 0 }));
    }

    #[test]
    fn empty_body_is_parse_error() {
        assert!(matches!(record("").unwrap_err(), DecodeError::NoRoot));
        assert!(matches!(
            record("<?xml version=\"1.0\"?>\n").unwrap_err(),
            DecodeError::NoRoot
        ));
    }

    #[test]
    fn digit_leading_name_is_parse_error() {
        let err = record("<1a>x</1a>").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidName { ref name, .. } if name == "1a"
        ));
    }

    #[test]
    fn element_names() {
        assert!(is_name("SessionID"));
        assert!(is_name("_x"));
        assert!(is_name("s:Body"));
        assert!(is_name("a-b.c_1"));
        assert!(is_name("Températures"));
        assert!(!is_name(""));
        assert!(!is_name("1a"));
        assert!(!is_name("-a"));
        assert!(!is_name(".a"));
        assert!(!is_name("a/b"));
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let options = DecodeOptions::new().with_max_depth(2);
        let ok = run("<a><b/></a>".as_bytes(), Recorder::default(), &options);
        assert!(ok.is_ok());

        let err = run("<a><b><c/></b></a>".as_bytes(), Recorder::default(), &options).unwrap_err();
        assert!(matches!(err, DecodeError::TooDeep { limit: 2 }));
    }

    #[test]
    fn invalid_utf8_name_is_parse_error() {
        let err = run(
            &b"<a\xff></a\xff>"[..],
            Recorder::default(),
            &DecodeOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Utf8 { .. } | DecodeError::Xml { .. }
        ));
    }
}
