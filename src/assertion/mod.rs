//! Signed assertion documents (model, serial and friends).
//!
//! An assertion is a block of headers, an optional body, and a signature.
//! This crate parses the text encoding and exposes the headers; it never
//! verifies the signature.

mod decode;

use std::collections::BTreeMap;
use std::fmt;

use base64::Engine;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

pub use decode::{decode, AssertionDecoder, TextDecoder};

// ─── Header values ───────────────────────────────────────────────────────────

/// A single header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Text(String),
    List(Vec<HeaderValue>),
    Map(BTreeMap<String, HeaderValue>),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[HeaderValue]> {
        match self {
            HeaderValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, HeaderValue>> {
        match self {
            HeaderValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

// ─── Assertion type ──────────────────────────────────────────────────────────

/// Value of the mandatory `type` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssertionType {
    Model,
    Serial,
    Account,
    AccountKey,
    Other(String),
}

impl AssertionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Model => "model",
            Self::Serial => "serial",
            Self::Account => "account",
            Self::AccountKey => "account-key",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for AssertionType {
    fn from(name: &str) -> Self {
        match name {
            "model" => Self::Model,
            "serial" => Self::Serial,
            "account" => Self::Account,
            "account-key" => Self::AccountKey,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AssertionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Assertion ───────────────────────────────────────────────────────────────

/// A decoded assertion.
///
/// The signed content and the signature are kept as received, so
/// [`Assertion::encode`] gives back a document that decodes to an equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    kind: AssertionType,
    headers: BTreeMap<String, HeaderValue>,
    body: Vec<u8>,
    content: Vec<u8>,
    signature: Vec<u8>,
}

impl Assertion {
    pub fn kind(&self) -> &AssertionType {
        &self.kind
    }

    pub fn headers(&self) -> &BTreeMap<String, HeaderValue> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// A header that is expected to be plain text.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.header(name).and_then(HeaderValue::as_str)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The signature block, still in its encoded text form.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The signature block with base64 armoring removed.
    pub fn signature_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        let compact: Vec<u8> = self
            .signature
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        base64::engine::general_purpose::STANDARD.decode(compact)
    }

    pub fn authority_id(&self) -> Option<&str> {
        self.header_str("authority-id")
    }

    pub fn brand_id(&self) -> Option<&str> {
        self.header_str("brand-id")
    }

    pub fn model(&self) -> Option<&str> {
        self.header_str("model")
    }

    pub fn serial(&self) -> Option<&str> {
        self.header_str("serial")
    }

    /// `revision` header; absent means 0.
    pub fn revision(&self) -> Option<u32> {
        match self.header_str("revision") {
            None => Some(0),
            Some(rev) => rev.parse().ok(),
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.header_str("timestamp")
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
    }

    pub fn sign_key_sha3_384(&self) -> Option<&str> {
        self.header_str("sign-key-sha3-384")
    }

    /// Re-assemble the text encoding: signed content, blank line, signature.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.content.len() + 2 + self.signature.len());
        out.extend_from_slice(&self.content);
        out.extend_from_slice(b"\n\n");
        out.extend_from_slice(&self.signature);
        out
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why an assertion document could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    #[error("assertion content/signature separator not found")]
    MissingSeparator,

    #[error("assertion headers are not valid UTF-8")]
    NotUtf8,

    #[error("header entry should have a ': ' separator: {0:?}")]
    InvalidEntry(String),

    #[error("invalid header name: {0:?}")]
    InvalidName(String),

    #[error("header {0:?} has no value")]
    EmptyValue(String),

    #[error("repeated header: {0:?}")]
    RepeatedHeader(String),

    #[error("unexpected indentation: {0:?}")]
    BadIndent(String),

    #[error("list item should start with '- ': {0:?}")]
    InvalidListItem(String),

    #[error("assertion: \"type\" header is mandatory")]
    MissingType,

    #[error("assertion: \"type\" header should be a string")]
    TypeNotText,

    #[error("assertion: \"body-length\" header is not an integer: {0:?}")]
    InvalidBodyLength(String),

    #[error("assertion body shorter than declared body-length: {actual} < {declared}")]
    BodyTooShort { declared: usize, actual: usize },

    #[error("empty assertion signature")]
    EmptySignature,
}
