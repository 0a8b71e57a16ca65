//! Annotation metadata attached to fields and types.
//!
//! Metadata rides along inside a schema fragment under the `meta` keyword.
//! Validators treat unknown keywords as annotations, so the whole block is
//! copied into the document verbatim and never interpreted here.

use serde::Serialize;
use serde_json::Value;

/// Free-form descriptive metadata for a field or a declared type.
///
/// Serialized with JSON Schema's annotation spellings (`readOnly`,
/// `contentMediaType`, `$comment`); absent entries are omitted from the
/// emitted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Emitted as `$comment`.
    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Example values, any JSON shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<ContentEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn examples(mut self, examples: impl Into<Value>) -> Self {
        self.examples = Some(examples.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn write_only(mut self, write_only: bool) -> Self {
        self.write_only = Some(write_only);
        self
    }

    pub fn content_encoding(mut self, encoding: ContentEncoding) -> Self {
        self.content_encoding = Some(encoding);
        self
    }

    pub fn content_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.content_media_type = Some(media_type.into());
        self
    }
}

/// Content transfer encoding for string-carried binary data (RFC 2045 names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentEncoding {
    #[serde(rename = "7bit")]
    SevenBit,
    #[serde(rename = "8bit")]
    EightBit,
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "quoted-printable")]
    QuotedPrintable,
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "ietf-token")]
    IetfToken,
    #[serde(rename = "x-token")]
    XToken,
}

/// Semantic string format emitted under the `format` keyword.
///
/// Whether a format is asserted or merely annotated is decided by the
/// consuming engine; `Other` carries any engine-specific extension name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Email,
    Date,
    Time,
    DateTime,
    IsoTime,
    IsoDate,
    Duration,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    UriTemplate,
    Uuid,
    Regex,
    JsonPointer,
    RelativeJsonPointer,
    Byte,
    Int32,
    Int64,
    Float,
    Double,
    Password,
    Binary,
    Other(String),
}

impl Format {
    /// The `format` keyword value for this variant.
    pub fn as_str(&self) -> &str {
        match self {
            Format::Email => "email",
            Format::Date => "date",
            Format::Time => "time",
            Format::DateTime => "date-time",
            Format::IsoTime => "iso-time",
            Format::IsoDate => "iso-date",
            Format::Duration => "duration",
            Format::Hostname => "hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Uri => "uri",
            Format::UriReference => "uri-reference",
            Format::UriTemplate => "uri-template",
            Format::Uuid => "uuid",
            Format::Regex => "regex",
            Format::JsonPointer => "json-pointer",
            Format::RelativeJsonPointer => "relative-json-pointer",
            Format::Byte => "byte",
            Format::Int32 => "int32",
            Format::Int64 => "int64",
            Format::Float => "float",
            Format::Double => "double",
            Format::Password => "password",
            Format::Binary => "binary",
            Format::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
