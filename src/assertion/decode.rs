//! Text decoding of assertion documents.

use std::collections::BTreeMap;

use super::{Assertion, AssertionError, AssertionType, HeaderValue};

/// Turns raw assertion bytes into an [`Assertion`].
///
/// The client hands every assertion body it receives to a decoder and
/// returns the result untouched.
pub trait AssertionDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Assertion, AssertionError>;
}

/// Decoder for the standard text encoding. Does not check signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl AssertionDecoder for TextDecoder {
    fn decode(&self, data: &[u8]) -> Result<Assertion, AssertionError> {
        decode(data)
    }
}

/// Decode a single assertion from its text encoding.
pub fn decode(data: &[u8]) -> Result<Assertion, AssertionError> {
    let head_end = find_separator(data).ok_or(AssertionError::MissingSeparator)?;
    let head = std::str::from_utf8(&data[..head_end]).map_err(|_| AssertionError::NotUtf8)?;
    let headers = parse_headers(head)?;

    let kind = match headers.get("type") {
        None => return Err(AssertionError::MissingType),
        Some(HeaderValue::Text(name)) => AssertionType::from(name.as_str()),
        Some(_) => return Err(AssertionError::TypeNotText),
    };

    let rest = &data[head_end + 2..];
    let body_length = body_length(&headers)?;
    let (content, body, signature) = if body_length > 0 {
        if rest.len() < body_length {
            return Err(AssertionError::BodyTooShort {
                declared: body_length,
                actual: rest.len(),
            });
        }
        let after_body = &rest[body_length..];
        if !after_body.starts_with(b"\n\n") {
            return Err(AssertionError::MissingSeparator);
        }
        (
            &data[..head_end + 2 + body_length],
            &rest[..body_length],
            &after_body[2..],
        )
    } else {
        (&data[..head_end], &rest[..0], rest)
    };

    let signature = trim_trailing_newlines(signature);
    if signature.is_empty() {
        return Err(AssertionError::EmptySignature);
    }

    Ok(Assertion {
        kind,
        headers,
        body: body.to_vec(),
        content: content.to_vec(),
        signature: signature.to_vec(),
    })
}

fn find_separator(data: &[u8]) -> Option<usize> {
    data.windows(2).position(|w| w == b"\n\n")
}

fn trim_trailing_newlines(mut data: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n'] = data {
        data = rest;
    }
    data
}

fn body_length(headers: &BTreeMap<String, HeaderValue>) -> Result<usize, AssertionError> {
    match headers.get("body-length") {
        None => Ok(0),
        Some(HeaderValue::Text(len)) => len
            .parse()
            .map_err(|_| AssertionError::InvalidBodyLength(len.clone())),
        Some(_) => Err(AssertionError::InvalidBodyLength(String::new())),
    }
}

// ─── Header block ────────────────────────────────────────────────────────────

struct Line<'a> {
    indent: usize,
    /// Line content after the indentation.
    text: &'a str,
    raw: &'a str,
}

fn parse_headers(head: &str) -> Result<BTreeMap<String, HeaderValue>, AssertionError> {
    let lines: Vec<Line<'_>> = head
        .split('\n')
        .map(|raw| {
            let text = raw.trim_start_matches(' ');
            Line {
                indent: raw.len() - text.len(),
                text,
                raw,
            }
        })
        .collect();
    parse_map(&lines, 0)
}

/// End (exclusive) of the block nested under the line before `start`.
fn nested_end(lines: &[Line<'_>], start: usize, indent: usize) -> usize {
    let mut end = start;
    while end < lines.len() && lines[end].indent > indent {
        end += 1;
    }
    end
}

fn parse_map(
    lines: &[Line<'_>],
    indent: usize,
) -> Result<BTreeMap<String, HeaderValue>, AssertionError> {
    let mut map = BTreeMap::new();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if line.indent != indent {
            return Err(AssertionError::BadIndent(line.raw.to_string()));
        }
        let (name, value) = line
            .text
            .split_once(':')
            .ok_or_else(|| AssertionError::InvalidEntry(line.raw.to_string()))?;
        if !is_valid_name(name) {
            return Err(AssertionError::InvalidName(name.to_string()));
        }

        let value = if value.is_empty() {
            let end = nested_end(lines, i + 1, indent);
            let nested = parse_nested(&lines[i + 1..end], name)?;
            i = end;
            nested
        } else {
            let text = value
                .strip_prefix(' ')
                .ok_or_else(|| AssertionError::InvalidEntry(line.raw.to_string()))?;
            i += 1;
            HeaderValue::Text(text.to_string())
        };

        if map.insert(name.to_string(), value).is_some() {
            return Err(AssertionError::RepeatedHeader(name.to_string()));
        }
    }
    Ok(map)
}

fn parse_nested(lines: &[Line<'_>], name: &str) -> Result<HeaderValue, AssertionError> {
    let first = lines
        .first()
        .ok_or_else(|| AssertionError::EmptyValue(name.to_string()))?;
    let indent = first.indent;

    if first.text == "-" || first.text.starts_with("- ") {
        return parse_list(lines, indent).map(HeaderValue::List);
    }
    if looks_like_entry(first.text) {
        return parse_map(lines, indent).map(HeaderValue::Map);
    }

    let mut text = Vec::with_capacity(lines.len());
    for line in lines {
        if line.indent < indent {
            return Err(AssertionError::BadIndent(line.raw.to_string()));
        }
        text.push(&line.raw[indent..]);
    }
    Ok(HeaderValue::Text(text.join("\n")))
}

fn parse_list(lines: &[Line<'_>], indent: usize) -> Result<Vec<HeaderValue>, AssertionError> {
    let mut items = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if line.indent != indent {
            return Err(AssertionError::BadIndent(line.raw.to_string()));
        }
        if line.text == "-" {
            let end = nested_end(lines, i + 1, indent);
            items.push(parse_nested(&lines[i + 1..end], "-")?);
            i = end;
        } else if let Some(item) = line.text.strip_prefix("- ") {
            items.push(HeaderValue::Text(item.to_string()));
            i += 1;
        } else {
            return Err(AssertionError::InvalidListItem(line.raw.to_string()));
        }
    }
    Ok(items)
}

fn looks_like_entry(text: &str) -> bool {
    match text.split_once(':') {
        Some((name, rest)) => is_valid_name(name) && (rest.is_empty() || rest.starts_with(' ')),
        None => false,
    }
}

/// `[a-z](-?[a-z0-9])*`
fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_lowercase() => {}
        _ => return false,
    }
    if bytes.ends_with(b"-") || name.contains("--") {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}
