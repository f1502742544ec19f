//! Body formatting for log entries.

use crate::event::Body;
use crate::{Error, Result};
use serde::de::IgnoredAny;

const JSON_INDENT: &str = "    ";

/// Drains `body` and renders it for display.
///
/// JSON bodies (by MIME essence of `content_type`) are validated and re-indented with a 4-space
/// indent. Only whitespace outside string literals changes: keys, duplicate keys and number
/// spellings come out exactly as they were captured. Anything else is returned as text; bytes
/// that are not valid UTF-8 are replaced with U+FFFD. An absent or empty body is always the
/// empty string.
pub fn format_content(body: Body, content_type: Option<&str>) -> Result<String> {
    if body.is_absent() {
        return Ok(String::new());
    }

    let bytes = body.into_bytes()?;
    tracing::trace!(
        content_type = content_type.unwrap_or(""),
        len = bytes.len(),
        "formatting body"
    );

    match content_type {
        Some(ct) if is_json_content_type(ct) => {
            if bytes.is_empty() {
                return Ok(String::new());
            }
            let text = validate_json(&bytes).map_err(|source| Error::Format {
                content_type: ct.to_string(),
                source,
            })?;
            Ok(indent_json(text))
        }
        _ => Ok(decode_text(bytes, content_type)),
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("application/json")
}

fn decode_text(bytes: Vec<u8>, content_type: Option<&str>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                content_type = content_type.unwrap_or(""),
                valid_up_to = err.utf8_error().valid_up_to(),
                "body is not valid UTF-8; replacing invalid sequences"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

fn validate_json(bytes: &[u8]) -> std::result::Result<&str, serde_json::Error> {
    let text =
        std::str::from_utf8(bytes).map_err(<serde_json::Error as serde::de::Error>::custom)?;
    serde_json::from_str::<IgnoredAny>(text)?;
    Ok(text)
}

/// Re-indents already validated JSON text.
fn indent_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // Set right after `{` / `[` so empty containers stay on one line.
    let mut opened = false;

    for ch in text.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            continue;
        }
        if opened && !matches!(ch, '}' | ']') {
            opened = false;
            depth += 1;
            push_newline(&mut out, depth);
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '{' | '[' => {
                out.push(ch);
                opened = true;
            }
            ',' => {
                out.push(ch);
                push_newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            '}' | ']' => {
                if opened {
                    opened = false;
                } else {
                    depth = depth.saturating_sub(1);
                    push_newline(&mut out, depth);
                }
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn push_newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(JSON_INDENT);
    }
}
