//! Wire-style header dumps used as the header text of HTTP log entries.

use http::header::HeaderMap;
use http::{Method, StatusCode};
use std::fmt::Write as _;
use url::Url;

/// `GET /path?query HTTP/1.1`, a `Host` line, then the request headers.
pub fn request_head(method: &Method, url: &Url, headers: &HeaderMap) -> String {
    let mut out = String::new();
    let _ = write!(&mut out, "{method} {}", url.path());
    if let Some(query) = url.query() {
        let _ = write!(&mut out, "?{query}");
    }
    out.push_str(" HTTP/1.1\r\n");

    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => {
                let _ = write!(&mut out, "Host: {host}:{port}\r\n");
            }
            None => {
                let _ = write!(&mut out, "Host: {host}\r\n");
            }
        }
    }

    write_headers(&mut out, headers);
    out.push_str("\r\n");
    out
}

/// `HTTP/1.1 204 No Content` followed by the response headers.
pub fn response_head(status: StatusCode, headers: &HeaderMap) -> String {
    let mut out = String::new();
    let _ = write!(&mut out, "HTTP/1.1 {}", status.as_u16());
    if let Some(reason) = status.canonical_reason() {
        let _ = write!(&mut out, " {reason}");
    }
    out.push_str("\r\n");

    write_headers(&mut out, headers);
    out.push_str("\r\n");
    out
}

fn write_headers(out: &mut String, headers: &HeaderMap) {
    let mut names: Vec<_> = headers.keys().collect();
    names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    for name in names {
        let display = canonical_header_name(name.as_str());
        for value in headers.get_all(name) {
            let value = String::from_utf8_lossy(value.as_bytes());
            let _ = write!(out, "{display}: {value}\r\n");
        }
    }
}

/// `content-type` -> `Content-Type`.
pub fn canonical_header_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for ch in name.chars() {
        if upper {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        upper = ch == '-';
    }
    out
}
