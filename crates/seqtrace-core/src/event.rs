use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use std::fmt;
use std::io::{Cursor, Read};
use url::Url;

/// A captured HTTP body: a single-use reader, or nothing at all.
///
/// The body is drained exactly once, by whoever takes it by value. Dropping it releases the
/// underlying reader whether or not it was read to completion.
pub struct Body(Option<Box<dyn Read + Send>>);

impl Body {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self(Some(Box::new(reader)))
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Drains the reader to completion. An absent body yields no bytes.
    pub fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        let Some(mut reader) = self.0 else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        reader.read_to_end(&mut out)?;
        Ok(out)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Body(<reader>)"),
            None => f.write_str("Body(<absent>)"),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::from_reader(Cursor::new(text.as_bytes()))
    }
}

pub(crate) fn content_type_of(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

/// An outgoing HTTP request as it was captured.
#[derive(Debug)]
pub struct HttpRequestData {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Body,
}

impl HttpRequestData {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Body::empty(),
        }
    }

    /// Appends a header value; repeated names keep every value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        content_type_of(&self.headers)
    }
}

/// An HTTP response as it was captured.
#[derive(Debug)]
pub struct HttpResponseData {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Body,
}

impl HttpResponseData {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Body::empty(),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        content_type_of(&self.headers)
    }
}

/// Free-text interaction from `source` to `target`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub source: String,
    pub target: String,
    pub header: String,
    pub body: String,
}

/// Free-text reply from `source` back to `target`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageResponse {
    pub source: String,
    pub target: String,
    pub header: String,
    pub body: String,
}

#[derive(Debug)]
pub struct HttpRequest {
    pub source: String,
    pub target: String,
    pub request: HttpRequestData,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub source: String,
    pub target: String,
    pub response: HttpResponseData,
}

impl MessageRequest {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            header: header.into(),
            body: body.into(),
        }
    }
}

impl MessageResponse {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            header: header.into(),
            body: body.into(),
        }
    }
}

impl HttpRequest {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        request: HttpRequestData,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            request,
        }
    }
}

impl HttpResponse {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        response: HttpResponseData,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            response,
        }
    }
}

/// One entry of a diagram's event log.
#[derive(Debug)]
pub enum Event {
    MessageRequest(MessageRequest),
    MessageResponse(MessageResponse),
    HttpRequest(HttpRequest),
    HttpResponse(HttpResponse),
}

impl Event {
    pub fn is_response(&self) -> bool {
        matches!(self, Event::MessageResponse(_) | Event::HttpResponse(_))
    }

    pub fn source(&self) -> &str {
        match self {
            Event::MessageRequest(e) => &e.source,
            Event::MessageResponse(e) => &e.source,
            Event::HttpRequest(e) => &e.source,
            Event::HttpResponse(e) => &e.source,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Event::MessageRequest(e) => &e.target,
            Event::MessageResponse(e) => &e.target,
            Event::HttpRequest(e) => &e.target,
            Event::HttpResponse(e) => &e.target,
        }
    }
}

impl From<MessageRequest> for Event {
    fn from(value: MessageRequest) -> Self {
        Event::MessageRequest(value)
    }
}

impl From<MessageResponse> for Event {
    fn from(value: MessageResponse) -> Self {
        Event::MessageResponse(value)
    }
}

impl From<HttpRequest> for Event {
    fn from(value: HttpRequest) -> Self {
        Event::HttpRequest(value)
    }
}

impl From<HttpResponse> for Event {
    fn from(value: HttpResponse) -> Self {
        Event::HttpResponse(value)
    }
}
