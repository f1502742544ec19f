
use crate::*;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Method, StatusCode};
use std::io::Read;
use url::Url;

pub(crate) fn json_request(body: impl Into<Body>) -> HttpRequest {
    let request = HttpRequestData::new(
        Method::GET,
        Url::parse("http://example.com/abcdef").unwrap(),
    )
    .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    .with_body(body);
    HttpRequest::new("consumer", "app", request)
}

pub(crate) fn a_request() -> HttpRequest {
    let request = HttpRequestData::new(
        Method::GET,
        Url::parse("http://example.com/abcdef").unwrap(),
    )
    .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    HttpRequest::new("consumer", "app", request)
}

pub(crate) fn a_response_with(status: StatusCode) -> HttpResponse {
    HttpResponse::new("app", "consumer", HttpResponseData::new(status))
}

pub(crate) fn a_response() -> HttpResponse {
    a_response_with(StatusCode::NO_CONTENT)
}

pub(crate) fn a_diagram() -> Diagram {
    Diagram::new()
        .add_http_request(a_request())
        .add_http_response(a_response())
}

/// Reader that fails on first use.
pub(crate) struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ))
    }
}
