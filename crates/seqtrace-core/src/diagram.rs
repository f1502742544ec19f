use crate::content::format_content;
use crate::event::{
    Event, HttpRequest, HttpRequestData, HttpResponse, HttpResponseData, MessageRequest,
    MessageResponse, content_type_of,
};
use crate::http_dump::{request_head, response_head};
use crate::sequence_text::SequenceText;
use crate::{Result, ValidationError};
use serde::Serialize;

/// Status of a diagram whose final event is a message rather than an HTTP response.
pub const NO_STATUS: i32 = -1;

/// One interaction trace: a title, a subtitle and an ordered event log.
///
/// Events are kept in insertion order, which is the chronological order of the interaction.
/// Nothing is validated on append; [`Diagram::build_model`] does that.
#[derive(Debug, Default)]
pub struct Diagram {
    title: String,
    sub_title: String,
    events: Vec<Event>,
}

/// Header and body text shown for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub header: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramModel {
    pub title: String,
    pub sub_title: String,
    pub badge_class: &'static str,
    /// HTTP status of the final response, or [`NO_STATUS`].
    pub status_code: i32,
    pub log_entries: Vec<LogEntry>,
    /// Sequence text generated from the event log (see [`SequenceText`]).
    pub diagram_text: String,
}

impl DiagramModel {
    pub fn has_http_status(&self) -> bool {
        self.status_code != NO_STATUS
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = sub_title.into();
        self
    }

    pub fn add_message_request(self, message: MessageRequest) -> Self {
        self.add_event(message)
    }

    pub fn add_message_response(self, message: MessageResponse) -> Self {
        self.add_event(message)
    }

    pub fn add_http_request(self, request: HttpRequest) -> Self {
        self.add_event(request)
    }

    pub fn add_http_response(self, response: HttpResponse) -> Self {
        self.add_event(response)
    }

    pub fn add_event(mut self, event: impl Into<Event>) -> Self {
        self.push(event);
        self
    }

    /// In-place append for callers that accumulate events in a loop.
    pub fn push(&mut self, event: impl Into<Event>) {
        self.events.push(event.into());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sub_title(&self) -> &str {
        &self.sub_title
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Validates the event log and derives the rendering model.
    ///
    /// Every captured HTTP body is drained here, so the diagram is consumed. Body errors are
    /// reported before a bad final event.
    pub fn build_model(self) -> Result<DiagramModel> {
        let Diagram {
            title,
            sub_title,
            events,
        } = self;

        if events.is_empty() {
            tracing::debug!(title = %title, "diagram has no events");
            return Err(ValidationError::NoEvents.into());
        }

        let final_status = response_status(&events);
        let event_count = events.len();

        let mut text = SequenceText::new();
        let mut log_entries = Vec::with_capacity(event_count);
        for event in events {
            let entry = match event {
                Event::HttpRequest(HttpRequest {
                    source,
                    target,
                    request,
                }) => {
                    let HttpRequestData {
                        method,
                        url,
                        headers,
                        body,
                    } = request;
                    text.add_request_row(&source, &target, &format!("{method} {url}"));
                    let content_type = content_type_of(&headers);
                    LogEntry {
                        header: request_head(&method, &url, &headers),
                        body: format_content(body, content_type)?,
                    }
                }
                Event::HttpResponse(HttpResponse {
                    source,
                    target,
                    response,
                }) => {
                    let HttpResponseData {
                        status,
                        headers,
                        body,
                    } = response;
                    text.add_response_row(&source, &target, &status.as_u16().to_string());
                    let content_type = content_type_of(&headers);
                    LogEntry {
                        header: response_head(status, &headers),
                        body: format_content(body, content_type)?,
                    }
                }
                Event::MessageRequest(m) => {
                    text.add_request_row(&m.source, &m.target, &m.header);
                    LogEntry {
                        header: m.header,
                        body: m.body,
                    }
                }
                Event::MessageResponse(m) => {
                    text.add_response_row(&m.source, &m.target, &m.header);
                    LogEntry {
                        header: m.header,
                        body: m.body,
                    }
                }
            };
            log_entries.push(entry);
        }

        let status_code = match final_status {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!(title = %title, error = %err, "diagram failed validation");
                return Err(err.into());
            }
        };

        tracing::debug!(
            title = %title,
            events = event_count,
            status = status_code,
            "built diagram model"
        );

        Ok(DiagramModel {
            title,
            sub_title,
            badge_class: badge_css_class(status_code),
            status_code,
            log_entries,
            diagram_text: text.into(),
        })
    }
}

fn response_status(events: &[Event]) -> std::result::Result<i32, ValidationError> {
    match events.last() {
        None => Err(ValidationError::NoEvents),
        Some(Event::HttpResponse(res)) => Ok(i32::from(res.response.status.as_u16())),
        Some(Event::MessageResponse(_)) => Ok(NO_STATUS),
        Some(Event::HttpRequest(_) | Event::MessageRequest(_)) => {
            Err(ValidationError::FinalEventNotResponse)
        }
    }
}

/// Bootstrap badge class for a final status: 5xx is danger, 4xx warning, anything else success.
pub fn badge_css_class(status: i32) -> &'static str {
    if status >= 500 {
        "badge badge-danger"
    } else if status >= 400 {
        "badge badge-warning"
    } else {
        "badge badge-success"
    }
}
