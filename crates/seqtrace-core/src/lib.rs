#![forbid(unsafe_code)]

//! Event log + diagram model for recorded request/response interactions (headless).
//!
//! A [`Diagram`] is an ordered log of message and HTTP events between named participants. Building
//! its model validates the log, formats captured bodies, derives the final status badge and
//! generates the line-oriented sequence text consumed by client-side diagram viewers. A
//! [`Document`] groups diagrams for rendering as a single page.
//!
//! Everything here is synchronous and in-memory; the only I/O is draining captured body readers.

pub mod content;
pub mod diagram;
pub mod document;
pub mod error;
pub mod event;
pub mod http_dump;
pub mod sequence_text;

pub use content::format_content;
pub use diagram::{Diagram, DiagramModel, LogEntry, NO_STATUS, badge_css_class};
pub use document::{Document, DocumentModel};
pub use error::{Error, Result, ValidationError};
pub use event::{
    Body, Event, HttpRequest, HttpRequestData, HttpResponse, HttpResponseData, MessageRequest,
    MessageResponse,
};
pub use sequence_text::SequenceText;

#[cfg(test)]
mod tests;
