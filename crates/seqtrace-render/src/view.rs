//! Serializable view of a [`DocumentModel`] as the page template sees it.

use crate::HtmlRenderOptions;
use seqtrace_core::{DiagramModel, DocumentModel, LogEntry};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub meta_json: &'a str,
    pub diagrams: Vec<DiagramView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DiagramView<'a> {
    /// 1-based position in the page.
    pub number: usize,
    pub panel_id: String,
    pub title: &'a str,
    pub sub_title: &'a str,
    pub badge_class: &'static str,
    pub status_code: i32,
    pub has_status: bool,
    pub diagram_text: &'a str,
    pub show_diagram_text: bool,
    pub theme: &'static str,
    pub expanded: bool,
    pub log_entries: Vec<LogEntryView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LogEntryView<'a> {
    pub number: usize,
    /// Element id, unique within the page.
    pub anchor: String,
    pub header: &'a str,
    pub body: &'a str,
}

impl<'a> PageView<'a> {
    pub fn new(model: &'a DocumentModel, options: &HtmlRenderOptions) -> Self {
        Self {
            title: &model.title,
            description: &model.description,
            meta_json: &model.meta_json,
            diagrams: model
                .diagrams
                .iter()
                .enumerate()
                .map(|(i, d)| DiagramView::new(i + 1, d, options))
                .collect(),
        }
    }
}

impl<'a> DiagramView<'a> {
    fn new(number: usize, diagram: &'a DiagramModel, options: &HtmlRenderOptions) -> Self {
        Self {
            number,
            panel_id: format!("diagram-{number}"),
            title: &diagram.title,
            sub_title: &diagram.sub_title,
            badge_class: diagram.badge_class,
            status_code: diagram.status_code,
            has_status: diagram.has_http_status(),
            diagram_text: &diagram.diagram_text,
            show_diagram_text: options.include_diagram_text,
            theme: options.diagram_theme.as_str(),
            expanded: options.expand_panels,
            log_entries: diagram
                .log_entries
                .iter()
                .enumerate()
                .map(|(i, e)| LogEntryView::new(number, i + 1, e))
                .collect(),
        }
    }
}

impl<'a> LogEntryView<'a> {
    fn new(diagram_number: usize, number: usize, entry: &'a LogEntry) -> Self {
        Self {
            number,
            anchor: format!("diagram-{diagram_number}-log-{number}"),
            header: &entry.header,
            body: &entry.body,
        }
    }
}
