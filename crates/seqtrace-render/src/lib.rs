#![forbid(unsafe_code)]

//! HTML page renderer for seqtrace documents.
//!
//! The page is a fixed Handlebars template bound to a view of the [`DocumentModel`]. All
//! numbering the template shows (diagram panels, log entries) is computed up front in
//! [`view`], so the template needs no helpers.

pub mod view;

use handlebars::Handlebars;
use seqtrace_core::{Document, DocumentModel};

const PAGE_TEMPLATE_NAME: &str = "sequence_page";
const PAGE_TEMPLATE: &str = include_str!("../assets/page.html.hbs");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] seqtrace_core::Error),
    #[error("invalid page template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("page render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Look of the client-side sequence diagram viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagramTheme {
    #[default]
    Simple,
    Hand,
}

impl DiagramTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramTheme::Simple => "simple",
            DiagramTheme::Hand => "hand",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HtmlRenderOptions {
    /// Emitted as `data-theme` on each diagram block.
    pub diagram_theme: DiagramTheme,
    /// When true, embed each diagram's sequence text for the client-side viewer.
    pub include_diagram_text: bool,
    /// When true, diagram panels start expanded.
    pub expand_panels: bool,
}

impl Default for HtmlRenderOptions {
    fn default() -> Self {
        Self {
            diagram_theme: DiagramTheme::Simple,
            include_diagram_text: true,
            expand_panels: false,
        }
    }
}

/// Compiled page template plus render options; reusable across documents.
#[derive(Debug)]
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
    options: HtmlRenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlRenderOptions) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { registry, options })
    }

    pub fn options(&self) -> &HtmlRenderOptions {
        &self.options
    }

    /// Builds the document model and renders it. Model errors are returned unchanged.
    pub fn render(&self, document: Document) -> Result<String> {
        let model = document.build_model()?;
        self.render_model(&model)
    }

    pub fn render_model(&self, model: &DocumentModel) -> Result<String> {
        let page = view::PageView::new(model, &self.options);
        let html = self.registry.render(PAGE_TEMPLATE_NAME, &page)?;
        tracing::debug!(
            title = %model.title,
            diagrams = model.diagrams.len(),
            bytes = html.len(),
            "rendered html page"
        );
        Ok(html)
    }
}

/// Renders `document` with [`HtmlRenderOptions::default`].
pub fn render_html(document: Document) -> Result<String> {
    HtmlRenderer::new(HtmlRenderOptions::default())?.render(document)
}
