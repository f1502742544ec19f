#![forbid(unsafe_code)]

//! `seqtrace` turns recorded request/response interactions into sequence-diagram HTML pages.
//!
//! Build a [`Diagram`] per traced request, collect diagrams in a [`Document`], then render it.
//!
//! # Features
//!
//! - `render` (default): enable the HTML page renderer (`seqtrace::render`)

pub use seqtrace_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use seqtrace_render::view;
    pub use seqtrace_render::{DiagramTheme, HtmlRenderOptions, HtmlRenderer};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Model(seqtrace_core::Error),
        #[error(transparent)]
        Render(seqtrace_render::Error),
    }

    impl From<seqtrace_core::Error> for HeadlessError {
        fn from(err: seqtrace_core::Error) -> Self {
            HeadlessError::Model(err)
        }
    }

    /// Model failures reported by the renderer are lifted to [`HeadlessError::Model`], so
    /// `Render` only ever carries template errors.
    impl From<seqtrace_render::Error> for HeadlessError {
        fn from(err: seqtrace_render::Error) -> Self {
            match err {
                seqtrace_render::Error::Model(model) => HeadlessError::Model(model),
                other => HeadlessError::Render(other),
            }
        }
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Renders `document` with default options.
    pub fn render_html(document: seqtrace_core::Document) -> Result<String> {
        Ok(seqtrace_render::render_html(document)?)
    }

    pub fn render_model_html(
        model: &seqtrace_core::DocumentModel,
        options: &HtmlRenderOptions,
    ) -> Result<String> {
        let renderer = HtmlRenderer::new(options.clone())?;
        Ok(renderer.render_model(model)?)
    }
}
