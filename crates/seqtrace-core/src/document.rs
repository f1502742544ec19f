use crate::Result;
use crate::diagram::{Diagram, DiagramModel};
use serde::Serialize;

/// A page of diagrams plus page-level title, description and opaque metadata.
#[derive(Debug, Default)]
pub struct Document {
    title: String,
    description: String,
    diagrams: Vec<Diagram>,
    meta_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentModel {
    pub title: String,
    pub description: String,
    pub diagrams: Vec<DiagramModel>,
    /// Passed through untouched; never parsed or escaped.
    pub meta_json: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_diagram(mut self, diagram: Diagram) -> Self {
        self.diagrams.push(diagram);
        self
    }

    /// Stores raw JSON text for client-side scripts.
    pub fn add_meta(mut self, meta_json: impl Into<String>) -> Self {
        self.meta_json = meta_json.into();
        self
    }

    /// Serializes `meta` compactly and stores it as the page metadata.
    pub fn add_meta_value(self, meta: &serde_json::Value) -> Self {
        self.add_meta(meta.to_string())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }

    pub fn meta_json(&self) -> &str {
        &self.meta_json
    }

    /// Builds every diagram model in order. The first failing diagram aborts the whole build.
    pub fn build_model(self) -> Result<DocumentModel> {
        let Document {
            title,
            description,
            diagrams,
            meta_json,
        } = self;

        let diagrams = diagrams
            .into_iter()
            .map(Diagram::build_model)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(title = %title, diagrams = diagrams.len(), "built document model");

        Ok(DocumentModel {
            title,
            description,
            diagrams,
            meta_json,
        })
    }
}
