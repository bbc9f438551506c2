use minijinja::Environment;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use super::helpers;
use crate::core::{DocumentError, DocumentResult};
use crate::models::DocumentType;

/// Every `*.html` template of the deployment, compiled once at startup.
///
/// The store is immutable after `load`; share it behind an `Arc`.
pub struct TemplateStore {
    env: Environment<'static>,
    names: BTreeSet<String>,
    default_template: String,
}

impl TemplateStore {
    /// Loads the template directory. `default_template` is a document-type
    /// key (e.g. `bon-livraison`) and must exist in the directory.
    pub fn load(dir: &Path, default_template: &str) -> DocumentResult<Self> {
        let mut sources = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("html") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                let content = std::fs::read_to_string(&path)?;
                sources.push((name.to_string(), content));
            }
        }

        let store = Self::from_sources(sources, default_template)?;
        tracing::info!(
            dir = %dir.display(),
            templates = store.names.len(),
            "Loaded document templates"
        );
        Ok(store)
    }

    /// Builds a store from in-memory `(file name, source)` pairs.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (String, String)>,
        default_template: &str,
    ) -> DocumentResult<Self> {
        let mut env = Environment::new();
        env.add_filter("currency", helpers::currency_filter);
        env.add_filter("date", helpers::date_filter);
        env.add_filter("quantity", helpers::quantity_filter);

        let mut names = BTreeSet::new();
        for (name, source) in sources {
            env.add_template_owned(name.clone(), source)?;
            tracing::debug!(template = %name, "Registered template");
            names.insert(name);
        }

        let default_template = format!("{}.html", default_template);
        if !names.contains(&default_template) {
            return Err(DocumentError::MissingTemplate(default_template));
        }

        Ok(TemplateStore {
            env,
            names,
            default_template,
        })
    }

    /// Template for a document type: its own `<type>.html` when present,
    /// otherwise the default template.
    pub fn resolve(&self, document_type: DocumentType) -> &str {
        let exact = document_type.template_name();
        match self.names.get(&exact) {
            Some(name) => name,
            None => {
                tracing::debug!(
                    document_type = %document_type,
                    fallback = %self.default_template,
                    "No dedicated template, using default"
                );
                &self.default_template
            }
        }
    }

    pub fn render<S: Serialize>(&self, name: &str, context: &S) -> DocumentResult<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
