use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

use crate::core::{DocumentError, DocumentResult};

/// Converts a rendered HTML document plus a print stylesheet into PDF bytes.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, html: &str, stylesheet: &str) -> DocumentResult<Vec<u8>>;

    fn name(&self) -> &str;
}

/// Runs an external HTML to PDF engine with a WeasyPrint-compatible command
/// line: `<program> --stylesheet <css> <input.html> <output.pdf>`.
pub struct CommandRenderer {
    program: String,
    temp_dir: PathBuf,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, temp_dir: impl Into<PathBuf>) -> Self {
        CommandRenderer {
            program: program.into(),
            temp_dir: temp_dir.into(),
        }
    }

    async fn convert(&self, html_path: &Path, css_path: &Path, pdf_path: &Path) -> DocumentResult<Vec<u8>> {
        let output = tokio::task::spawn_blocking({
            let program = self.program.clone();
            let html_path = html_path.to_path_buf();
            let css_path = css_path.to_path_buf();
            let pdf_path = pdf_path.to_path_buf();
            move || {
                Command::new(&program)
                    .arg("--stylesheet")
                    .arg(&css_path)
                    .arg(&html_path)
                    .arg(&pdf_path)
                    .output()
            }
        })
        .await
        .map_err(|e| DocumentError::Rendering(format!("renderer task failed: {}", e)))?
        .map_err(|e| DocumentError::Rendering(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(DocumentError::Rendering(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(tokio::fs::read(pdf_path).await?)
    }
}

#[async_trait]
impl PageRenderer for CommandRenderer {
    async fn render(&self, html: &str, stylesheet: &str) -> DocumentResult<Vec<u8>> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;

        let id = Uuid::new_v4();
        let html_path = self.temp_dir.join(format!("doc_{}.html", id));
        let css_path = self.temp_dir.join(format!("doc_{}.css", id));
        let pdf_path = self.temp_dir.join(format!("doc_{}.pdf", id));

        let result: DocumentResult<Vec<u8>> = async {
            tokio::fs::write(&html_path, html).await?;
            tokio::fs::write(&css_path, stylesheet).await?;
            self.convert(&html_path, &css_path, &pdf_path).await
        }
        .await;

        for path in [&html_path, &css_path, &pdf_path] {
            let _ = tokio::fs::remove_file(path).await;
        }

        match &result {
            Ok(bytes) => tracing::debug!(bytes = bytes.len(), engine = %self.program, "Converted document"),
            Err(e) => tracing::warn!(error = %e, engine = %self.program, "Page conversion failed"),
        }
        result
    }

    fn name(&self) -> &str {
        &self.program
    }
}
