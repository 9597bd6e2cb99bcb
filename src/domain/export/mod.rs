pub mod pdf;

pub use pdf::{render_pdf, PdfLayout, RenderedPdf};

use serde::{Deserialize, Serialize};

/// Download formats offered for a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Pdf,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "script.txt",
            ExportFormat::Pdf => "script.pdf",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// Render a script into a downloadable file
pub fn export_script(text: &str, format: ExportFormat) -> ExportedFile {
    let data = match format {
        ExportFormat::Txt => text.as_bytes().to_vec(),
        ExportFormat::Pdf => {
            let rendered = render_pdf(text, &PdfLayout::default());
            if rendered.dropped_chars > 0 {
                tracing::warn!(
                    dropped_chars = rendered.dropped_chars,
                    "Characters without a PDF font encoding were left out"
                );
            }
            tracing::debug!(
                page_count = rendered.page_count,
                pdf_size = rendered.bytes.len(),
                "PDF rendered"
            );
            rendered.bytes
        }
    };

    ExportedFile {
        file_name: format.file_name(),
        content_type: format.content_type(),
        data,
    }
}
