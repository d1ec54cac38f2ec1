//! Serializers turning diff spans into a text artifact.

pub mod diff_report;
pub mod patch_script;

use crate::binary_image::ImagePair;
use crate::config::{DecodeMode, OutputFormat};
use crate::disasm::renderer::InstructionRenderer;
use crate::word_diff::diff_span::DiffSpan;

pub use diff_report::DiffReport;
pub use patch_script::PatchScript;

pub const NO_DIFFERENCES: &str = "; No differences found.";

/// Run metadata printed in artifact headers.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub generated: String,
    pub base: u64,
    pub mode: DecodeMode,
    pub clean_size: usize,
    pub patched_size: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    pub text: String,
    pub blocks: usize,
}

pub trait SpanFormatter {
    fn header(&self, context: &ReportContext) -> Vec<String>;

    fn block(
        &self,
        span: &DiffSpan,
        images: &ImagePair,
        renderer: &InstructionRenderer<'_>,
    ) -> Vec<String>;

    fn no_differences(&self) -> Vec<String>;

    fn finish(&self, lines: Vec<String>) -> String {
        lines.join("\n")
    }
}

pub fn for_format(format: OutputFormat) -> Box<dyn SpanFormatter> {
    match format {
        OutputFormat::DiffReport => Box::new(DiffReport),
        OutputFormat::PatchScript => Box::new(PatchScript),
    }
}

pub fn render(
    formatter: &dyn SpanFormatter,
    spans: &[DiffSpan],
    images: &ImagePair,
    renderer: &InstructionRenderer<'_>,
    context: &ReportContext,
) -> Report {
    let mut lines = formatter.header(context);
    if spans.is_empty() {
        lines.extend(formatter.no_differences());
    } else {
        for span in spans {
            log::debug!("rendering {}", span);
            lines.extend(formatter.block(span, images, renderer));
        }
    }

    Report {
        text: formatter.finish(lines),
        blocks: spans.len(),
    }
}
