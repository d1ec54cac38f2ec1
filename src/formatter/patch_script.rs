use super::{ReportContext, SpanFormatter, NO_DIFFERENCES};
use crate::binary_image::ImagePair;
use crate::disasm::renderer::InstructionRenderer;
use crate::word_diff::diff_span::DiffSpan;

pub const OPEN_MARKER: &str = "0:";
pub const CLOSE_MARKER: &str = "9:";

/// MAKEPATCH blocks holding only the patched instructions.
pub struct PatchScript;

impl SpanFormatter for PatchScript {
    fn header(&self, context: &ReportContext) -> Vec<String> {
        vec![
            format!(
                "; Generated by ppc_bin_diff on {} (MAKEPATCH mode)",
                context.generated
            ),
            format!("; base address: 0x{:X}", context.base),
            String::new(),
        ]
    }

    fn block(
        &self,
        span: &DiffSpan,
        images: &ImagePair,
        renderer: &InstructionRenderer<'_>,
    ) -> Vec<String> {
        let address = images.address_of(span);
        let mut lines = vec![
            format!("MAKEPATCH 0x{:08x}", address),
            OPEN_MARKER.to_string(),
        ];
        for insn in renderer.render(images.patched.chunk(span), address) {
            if insn.operands.is_empty() {
                lines.push(format!("\t{}", insn.mnemonic));
            } else {
                lines.push(format!("\t{} {}", insn.mnemonic, insn.operands));
            }
        }
        lines.push(CLOSE_MARKER.to_string());
        lines.push(String::new());
        lines
    }

    fn no_differences(&self) -> Vec<String> {
        vec![NO_DIFFERENCES.to_string()]
    }

    fn finish(&self, lines: Vec<String>) -> String {
        let mut text = lines.join("\n").trim_end().to_string();
        text.push('\n');
        text
    }
}
