use super::{ReportContext, SpanFormatter, NO_DIFFERENCES};
use crate::binary_image::{BinaryImage, ImagePair};
use crate::disasm::renderer::InstructionRenderer;
use crate::disasm::RenderedInstruction;
use crate::word_diff::diff_span::DiffSpan;

const RULE: &str = "; ================================================";

/// Side-by-side disassembly of the clean and patched bytes of every span.
pub struct DiffReport;

fn instruction_line(insn: &RenderedInstruction) -> String {
    format!(
        "0x{:08X}:  {:<12}  {} {}",
        insn.address,
        hex::encode(&insn.bytes),
        insn.mnemonic,
        insn.operands
    )
    .trim_end()
    .to_string()
}

fn section(
    title: &str,
    image: &BinaryImage,
    span: &DiffSpan,
    address: u64,
    renderer: &InstructionRenderer<'_>,
) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    lines.extend(
        renderer
            .render(image.chunk(span), address)
            .iter()
            .map(instruction_line),
    );
    lines
}

impl SpanFormatter for DiffReport {
    fn header(&self, context: &ReportContext) -> Vec<String> {
        vec![
            RULE.to_string(),
            format!("; ppc_bin_diff output generated {}", context.generated),
            format!("; base address: 0x{:X}", context.base),
            format!("; capstone mode: {}", context.mode),
            format!("; clean size:   {} bytes", context.clean_size),
            format!("; patched size: {} bytes", context.patched_size),
            RULE.to_string(),
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
        let mut lines = vec![format!(
            "; --- Diff block at 0x{:X} (+0x{:X}), size 0x{:X} bytes ---",
            address,
            span.offset(),
            span.size()
        )];
        lines.extend(section("; ORIGINAL:", &images.clean, span, address, renderer));
        lines.extend(section("; PATCHED:", &images.patched, span, address, renderer));
        lines.push(String::new());
        lines
    }

    fn no_differences(&self) -> Vec<String> {
        vec![NO_DIFFERENCES.to_string(), String::new()]
    }
}

#[cfg(test)]
mod tests {
    use crate::config::OutputFormat;
    use crate::formatter::tests::render_wrapper;

    const HEADER: &str = "; ================================================
; ppc_bin_diff output generated 2026-10-19 12:00:00
; base address: 0x0
; capstone mode: PPC64 + BIG
; clean size:   16 bytes
; patched size: 16 bytes
; ================================================
";

    #[test]
    fn test_diff_report_single_word() {
        let clean = vec![0u8; 16];
        let mut patched = clean.clone();
        patched[8..12].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let report = render_wrapper(OutputFormat::DiffReport, clean, patched, 0);
        println!("[*] report.text =\n{}", report.text);
        assert_eq!(report.blocks, 1);
        assert_eq!(
            report.text,
            format!(
                "{}
; --- Diff block at 0x8 (+0x8), size 0x4 bytes ---
; ORIGINAL:
0x00000008:  00000000      .long 0x00000000
; PATCHED:
0x00000008:  01020304      .long 0x01020304
",
                HEADER
            )
        );
    }

    #[test]
    fn test_diff_report_no_differences() {
        let report = render_wrapper(OutputFormat::DiffReport, vec![7u8; 16], vec![7u8; 16], 0);
        assert_eq!(report.blocks, 0);
        assert_eq!(
            report.text,
            format!("{}\n; No differences found.\n", HEADER)
        );
    }

    #[test]
    fn test_diff_report_base_and_tail() {
        let clean = vec![0u8; 4];
        let patched = vec![0u8, 0, 0, 0, 0xAA, 0xBB];
        let report = render_wrapper(OutputFormat::DiffReport, clean, patched, 0x8000_0000);
        println!("[*] report.text =\n{}", report.text);
        assert_eq!(report.blocks, 1);
        assert!(report.text.contains("; base address: 0x80000000\n"));
        assert!(report
            .text
            .contains("; --- Diff block at 0x80000004 (+0x4), size 0x4 bytes ---\n; ORIGINAL:\n; PATCHED:\n0x80000004:  aabb          .long 0xaabb\n"));
    }
}
