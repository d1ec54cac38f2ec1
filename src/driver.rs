use crate::binary_image::{BinaryImage, ImagePair};
use crate::config::{Config, DecodeMode, OutputFormat};
use crate::disasm::capstone::CapstoneDecoder;
use crate::disasm::renderer::InstructionRenderer;
use crate::disasm::Decoder;
use crate::error::PpcBinDiffError;
use crate::formatter::{self, Report, ReportContext};
use crate::result::Result;
use crate::word_diff::WordDiff;

/// Diffs two in-memory images and formats the result. Performs no I/O.
pub fn diff_images(
    images: &ImagePair,
    decoder: &dyn Decoder,
    format: OutputFormat,
    generated: String,
) -> Report {
    let spans: Vec<_> = WordDiff::new(images.clean.bytes(), images.patched.bytes())
        .spans()
        .collect();
    log::info!("found {} differing span(s)", spans.len());

    let context = ReportContext {
        generated,
        base: images.base,
        mode: decoder.mode(),
        clean_size: images.clean.len(),
        patched_size: images.patched.len(),
    };
    let renderer = InstructionRenderer::new(decoder);
    formatter::render(
        &*formatter::for_format(format),
        &spans,
        images,
        &renderer,
        &context,
    )
}

/// Builds the decoder for a run.
pub type DecoderFactory = dyn Fn(DecodeMode) -> Result<Box<dyn Decoder>>;

pub fn capstone_decoder(mode: DecodeMode) -> Result<Box<dyn Decoder>> {
    Ok(Box::new(CapstoneDecoder::new(mode)?))
}

/// Loads both images, diffs them and writes the artifact to `config.outfile`.
pub fn run(config: &Config) -> Result<Report> {
    run_with(config, &capstone_decoder)
}

/// Same as `run`, with the decoder built by `make_decoder`.
pub fn run_with(config: &Config, make_decoder: &DecoderFactory) -> Result<Report> {
    // Fail on a broken disassembler before touching any input
    let decoder = make_decoder(config.mode)?;

    let clean = BinaryImage::from_path(&config.clean)?;
    let patched = BinaryImage::from_path(&config.patched)?;
    let images = ImagePair::new(clean, patched, config.base)?;

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = diff_images(&images, &*decoder, config.output_format, generated);

    std::fs::write(&config.outfile, &report.text).map_err(PpcBinDiffError::IoError)?;
    log::info!(
        "wrote {} bytes to {}",
        report.text.len(),
        config.outfile.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{run, run_with};
    use crate::disasm::Decoder;
    use crate::result::Result;
    use crate::config::{Config, DecodeMode, OutputFormat};
    use crate::error::PpcBinDiffError;
    use std::fs;

    fn write_images(dir: &tempfile::TempDir, clean: &[u8], patched: &[u8]) -> Config {
        let clean_path = dir.path().join("clean.bin");
        let patched_path = dir.path().join("patched.bin");
        fs::write(&clean_path, clean).unwrap();
        fs::write(&patched_path, patched).unwrap();
        let mut config = Config::new(clean_path, patched_path);
        config.outfile = dir.path().join("patches.asm");
        config
    }

    #[test]
    fn test_run_diff_report() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let clean = [0x4E, 0x80, 0x00, 0x20, 0x60, 0x00, 0x00, 0x00];
        let patched = [0x4E, 0x80, 0x00, 0x20, 0x60, 0x00, 0x00, 0x00, 0x60, 0x00];
        let mut config = write_images(&dir, &clean, &patched);
        config.base = 0x8000_0000;

        let report = run(&config).unwrap();
        let written = fs::read_to_string(&config.outfile).unwrap();
        println!("[*] written =\n{}", written);
        assert_eq!(report.blocks, 1);
        assert_eq!(written, report.text);
        assert!(written.contains("; base address: 0x80000000\n"));
        assert!(written.contains("; clean size:   8 bytes\n; patched size: 10 bytes\n"));
        assert!(written.contains("; --- Diff block at 0x80000008 (+0x8), size 0x4 bytes ---"));
        assert!(written.contains("0x80000008:  6000          .long 0x6000"));
    }

    #[test]
    fn test_run_patch_script() {
        let dir = tempfile::tempdir().unwrap();
        let clean = [0x4E, 0x80, 0x00, 0x20];
        let patched = [0x60, 0x00, 0x00, 0x00];
        let mut config = write_images(&dir, &clean, &patched);
        config.output_format = OutputFormat::PatchScript;

        let report = run(&config).unwrap();
        let written = fs::read_to_string(&config.outfile).unwrap();
        println!("[*] written =\n{}", written);
        assert_eq!(report.blocks, 1);
        assert!(written.ends_with("MAKEPATCH 0x00000000\n0:\n\tnop\n9:\n"));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_images(&dir, &[0u8; 4], &[0u8; 4]);
        config.patched = dir.path().join("missing.bin");

        match run(&config) {
            Err(PpcBinDiffError::FileNotFound(path)) => assert_eq!(path, config.patched),
            other => panic!("{:?}", other),
        }
        assert!(!config.outfile.exists());
    }

    #[test]
    fn test_run_decoder_unavailable_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().join("clean.bin"), dir.path().join("patched.bin"));
        config.outfile = dir.path().join("patches.asm");
        let broken = |_: DecodeMode| -> Result<Box<dyn Decoder>> {
            Err(PpcBinDiffError::DecoderUnavailable("no engine".to_string()))
        };

        match run_with(&config, &broken) {
            Err(PpcBinDiffError::DecoderUnavailable(why)) => assert_eq!(why, "no engine"),
            other => panic!("{:?}", other),
        }
        assert!(!config.outfile.exists());
    }

    #[test]
    fn test_run_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_images(&dir, &[0u8; 4], &[1u8; 4]);
        config.outfile = dir.path().to_path_buf();

        match run(&config) {
            Err(PpcBinDiffError::IoError(why)) => println!("[*] why = {}", why),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_run_base_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_images(&dir, &[0u8; 16], &[1u8; 16]);
        config.base = 0xFFFF_FFFF_FFFF_FFF8;

        match run(&config) {
            Err(PpcBinDiffError::InvalidArgument(why)) => println!("[*] why = {}", why),
            other => panic!("{:?}", other),
        }
        assert!(!config.outfile.exists());
    }
}
