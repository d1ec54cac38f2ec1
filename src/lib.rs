mod binary_image;
mod config;
mod disasm;
mod driver;
mod error;
mod formatter;
mod result;
mod word_diff;

// Exported objects
pub use crate::binary_image::{BinaryImage, ImagePair};
pub use crate::config::{
    parse_int, Config, DecodeMode, Endianness, OutputFormat, WordWidth, DEFAULT_OUTFILE,
};
pub use crate::disasm::capstone::CapstoneDecoder;
pub use crate::disasm::renderer::InstructionRenderer;
pub use crate::disasm::{Decoder, RenderedInstruction};
pub use crate::driver::{capstone_decoder, diff_images, run, run_with, DecoderFactory};
pub use crate::error::PpcBinDiffError;
pub use crate::formatter::{
    for_format, render, DiffReport, PatchScript, Report, ReportContext, SpanFormatter,
};
pub use crate::result::Result;
pub use crate::word_diff::diff_span::DiffSpan;
pub use crate::word_diff::{DiffSpans, WordDiff, WORD_SIZE};

extern crate log;
