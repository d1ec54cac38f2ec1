//! Instruction decoding for diff spans.
//!
//! `Decoder` is the capability the rest of the crate depends on;
//! `CapstoneDecoder` is the PowerPC implementation, and
//! `InstructionRenderer` adds the `.long` fallback on top of any decoder.

pub mod capstone;
pub mod renderer;

use crate::config::DecodeMode;

/// One line of disassembly: either decoded, or a raw `.long` word.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderedInstruction {
    pub address: u64,
    pub bytes: Vec<u8>,
    pub mnemonic: String,
    pub operands: String,
}

/// Decodes a byte chunk loaded at `address`.
///
/// Returning an empty vector means the chunk could not be decoded; it is
/// never an error.
pub trait Decoder {
    fn decode(&self, chunk: &[u8], address: u64) -> Vec<RenderedInstruction>;

    fn mode(&self) -> DecodeMode;
}
