use super::{Decoder, RenderedInstruction};
use crate::config::Endianness;
use crate::word_diff::WORD_SIZE;
use std::convert::TryInto;

pub const FALLBACK_MNEMONIC: &str = ".long";

pub struct InstructionRenderer<'d> {
    decoder: &'d dyn Decoder,
}

impl<'d> InstructionRenderer<'d> {
    pub fn new(decoder: &'d dyn Decoder) -> Self {
        Self { decoder }
    }

    /// Disassembles `chunk` as loaded at `address`.
    ///
    /// Whatever the decoder returns is used as is. When it returns nothing,
    /// each word of the chunk is emitted as a `.long` so no byte goes
    /// unreported.
    pub fn render(&self, chunk: &[u8], address: u64) -> Vec<RenderedInstruction> {
        if chunk.is_empty() {
            return vec![];
        }

        let decoded = self.decoder.decode(chunk, address);
        if !decoded.is_empty() {
            let covered: usize = decoded.iter().map(|insn| insn.bytes.len()).sum();
            if covered != chunk.len() {
                log::debug!(
                    "decoder covered {} of {} bytes at {:#x}",
                    covered,
                    chunk.len(),
                    address
                );
            }
            return decoded;
        }

        log::trace!("falling back to {} at {:#x}", FALLBACK_MNEMONIC, address);
        let endian = self.decoder.mode().endian;
        chunk
            .chunks(WORD_SIZE)
            .enumerate()
            .map(|(i, word)| RenderedInstruction {
                address: address.wrapping_add((i * WORD_SIZE) as u64),
                bytes: word.to_vec(),
                mnemonic: FALLBACK_MNEMONIC.to_string(),
                operands: word_literal(word, endian),
            })
            .collect()
    }
}

fn word_literal(word: &[u8], endian: Endianness) -> String {
    match word.try_into() {
        Ok(word) => {
            let value = match endian {
                Endianness::Big => u32::from_be_bytes(word),
                Endianness::Little => u32::from_le_bytes(word),
            };
            format!("0x{:08X}", value)
        }
        // Partial trailing word
        Err(_) => format!("0x{}", hex::encode(word)),
    }
}
