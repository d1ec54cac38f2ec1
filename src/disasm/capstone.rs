use super::{Decoder, RenderedInstruction};
use crate::config::{DecodeMode, Endianness, WordWidth};
use crate::error::PpcBinDiffError;
use crate::result::Result;
use capstone::{Arch, Capstone, Endian, Mode, NO_EXTRA_MODE};

pub struct CapstoneDecoder {
    cs: Capstone,
    mode: DecodeMode,
}

fn cs_mode(mode: DecodeMode) -> (Mode, Endian) {
    let m = match mode.width {
        WordWidth::Bits32 => Mode::Mode32,
        WordWidth::Bits64 => Mode::Mode64,
    };
    let endian = match mode.endian {
        Endianness::Big => Endian::Big,
        Endianness::Little => Endian::Little,
    };
    (m, endian)
}

impl CapstoneDecoder {
    pub fn new(mode: DecodeMode) -> Result<Self> {
        let (m, endian) = cs_mode(mode);
        let cs = Capstone::new_raw(Arch::PPC, m, NO_EXTRA_MODE, Some(endian))
            .map_err(|why| PpcBinDiffError::DecoderUnavailable(why.to_string()))?;
        log::debug!("capstone initialized ({})", mode);
        Ok(Self { cs, mode })
    }
}

impl Decoder for CapstoneDecoder {
    fn decode(&self, chunk: &[u8], address: u64) -> Vec<RenderedInstruction> {
        let insns = match self.cs.disasm_all(chunk, address) {
            Ok(insns) => insns,
            Err(why) => {
                log::trace!("disasm_all({:#x}) failed: {}", address, why);
                return vec![];
            }
        };
        insns
            .iter()
            .map(|insn| RenderedInstruction {
                address: insn.address(),
                bytes: insn.bytes().to_vec(),
                mnemonic: insn.mnemonic().unwrap_or("").to_string(),
                operands: insn.op_str().unwrap_or("").to_string(),
            })
            .collect()
    }

    fn mode(&self) -> DecodeMode {
        self.mode
    }
}
