use crate::error::PpcBinDiffError;
use crate::result::Result;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTFILE: &str = "patches.asm";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WordWidth {
    Bits32,
    Bits64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Endianness {
    Big,
    Little,
}

/// How the decoder interprets bytes. Also picks the byte order of `.long` fallbacks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DecodeMode {
    pub width: WordWidth,
    pub endian: Endianness,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    DiffReport,
    PatchScript,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub clean: PathBuf,
    pub patched: PathBuf,
    pub base: u64,
    pub mode: DecodeMode,
    pub outfile: PathBuf,
    pub output_format: OutputFormat,
}

impl Default for DecodeMode {
    fn default() -> Self {
        Self {
            width: WordWidth::Bits64,
            endian: Endianness::Big,
        }
    }
}

impl OutputFormat {
    /// Name of one output block, as used in the CLI summary.
    pub fn block_kind(&self) -> &'static str {
        match self {
            Self::DiffReport => "diff",
            Self::PatchScript => "MAKEPATCH",
        }
    }
}

impl Config {
    pub fn new<P: Into<PathBuf>>(clean: P, patched: P) -> Self {
        Self {
            clean: clean.into(),
            patched: patched.into(),
            base: 0,
            mode: DecodeMode::default(),
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            output_format: OutputFormat::DiffReport,
        }
    }
}

/// Accepts `0x`-prefixed hex or plain decimal.
pub fn parse_int(s: &str) -> Result<u64> {
    let s = s.trim().to_ascii_lowercase();
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|why| PpcBinDiffError::InvalidArgument(format!("{:?}: {}", s, why)))
}

impl FromStr for WordWidth {
    type Err = PpcBinDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "32" => Ok(Self::Bits32),
            "64" => Ok(Self::Bits64),
            other => Err(PpcBinDiffError::InvalidArgument(format!(
                "mode must be 32 or 64, got {:?}",
                other
            ))),
        }
    }
}

impl FromStr for Endianness {
    type Err = PpcBinDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" => Ok(Self::Big),
            "little" => Ok(Self::Little),
            other => Err(PpcBinDiffError::InvalidArgument(format!(
                "endian must be big or little, got {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = match self.width {
            WordWidth::Bits32 => "PPC32",
            WordWidth::Bits64 => "PPC64",
        };
        let endian = match self.endian {
            Endianness::Big => "BIG",
            Endianness::Little => "LITTLE",
        };
        write!(f, "{} + {}", width, endian)
    }
}
