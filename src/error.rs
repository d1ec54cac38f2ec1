use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PpcBinDiffError {
    FileNotFound(PathBuf),
    DecoderUnavailable(String),
    InvalidArgument(String),
    IoError(std::io::Error),
}

impl fmt::Display for PpcBinDiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::DecoderUnavailable(why) => write!(f, "Disassembler unavailable: {}", why),
            Self::InvalidArgument(why) => write!(f, "Invalid argument: {}", why),
            Self::IoError(why) => write!(f, "{}", why),
        }
    }
}

impl std::error::Error for PpcBinDiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(why) => Some(why),
            _ => None,
        }
    }
}
