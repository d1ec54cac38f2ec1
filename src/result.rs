use crate::error::PpcBinDiffError;

pub type Result<T> = std::result::Result<T, PpcBinDiffError>;
