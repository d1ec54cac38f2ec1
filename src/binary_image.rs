use crate::error::PpcBinDiffError;
use crate::result::Result;
use crate::word_diff::diff_span::DiffSpan;
use crate::word_diff::helper::round_up_to_word;
use std::cmp::{max, min};
use std::path::Path;

/// Flat memory image, read whole.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BinaryImage {
    bytes: Vec<u8>,
}

impl BinaryImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PpcBinDiffError::FileNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(PpcBinDiffError::IoError)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes of this image covered by `span`, truncated at the end of the image.
    pub fn chunk(&self, span: &DiffSpan) -> &[u8] {
        let start = min(span.offset(), self.bytes.len());
        let end = min(span.end(), self.bytes.len());
        &self.bytes[start..end]
    }
}

/// The clean and patched images plus the address they are loaded at.
#[derive(Debug, Clone)]
pub struct ImagePair {
    pub clean: BinaryImage,
    pub patched: BinaryImage,
    pub base: u64,
}

impl ImagePair {
    /// Fails when the last byte of the longer image, rounded up to a whole
    /// word, would sit above the 64-bit address space.
    pub fn new(clean: BinaryImage, patched: BinaryImage, base: u64) -> Result<Self> {
        let length = max(clean.len(), patched.len());
        let end = round_up_to_word(length) as u64;
        if base.checked_add(end.saturating_sub(1)).is_none() {
            return Err(PpcBinDiffError::InvalidArgument(format!(
                "base address {:#x} + image length {:#x} overflows 64 bits",
                base, length
            )));
        }
        Ok(Self {
            clean,
            patched,
            base,
        })
    }

    pub fn address_of(&self, span: &DiffSpan) -> u64 {
        self.base + span.offset() as u64
    }
}
