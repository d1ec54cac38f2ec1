use std::fmt;
use std::ops::Range;

type Offset = usize;
type Length = usize;

/// Word-aligned byte range `[offset, offset + size)` where two images differ.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DiffSpan {
    offset: Offset,
    size: Length,
}

impl DiffSpan {
    pub(crate) fn new(offset: Offset, size: Length) -> Self {
        debug_assert_eq!(offset % super::WORD_SIZE, 0);
        debug_assert!(size > 0);
        Self { offset, size }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Length {
        self.size
    }

    pub fn end(&self) -> Offset {
        self.offset + self.size
    }

    pub fn range(&self) -> Range<Offset> {
        self.offset..self.end()
    }
}

impl fmt::Display for DiffSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diff(offset={:#x}, size={:#x})", self.offset, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::DiffSpan;

    #[test]
    fn test_diff_span_display() {
        let span = DiffSpan::new(8, 12);
        assert_eq!(format!("{}", span), "Diff(offset=0x8, size=0xc)");
        assert_eq!(span.range(), 8..20);
    }
}
