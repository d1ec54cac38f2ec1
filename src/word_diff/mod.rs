use crate::word_diff::algorithm::{get_diff_run, get_tail_span};
use crate::word_diff::diff_span::DiffSpan;
use std::cmp::min;

mod algorithm;
pub mod diff_span;
pub(crate) mod helper;

/// Instruction width of the target, in bytes.
pub const WORD_SIZE: usize = 4;

/// Word-granular comparison of two images of the same address space.
#[derive(Debug, Clone, Copy)]
pub struct WordDiff<'a> {
    old: &'a [u8],
    new: &'a [u8],
}

impl<'a> WordDiff<'a> {
    pub fn new(old: &'a [u8], new: &'a [u8]) -> Self {
        Self { old, new }
    }

    /// Length of the common prefix region compared word by word.
    pub fn aligned_length(&self) -> usize {
        let n = min(self.old.len(), self.new.len());
        n - n % WORD_SIZE
    }

    /// Lazily yields differing spans in increasing offset order.
    /// Every call starts over from offset 0.
    pub fn spans(&self) -> DiffSpans<'a> {
        DiffSpans {
            old: self.old,
            new: self.new,
            aligned_length: self.aligned_length(),
            position: 0,
            tail_done: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiffSpans<'a> {
    old: &'a [u8],
    new: &'a [u8],
    aligned_length: usize,
    position: usize,
    tail_done: bool,
}

impl<'a> Iterator for DiffSpans<'a> {
    type Item = DiffSpan;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.aligned_length {
            if let Some(span) = get_diff_run(self.old, self.new, self.position, self.aligned_length)
            {
                self.position = span.end();
                return Some(span);
            }
            self.position += WORD_SIZE;
        }

        if !self.tail_done {
            self.tail_done = true;
            return get_tail_span(self.old, self.new, self.aligned_length);
        }
        None
    }
}
