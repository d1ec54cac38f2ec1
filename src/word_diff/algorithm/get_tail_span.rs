use super::super::diff_span::DiffSpan;
use super::super::helper::round_up_to_word;
use std::cmp::max;

// get_tail_span() covers the length delta past the aligned region.
// The size is rounded up to a whole word so decoding stays word-aligned.
pub fn get_tail_span(old: &[u8], new: &[u8], aligned_length: usize) -> Option<DiffSpan> {
    if old.len() == new.len() {
        return None;
    }

    let size = round_up_to_word(max(old.len(), new.len()) - aligned_length);
    log::trace!(
        "get_tail_span(): offset = {}, size = {}",
        aligned_length,
        size
    );

    if size > 0 {
        Some(DiffSpan::new(aligned_length, size))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::get_tail_span;
    use crate::word_diff::diff_span::DiffSpan;

    #[test]
    fn test_get_tail_span_equal_length() {
        let old = vec![0u8; 6];
        let new = vec![1u8; 6];
        assert_eq!(get_tail_span(&old, &new, 4), None);
    }

    #[test]
    fn test_get_tail_span_rounds_up() {
        let old = vec![0u8; 4];
        let new = vec![0u8; 7];
        assert_eq!(get_tail_span(&old, &new, 4), Some(DiffSpan::new(4, 4)));
    }

    #[test]
    fn test_get_tail_span_includes_unaligned_common_bytes() {
        // min length 6 is aligned down to 4, so bytes 4..6 belong to the tail
        let old = vec![0u8; 6];
        let new = vec![0u8; 9];
        assert_eq!(get_tail_span(&old, &new, 4), Some(DiffSpan::new(4, 8)));
    }
}
