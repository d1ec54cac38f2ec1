use super::super::diff_span::DiffSpan;
use super::super::helper::word_differs;
use super::super::WORD_SIZE;

// get_diff_run() should satisfy following requirements:
//   - Return None if the word at `offset` is the same in both buffers
//   - Otherwise maximize `size` of the run of consecutive differing words,
//     never crossing `aligned_length`
pub fn get_diff_run(
    old: &[u8],
    new: &[u8],
    offset: usize,
    aligned_length: usize,
) -> Option<DiffSpan> {
    if offset >= aligned_length || !word_differs(old, new, offset) {
        return None;
    }

    let mut end = offset + WORD_SIZE;
    while end < aligned_length && word_differs(old, new, end) {
        end += WORD_SIZE;
    }
    log::trace!("get_diff_run(): offset = {}, size = {}", offset, end - offset);

    Some(DiffSpan::new(offset, end - offset))
}
