use super::super::WORD_SIZE;

// NOTE: caller guarantees `offset + WORD_SIZE` is within both buffers
pub fn word_differs(old: &[u8], new: &[u8], offset: usize) -> bool {
    let word = offset..offset + WORD_SIZE;
    old[word.clone()] != new[word]
}
