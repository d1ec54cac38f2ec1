use super::super::WORD_SIZE;

pub fn round_up_to_word(length: usize) -> usize {
    length + (WORD_SIZE - length % WORD_SIZE) % WORD_SIZE
}
