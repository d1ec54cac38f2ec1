mod round_up_to_word;
mod word_differs;

pub(crate) use round_up_to_word::round_up_to_word;
pub(crate) use word_differs::word_differs;
