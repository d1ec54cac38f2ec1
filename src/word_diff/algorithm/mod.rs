mod get_diff_run;
mod get_tail_span;

pub(super) use get_diff_run::get_diff_run;
pub(super) use get_tail_span::get_tail_span;
