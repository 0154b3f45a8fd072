//! Writers for the two documents produced per run: the SRT file and the
//! keyword prompt file whose `[Block N]` sections line up with it.

pub mod keywords;
pub mod srt;

pub use keywords::{generate_keywords, write_keywords_file};
pub use srt::{format_timestamp, write_srt_file};
