//! Text algorithms behind the ushell applications
//!
//! Everything here is pure: callers read the input, hand over lines or bytes,
//! and write whatever comes back. Nothing touches the filesystem.

pub mod cut;
pub mod lines;
pub mod paste;
pub mod sort;
pub mod uniq;
pub mod wc;

mod error;
pub use error::RangeError;

pub use cut::{cut_bytes, cut_chars, parse_ranges, Range};
pub use lines::{join_lines, split_byte_lines, split_lines};
pub use paste::{merge_parallel, merge_serial};
pub use sort::{sort_lines, SortOptions};
pub use uniq::{group_adjacent, uniq_lines, UniqMode};
pub use wc::Counts;
