//! Command-line parsing
//!
//! This module turns a raw line into runnable stages: sequence and pipeline
//! splitting, tokenizing, glob expansion and redirection.

pub mod glob;
pub mod pipeline;
pub mod quote;
pub mod redirect;

pub use pipeline::parse_command_line;
pub use quote::{tokenize, RedirectOp, Token, Word};
pub use redirect::IoRedirection;
