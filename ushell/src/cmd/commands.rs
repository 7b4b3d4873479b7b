//! Built-in applications

pub mod cat;
pub mod cd;
pub mod cut;
pub mod echo;
pub mod exit;
pub mod grep;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod paste;
pub mod pwd;
pub mod rm;
pub mod sort;
pub mod tee;
pub mod uniq;
pub mod wc;

use super::Application;

/// Every built-in, in no particular order
pub fn builtins() -> Vec<Box<dyn Application>> {
    vec![
        Box::new(cat::CatApplication),
        Box::new(cd::CdApplication),
        Box::new(cut::CutApplication),
        Box::new(echo::EchoApplication),
        Box::new(exit::ExitApplication),
        Box::new(grep::GrepApplication),
        Box::new(ls::LsApplication),
        Box::new(mkdir::MkdirApplication),
        Box::new(mv::MvApplication),
        Box::new(paste::PasteApplication),
        Box::new(pwd::PwdApplication),
        Box::new(rm::RmApplication),
        Box::new(sort::SortApplication),
        Box::new(tee::TeeApplication),
        Box::new(uniq::UniqApplication),
        Box::new(wc::WcApplication),
    ]
}
