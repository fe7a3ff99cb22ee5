//! Post drafting from formatted commit text.

pub mod generator;
pub mod parse;
pub mod prompt;

pub use generator::DraftGenerator;
pub use parse::parse_drafts;
pub use prompt::{Style, build_thread_prompt, build_tweets_prompt};
