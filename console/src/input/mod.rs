pub mod parse;
pub mod prompt;

pub use prompt::Prompter;
