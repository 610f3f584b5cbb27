//! Chat command parsing.
//!
//! - [`parser::parse_command`] — `/token rest` → [`ParsedMessage`]
//! - [`translate::parse_translate_args`] — `to <language> <text>`

pub mod parser;
pub mod translate;

pub use parser::{ParsedMessage, SlashCommand, parse_command};
pub use translate::{TranslateArgs, parse_translate_args};
