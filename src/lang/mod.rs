/*!
# Rust Language Module

This Rust module turns a line of text into classified tokens and defines
the errors the interpreter can raise.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Operator;
pub use token::Token;
pub use token::Word;
