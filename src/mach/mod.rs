/*!
## Rust Machine Module

This Rust module is the word compiler, the self-erasing dictionary and the
execution engine.

*/

mod compile;
mod cursor;
mod dictionary;
mod limits;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use compile::compile;
pub use cursor::Cursor;
pub use dictionary::Definition;
pub use dictionary::Dictionary;
pub use limits::Limits;
pub use limits::{ARENA, CALL_STACK, DATA_STACK, DICTIONARY, LOOP_STACK};
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
