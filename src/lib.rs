//! # Evanesque
//!
//! A tiny stack language with a short memory. Every time you define a word,
//! a word already in the dictionary (possibly the new one) vanishes at
//! random.
//!
//! ```text
//! : sq dup * ;
//! 7 sq .
//! 49
//! ```
//!
//! Lines are read from standard input one at a time. The data stack, the
//! dictionary and the loop stack survive from one line to the next; any
//! error ends the session.
//!
//! Built-in words: `+ - * / = < > . emit key dup drop swap rot -rot over
//! tuck`, control flow `begin <cond> while <body> repeat`, definitions
//! `: name body ;` and comments `/* ... */`. Numbers follow C conventions:
//! `42`, `0x2A` and `052` all push forty-two.

/// The only value type on the data stack.
pub type Cell = isize;

pub mod lang;
pub mod mach;
pub mod term;
