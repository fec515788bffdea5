use super::{Cursor, Definition, Dictionary};
use crate::error;
use crate::lang::{Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// Compile `name body... ;` following a `:` and store it.
///
/// Comments inside the body are dropped. The word may vanish again
/// immediately: a random erasure always follows a successful definition.
pub fn compile(cursor: &mut Cursor, dictionary: &mut Dictionary) -> Result<()> {
    let name: std::rc::Rc<str> = match cursor.next() {
        Some(token) => token.to_string().into(),
        None => return Err(error!(EmptyDefinition)),
    };
    if dictionary.is_full() {
        return Err(error!(DictionaryFull));
    }
    dictionary.reserve(name.len() + 1)?;

    let mut body = Vec::new();
    loop {
        match cursor.next() {
            None => return Err(error!(UnterminatedDefinition; &*name)),
            Some(Token::Semicolon) => break,
            Some(Token::CommentOpen) => {
                cursor.skip_comment();
            }
            Some(token) => {
                dictionary.reserve(token.storage_len() + 1)?;
                body.push(token);
            }
        }
    }
    dictionary.reserve(1)?;

    log::debug!("define {} ({} tokens)", name, body.len());
    dictionary.define(Definition::new(name, body.into()))?;
    if let Some(gone) = dictionary.erase_random() {
        log::debug!("vanish {}", gone.name());
    }
    Ok(())
}
