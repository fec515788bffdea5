use crate::Cell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Token::field_less()
        .into_iter()
        .chain(Word::ALL.iter().map(|w| Token::Word(*w)))
        .chain(Operator::ALL.iter().map(|op| Token::Operator(*op)))
        .map(|t| (t.reserved_name(), t))
        .collect();
);

pub const COMMENT_CLOSE: &str = "*/";

/// A whitespace delimited token, classified once at lex time.
///
/// Built-ins win over numbers and numbers win over dictionary words, so
/// the classification never changes after a line is lexed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Literal(Cell),
    Word(Word),
    Operator(Operator),
    Ident(Rc<str>),
    Colon,
    Semicolon,
    CommentOpen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    fn field_less() -> Vec<Token> {
        vec![Token::Colon, Token::Semicolon, Token::CommentOpen]
    }

    fn reserved_name(&self) -> &'static str {
        match self {
            Token::Word(w) => w.name(),
            Token::Operator(op) => op.name(),
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::CommentOpen => "/*",
            Token::Literal(_) | Token::Ident(_) => "",
        }
    }

    pub fn is_comment_close(&self) -> bool {
        matches!(self, Token::Ident(s) if &**s == COMMENT_CLOSE)
    }

    /// Bytes this token occupies in compiled word storage.
    pub fn storage_len(&self) -> usize {
        match self {
            Token::Ident(s) => s.len(),
            Token::Literal(_) => self.to_string().len(),
            _ => self.reserved_name().len(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Literal(n) => write!(f, "{}", n),
            Token::Ident(s) => write!(f, "{}", s),
            _ => write!(f, "{}", self.reserved_name()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Begin,
    Dot,
    Drop,
    Dup,
    Emit,
    Key,
    MinusRot,
    Over,
    Repeat,
    Rot,
    Swap,
    Tuck,
    While,
}

impl Word {
    const ALL: [Word; 13] = [
        Word::Begin,
        Word::Dot,
        Word::Drop,
        Word::Dup,
        Word::Emit,
        Word::Key,
        Word::MinusRot,
        Word::Over,
        Word::Repeat,
        Word::Rot,
        Word::Swap,
        Word::Tuck,
        Word::While,
    ];

    pub fn name(self) -> &'static str {
        use Word::*;
        match self {
            Begin => "begin",
            Dot => ".",
            Drop => "drop",
            Dup => "dup",
            Emit => "emit",
            Key => "key",
            MinusRot => "-rot",
            Over => "over",
            Repeat => "repeat",
            Rot => "rot",
            Swap => "swap",
            Tuck => "tuck",
            While => "while",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Less,
    Greater,
}

impl Operator {
    const ALL: [Operator; 7] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equal,
        Operator::Less,
        Operator::Greater,
    ];

    pub fn name(self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Equal => "=",
            Less => "<",
            Greater => ">",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
