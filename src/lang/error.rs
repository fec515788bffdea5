/// ## Fatal interpreter conditions
///
/// Every failure the engine can hit is one of these. None of them are
/// recoverable; the front end reports the error and ends the process.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow,
    StackOverflow,
    CallStackOverflow,
    LoopStackOverflow,
    DivisionByZero,
    UnknownWord,
    DictionaryFull,
    CompileArenaFull,
    EmptyDefinition,
    UnterminatedDefinition,
    WhileWithoutBegin,
    RepeatWithoutBegin,
    MissingRepeat,
    SemicolonOutsideDefinition,
    Break,
}

impl ErrorCode {
    /// `while`/`repeat` with no loop to act on, or a `while` whose
    /// loop never closes.
    pub fn is_unmatched_loop_control(self) -> bool {
        use ErrorCode::*;
        matches!(self, WhileWithoutBegin | RepeatWithoutBegin | MissingRepeat)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            StackUnderflow => "stack underflow",
            StackOverflow => "stack overflow",
            CallStackOverflow => "call stack overflow",
            LoopStackOverflow => "loop stack overflow",
            DivisionByZero => "division by zero",
            UnknownWord => "unknown word",
            DictionaryFull => "dictionary full",
            CompileArenaFull => "compile arena full",
            EmptyDefinition => "empty definition",
            UnterminatedDefinition => "unterminated definition",
            WhileWithoutBegin => "while without begin",
            RepeatWithoutBegin => "repeat without begin",
            MissingRepeat => "while: missing matching 'repeat'",
            SemicolonOutsideDefinition => "';' outside definition",
            Break => "break",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}
