use super::{compile, Cursor, Dictionary, Limits, Stack};
use crate::error;
use crate::lang::{lex, Error, ErrorCode, Operator, Token, Word};
use crate::Cell;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Owns the data, call and loop stacks and the dictionary for the life of
/// the session. A line is handed over with `enter` and then driven with
/// `execute` until it reports `Event::Stopped`.

pub struct Runtime {
    cursor: Option<Cursor>,
    data: Stack<Cell>,
    calls: Stack<Frame>,
    loops: Stack<Cursor>,
    dictionary: Dictionary,
    awaiting_key: bool,
    key_input: Option<Cell>,
    interrupted: bool,
}

#[derive(Debug, Clone)]
struct Frame {
    ret: Cursor,
    loop_base: usize,
}

/// What the front end has to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The line is finished; enter another.
    Stopped,
    /// Cycle budget used up; call `execute` again.
    Running,
    Print(String),
    /// Raw byte, to be flushed at once.
    Emit(u8),
    /// Blocked on `key`; answer with `enter_key`.
    Key,
    Fatal(Error),
}

enum Step {
    Continue,
    Finished,
    Event(Event),
}

impl Runtime {
    pub fn new(limits: Limits, rng: StdRng) -> Runtime {
        Runtime {
            cursor: None,
            data: Stack::new(limits.data_stack, ErrorCode::StackOverflow),
            calls: Stack::new(limits.call_stack, ErrorCode::CallStackOverflow),
            loops: Stack::new(limits.loop_stack, ErrorCode::LoopStackOverflow),
            dictionary: Dictionary::new(limits.dictionary, limits.arena, rng),
            awaiting_key: false,
            key_input: None,
            interrupted: false,
        }
    }

    pub fn with_seed(limits: Limits, seed: u64) -> Runtime {
        Runtime::new(limits, StdRng::seed_from_u64(seed))
    }

    /// Arm the engine with a new line. Only valid once the previous line
    /// has reported `Stopped`. The loop stack is left as it is.
    pub fn enter(&mut self, line: &str) {
        debug_assert!(self.cursor.is_none());
        self.cursor = Some(Cursor::new(lex(line).into()));
        self.awaiting_key = false;
        self.key_input = None;
    }

    /// Answer a pending `key`. `None` means end of input.
    pub fn enter_key(&mut self, ch: Option<u8>) {
        debug_assert!(self.awaiting_key);
        self.key_input = Some(ch.map_or(-1, Cell::from));
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn stack(&self) -> &[Cell] {
        self.data.as_slice()
    }

    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cursor = match self.cursor.take() {
            Some(cursor) => cursor,
            None => {
                self.interrupted = false;
                return Event::Stopped;
            }
        };
        if self.interrupted {
            self.interrupted = false;
            return self.fatal(error!(Break));
        }
        if self.awaiting_key {
            match self.key_input.take() {
                None => {
                    self.cursor = Some(cursor);
                    return Event::Key;
                }
                Some(ch) => {
                    self.awaiting_key = false;
                    if let Err(error) = self.data.push(ch) {
                        return self.fatal(error);
                    }
                }
            }
        }
        for _ in 0..cycles {
            match self.step(&mut cursor) {
                Ok(Step::Continue) => {}
                Ok(Step::Finished) => return Event::Stopped,
                Ok(Step::Event(event)) => {
                    self.cursor = Some(cursor);
                    return event;
                }
                Err(error) => return self.fatal(error),
            }
        }
        self.cursor = Some(cursor);
        Event::Running
    }

    /// Halt the line. Frames of the failed line are dropped; the data and
    /// loop stacks and the dictionary stay as they were.
    fn fatal(&mut self, error: Error) -> Event {
        log::debug!("fatal: {}", error);
        self.cursor = None;
        self.calls.clear();
        self.awaiting_key = false;
        self.key_input = None;
        Event::Fatal(error)
    }

    fn step(&mut self, cursor: &mut Cursor) -> Result<Step> {
        let token = match cursor.next() {
            Some(token) => token,
            None => return Ok(self.ret(cursor)),
        };
        match token {
            Token::Literal(n) => self.data.push(n)?,
            Token::Operator(op) => self.operator(op)?,
            Token::Word(word) => return self.word(word, cursor),
            Token::Colon => compile(cursor, &mut self.dictionary)?,
            Token::Semicolon => return Err(error!(SemicolonOutsideDefinition)),
            Token::CommentOpen => {
                cursor.skip_comment();
            }
            Token::Ident(name) => self.call(&name, cursor)?,
        }
        Ok(Step::Continue)
    }

    /// Pop a frame and put the loop stack top back where the call found
    /// it, even if the word popped markers below that point.
    fn ret(&mut self, cursor: &mut Cursor) -> Step {
        match self.calls.pop() {
            Ok(frame) => {
                log::trace!("return to depth {}", self.calls.len());
                self.loops.restore_len(frame.loop_base);
                cursor.restore(&frame.ret);
                Step::Continue
            }
            Err(_) => Step::Finished,
        }
    }

    fn call(&mut self, name: &str, cursor: &mut Cursor) -> Result<()> {
        let body = match self.dictionary.find(name) {
            Some(word) => word.body().clone(),
            None => return Err(error!(UnknownWord; name)),
        };
        self.calls.push(Frame {
            ret: cursor.save(),
            loop_base: self.loops.len(),
        })?;
        log::trace!("call {} at depth {}", name, self.calls.len());
        *cursor = Cursor::new(body);
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> Result<()> {
        use Operator::*;
        let (lhs, rhs) = self.data.pop_2()?;
        let val = match op {
            Plus => lhs.wrapping_add(rhs),
            Minus => lhs.wrapping_sub(rhs),
            Multiply => lhs.wrapping_mul(rhs),
            Divide => {
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                lhs.wrapping_div(rhs)
            }
            Equal => (lhs == rhs) as Cell,
            Less => (lhs < rhs) as Cell,
            Greater => (lhs > rhs) as Cell,
        };
        self.data.push(val)
    }

    fn word(&mut self, word: Word, cursor: &mut Cursor) -> Result<Step> {
        use Word::*;
        match word {
            Dup => {
                let a = self.data.peek(0)?;
                self.data.push(a)?;
            }
            Drop => {
                self.data.pop()?;
            }
            Swap => {
                let (b, a) = self.data.pop_2()?;
                self.data.push(a)?;
                self.data.push(b)?;
            }
            Rot => {
                let (a, b, c) = self.data.pop_3()?;
                self.data.push(b)?;
                self.data.push(c)?;
                self.data.push(a)?;
            }
            MinusRot => {
                let (a, b, c) = self.data.pop_3()?;
                self.data.push(c)?;
                self.data.push(a)?;
                self.data.push(b)?;
            }
            Over => {
                let b = self.data.peek(1)?;
                self.data.push(b)?;
            }
            Tuck => {
                let (b, a) = self.data.pop_2()?;
                self.data.push(a)?;
                self.data.push(b)?;
                self.data.push(a)?;
            }
            Dot => {
                let n = self.data.pop()?;
                return Ok(Step::Event(Event::Print(format!("{}\n", n))));
            }
            Emit => {
                let ch = self.data.pop()?;
                return Ok(Step::Event(Event::Emit(ch as u8)));
            }
            Key => {
                self.awaiting_key = true;
                return Ok(Step::Event(Event::Key));
            }
            Begin => self.loops.push(cursor.save())?,
            While => self.loop_test(cursor)?,
            Repeat => match self.loops.last() {
                Some(start) => cursor.restore(start),
                None => return Err(error!(RepeatWithoutBegin)),
            },
        }
        Ok(Step::Continue)
    }

    fn loop_test(&mut self, cursor: &mut Cursor) -> Result<()> {
        if self.loops.is_empty() {
            return Err(error!(WhileWithoutBegin));
        }
        if self.data.pop()? != 0 {
            return Ok(());
        }
        self.loops.pop()?;
        let mut depth = 1;
        while let Some(token) = cursor.next() {
            match token {
                Token::CommentOpen => {
                    cursor.skip_comment();
                }
                Token::Word(Word::Begin) => depth += 1,
                Token::Word(Word::Repeat) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(error!(MissingRepeat))
    }
}
