use crate::error;
use crate::lang::{Error, Token};
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A user defined word.
#[derive(Debug, Clone)]
pub struct Definition {
    name: Rc<str>,
    body: Rc<[Token]>,
}

impl Definition {
    pub fn new(name: Rc<str>, body: Rc<[Token]>) -> Definition {
        Definition { name, body }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn body(&self) -> &Rc<[Token]> {
        &self.body
    }
}

/// ## The self-erasing dictionary
///
/// Lookup is a linear scan returning the first match. Names need not be
/// unique. After every definition one entry, chosen uniformly, is removed
/// by swapping the last entry into its slot, so order is not stable.

pub struct Dictionary {
    words: Vec<Definition>,
    capacity: usize,
    arena_capacity: usize,
    arena_used: usize,
    rng: StdRng,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.words.iter().map(|w| w.name())).finish()
    }
}

impl Dictionary {
    pub fn new(capacity: usize, arena_capacity: usize, rng: StdRng) -> Dictionary {
        Dictionary {
            words: Vec::new(),
            capacity,
            arena_capacity,
            arena_used: 0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.words.len() >= self.capacity
    }

    pub fn arena_used(&self) -> usize {
        self.arena_used
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.name())
    }

    pub fn find(&self, name: &str) -> Option<&Definition> {
        self.words.iter().find(|w| w.name() == name)
    }

    /// Charge compiled storage. Bytes are never returned.
    pub fn reserve(&mut self, bytes: usize) -> Result<()> {
        if self.arena_used + bytes > self.arena_capacity {
            return Err(error!(CompileArenaFull));
        }
        self.arena_used += bytes;
        Ok(())
    }

    pub fn define(&mut self, word: Definition) -> Result<()> {
        if self.is_full() {
            return Err(error!(DictionaryFull));
        }
        self.words.push(word);
        Ok(())
    }

    /// Remove one word chosen uniformly at random, if there is one.
    pub fn erase_random(&mut self) -> Option<Definition> {
        if self.words.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.words.len());
        Some(self.words.swap_remove(index))
    }
}
