use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Popped slots keep their values until overwritten, so `restore_len` can
/// move the top back up over them.

pub struct Stack<T> {
    overflow: ErrorCode,
    capacity: usize,
    len: usize,
    vec: Vec<T>,
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

impl<T: Clone> Stack<T> {
    pub fn new(capacity: usize, overflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow,
            capacity,
            len: 0,
            vec: vec![],
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    fn require(&self, len: usize) -> Result<()> {
        if self.len < len {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec[..self.len]
    }
    /// Move the top to `len`. Growing re-exposes whatever was last
    /// stored in those slots.
    pub fn restore_len(&mut self, len: usize) {
        debug_assert!(len <= self.vec.len());
        self.len = len.min(self.vec.len());
    }
    pub fn clear(&mut self) {
        self.len = 0;
        self.vec.clear();
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::new(self.overflow));
        }
        if self.len < self.vec.len() {
            self.vec[self.len] = val;
        } else {
            self.vec.push(val);
        }
        self.len += 1;
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        self.require(1)?;
        self.len -= 1;
        Ok(self.vec[self.len].clone())
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.require(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn pop_3(&mut self) -> Result<(T, T, T)> {
        self.require(3)?;
        let three = self.pop()?;
        let (one, two) = self.pop_2()?;
        Ok((one, two, three))
    }
    /// Copy of the item `depth` places below the top.
    pub fn peek(&self, depth: usize) -> Result<T> {
        self.require(depth + 1)?;
        Ok(self.vec[self.len - 1 - depth].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_capacity() {
        let mut s: Stack<i32> = Stack::new(2, ErrorCode::LoopStackOverflow);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.is_full());
        assert_eq!(s.push(3).unwrap_err().code(), ErrorCode::LoopStackOverflow);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_pop_order() {
        let mut s: Stack<i32> = Stack::new(8, ErrorCode::StackOverflow);
        for n in 1..=4 {
            s.push(n).unwrap();
        }
        assert_eq!(s.pop_3().unwrap(), (2, 3, 4));
        assert_eq!(s.peek(0).unwrap(), 1);
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.len(), 1, "failed pop_2 must not consume");
        assert_eq!(s.pop().unwrap(), 1);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    }

    #[test]
    fn test_restore_len_reexposes_popped_slots() {
        let mut s: Stack<i32> = Stack::new(8, ErrorCode::LoopStackOverflow);
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.pop().unwrap();
        s.pop().unwrap();
        s.restore_len(1);
        assert_eq!(s.as_slice(), &[1]);
        s.push(3).unwrap();
        s.restore_len(2);
        assert_eq!(s.as_slice(), &[3, 2]);
        s.restore_len(0);
        assert!(s.is_empty());
        s.clear();
        assert!(s.as_slice().is_empty());
    }
}
