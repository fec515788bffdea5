pub const DATA_STACK: usize = 4096;
pub const CALL_STACK: usize = 4096;
pub const LOOP_STACK: usize = 4096;
pub const DICTIONARY: usize = 256;
pub const ARENA: usize = 65536;

/// ## Capacities of the persistent structures
///
/// `arena` is the number of bytes available for compiled names and bodies
/// over the whole session. Erasing a word does not give its bytes back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub data_stack: usize,
    pub call_stack: usize,
    pub loop_stack: usize,
    pub dictionary: usize,
    pub arena: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            data_stack: DATA_STACK,
            call_stack: CALL_STACK,
            loop_stack: LOOP_STACK,
            dictionary: DICTIONARY,
            arena: ARENA,
        }
    }
}
