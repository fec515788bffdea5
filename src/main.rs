use clap::Parser;
use evanesque::mach::{self, Limits, Runtime};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A tiny stack language that forgets a random word every time you
/// teach it a new one.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the word eraser, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum data stack depth
    #[arg(long, default_value_t = mach::DATA_STACK)]
    data_stack: usize,
    /// Maximum call depth
    #[arg(long, default_value_t = mach::CALL_STACK)]
    call_stack: usize,
    /// Maximum loop nesting
    #[arg(long, default_value_t = mach::LOOP_STACK)]
    loop_stack: usize,
    /// Maximum number of words in the dictionary
    #[arg(long, default_value_t = mach::DICTIONARY)]
    dictionary: usize,
    /// Bytes of storage for compiled words
    #[arg(long, default_value_t = mach::ARENA)]
    arena: usize,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);
    let limits = Limits {
        data_stack: args.data_stack,
        call_stack: args.call_stack,
        loop_stack: args.loop_stack,
        dictionary: args.dictionary,
        arena: args.arena,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    evanesque::term::main(Runtime::new(limits, rng));
}
