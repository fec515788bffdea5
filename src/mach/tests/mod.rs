use crate::lang::{lex, ErrorCode};
use crate::mach::{Definition, Event, Limits, Runtime};

mod stack_test;

fn runtime() -> Runtime {
    Runtime::with_seed(Limits::default(), 1)
}

fn run(runtime: &mut Runtime) -> String {
    run_input(runtime, b"")
}

fn run_input(runtime: &mut Runtime, input: &[u8]) -> String {
    let mut input = input.iter().copied();
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {
                s.push_str("\nExecution cycles exceeded.\n");
                break;
            }
            Event::Print(ps) => s.push_str(&ps),
            Event::Emit(ch) => s.push(ch as char),
            Event::Key => runtime.enter_key(input.next()),
            Event::Fatal(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        }
    }
    s
}

fn fatal(runtime: &mut Runtime) -> Option<ErrorCode> {
    loop {
        match runtime.execute(5000) {
            Event::Stopped | Event::Running => return None,
            Event::Fatal(error) => return Some(error.code()),
            Event::Key => runtime.enter_key(None),
            Event::Print(_) | Event::Emit(_) => {}
        }
    }
}

fn preload(runtime: &mut Runtime, name: &str, body: &str) {
    runtime
        .dictionary_mut()
        .define(Definition::new(name.into(), lex(body).into()))
        .unwrap();
}
