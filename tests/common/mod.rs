use evanesque::mach::{Event, Limits, Runtime};

pub fn runtime() -> Runtime {
    Runtime::with_seed(Limits::default(), 0x5eed)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Fatal(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Emit(ch) => {
                s.push(char::from(*ch));
            }
            Event::Key => {
                runtime.enter_key(None);
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Run each line in turn, as the front end would. Callers only put a
/// failing line last, since the front end stops at the first error.
pub fn session(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        runtime.enter(line);
        s.push_str(&exec(runtime));
    }
    s
}
