extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{BufRead, ErrorKind, IsTerminal, Read, StdinLock, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run a session on stdin/stdout and exit the process when it ends.
///
/// Any interpreter error is printed to stderr and exits with status 1.
pub fn main(runtime: Runtime) {
    let busy = Arc::new(AtomicBool::new(false));
    let interrupted = Arc::new(AtomicBool::new(false));
    let busy_moved = busy.clone();
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        if busy_moved.load(Ordering::SeqCst) {
            int_moved.store(true, Ordering::SeqCst);
        } else {
            std::process::exit(130);
        }
    })
    .expect("Error setting Ctrl-C handler");
    let status = match main_loop(runtime, busy, interrupted) {
        Ok(None) => 0,
        Ok(Some(error)) => {
            report(&error.to_string());
            1
        }
        Err(error) => {
            report(&error.to_string());
            1
        }
    };
    std::process::exit(status);
}

fn main_loop(
    mut runtime: Runtime,
    busy: Arc<AtomicBool>,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<Option<Error>> {
    let mut input = Input::new()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => {
                out.flush()?;
                busy.store(false, Ordering::SeqCst);
                match input.read_line()? {
                    Some(line) => runtime.enter(&line),
                    None => break,
                }
                busy.store(true, Ordering::SeqCst);
            }
            Event::Running => {}
            Event::Print(s) => {
                out.write_all(s.as_bytes())?;
            }
            Event::Emit(ch) => {
                out.write_all(&[ch])?;
                out.flush()?;
            }
            Event::Key => {
                out.flush()?;
                busy.store(false, Ordering::SeqCst);
                let ch = input.read_key()?;
                busy.store(true, Ordering::SeqCst);
                runtime.enter_key(ch);
            }
            Event::Fatal(error) => {
                out.flush()?;
                return Ok(Some(error));
            }
        }
    }
    out.flush()?;
    Ok(None)
}

fn report(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}", Style::new().bold().paint(message));
    } else {
        eprintln!("{}", message);
    }
}

/// A line from the prompt, `None` at end of input, or the status to exit
/// with when the user interrupts.
fn accept(result: ReadResult) -> Result<Option<String>, i32> {
    match result {
        ReadResult::Input(line) => Ok(Some(line)),
        ReadResult::Signal(Signal::Interrupt) => Err(130),
        ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
    }
}

/// Where lines and `key` bytes come from.
///
/// A terminal gets line editing. Anything else is read through one
/// buffered reader so `key` sees exactly what follows the current line.
enum Input {
    Terminal(Interface<DefaultTerminal>),
    Piped(StdinLock<'static>),
}

impl Input {
    fn new() -> std::io::Result<Input> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            let interface = Interface::new("evanesque")?;
            interface.set_report_signal(Signal::Interrupt, true);
            Ok(Input::Terminal(interface))
        } else {
            Ok(Input::Piped(stdin.lock()))
        }
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        match self {
            Input::Terminal(interface) => match accept(interface.read_line()?) {
                Ok(Some(line)) => {
                    interface.add_history_unique(line.clone());
                    Ok(Some(line))
                }
                Ok(None) => Ok(None),
                Err(status) => std::process::exit(status),
            },
            Input::Piped(stdin) => {
                let mut buf = Vec::new();
                if stdin.read_until(b'\n', &mut buf)? == 0 {
                    return Ok(None);
                }
                match String::from_utf8(buf) {
                    Ok(line) => Ok(Some(line)),
                    Err(error) => {
                        log::warn!("invalid UTF-8 on input replaced with U+FFFD");
                        Ok(Some(String::from_utf8_lossy(error.as_bytes()).into_owned()))
                    }
                }
            }
        }
    }

    fn read_key(&mut self) -> std::io::Result<Option<u8>> {
        let mut byte = [0u8];
        let read = match self {
            Input::Terminal(_) => std::io::stdin().lock().read_exact(&mut byte),
            Input::Piped(stdin) => stdin.read_exact(&mut byte),
        };
        match read {
            Ok(()) => Ok(Some(byte[0])),
            Err(error) if error.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_prompt_results() {
        assert_eq!(
            accept(ReadResult::Input("1 .".to_string())),
            Ok(Some("1 .".to_string()))
        );
        assert_eq!(accept(ReadResult::Eof), Ok(None));
        assert_eq!(accept(ReadResult::Signal(Signal::Interrupt)), Err(130));
        assert_eq!(accept(ReadResult::Signal(Signal::Quit)), Ok(None));
    }
}
