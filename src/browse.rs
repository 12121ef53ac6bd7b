//! Interactive viewer: keyboard commands on stdin, screen on stdout.

use crate::loader::Loader;
use crate::render::render_phase;
use crate::state::{Event, Phase};
use std::io::IsTerminal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sort,
    /// 1-based rank as typed by the user.
    Open(usize),
    Close,
    Reload,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "s" | "sort" => Some(Command::Sort),
        "c" | "close" => Some(Command::Close),
        "r" | "reload" | "retry" => Some(Command::Reload),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => match line.parse::<usize>() {
            Ok(rank) if rank > 0 => Some(Command::Open(rank)),
            _ => None,
        },
    }
}

fn draw(phase: &Phase) {
    if std::io::stdout().is_terminal() {
        print!("\x1B[2J\x1B[H");
    }
    println!("{}", render_phase(phase));
}

/// Drive the viewer until `q`, or until end of input once loading settles.
pub async fn run<R>(mut loader: Loader, input: R) -> std::io::Result<Phase>
where
    R: AsyncBufRead + Unpin,
{
    let mut phase = Phase::Idle.apply(loader.start());
    draw(&phase);
    let mut lines = input.lines();
    let mut input_closed = false;

    loop {
        tokio::select! {
            event = loader.next_event() => {
                phase = phase.apply(event);
            }
            line = lines.next_line(), if !input_closed => {
                let Some(line) = line? else {
                    input_closed = true;
                    if !matches!(phase, Phase::Fetching { .. }) {
                        break;
                    }
                    continue;
                };
                let Some(cmd) = parse_command(&line) else {
                    tracing::debug!(input = %line.trim(), "unknown command");
                    continue;
                };
                phase = match cmd {
                    Command::Quit => break,
                    Command::Reload => phase.apply(loader.start()),
                    Command::Sort => phase.apply(Event::ToggleSort),
                    Command::Close => phase.apply(Event::CloseDetail),
                    Command::Open(rank) => phase.apply(Event::Select(rank - 1)),
                };
            }
        }
        draw(&phase);
        if input_closed && !matches!(phase, Phase::Fetching { .. }) {
            break;
        }
    }
    loader.cancel();
    Ok(phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::stub::ScriptedSource;
    use crate::retry::RetryPolicy;
    use crate::sort::hero;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn closed_input_waits_for_load() {
        let source = Arc::new(ScriptedSource::new(vec![
            Err(FetchError::Status(500)),
            Ok(vec![hero(1, "A", 55.0)]),
        ]));
        let loader = Loader::new(source.clone(), RetryPolicy::default());
        let phase = run(loader, &b""[..]).await.unwrap();
        assert!(matches!(&phase, Phase::Ready { heroes, .. } if heroes.len() == 1));
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" s "), Some(Command::Sort));
        assert_eq!(parse_command("R"), Some(Command::Reload));
        assert_eq!(parse_command("3"), Some(Command::Open(3)));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), None);
    }
}
