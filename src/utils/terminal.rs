use crate::components::carousel::{Control, Input, Surface};
use crate::error::{input_error, CarouselResult};
use std::io::{self, Write};
use tracing::error;

/// Surface that prints each render to stdout
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn replace_content(&mut self, markup: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}\n", markup.trim_end()).and_then(|_| stdout.flush()) {
            error!("Failed to write to terminal: {}", e);
        }
    }
}

/// What a line of terminal input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Send(Vec<Input>),
    Quit,
}

/// Parse one line of terminal input.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_input_line(line: &str) -> CarouselResult<Option<HostCommand>> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("prev" | "p" | "left", []) => HostCommand::Send(vec![Input::Activate(Control::Previous)]),
        ("next" | "n" | "right", []) => HostCommand::Send(vec![Input::Activate(Control::Next)]),
        ("touchstart", [x]) => HostCommand::Send(vec![Input::TouchStart { x: parse_x(x)? }]),
        ("touchend", [x]) => HostCommand::Send(vec![Input::TouchEnd { x: parse_x(x)? }]),
        ("swipe", [start, end]) => HostCommand::Send(vec![
            Input::TouchStart { x: parse_x(start)? },
            Input::TouchEnd { x: parse_x(end)? },
        ]),
        ("quit" | "exit" | "q", []) => HostCommand::Quit,
        _ => return Err(input_error(&format!("Unrecognized input: {}", line.trim()))),
    };

    Ok(Some(command))
}

fn parse_x(value: &str) -> CarouselResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| input_error(&format!("Invalid coordinate: {}", value)))
}
