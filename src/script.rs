//! Line-based pointer event scripts for replaying a session headlessly.
//!
//! One command per line; a word starting with `#` begins a comment:
//!
//! ```text
//! offset 120 40    # surface placement: top left
//! enter
//! color #ff3860    # or a palette name like "yellow"
//! palette 2
//! width 12
//! down 10 10
//! move 50 10
//! up
//! eraser
//! leave
//! clear
//! ```

use crate::draw::{ColorParseError, SurfaceError, SurfaceOffset};
use crate::input::{ControlAction, PointerEvent, Sketchpad};
use crate::util;
use log::debug;
use thiserror::Error;

/// A single parsed script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Feed a pointer event
    Pointer(PointerEvent),
    /// Move the surface on screen (takes effect on the next `enter`)
    Offset(SurfaceOffset),
    /// Dispatch a control action
    Action(ControlAction),
}

/// Errors produced while parsing a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {found}")]
    ArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {source}")]
    InvalidColor {
        line: usize,
        #[source]
        source: ColorParseError,
    },
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, text)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses one line; blank lines and comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let mut words = text.split_whitespace();
    let Some(name) = words.next().filter(|word| !word.starts_with('#')) else {
        return Ok(None);
    };

    // A '#' word ends the line, except for the hex value right after `color`.
    let takes_hex = name.eq_ignore_ascii_case("color");
    let args: Vec<&str> = words
        .enumerate()
        .take_while(|(index, word)| !word.starts_with('#') || (takes_hex && *index == 0))
        .map(|(_, word)| word)
        .collect();

    let expect = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::ArgumentCount {
                line,
                command: name.to_string(),
                expected,
                found: args.len(),
            })
        }
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "down" => {
            expect(2)?;
            let (x, y) = (number(line, args[0])?, number(line, args[1])?);
            Command::Pointer(PointerEvent::Down { x, y })
        }
        "move" => {
            expect(2)?;
            let (x, y) = (number(line, args[0])?, number(line, args[1])?);
            Command::Pointer(PointerEvent::Move { x, y })
        }
        "up" => {
            expect(0)?;
            Command::Pointer(PointerEvent::Up)
        }
        "leave" => {
            expect(0)?;
            Command::Pointer(PointerEvent::Leave)
        }
        "enter" => {
            expect(0)?;
            Command::Pointer(PointerEvent::Enter)
        }
        "offset" => {
            expect(2)?;
            let (top, left) = (number(line, args[0])?, number(line, args[1])?);
            Command::Offset(SurfaceOffset::new(top, left))
        }
        "color" => {
            expect(1)?;
            let color = util::parse_color(args[0])
                .map_err(|source| ScriptError::InvalidColor { line, source })?;
            Command::Action(ControlAction::SelectColor(color))
        }
        "palette" => {
            expect(1)?;
            let index = number::<usize>(line, args[0])?;
            Command::Action(ControlAction::SelectPalette(index))
        }
        "eraser" => {
            expect(0)?;
            Command::Action(ControlAction::SelectEraser)
        }
        "clear" | "trash" => {
            expect(0)?;
            Command::Action(ControlAction::Clear)
        }
        "width" => {
            expect(1)?;
            Command::Action(ControlAction::SetBrushWidth(number(line, args[0])?))
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            });
        }
    };

    Ok(Some(command))
}

fn number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

impl Sketchpad {
    /// Applies one script command.
    pub fn apply(&mut self, command: Command) -> Result<(), SurfaceError> {
        match command {
            Command::Pointer(event) => self.on_pointer(event),
            Command::Offset(offset) => {
                self.surface.set_offset(offset);
                Ok(())
            }
            Command::Action(action) => self.handle_action(action),
        }
    }
}

/// Applies commands in order, stopping at the first surface failure.
pub fn replay(pad: &mut Sketchpad, commands: &[Command]) -> Result<(), SurfaceError> {
    for command in commands {
        debug!("Replaying {:?}", command);
        pad.apply(*command)?;
    }
    Ok(())
}
