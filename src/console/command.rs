use crate::form::{AddressField, CustomerField};
use thiserror::Error;

/// A single console command.
///
/// Positions are parsed from the 1-based numbers the user sees and stored
/// 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    List,
    New,
    Edit(usize),
    Delete(usize),
    Set(CustomerField, String),
    AddAddress,
    RemoveAddress(usize),
    SetAddress(usize, AddressField, String),
    Show,
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a position (numbers start at 1)")]
    BadPosition(String),
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (head, rest) = split_word(line);
        let command = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "list" | "ls" => Self::List,
            "new" => Self::New,
            "edit" => Self::Edit(position(rest, "edit <n>")?),
            "delete" | "rm" => Self::Delete(position(rest, "delete <n>")?),
            "show" => Self::Show,
            "save" => Self::Save,
            "cancel" => Self::Cancel,
            "addr" | "address" => parse_address(rest)?,
            other => match other.parse::<CustomerField>() {
                Ok(field) => Self::Set(field, rest.to_string()),
                Err(_) => return Err(CommandError::Unknown(head.to_string())),
            },
        };
        Ok(Some(command))
    }
}

const ADDR_USAGE: &str = "addr add | addr rm <n> | addr <n> <line1|line2|postcode|city|state> <value>";

fn parse_address(rest: &str) -> Result<Command, CommandError> {
    let (sub, tail) = split_word(rest);
    match sub.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::AddAddress),
        "rm" | "remove" | "delete" => Ok(Command::RemoveAddress(position(tail, ADDR_USAGE)?)),
        "" => Err(CommandError::Usage(ADDR_USAGE)),
        _ => {
            let index = position(sub, ADDR_USAGE)?;
            let (field, value) = split_word(tail);
            let field = field
                .parse::<AddressField>()
                .map_err(|_| CommandError::Usage(ADDR_USAGE))?;
            Ok(Command::SetAddress(index, field, value.to_string()))
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim()),
        None => (s, ""),
    }
}

fn position(s: &str, usage: &'static str) -> Result<usize, CommandError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadPosition(s.to_string())),
    }
}
