// src/commands/dispatcher.rs

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use log::debug;
use regex::Regex;

use crate::commands::common::{Command, ParkingOperations};
use crate::core::errors::ParkingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    UnsupportedCommand(String),
    Parking(ParkingError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnsupportedCommand(name) => write!(f, "{} is not a supported command.", name),
            DispatchError::Parking(e) => write!(f, "{}", e),
        }
    }
}

impl Error for DispatchError {}

impl From<ParkingError> for DispatchError {
    fn from(e: ParkingError) -> Self {
        DispatchError::Parking(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    CreateParkingLot,
    Park,
    Leave,
    Status,
    Reset,
    RegistrationNumbersForColour,
    SlotNumbersForColour,
    SlotNumberForRegistration,
}

struct CommandPattern {
    kind: CommandKind,
    args: Option<Regex>,
}

// name, kind, argument pattern
const REGISTRY: &[(&str, CommandKind, Option<&str>)] = &[
    ("create_parking_lot", CommandKind::CreateParkingLot, Some(r"^([0-9]+)$")),
    ("park", CommandKind::Park, Some(r"^(.+[^\s])\s+(\w+)$")),
    ("leave", CommandKind::Leave, Some(r"^([0-9]+)$")),
    ("status", CommandKind::Status, None),
    ("reset", CommandKind::Reset, None),
    ("registration_numbers_for_cars_with_colour", CommandKind::RegistrationNumbersForColour, Some(r"^(\S+)$")),
    ("slot_numbers_for_cars_with_colour", CommandKind::SlotNumbersForColour, Some(r"^(\S+)$")),
    ("slot_number_for_registration_number", CommandKind::SlotNumberForRegistration, Some(r"^(\S+)$")),
];

/// Turns raw input lines into commands and runs them.
pub struct Dispatcher {
    commands: HashMap<&'static str, CommandPattern>,
}

impl Dispatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let mut commands = HashMap::new();
        for &(name, kind, pattern) in REGISTRY {
            let args = pattern.map(Regex::new).transpose()?;
            commands.insert(name, CommandPattern { kind, args });
        }
        Ok(Self { commands })
    }

    /// Splits `input` at the first space into a command name and an argument
    /// string, then extracts the positional arguments. Arguments the pattern
    /// cannot find are passed on empty so the operation reports them.
    pub fn parse(&self, input: &str) -> Result<Command, DispatchError> {
        let (name, arg_str) = input.split_once(' ').unwrap_or((input, ""));

        let pattern = self.commands
            .get(name)
            .ok_or_else(|| DispatchError::UnsupportedCommand(name.to_string()))?;

        let args: Vec<String> = match &pattern.args {
            Some(re) => match re.captures(arg_str) {
                Some(caps) => caps
                    .iter()
                    .skip(1)
                    .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect(),
                None => {
                    debug!("Arguments {:?} do not match the {} pattern", arg_str, name);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let arg = |i: usize| args.get(i).cloned().unwrap_or_default();

        let command = match pattern.kind {
            CommandKind::CreateParkingLot => Command::CreateParkingLot { capacity: arg(0) },
            CommandKind::Park => Command::Park { registration: arg(0), colour: arg(1) },
            CommandKind::Leave => Command::Leave { slot: arg(0) },
            CommandKind::Status => Command::Status,
            CommandKind::Reset => Command::Reset,
            CommandKind::RegistrationNumbersForColour => Command::RegistrationNumbersForCarsWithColour { colour: arg(0) },
            CommandKind::SlotNumbersForColour => Command::SlotNumbersForCarsWithColour { colour: arg(0) },
            CommandKind::SlotNumberForRegistration => Command::SlotNumberForRegistrationNumber { registration: arg(0) },
        };
        Ok(command)
    }

    pub fn dispatch<P: ParkingOperations + ?Sized>(&self, input: &str, app: &mut P) -> Result<String, DispatchError> {
        let command = self.parse(input)?;
        Ok(command.execute(app)?)
    }
}
