//! Session command parser.
//!
//! Parses incoming line commands from raw text into structured `Command`
//! variants that the session loop can dispatch on.

/// A generation option that can be switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    RandomizeProduction,
    RandomizePorts,
    SpreadGenericPorts,
}

/// All switchable options in display order.
pub const ALL_OPTIONS: [OptionName; 3] = [
    OptionName::RandomizeProduction,
    OptionName::RandomizePorts,
    OptionName::SpreadGenericPorts,
];

impl OptionName {
    /// Returns the option identifier used on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            OptionName::RandomizeProduction => "randomize_production",
            OptionName::RandomizePorts => "randomize_ports",
            OptionName::SpreadGenericPorts => "spread_generic_ports",
        }
    }

    /// Returns the human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            OptionName::RandomizeProduction => "Randomize hex values",
            OptionName::RandomizePorts => "Randomize port types",
            OptionName::SpreadGenericPorts => "Keep 3:1 ports apart",
        }
    }

    /// Parses an option from its identifier.
    pub fn from_id(id: &str) -> Option<OptionName> {
        ALL_OPTIONS.iter().copied().find(|o| o.id() == id)
    }
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate and display a fresh board.
    New,

    /// Redisplay the current board.
    Show,

    /// Switch an option: `set <option> <on|off>`.
    Set { option: OptionName, enabled: bool },

    /// List the current option values.
    Options,

    /// Print the current board as JSON.
    Json,

    /// Print the current board in board notation.
    Notation,

    /// Replace the current board with one given in board notation.
    Load { notation: String },

    /// List the available commands.
    Help,

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "new" | "n" => Some(Command::New),
        "show" => Some(Command::Show),
        "options" => Some(Command::Options),
        "json" => Some(Command::Json),
        "notation" => Some(Command::Notation),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),

        "set" => parse_set(&tokens),
        "load" => parse_load(&tokens),

        other => {
            tracing::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses an on/off switch value.
fn parse_switch(s: &str) -> Option<bool> {
    match s {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Parses `set <option> <on|off>`.
fn parse_set(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        tracing::warn!("malformed set: expected 'set <option> <on|off>'");
        return None;
    }
    let option = match OptionName::from_id(tokens[1]) {
        Some(o) => o,
        None => {
            tracing::warn!("unknown option: {}", tokens[1]);
            return None;
        }
    };
    let enabled = match parse_switch(tokens[2]) {
        Some(b) => b,
        None => {
            tracing::warn!("invalid switch value '{}', expected on or off", tokens[2]);
            return None;
        }
    };
    Some(Command::Set { option, enabled })
}

/// Parses `load <notation>`.
fn parse_load(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        tracing::warn!("malformed load: expected 'load <notation>'");
        return None;
    }
    // Notation is a single token (no spaces) following "load"
    Some(Command::Load {
        notation: tokens[1].to_string(),
    })
}
