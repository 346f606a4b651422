//! Interactive session state.
//!
//! Holds the currently displayed board, the generation options, and the
//! random source. The current board is owned by the session and replaced
//! wholesale on every `new` or `load`; it is never edited in place.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::generate::{generate_with_stats, GenerateError, GenerateOptions};
use crate::protocol::{encode_notation, parse_notation, Command, OptionName, ALL_OPTIONS};
use crate::render::{render, RenderOptions};

/// Holds the mutable state of the session between commands.
pub struct Session {
    board: Board,
    pub options: GenerateOptions,
    pub render: RenderOptions,
    rng: SmallRng,
    generated: u64,
}

impl Session {
    /// Creates a session and generates its first board.
    ///
    /// With a seed the whole session is reproducible; without one the
    /// random source is seeded from entropy.
    pub fn new(
        options: GenerateOptions,
        render: RenderOptions,
        seed: Option<u64>,
    ) -> Result<Self, GenerateError> {
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        let first = generate_with_stats(&options, &mut rng)?;
        tracing::info!(
            attempts = first.production_attempts,
            "generated initial board"
        );
        Ok(Session {
            board: first.board,
            options,
            render,
            rng,
            generated: 1,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns how many boards this session has generated.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Replaces the current board with a freshly generated one.
    ///
    /// On failure the previous board stays current.
    pub fn regenerate(&mut self) -> Result<&Board, GenerateError> {
        let next = generate_with_stats(&self.options, &mut self.rng)?;
        self.generated += 1;
        tracing::info!(
            board = self.generated,
            production_attempts = next.production_attempts,
            port_attempts = next.port_attempts,
            "generated board"
        );
        self.board = next.board;
        Ok(&self.board)
    }

    /// Returns the current value of a switchable option.
    pub fn option(&self, option: OptionName) -> bool {
        match option {
            OptionName::RandomizeProduction => self.options.randomize_production,
            OptionName::RandomizePorts => self.options.randomize_ports,
            OptionName::SpreadGenericPorts => self.options.spread_generic_ports,
        }
    }

    /// Switches an option. Takes effect on the next generated board.
    pub fn set_option(&mut self, option: OptionName, enabled: bool) {
        let slot = match option {
            OptionName::RandomizeProduction => &mut self.options.randomize_production,
            OptionName::RandomizePorts => &mut self.options.randomize_ports,
            OptionName::SpreadGenericPorts => &mut self.options.spread_generic_ports,
        };
        *slot = enabled;
        tracing::debug!(option = option.id(), enabled, "option changed");
        if self.options.spread_is_inactive() {
            tracing::warn!("spread_generic_ports has no effect while randomize_ports is off");
        }
    }

    /// Dispatches one command. Returns false when the session should end.
    pub fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::New => self.handle_new(out)?,
            Command::Show => self.handle_show(out)?,
            Command::Set { option, enabled } => self.set_option(option, enabled),
            Command::Options => self.handle_options(out)?,
            Command::Json => self.handle_json(out)?,
            Command::Notation => self.handle_notation(out)?,
            Command::Load { notation } => self.handle_load(&notation, out)?,
            Command::Help => self.handle_help(out)?,
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }

    /// Handles `new`: generates and displays a fresh board.
    pub fn handle_new<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.regenerate() {
            tracing::error!("generation failed: {}", e);
            return writeln!(out, "error {}", e);
        }
        self.handle_show(out)
    }

    /// Handles `show`: renders the current board.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render(&self.board, &self.render))
    }

    /// Handles `options`: one `option <id> <on|off>` line per option.
    pub fn handle_options<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for option in ALL_OPTIONS {
            let state = if self.option(option) { "on" } else { "off" };
            let note = match option {
                OptionName::SpreadGenericPorts if self.options.spread_is_inactive() => {
                    "; inactive while ports are fixed"
                }
                _ => "",
            };
            writeln!(
                out,
                "option {} {} ({}{})",
                option.id(),
                state,
                option.description(),
                note
            )?;
        }
        Ok(())
    }

    /// Handles `json`: the current board as a single JSON line.
    pub fn handle_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &self.board)?;
        writeln!(out)
    }

    /// Handles `notation`: the current board in board notation.
    pub fn handle_notation<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "notation {}", encode_notation(&self.board))
    }

    /// Handles `load`: replaces the current board if the notation parses and
    /// the layout is valid.
    pub fn handle_load<W: Write>(&mut self, notation: &str, out: &mut W) -> io::Result<()> {
        let board = match parse_notation(notation) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("failed to parse notation: {}", e);
                return writeln!(out, "error {}", e);
            }
        };
        if let Err(e) = board.validate() {
            tracing::warn!("rejected layout: {}", e);
            return writeln!(out, "error {}", e);
        }
        self.board = board;
        self.handle_show(out)
    }

    /// Handles `help`.
    pub fn handle_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  new                    generate a new board")?;
        writeln!(out, "  show                   redisplay the current board")?;
        writeln!(out, "  set <option> <on|off>  change a generation option")?;
        writeln!(out, "  options                list option values")?;
        writeln!(out, "  json                   print the board as JSON")?;
        writeln!(out, "  notation               print the board notation")?;
        writeln!(out, "  load <notation>        display a board from notation")?;
        writeln!(out, "  quit                   exit")
    }
}
