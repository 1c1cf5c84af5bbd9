//! Terminal front end (native builds)
//!
//! A line-oriented prompt over the same `Game` the web build drives.
//! Progress lives in a file-backed store so it survives restarts.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::game::{Game, SubmitOutcome};
use crate::persistence::ProgressStore;
use crate::platform::{FileStorage, Storage};
use crate::progress::StageState;
use crate::puzzle::View;
use crate::settings::Settings;
use crate::ui::{self, MasterPanel, StageCard, Toast, theme};

#[derive(Parser, Debug)]
#[command(name = "dark-ctf", version, about = "Three-stage cryptography CTF")]
pub struct Cli {
    /// Directory holding progress and settings
    #[arg(long, env = "DARKCTF_DATA_DIR", default_value = ".darkctf")]
    pub data_dir: PathBuf,

    /// Clear progress before starting
    #[arg(long)]
    pub reset: bool,

    /// Show key-material hints under each stage
    #[arg(long)]
    pub hints: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Stages,
    Go(View),
    Submit(String),
    Flags,
    Hint,
    Reset,
    Quit,
    Empty,
    /// `go` with a view name that doesn't exist
    BadView(String),
}

impl Command {
    /// Parse a line. Anything that isn't a command is taken as an answer.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        let body = line.trim_start();
        let (word, rest) = match body.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (body, ""),
        };
        let bare = rest.trim().is_empty();
        match word.to_lowercase().as_str() {
            "help" | "?" if bare => Command::Help,
            "stages" | "ls" if bare => Command::Stages,
            "flags" if bare => Command::Flags,
            "hint" if bare => Command::Hint,
            "reset" if bare => Command::Reset,
            "quit" | "exit" if bare => Command::Quit,
            "go" => match View::parse(rest) {
                Some(view) => Command::Go(view),
                None => Command::BadView(rest.trim().to_string()),
            },
            "submit" => Command::Submit(rest.to_string()),
            _ => Command::Submit(line.to_string()),
        }
    }
}

const HELP: &str = "\
Commands:
  stages              list stages and their status
  go <s1|s2|s3|master> switch view
  submit <answer>     submit an answer (bare text works too)
  flags               show discovered flags
  hint                show the key hint for this stage
  reset               clear all progress
  quit                leave";

pub struct Terminal<S: Storage, W: Write> {
    game: Game<S>,
    settings: Settings,
    out: W,
    color: bool,
}

impl<S: Storage, W: Write> Terminal<S, W> {
    pub fn new(game: Game<S>, settings: Settings, out: W, color: bool) -> Self {
        Self {
            game,
            settings,
            out,
            color,
        }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn paint(&self, hex: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", theme::ansi_fg(hex), text, theme::ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    fn toast(&mut self, toast: &Toast) -> io::Result<()> {
        let title = self.paint(theme::ACCENT_ORANGE, &format!("[{}]", toast.title));
        writeln!(self.out, "{} {}", title, toast.description)
    }

    /// Draw the header and the active view
    pub fn render(&mut self) -> io::Result<()> {
        let header = self.paint(theme::MATRIX_GREEN, "DarkCTF · Crypto");
        writeln!(self.out, "\n{}  {}", header, ui::progress_label(&self.game))?;
        match self.game.active() {
            View::Stage(id) => {
                let card = StageCard::new(&self.game, id, self.settings.show_hints);
                let marker = if card.state == StageState::Solved { "[x]" } else { "[ ]" };
                let title = self.paint(card.color, card.title);
                writeln!(self.out, "{} {} ({})", marker, title, card.difficulty)?;
                writeln!(self.out, "{}", card.prompt)?;
                writeln!(self.out, "{}", card.payload_block)?;
                if let Some(hint) = card.hint {
                    writeln!(self.out, "hint: {}", hint)?;
                }
                match card.state {
                    StageState::Locked => {
                        let msg = self.paint(theme::ACCENT_ORANGE, ui::LOCKED_STAGE_TEXT);
                        writeln!(self.out, "{}", msg)?;
                    }
                    StageState::Solved => {
                        let msg = self.paint(theme::MATRIX_GREEN, "Solved.");
                        writeln!(self.out, "{}", msg)?;
                    }
                    StageState::Unlocked => {}
                }
            }
            View::Master => {
                let heading = self.paint(theme::MATRIX_GREEN, "Master Flag");
                writeln!(self.out, "{}", heading)?;
                match MasterPanel::new(&self.game).flag {
                    Some(flag) => {
                        let flag = self.paint(theme::MATRIX_GREEN, flag);
                        writeln!(self.out, "Congratulations!")?;
                        writeln!(self.out, "{}", flag)?;
                    }
                    None => writeln!(self.out, "{}", ui::LOCKED_MASTER_TEXT)?,
                }
            }
        }
        Ok(())
    }

    fn list_stages(&mut self) -> io::Result<()> {
        for entry in self.game.nav() {
            let lock = if entry.unlocked {
                self.paint(theme::MATRIX_GREEN, "open  ")
            } else {
                self.paint(theme::CYBER_RED, "locked")
            };
            let solved = if entry.solved { " Solved" } else { "" };
            let active = if entry.active { ">" } else { " " };
            writeln!(
                self.out,
                "{} {:<6} {} {}{}",
                active,
                entry.view.as_str(),
                lock,
                entry.label,
                solved
            )?;
        }
        Ok(())
    }

    fn list_flags(&mut self) -> io::Result<()> {
        writeln!(self.out, "Discovered Flags")?;
        for tile in ui::flag_tiles(&self.game) {
            writeln!(self.out, "  {:<12} {}", tile.label, tile.value)?;
        }
        Ok(())
    }

    /// Run one command. Returns `false` once the player quits.
    pub fn handle(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Stages => self.list_stages()?,
            Command::Flags => self.list_flags()?,
            Command::Go(view) => {
                self.game.select(view);
                self.render()?;
            }
            Command::BadView(name) => {
                writeln!(self.out, "Unknown view {:?}; try s1, s2, s3 or master", name)?;
            }
            Command::Hint => match self.game.active().stage() {
                Some(id) => writeln!(self.out, "hint: {}", crate::puzzle::hint(id))?,
                None => writeln!(self.out, "No hints for the master flag.")?,
            },
            Command::Submit(answer) => {
                let outcome = self.game.submit(&answer);
                if let Some(toast) = Toast::for_outcome(&outcome) {
                    self.toast(&toast)?;
                }
                match outcome {
                    SubmitOutcome::NotAStage => {
                        writeln!(self.out, "The master view takes no answers.")?;
                    }
                    SubmitOutcome::Solved {
                        unlocked_next: Some(next),
                        ..
                    } => {
                        writeln!(self.out, "{} unlocked.", next.label())?;
                        self.game.select(next);
                        self.render()?;
                    }
                    _ => {}
                }
            }
            Command::Reset => {
                self.game.reset();
                self.toast(&Toast::reset())?;
                self.render()?;
            }
        }
        Ok(true)
    }

    /// Read commands until EOF or `quit`
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        self.render()?;
        write!(self.out, "> ")?;
        self.out.flush()?;
        for line in input.lines() {
            if !self.handle(Command::parse(&line?))? {
                break;
            }
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Entry point for the native binary
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut storage = FileStorage::open(&cli.data_dir)?;
    let mut settings = Settings::load(&storage);
    if cli.hints && !settings.show_hints {
        settings.show_hints = true;
        settings.save(&mut storage);
    }
    if let Some(url) = settings.health_url() {
        crate::health::spawn(url);
    }

    let mut store = ProgressStore::new(storage);
    if cli.reset {
        store.reset_progress();
    }

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut terminal = Terminal::new(Game::new(store), settings, stdout.lock(), color);
    terminal.run(io::stdin().lock())?;
    Ok(())
}
