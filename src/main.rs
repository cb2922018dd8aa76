//! Royal Game of Ur - terminal game
//!
//! Plays one game between two people sharing a terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use royal_ur::{
    render_board, render_pieces, Color, ColorMap, DecisionContext, FirstEligible, GameConfig,
    GameSession, InvalidSelection, PlayerDecision, TurnEvent, STARTING_PIECES,
};

/// Royal Game of Ur
#[derive(Parser, Debug)]
#[command(name = "royal-ur")]
#[command(about = "Play the Royal Game of Ur in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Board layout JSON file. Defaults to the classic board.
    #[arg(long)]
    board: Option<PathBuf>,

    /// Seed for the dice, to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// Pieces per player
    #[arg(long, default_value_t = STARTING_PIECES)]
    pieces: usize,

    /// Let both players always move their first eligible piece
    #[arg(long)]
    auto: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new().with_pieces(self.pieces);
        if let Some(path) = &self.board {
            config = config.with_board_path(path.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.config();
    config.validate().context("invalid game configuration")?;

    let mut input = io::stdin().lock();
    let names = read_names(&mut input)?;

    let mut session = GameSession::new(&config, names).context("failed to set up the game")?;
    info!(seed = session.seed(), "game ready");

    let mut decision = TerminalDecision::new(input, cli.auto);
    let winner = loop {
        let color = session.state().active_color();
        println!("{}", render_board(session.state()));
        println!("{}, it is your turn ({color}).", session.state().player(color).name());

        let report = session.play_turn(&mut decision)?;
        if decision.closed {
            bail!("input closed before the game finished");
        }
        if let Some(winner) = report.winner {
            break winner;
        }
    };

    println!("{}", render_board(session.state()));
    println!(
        "Congratulations, {}, you have won the game!!",
        session.state().player(winner).name()
    );
    Ok(())
}

/// Log to stderr so records do not mix with the game on stdout.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

/// Print `prompt` and read one trimmed line. `None` at end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask each player for a name, White first. A blank answer or closed input
/// keeps the color's name.
fn read_names(input: &mut impl BufRead) -> Result<ColorMap<String>> {
    let mut names = ColorMap::new(|color: Color| color.to_string());
    for color in Color::ALL {
        let answer =
            prompt_line(input, "What is your name? ").context("failed to read player name")?;
        if let Some(name) = answer.filter(|name| !name.is_empty()) {
            names[color] = name;
        }
    }
    Ok(names)
}

/// Asks the person at the keyboard which piece to move.
struct TerminalDecision<R> {
    input: R,
    auto: bool,
    closed: bool,
}

impl<R: BufRead> TerminalDecision<R> {
    fn new(input: R, auto: bool) -> Self {
        Self {
            input,
            auto,
            closed: false,
        }
    }
}

impl<R: BufRead> PlayerDecision for TerminalDecision<R> {
    fn choose(&mut self, ctx: &DecisionContext<'_>) -> Option<String> {
        print!("{}", render_pieces(ctx.state, ctx.color, ctx.movable));

        if self.auto {
            let choice = FirstEligible.choose(ctx);
            if let Some(symbol) = &choice {
                println!("Which move do you wish to make? {symbol}");
            }
            return choice;
        }

        match prompt_line(&mut self.input, "Which move do you wish to make? ") {
            Ok(Some(line)) => Some(line),
            Ok(None) => {
                self.closed = true;
                None
            }
            Err(err) => {
                debug!(%err, "failed to read selection");
                self.closed = true;
                None
            }
        }
    }

    fn rejected(&mut self, error: &InvalidSelection) {
        println!("Sorry, {error}. Please choose again.");
    }

    fn notify(&mut self, event: &TurnEvent) {
        match event {
            TurnEvent::Rolled { .. }
            | TurnEvent::NoMoves { .. }
            | TurnEvent::KnockedOff { .. }
            | TurnEvent::BonusRoll { .. }
            | TurnEvent::Completed { .. } => println!("{event}"),
            TurnEvent::Moved { .. } => {}
            TurnEvent::Won { color } => debug!(%color, "won"),
        }
    }
}
