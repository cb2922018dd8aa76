//! A whole game: state, dice, and the turn loop until someone wins.

use tracing::info;

use crate::core::{
    Color, ColorMap, Dice, GameConfig, GameRng, GameState, SessionError, SetupError,
};
use crate::rules::{MovementEngine, RulesEngine};
use crate::turn::{PlayerDecision, TurnController, TurnReport};

/// One game from setup to the winner.
///
/// # Example
///
/// ```
/// use royal_ur::{ColorMap, FirstEligible, GameConfig, GameSession};
///
/// let config = GameConfig::new().with_seed(7);
/// let names = ColorMap::from_pair("Ann".to_string(), "Bob".to_string());
/// let mut session = GameSession::new(&config, names).unwrap();
///
/// let winner = session.run(&mut FirstEligible).unwrap();
/// assert_eq!(session.winner(), Some(winner));
/// ```
#[derive(Debug)]
pub struct GameSession<D: Dice = GameRng> {
    state: GameState,
    dice: D,
    controller: TurnController<MovementEngine>,
    winner: Option<Color>,
}

impl GameSession<GameRng> {
    /// Load the configured board and seed the dice.
    pub fn new(config: &GameConfig, names: ColorMap<String>) -> Result<Self, SetupError> {
        config.validate()?;
        let board = config.load_board()?;
        let state = GameState::new(board, names, config)?;
        let dice = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = dice.seed(), pieces = config.pieces_per_player, "new game");
        Ok(Self::with_dice(state, dice))
    }

    /// Seed of the dice, for replaying this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.dice.seed()
    }
}

impl<D: Dice> GameSession<D> {
    /// Wrap an existing state with any dice.
    pub fn with_dice(state: GameState, dice: D) -> Self {
        let controller = TurnController::new(MovementEngine);
        let winner = controller.rules().winner(&state);
        Self {
            state,
            dice,
            controller,
            winner,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Play the active color's turn.
    pub fn play_turn<P>(&mut self, decision: &mut P) -> Result<TurnReport, SessionError>
    where
        P: PlayerDecision + ?Sized,
    {
        if let Some(winner) = self.winner {
            return Err(SessionError::GameOver { winner });
        }

        let report = self
            .controller
            .run_turn(&mut self.state, &mut self.dice, decision)?;
        if let Some(winner) = report.winner {
            info!(
                %winner,
                name = self.state.player(winner).name(),
                turns = self.state.turn_number(),
                "winner declared"
            );
            self.winner = Some(winner);
        }
        Ok(report)
    }

    /// Play turns until one color has brought every piece home.
    pub fn run<P>(&mut self, decision: &mut P) -> Result<Color, SessionError>
    where
        P: PlayerDecision + ?Sized,
    {
        loop {
            if let Some(winner) = self.play_turn(decision)?.winner {
                return Ok(winner);
            }
        }
    }
}
