//! The game state machine.
//!
//! ## Rotation
//!
//! ```text
//! RoundStart -> Turn(Mr X) -> Turn(detective 1..N) -> RoundStart | GameOver
//! ```
//!
//! `start_rotation` computes Mr X's legal moves and opens his turn. Each
//! `accept` applies one move, notifies spectators, checks for a verdict and
//! opens the next seat's turn. After the last detective the rotation ends:
//! spectators hear `on_rotation_complete` unless the game just ended.
//!
//! ## Driving
//!
//! Seats with an attached `Player` are asked for their move as soon as
//! their turn opens, so a fully seated game plays a whole rotation inside
//! `start_rotation`. Seats without a player wait for `accept`.
//!
//! ## Ownership
//!
//! The engine alone owns player records, ledgers and the spectator list.
//! Collaborators only ever see `&dyn ScotlandYardView`.

use std::rc::Rc;

use im::Vector;
use rustc_hash::FxHashSet;

use super::player::Player;
use super::spectator::{Spectator, Spectators};
use super::view::ScotlandYardView;
use crate::core::{
    Colour, ConfigError, DoubleMove, GameConfig, GameError, Move, MoveSet, NodeId, RoundSchedule,
    StateError, Ticket, TicketLedger, TicketMove,
};
use crate::graph::TransportGraph;
use crate::rules::{DisclosureTracker, MoveGenerator, Verdict, WinEvaluator};

/// Mr X always sits first.
const MR_X_SEAT: usize = 0;

/// Where the state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Between rotations; `start_rotation` is the only way forward.
    RoundStart,
    /// Waiting for the player in `seat` to move.
    Turn { seat: usize },
    /// Absorbing.
    GameOver,
}

/// A player's live record.
#[derive(Clone, Debug)]
struct Seat {
    colour: Colour,
    location: NodeId,
    tickets: TicketLedger,
}

/// A game in progress.
pub struct ScotlandYard<G: TransportGraph> {
    graph: G,
    rounds: RoundSchedule,
    /// Turn order: Mr X, then detectives in configuration order.
    seats: Vec<Seat>,
    colours: Vec<Colour>,
    controllers: Vec<Option<Box<dyn Player>>>,
    spectators: Spectators,
    round: usize,
    phase: Phase,
    /// Legal moves for the seat whose turn it is.
    pending: MoveSet,
    disclosure: DisclosureTracker,
    evaluator: WinEvaluator,
    winners: FxHashSet<Colour>,
    /// Every broadcast move, in disclosed form.
    history: Vector<Move>,
}

impl<G: TransportGraph> ScotlandYard<G> {
    /// Validate `config` against `graph` and set up round 0.
    ///
    /// If Mr X or every detective is already stuck the game starts over:
    /// a stuck Mr X loses, stuck detectives lose.
    pub fn new(config: GameConfig, graph: G) -> Result<Self, ConfigError> {
        config.validate(&graph)?;

        let mut seats = Vec::with_capacity(1 + config.detectives.len());
        for player in config.players() {
            seats.push(Seat {
                colour: player.colour,
                location: player.location,
                tickets: player.ledger()?,
            });
        }
        let colours: Vec<Colour> = seats.iter().map(|s| s.colour).collect();

        let mut game = Self {
            graph,
            rounds: config.rounds,
            controllers: seats.iter().map(|_| None).collect(),
            disclosure: DisclosureTracker::new(seats[MR_X_SEAT].location),
            seats,
            colours,
            spectators: Spectators::new(),
            round: 0,
            phase: Phase::RoundStart,
            pending: MoveSet::default(),
            evaluator: WinEvaluator::new(),
            winners: FxHashSet::default(),
            history: Vector::new(),
        };

        let verdict = game
            .evaluator
            .at_start(|| game.mr_x_stuck(), || game.detectives_stuck());
        if let Some(verdict) = verdict {
            game.finish(verdict);
        }

        tracing::debug!(
            players = game.seats.len(),
            rounds = game.rounds.len(),
            over = game.is_game_over(),
            "game created"
        );
        Ok(game)
    }

    /// The transport graph.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Legal moves for the seat whose turn it is. Empty between rotations
    /// and after the game ends.
    #[must_use]
    pub fn pending_moves(&self) -> &MoveSet {
        &self.pending
    }

    /// Every move broadcast so far, Mr X's in disclosed form. Cheap to clone.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Where a player really is. Unlike `player_location`, this does not
    /// hide Mr X; it is for hosts and referees, never for detectives.
    #[must_use]
    pub fn true_location(&self, colour: Colour) -> Option<NodeId> {
        self.seat_of(colour).map(|seat| self.seats[seat].location)
    }

    /// Legal moves `colour` would have on the current board, without the
    /// pass substitution. Does not change the game.
    pub fn legal_moves(&self, colour: Colour) -> Result<MoveSet, GameError> {
        let seat = self.seat_of(colour).ok_or(GameError::UnknownPlayer(colour))?;
        Ok(self.moves_for(seat))
    }

    // === Collaborators ===

    /// Let `player` choose moves for `colour`. Replaces any previous player.
    pub fn attach_player(&mut self, colour: Colour, player: Box<dyn Player>) -> Result<(), GameError> {
        let seat = self.seat_of(colour).ok_or(GameError::UnknownPlayer(colour))?;
        self.controllers[seat] = Some(player);
        Ok(())
    }

    /// Take back the player for `colour`, leaving the seat to `accept`.
    pub fn detach_player(&mut self, colour: Colour) -> Result<Option<Box<dyn Player>>, GameError> {
        let seat = self.seat_of(colour).ok_or(GameError::UnknownPlayer(colour))?;
        Ok(self.controllers[seat].take())
    }

    pub fn register_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        Ok(self.spectators.register(spectator)?)
    }

    pub fn unregister_spectator(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), GameError> {
        Ok(self.spectators.unregister(spectator)?)
    }

    #[must_use]
    pub fn spectators(&self) -> &Spectators {
        &self.spectators
    }

    // === Transitions ===

    /// Begin a rotation with Mr X's turn.
    ///
    /// Ends the game (detectives win) instead if Mr X cannot move.
    pub fn start_rotation(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::GameOver => return Err(StateError::GameOver.into()),
            Phase::Turn { .. } => return Err(StateError::RotationInProgress.into()),
            Phase::RoundStart => {}
        }

        let moves = self.moves_for(MR_X_SEAT);
        if moves.is_empty() {
            self.finish(Verdict::DetectivesWin);
            return Ok(());
        }

        tracing::debug!(round = self.round, options = moves.len(), "rotation started");
        self.pending = moves;
        self.phase = Phase::Turn { seat: MR_X_SEAT };
        self.notify(|s, view| s.on_round_started(view, self.round));

        self.drive()
    }

    /// Submit a move for the seat whose turn it is.
    ///
    /// A move outside the pending legal set is rejected with no effect.
    /// After a successful move, any seated players that follow are driven.
    pub fn accept(&mut self, mv: Move) -> Result<(), GameError> {
        self.apply(mv)?;
        self.drive()
    }

    /// Ask attached players for moves until a seat without one is reached
    /// or the rotation ends.
    fn drive(&mut self) -> Result<(), GameError> {
        while let Phase::Turn { seat } = self.phase {
            let Some(mut player) = self.controllers[seat].take() else {
                return Ok(());
            };
            let location = self.seats[seat].location;
            let chosen = player.make_move(&*self, location, &self.pending);
            self.controllers[seat] = Some(player);
            self.apply(chosen)?;
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        let seat = match self.phase {
            Phase::GameOver => return Err(StateError::GameOver.into()),
            Phase::RoundStart => return Err(StateError::NoPendingMove.into()),
            Phase::Turn { seat } => seat,
        };
        let colour = self.seats[seat].colour;

        if !self.pending.contains(&mv) {
            tracing::debug!(%colour, attempted = %mv, "rejected move");
            return Err(GameError::IllegalMove { colour, attempted: mv });
        }
        tracing::debug!(%colour, %mv, round = self.round, "accepted move");

        match mv {
            Move::Ticket(m) => self.play_leg(seat, m)?,
            Move::Double(m) => self.play_double(seat, m)?,
            Move::Pass(_) => self.broadcast(mv),
        }

        if !self.evaluator.is_settled() {
            self.advance(seat);
        }
        Ok(())
    }

    fn play_leg(&mut self, seat: usize, leg: TicketMove) -> Result<(), GameError> {
        self.seats[seat].tickets.remove(leg.ticket)?;
        self.seats[seat].location = leg.destination;

        if seat == MR_X_SEAT {
            let reveal = self.rounds.is_reveal(self.round);
            let shown = self.disclosure.disclose(leg, reveal);
            self.round += 1;
            self.broadcast(Move::Ticket(shown));
        } else {
            self.seats[MR_X_SEAT].tickets.add(leg.ticket)?;
            self.broadcast(Move::Ticket(leg));

            let mr_x = self.seats[MR_X_SEAT].location;
            if let Some(verdict) = self.evaluator.after_detective_move(leg.destination, mr_x, self.round) {
                self.finish(verdict);
            }
        }
        Ok(())
    }

    fn play_double(&mut self, seat: usize, mv: DoubleMove) -> Result<(), GameError> {
        self.seats[seat].tickets.remove(Ticket::Double)?;

        let shown = self.disclosure.preview_double(
            &mv,
            self.rounds.is_reveal(self.round),
            self.rounds.is_reveal(self.round + 1),
        );
        self.broadcast(Move::Double(shown));

        self.play_leg(seat, mv.first)?;
        self.play_leg(seat, mv.second)
    }

    /// Open the next seat's turn, or close the rotation.
    fn advance(&mut self, seat: usize) {
        let next = seat + 1;
        if next < self.seats.len() {
            let mut moves = self.moves_for(next);
            if moves.is_empty() {
                moves.insert(Move::pass(self.seats[next].colour));
            }
            self.pending = moves;
            self.phase = Phase::Turn { seat: next };
        } else {
            self.end_rotation();
        }
    }

    fn end_rotation(&mut self) {
        self.pending.clear();
        self.phase = Phase::RoundStart;

        let verdict = self.evaluator.after_rotation(
            self.round,
            self.rounds.len(),
            || self.mr_x_stuck(),
            || self.detectives_stuck(),
        );
        match verdict {
            Some(verdict) => self.finish(verdict),
            None => self.notify(|s, view| s.on_rotation_complete(view)),
        }
    }

    fn finish(&mut self, verdict: Verdict) {
        if !self.evaluator.settle(verdict) {
            return;
        }
        self.winners = verdict.winners(&self.colours);
        self.phase = Phase::GameOver;
        self.pending.clear();

        tracing::info!(?verdict, round = self.round, "game over");
        self.notify(|s, view| s.on_game_over(view, &self.winners));
    }

    fn broadcast(&mut self, mv: Move) {
        self.history.push_back(mv);
        self.notify(|s, view| s.on_move_made(view, &mv));
    }

    fn notify(&self, f: impl Fn(&dyn Spectator, &dyn ScotlandYardView)) {
        for spectator in self.spectators.iter() {
            f(spectator.as_ref(), self);
        }
    }

    // === Board queries ===

    fn seat_of(&self, colour: Colour) -> Option<usize> {
        self.colours.iter().position(|&c| c == colour)
    }

    fn generator(&self) -> MoveGenerator<'_, G> {
        let detectives = self.seats[MR_X_SEAT + 1..].iter().map(|s| s.location);
        MoveGenerator::new(&self.graph, detectives, self.rounds.remaining(self.round))
    }

    fn moves_for(&self, seat: usize) -> MoveSet {
        let s = &self.seats[seat];
        self.generator().legal_moves(s.colour, s.location, &s.tickets)
    }

    fn mr_x_stuck(&self) -> bool {
        let s = &self.seats[MR_X_SEAT];
        !self.generator().has_moves(s.colour, s.location, &s.tickets)
    }

    fn detectives_stuck(&self) -> bool {
        let generator = self.generator();
        self.seats[MR_X_SEAT + 1..]
            .iter()
            .all(|s| !generator.has_moves(s.colour, s.location, &s.tickets))
    }
}

impl<G: TransportGraph> ScotlandYardView for ScotlandYard<G> {
    fn players(&self) -> &[Colour] {
        &self.colours
    }

    fn current_player(&self) -> Colour {
        match self.phase {
            Phase::Turn { seat } => self.colours[seat],
            Phase::RoundStart | Phase::GameOver => self.colours[MR_X_SEAT],
        }
    }

    fn current_round(&self) -> usize {
        self.round
    }

    fn is_reveal_round(&self) -> bool {
        self.rounds.is_reveal(self.round)
    }

    fn rounds(&self) -> &RoundSchedule {
        &self.rounds
    }

    fn player_location(&self, colour: Colour) -> Option<NodeId> {
        let seat = self.seat_of(colour)?;
        if seat == MR_X_SEAT {
            Some(self.disclosure.disclosed())
        } else {
            Some(self.seats[seat].location)
        }
    }

    fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.seat_of(colour).map(|seat| self.seats[seat].tickets.count(ticket))
    }

    fn winning_players(&self) -> &FxHashSet<Colour> {
        &self.winners
    }

    fn is_game_over(&self) -> bool {
        self.evaluator.is_settled()
    }
}
