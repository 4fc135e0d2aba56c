//! End-to-end game scenarios.
//!
//! These tests drive the state machine through `start_rotation`/`accept`
//! on small hand-built graphs and check tickets, rounds, disclosure,
//! spectator notifications and verdicts.

use std::collections::VecDeque;
use std::rc::Rc;

use rust_pursuit::core::{
    Colour, ConfigError, GameConfig, GameError, Move, MoveSet, NodeId, PlayerConfig, StateError, Ticket,
    TicketMove, Transport,
};
use rust_pursuit::engine::{
    EventLog, Phase, Player, ScotlandYard, ScotlandYardView, Spectator, SpectatorEvent,
};
use rust_pursuit::graph::AdjacencyGraph;

const X: Colour = Colour::Black;
const BLUE: Colour = Colour::Blue;
const RED: Colour = Colour::Red;

fn n(id: u32) -> NodeId {
    NodeId::new(id)
}

fn leg(colour: Colour, ticket: Ticket, to: u32) -> TicketMove {
    TicketMove::new(colour, ticket, n(to))
}

/// 1 - 2 - 3, taxi only.
fn three_node_path() -> AdjacencyGraph {
    AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Taxi)
        .build()
}

fn watched(game: &mut ScotlandYard<AdjacencyGraph>) -> Rc<EventLog> {
    let log = Rc::new(EventLog::new());
    game.register_spectator(log.clone()).unwrap();
    log
}

fn sorted_winners(game: &ScotlandYard<AdjacencyGraph>) -> Vec<Colour> {
    let mut winners: Vec<_> = game.winning_players().iter().copied().collect();
    winners.sort();
    winners
}

/// Plays a fixed script of moves.
struct Scripted(VecDeque<Move>);

impl Player for Scripted {
    fn make_move(&mut self, _view: &dyn ScotlandYardView, _location: NodeId, moves: &MoveSet) -> Move {
        let mv = self.0.pop_front().expect("script ran out");
        assert!(moves.contains(&mv), "scripted move {mv} not offered");
        mv
    }
}

// =============================================================================
// Specified Scenarios
// =============================================================================

/// Scenario A: Mr X's only move is Taxi to 2; the detective follows and
/// captures in round 1.
#[test]
fn test_scenario_a_capture_after_reveal() {
    let config = GameConfig::new(vec![true, true], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 2, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    let expected: MoveSet = [Move::ticket(X, Ticket::Taxi, n(2))].into_iter().collect();
    assert_eq!(game.pending_moves(), &expected);

    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.player_location(X), Some(n(2)));

    let expected: MoveSet = [Move::ticket(BLUE, Ticket::Taxi, n(2))].into_iter().collect();
    assert_eq!(game.pending_moves(), &expected);

    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(2))).unwrap();
    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE]);
    assert_eq!(game.phase(), Phase::GameOver);

    assert_eq!(
        log.events(),
        vec![
            SpectatorEvent::RoundStarted(0),
            SpectatorEvent::MoveMade(Move::ticket(X, Ticket::Taxi, n(2))),
            SpectatorEvent::MoveMade(Move::ticket(BLUE, Ticket::Taxi, n(2))),
            SpectatorEvent::GameOver(vec![BLUE]),
        ]
    );
}

/// Scenario B: a single hidden round. Mr X's location stays disclosed at
/// his start node and he wins when the schedule runs out.
#[test]
fn test_scenario_b_hidden_round_then_exhaustion() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Taxi)
        .link(3, 4, Transport::Bus)
        .build();
    // Blue can only take the bus away from Mr X.
    let config = GameConfig::new(vec![false], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 0, 1, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();

    assert_eq!(game.player_location(X), Some(n(1)));
    assert_eq!(game.true_location(X), Some(n(2)));
    assert_eq!(
        log.moves(),
        vec![Move::ticket(X, Ticket::Taxi, n(1))],
        "hidden move shows the ticket but not the destination"
    );
    assert!(!game.is_game_over());

    game.accept(Move::ticket(BLUE, Ticket::Bus, n(4))).unwrap();
    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![X]);
    assert!(!log.events().contains(&SpectatorEvent::RotationComplete));
}

/// Scenario B variant: the detective can reach Mr X's hidden node and does.
#[test]
fn test_scenario_b_capture_on_hidden_round() {
    let config = GameConfig::new(vec![false], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 2, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(2))).unwrap();

    assert_eq!(sorted_winners(&game), vec![BLUE]);
}

/// Scenario C: Taxi then Bus as one double move, each leg disclosed by its
/// own round's flag.
#[test]
fn test_scenario_c_double_move() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Bus)
        .link(3, 4, Transport::Taxi)
        .link(5, 6, Transport::Taxi)
        .build();
    let config = GameConfig::new(vec![false, true, false], PlayerConfig::mr_x(1, 1, 1, 0, 0, 1))
        .with_detective(PlayerConfig::detective(BLUE, 6, 4, 0, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    let double = Move::double(X, leg(X, Ticket::Taxi, 2), leg(X, Ticket::Bus, 3));
    assert!(game.pending_moves().contains(&double));

    game.accept(double).unwrap();

    assert_eq!(game.current_round(), 2);
    assert_eq!(game.player_location(X), Some(n(3)));
    for ticket in [Ticket::Taxi, Ticket::Bus, Ticket::Double] {
        assert_eq!(game.player_tickets(X, ticket), Some(0), "{ticket} not spent");
    }
    assert_eq!(
        log.moves(),
        vec![
            Move::double(X, leg(X, Ticket::Taxi, 1), leg(X, Ticket::Bus, 3)),
            Move::ticket(X, Ticket::Taxi, n(1)),
            Move::ticket(X, Ticket::Bus, n(3)),
        ]
    );

    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(5))).unwrap();
    let round_starts: Vec<_> = log
        .events()
        .into_iter()
        .filter(|e| matches!(e, SpectatorEvent::RoundStarted(_)))
        .collect();
    assert_eq!(round_starts, vec![SpectatorEvent::RoundStarted(0)], "one announcement per rotation");

    // Blue's taxi ticket lets Mr X continue to 4.
    assert_eq!(game.player_tickets(X, Ticket::Taxi), Some(1));
    assert!(!game.is_game_over());
    assert_eq!(log.events().last(), Some(&SpectatorEvent::RotationComplete));
}

/// Scenario D: both detectives run dry during the rotation. The game ends
/// at rotation end, not when the first one gets stuck.
#[test]
fn test_scenario_d_detective_stalemate() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Taxi)
        .link(4, 5, Transport::Taxi)
        .link(7, 8, Transport::Taxi)
        .build();
    let config = GameConfig::new(vec![false; 5], PlayerConfig::mr_x(1, 5, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 5, 1, 0, 0))
        .with_detective(PlayerConfig::detective(RED, 8, 1, 0, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(4))).unwrap();
    assert!(!game.is_game_over(), "Red can still move");

    game.accept(Move::ticket(RED, Ticket::Taxi, n(7))).unwrap();
    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![X]);
}

// =============================================================================
// Turn Order and Passing
// =============================================================================

/// A stuck detective is offered exactly one pass; passing changes nothing.
#[test]
fn test_stuck_detective_passes() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Taxi)
        .link(4, 5, Transport::Bus)
        .link(7, 8, Transport::Taxi)
        .build();
    let config = GameConfig::new(vec![false; 4], PlayerConfig::mr_x(1, 4, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 5, 3, 0, 0))
        .with_detective(PlayerConfig::detective(RED, 8, 3, 0, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();

    let pass: MoveSet = [Move::pass(BLUE)].into_iter().collect();
    assert_eq!(game.current_player(), BLUE);
    assert_eq!(game.pending_moves(), &pass);
    assert!(game.legal_moves(BLUE).unwrap().is_empty());

    game.accept(Move::pass(BLUE)).unwrap();
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.player_tickets(BLUE, Ticket::Taxi), Some(3));
    assert_eq!(game.current_player(), RED);

    game.accept(Move::ticket(RED, Ticket::Taxi, n(7))).unwrap();
    assert!(!game.is_game_over());
    assert!(log.moves().contains(&Move::pass(BLUE)));
}

/// The round index only moves on Mr X's legs.
#[test]
fn test_round_advances_only_on_mr_x() {
    // Blue sits on an isolated node and passes every turn.
    let config = GameConfig::new(vec![false; 6], PlayerConfig::mr_x(1, 6, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 4, 0, 0))
        .with_detective(PlayerConfig::detective(RED, 5, 6, 0, 0));
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(5, 6, Transport::Taxi)
        .node(3)
        .build();
    let mut game = ScotlandYard::new(config, graph).unwrap();

    for rotation in 0..3 {
        game.start_rotation().unwrap();
        assert_eq!(game.current_round(), rotation);

        let mr_x_move = *game.pending_moves().iter().next().unwrap();
        game.accept(mr_x_move).unwrap();
        assert_eq!(game.current_round(), rotation + 1);

        game.accept(Move::pass(BLUE)).unwrap();
        assert_eq!(game.current_round(), rotation + 1);

        let red_move = *game.pending_moves().iter().next().unwrap();
        game.accept(red_move).unwrap();
        assert_eq!(game.current_round(), rotation + 1);
    }
}

// =============================================================================
// Starting Positions
// =============================================================================

/// Mr X with no way out loses before the first rotation.
#[test]
fn test_mr_x_stuck_at_start() {
    let config = GameConfig::new(vec![false, false], PlayerConfig::mr_x(1, 0, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 2, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();

    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE]);
    assert_eq!(
        game.start_rotation(),
        Err(GameError::IllegalState(StateError::GameOver))
    );
}

/// Detectives who cannot move at all lose before the first rotation.
#[test]
fn test_detectives_stuck_at_start() {
    let config = GameConfig::new(vec![false, false], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 0, 0, 0));
    let game = ScotlandYard::new(config, three_node_path()).unwrap();

    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![X]);
}

/// Mr X boxed in by detectives cannot move.
#[test]
fn test_mr_x_surrounded_at_start() {
    let config = GameConfig::new(vec![false, false], PlayerConfig::mr_x(2, 4, 4, 4, 4, 2))
        .with_detective(PlayerConfig::detective(BLUE, 1, 2, 0, 0))
        .with_detective(PlayerConfig::detective(RED, 3, 2, 0, 0));
    let game = ScotlandYard::new(config, three_node_path()).unwrap();

    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE, RED]);
}

// =============================================================================
// Game Over
// =============================================================================

/// Nothing mutates once the game is over, and game over fires once.
#[test]
fn test_game_over_is_absorbing() {
    let config = GameConfig::new(vec![true, true], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 2, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(2))).unwrap();

    assert_eq!(
        game.accept(Move::ticket(BLUE, Ticket::Taxi, n(1))),
        Err(GameError::IllegalState(StateError::GameOver))
    );
    assert_eq!(
        game.start_rotation(),
        Err(GameError::IllegalState(StateError::GameOver))
    );

    let game_overs = log
        .events()
        .iter()
        .filter(|e| matches!(e, SpectatorEvent::GameOver(_)))
        .count();
    assert_eq!(game_overs, 1);
}

/// When Mr X and every detective are stuck at once, Mr X loses.
#[test]
fn test_both_sides_stuck_after_rotation() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Bus)
        .link(5, 6, Transport::Taxi)
        .build();
    let config = GameConfig::new(vec![false; 3], PlayerConfig::mr_x(1, 0, 1, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 5, 1, 0, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Bus, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(6))).unwrap();

    // Mr X holds Blue's taxi ticket but only a bus leaves node 2.
    assert!(game.legal_moves(X).unwrap().is_empty());
    assert!(game.legal_moves(BLUE).unwrap().is_empty());
    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE]);
}

/// A setup whose ticket transfers could overflow Mr X's ledger is refused.
#[test]
fn test_ticket_overflow_rejected_at_construction() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(3, 4, Transport::Bus)
        .build();
    let config = GameConfig::new(vec![false; 3], PlayerConfig::mr_x(1, 3, u32::MAX, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 0, 3, 0));

    let err = ScotlandYard::new(config, graph).err();
    assert_eq!(err, Some(ConfigError::TicketOverflow { ticket: Ticket::Bus }));
}

/// Mr X out of tickets after a rotation loses at rotation end.
#[test]
fn test_mr_x_stuck_after_rotation() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Bus)
        .link(2, 3, Transport::Taxi)
        .link(5, 6, Transport::Underground)
        .build();
    let config = GameConfig::new(vec![false; 4], PlayerConfig::mr_x(1, 0, 1, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 6, 0, 0, 3));
    let mut game = ScotlandYard::new(config, graph).unwrap();

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Bus, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Underground, n(5))).unwrap();

    // Mr X now holds one underground ticket and no way to use it.
    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE]);
}

// =============================================================================
// Spectators
// =============================================================================

/// Full notification sequence for a rotation that does not end the game.
#[test]
fn test_notification_order() {
    let graph = AdjacencyGraph::builder()
        .link(1, 2, Transport::Taxi)
        .link(2, 3, Transport::Taxi)
        .link(3, 4, Transport::Taxi)
        .link(4, 5, Transport::Taxi)
        .build();
    let config = GameConfig::new(vec![false, false, true], PlayerConfig::mr_x(1, 3, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 5, 3, 0, 0));
    let mut game = ScotlandYard::new(config, graph).unwrap();
    let log = watched(&mut game);

    game.start_rotation().unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    game.accept(Move::ticket(BLUE, Ticket::Taxi, n(4))).unwrap();
    game.start_rotation().unwrap();

    assert_eq!(
        log.events(),
        vec![
            SpectatorEvent::RoundStarted(0),
            SpectatorEvent::MoveMade(Move::ticket(X, Ticket::Taxi, n(1))),
            SpectatorEvent::MoveMade(Move::ticket(BLUE, Ticket::Taxi, n(4))),
            SpectatorEvent::RotationComplete,
            SpectatorEvent::RoundStarted(1),
        ]
    );
    assert_eq!(game.history().len(), 2);
}

/// Registering twice or unregistering a stranger is an illegal state.
#[test]
fn test_spectator_registration_protocol() {
    let config = GameConfig::new(vec![false], PlayerConfig::mr_x(1, 1, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 2, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();

    let log: Rc<dyn Spectator> = Rc::new(EventLog::new());
    game.register_spectator(log.clone()).unwrap();
    assert_eq!(
        game.register_spectator(log.clone()),
        Err(GameError::IllegalState(StateError::AlreadySpectating))
    );

    game.unregister_spectator(&log).unwrap();
    assert_eq!(
        game.unregister_spectator(&log),
        Err(GameError::IllegalState(StateError::NotSpectating))
    );
    assert!(game.spectators().is_empty());
}

// =============================================================================
// Seated Players
// =============================================================================

/// With every seat filled, one call plays the whole rotation.
#[test]
fn test_seated_players_drive_rotation() {
    let config = GameConfig::new(vec![false, false, false], PlayerConfig::mr_x(1, 3, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 3, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();
    let log = watched(&mut game);

    game.attach_player(X, Box::new(Scripted(VecDeque::from([Move::ticket(X, Ticket::Taxi, n(2))]))))
        .unwrap();
    game.attach_player(BLUE, Box::new(Scripted(VecDeque::from([Move::ticket(BLUE, Ticket::Taxi, n(2))]))))
        .unwrap();

    game.start_rotation().unwrap();

    assert!(game.is_game_over());
    assert_eq!(sorted_winners(&game), vec![BLUE]);
    assert_eq!(log.moves().len(), 2);
}

/// An unseated detective leaves the rotation waiting for `accept`.
#[test]
fn test_mixed_seats_wait_for_accept() {
    let config = GameConfig::new(vec![false, false, false], PlayerConfig::mr_x(1, 3, 0, 0, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 3, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();

    game.attach_player(X, Box::new(Scripted(VecDeque::from([Move::ticket(X, Ticket::Taxi, n(2))]))))
        .unwrap();
    game.start_rotation().unwrap();

    assert_eq!(game.phase(), Phase::Turn { seat: 1 });
    assert_eq!(game.current_player(), BLUE);
    assert_eq!(game.current_round(), 1);
}

/// A seated player that answers with an illegal move gets an error back
/// and the seat can still be played by hand.
#[test]
fn test_seated_player_illegal_move() {
    struct Cheater;
    impl Player for Cheater {
        fn make_move(&mut self, _view: &dyn ScotlandYardView, _location: NodeId, _moves: &MoveSet) -> Move {
            Move::ticket(Colour::Black, Ticket::Underground, NodeId::new(3))
        }
    }

    let config = GameConfig::new(vec![false, false], PlayerConfig::mr_x(1, 3, 0, 1, 0, 0))
        .with_detective(PlayerConfig::detective(BLUE, 3, 3, 0, 0));
    let mut game = ScotlandYard::new(config, three_node_path()).unwrap();
    game.attach_player(X, Box::new(Cheater)).unwrap();

    let err = game.start_rotation().unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { colour: Colour::Black, .. }));
    assert_eq!(game.phase(), Phase::Turn { seat: 0 });
    assert_eq!(game.player_tickets(X, Ticket::Underground), Some(1));

    game.detach_player(X).unwrap();
    game.accept(Move::ticket(X, Ticket::Taxi, n(2))).unwrap();
    assert_eq!(game.current_player(), BLUE);
}
