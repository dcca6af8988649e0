use crate::queue::CommandSource;
use crate::result_log::ExecutionOutcome;
use crate::test_harness::{attack, heal, move_to, TestMatch};
use crate::unit_command::BindError;
use crate::units::UnitId;

// ====================================================================
// Live command processing and undo through the App
// ====================================================================

fn duel() -> TestMatch {
    TestMatch::new()
        .with_unit(1, 1, (0, 0), 30)
        .with_unit(2, 1, (0, 1), 30)
        .with_unit(3, 2, (1, 1), 30)
        .with_active_player(1)
}

#[test]
fn test_issued_commands_are_executed_and_recorded() {
    let mut game = duel();
    game.issue(move_to((1, 1), (4, 4)));
    game.issue(attack((2, 1), (3, 2), 9));
    game.tick();

    assert_eq!(game.position(1), (4, 4));
    assert_eq!(game.health(3), 21);
    assert_eq!(game.ledger().len(), 2);

    let log = game.log().last_n(2);
    assert!(log
        .iter()
        .all(|entry| entry.outcome == ExecutionOutcome::Processed
            && entry.source == CommandSource::Player));
}

#[test]
fn test_undo_request_reverts_active_players_last_command() {
    let mut game = duel();
    game.issue(move_to((1, 1), (4, 4)));
    game.issue(attack((2, 1), (3, 2), 9));
    game.tick();

    game.request_undo();
    game.tick();
    assert_eq!(game.health(3), 30);
    assert_eq!(game.position(1), (4, 4));
    assert_eq!(game.ledger().len(), 1);
    assert_eq!(
        game.log().last_n(1)[0].outcome,
        ExecutionOutcome::Undone
    );

    game.request_undo();
    game.tick();
    assert_eq!(game.position(1), (0, 0));
    assert!(game.ledger().is_empty());
}

#[test]
fn test_undo_blocked_after_turn_passes() {
    let mut game = duel();
    game.issue(heal((1, 1), 2, 5));
    game.issue(move_to((1, 1), (5, 0)));
    game.tick();

    // Turn passes to player 2 before the undo lands.
    game.set_active_player(2);
    game.request_undo();
    game.tick();
    assert_eq!(game.position(1), (5, 0));
    assert_eq!(game.ledger().len(), 2);

    game.set_active_player(1);
    game.request_undo();
    game.tick();
    assert_eq!(game.position(1), (0, 0));
    assert_eq!(game.ledger().len(), 1);
}

#[test]
fn test_opponent_command_on_top_blocks_own_undo() {
    let mut game = duel();
    game.issue(move_to((1, 1), (3, 0)));
    game.tick();
    game.set_active_player(2);
    game.issue(attack((3, 2), (2, 1), 10));
    game.tick();
    assert_eq!(game.health(2), 20);

    game.set_active_player(1);
    game.request_undo();
    game.tick();
    // The opponent's attack is on top, so player 1's move stays put.
    assert_eq!(game.position(1), (3, 0));
    assert_eq!(game.health(2), 20);
    assert_eq!(game.ledger().len(), 2);
}

#[test]
fn test_several_undo_requests_in_one_frame() {
    let mut game = duel();
    game.issue(move_to((1, 1), (1, 0)));
    game.issue(move_to((1, 1), (2, 0)));
    game.issue(move_to((1, 1), (3, 0)));
    game.tick();

    game.request_undo();
    game.request_undo();
    game.tick();
    assert_eq!(game.position(1), (1, 0));
    assert_eq!(game.ledger().len(), 1);
}

#[test]
fn test_undo_on_empty_ledger_changes_nothing() {
    let mut game = duel();
    game.request_undo();
    game.tick();
    assert!(game.ledger().is_empty());
    assert!(game.log().is_empty());
    assert_eq!(game.health(1), 30);
}

#[test]
fn test_command_for_unknown_unit_is_dropped() {
    let mut game = duel();
    game.issue(attack((1, 1), (42, 2), 5));
    game.tick();

    assert!(game.ledger().is_empty());
    assert_eq!(
        game.log().last_n(1)[0].outcome,
        ExecutionOutcome::Unbound(BindError::UnknownTarget(UnitId(42)))
    );
}

#[test]
fn test_command_against_despawned_unit_is_dropped() {
    let mut game = duel();
    game.despawn_unit(3);
    game.issue(attack((2, 1), (3, 2), 9));
    game.tick();

    assert!(game.ledger().is_empty());
    assert_eq!(
        game.log().last_n(1)[0].outcome,
        ExecutionOutcome::Unbound(BindError::UnknownTarget(UnitId(3)))
    );
}
