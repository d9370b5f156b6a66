use plysplit::board::movegen::generate;
use plysplit::{Move, Position, Team};

const OPENING: [&str; 4] = ["e2e4", "g8f6", "e4e5", "f6d5"];

#[test]
fn engine_answers_embedded_opening_with_white_move() {
    use plysplit::search::scheduler::search_position;
    use plysplit::search::SearchParams;
    let pos = Position::from_moves(&OPENING).unwrap();
    assert_eq!(pos.side_to_move(), Team::White);
    let board = pos.board().clone();

    let mut p = SearchParams::default();
    p.threads = 2;
    let res = search_position(&board, Team::White, &p).unwrap();
    let best = res.bestmove.expect("white has moves");

    assert!(board.at(best.from).is_team(Team::White), "origin of {best} is not white");
    assert!(generate(&board, best.from).contains(&best.to), "{best} is not a generated move");

    let uci = best.to_string();
    assert_eq!(uci.len(), 4);
    assert_eq!(Move::from_uci(&uci).unwrap(), best);
    assert_eq!(Move::from_code(&best.code()).unwrap(), best);
}

#[test]
fn opening_from_text_input() {
    use plysplit::io::parse_opening;
    let moves = parse_opening("4\ne2e4 g8f6 e4e5 f6d5\n").unwrap();
    let pos = Position::from_moves(&moves[..]).unwrap();
    let direct = Position::from_moves(&OPENING).unwrap();
    assert_eq!(pos.board(), direct.board());
    assert_eq!(pos.side_to_move(), direct.side_to_move());
}

#[test]
fn odd_length_opening_leaves_black_to_move() {
    use plysplit::search::scheduler::search_position;
    use plysplit::search::SearchParams;
    let pos = Position::from_moves(&OPENING[..3]).unwrap();
    assert_eq!(pos.side_to_move(), Team::Black);
    let mut p = SearchParams::default();
    p.horizon = 2; p.threads = 2;
    let res = search_position(pos.board(), pos.side_to_move(), &p).unwrap();
    let best = res.bestmove.unwrap();
    assert!(pos.board().at(best.from).is_team(Team::Black));
}

#[test]
fn replay_rejects_bad_origins() {
    use plysplit::EngineError;
    let err = Position::from_moves(&["e2e4", "e4e5"]).unwrap_err();
    assert!(matches!(err, EngineError::WrongSide { .. }), "{err}");
    let err = Position::from_moves(&["e2e4", "e5e4"]).unwrap_err();
    assert!(matches!(err, EngineError::EmptyOrigin { .. }), "{err}");
}

#[test]
fn unplayable_destination_still_passes_the_turn() {
    // g1g3 is not a knight move: the board stays put but Black is on move.
    let pos = Position::from_moves(&["g1g3"]).unwrap();
    assert_eq!(pos.side_to_move(), Team::Black);
    assert_eq!(pos.board(), Position::startpos().board());
}
