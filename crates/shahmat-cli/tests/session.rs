//! End-to-end sessions driven through in-memory input and output.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use shahmat_cli::{GameSession, SessionConfig, SetupMode};
use shahmat_core::{Color, PieceKind, Square};

fn session(mode: Option<SetupMode>) -> GameSession {
    GameSession::new(SessionConfig {
        mode,
        color: false,
        show_captures: true,
    })
}

fn play(session: &mut GameSession, input: &str) -> String {
    let mut out = Vec::new();
    session
        .run(Cursor::new(input.to_string()), &mut out)
        .expect("in-memory session cannot fail");
    String::from_utf8(out).expect("output is UTF-8")
}

#[test]
fn short_game_with_captures_and_check() {
    let mut game = session(None);
    let input = "default\n\
                 E2 E4\n\
                 D7 D5\n\
                 e4 d5\n\
                 D8 D5\n\
                 B1 C3\n\
                 D5 E5\n\
                 0\n";
    let out = play(&mut game, input);

    assert_eq!(out.matches("Check!").count(), 1);
    assert!(out.ends_with("Game over.\nWhite pieces captured: 1   Black pieces captured: 1\n"));
    assert_eq!(game.turn(), Color::White);
    let queen = game.board().piece_at(Square::E5).unwrap();
    assert_eq!((queen.kind(), queen.color()), (PieceKind::Queen, Color::Black));
    assert!(game.board().is_in_check(Color::White));
}

#[test]
fn moves_may_be_split_across_lines() {
    let mut game = session(Some(SetupMode::Default));
    play(&mut game, "G1\nF3\nB8\n\nC6\n0\n");
    assert_eq!(game.turn(), Color::White);
    assert!(game.board().piece_at(Square::F3).is_some());
    assert!(game.board().piece_at(Square::C6).is_some());
}

#[test]
fn every_rejection_is_explained_and_the_same_side_retries() {
    let mut game = session(Some(SetupMode::Default));
    let out = play(&mut game, "E2 E22\nZ1 A1\nE4 E5\nE7 E5\nE1 E2\nA1 A4\n0\n");
    let errors: Vec<_> = out.lines().filter(|l| l.starts_with("Error:")).collect();
    assert_eq!(
        errors,
        vec![
            "Error: malformed square \"E22\", expected something like E2. Try again.",
            "Error: square \"Z1\" is off the board. Try again.",
            "Error: no piece on E4. Try again.",
            "Error: the piece on E7 is not yours. Try again.",
            "Error: cannot capture your own piece on E2. Try again.",
            "Error: the path from A1 to A4 is blocked. Try again.",
        ]
    );
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &shahmat_core::Board::starting_position());
}

#[test]
fn custom_setup_without_kings_never_reports_check() {
    let mut game = session(Some(SetupMode::Create));
    let out = play(&mut game, "W Q D1\nB R D8\ndone\nD1 D7\nD8 D7\n0\n");
    assert!(!out.contains("Check!"));
    assert_eq!(game.board().captured(Color::White), 1);
    assert_eq!(game.board().pieces().count(), 1);
}
