//! Chess rules engine: squares, pieces, movement rules, the move protocol
//! and check detection.

mod board;
mod check;
mod color;
mod error;
mod file;
mod make_move;
pub mod path;
mod piece;
mod piece_kind;
mod rank;
mod rules;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::MoveError;
pub use file::File;
pub use make_move::{MoveReport, QUIT_TOKEN};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
