//! FEN-to-Position parser.
//!
//! Builds a complete scratch `Position` and only returns it once every field
//! has validated, so callers can swap it in without partial updates.

use crate::errors::FenError;
use crate::position::chess_types::*;
use crate::position::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::FieldCount(fields.len()));
    };

    let mut position = Position::empty();

    parse_board(board, &mut position)?;
    position.side_to_move = parse_side_to_move(side)?;
    position.castling_rights = parse_castling_rights(castling)?;
    position.en_passant_square = parse_en_passant_square(en_passant, position.side_to_move)?;
    position.halfmove_clock = parse_counter("halfmove clock", halfmove)?;
    position.fullmove_number = parse_counter("fullmove number", fullmove)?;

    position.refresh_occupancy();
    Ok(position)
}

fn parse_board(board: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let width_error = FenError::RankWidth { rank: board_rank + 1 };
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(width_error);
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
            if file >= 8 {
                return Err(width_error);
            }

            position.put_piece(piece, (board_rank * 8 + file) as Square);
            file += 1;
        }

        if file != 8 {
            return Err(width_error);
        }
    }

    Ok(())
}

fn parse_side_to_move(side: &str) -> Result<Color, FenError> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side.to_owned())),
    }
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, FenError> {
    if castling == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling.chars() {
        let right = CastlingRight::ALL
            .into_iter()
            .find(|right| right.fen_char() == ch)
            .ok_or(FenError::CastlingChar(ch))?;
        rights |= right.bit();
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant: &str, side: Color) -> Result<Option<Square>, FenError> {
    if en_passant == "-" {
        return Ok(None);
    }

    // The target sits behind a pawn that just double-pushed, so it is on
    // rank 6 when white is to move and rank 3 when black is.
    let expected_rank = match side {
        Color::White => 5,
        Color::Black => 2,
    };

    algebraic_to_square(en_passant)
        .filter(|&square| rank_of(square) == expected_rank)
        .map(Some)
        .ok_or_else(|| FenError::EnPassant(en_passant.to_owned()))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u32, FenError> {
    value.parse::<u32>().map_err(|_| FenError::Clock {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::FenError;
    use crate::position::chess_rules::STARTING_POSITION_FEN;
    use crate::position::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling_rights(), CASTLE_ALL);
        assert_eq!(position.en_passant_square(), None);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.occupancy(Color::White), 0xFFFF);
    }

    #[test]
    fn parse_en_passant_and_clocks() {
        let position =
            parse_fen("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2")
                .expect("FEN should parse");
        assert_eq!(position.en_passant_square(), Some(42));
        assert_eq!(position.fullmove_number(), 2);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_fen("").map(|_| ()), Err(FenError::FieldCount(0)));
        assert_eq!(
            parse_fen("this is not valid fen").map(|_| ()),
            Err(FenError::FieldCount(5))
        );
        assert_eq!(
            parse_fen("this is not a valid fen").map(|_| ()),
            Err(FenError::RankCount(1))
        );
        assert_eq!(parse_fen(&"x".repeat(1000)).map(|_| ()), Err(FenError::FieldCount(1)));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").map(|_| ()),
            Err(FenError::FieldCount(7))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1").map(|_| ()),
            Err(FenError::RankCount(7))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/7 w - - 0 1").map(|_| ()),
            Err(FenError::RankWidth { rank: 1 })
        );
        assert_eq!(
            parse_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1").map(|_| ()),
            Err(FenError::RankWidth { rank: 8 })
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/7x w - - 0 1").map(|_| ()),
            Err(FenError::PieceChar('x'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").map(|_| ()),
            Err(FenError::SideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w KZ - 0 1").map(|_| ()),
            Err(FenError::CastlingChar('Z'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1").map(|_| ()),
            Err(FenError::EnPassant("e9".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - zero 1").map(|_| ()),
            Err(FenError::Clock {
                field: "halfmove clock",
                value: "zero".to_owned()
            })
        );
    }

    #[test]
    fn en_passant_target_must_match_side_to_move() {
        for (fen, target) in [
            ("4k3/8/8/8/4P3/8/8/4K3 w - e4 0 1", "e4"),
            ("4k3/8/8/3pP3/8/8/8/4K3 w - d3 0 1", "d3"),
            ("4k3/8/8/8/3pP3/8/8/4K3 b - e6 0 1", "e6"),
        ] {
            assert_eq!(
                parse_fen(fen).map(|_| ()),
                Err(FenError::EnPassant(target.to_owned()))
            );
        }

        let black_to_move = parse_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(black_to_move.en_passant_square(), Some(20));
    }
}
