use crate::position::chess_types::*;
use crate::position::position::Position;
use crate::utils::algebraic::square_name;

pub fn generate_fen(position: &Position) -> String {
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = position
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), square_name);

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(position),
        side_to_move,
        generate_castling_field(position.castling_rights()),
        en_passant,
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::with_capacity(64);

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_on(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = CastlingRight::ALL
        .into_iter()
        .filter(|right| rights & right.bit() != 0)
        .map(CastlingRight::fen_char)
        .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::position::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_fixture_fens() {
        for fen in [
            STARTING_POSITION_FEN,
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 12 40",
        ] {
            let parsed = parse_fen(fen).expect("fixture FEN should parse");
            assert_eq!(generate_fen(&parsed), fen);
        }
    }

    #[test]
    fn whitespace_is_normalised() {
        let parsed = parse_fen("  8/8/8/8/8/8/8/k6K   w  -  -  0  1 ").expect("FEN should parse");
        assert_eq!(generate_fen(&parsed), "8/8/8/8/8/8/8/k6K w - - 0 1");
    }
}
