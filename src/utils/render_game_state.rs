//! Plain-text board renderer for logs and debugging.

use crate::position::position::Position;

/// Rank 8 first; each square is its FEN letter (or `.`) followed by a space,
/// one line per rank.
pub fn render_position(position: &Position) -> String {
    let mut out = String::with_capacity(8 * 17);

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let ch = position
                .piece_on(rank * 8 + file)
                .map_or('.', |piece| piece.to_fen_char());
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::position::position::Position;

    #[test]
    fn renders_starting_position() {
        let rendered = render_position(&Position::new());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r ");
        assert_eq!(lines[3], ". . . . . . . . ");
        assert_eq!(lines[7], "R N B Q K B N R ");
        assert!(rendered.ends_with('\n'));
    }
}
