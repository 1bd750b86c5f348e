//! Console board renderer.
//!
//! Rank 8 (row 0) is printed first. Empty squares show `--`; pieces show
//! their side letter followed by their kind letter, e.g. `WP` or `BK`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   A  B  C  D  E  F  G  H\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + BOARD_SIZE as u8 - row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push_str(&piece.to_string()),
                None => out.push_str("--"),
            }
            out.push(' ');
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn initial_board_renders_both_camps() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   A  B  C  D  E  F  G  H");
        assert_eq!(lines[1], "8 BR BN BB BQ BK BB BN BR ");
        assert_eq!(lines[2], "7 BP BP BP BP BP BP BP BP ");
        assert_eq!(lines[4], "5 -- -- -- -- -- -- -- -- ");
        assert_eq!(lines[8], "1 WR WN WB WQ WK WB WN WR ");
    }
}
