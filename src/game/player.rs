use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Fallback display label when no name has been entered
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::One.to_cell(), Cell::One);
        assert_eq!(Player::Two.to_cell(), Cell::Two);
    }

    #[test]
    fn test_label() {
        assert_eq!(Player::One.label(), "Player 1");
        assert_eq!(Player::Two.label(), "Player 2");
    }
}
