use std::fmt;

// =============================================================================
// Suits, ranks and a face-down-by-default card
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    #[default]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    #[default]
    Undefined,
}

impl Rank {
    /// Blackjack-style scoring: every face card counts ten, the ace one.
    pub fn points(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 1,
            Rank::Undefined => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    visible: bool,
}

impl Card {
    /// New cards are dealt face down.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            visible: false,
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn flip(&mut self) {
        self.visible = !self.visible;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {:?}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_is_undefined_and_face_down() {
        let card = Card::default();
        assert_eq!(card.suit(), Suit::Undefined);
        assert_eq!(card.rank(), Rank::Undefined);
        assert!(!card.is_visible());
    }

    #[test]
    fn test_flip_toggles_visibility() {
        let mut card = Card::new(Suit::Hearts, Rank::Ace);
        assert!(!card.is_visible());
        card.flip();
        assert!(card.is_visible());
        card.flip();
        assert!(!card.is_visible());
    }

    #[test]
    fn test_points_table() {
        assert_eq!(Rank::Two.points(), 2);
        assert_eq!(Rank::Nine.points(), 9);
        assert_eq!(Rank::Ten.points(), 10);
        assert_eq!(Rank::Jack.points(), 10);
        assert_eq!(Rank::Queen.points(), 10);
        assert_eq!(Rank::King.points(), 10);
        assert_eq!(Rank::Ace.points(), 1);
        assert_eq!(Rank::Undefined.points(), 0);
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Spades, Rank::Queen);
        assert_eq!(card.to_string(), "Queen of Spades");
    }
}
