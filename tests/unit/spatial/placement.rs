//! Tests for words, orientations and placement geometry

#[cfg(test)]
mod tests {
    use crosstile::spatial::{Orientation, Placement, Word};

    // Tests words are uppercased and split into letters
    // Verified by skipping uppercase normalization
    #[test]
    fn test_word_normalizes_to_uppercase() {
        let word = Word::new(3, "Hannah");

        assert_eq!(word.index, 3);
        assert_eq!(word.text, "HANNAH");
        assert_eq!(word.len(), 6);
        assert_eq!(word.letters.first(), Some(&'H'));
    }

    // Tests offsets walk along the orientation in both directions
    // Verified by swapping the step axes
    #[test]
    fn test_cell_at_offsets() {
        assert_eq!(Orientation::Horizontal.cell_at([4, 4], 2), [4, 6]);
        assert_eq!(Orientation::Vertical.cell_at([4, 4], 2), [6, 4]);
        assert_eq!(Orientation::Horizontal.cell_at([4, 4], -1), [4, 3]);
        assert_eq!(Orientation::Vertical.perpendicular(), Orientation::Horizontal);
    }

    // Tests a placement derives contiguous cells paired with its letters
    // Verified by starting cells at offset one
    #[test]
    fn test_placement_cells_and_letters() {
        let word = Word::new(0, "dog");
        let placement = Placement::new(&word, Orientation::Vertical, [1, 5]);

        let letters: Vec<_> = placement.letters().collect();
        assert_eq!(letters, vec![([1, 5], 'D'), ([2, 5], 'O'), ([3, 5], 'G')]);
        assert!(placement.covers([2, 5]));
        assert!(!placement.covers([4, 5]));
        assert!(!placement.degraded);
        assert!(placement.into_degraded().degraded);
    }

    // Tests translation moves the anchor only
    // Verified by translating the word index
    #[test]
    fn test_translated_moves_anchor() {
        let word = Word::new(2, "CAT");
        let placement = Placement::new(&word, Orientation::Horizontal, [5, 5]);
        let moved = placement.translated([-5, -3]);

        assert_eq!(moved.anchor, [0, 2]);
        assert_eq!(moved.word, "CAT");
        assert_eq!(moved.word_index, 2);
    }

    // Tests orientation display names
    // Verified by swapping display strings
    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Horizontal.to_string(), "across");
        assert_eq!(Orientation::Vertical.to_string(), "down");
    }
}
