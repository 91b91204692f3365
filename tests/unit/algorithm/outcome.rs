//! Tests for search statuses and outcome summaries

#[cfg(test)]
mod tests {
    use crosstile::algorithm::outcome::{PlacementOutcome, SearchStats};
    use crosstile::spatial::{Layout, Orientation, Placement, Word};
    use crosstile::{SearchStatus, StopReason};

    fn outcome(status: SearchStatus, word_count: usize) -> PlacementOutcome {
        let mut layout = Layout::new(10);
        layout
            .try_place(Placement::new(
                &Word::new(0, "DOG"),
                Orientation::Horizontal,
                [1, 1],
            ))
            .expect("word fits");
        layout
            .try_place(
                Placement::new(&Word::new(1, "CAT"), Orientation::Horizontal, [5, 1])
                    .into_degraded(),
            )
            .expect("isolated word fits");

        PlacementOutcome {
            layout,
            status,
            word_count,
            stats: SearchStats::default(),
        }
    }

    // Tests only a connected complete layout counts as success
    // Verified by treating degraded layouts as success
    #[test]
    fn test_status_success_and_reason() {
        assert!(SearchStatus::Complete.is_success());
        assert_eq!(SearchStatus::Complete.reason(), None);

        let degraded = SearchStatus::Degraded(StopReason::Exhausted);
        assert!(!degraded.is_success());
        assert_eq!(degraded.reason(), Some(StopReason::Exhausted));

        let partial = SearchStatus::Partial(StopReason::TimedOut);
        assert_eq!(partial.reason(), Some(StopReason::TimedOut));
    }

    // Tests summaries distinguish complete, degraded and partial layouts
    // Verified by printing the placed count in every summary
    #[test]
    fn test_summaries() {
        assert_eq!(
            outcome(SearchStatus::Complete, 2).summary(),
            "all 2 words placed"
        );

        let degraded = outcome(SearchStatus::Degraded(StopReason::Exhausted), 2).summary();
        assert!(degraded.starts_with("degraded placement: all 2 words placed"));
        assert!(degraded.contains("1 without an intersection"));
        assert!(degraded.ends_with("reason: exhausted"));

        assert_eq!(
            outcome(SearchStatus::Partial(StopReason::TimedOut), 5).summary(),
            "partial placement: 2 of 5 words placed, reason: timeout"
        );
    }

    // Tests the placed count comes from the layout
    // Verified by returning the word count
    #[test]
    fn test_placed_count() {
        let result = outcome(SearchStatus::Partial(StopReason::Exhausted), 4);

        assert_eq!(result.placed_count(), 2);
        assert!(!result.is_success());
    }
}
