//! Tests for placement lines and grid rendering

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crosstile::place_all;
    use crosstile::report::{normalize, render_grid, report_lines};
    use crosstile::spatial::Layout;

    // Tests one line per word with its crossings
    // Verified by listing crossings in raw coordinates
    #[test]
    fn test_report_lines() {
        let outcome = place_all(&["CAT", "CAR"], 20, Duration::from_secs(5)).expect("valid input");
        let lines = report_lines(&normalize(&outcome.layout));

        assert_eq!(
            lines,
            vec![
                "1. CAT across at (1, 0), crosses CAR at (1, 1)",
                "2. CAR down at (0, 1), crosses CAT at (1, 1)",
            ]
        );
    }

    // Tests the trimmed grid renders with empty-cell markers
    // Verified by rendering the untrimmed grid
    #[test]
    fn test_render_grid() {
        let outcome = place_all(&["CAT", "CAR"], 20, Duration::from_secs(5)).expect("valid input");
        let rows = render_grid(&normalize(&outcome.layout));

        assert_eq!(rows, vec!["· C ·", "C A T", "· R ·"]);
    }

    // Tests disconnected words are flagged in their line
    // Verified by dropping the degraded marker
    #[test]
    fn test_report_lines_flag_disconnected() {
        let outcome = place_all(&["DOG", "CAT"], 20, Duration::from_secs(5)).expect("valid input");
        let lines = report_lines(&normalize(&outcome.layout));

        assert_eq!(
            lines,
            vec![
                "1. DOG across at (2, 0)",
                "2. CAT across at (0, 0), disconnected",
            ]
        );
    }

    // Tests an empty layout renders nothing
    // Verified by rendering a placeholder row
    #[test]
    fn test_empty_layout() {
        let normalized = normalize(&Layout::new(20));

        assert!(report_lines(&normalized).is_empty());
        assert!(render_grid(&normalized).is_empty());
    }
}
