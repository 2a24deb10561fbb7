//! Presentation of raw query results.

use std::fmt::Write;

use crate::planner::{NO_ROUTE, QueryOutcome};

/// Text shown in place of the [`NO_ROUTE`] sentinel.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// Format a raw query value for display.
///
/// ```
/// use route_server::report::format_value;
///
/// assert_eq!(format_value(9), "9");
/// assert_eq!(format_value(-1), "NO SUCH ROUTE");
/// ```
pub fn format_value(value: i64) -> String {
    if value == NO_ROUTE {
        NO_SUCH_ROUTE.to_string()
    } else {
        value.to_string()
    }
}

/// Render outcomes as numbered `Output #n:` blocks, one value per block.
pub fn render_report(outcomes: &[QueryOutcome]) -> String {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Output #{}:", i + 1);
        let _ = writeln!(out, "{}", format_value(outcome.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::planner::{Query, QueryEngine, standard_queries};

    #[test]
    fn format_numbers_and_sentinel() {
        assert_eq!(format_value(0), "0");
        assert_eq!(format_value(22), "22");
        assert_eq!(format_value(NO_ROUTE), "NO SUCH ROUTE");
    }

    #[test]
    fn empty_report() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn numbered_blocks() {
        let outcomes = vec![
            QueryOutcome {
                query: Query::distance("A-B"),
                value: 5,
            },
            QueryOutcome {
                query: Query::distance("A-E-D"),
                value: NO_ROUTE,
            },
        ];
        assert_eq!(
            render_report(&outcomes),
            "Output #1:\n5\nOutput #2:\nNO SUCH ROUTE\n"
        );
    }

    #[test]
    fn standard_report_for_default_graph() {
        let graph = Graph::from_text("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7");
        let outcomes = QueryEngine::new(&graph).answer_all(&standard_queries());
        let report = render_report(&outcomes);

        let expected = [
            "9", "5", "13", "22", "NO SUCH ROUTE", "2", "3", "9", "9", "7",
        ]
        .iter()
        .enumerate()
        .map(|(i, v)| format!("Output #{}:\n{}\n", i + 1, v))
        .collect::<String>();

        assert_eq!(report, expected);
    }
}
