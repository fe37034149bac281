use super::kind::ScoreKind;
use crate::project::Project;

/// Return a new list ordered by `kind` score, highest first.
///
/// Equal scores keep their input order. The input is left untouched.
pub fn sort_by_score(projects: &[Project], kind: ScoreKind) -> Vec<Project> {
    let mut scored: Vec<(f64, &Project)> = projects.iter().map(|p| (kind.score(p), p)).collect();

    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored.into_iter().map(|(_, p)| p.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Ratings;

    fn project(
        name: &str,
        impact: i32,
        confidence: i32,
        ease: i32,
        reach: i32,
        effort: i32,
    ) -> Project {
        Project::new(
            name,
            format!("{} description", name),
            Ratings {
                impact,
                confidence,
                ease,
                reach,
                effort,
            },
        )
        .unwrap()
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_ordering() {
        let a = project("A", 5, 4, 3, 2, 1); // ICE 60, RICE 40
        let b = project("B", 3, 5, 5, 3, 2); // ICE 75, RICE 22.5
        let input = vec![a, b];

        assert_eq!(names(&sort_by_score(&input, ScoreKind::Ice)), vec!["B", "A"]);
        assert_eq!(names(&sort_by_score(&input, ScoreKind::Rice)), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_by_score(&[], ScoreKind::Rice).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Same ICE (27) for all three.
        let input = vec![
            project("First", 3, 3, 3, 1, 1),
            project("Second", 3, 3, 3, 5, 5),
            project("Third", 3, 3, 3, 2, 4),
        ];
        assert_eq!(names(&sort_by_score(&input, ScoreKind::Ice)), vec!["First", "Second", "Third"]);

        let reversed: Vec<_> = input.iter().rev().cloned().collect();
        assert_eq!(
            names(&sort_by_score(&reversed, ScoreKind::Ice)),
            vec!["Third", "Second", "First"]
        );
    }

    #[test]
    fn test_ties_among_distinct_scores() {
        let input = vec![
            project("Low", 1, 1, 1, 1, 1),
            project("TieA", 2, 2, 2, 1, 1),
            project("High", 5, 5, 5, 1, 1),
            project("TieB", 2, 2, 2, 1, 1),
        ];
        assert_eq!(
            names(&sort_by_score(&input, ScoreKind::Ice)),
            vec!["High", "TieA", "TieB", "Low"]
        );
    }

    #[test]
    fn test_idempotent_on_sorted_input() {
        let input = vec![
            project("A", 5, 5, 5, 1, 1),
            project("B", 4, 4, 4, 1, 1),
            project("C", 4, 4, 4, 2, 2),
            project("D", 1, 1, 1, 1, 1),
        ];
        let once = sort_by_score(&input, ScoreKind::Ice);
        let twice = sort_by_score(&once, ScoreKind::Ice);
        assert_eq!(once, input);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![project("A", 1, 1, 1, 1, 1), project("B", 5, 5, 5, 5, 1)];
        let before = input.clone();
        let _ = sort_by_score(&input, ScoreKind::Rice);
        assert_eq!(input, before);
    }
}
