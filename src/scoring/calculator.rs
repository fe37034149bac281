use crate::project::Project;

/// Both prioritization scores for one project. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub ice: f64,
    pub rice: f64,
}

/// Impact x Confidence x Ease.
pub fn ice(project: &Project) -> f64 {
    let r = &project.ratings;
    r.impact as f64 * r.confidence as f64 * r.ease as f64
}

/// (Reach x Impact x Confidence) / Effort.
///
/// Effort is trusted to be 1-5. A zero effort yields an infinite (or NaN) score
/// rather than being clamped.
pub fn rice(project: &Project) -> f64 {
    let r = &project.ratings;
    (r.reach as f64 * r.impact as f64 * r.confidence as f64) / r.effort as f64
}

pub fn calculate_scores(project: &Project) -> ScoreResult {
    ScoreResult {
        ice: ice(project),
        rice: rice(project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Ratings;

    fn project(impact: i32, confidence: i32, ease: i32, reach: i32, effort: i32) -> Project {
        // Struct literal so out-of-range values can be exercised.
        Project {
            name: "Test".to_string(),
            description: "Test project".to_string(),
            ratings: Ratings {
                impact,
                confidence,
                ease,
                reach,
                effort,
            },
        }
    }

    #[test]
    fn test_ice() {
        assert_eq!(ice(&project(5, 4, 3, 2, 1)), 60.0);
        assert_eq!(ice(&project(3, 5, 5, 3, 2)), 75.0);
        assert_eq!(ice(&project(1, 1, 1, 1, 1)), 1.0);
    }

    #[test]
    fn test_rice() {
        assert_eq!(rice(&project(5, 4, 3, 2, 1)), 40.0);
        assert_eq!(rice(&project(3, 5, 5, 3, 2)), 22.5);
    }

    #[test]
    fn test_rice_fractional() {
        // 2 * 4 * 3 / 3
        assert!((rice(&project(4, 3, 5, 2, 3)) - 8.0).abs() < f64::EPSILON);
        // 1 * 1 * 1 / 3
        assert!((rice(&project(1, 1, 1, 1, 3)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_formulas_hold_for_all_valid_ratings() {
        for i in 1..=5i32 {
            for c in 1..=5i32 {
                for e in 1..=5i32 {
                    for r in 1..=5i32 {
                        for f in 1..=5i32 {
                            let p = project(i, c, e, r, f);
                            let expected_ice = (i * c * e) as f64;
                            let expected_rice = (r * i * c) as f64 / f as f64;
                            assert_eq!(ice(&p), expected_ice);
                            assert!((rice(&p) - expected_rice).abs() < 1e-9);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_effort_is_not_clamped() {
        assert!(rice(&project(3, 3, 3, 3, 0)).is_infinite());
    }

    #[test]
    fn test_out_of_range_still_computes() {
        assert_eq!(ice(&project(6, 1, 1, 1, 1)), 6.0);
    }

    #[test]
    fn test_calculate_scores() {
        let result = calculate_scores(&project(5, 4, 3, 2, 1));
        assert_eq!(result, ScoreResult { ice: 60.0, rice: 40.0 });
    }
}
