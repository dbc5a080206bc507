//! Dashboard summary of projected changes across entities.

use serde::{Deserialize, Serialize};

use super::types::ForecastResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedChange {
    pub entity: String,
    /// Projected change in percent (e.g. 15.3 for +15.3%).
    pub pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionOverview {
    /// Mean projected change in percent; 0 when no entity has a projection.
    pub average_projected_change_pct: f64,
    pub rising: usize,
    pub falling: usize,
    /// Largest projected increases, descending.
    pub top_risers: Vec<ProjectedChange>,
    /// Largest projected decreases, most negative first.
    pub top_fallers: Vec<ProjectedChange>,
}

impl ForecastResult {
    /// Summarize every diagnostic that carries a projected percent change.
    /// Ties keep entity name order.
    pub fn projection_overview(&self, top: usize) -> ProjectionOverview {
        let changes: Vec<ProjectedChange> = self
            .diagnostics
            .iter()
            .filter_map(|(entity, diag)| {
                diag.projected_percent_change.map(|fraction| ProjectedChange {
                    entity: entity.clone(),
                    pct: fraction * 100.0,
                })
            })
            .collect();
        if changes.is_empty() {
            return ProjectionOverview::default();
        }

        let average = changes.iter().map(|c| c.pct).sum::<f64>() / changes.len() as f64;

        let mut risers: Vec<ProjectedChange> =
            changes.iter().filter(|c| c.pct > 0.0).cloned().collect();
        let mut fallers: Vec<ProjectedChange> =
            changes.iter().filter(|c| c.pct < 0.0).cloned().collect();
        let rising = risers.len();
        let falling = fallers.len();

        risers.sort_by(|a, b| b.pct.total_cmp(&a.pct));
        fallers.sort_by(|a, b| a.pct.total_cmp(&b.pct));
        risers.truncate(top);
        fallers.truncate(top);

        ProjectionOverview {
            average_projected_change_pct: average,
            rising,
            falling,
            top_risers: risers,
            top_fallers: fallers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::ForecastDiagnostic;

    fn result_with(changes: &[(&str, Option<f64>)]) -> ForecastResult {
        let mut result = ForecastResult::default();
        for (entity, pct) in changes {
            result.diagnostics.insert(
                entity.to_string(),
                ForecastDiagnostic {
                    projected_percent_change: *pct,
                    ..Default::default()
                },
            );
        }
        result
    }

    #[test]
    fn test_overview_ranks_and_counts() {
        let result = result_with(&[
            ("A", Some(0.25)),
            ("B", Some(-0.5)),
            ("C", Some(0.75)),
            ("D", None),
            ("E", Some(-0.25)),
        ]);
        let overview = result.projection_overview(1);
        assert_eq!(overview.rising, 2);
        assert_eq!(overview.falling, 2);
        assert_eq!(overview.average_projected_change_pct, 6.25);
        assert_eq!(overview.top_risers, vec![ProjectedChange { entity: "C".into(), pct: 75.0 }]);
        assert_eq!(overview.top_fallers, vec![ProjectedChange { entity: "B".into(), pct: -50.0 }]);
    }

    #[test]
    fn test_overview_without_projections_is_zero() {
        let overview = result_with(&[("A", None)]).projection_overview(5);
        assert_eq!(overview, ProjectionOverview::default());
    }
}
