//! Builds the inspection report printed by the tester.
use aideps_core::{AiDependencies, BoostConflict, DuplicatePolicy, Metabolism, PodEconomy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetabolismSummary {
    pub metabolism: Metabolism,
    pub boosts: Vec<String>,
}

/// Which metabolism a queried special boosts, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub special: String,
    pub metabolism: Option<Metabolism>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpkeepProjection {
    pub colonies: u32,
    pub colony_pod_cost: f64,
    pub outpost_pod_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    pub source: String,
    pub duplicate_policy: DuplicatePolicy,
    pub economy: PodEconomy,
    pub metabolisms: Vec<MetabolismSummary>,
    pub total_boosts: usize,
    pub indexed_boosts: usize,
    pub classifications: Vec<Classification>,
    pub conflicts: Vec<BoostConflict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<UpkeepProjection>,
}

pub struct InspectRequest<'a> {
    pub source: String,
    pub policy: DuplicatePolicy,
    pub classify: &'a [String],
    pub colonies: Option<u32>,
}

#[must_use]
pub fn inspect(deps: &AiDependencies, request: &InspectRequest<'_>) -> InspectionReport {
    let boosts = deps.metabolism_boosts();
    let metabolisms = boosts
        .iter()
        .map(|(metabolism, listed)| MetabolismSummary {
            metabolism,
            boosts: listed.to_vec(),
        })
        .collect();

    let classifications = request
        .classify
        .iter()
        .map(|special| Classification {
            special: special.clone(),
            metabolism: deps.metabolism_for(special),
        })
        .collect();

    let conflicts = boosts.conflicts();

    let projection = request.colonies.map(|colonies| UpkeepProjection {
        colonies,
        colony_pod_cost: deps.economy().colony_pod_cost_with_upkeep(colonies),
        outpost_pod_cost: deps.economy().outpost_pod_cost_with_upkeep(colonies),
    });

    InspectionReport {
        source: request.source.clone(),
        duplicate_policy: request.policy,
        economy: *deps.economy(),
        metabolisms,
        total_boosts: boosts.total_boosts(),
        indexed_boosts: deps.boost_index().len(),
        classifications,
        conflicts,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aideps_core::MetabolismBoostMap;

    fn request<'a>(classify: &'a [String], colonies: Option<u32>) -> InspectRequest<'a> {
        InspectRequest {
            source: "builtin".to_string(),
            policy: DuplicatePolicy::LastWriteWins,
            classify,
            colonies,
        }
    }

    #[test]
    fn builtin_report_lists_every_category() {
        let report = inspect(AiDependencies::standard(), &request(&[], None));
        let order: Vec<_> = report.metabolisms.iter().map(|m| m.metabolism).collect();
        assert_eq!(order, Metabolism::ALL);
        assert_eq!(report.total_boosts, 9);
        assert_eq!(report.indexed_boosts, 9);
        assert!(report.conflicts.is_empty());
        assert!(report.projection.is_none());
    }

    #[test]
    fn classifies_requested_specials() {
        let specials = vec!["CRYSTALS_SPECIAL".to_string(), "UNKNOWN_SPECIAL".to_string()];
        let report = inspect(AiDependencies::standard(), &request(&specials, Some(4)));
        assert_eq!(report.classifications[0].metabolism, Some(Metabolism::Lithic));
        assert_eq!(report.classifications[1].metabolism, None);
        let projection = report.projection.unwrap();
        assert!((projection.colony_pod_cost - 148.8).abs() < 1e-9);
        assert!((projection.outpost_pod_cost - 99.2).abs() < 1e-9);
    }

    #[test]
    fn lenient_tables_surface_conflicts() {
        let map = MetabolismBoostMap::from_entries([
            (Metabolism::Organic, vec!["TWIN_SPECIAL".to_string()]),
            (Metabolism::Robotic, vec!["TWIN_SPECIAL".to_string()]),
        ]);
        let deps = AiDependencies::new(PodEconomy::standard(), map);
        let report = inspect(&deps, &request(&[], None));
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.total_boosts, 2);
        assert_eq!(report.indexed_boosts, 1);
    }
}
