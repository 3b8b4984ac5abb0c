use crate::domain::{GenerationMix, GridRegion, GridStatus};
use crate::format::round_to;

use super::regions::{RegionSpec, Thresholds};

/// Supply is not published upstream; it is estimated as demand times this
/// fixed reserve margin.
pub const RESERVE_MARGIN: f64 = 1.04;

/// Classified demand reading for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReading {
    pub demand: f64,
    pub supply: f64,
    pub status: GridStatus,
}

/// Classify current demand against peak capacity.
///
/// Unknown demand (`None`, or zero) is reported as calm: `surplus` with zero
/// demand and supply.
pub fn classify_load(demand: Option<f64>, peak: f64, thresholds: Thresholds) -> LoadReading {
    let Some(demand) = demand.filter(|d| *d != 0.0 && d.is_finite()) else {
        return LoadReading {
            demand: 0.0,
            supply: 0.0,
            status: GridStatus::Surplus,
        };
    };

    let ratio = demand / peak;
    let status = if ratio < thresholds.surplus {
        GridStatus::Surplus
    } else if ratio < thresholds.tight {
        GridStatus::Tight
    } else {
        GridStatus::Stress
    };

    LoadReading {
        demand,
        supply: demand * RESERVE_MARGIN,
        status,
    }
}

/// Assemble the output record for a live region.
pub fn build_region(
    spec: &RegionSpec,
    demand: Option<f64>,
    mix: Option<GenerationMix>,
) -> GridRegion {
    let reading = classify_load(demand, spec.peak, spec.thresholds);

    GridRegion {
        name: spec.name.to_string(),
        demand: round_to(reading.demand, 1),
        peak: spec.peak,
        supply: round_to(reading.supply, 1),
        status: reading.status,
        sources: mix
            .filter(|m| !m.is_empty())
            .unwrap_or_else(GenerationMix::unavailable),
        drivers: Vec::new(),
        note: None,
    }
}
