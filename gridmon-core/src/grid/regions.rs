use crate::domain::{Driver, DriverKind, GenerationMix, GridRegion, GridStatus};

/// Load ratio bounds: below `surplus` is calm, below `tight` is tight,
/// anything at or above `tight` is stress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub surplus: f64,
    pub tight: f64,
}

/// A live region and its static reference figures.
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub name: &'static str,
    /// EIA respondent code.
    pub eia_id: &'static str,
    /// Reference peak capacity in GW.
    pub peak: f64,
    pub thresholds: Thresholds,
}

pub const REGIONS: &[RegionSpec] = &[
    RegionSpec {
        name: "ERCOT (Texas)",
        eia_id: "TEX",
        peak: 76.2,
        thresholds: Thresholds {
            surplus: 0.88,
            tight: 0.95,
        },
    },
    RegionSpec {
        name: "PJM (NE US)",
        eia_id: "PJM",
        peak: 168.2,
        thresholds: Thresholds {
            surplus: 0.80,
            tight: 0.92,
        },
    },
    RegionSpec {
        name: "MISO (Midwest)",
        eia_id: "MISO",
        peak: 120.0,
        thresholds: Thresholds {
            surplus: 0.80,
            tight: 0.92,
        },
    },
    RegionSpec {
        name: "CAISO (California)",
        eia_id: "CAL",
        peak: 52.0,
        thresholds: Thresholds {
            surplus: 0.78,
            tight: 0.90,
        },
    },
];

/// Regions without a live integration, maintained by hand.
pub fn static_regions() -> Vec<GridRegion> {
    let sources: GenerationMix = [
        ("Gas", "28%"),
        ("Nuclear", "22%"),
        ("Wind", "18%"),
        ("Coal", "14%"),
        ("Hydro", "12%"),
        ("Solar", "6%"),
    ]
    .into_iter()
    .collect();

    vec![GridRegion {
        name: "ENTSO-E (Central EU)".to_string(),
        demand: 284.6,
        peak: 320.0,
        supply: 298.4,
        status: GridStatus::Surplus,
        sources,
        drivers: vec![
            Driver::new("French nuclear -8GW", DriverKind::DemandUp),
            Driver::new("DE wind surplus", DriverKind::DemandDown),
            Driver::new("Cross-border flows ↑", DriverKind::Neutral),
        ],
        note: Some(
            "ENTSO-E data — updated manually. Register at transparency.entsoe.eu for live feed."
                .to_string(),
        ),
    }]
}
