//! Grid-status classification per balancing region.
//!
//! Live regions take current demand and a generation-mix window from the EIA
//! v2 API; the European region is a curated static entry emitted unchanged.

pub mod classify;
pub mod eia;
pub mod regions;

pub use classify::{build_region, classify_load, LoadReading, RESERVE_MARGIN};
pub use eia::{demand_url, mix_url, parse_demand, parse_mix};
pub use regions::{static_regions, RegionSpec, Thresholds, REGIONS};

use tracing::info;

use crate::config::Credentials;
use crate::domain::GridRegion;
use crate::transport::{Pacer, Transport};

/// One region record per catalogued live region, then the static regions.
///
/// Each live region costs two requests (demand, then mix); a failure of either
/// degrades only that region's figure.
pub fn collect_grid(
    transport: &dyn Transport,
    credentials: &Credentials,
    pacer: &Pacer,
) -> Vec<GridRegion> {
    let mut regions = Vec::with_capacity(REGIONS.len() + 1);

    for spec in REGIONS {
        let demand = transport
            .fetch_json(&demand_url(spec.eia_id, &credentials.eia_key))
            .and_then(|payload| parse_demand(&payload));
        let mix = transport
            .fetch_json(&mix_url(spec.eia_id, &credentials.eia_key))
            .and_then(|payload| parse_mix(&payload));

        let region = build_region(spec, demand, mix);
        info!(region = spec.name, demand = region.demand, status = %region.status, "grid region");
        regions.push(region);

        pacer.pause();
    }

    regions.extend(static_regions());
    regions
}
