//! Output value types. Every record here is built fresh on each run and
//! serialized into the dashboard snapshot unchanged.

pub mod equity;
pub mod grid;
pub mod quote;
pub mod signal;
pub mod snapshot;

pub use equity::{PeriodRow, PeriodTable, Provenance, SubsectorSummary};
pub use grid::{Driver, DriverKind, GenerationMix, GridRegion, GridStatus};
pub use quote::PriceQuote;
pub use signal::{CommentaryItem, Impact, SignalItem, SignalKind, Tag, TagCategory};
pub use snapshot::Snapshot;
