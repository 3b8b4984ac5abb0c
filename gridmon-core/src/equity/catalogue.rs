/// A subsector and the export file it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsector {
    pub file: &'static str,
    pub name: &'static str,
    /// Classification label (segment and GICS code).
    pub label: &'static str,
}

impl Subsector {
    pub const fn new(file: &'static str, name: &'static str, label: &'static str) -> Self {
        Self { file, name, label }
    }
}

/// Subsectors in display order.
pub const SUBSECTORS: &[Subsector] = &[
    Subsector::new("grid_ep.csv", "Oil E&P", "Upstream · GICS 10102010"),
    Subsector::new("grid_midstream.csv", "Midstream", "Pipelines/MLPs · GICS 10102030"),
    Subsector::new("grid_lng.csv", "LNG", "Export/Import · GICS 10102030"),
    Subsector::new("grid_refiners.csv", "Refiners", "Downstream · GICS 10102040"),
    Subsector::new("grid_oilservices.csv", "Oil Services", "Field Services · GICS 10102050"),
    Subsector::new("grid_utilities.csv", "Utilities", "Electric · GICS 55105010"),
    Subsector::new("grid_renewables.csv", "Renewables", "Solar/Wind · GICS 20106020"),
    Subsector::new("grid_nuclear.csv", "Nuclear", "Operators/Fuel · GICS 55105010"),
    Subsector::new("grid_gridstorage.csv", "Grid & Storage", "T&D, Battery · GICS 20106010"),
    Subsector::new("grid_ev.csv", "EV", "Elec Vehicles · GICS 25102010"),
    Subsector::new("grid_powersemi.csv", "Power Semis", "Power Electronics · GICS 45301020"),
];
