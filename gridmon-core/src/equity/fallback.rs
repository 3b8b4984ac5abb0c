//! Curated subsector figures used when no Capital IQ conversion is on disk.

use crate::domain::{PeriodRow, PeriodTable, Provenance, SubsectorSummary};

type Row = [&'static str; 3];

struct Curated {
    name: &'static str,
    sub: &'static str,
    mktcap: &'static str,
    pe: &'static str,
    price: Row,
    eps: Row,
    pe_chg: Row,
    ev_chg: Row,
    spark: [u32; 7],
}

const CURATED: &[Curated] = &[
    Curated {
        name: "Oil E&P",
        sub: "Upstream · GICS 10102010",
        mktcap: "$1.84T",
        pe: "8.2x",
        price: ["-4.2%", "+11.3%", "+38.7%"],
        eps: ["-2.1%", "+3.4%", "+18.2%"],
        pe_chg: ["-0.8x", "+1.2x", "+3.4x"],
        ev_chg: ["-0.4x", "+0.9x", "+2.1x"],
        spark: [30, 45, 38, 52, 40, 35, 28],
    },
    Curated {
        name: "Midstream",
        sub: "Pipelines/MLPs · GICS 10102030",
        mktcap: "$620B",
        pe: "14.8x",
        price: ["+2.1%", "+9.4%", "+24.3%"],
        eps: ["+1.4%", "+5.2%", "+12.8%"],
        pe_chg: ["+0.3x", "+1.8x", "+2.6x"],
        ev_chg: ["+0.2x", "+1.1x", "+1.9x"],
        spark: [45, 48, 50, 52, 49, 51, 53],
    },
    Curated {
        name: "LNG",
        sub: "Export/Import · GICS 10102030",
        mktcap: "$340B",
        pe: "11.4x",
        price: ["+1.3%", "+14.2%", "+52.1%"],
        eps: ["+4.8%", "+12.3%", "+34.5%"],
        pe_chg: ["-0.2x", "+0.8x", "+4.2x"],
        ev_chg: ["+0.1x", "+1.3x", "+3.8x"],
        spark: [40, 42, 48, 55, 52, 58, 61],
    },
    Curated {
        name: "Refiners",
        sub: "Downstream · GICS 10102040",
        mktcap: "$280B",
        pe: "6.9x",
        price: ["-6.8%", "-3.2%", "+12.4%"],
        eps: ["-11.2%", "-8.4%", "+4.3%"],
        pe_chg: ["-1.2x", "-0.8x", "+1.2x"],
        ev_chg: ["-0.6x", "-0.4x", "+0.8x"],
        spark: [60, 55, 48, 42, 38, 32, 28],
    },
    Curated {
        name: "Oil Services",
        sub: "Field Services · GICS 10102050",
        mktcap: "$520B",
        pe: "13.1x",
        price: ["-3.4%", "+6.8%", "+44.2%"],
        eps: ["+2.1%", "+8.4%", "+22.6%"],
        pe_chg: ["-0.4x", "+1.4x", "+3.8x"],
        ev_chg: ["-0.2x", "+1.0x", "+2.4x"],
        spark: [50, 48, 52, 55, 50, 48, 46],
    },
    Curated {
        name: "Utilities",
        sub: "Electric · GICS 55105010",
        mktcap: "$1.12T",
        pe: "16.4x",
        price: ["+3.8%", "+12.4%", "+18.2%"],
        eps: ["+2.8%", "+6.4%", "+14.3%"],
        pe_chg: ["+0.6x", "+2.1x", "+1.8x"],
        ev_chg: ["+0.4x", "+1.4x", "+1.2x"],
        spark: [40, 42, 45, 48, 52, 55, 58],
    },
    Curated {
        name: "Renewables",
        sub: "Solar/Wind · GICS 20106020",
        mktcap: "$890B",
        pe: "22.8x",
        price: ["+8.4%", "+24.8%", "+62.4%"],
        eps: ["+12.3%", "+28.4%", "+84.2%"],
        pe_chg: ["+1.8x", "+4.2x", "+8.6x"],
        ev_chg: ["+1.2x", "+3.1x", "+6.4x"],
        spark: [20, 28, 35, 42, 52, 62, 74],
    },
    Curated {
        name: "Nuclear",
        sub: "Operators/Fuel · GICS 55105010",
        mktcap: "$210B",
        pe: "18.2x",
        price: ["+6.2%", "+38.4%", "+142.8%"],
        eps: ["+8.4%", "+22.6%", "+68.4%"],
        pe_chg: ["+1.4x", "+5.8x", "+12.4x"],
        ev_chg: ["+0.8x", "+3.4x", "+8.2x"],
        spark: [15, 18, 25, 35, 48, 62, 80],
    },
    Curated {
        name: "Grid & Storage",
        sub: "T&D, Battery · GICS 20106010",
        mktcap: "$380B",
        pe: "24.4x",
        price: ["+11.2%", "+32.4%", "+88.6%"],
        eps: ["+9.8%", "+24.2%", "+56.4%"],
        pe_chg: ["+2.2x", "+5.4x", "+10.8x"],
        ev_chg: ["+1.4x", "+3.8x", "+7.2x"],
        spark: [22, 28, 36, 45, 58, 68, 82],
    },
    Curated {
        name: "EV",
        sub: "Elec Vehicles · GICS 25102010",
        mktcap: "$780B",
        pe: "34.2x",
        price: ["+5.8%", "+18.4%", "+124.2%"],
        eps: ["+14.2%", "+32.4%", "+112.8%"],
        pe_chg: ["+2.8x", "+6.4x", "+18.4x"],
        ev_chg: ["+1.8x", "+4.2x", "+12.4x"],
        spark: [18, 22, 28, 38, 52, 66, 82],
    },
    Curated {
        name: "Power Semis",
        sub: "Power Electronics · GICS 45301020",
        mktcap: "$420B",
        pe: "28.6x",
        price: ["+9.2%", "+28.4%", "+96.4%"],
        eps: ["+11.4%", "+24.8%", "+72.4%"],
        pe_chg: ["+2.4x", "+5.2x", "+14.8x"],
        ev_chg: ["+1.6x", "+3.6x", "+9.8x"],
        spark: [20, 24, 32, 44, 58, 72, 88],
    },
];

fn period_row([ytd, y1, y3]: Row) -> PeriodRow {
    PeriodRow::new(ytd, y1, y3)
}

/// The curated table, stamped with `as_of` so it carries the same fields as
/// a converted export.
pub fn fallback_table(as_of: &str) -> Vec<SubsectorSummary> {
    CURATED
        .iter()
        .map(|c| SubsectorSummary {
            name: c.name.to_string(),
            sub: c.sub.to_string(),
            mktcap: c.mktcap.to_string(),
            pe: c.pe.to_string(),
            data: PeriodTable {
                price: period_row(c.price),
                eps: period_row(c.eps),
                pe: period_row(c.pe_chg),
                ev: period_row(c.ev_chg),
            },
            spark: c.spark.to_vec(),
            source: Provenance::Static,
            as_of: as_of.to_string(),
            n_companies: 0,
        })
        .collect()
}
