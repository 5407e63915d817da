//! Cost tables: per-sq-ft rates, category splits, payment schedule, payment milestones.

use crate::domain::{ProjectType, QualityLevel};
use crate::error::{ConfigurationError, LookupTable};

use ProjectType::{Construction, Interior, Renovation};
use QualityLevel::{Luxury, Premium, Standard};

/// Rate in INR per sq ft for one `(quality, type, subtype)` key.
#[derive(Debug, Clone, Copy)]
pub struct RateEntry {
    pub quality: QualityLevel,
    pub project_type: ProjectType,
    pub subtype: &'static str,
    pub rate: f64,
}

const fn rate(
    quality: QualityLevel,
    project_type: ProjectType,
    subtype: &'static str,
    rate: f64,
) -> RateEntry {
    RateEntry {
        quality,
        project_type,
        subtype,
        rate,
    }
}

pub const RATES: &[RateEntry] = &[
    rate(Standard, Construction, "residential", 1800.0),
    rate(Standard, Construction, "villa", 2200.0),
    rate(Standard, Construction, "apartment", 2000.0),
    rate(Standard, Construction, "commercial", 2400.0),
    rate(Standard, Interior, "apartment", 1200.0),
    rate(Standard, Interior, "villa", 1500.0),
    rate(Standard, Interior, "office", 1000.0),
    rate(Standard, Interior, "retail", 1100.0),
    rate(Standard, Renovation, "kitchen", 1500.0),
    rate(Standard, Renovation, "bathroom", 1800.0),
    rate(Standard, Renovation, "full_home", 900.0),
    rate(Standard, Renovation, "office", 800.0),
    rate(Premium, Construction, "residential", 2500.0),
    rate(Premium, Construction, "villa", 3000.0),
    rate(Premium, Construction, "apartment", 2800.0),
    rate(Premium, Construction, "commercial", 3200.0),
    rate(Premium, Interior, "apartment", 2000.0),
    rate(Premium, Interior, "villa", 2500.0),
    rate(Premium, Interior, "office", 1700.0),
    rate(Premium, Interior, "retail", 1800.0),
    rate(Premium, Renovation, "kitchen", 2400.0),
    rate(Premium, Renovation, "bathroom", 2800.0),
    rate(Premium, Renovation, "full_home", 1500.0),
    rate(Premium, Renovation, "office", 1300.0),
    rate(Luxury, Construction, "residential", 3500.0),
    rate(Luxury, Construction, "villa", 4500.0),
    rate(Luxury, Construction, "apartment", 4000.0),
    rate(Luxury, Construction, "commercial", 4200.0),
    rate(Luxury, Interior, "apartment", 3500.0),
    rate(Luxury, Interior, "villa", 4000.0),
    rate(Luxury, Interior, "office", 2800.0),
    rate(Luxury, Interior, "retail", 3000.0),
    rate(Luxury, Renovation, "kitchen", 3800.0),
    rate(Luxury, Renovation, "bathroom", 4200.0),
    rate(Luxury, Renovation, "full_home", 2500.0),
    rate(Luxury, Renovation, "office", 2200.0),
];

/// Rate in INR per sq ft.
///
/// A miss blames `subtype` when the subtype is unknown for the type at any
/// tier, and `qualityLevel` when only the tier is missing.
pub fn rate_per_sqft(
    project_type: ProjectType,
    subtype: &str,
    quality: QualityLevel,
) -> Result<f64, ConfigurationError> {
    let mut subtype_known = false;
    for e in RATES {
        if e.project_type != project_type || e.subtype != subtype {
            continue;
        }
        if e.quality == quality {
            return Ok(e.rate);
        }
        subtype_known = true;
    }

    let field = if subtype_known { "qualityLevel" } else { "subtype" };
    Err(ConfigurationError::new(
        field,
        format!("{}/{project_type}/{subtype}", quality.as_str()),
        LookupTable::Rate,
    ))
}

/// Cost split by trade, in percent of base cost.
pub fn categories(project_type: ProjectType) -> &'static [(&'static str, f64)] {
    match project_type {
        Construction => &[
            ("Structure", 25.0),
            ("Finishing", 20.0),
            ("Flooring", 12.0),
            ("Electrical", 8.0),
            ("Plumbing", 6.0),
            ("Doors & windows", 8.0),
            ("Painting", 6.0),
            ("External development", 5.0),
            ("Labor", 10.0),
        ],
        Interior => &[
            ("Design & planning", 10.0),
            ("Carpentry & furniture", 30.0),
            ("False ceiling", 8.0),
            ("Flooring", 12.0),
            ("Electrical & lighting", 12.0),
            ("Plumbing & sanitary", 6.0),
            ("Painting", 8.0),
            ("Soft furnishings", 6.0),
            ("Labor", 8.0),
        ],
        Renovation => &[
            ("Demolition", 8.0),
            ("Civil repairs", 22.0),
            ("Flooring", 14.0),
            ("Electrical", 12.0),
            ("Plumbing", 12.0),
            ("Carpentry", 12.0),
            ("Painting", 10.0),
            ("Labor", 10.0),
        ],
    }
}

/// Front-loaded monthly payment schedule, percent per month.
pub const PAYMENT_SCHEDULE: [f64; 8] = [15.0, 20.0, 15.0, 15.0, 10.0, 10.0, 10.0, 5.0];

/// Ordered payment milestones; the first labels month one and the last the final month.
pub fn payment_milestones(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        Construction => &[
            "Booking advance",
            "Foundation complete",
            "Plinth level",
            "Slab casting",
            "Brickwork complete",
            "MEP rough-in",
            "Plastering & flooring",
            "Handover",
        ],
        Interior => &[
            "Design sign-off",
            "Site readiness",
            "Electrical & plumbing",
            "Carpentry delivery",
            "Painting & polish",
            "Handover",
        ],
        Renovation => &[
            "Assessment advance",
            "Demolition complete",
            "Repairs complete",
            "Services complete",
            "Handover",
        ],
    }
}
