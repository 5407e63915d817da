//! Risk analyzer: a fixed rule list over the configuration and seasonal scan.
//!
//! Rules fire independently and are emitted in rule order.

use chrono::Datelike;

use crate::domain::{
    Impact, NormalizedConfiguration, ProjectType, QualityLevel, Risk, RiskCategory,
    SeasonalAnalysis, SeasonalRisk,
};
use crate::tables::calendar::is_festival_month;

const MATERIAL_IMPORT_CUSTOM_WORK: f64 = 40.0;

pub fn analyze(config: &NormalizedConfiguration, seasonal: &SeasonalAnalysis) -> Vec<Risk> {
    let mut risks = Vec::new();

    let weather_probability = match seasonal.risk {
        SeasonalRisk::LowRisk => None,
        SeasonalRisk::ModerateRisk => Some(50),
        SeasonalRisk::HighRisk => Some(80),
    };
    if let Some(probability) = weather_probability {
        risks.push(risk(
            RiskCategory::Weather,
            format!(
                "Span overlaps {} monsoon month(s) with about {} rain days and {} extreme-weather days",
                seasonal.monsoon_months.len(),
                seasonal.monsoon_impact,
                seasonal.extreme_weather_days
            ),
            probability,
            Impact::High,
            "Schedule weather-sensitive work outside the monsoon and keep covered storage on site",
        ));
    }

    if config.quality_level == QualityLevel::Luxury
        || config.custom_work > MATERIAL_IMPORT_CUSTOM_WORK
    {
        risks.push(risk(
            RiskCategory::MaterialImport,
            "Imported or bespoke materials may arrive late".to_string(),
            40,
            Impact::Medium,
            "Place long-lead orders at design sign-off and approve local alternates",
        ));
    }

    if config.project_type() == ProjectType::Construction {
        risks.push(risk(
            RiskCategory::PermitApproval,
            "Building permits and inspections can stall structural work".to_string(),
            30,
            Impact::High,
            "File permit applications early and engage a liaison for approvals",
        ));
    }

    if is_festival_month(config.start_date.month0()) {
        risks.push(risk(
            RiskCategory::LaborShortage,
            format!(
                "Work starts in {}, when festival leave thins out crews",
                config.start_date.format("%B")
            ),
            70,
            Impact::Medium,
            "Confirm crew commitments in advance and budget for festival incentives",
        ));
    }

    if config.smart_home || config.sustainability {
        risks.push(risk(
            RiskCategory::IntegrationComplexity,
            "Smart-home or green systems need coordination across trades".to_string(),
            35,
            Impact::Medium,
            "Appoint a single systems integrator and freeze the device list before MEP",
        ));
    }

    risks.push(risk(
        RiskCategory::CostEscalation,
        "Cement, steel and finish prices can rise during the project".to_string(),
        60,
        Impact::Medium,
        "Lock prices for bulk materials and keep a 10% contingency",
    ));

    risks
}

fn risk(
    category: RiskCategory,
    description: String,
    probability_percent: u8,
    impact: Impact,
    mitigation: &str,
) -> Risk {
    Risk {
        category,
        description,
        probability_percent,
        impact,
        mitigation: mitigation.to_string(),
    }
}
