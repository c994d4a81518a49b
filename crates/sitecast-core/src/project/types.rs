use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of construction work.
///
/// Serde round-trips use the human-readable labels because the trained
/// model's one-hot feature columns are named after them
/// (`project_type_<label>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Residential Construction")]
    ResidentialConstruction,
    #[serde(rename = "Commercial Fit-Out")]
    CommercialFitOut,
    #[serde(rename = "Building Finishing")]
    BuildingFinishing,
    #[serde(rename = "Electrical Works")]
    ElectricalWorks,
    #[serde(rename = "HVAC Installation")]
    HvacInstallation,
    #[serde(rename = "Smart Home System")]
    SmartHomeSystem,
    #[serde(rename = "Security Systems")]
    SecuritySystems,
    #[serde(rename = "FTTH Infrastructure")]
    FtthInfrastructure,
    #[serde(rename = "Digital Screen Installation")]
    DigitalScreenInstallation,
}

impl ProjectType {
    /// All categories, in form-rendering order.
    pub const ALL: [ProjectType; 9] = [
        ProjectType::ResidentialConstruction,
        ProjectType::CommercialFitOut,
        ProjectType::BuildingFinishing,
        ProjectType::ElectricalWorks,
        ProjectType::HvacInstallation,
        ProjectType::SmartHomeSystem,
        ProjectType::SecuritySystems,
        ProjectType::FtthInfrastructure,
        ProjectType::DigitalScreenInstallation,
    ];

    /// Human-readable label, matching the trained one-hot column names.
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::ResidentialConstruction => "Residential Construction",
            ProjectType::CommercialFitOut => "Commercial Fit-Out",
            ProjectType::BuildingFinishing => "Building Finishing",
            ProjectType::ElectricalWorks => "Electrical Works",
            ProjectType::HvacInstallation => "HVAC Installation",
            ProjectType::SmartHomeSystem => "Smart Home System",
            ProjectType::SecuritySystems => "Security Systems",
            ProjectType::FtthInfrastructure => "FTTH Infrastructure",
            ProjectType::DigitalScreenInstallation => "Digital Screen Installation",
        }
    }

    /// Look a category up by its label. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative size band of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectSize {
    Small,
    Medium,
    Large,
}

impl ProjectSize {
    /// All size bands, smallest first.
    pub const ALL: [ProjectSize; 3] = [
        ProjectSize::Small,
        ProjectSize::Medium,
        ProjectSize::Large,
    ];

    /// Human-readable label, matching the trained one-hot column names.
    pub fn label(self) -> &'static str {
        match self {
            ProjectSize::Small => "Small",
            ProjectSize::Medium => "Medium",
            ProjectSize::Large => "Large",
        }
    }

    /// Look a size up by its label. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Multiplier applied to the base cost rate in the fallback formula.
    pub fn cost_factor(self) -> f64 {
        match self {
            ProjectSize::Small => 0.90,
            ProjectSize::Medium => 1.00,
            ProjectSize::Large => 1.15,
        }
    }
}

impl fmt::Display for ProjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for t in ProjectType::ALL {
            assert_eq!(ProjectType::from_label(t.label()), Some(t));
        }
        for s in ProjectSize::ALL {
            assert_eq!(ProjectSize::from_label(s.label()), Some(s));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(ProjectType::from_label("Bridge Demolition"), None);
        assert_eq!(ProjectSize::from_label("Gigantic"), None);
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&ProjectType::CommercialFitOut).unwrap();
        assert_eq!(json, "\"Commercial Fit-Out\"");
        let back: ProjectType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectType::CommercialFitOut);
    }

    #[test]
    fn cost_factors() {
        assert_eq!(ProjectSize::Small.cost_factor(), 0.90);
        assert_eq!(ProjectSize::Medium.cost_factor(), 1.00);
        assert_eq!(ProjectSize::Large.cost_factor(), 1.15);
    }
}
