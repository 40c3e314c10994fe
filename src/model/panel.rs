use crate::utils::GenomicRegion;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseasePanel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genes: Vec<PanelGene>,
    #[serde(default)]
    pub variants: Vec<PanelVariant>,
    #[serde(default)]
    pub regions: Vec<PanelRegion>,
    #[serde(default)]
    pub strs: Vec<PanelStr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelGene {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_of_inheritance: Option<ModeOfInheritance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub coordinates: Vec<PanelCoordinate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelVariant {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRegion {
    pub id: String,
    pub assembly: String,
    pub region: GenomicRegion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStr {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<PanelCoordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelCoordinate {
    pub assembly: String,
    pub region: GenomicRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModeOfInheritance {
    AutosomalDominant,
    AutosomalRecessive,
    XLinkedDominant,
    XLinkedRecessive,
    YLinked,
    Mitochondrial,
    DeNovo,
    CompoundHeterozygous,
    Unknown,
}

impl FromStr for ModeOfInheritance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AUTOSOMAL_DOMINANT" => Ok(ModeOfInheritance::AutosomalDominant),
            "AUTOSOMAL_RECESSIVE" => Ok(ModeOfInheritance::AutosomalRecessive),
            "X_LINKED_DOMINANT" => Ok(ModeOfInheritance::XLinkedDominant),
            "X_LINKED_RECESSIVE" => Ok(ModeOfInheritance::XLinkedRecessive),
            "Y_LINKED" => Ok(ModeOfInheritance::YLinked),
            "MITOCHONDRIAL" => Ok(ModeOfInheritance::Mitochondrial),
            "DE_NOVO" => Ok(ModeOfInheritance::DeNovo),
            "COMPOUND_HETEROZYGOUS" => Ok(ModeOfInheritance::CompoundHeterozygous),
            "UNKNOWN" => Ok(ModeOfInheritance::Unknown),
            _ => Err(format!("Unknown mode of inheritance: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Penetrance {
    Complete,
    Incomplete,
}

impl FromStr for Penetrance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "complete" => Ok(Penetrance::Complete),
            "incomplete" => Ok(Penetrance::Incomplete),
            _ => Err("Penetrance must be 'complete' or 'incomplete'".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}
