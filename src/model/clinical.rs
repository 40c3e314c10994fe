use crate::model::panel::{ModeOfInheritance, Penetrance};
use crate::model::variant::{ClinicalSignificance, SequenceOntologyTerm, Variant};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One ACMG evidence code with optional free-text context. Codes are
/// order-independent; identical codes collapse under set semantics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AcmgEvidence {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AcmgEvidence {
    pub fn new(code: &str) -> Self {
        AcmgEvidence {
            code: code.to_string(),
            gene: None,
            transcript: None,
            description: None,
        }
    }

    /// Alphabetic prefix of the code with trailing digits stripped,
    /// e.g. "PVS1" -> "PVS".
    pub fn prefix(&self) -> &str {
        self.code.trim_end_matches(|c: char| c.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Tier1")]
    Tier1,
    #[serde(rename = "Tier2")]
    Tier2,
    #[serde(rename = "Tier3")]
    Tier3,
}

impl Tier {
    pub fn score(&self) -> f64 {
        match self {
            Tier::Tier1 => 3.0,
            Tier::Tier2 => 2.0,
            Tier::Tier3 => 1.0,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Tier1 => write!(f, "Tier1"),
            Tier::Tier2 => write!(f, "Tier2"),
            Tier::Tier3 => write!(f, "Tier3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantClassification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub acmg: Vec<AcmgEvidence>,
    pub clinical_significance: ClinicalSignificance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_association: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functional_effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tumorigenesis: Option<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl VariantClassification {
    pub fn new(
        tier: Option<Tier>,
        acmg: Vec<AcmgEvidence>,
        clinical_significance: ClinicalSignificance,
    ) -> Self {
        VariantClassification {
            tier,
            acmg,
            clinical_significance,
            drug_response: None,
            trait_association: None,
            functional_effect: None,
            tumorigenesis: None,
            other: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomicFeature {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,
    #[serde(default)]
    pub consequence_types: Vec<SequenceOntologyTerm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleInCancer {
    Oncogene,
    TumorSuppressorGene,
    Fusion,
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phenotype {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVariantEvidence {
    pub genomic_feature: GenomicFeature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<String>,
    #[serde(default)]
    pub modes_of_inheritance: Vec<ModeOfInheritance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penetrance: Option<Penetrance>,
    pub classification: VariantClassification,
    pub score: f64,
    #[serde(default)]
    pub fully_explain_phenotypes: bool,
    #[serde(default)]
    pub actionable: bool,
    #[serde(default)]
    pub compound_heterozygous_variant_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_in_cancer: Option<RoleInCancer>,
    #[serde(default)]
    pub phenotypes: Vec<Phenotype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    #[default]
    NotReviewed,
    UnderReview,
    Reviewed,
    Rejected,
    ToBeReported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVariant {
    pub variant: Variant,
    pub evidences: Vec<ClinicalVariantEvidence>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl ClinicalVariant {
    pub fn new(variant: Variant, evidences: Vec<ClinicalVariantEvidence>) -> Self {
        ClinicalVariant {
            variant,
            evidences,
            comments: Vec::new(),
            status: ReviewStatus::NotReviewed,
            attributes: HashMap::new(),
        }
    }
}
