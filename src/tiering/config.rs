use crate::acmg::terms::{EXTENDED_LOF_TERMS, PROTEIN_CODING_BIOTYPES};
use crate::model::{ModeOfInheritance, Penetrance, Phenotype, RoleInCancer};
use std::collections::{HashMap, HashSet};

/// Read-only configuration shared by one classification run. All lookup maps
/// are pre-loaded by the caller; the classifier never touches the filesystem.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub assembly: String,
    pub disorder: Option<Phenotype>,
    pub modes_of_inheritance: Vec<ModeOfInheritance>,
    pub penetrance: Option<Penetrance>,
    /// Gene name -> role in cancer.
    pub role_in_cancer: HashMap<String, RoleInCancer>,
    /// Variant id -> actionable phenotype ids.
    pub actionable_variants: HashMap<String, Vec<String>>,
    pub biotypes: HashSet<String>,
    pub so_terms: HashSet<String>,
    pub include_untiered: bool,
    pub required_overlap_percentage: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            assembly: "GRCh38".to_string(),
            disorder: None,
            modes_of_inheritance: Vec::new(),
            penetrance: None,
            role_in_cancer: HashMap::new(),
            actionable_variants: HashMap::new(),
            biotypes: PROTEIN_CODING_BIOTYPES
                .iter()
                .map(|biotype| biotype.to_string())
                .collect(),
            so_terms: EXTENDED_LOF_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
            include_untiered: false,
            required_overlap_percentage: 90.0,
        }
    }
}
