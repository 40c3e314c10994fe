use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub chromosome: String,
    pub start: u32,
    pub end: u32,
    pub reference: String,
    pub alternate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<VariantAnnotation>,
}

impl Variant {
    /// Renders the `chrom:start:ref:alt` identity used by panel and
    /// actionable-variant lookups.
    pub fn simple_id(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.chromosome, self.start, self.reference, self.alternate
        )
    }

    pub fn consequence_types(&self) -> &[ConsequenceType] {
        self.annotation
            .as_ref()
            .map(|annotation| annotation.consequence_types.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantAnnotation {
    #[serde(default)]
    pub consequence_types: Vec<ConsequenceType>,
    #[serde(default)]
    pub population_frequencies: Vec<PopulationFrequency>,
    #[serde(default)]
    pub conservation: Vec<Score>,
    #[serde(default)]
    pub functional_score: Vec<Score>,
    #[serde(default)]
    pub trait_association: Vec<EvidenceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsequenceType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biotype: Option<String>,
    #[serde(default)]
    pub sequence_ontology_terms: Vec<SequenceOntologyTerm>,
    #[serde(default)]
    pub protein_substitution_scores: Vec<Score>,
}

impl ConsequenceType {
    pub fn has_term(&self, name: &str) -> bool {
        self.sequence_ontology_terms.iter().any(|term| term.name == name)
    }

    pub fn substitution_score(&self, source: &str) -> Option<f64> {
        score_of(&self.protein_substitution_scores, source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOntologyTerm {
    pub name: String,
    pub accession: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationFrequency {
    pub study: String,
    pub alt_allele_freq: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub source: String,
    pub value: f64,
}

pub fn score_of(scores: &[Score], source: &str) -> Option<f64> {
    scores
        .iter()
        .find(|score| score.source.eq_ignore_ascii_case(source))
        .map(|score| score.value)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_significance: Option<ClinicalSignificance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalSignificance {
    Benign,
    LikelyBenign,
    UncertainSignificance,
    LikelyPathogenic,
    Pathogenic,
}

impl ClinicalSignificance {
    /// True for the pathogenic and likely_pathogenic grades.
    pub fn is_pathogenic(&self) -> bool {
        matches!(
            self,
            ClinicalSignificance::Pathogenic | ClinicalSignificance::LikelyPathogenic
        )
    }

    /// True for the benign and likely_benign grades.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            ClinicalSignificance::Benign | ClinicalSignificance::LikelyBenign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_id_renders_chrom_start_ref_alt() {
        let variant = Variant {
            id: None,
            chromosome: "chr7".to_string(),
            start: 117559590,
            end: 117559590,
            reference: "G".to_string(),
            alternate: "A".to_string(),
            annotation: None,
        };
        assert_eq!(variant.simple_id(), "chr7:117559590:G:A");
    }

    #[test]
    fn consequence_types_empty_without_annotation() {
        let variant = Variant {
            id: Some("rs113993960".to_string()),
            chromosome: "chr7".to_string(),
            start: 117559590,
            end: 117559592,
            reference: "CTT".to_string(),
            alternate: "C".to_string(),
            annotation: None,
        };
        assert!(variant.consequence_types().is_empty());
    }

    #[test]
    fn score_lookup_is_case_insensitive() {
        let scores = vec![
            Score {
                source: "Sift".to_string(),
                value: 0.01,
            },
            Score {
                source: "polyphen".to_string(),
                value: 0.97,
            },
        ];
        assert_eq!(score_of(&scores, "sift"), Some(0.01));
        assert_eq!(score_of(&scores, "gerp"), None);
    }
}
