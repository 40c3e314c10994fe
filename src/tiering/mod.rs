pub mod assembler;
pub mod config;
pub mod error;
pub mod index;
pub mod strategy;

pub use config::ClassifyConfig;
pub use error::ConfigError;
pub use index::PanelIndex;
pub use strategy::TierStrategy;

use crate::acmg;
use crate::model::{
    ClinicalSignificance, ClinicalVariant, ClinicalVariantEvidence, ConsequenceType, DiseasePanel,
    GenomicFeature, ModeOfInheritance, Phenotype, Tier, Variant, VariantClassification,
};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Tier-assignment engine. Holds the read-only panel indices and
/// configuration for one classification run; classification itself is
/// side-effect free, so a classifier can be shared across threads.
pub struct VariantClassifier<'a> {
    strategy: TierStrategy,
    config: &'a ClassifyConfig,
    index: PanelIndex<'a>,
}

impl<'a> VariantClassifier<'a> {
    pub fn new(
        strategy: TierStrategy,
        panels: &'a [DiseasePanel],
        config: &'a ClassifyConfig,
    ) -> Result<Self, ConfigError> {
        if strategy.requires_panels() && panels.is_empty() {
            return Err(ConfigError::MissingPanels {
                analysis: strategy.name(),
            });
        }
        Ok(VariantClassifier {
            strategy,
            config,
            index: PanelIndex::build(panels),
        })
    }

    /// Classifies a batch of variants. Variants yielding no evidence produce
    /// no output record.
    pub fn classify(&self, variants: &[Variant]) -> Result<Vec<ClinicalVariant>, ConfigError> {
        let mut clinical_variants = Vec::new();
        let mut any_gene_match = false;
        for variant in variants {
            any_gene_match |= self.matches_any_panel_gene(variant);
            if let Some(clinical_variant) = self.classify_one(variant) {
                clinical_variants.push(clinical_variant);
            }
        }
        if self.strategy == TierStrategy::Tiering && !any_gene_match {
            return Err(ConfigError::NoPanelGeneMatch);
        }
        Ok(clinical_variants)
    }

    pub fn classify_one(&self, variant: &Variant) -> Option<ClinicalVariant> {
        let mut evidences = match self.strategy {
            TierStrategy::Default => {
                strategy::default::create_evidences(variant, &self.index, self.config)
            }
            TierStrategy::Team => {
                strategy::team::create_evidences(variant, &self.index, self.config)
            }
            TierStrategy::Tiering => {
                strategy::tiering::create_evidences(variant, &self.index, self.config)
            }
        };

        if let Some(phenotype_ids) = actionable_phenotypes(self.config, variant) {
            for evidence in &mut evidences {
                mark_actionable(evidence, phenotype_ids);
            }
        }

        assembler::assemble(variant, evidences)
    }

    pub fn matches_any_panel_gene(&self, variant: &Variant) -> bool {
        variant
            .consequence_types()
            .iter()
            .filter_map(|consequence_type| consequence_type.gene_id.as_deref())
            .any(|gene_id| self.index.panels_for_gene(gene_id).is_some())
    }
}

/// Builds one evidence record: runs the ACMG evaluator and significance
/// aggregator for the given consequence/inheritance context, then attaches
/// panel, penetrance, disorder and role-in-cancer metadata. An exact panel
/// variant match forces the significance to pathogenic.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_evidence(
    variant: &Variant,
    consequence_type: Option<&ConsequenceType>,
    panel: Option<&DiseasePanel>,
    tier: Option<Tier>,
    modes_of_inheritance: Vec<ModeOfInheritance>,
    exact_panel_match: bool,
    config: &ClassifyConfig,
    justification: &str,
) -> ClinicalVariantEvidence {
    let acmg = match (consequence_type, variant.annotation.as_ref()) {
        (Some(consequence_type), Some(annotation)) => {
            acmg::evaluate(consequence_type, annotation, &modes_of_inheritance)
        }
        _ => BTreeSet::new(),
    };
    let clinical_significance = if exact_panel_match {
        ClinicalSignificance::Pathogenic
    } else {
        acmg::aggregate(&acmg)
    };

    let genomic_feature = match consequence_type {
        Some(consequence_type) => GenomicFeature {
            id: consequence_type.gene_id.clone().unwrap_or_default(),
            gene_name: consequence_type.gene_name.clone(),
            transcript_id: consequence_type.transcript_id.clone(),
            consequence_types: consequence_type.sequence_ontology_terms.clone(),
        },
        None => GenomicFeature {
            id: variant.simple_id(),
            ..Default::default()
        },
    };

    let role_in_cancer = consequence_type
        .and_then(|consequence_type| consequence_type.gene_name.as_ref())
        .and_then(|gene_name| config.role_in_cancer.get(gene_name))
        .copied();

    ClinicalVariantEvidence {
        genomic_feature,
        panel_id: panel.map(|panel| panel.id.clone()),
        penetrance: config.penetrance,
        score: tier.map(|tier| tier.score()).unwrap_or(0.0),
        classification: VariantClassification::new(
            tier,
            acmg.into_iter().collect_vec(),
            clinical_significance,
        ),
        modes_of_inheritance,
        fully_explain_phenotypes: false,
        actionable: false,
        compound_heterozygous_variant_ids: Vec::new(),
        role_in_cancer,
        phenotypes: config.disorder.iter().cloned().collect(),
        justification: Some(justification.to_string()),
    }
}

/// Applies the actionable-variant overrides: untiered evidence is promoted to
/// Tier3, the actionable flag set, and a phenotype placeholder attached per
/// configured phenotype id.
pub(crate) fn mark_actionable(evidence: &mut ClinicalVariantEvidence, phenotype_ids: &[String]) {
    if evidence.classification.tier.is_none() {
        evidence.classification.tier = Some(Tier::Tier3);
        evidence.score = Tier::Tier3.score();
    }
    evidence.actionable = true;
    evidence
        .phenotypes
        .extend(phenotype_ids.iter().map(|id| Phenotype {
            id: id.clone(),
            name: String::new(),
        }));
}

pub(crate) fn actionable_phenotypes<'a>(
    config: &'a ClassifyConfig,
    variant: &Variant,
) -> Option<&'a [String]> {
    config
        .actionable_variants
        .get(&variant.simple_id())
        .or_else(|| {
            variant
                .id
                .as_ref()
                .and_then(|id| config.actionable_variants.get(id))
        })
        .map(|phenotype_ids| phenotype_ids.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PanelGene, PanelVariant, SequenceOntologyTerm, VariantAnnotation};

    fn cftr_variant() -> Variant {
        Variant {
            id: None,
            chromosome: "chr7".to_string(),
            start: 117559590,
            end: 117559590,
            reference: "G".to_string(),
            alternate: "A".to_string(),
            annotation: Some(VariantAnnotation {
                consequence_types: vec![ConsequenceType {
                    gene_id: Some("CFTR".to_string()),
                    gene_name: Some("CFTR".to_string()),
                    transcript_id: None,
                    biotype: Some("protein_coding".to_string()),
                    sequence_ontology_terms: vec![SequenceOntologyTerm {
                        name: "missense_variant".to_string(),
                        accession: "SO:0001583".to_string(),
                    }],
                    protein_substitution_scores: Vec::new(),
                }],
                ..Default::default()
            }),
        }
    }

    fn cftr_panel(with_variant: bool) -> Vec<DiseasePanel> {
        let mut panel = DiseasePanel {
            id: "cf".to_string(),
            name: "Cystic fibrosis".to_string(),
            genes: vec![PanelGene {
                id: "CFTR".to_string(),
                mode_of_inheritance: Some(ModeOfInheritance::AutosomalRecessive),
                ..Default::default()
            }],
            ..Default::default()
        };
        if with_variant {
            panel.variants.push(PanelVariant {
                id: "chr7:117559590:G:A".to_string(),
            });
        }
        vec![panel]
    }

    #[test]
    fn team_without_panels_fails_fast() {
        let config = ClassifyConfig::default();
        let result = VariantClassifier::new(TierStrategy::Team, &[], &config);
        assert_eq!(
            result.err(),
            Some(ConfigError::MissingPanels { analysis: "team" })
        );
    }

    #[test]
    fn default_without_panels_is_allowed() {
        let config = ClassifyConfig::default();
        assert!(VariantClassifier::new(TierStrategy::Default, &[], &config).is_ok());
    }

    #[test]
    fn tiering_errors_when_no_panel_gene_matches() {
        let panels = cftr_panel(false);
        let config = ClassifyConfig {
            modes_of_inheritance: vec![ModeOfInheritance::AutosomalRecessive],
            ..Default::default()
        };
        let classifier =
            VariantClassifier::new(TierStrategy::Tiering, &panels, &config).unwrap();

        let mut variant = cftr_variant();
        variant.annotation.as_mut().unwrap().consequence_types[0].gene_id =
            Some("TTN".to_string());
        let result = classifier.classify(std::slice::from_ref(&variant));
        assert_eq!(result.err(), Some(ConfigError::NoPanelGeneMatch));
    }

    #[test]
    fn exact_panel_variant_forces_pathogenic_significance() {
        let panels = cftr_panel(true);
        let config = ClassifyConfig {
            role_in_cancer: std::collections::HashMap::from([(
                "CFTR".to_string(),
                crate::model::RoleInCancer::TumorSuppressorGene,
            )]),
            ..Default::default()
        };
        let classifier =
            VariantClassifier::new(TierStrategy::Default, &panels, &config).unwrap();

        let clinical = classifier.classify_one(&cftr_variant()).unwrap();
        for evidence in &clinical.evidences {
            assert_eq!(
                evidence.classification.clinical_significance,
                ClinicalSignificance::Pathogenic
            );
            assert_eq!(
                evidence.role_in_cancer,
                Some(crate::model::RoleInCancer::TumorSuppressorGene)
            );
        }
    }

    #[test]
    fn actionable_variant_gets_tier3_flag_and_phenotypes() {
        let config = ClassifyConfig {
            include_untiered: true,
            actionable_variants: std::collections::HashMap::from([(
                "chr7:117559590:G:A".to_string(),
                vec!["HP:0005202".to_string(), "HP:0006528".to_string()],
            )]),
            ..Default::default()
        };
        let classifier = VariantClassifier::new(TierStrategy::Default, &[], &config).unwrap();

        let clinical = classifier.classify_one(&cftr_variant()).unwrap();
        let evidence = &clinical.evidences[0];
        assert_eq!(evidence.classification.tier, Some(Tier::Tier3));
        assert!(evidence.actionable);
        assert_eq!(evidence.phenotypes.len(), 2);
        assert_eq!(evidence.phenotypes[0].id, "HP:0005202");
    }

    #[test]
    fn variant_without_annotation_produces_no_record() {
        let panels = cftr_panel(true);
        let config = ClassifyConfig::default();
        let classifier =
            VariantClassifier::new(TierStrategy::Default, &panels, &config).unwrap();

        let mut variant = cftr_variant();
        variant.annotation = None;
        assert!(classifier.classify_one(&variant).is_none());
    }
}
