use crate::model::{ClinicalVariantEvidence, Tier, Variant};
use crate::tiering::build_evidence;
use crate::tiering::config::ClassifyConfig;
use crate::tiering::index::PanelIndex;
use crate::tiering::strategy::biotype_allowed;

/// TEAM tiering: exact panel variants on protein-coding transcripts are
/// Tier1, panel genes Tier2. No consequence-term gate and no untiered output.
pub(crate) fn create_evidences(
    variant: &Variant,
    index: &PanelIndex,
    config: &ClassifyConfig,
) -> Vec<ClinicalVariantEvidence> {
    let mut evidences = Vec::new();
    let variant_panels = index.panels_for_variant(variant);
    let exact_match = variant_panels.is_some();

    for consequence_type in variant.consequence_types() {
        if !biotype_allowed(consequence_type, config) {
            continue;
        }

        if let Some(panels) = variant_panels {
            for &panel in panels {
                evidences.push(build_evidence(
                    variant,
                    Some(consequence_type),
                    Some(panel),
                    Some(Tier::Tier1),
                    config.modes_of_inheritance.clone(),
                    exact_match,
                    config,
                    "exact panel variant match",
                ));
            }
            continue;
        }

        let gene_panels = consequence_type
            .gene_id
            .as_deref()
            .and_then(|gene_id| index.panels_for_gene(gene_id));
        if let Some(panels) = gene_panels {
            for &panel in panels {
                evidences.push(build_evidence(
                    variant,
                    Some(consequence_type),
                    Some(panel),
                    Some(Tier::Tier2),
                    config.modes_of_inheritance.clone(),
                    exact_match,
                    config,
                    "panel gene match",
                ));
            }
        }
    }
    evidences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ConsequenceType, DiseasePanel, PanelGene, PanelVariant, SequenceOntologyTerm,
        VariantAnnotation,
    };

    fn variant_with_biotype(gene_id: &str, biotype: &str) -> Variant {
        Variant {
            id: None,
            chromosome: "chr17".to_string(),
            start: 43045712,
            end: 43045712,
            reference: "C".to_string(),
            alternate: "T".to_string(),
            annotation: Some(VariantAnnotation {
                consequence_types: vec![ConsequenceType {
                    gene_id: Some(gene_id.to_string()),
                    gene_name: Some(gene_id.to_string()),
                    transcript_id: None,
                    biotype: Some(biotype.to_string()),
                    sequence_ontology_terms: vec![SequenceOntologyTerm {
                        name: "intron_variant".to_string(),
                        accession: "SO:0001627".to_string(),
                    }],
                    protein_substitution_scores: Vec::new(),
                }],
                ..Default::default()
            }),
        }
    }

    fn brca_panel() -> Vec<DiseasePanel> {
        vec![DiseasePanel {
            id: "breast-cancer".to_string(),
            name: "Breast cancer".to_string(),
            genes: vec![PanelGene {
                id: "BRCA1".to_string(),
                ..Default::default()
            }],
            variants: vec![PanelVariant {
                id: "chr17:43045712:C:T".to_string(),
            }],
            ..Default::default()
        }]
    }

    #[test]
    fn exact_variant_on_protein_coding_is_tier1() {
        let panels = brca_panel();
        let index = PanelIndex::build(&panels);
        let config = ClassifyConfig::default();

        let variant = variant_with_biotype("BRCA1", "protein_coding");
        let evidences = create_evidences(&variant, &index, &config);
        assert_eq!(evidences.len(), 1);
        assert_eq!(evidences[0].classification.tier, Some(Tier::Tier1));
    }

    #[test]
    fn non_coding_biotype_produces_nothing() {
        let panels = brca_panel();
        let index = PanelIndex::build(&panels);
        let config = ClassifyConfig::default();

        let variant = variant_with_biotype("BRCA1", "lincRNA");
        assert!(create_evidences(&variant, &index, &config).is_empty());
    }

    #[test]
    fn panel_gene_without_exact_variant_is_tier2_regardless_of_term() {
        let panels = brca_panel();
        let index = PanelIndex::build(&panels);
        let config = ClassifyConfig::default();

        let mut variant = variant_with_biotype("BRCA1", "protein_coding");
        variant.start = 43051100;
        variant.end = 43051100;
        let evidences = create_evidences(&variant, &index, &config);
        assert_eq!(evidences.len(), 1);
        assert_eq!(evidences[0].classification.tier, Some(Tier::Tier2));
    }
}
