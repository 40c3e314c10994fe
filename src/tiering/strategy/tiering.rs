use crate::acmg::terms::{EXTENDED_LOF_TERMS, TIER1_ACCESSIONS, TIER2_ACCESSIONS};
use crate::model::{
    ClinicalVariantEvidence, DiseasePanel, ModeOfInheritance, SequenceOntologyTerm, Tier, Variant,
};
use crate::tiering::build_evidence;
use crate::tiering::config::ClassifyConfig;
use crate::tiering::index::PanelIndex;
use crate::tiering::strategy::biotype_allowed;

/// Mode-of-inheritance-driven tiering. Evidence is produced per
/// (consequence type, panel, candidate mode of inheritance); only consequence
/// terms on the extended loss-of-function allow-list are considered at all.
pub(crate) fn create_evidences(
    variant: &Variant,
    index: &PanelIndex,
    config: &ClassifyConfig,
) -> Vec<ClinicalVariantEvidence> {
    let mut evidences = Vec::new();
    let exact_match = index.contains_variant(variant);

    for consequence_type in variant.consequence_types() {
        if !biotype_allowed(consequence_type, config) {
            continue;
        }

        let relevant_terms: Vec<&SequenceOntologyTerm> = consequence_type
            .sequence_ontology_terms
            .iter()
            .filter(|term| EXTENDED_LOF_TERMS.contains(term.name.as_str()))
            .collect();

        let gene_id = consequence_type.gene_id.as_deref();
        let gene_panels = gene_id.and_then(|gene_id| index.panels_for_gene(gene_id));

        let Some(panels) = gene_panels else {
            // out of every panel: still reportable as Tier3 when the
            // consequence passes the extended-LOF gate
            if !relevant_terms.is_empty() {
                evidences.push(build_evidence(
                    variant,
                    Some(consequence_type),
                    None,
                    Some(Tier::Tier3),
                    config.modes_of_inheritance.clone(),
                    exact_match,
                    config,
                    "gene not in any panel",
                ));
            }
            continue;
        };

        for &panel in panels {
            let declared = gene_id.and_then(|gene_id| index.moi_for(gene_id, &panel.id));
            match declared {
                Some(declared_moi) => {
                    for &candidate in &config.modes_of_inheritance {
                        if candidate == ModeOfInheritance::Unknown {
                            // wildcard hypothesis: tier by panel region overlap
                            if let Some(tier) = region_overlap_tier(variant, panel, config) {
                                evidences.push(build_evidence(
                                    variant,
                                    Some(consequence_type),
                                    Some(panel),
                                    Some(tier),
                                    vec![candidate],
                                    exact_match,
                                    config,
                                    "panel region overlap",
                                ));
                            }
                        } else if candidate == declared_moi {
                            if let Some(tier) = severity_tier(&relevant_terms) {
                                evidences.push(build_evidence(
                                    variant,
                                    Some(consequence_type),
                                    Some(panel),
                                    Some(tier),
                                    vec![candidate],
                                    exact_match,
                                    config,
                                    "concordant mode of inheritance",
                                ));
                            }
                        } else if declared_moi == ModeOfInheritance::Unknown
                            && !relevant_terms.is_empty()
                        {
                            evidences.push(build_evidence(
                                variant,
                                Some(consequence_type),
                                Some(panel),
                                Some(Tier::Tier3),
                                vec![candidate],
                                exact_match,
                                config,
                                "panel mode of inheritance unknown",
                            ));
                        }
                        // discordant declared mode otherwise: discarded
                    }
                }
                None => {
                    if !relevant_terms.is_empty() {
                        for &candidate in &config.modes_of_inheritance {
                            evidences.push(build_evidence(
                                variant,
                                Some(consequence_type),
                                Some(panel),
                                None,
                                vec![candidate],
                                exact_match,
                                config,
                                "panel gene without declared mode of inheritance",
                            ));
                        }
                    }
                }
            }
        }
    }
    evidences
}

fn severity_tier(relevant_terms: &[&SequenceOntologyTerm]) -> Option<Tier> {
    if relevant_terms.is_empty() {
        return None;
    }
    if relevant_terms
        .iter()
        .any(|term| TIER1_ACCESSIONS.contains(term.accession.as_str()))
    {
        Some(Tier::Tier1)
    } else if relevant_terms
        .iter()
        .any(|term| TIER2_ACCESSIONS.contains(term.accession.as_str()))
    {
        Some(Tier::Tier2)
    } else {
        Some(Tier::Tier3)
    }
}

fn region_overlap_tier(
    variant: &Variant,
    panel: &DiseasePanel,
    config: &ClassifyConfig,
) -> Option<Tier> {
    let mut best_overlap: Option<f64> = None;
    for region in &panel.regions {
        if !region.assembly.eq_ignore_ascii_case(&config.assembly) {
            continue;
        }
        if region.region.contig != variant.chromosome {
            continue;
        }
        let overlap = region.region.overlap_percentage(variant.start, variant.end);
        if overlap <= 0.0 {
            continue;
        }
        best_overlap = Some(best_overlap.map_or(overlap, |best| best.max(overlap)));
    }
    best_overlap.map(|overlap| {
        if overlap >= config.required_overlap_percentage {
            Tier::Tier1
        } else {
            Tier::Tier2
        }
    })
}
