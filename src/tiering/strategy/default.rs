use crate::model::{ClinicalVariantEvidence, Tier, Variant};
use crate::tiering::build_evidence;
use crate::tiering::config::ClassifyConfig;
use crate::tiering::index::PanelIndex;
use crate::tiering::strategy::{biotype_allowed, so_term_allowed};

/// Panel-membership tiering without mode-of-inheritance gating: exact panel
/// variants are Tier1, allow-listed consequences on panel genes are Tier2,
/// everything else is untiered.
pub(crate) fn create_evidences(
    variant: &Variant,
    index: &PanelIndex,
    config: &ClassifyConfig,
) -> Vec<ClinicalVariantEvidence> {
    let mut evidences = Vec::new();
    let variant_panels = index.panels_for_variant(variant);
    let exact_match = variant_panels.is_some();

    for consequence_type in variant.consequence_types() {
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
            if biotype_allowed(consequence_type, config) && so_term_allowed(consequence_type, config)
            {
                for &panel in panels {
                    evidences.push(build_evidence(
                        variant,
                        Some(consequence_type),
                        Some(panel),
                        Some(Tier::Tier2),
                        config.modes_of_inheritance.clone(),
                        exact_match,
                        config,
                        "consequence on panel gene",
                    ));
                }
                continue;
            }
        }

        if config.include_untiered {
            evidences.push(build_evidence(
                variant,
                Some(consequence_type),
                None,
                None,
                config.modes_of_inheritance.clone(),
                exact_match,
                config,
                "no panel match",
            ));
        }
    }
    evidences
}
