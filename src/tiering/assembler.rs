use crate::model::{ClinicalVariant, ClinicalVariantEvidence, Variant};
use crate::tiering::config::ClassifyConfig;
use crate::tiering::{actionable_phenotypes, build_evidence, mark_actionable};
use itertools::Itertools;
use std::collections::HashMap;

/// Wraps per-variant evidence into a clinical variant. A variant with no
/// evidence produces no record.
pub fn assemble(variant: &Variant, evidences: Vec<ClinicalVariantEvidence>) -> Option<ClinicalVariant> {
    if evidences.is_empty() {
        return None;
    }
    Some(ClinicalVariant::new(variant.clone(), evidences))
}

/// Builds secondary-finding records for variants present in the configured
/// actionable-variant map, independent of panel membership or tier.
pub fn assemble_secondary_findings(
    variants: &[Variant],
    config: &ClassifyConfig,
) -> Vec<ClinicalVariant> {
    let mut clinical_variants = Vec::new();
    for variant in variants {
        let Some(phenotype_ids) = actionable_phenotypes(config, variant) else {
            continue;
        };

        let consequence_types = variant.consequence_types();
        let mut evidences = if consequence_types.is_empty() {
            vec![build_evidence(
                variant,
                None,
                None,
                None,
                Vec::new(),
                false,
                config,
                "actionable variant",
            )]
        } else {
            consequence_types
                .iter()
                .map(|consequence_type| {
                    build_evidence(
                        variant,
                        Some(consequence_type),
                        None,
                        None,
                        Vec::new(),
                        false,
                        config,
                        "actionable variant",
                    )
                })
                .collect()
        };
        for evidence in &mut evidences {
            mark_actionable(evidence, phenotype_ids);
        }

        if let Some(clinical_variant) = assemble(variant, evidences) {
            clinical_variants.push(clinical_variant);
        }
    }
    clinical_variants
}

/// For every member of a compound-heterozygous group, records the simplified
/// ids of all other members on its evidence.
pub fn group_compound_heterozygous(
    groups: HashMap<String, Vec<ClinicalVariant>>,
) -> Vec<ClinicalVariant> {
    let mut clinical_variants = Vec::new();
    for (_, mut members) in groups {
        let member_ids = members
            .iter()
            .map(|member| member.variant.simple_id())
            .collect_vec();
        for (position, member) in members.iter_mut().enumerate() {
            let partner_ids = member_ids
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != position)
                .map(|(_, id)| id.clone())
                .collect_vec();
            for evidence in &mut member.evidences {
                evidence.compound_heterozygous_variant_ids = partner_ids.clone();
            }
        }
        clinical_variants.append(&mut members);
    }
    clinical_variants
}

/// Concatenates the evidence of clinical variants sharing the same identity.
/// The first-seen instance is kept as the carrier; evidence is not
/// deduplicated.
pub fn merge(clinical_variants: Vec<ClinicalVariant>) -> Vec<ClinicalVariant> {
    let mut merged: Vec<ClinicalVariant> = Vec::new();
    let mut position_by_id: HashMap<String, usize> = HashMap::new();
    for clinical_variant in clinical_variants {
        let id = clinical_variant.variant.simple_id();
        match position_by_id.get(&id) {
            Some(&position) => merged[position]
                .evidences
                .extend(clinical_variant.evidences),
            None => {
                position_by_id.insert(id, merged.len());
                merged.push(clinical_variant);
            }
        }
    }
    merged
}
