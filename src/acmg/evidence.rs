use crate::acmg::terms::{
    LOF_TERMS, PROTEIN_CODING, PROTEIN_LENGTH_CHANGING_TERMS, REFERENCE_FREQUENCY_STUDIES,
};
use crate::model::{
    score_of, AcmgEvidence, ConsequenceType, EvidenceEntry, ModeOfInheritance, VariantAnnotation,
};
use std::collections::BTreeSet;

const CLINVAR: &str = "clinvar";

/// Evaluates the ACMG evidence rules for one consequence type of an annotated
/// variant. Each rule fires independently; missing annotation sections mean
/// the rule does not fire, never an error.
pub fn evaluate(
    consequence_type: &ConsequenceType,
    annotation: &VariantAnnotation,
    modes_of_inheritance: &[ModeOfInheritance],
) -> BTreeSet<AcmgEvidence> {
    let mut evidences = BTreeSet::new();
    let mut add = |code: &str, description: Option<&str>| {
        let mut evidence = AcmgEvidence::new(code);
        evidence.gene = consequence_type
            .gene_name
            .clone()
            .or_else(|| consequence_type.gene_id.clone());
        evidence.transcript = consequence_type.transcript_id.clone();
        evidence.description = description.map(str::to_string);
        evidences.insert(evidence);
    };

    // PVS1
    if consequence_type
        .sequence_ontology_terms
        .iter()
        .any(|term| LOF_TERMS.contains(term.name.as_str()))
    {
        add("PVS1", Some("loss-of-function consequence"));
    }

    // PS1 / BP7: synonymous change with a ClinVar assertion
    if consequence_type.has_term("synonymous_variant") {
        for entry in clinvar_entries(annotation) {
            if entry
                .clinical_significance
                .is_some_and(|significance| significance.is_pathogenic())
            {
                add("PS1", None);
            } else {
                add("BP7", None);
            }
        }
    }

    // PM4
    if consequence_type.biotype.as_deref() == Some(PROTEIN_CODING)
        && consequence_type
            .sequence_ontology_terms
            .iter()
            .any(|term| PROTEIN_LENGTH_CHANGING_TERMS.contains(term.name.as_str()))
    {
        add("PM4", Some("protein length change in protein-coding transcript"));
    }

    // PM5 fires on any missense change. TODO: restrict to codons with a
    // previously established pathogenic missense once a curated lookup is
    // available.
    if consequence_type.has_term("missense_variant") {
        add("PM5", None);
    }

    // PP3 / BP4 require sift, polyphen, cadd_scaled and gerp all present
    if let (Some(sift), Some(polyphen), Some(cadd_scaled), Some(gerp)) = (
        consequence_type.substitution_score("sift"),
        consequence_type.substitution_score("polyphen"),
        score_of(&annotation.functional_score, "cadd_scaled"),
        score_of(&annotation.conservation, "gerp"),
    ) {
        if sift < 0.05 && polyphen > 0.91 && cadd_scaled > 15.0 && gerp > 2.0 {
            add("PP3", None);
        } else {
            add("BP4", None);
        }
    }

    // PS2 / PM3: de novo takes precedence, first match wins
    if modes_of_inheritance.contains(&ModeOfInheritance::DeNovo) {
        add("PS2", None);
    } else if modes_of_inheritance.contains(&ModeOfInheritance::CompoundHeterozygous) {
        add("PM3", None);
    }

    // PM2 / BA1
    if annotation.population_frequencies.is_empty() {
        add("PM2", Some("no population frequency data"));
    } else {
        let mut has_pop_freq = false;
        let mut above_5_percent = false;
        for frequency in &annotation.population_frequencies {
            if frequency.alt_allele_freq > 0.0 {
                has_pop_freq = true;
            }
            if frequency.alt_allele_freq > 0.05
                && REFERENCE_FREQUENCY_STUDIES
                    .iter()
                    .any(|study| study.eq_ignore_ascii_case(&frequency.study))
            {
                above_5_percent = true;
            }
            if has_pop_freq && above_5_percent {
                break;
            }
        }
        if !has_pop_freq {
            add("PM2", Some("allele absent from population studies"));
        }
        if above_5_percent {
            add("BA1", Some("allele frequency above 5% in a reference study"));
        }
    }

    // BP6 / PP5: one per graded ClinVar assertion
    for entry in clinvar_entries(annotation) {
        if let Some(significance) = entry.clinical_significance {
            if significance.is_benign() {
                add("BP6", None);
            } else if significance.is_pathogenic() {
                add("PP5", None);
            }
        }
    }

    evidences
}

fn clinvar_entries(annotation: &VariantAnnotation) -> impl Iterator<Item = &EvidenceEntry> {
    annotation
        .trait_association
        .iter()
        .filter(|entry| entry.source.eq_ignore_ascii_case(CLINVAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClinicalSignificance, PopulationFrequency, Score, SequenceOntologyTerm};

    fn so_term(name: &str, accession: &str) -> SequenceOntologyTerm {
        SequenceOntologyTerm {
            name: name.to_string(),
            accession: accession.to_string(),
        }
    }

    fn consequence(terms: &[(&str, &str)]) -> ConsequenceType {
        ConsequenceType {
            gene_id: Some("ENSG00000001626".to_string()),
            gene_name: Some("CFTR".to_string()),
            transcript_id: Some("ENST00000003084".to_string()),
            biotype: Some("protein_coding".to_string()),
            sequence_ontology_terms: terms
                .iter()
                .map(|(name, accession)| so_term(name, accession))
                .collect(),
            protein_substitution_scores: Vec::new(),
        }
    }

    fn codes(evidences: &BTreeSet<AcmgEvidence>) -> Vec<&str> {
        evidences.iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn lof_term_triggers_pvs1_pm4_and_pm2() {
        let ct = consequence(&[("stop_gained", "SO:0001587")]);
        let annotation = VariantAnnotation::default();
        let result = evaluate(&ct, &annotation, &[]);
        assert_eq!(codes(&result), vec!["PM2", "PM4", "PVS1"]);
    }

    #[test]
    fn pm2_always_present_without_population_frequencies() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation::default();
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"PM2"));
    }

    #[test]
    fn all_zero_frequencies_still_count_as_absent() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation {
            population_frequencies: vec![
                PopulationFrequency {
                    study: "GNOMAD_EXOMES".to_string(),
                    alt_allele_freq: 0.0,
                },
                PopulationFrequency {
                    study: "1kG_phase3".to_string(),
                    alt_allele_freq: 0.0,
                },
            ],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"PM2"));
        assert!(!codes(&result).contains(&"BA1"));
    }

    #[test]
    fn frequency_above_5_percent_triggers_ba1_not_pm2() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation {
            population_frequencies: vec![PopulationFrequency {
                study: "GNOMAD_EXOMES".to_string(),
                alt_allele_freq: 0.08,
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"BA1"));
        assert!(!codes(&result).contains(&"PM2"));
    }

    #[test]
    fn high_frequency_in_unlisted_study_does_not_trigger_ba1() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation {
            population_frequencies: vec![PopulationFrequency {
                study: "MGRB".to_string(),
                alt_allele_freq: 0.2,
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(!codes(&result).contains(&"BA1"));
        assert!(!codes(&result).contains(&"PM2"));
    }

    #[test]
    fn synonymous_with_pathogenic_clinvar_is_ps1() {
        let ct = consequence(&[("synonymous_variant", "SO:0001819")]);
        let annotation = VariantAnnotation {
            trait_association: vec![EvidenceEntry {
                source: "clinvar".to_string(),
                clinical_significance: Some(ClinicalSignificance::LikelyPathogenic),
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"PS1"));
        assert!(!codes(&result).contains(&"BP7"));
    }

    #[test]
    fn synonymous_with_benign_clinvar_is_bp7() {
        let ct = consequence(&[("synonymous_variant", "SO:0001819")]);
        let annotation = VariantAnnotation {
            trait_association: vec![EvidenceEntry {
                source: "ClinVar".to_string(),
                clinical_significance: Some(ClinicalSignificance::Benign),
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"BP7"));
        // the benign assertion also fires BP6 independently
        assert!(codes(&result).contains(&"BP6"));
    }

    #[test]
    fn pp3_requires_all_four_scores() {
        let mut ct = consequence(&[("missense_variant", "SO:0001583")]);
        ct.protein_substitution_scores = vec![
            Score {
                source: "sift".to_string(),
                value: 0.01,
            },
            Score {
                source: "polyphen".to_string(),
                value: 0.97,
            },
        ];
        let annotation = VariantAnnotation {
            functional_score: vec![Score {
                source: "cadd_scaled".to_string(),
                value: 22.0,
            }],
            ..Default::default()
        };
        // gerp missing: neither PP3 nor BP4
        let result = evaluate(&ct, &annotation, &[]);
        assert!(!codes(&result).contains(&"PP3"));
        assert!(!codes(&result).contains(&"BP4"));

        let annotation = VariantAnnotation {
            functional_score: vec![Score {
                source: "cadd_scaled".to_string(),
                value: 22.0,
            }],
            conservation: vec![Score {
                source: "gerp".to_string(),
                value: 4.1,
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"PP3"));
    }

    #[test]
    fn borderline_scores_fall_back_to_bp4() {
        let mut ct = consequence(&[("missense_variant", "SO:0001583")]);
        ct.protein_substitution_scores = vec![
            Score {
                source: "sift".to_string(),
                value: 0.05,
            },
            Score {
                source: "polyphen".to_string(),
                value: 0.97,
            },
        ];
        let annotation = VariantAnnotation {
            functional_score: vec![Score {
                source: "cadd_scaled".to_string(),
                value: 22.0,
            }],
            conservation: vec![Score {
                source: "gerp".to_string(),
                value: 4.1,
            }],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"BP4"));
        assert!(!codes(&result).contains(&"PP3"));
    }

    #[test]
    fn de_novo_wins_over_compound_heterozygous() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation::default();
        let result = evaluate(
            &ct,
            &annotation,
            &[
                ModeOfInheritance::CompoundHeterozygous,
                ModeOfInheritance::DeNovo,
            ],
        );
        assert!(codes(&result).contains(&"PS2"));
        assert!(!codes(&result).contains(&"PM3"));

        let result = evaluate(
            &ct,
            &annotation,
            &[ModeOfInheritance::CompoundHeterozygous],
        );
        assert!(codes(&result).contains(&"PM3"));
    }

    #[test]
    fn pm4_requires_protein_coding_biotype() {
        let mut ct = consequence(&[("frameshift_variant", "SO:0001589")]);
        ct.biotype = Some("lincRNA".to_string());
        let result = evaluate(&ct, &VariantAnnotation::default(), &[]);
        assert!(!codes(&result).contains(&"PM4"));
        assert!(codes(&result).contains(&"PVS1"));
    }

    #[test]
    fn graded_clinvar_entries_fire_bp6_and_pp5() {
        let ct = consequence(&[("missense_variant", "SO:0001583")]);
        let annotation = VariantAnnotation {
            trait_association: vec![
                EvidenceEntry {
                    source: "clinvar".to_string(),
                    clinical_significance: Some(ClinicalSignificance::Pathogenic),
                },
                EvidenceEntry {
                    source: "clinvar".to_string(),
                    clinical_significance: Some(ClinicalSignificance::LikelyBenign),
                },
                EvidenceEntry {
                    source: "cosmic".to_string(),
                    clinical_significance: Some(ClinicalSignificance::Pathogenic),
                },
            ],
            ..Default::default()
        };
        let result = evaluate(&ct, &annotation, &[]);
        assert!(codes(&result).contains(&"PP5"));
        assert!(codes(&result).contains(&"BP6"));
    }
}
