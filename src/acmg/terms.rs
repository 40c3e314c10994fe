//! Process-wide immutable consequence-term and biotype sets used by the
//! ACMG evaluator and the tiering strategies.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const PROTEIN_CODING: &str = "protein_coding";

/// Loss-of-function consequence terms (PVS1).
pub static LOF_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "transcript_ablation",
        "splice_acceptor_variant",
        "splice_donor_variant",
        "stop_gained",
        "frameshift_variant",
        "stop_lost",
        "start_lost",
        "transcript_amplification",
        "inframe_insertion",
        "inframe_deletion",
    ])
});

/// Terms altering the protein length (PM4).
pub static PROTEIN_LENGTH_CHANGING_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "stop_gained",
        "stop_lost",
        "frameshift_variant",
        "inframe_insertion",
        "inframe_deletion",
        "splice_acceptor_variant",
        "splice_donor_variant",
    ])
});

/// Extended loss-of-function allow-list gating which consequence terms are
/// considered for tiering at all.
pub static EXTENDED_LOF_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut terms = LOF_TERMS.clone();
    terms.extend([
        "missense_variant",
        "splice_region_variant",
        "initiator_codon_variant",
    ]);
    terms
});

/// SO accessions classified as Tier1 by the tiering strategy: transcript
/// ablation, splice acceptor/donor, stop gained, frameshift, stop lost,
/// initiator codon.
pub static TIER1_ACCESSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "SO:0001893",
        "SO:0001574",
        "SO:0001575",
        "SO:0001587",
        "SO:0001589",
        "SO:0001578",
        "SO:0001582",
    ])
});

/// SO accessions classified as Tier2: transcript amplification, inframe
/// insertion/deletion, missense, splice region, incomplete terminal codon.
pub static TIER2_ACCESSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "SO:0001889",
        "SO:0001821",
        "SO:0001822",
        "SO:0001583",
        "SO:0001630",
        "SO:0001626",
    ])
});

/// Default biotype allow-list: protein-coding transcripts and the
/// immunoglobulin/T-cell-receptor gene segments.
pub static PROTEIN_CODING_BIOTYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        PROTEIN_CODING,
        "nonsense_mediated_decay",
        "non_stop_decay",
        "IG_C_gene",
        "IG_D_gene",
        "IG_J_gene",
        "IG_V_gene",
        "TR_C_gene",
        "TR_D_gene",
        "TR_J_gene",
        "TR_V_gene",
    ])
});

/// Reference population studies whose frequencies can trigger BA1.
pub static REFERENCE_FREQUENCY_STUDIES: [&str; 3] = ["EXAC", "1kG_phase3", "GNOMAD_EXOMES"];
