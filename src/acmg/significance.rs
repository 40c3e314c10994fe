use crate::model::{AcmgEvidence, ClinicalSignificance};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Combines a set of ACMG evidence codes into one clinical significance using
/// the ACMG 2015 combining rules. Duplicate codes collapse before counting;
/// an empty set is uncertain significance.
pub fn aggregate(evidences: &BTreeSet<AcmgEvidence>) -> ClinicalSignificance {
    let mut seen_codes: HashSet<&str> = HashSet::new();
    let mut prefix_counts: HashMap<&str, usize> = HashMap::new();
    for evidence in evidences {
        if seen_codes.insert(evidence.code.as_str()) {
            *prefix_counts.entry(evidence.prefix()).or_insert(0) += 1;
        }
    }

    let count = |prefix: &str| prefix_counts.get(prefix).copied().unwrap_or(0);
    let pvs = count("PVS");
    let ps = count("PS");
    let pm = count("PM");
    let pp = count("PP");
    let ba = count("BA");
    let bs = count("BS");
    let bp = count("BP");

    if (pvs >= 1 && (ps >= 1 || pm >= 2 || (pm == 1 && pp == 1) || pp >= 2))
        || ps >= 2
        || (ps == 1 && (pm >= 3 || (pm >= 2 && pp >= 2) || (pm == 1 && pp >= 4)))
    {
        return ClinicalSignificance::Pathogenic;
    }
    if (pvs == 1 && pm == 1)
        || (ps == 1 && pm >= 1)
        || (ps == 1 && pp >= 2)
        || pm >= 3
        || (pm == 2 && pp >= 2)
        || (pm == 1 && pp >= 4)
    {
        return ClinicalSignificance::LikelyPathogenic;
    }
    if ba == 1 || bs >= 2 {
        return ClinicalSignificance::Benign;
    }
    if (bs == 1 && bp == 1) || bp >= 2 {
        return ClinicalSignificance::LikelyBenign;
    }
    ClinicalSignificance::UncertainSignificance
}
