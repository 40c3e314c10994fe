mod clinical;
mod panel;
mod variant;

pub use clinical::{
    AcmgEvidence, ClinicalVariant, ClinicalVariantEvidence, GenomicFeature, Phenotype,
    ReviewStatus, RoleInCancer, Tier, VariantClassification,
};
pub use panel::{
    Confidence, DiseasePanel, ModeOfInheritance, PanelCoordinate, PanelGene, PanelRegion,
    PanelStr, PanelVariant, Penetrance,
};
pub use variant::{
    score_of, ClinicalSignificance, ConsequenceType, EvidenceEntry, PopulationFrequency, Score,
    SequenceOntologyTerm, Variant, VariantAnnotation,
};
