use crate::model::{DiseasePanel, ModeOfInheritance, Variant};
use std::collections::HashMap;

/// Lookup indices over one or more disease panels. Built once per
/// classification run and read-only afterwards.
#[derive(Debug, Default)]
pub struct PanelIndex<'a> {
    gene_to_panels: HashMap<&'a str, Vec<&'a DiseasePanel>>,
    variant_to_panels: HashMap<&'a str, Vec<&'a DiseasePanel>>,
    gene_panel_moi: HashMap<&'a str, HashMap<&'a str, ModeOfInheritance>>,
}

impl<'a> PanelIndex<'a> {
    pub fn build(panels: &'a [DiseasePanel]) -> PanelIndex<'a> {
        let mut index = PanelIndex::default();
        for panel in panels {
            for gene in &panel.genes {
                insert_unique(&mut index.gene_to_panels, &gene.id, panel);
                if let Some(moi) = gene.mode_of_inheritance {
                    index
                        .gene_panel_moi
                        .entry(&gene.id)
                        .or_default()
                        .insert(&panel.id, moi);
                }
            }
            for variant in &panel.variants {
                insert_unique(&mut index.variant_to_panels, &variant.id, panel);
            }
        }
        index
    }

    pub fn panels_for_gene(&self, gene_id: &str) -> Option<&[&'a DiseasePanel]> {
        self.gene_to_panels.get(gene_id).map(|panels| panels.as_slice())
    }

    /// Panels declaring this exact variant, matched on the simplified
    /// `chrom:start:ref:alt` identity first and the external id second.
    pub fn panels_for_variant(&self, variant: &Variant) -> Option<&[&'a DiseasePanel]> {
        self.variant_to_panels
            .get(variant.simple_id().as_str())
            .or_else(|| {
                variant
                    .id
                    .as_ref()
                    .and_then(|id| self.variant_to_panels.get(id.as_str()))
            })
            .map(|panels| panels.as_slice())
    }

    pub fn contains_variant(&self, variant: &Variant) -> bool {
        self.panels_for_variant(variant).is_some()
    }

    pub fn moi_for(&self, gene_id: &str, panel_id: &str) -> Option<ModeOfInheritance> {
        self.gene_panel_moi
            .get(gene_id)
            .and_then(|by_panel| by_panel.get(panel_id))
            .copied()
    }
}

fn insert_unique<'a>(
    map: &mut HashMap<&'a str, Vec<&'a DiseasePanel>>,
    key: &'a str,
    panel: &'a DiseasePanel,
) {
    let panels = map.entry(key).or_default();
    if !panels.iter().any(|existing| existing.id == panel.id) {
        panels.push(panel);
    }
}
