use crate::model::{DiseasePanel, RoleInCancer, Variant};
use crate::utils::{open_text_reader, Result};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

pub fn load_panels(path: &Path) -> Result<Vec<DiseasePanel>> {
    let reader = open_text_reader(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| format!("Malformed panel file {}: {}", path.display(), e))
}

pub fn load_role_map(path: &Path) -> Result<HashMap<String, RoleInCancer>> {
    let reader = open_text_reader(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| format!("Malformed role-in-cancer file {}: {}", path.display(), e))
}

pub fn load_actionable_map(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    let reader = open_text_reader(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| format!("Malformed actionable-variant file {}: {}", path.display(), e))
}

pub fn parse_variant_line(line: &str, line_number: usize) -> Result<Variant> {
    serde_json::from_str(line).map_err(|e| format!("Error at variant line {}: {}", line_number, e))
}

pub fn load_variants(path: &Path) -> Result<Vec<Variant>> {
    let reader = open_text_reader(path)?;
    let mut variants = Vec::new();
    for (line_number, result_line) in reader.lines().enumerate() {
        let line = result_line
            .map_err(|e| format!("Error at variant line {}: {}", line_number + 1, e))?;
        if line.trim().is_empty() {
            continue;
        }
        variants.push(parse_variant_line(&line, line_number + 1)?);
    }
    Ok(variants)
}
