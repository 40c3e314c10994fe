use crate::cli::SecondaryArgs;
use crate::commands::inputs::{load_actionable_map, load_variants};
use crate::tiering::{assembler, ClassifyConfig};
use crate::utils::{create_writer, Result};
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn secondary(args: SecondaryArgs) -> Result<()> {
    let variants = load_variants(&args.variants_path)?;
    log::info!("Loaded {} variants", variants.len());

    let actionable_variants = load_actionable_map(&args.actionable_path)?;
    let config = ClassifyConfig {
        actionable_variants,
        ..Default::default()
    };

    let findings = assembler::assemble_secondary_findings(&variants, &config);

    let mut writer = create_writer(&args.output_prefix, "secondary.jsonl", |path| {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|e| format!("File {}: {}", path, e))
    })?;
    for finding in &findings {
        let json = serde_json::to_string(finding)
            .map_err(|e| format!("Failed to serialize secondary finding: {}", e))?;
        writeln!(writer, "{}", json).map_err(|e| format!("Failed to write finding: {}", e))?;
    }

    log::info!("Wrote {} secondary findings", findings.len());
    Ok(())
}
