use crate::cli::ClassifyArgs;
use crate::commands::inputs::{load_actionable_map, load_panels, load_role_map, parse_variant_line};
use crate::model::{ClinicalVariant, DiseasePanel, Phenotype, Variant};
use crate::tiering::{ClassifyConfig, ConfigError, TierStrategy, VariantClassifier};
use crate::utils::{create_writer, open_text_reader, Result};
use crossbeam_channel::{bounded, Sender};
use rayon::{
    iter::{ParallelBridge, ParallelIterator},
    ThreadPoolBuilder,
};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

const CHANNEL_BUFFER_SIZE: usize = 2048;

pub fn classify(args: ClassifyArgs) -> Result<()> {
    let panels: Vec<DiseasePanel> = match &args.panels_path {
        Some(path) => load_panels(path)?,
        None => Vec::new(),
    };
    log::info!("Loaded {} disease panels", panels.len());

    let config = build_config(&args)?;
    let classifier = VariantClassifier::new(args.strategy, &panels, &config)?;

    let mut writer = create_writer(&args.output_prefix, "clinical.jsonl", |path| {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|e| format!("File {}: {}", path, e))
    })?;

    let (sender_variant, receiver_variant) = bounded(CHANNEL_BUFFER_SIZE);
    let variants_path = args.variants_path.clone();
    let variant_stream_thread =
        thread::spawn(move || stream_variants_into_channel(&variants_path, sender_variant));

    let (sender_result, receiver_result) = bounded::<ClinicalVariant>(CHANNEL_BUFFER_SIZE);
    let writer_thread = thread::spawn(move || {
        let mut written = 0usize;
        for clinical_variant in &receiver_result {
            match serde_json::to_string(&clinical_variant) {
                Ok(json) => match writeln!(writer, "{}", json) {
                    Ok(()) => written += 1,
                    Err(e) => log::error!("Failed to write clinical variant: {}", e),
                },
                Err(e) => log::error!("Failed to serialize clinical variant: {}", e),
            }
        }
        written
    });

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .thread_name(|i| format!("vartier-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))?;

    let any_gene_match = AtomicBool::new(false);
    pool.install(|| {
        receiver_variant
            .into_iter()
            .par_bridge()
            .for_each_with(&sender_result, |sender, variant_result| {
                match variant_result {
                    Ok(variant) => {
                        process_variant(&classifier, &variant, &any_gene_match, sender)
                    }
                    Err(err) => log::error!("Variant processing: {:#}", err),
                }
            });
    });

    // Clean-up
    drop(sender_result);
    let written = writer_thread.join().expect("Writer thread panicked");
    log::trace!("Writer thread finished");
    variant_stream_thread
        .join()
        .expect("Variant stream thread panicked");
    log::trace!("Variant stream thread finished");

    if args.strategy == TierStrategy::Tiering && !any_gene_match.load(Ordering::Relaxed) {
        return Err(ConfigError::NoPanelGeneMatch.into());
    }

    log::info!("Wrote {} clinical variants", written);
    Ok(())
}

fn process_variant(
    classifier: &VariantClassifier,
    variant: &Variant,
    any_gene_match: &AtomicBool,
    sender: &Sender<ClinicalVariant>,
) {
    if classifier.matches_any_panel_gene(variant) {
        any_gene_match.store(true, Ordering::Relaxed);
    }
    if let Some(clinical_variant) = classifier.classify_one(variant) {
        if let Err(e) = sender.send(clinical_variant) {
            log::error!("Failed to send clinical variant to writer thread: {}", e);
        }
    }
}

fn stream_variants_into_channel(path: &Path, sender: Sender<Result<Variant>>) {
    let reader = match open_text_reader(path) {
        Ok(reader) => reader,
        Err(e) => {
            sender
                .send(Err(e))
                .expect("Failed to send error through channel");
            return;
        }
    };

    for (line_number, result_line) in reader.lines().enumerate() {
        let line = match result_line {
            Ok(line) => line,
            Err(err) => {
                let error = format!("Error at variant line {}: {}", line_number + 1, err);
                sender
                    .send(Err(error))
                    .expect("Failed to send error through channel");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        sender
            .send(parse_variant_line(&line, line_number + 1))
            .expect("Failed to send variant through channel");
    }
}

fn build_config(args: &ClassifyArgs) -> Result<ClassifyConfig> {
    let role_in_cancer = match &args.role_in_cancer_path {
        Some(path) => load_role_map(path)?,
        None => HashMap::new(),
    };
    let actionable_variants = match &args.actionable_path {
        Some(path) => load_actionable_map(path)?,
        None => HashMap::new(),
    };
    let disorder = args.disorder_id.as_ref().map(|id| Phenotype {
        id: id.clone(),
        name: args.disorder_name.clone().unwrap_or_default(),
    });

    Ok(ClassifyConfig {
        assembly: args.assembly.clone(),
        disorder,
        modes_of_inheritance: args.modes_of_inheritance.clone(),
        penetrance: args.penetrance,
        role_in_cancer,
        actionable_variants,
        include_untiered: args.include_untiered,
        required_overlap_percentage: args.required_overlap_percentage,
        ..Default::default()
    })
}
