//! Command drivers for the import and export flows.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use tariff_core::NomFlagMode;
use tariff_export::{
    UploadRecord, generate_capdr, generate_export_hs, generate_mx6digits, generate_zd14,
    generate_zzde, generate_zzdf, write_csv_split, write_xlsx,
};
use tariff_model::Config;
use tariff_validate::{
    ValidationFindings, check_config_coverage, check_rate_texts, write_findings_json,
};

use crate::cli::{ExportHsArgs, ImportArgs};
use crate::config_file::load_config;
use crate::pipeline::{ingest, process_duty_rates, process_nomenclature};
use crate::summary::apply_table_style;
use crate::types::{OutputSummary, RunResult};

/// Run the full import pipeline: XML extracts in, CSV upload files out.
pub fn run_import(args: &ImportArgs) -> Result<RunResult> {
    let config = load_config(&args.config, args.country.as_deref())?;
    let span = info_span!("import", country = %config.country, year = %config.year);
    let _guard = span.enter();
    let run_start = Instant::now();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join("output"));

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let stage = ingest(&args.input_dir)?;
    if stage.dtr_file_count == 0 {
        bail!("no DTR input files found in {}", args.input_dir.display());
    }
    if stage.nom_file_count == 0 {
        bail!("no NOM input files found in {}", args.input_dir.display());
    }
    let mut errors = stage.errors;

    // =========================================================================
    // Stage 2: Validate (informational, never blocking)
    // =========================================================================
    let (findings, findings_path) = if args.skip_validation {
        (None, None)
    } else {
        let findings = ValidationFindings {
            rates: check_rate_texts(&stage.duty),
            config: check_config_coverage(&stage.duty, &stage.nomenclature, &config),
        };
        let path = if args.dry_run {
            None
        } else {
            match write_findings_json(&output_dir, &findings) {
                Ok(path) => Some(path),
                Err(error) => {
                    errors.push(format!("findings report: {error}"));
                    None
                }
            }
        };
        (Some(findings), path)
    };

    // =========================================================================
    // Stages 3-4: Process duty rates and nomenclature
    // =========================================================================
    let duty = process_duty_rates(stage.duty, &config);
    let nomenclature = process_nomenclature(stage.nomenclature, &config, NomFlagMode::Import);

    // =========================================================================
    // Stages 5-6: Generate and export the country's formats
    // =========================================================================
    let mut outputs = Vec::new();
    let mut export = |format: &str, summary: Result<OutputSummary>| match summary {
        Ok(summary) => outputs.push(summary),
        Err(error) => errors.push(format!("{format}: {error}")),
    };

    export(
        "ZD14",
        export_table(
            "ZD14",
            &generate_zd14(&duty.active, &nomenclature, &config),
            &config,
            &output_dir,
            args.dry_run,
        ),
    );
    match config.country.as_str() {
        "CA" => {
            export(
                "CAPDR",
                export_table(
                    "CAPDR",
                    &generate_capdr(&duty.active, &nomenclature, &config),
                    &config,
                    &output_dir,
                    args.dry_run,
                ),
            );
            export(
                "ZZDE",
                export_table(
                    "ZZDE",
                    &generate_zzde(&duty.active, &nomenclature, &config),
                    &config,
                    &output_dir,
                    args.dry_run,
                ),
            );
        }
        "MX" => {
            export(
                "MX6Digits",
                export_table(
                    "MX6Digits",
                    &generate_mx6digits(&duty.active, &nomenclature, &config),
                    &config,
                    &output_dir,
                    args.dry_run,
                ),
            );
        }
        "US" => {
            export(
                "ZZDF",
                export_table(
                    "ZZDF",
                    &generate_zzdf(&duty.active, &nomenclature, &config),
                    &config,
                    &output_dir,
                    args.dry_run,
                ),
            );
        }
        _ => {}
    }

    let has_errors = !errors.is_empty();
    info!(
        output_count = outputs.len(),
        error_count = errors.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "import run complete"
    );
    Ok(RunResult {
        country: config.country,
        year: config.year,
        output_dir,
        outputs,
        findings,
        findings_path,
        errors,
        has_errors,
    })
}

fn export_table<R: UploadRecord>(
    format: &str,
    records: &[R],
    config: &Config,
    output_dir: &std::path::Path,
    dry_run: bool,
) -> Result<OutputSummary> {
    let files = if dry_run || records.is_empty() {
        Vec::new()
    } else {
        let prefix = format!("{} UPLOAD _{format}", config.country);
        write_csv_split(records, output_dir, &prefix, config.max_csv)?
    };
    Ok(OutputSummary {
        format: format.to_string(),
        rows: records.len(),
        files,
    })
}

/// Run the export-direction flow: NOM extracts in, HS workbook out.
pub fn run_export_hs(args: &ExportHsArgs) -> Result<RunResult> {
    let config = load_config(&args.config, args.country.as_deref())?;
    let span = info_span!("export_hs", country = %config.country, year = %config.year);
    let _guard = span.enter();
    let run_start = Instant::now();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join("output"));

    let stage = ingest(&args.input_dir)?;
    if stage.nom_file_count == 0 {
        bail!("no NOM input files found in {}", args.input_dir.display());
    }
    let mut errors = stage.errors;

    let nomenclature = process_nomenclature(stage.nomenclature, &config, NomFlagMode::Export);
    let records = generate_export_hs(&nomenclature, &config);

    let mut files = Vec::new();
    if records.is_empty() {
        warn!("export HS table is empty, no workbook written");
    } else {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create {}", output_dir.display()))?;
        let path = output_dir.join(format!("{} EXPORT HS.xlsx", config.country));
        match write_xlsx(&records, &path) {
            Ok(()) => files.push(path),
            Err(error) => errors.push(format!("export HS workbook: {error}")),
        }
    }

    let has_errors = !errors.is_empty();
    info!(
        record_count = records.len(),
        error_count = errors.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "export run complete"
    );
    Ok(RunResult {
        country: config.country,
        year: config.year,
        output_dir,
        outputs: vec![OutputSummary {
            format: "Export HS".to_string(),
            rows: records.len(),
            files,
        }],
        findings: None,
        findings_path: None,
        errors,
        has_errors,
    })
}

/// Print the supported output formats and their country scope.
pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Direction", "Countries", "Description"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "ZD14",
        "Import",
        "all",
        "Primary duty-rate upload, full column set",
    ]);
    table.add_row(vec![
        "CAPDR",
        "Import",
        "CA",
        "Main-group rates with computed unit rate",
    ]);
    table.add_row(vec![
        "ZZDE",
        "Import",
        "CA",
        "Main-group rate-centric layout",
    ]);
    table.add_row(vec![
        "MX6Digits",
        "Import",
        "MX",
        "Main-group rates on 6-digit codes, deduplicated",
    ]);
    table.add_row(vec![
        "ZZDF",
        "Import",
        "US",
        "ZD14 layout with whole-table tonne-code normalization",
    ]);
    table.add_row(vec![
        "Export HS",
        "Export",
        "CA, US",
        "Active 8-digit classification lines as a single workbook",
    ]);
    println!("{table}");
}
