//! Batch processing pipeline with explicit stages.
//!
//! The import pipeline runs these stages in order:
//! 1. **Ingest**: discover and parse the DTR/NOM/TXT XML extracts
//! 2. **Validate**: rate and configuration completeness (informational)
//! 3. **Process duty rates**: cleanse, filter, flag, keep active
//! 4. **Process nomenclature**: cleanse, flag, build descriptions
//! 5. **Generate**: assemble the country-specific output tables
//! 6. **Export**: write size-bounded CSV splits (or the XLSX workbook)
//!
//! Each stage takes the previous stage's output and returns typed results;
//! stage-local anomalies accumulate in error lists instead of aborting.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tariff_core::{
    NomFlagMode, build_full_descriptions, cleanse_duty_rates, cleanse_nomenclature,
    flag_duty_rates, flag_nomenclature, retain_active_country_groups, retain_configured_chapters,
};
use tariff_ingest::{discover_input_files, read_duty_rates, read_nomenclature, read_texts};
use tariff_model::{Config, DutyRateRecord, HsFlag, NomenclatureRecord, TextRecord};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug, Default)]
pub struct IngestStage {
    pub duty: Vec<DutyRateRecord>,
    pub nomenclature: Vec<NomenclatureRecord>,
    pub texts: Vec<TextRecord>,
    /// Per-file parse failures; the batch continues without those files.
    pub errors: Vec<String>,
    pub dtr_file_count: usize,
    pub nom_file_count: usize,
    pub txt_file_count: usize,
}

/// Discover and parse every XML extract in the input directory.
pub fn ingest(input_dir: &Path) -> Result<IngestStage> {
    let span = info_span!("ingest", input_dir = %input_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let discovered = discover_input_files(input_dir)
        .with_context(|| format!("scan input directory {}", input_dir.display()))?;

    let mut stage = IngestStage {
        dtr_file_count: discovered.dtr.len(),
        nom_file_count: discovered.nom.len(),
        txt_file_count: discovered.txt.len(),
        ..IngestStage::default()
    };

    let duty = read_duty_rates(&discovered.dtr);
    stage.duty = duty.records;
    stage.errors.extend(duty.errors);

    let nomenclature = read_nomenclature(&discovered.nom);
    stage.nomenclature = nomenclature.records;
    stage.errors.extend(nomenclature.errors);

    let texts = read_texts(&discovered.txt);
    stage.texts = texts.records;
    stage.errors.extend(texts.errors);

    info!(
        dtr_rows = stage.duty.len(),
        nom_rows = stage.nomenclature.len(),
        txt_rows = stage.texts.len(),
        error_count = stage.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(stage)
}

// ============================================================================
// Stage 3: Process duty rates
// ============================================================================

/// Duty-rate table after cleansing, filtering, and flagging.
#[derive(Debug, Default)]
pub struct ProcessedDuty {
    /// Records classified active, in flagging sort order.
    pub active: Vec<DutyRateRecord>,
    /// Row count after filtering, before the active cut.
    pub flagged_count: usize,
}

/// Cleanse, filter, and flag the duty-rate table, keeping active records.
pub fn process_duty_rates(mut records: Vec<DutyRateRecord>, config: &Config) -> ProcessedDuty {
    let span = info_span!("process_duty_rates", country = %config.country);
    let _guard = span.enter();
    let start = Instant::now();

    cleanse_duty_rates(&mut records);
    retain_configured_chapters(&mut records, &config.chapter_list(), |record| &record.hs);
    retain_active_country_groups(&mut records, config);
    flag_duty_rates(&mut records, &config.year);

    let flagged_count = records.len();
    let active: Vec<DutyRateRecord> = records
        .into_iter()
        .filter(|record| record.flag == Some(HsFlag::Active))
        .collect();

    info!(
        flagged = flagged_count,
        active = active.len(),
        duration_ms = start.elapsed().as_millis(),
        "duty rates processed"
    );
    ProcessedDuty {
        active,
        flagged_count,
    }
}

// ============================================================================
// Stage 4: Process nomenclature
// ============================================================================

/// Cleanse, flag, and describe the nomenclature table. All records stay in
/// the table (the generators select by flag); the returned vector is in
/// flagging sort order.
pub fn process_nomenclature(
    mut records: Vec<NomenclatureRecord>,
    config: &Config,
    mode: NomFlagMode,
) -> Vec<NomenclatureRecord> {
    let span = info_span!("process_nomenclature", country = %config.country, ?mode);
    let _guard = span.enter();
    let start = Instant::now();

    cleanse_nomenclature(&mut records);
    flag_nomenclature(&mut records, &config.year, mode);
    build_full_descriptions(&mut records);

    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "nomenclature processed"
    );
    records
}
