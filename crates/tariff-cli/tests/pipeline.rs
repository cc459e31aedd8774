//! End-to-end tests: XML extracts and a config file in, upload files out.

use std::fs;
use std::path::{Path, PathBuf};

use tariff_cli::cli::{ExportHsArgs, ImportArgs};
use tariff_cli::commands::{run_export_hs, run_import};

const CONFIG_NZ: &str = r#"{
    "country": "NZ",
    "year": "2026",
    "min_chapter": 25,
    "max_csv": 1,
    "rate_type_defs": [
        {"Descartes CG": "NZGEN GEN", "Comment": "3rd", "Description": "General duty"},
        {"Descartes CG": "NZFTA FTA", "Comment": "keep", "Description": "FTA duty"},
        {"Descartes CG": "NZOLD GEN", "Comment": "remove", "Description": "Retired"}
    ],
    "uom_dict": {"KGM": "KG"}
}"#;

const DTR_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<export>
  <body>
    <duty_rate_entity hs_id="0025010000" duty_rate_type="GEN" valid_from="2024-01-01" valid_to="9999-12-31" version_date="2025-06-01" deleted="false">
      <country_group id="NZGEN">
        <rate><constraint>
          <adValoremRate percentage="5.0"><description text="5% ad valorem"/></adValoremRate>
        </constraint></rate>
      </country_group>
    </duty_rate_entity>
    <duty_rate_entity hs_id="0025010000" duty_rate_type="GEN" valid_from="2023-01-01" valid_to="2024-12-31" version_date="2024-01-01" deleted="false">
      <country_group id="NZGEN">
        <rate><constraint>
          <adValoremRate percentage="7.5"><description text="7.5% ad valorem"/></adValoremRate>
        </constraint></rate>
      </country_group>
    </duty_rate_entity>
    <duty_rate_entity hs_id="0025020000" duty_rate_type="GEN" valid_from="2026-03-01" valid_to="9999-12-31" version_date="2025-06-01" deleted="false">
      <country_group id="NZGEN">
        <rate><constraint>
          <freeRate><description text="Free"/></freeRate>
        </constraint></rate>
        <preference_note><note text="Reg 2026/4"/></preference_note>
      </country_group>
    </duty_rate_entity>
    <duty_rate_entity hs_id="0004090000" duty_rate_type="GEN" valid_from="2024-01-01" valid_to="9999-12-31" version_date="2025-06-01" deleted="false">
      <country_group id="NZGEN">
        <rate><constraint>
          <adValoremRate percentage="3.0"><description text="3%"/></adValoremRate>
        </constraint></rate>
      </country_group>
    </duty_rate_entity>
  </body>
</export>
"#;

const NOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<export>
  <body>
    <number_data>
      <id>1</id>
      <number>25</number>
      <level_id>10</level_id>
      <validity_begin>2020-01-01</validity_begin>
      <validity_end>9999-12-31</validity_end>
      <version_number>1</version_number>
      <date_of_physical_update>2025-01-15</date_of_physical_update>
      <texts><official_description><text>Salt; sulphur; earths</text></official_description></texts>
    </number_data>
    <number_data>
      <id>2</id>
      <parent_id>1</parent_id>
      <number>2501</number>
      <level_id>20</level_id>
      <validity_begin>2020-01-01</validity_begin>
      <validity_end>9999-12-31</validity_end>
      <version_number>1</version_number>
      <date_of_physical_update>2025-01-15</date_of_physical_update>
      <texts><official_description><text>Salt</text></official_description></texts>
    </number_data>
    <number_data>
      <id>3</id>
      <parent_id>2</parent_id>
      <number>0025010000</number>
      <level_id>40</level_id>
      <alternate_unit_1>KGM</alternate_unit_1>
      <validity_begin>2020-01-01</validity_begin>
      <validity_end>9999-12-31</validity_end>
      <version_number>1</version_number>
      <date_of_physical_update>2025-01-15</date_of_physical_update>
      <texts><official_description><text>Table salt</text></official_description></texts>
    </number_data>
  </body>
</export>
"#;

fn setup_inputs(dir: &Path) -> PathBuf {
    fs::write(dir.join("HSNZ_IMP_EN_DTR_I_1.xml"), DTR_SAMPLE).expect("write dtr");
    fs::write(dir.join("HSNZ_IMP_EN_NOM_I_1.xml"), NOM_SAMPLE).expect("write nom");
    let config_path = dir.join("config.json");
    fs::write(&config_path, CONFIG_NZ).expect("write config");
    config_path
}

#[test]
fn import_run_produces_split_zd14() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = setup_inputs(dir.path());

    let args = ImportArgs {
        input_dir: dir.path().to_path_buf(),
        config: config_path,
        output_dir: None,
        country: None,
        skip_validation: false,
        dry_run: false,
    };
    let result = run_import(&args).expect("run import");
    assert!(!result.has_errors, "errors: {:?}", result.errors);
    assert_eq!(result.country, "NZ");

    // Chapter 04 filtered, one duplicate removed: two active rows remain,
    // split into two files by the single-row budget.
    let zd14 = &result.outputs[0];
    assert_eq!(zd14.format, "ZD14");
    assert_eq!(zd14.rows, 2);
    assert_eq!(zd14.files.len(), 2);
    assert!(zd14.files[0].ends_with("NZ UPLOAD _ZD14 V1-1.csv"));
    assert!(zd14.files[1].ends_with("NZ UPLOAD _ZD14 V1-2.csv"));

    let first = fs::read_to_string(&zd14.files[0]).expect("read first chunk");
    let lines: Vec<&str> = first.trim_end().split("\r\n").collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("\u{feff}Country;HS Number;Date from;Date to"));
    // Winner for 25010000: newest version, clamped start, sentinel end,
    // full description with semicolons sanitized.
    let cells: Vec<&str> = lines[1].split(';').collect();
    assert_eq!(cells[0], "NZ");
    assert_eq!(cells[1], "25010000");
    assert_eq!(cells[2], "20260101");
    assert_eq!(cells[3], "99991231");
    assert_eq!(cells[5], "Salt. sulphur. earths---Salt---Table salt");
    assert_eq!(cells[20], "KG");
    assert_eq!(cells[22], "NZGEN");
    assert_eq!(cells[25], "5");

    // The findings report landed next to the outputs.
    let findings_path = result.findings_path.expect("findings path");
    assert!(findings_path.exists());
}

#[test]
fn import_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = setup_inputs(dir.path());

    let args = ImportArgs {
        input_dir: dir.path().to_path_buf(),
        config: config_path,
        output_dir: None,
        country: None,
        skip_validation: false,
        dry_run: true,
    };
    let result = run_import(&args).expect("run import");
    assert_eq!(result.outputs[0].rows, 2);
    assert!(result.outputs[0].files.is_empty());
    assert!(!result.output_dir.exists());
}

#[test]
fn import_without_dtr_files_aborts() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("HSNZ_IMP_EN_NOM_I_1.xml"), NOM_SAMPLE).expect("write nom");
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, CONFIG_NZ).expect("write config");

    let args = ImportArgs {
        input_dir: dir.path().to_path_buf(),
        config: config_path,
        output_dir: None,
        country: None,
        skip_validation: true,
        dry_run: false,
    };
    let error = run_import(&args).expect_err("missing DTR should abort");
    assert!(error.to_string().contains("no DTR input files"));
}

#[test]
fn export_hs_run_writes_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("HSCA_EXP_EN_NOM_I_1.xml"), NOM_SAMPLE).expect("write nom");
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, CONFIG_NZ).expect("write config");

    let args = ExportHsArgs {
        input_dir: dir.path().to_path_buf(),
        config: config_path,
        output_dir: None,
        country: Some("CA".to_string()),
    };
    let result = run_export_hs(&args).expect("run export");
    assert!(!result.has_errors, "errors: {:?}", result.errors);
    assert_eq!(result.outputs[0].rows, 1);
    assert_eq!(result.outputs[0].files.len(), 1);
    assert!(result.outputs[0].files[0].ends_with("CA EXPORT HS.xlsx"));
    assert!(result.outputs[0].files[0].exists());
}
