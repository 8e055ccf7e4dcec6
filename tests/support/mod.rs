use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Names of the fixture catalog, in matrix order
#[allow(dead_code)]
pub const MEDICINES: [&str; 6] = [
    "Azithral 500 Tablet",
    "Azee 500 Tablet",
    "Zithrox 500 Tablet",
    "Augmentin 625 Duo Tablet",
    "Crocin Advance Tablet",
    "Dolo 650 Tablet",
];

/// Get a Command for medrec, isolated from the user's environment
pub fn medrec(global_config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("medrec");
    cmd.env("MEDREC_CONFIG_DIR", global_config_dir)
        .env_remove("MEDREC_CONFIG")
        .env_remove("MEDREC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write the fixture artifacts into `dir` under their default names.
///
/// The catalog uses the column-oriented `{"Drug_Name": {"0": ..}}` layout.
/// Row 0 is [1.0, 0.9, 0.9, 0.5, 0.1, 0.0].
#[allow(dead_code)]
pub fn write_fixture(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let rows: serde_json::Map<String, serde_json::Value> = MEDICINES
        .iter()
        .enumerate()
        .map(|(i, name)| (i.to_string(), serde_json::json!(name)))
        .collect();
    let catalog = serde_json::json!({ "Drug_Name": rows });
    fs::write(
        dir.join("medicine_dict.json"),
        serde_json::to_string_pretty(&catalog)?,
    )?;

    let similarity = serde_json::json!([
        [1.0, 0.9, 0.9, 0.5, 0.1, 0.0],
        [0.9, 1.0, 0.3, 0.2, 0.4, 0.1],
        [0.9, 0.3, 1.0, 0.6, 0.6, 0.2],
        [0.5, 0.2, 0.6, 1.0, 0.7, 0.3],
        [0.1, 0.4, 0.6, 0.7, 1.0, 0.8],
        [0.0, 0.1, 0.2, 0.3, 0.8, 1.0],
    ]);
    fs::write(dir.join("similarity.json"), similarity.to_string())?;
    Ok(())
}
