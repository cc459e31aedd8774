//! Input-file discovery.
//!
//! Extract filenames carry the document type as an infix
//! (e.g. `HSNZ_IMP_EN_DTR_I_2026.xml`), so discovery is a case-insensitive
//! substring match over the `.xml` files of the input directory.

use std::path::{Path, PathBuf};

use crate::error::IngestError;

#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    pub dtr: Vec<PathBuf>,
    pub nom: Vec<PathBuf>,
    pub txt: Vec<PathBuf>,
}

impl DiscoveredFiles {
    pub fn is_empty(&self) -> bool {
        self.dtr.is_empty() && self.nom.is_empty() && self.txt.is_empty()
    }
}

/// Scan a directory for DTR/NOM/TXT XML files, sorted by filename.
pub fn discover_input_files(dir: &Path) -> Result<DiscoveredFiles, IngestError> {
    let mut discovered = DiscoveredFiles::default();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let upper = name.to_uppercase();
        if !upper.ends_with(".XML") {
            continue;
        }
        if upper.contains("DTR") {
            discovered.dtr.push(path);
        } else if upper.contains("NOM") {
            discovered.nom.push(path);
        } else if upper.contains("TXT") {
            discovered.txt.push(path);
        }
    }
    discovered.dtr.sort();
    discovered.nom.sort();
    discovered.txt.sort();
    Ok(discovered)
}
