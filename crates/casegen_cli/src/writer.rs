//! Summary and include-file writers for generated cases.
//!
//! Output layout for base name `NAME`:
//! - `NAME.DATA` - key/value summary CSV
//! - `poro_NAME.INC`, `swat_NAME.INC`, `fipnum_NAME.INC`,
//!   `satnum_NAME.INC`, `vugfrac_NAME.INC` - one keyword block each
//! - `gridinc_NAME.GRDECL` - DX/DY/DZ keyword blocks
//!
//! Each keyword block is the keyword on its own line, the run-length
//! compacted values, and a terminating `/`.

use std::fs;
use std::path::Path;

use casegen_model::grid::{Case, Property};
use tracing::debug;

use crate::error::Result;

/// Include files emitted per property keyword.
const INCLUDE_FILES: [(&str, &str); 5] = [
    ("poro", "PORO"),
    ("swat", "SWAT"),
    ("fipnum", "FIPNUM"),
    ("satnum", "SATNUM"),
    ("vugfrac", "VUGFRAC"),
];

/// Grid-increment keywords collected into the GRDECL file.
const GRID_KEYWORDS: [&str; 3] = ["DX", "DY", "DZ"];

/// Writes the summary and all property files for a case.
pub fn write_case(dir: &Path, base: &str, case: &Case) -> Result<()> {
    fs::create_dir_all(dir)?;

    write_summary(&dir.join(format!("{base}.DATA")), case)?;

    for (prefix, keyword) in INCLUDE_FILES {
        if let Some(property) = case.property(keyword) {
            write_include(
                &dir.join(format!("{prefix}_{base}.INC")),
                std::iter::once(property),
            )?;
        }
    }

    write_include(
        &dir.join(format!("gridinc_{base}.GRDECL")),
        GRID_KEYWORDS.into_iter().filter_map(|kw| case.property(kw)),
    )?;

    Ok(())
}

/// Writes the key/value summary CSV.
fn write_summary(path: &Path, case: &Case) -> Result<()> {
    debug!(path = %path.display(), "writing summary");
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Key", "Values"])?;
    for (key, value) in case.summary().entries() {
        writer.write_record([key, value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one file of keyword blocks.
fn write_include<'a>(
    path: &Path,
    properties: impl IntoIterator<Item = &'a Property>,
) -> Result<()> {
    debug!(path = %path.display(), "writing include file");
    let mut text = String::new();
    for property in properties {
        text.push_str(property.keyword());
        text.push('\n');
        text.push_str(&property.compacted()?);
        text.push_str("\n/\n\n");
    }
    fs::write(path, text)?;
    Ok(())
}
