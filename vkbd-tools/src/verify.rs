//! Layout verification report

use std::fmt;

use anyhow::{Context, Result};
use unicode_normalization::UnicodeNormalization;
use vkbd_core::{Layout, LayoutTable};

/// Summary of one validated layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutReport {
    pub code: String,
    pub name: String,
    pub locale: String,
    /// Keys per row
    pub shape: Vec<usize>,
    pub transforms: usize,
    /// Transforms whose output is the NFC composition of their key
    pub nfc_composed: usize,
    /// Transforms that NFC does not reproduce, as (key, output)
    pub non_nfc: Vec<(String, String)>,
}

impl LayoutReport {
    pub fn for_layout(layout: &Layout) -> Self {
        let mut non_nfc: Vec<(String, String)> = layout
            .transforms()
            .filter(|(key, output)| !composes_to(key, output))
            .map(|(key, output)| (key.to_string(), output.to_string()))
            .collect();
        non_nfc.sort();

        Self {
            code: layout.code().to_string(),
            name: layout.name().to_string(),
            locale: layout.locale().to_string(),
            shape: layout.shape(),
            transforms: layout.transform_count(),
            nfc_composed: layout.transform_count() - non_nfc.len(),
            non_nfc,
        }
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): rows {:?}, {} keys",
            self.code,
            self.name,
            self.locale,
            self.shape,
            self.shape.iter().sum::<usize>()
        )?;
        if self.transforms > 0 {
            write!(
                f,
                ", {} transforms ({} NFC-composed)",
                self.transforms, self.nfc_composed
            )?;
        }
        Ok(())
    }
}

/// Whether NFC turns `key` into `output`
pub fn composes_to(key: &str, output: &str) -> bool {
    key.nfc().eq(output.chars())
}

pub fn verify_table(table: &LayoutTable) -> Vec<LayoutReport> {
    table.iter().map(|layout| LayoutReport::for_layout(layout)).collect()
}

/// Validates the built-in layouts and reports on each
pub fn verify_builtin() -> Result<Vec<LayoutReport>> {
    let table = LayoutTable::builtin().context("Built-in layout table is invalid")?;
    Ok(verify_table(&table))
}
