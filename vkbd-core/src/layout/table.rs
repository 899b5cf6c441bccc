use std::collections::HashMap;
use std::sync::Arc;

use super::error::{LayoutError, Result};
use super::{data, Layout, LayoutDef};

/// Read-only registry of layouts, keyed by language code
#[derive(Debug, Clone, Default)]
pub struct LayoutTable {
    layouts: Vec<Arc<Layout>>,
    by_code: HashMap<String, usize>,
}

impl LayoutTable {
    /// Builds the table of built-in layouts, validating every definition
    pub fn builtin() -> Result<Self> {
        Self::from_defs(data::BUILTIN)
    }

    /// Builds a table from static definitions
    pub fn from_defs(defs: &[LayoutDef]) -> Result<Self> {
        let layouts = defs.iter().map(Layout::from_def).collect::<Result<Vec<_>>>()?;
        Self::from_layouts(layouts)
    }

    /// Builds a table from validated layouts, keeping their order
    pub fn from_layouts(layouts: Vec<Layout>) -> Result<Self> {
        let mut table = Self::default();

        for layout in layouts {
            if table.by_code.contains_key(layout.code()) {
                return Err(LayoutError::DuplicateCode(layout.code().to_string()));
            }
            table.by_code.insert(layout.code().to_string(), table.layouts.len());
            table.layouts.push(Arc::new(layout));
        }

        Ok(table)
    }

    /// Looks up a layout by language code
    pub fn get(&self, code: &str) -> Option<&Arc<Layout>> {
        self.by_code.get(code).map(|&idx| &self.layouts[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Finds the layout best matching a host locale such as "ru-RU".
    ///
    /// Tries the language code, then the exact locale tag, then the primary
    /// language subtag.
    pub fn find_for_locale(&self, tag: &str) -> Option<&Arc<Layout>> {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return None;
        }

        if let Some(layout) = self.get(&tag) {
            return Some(layout);
        }

        if let Some(layout) = self.layouts.iter().find(|l| normalize_tag(l.locale()) == tag) {
            return Some(layout);
        }

        let primary = primary_subtag(&tag);
        self.layouts
            .iter()
            .find(|l| primary_subtag(&normalize_tag(l.locale())) == primary)
    }

    /// Layouts in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Layout>> {
        self.layouts.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.layouts.iter().map(|l| l.code())
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
