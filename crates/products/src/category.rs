//! Product categories.
//!
//! The catalog is a fixed set of exactly [`CATEGORY_COUNT`] entries, built once
//! at startup and never mutated afterwards. The id-to-name mapping and the
//! display order are chosen by configuration (see [`CategoryCatalog::parse`]).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kelontong_core::{DomainError, DomainResult, ValueObject};

use crate::product::Product;

/// Number of categories every catalog carries.
pub const CATEGORY_COUNT: usize = 3;

/// One category entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCategory {
    id: u8,
    name: String,
}

impl ValueObject for ProductCategory {}

impl ProductCategory {
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The fixed, read-only category set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProductCategory>", into = "Vec<ProductCategory>")]
pub struct CategoryCatalog {
    entries: Vec<ProductCategory>,
}

impl CategoryCatalog {
    /// The canonical mapping: 1 Beverages, 2 Household, 3 Snacks.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ProductCategory::new(1, "Beverages"),
                ProductCategory::new(2, "Household"),
                ProductCategory::new(3, "Snacks"),
            ],
        }
    }

    /// Build a catalog from explicit entries, kept in the given order.
    pub fn from_entries(entries: Vec<ProductCategory>) -> DomainResult<Self> {
        if entries.len() != CATEGORY_COUNT {
            return Err(DomainError::validation(format!(
                "category catalog needs exactly {CATEGORY_COUNT} entries, got {}",
                entries.len()
            )));
        }

        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "category {} has a blank name",
                    entry.id
                )));
            }

            for other in &entries[..idx] {
                if other.id == entry.id {
                    return Err(DomainError::validation(format!(
                        "duplicate category id {}",
                        entry.id
                    )));
                }
                if other.name.eq_ignore_ascii_case(&entry.name) {
                    return Err(DomainError::validation(format!(
                        "duplicate category name {:?}",
                        entry.name
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Parse a `"1=Beverages,2=Household,3=Snacks"` style definition.
    ///
    /// Entry order in the string is the display order.
    pub fn parse(definition: &str) -> DomainResult<Self> {
        let entries = definition
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (id, name) = part.split_once('=').ok_or_else(|| {
                    DomainError::parse(format!("category entry {part:?} is not of the form id=name"))
                })?;
                let id = id.trim().parse::<u8>().map_err(|e| {
                    DomainError::parse(format!("category id {:?}: {e}", id.trim()))
                })?;
                Ok(ProductCategory::new(id, name.trim()))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::from_entries(entries)
    }

    pub fn get(&self, id: u8) -> Option<&ProductCategory> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn name_of(&self, id: u8) -> Option<&str> {
        self.get(id).map(ProductCategory::name)
    }

    pub fn contains(&self, id: u8) -> bool {
        self.get(id).is_some()
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ProductCategory> {
        let name = name.trim();
        self.entries.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Entries in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductCategory> {
        self.entries.iter()
    }

    /// Products whose category id is not in this catalog.
    pub fn uncategorized<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| !self.contains(p.category_id()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for CategoryCatalog {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for CategoryCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", entry.id, entry.name)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<ProductCategory>> for CategoryCatalog {
    type Error = DomainError;

    fn try_from(entries: Vec<ProductCategory>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<CategoryCatalog> for Vec<ProductCategory> {
    fn from(catalog: CategoryCatalog) -> Self {
        catalog.entries
    }
}
