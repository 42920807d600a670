// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes of the catalogue: interfaces, composition entries, and the shared
//! lookup tables they reference.
//!
//! Field names follow the published dataset (`camelCase`, with the historical
//! `supplier_type` key for the category), so a dataset file deserializes
//! straight into these types with no adapter layer.
//!
//! # Invariants
//!
//! - **Interface**: `id` is unique within a loaded dataset (checked by the loader).
//! - **CompositionEntry**: order inside `Interface::composition` is significant.
//! - **Catalogue**: references into it may dangle. A missing block, item or
//!   rejection code contributes nothing anywhere; it is never an error.
//! - Text, list and flag fields tolerate `null` and read it as their empty
//!   value. Only `Interface::id` is strictly required.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATEGORY
// =============================================================================

/// Which side of the exchange the supplier sits on.
///
/// `Both` is special for filtering: the one-directional filters (`Send`,
/// `Receive`) also surface `Both` records. See [`CategoryFilter::admits`].
///
/// `Unspecified` covers a missing, `null` or unrecognised `supplier_type`.
/// Such a record is only visible under [`CategoryFilter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "supplier_send", alias = "sender-only")]
    Send,
    #[serde(rename = "supplier_receive", alias = "receiver-only")]
    Receive,
    #[serde(rename = "supplier_both", alias = "both")]
    Both,
    #[serde(rename = "none")]
    Uninvolved,
    #[default]
    #[serde(other, rename = "unspecified")]
    Unspecified,
}

impl Category {
    /// The four categories a dataset can name.
    pub const ALL: [Category; 4] = [
        Category::Send,
        Category::Receive,
        Category::Both,
        Category::Uninvolved,
    ];

    /// Dataset spelling of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Send => "supplier_send",
            Category::Receive => "supplier_receive",
            Category::Both => "supplier_both",
            Category::Uninvolved => "none",
            Category::Unspecified => "unspecified",
        }
    }

    /// Human label used by front ends.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Send => "Supplier Send",
            Category::Receive => "Supplier Receive",
            Category::Both => "Supplier Send & Receive",
            Category::Uninvolved => "Supplier Not Involved",
            Category::Unspecified => "Unspecified",
        }
    }

    /// True for the two one-directional views of `Both`.
    pub fn is_directional(&self) -> bool {
        matches!(self, Category::Send | Category::Receive)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supplier_send" | "sender-only" | "send" => Ok(Category::Send),
            "supplier_receive" | "receiver-only" | "receive" => Ok(Category::Receive),
            "supplier_both" | "both" => Ok(Category::Both),
            "none" => Ok(Category::Uninvolved),
            "unspecified" => Ok(Category::Unspecified),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// The category half of a criteria snapshot: everything, or one category.
///
/// Serializes as a plain string (`"all"` or the category's dataset spelling)
/// so criteria round-trip through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Does a record with `category` pass this filter?
    ///
    /// `All` admits everything. `Only(c)` admits `c`, and when `c` is one of the
    /// directional views it also admits `Both`.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => {
                *wanted == category || (wanted.is_directional() && category == Category::Both)
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Read `null` as the type's default. Pair with `#[serde(default)]` so an
/// absent key behaves the same.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// RECORDS
// =============================================================================

/// One catalogued exchange definition.
///
/// Immutable once loaded. Optional text fields are `None` when absent from the
/// dataset and read as empty wherever text is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename = "supplier_type",
        alias = "category"
    )]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub composition: Vec<CompositionEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rejection_code_ids: Vec<String>,
}

impl Interface {
    pub fn has_rejection_codes(&self) -> bool {
        !self.rejection_code_ids.is_empty()
    }
}

/// One element of an interface's composition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CompositionEntry {
    /// A shared data block, optionally displayed under a different title.
    Block {
        id: String,
        #[serde(
            default,
            rename = "titleOverride",
            skip_serializing_if = "Option::is_none"
        )]
        title_override: Option<String>,
    },
    /// A single data item.
    Item { id: String },
    /// A display-only section title. Carries no data.
    Header {
        #[serde(default, deserialize_with = "null_as_default")]
        title: String,
    },
}

impl CompositionEntry {
    pub fn block(id: impl Into<String>) -> Self {
        CompositionEntry::Block {
            id: id.into(),
            title_override: None,
        }
    }

    pub fn item(id: impl Into<String>) -> Self {
        CompositionEntry::Item { id: id.into() }
    }

    pub fn header(title: impl Into<String>) -> Self {
        CompositionEntry::Header {
            title: title.into(),
        }
    }
}

// =============================================================================
// CATALOGUE ENTRIES
// =============================================================================

/// Mandatory / optional / conditional designator of a data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Obligation {
    #[serde(rename = "M")]
    Mandatory,
    #[serde(rename = "O")]
    Optional,
    #[serde(rename = "C")]
    Conditional,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

impl Obligation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obligation::Mandatory => "M",
            Obligation::Optional => "O",
            Obligation::Conditional => "C",
            Obligation::Unspecified => "",
        }
    }
}

/// Shared data item definition, keyed by item id in the catalogue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cmo: Obligation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enumerated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_notes: Option<String>,
}

/// Shared data block definition: a titled, ordered list of item ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

/// Shared rejection code definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RejectionCode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// The three identifier-keyed lookup tables every interface draws from.
///
/// `BTreeMap` keeps iteration ordered by id, which makes listings and
/// diagnostics deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    #[serde(default, rename = "dataItemsCatalogue")]
    pub data_items: BTreeMap<String, DataItem>,
    #[serde(default, rename = "dataBlocksCatalogue")]
    pub data_blocks: BTreeMap<String, DataBlock>,
    #[serde(default, rename = "rejectionCodesCatalogue")]
    pub rejection_codes: BTreeMap<String, RejectionCode>,
}

impl Catalogue {
    #[inline]
    pub fn item(&self, id: &str) -> Option<&DataItem> {
        self.data_items.get(id)
    }

    #[inline]
    pub fn block(&self, id: &str) -> Option<&DataBlock> {
        self.data_blocks.get(id)
    }

    #[inline]
    pub fn rejection_code(&self, id: &str) -> Option<&RejectionCode> {
        self.rejection_codes.get(id)
    }
}
