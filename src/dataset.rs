// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the catalogue dataset.
//!
//! The dataset is one JSON document with four top-level collections:
//!
//! ```text
//! {
//!   "interfaces":              [ Interface, ... ],      ordered
//!   "dataItemsCatalogue":      { id: DataItem, ... },
//!   "dataBlocksCatalogue":     { id: DataBlock, ... },
//!   "rejectionCodesCatalogue": { id: RejectionCode, ... }
//! }
//! ```
//!
//! Any collection may be missing and reads as empty. Interface ids must be
//! unique; that is the only structural check. Dangling references are left
//! alone (see [`Dataset::unresolved_references`] for a diagnostic listing).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::DatasetError;
use crate::types::{Catalogue, CompositionEntry, DataItem, Interface, Obligation};

/// The loaded, read-only dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    interfaces: Vec<Interface>,
    #[serde(flatten)]
    catalogue: Catalogue,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl Dataset {
    /// Assemble a dataset, rejecting duplicate interface ids.
    pub fn new(interfaces: Vec<Interface>, catalogue: Catalogue) -> Result<Self, DatasetError> {
        let mut dataset = Dataset {
            interfaces,
            catalogue,
            positions: HashMap::new(),
        };
        dataset.index_positions()?;
        Ok(dataset)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let mut dataset: Dataset = serde_json::from_str(json)?;
        dataset.index_positions()?;
        tracing::info!(
            interfaces = dataset.interfaces.len(),
            data_items = dataset.catalogue.data_items.len(),
            data_blocks = dataset.catalogue.data_blocks.len(),
            rejection_codes = dataset.catalogue.rejection_codes.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn index_positions(&mut self) -> Result<(), DatasetError> {
        self.positions.clear();
        self.positions.reserve(self.interfaces.len());
        for (position, record) in self.interfaces.iter().enumerate() {
            if self.positions.insert(record.id.clone(), position).is_some() {
                return Err(DatasetError::DuplicateRecordId(record.id.clone()));
            }
        }
        Ok(())
    }

    /// Interfaces in declaration order.
    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn record(&self, id: &str) -> Option<&Interface> {
        self.position(id).map(|position| &self.interfaces[position])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Overlay partial data-item definitions onto the item catalogue.
    ///
    /// Present patch fields overwrite, absent ones leave the existing value.
    /// Unknown ids are inserted. Enumerated values become the item's
    /// population notes and mark it enumerated.
    pub fn enrich(&mut self, patches: BTreeMap<String, DataItemPatch>) {
        for (id, patch) in patches {
            let item = self.catalogue.data_items.entry(id).or_default();
            patch.apply(item);
        }
    }

    /// Every reference that points nowhere, in dataset order.
    ///
    /// Purely diagnostic: filtering already treats these as contributing nothing.
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let catalogue = &self.catalogue;
        let mut missing = Vec::new();
        let mut push = |record: &Interface, kind, id: &str| {
            missing.push(UnresolvedReference {
                record_id: record.id.clone(),
                kind,
                missing_id: id.to_string(),
            });
        };

        for record in &self.interfaces {
            for entry in &record.composition {
                match entry {
                    CompositionEntry::Block { id, .. } => match catalogue.block(id) {
                        Some(block) => {
                            for item_id in &block.items {
                                if catalogue.item(item_id).is_none() {
                                    push(record, ReferenceKind::BlockItem, item_id);
                                }
                            }
                        }
                        None => push(record, ReferenceKind::Block, id),
                    },
                    CompositionEntry::Item { id } => {
                        if catalogue.item(id).is_none() {
                            push(record, ReferenceKind::Item, id);
                        }
                    }
                    CompositionEntry::Header { .. } => {}
                }
            }
            for code in &record.rejection_code_ids {
                if catalogue.rejection_code(code).is_none() {
                    push(record, ReferenceKind::RejectionCode, code);
                }
            }
        }
        missing
    }
}

/// A partial data-item definition used to enrich the catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cmo: Option<Obligation>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub enumerated: Option<bool>,
    #[serde(default)]
    pub enum_values: Option<String>,
}

impl DataItemPatch {
    fn apply(self, item: &mut DataItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(cmo) = self.cmo {
            item.cmo = cmo;
        }
        if let Some(rule) = self.rule {
            item.rule = rule;
        }
        if let Some(example) = self.example {
            item.example = Some(example);
        }
        if let Some(enumerated) = self.enumerated {
            item.enumerated = enumerated;
        }
        if let Some(values) = self.enum_values {
            item.enumerated = true;
            item.population_notes = Some(values);
        }
    }
}

/// What kind of reference failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    Block,
    Item,
    /// An item listed inside a block that does resolve.
    BlockItem,
    RejectionCode,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Block => "block",
            ReferenceKind::Item => "item",
            ReferenceKind::BlockItem => "block item",
            ReferenceKind::RejectionCode => "rejection code",
        }
    }
}

/// One dangling reference found by [`Dataset::unresolved_references`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedReference {
    pub record_id: String,
    pub kind: ReferenceKind,
    pub missing_id: String,
}
