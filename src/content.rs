// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flattening an interface into what the filter stage and the front ends need.
//!
//! Three views of the same composition walk:
//!
//! - [`searchable_content`]: one lower-cased blob for fuzzy matching
//! - [`composed_item_count`]: how many leaf data items the interface carries
//! - [`composition_view`]: resolved display sections for detail pages
//!
//! Dangling references are skipped in all three. The blob is rebuilt on every
//! call; memoization lives one level up, in the result cache.

use serde::Serialize;

use crate::types::{Catalogue, CompositionEntry, DataItem, Interface};

/// Lower-cased text a search term is matched against.
///
/// The six record fields come first, space-separated, with absent optional
/// fields read as empty. Then, in composition order, every resolvable item
/// contributes ` <item id> <name> <rule>`: items reached through a block in
/// block order, direct item references on their own. Headers contribute nothing.
pub fn searchable_content(record: &Interface, catalogue: &Catalogue) -> String {
    let mut content = [
        record.id.as_str(),
        record.name.as_str(),
        record.description.as_str(),
        record.sender.as_deref().unwrap_or(""),
        record.receiver.as_deref().unwrap_or(""),
        record.context.as_deref().unwrap_or(""),
    ]
    .join(" ");

    for entry in &record.composition {
        for item_id in leaf_item_ids(entry, catalogue) {
            if let Some(item) = catalogue.item(item_id) {
                content.push(' ');
                content.push_str(item_id);
                content.push(' ');
                content.push_str(&item.name);
                content.push(' ');
                content.push_str(&item.rule);
            }
        }
    }

    content.to_lowercase()
}

/// Total leaf data items reachable through the composition list.
///
/// A resolvable block adds its item list length, an unresolvable block adds 0,
/// an item reference adds 1 (whether or not the item resolves), a header adds 0.
pub fn composed_item_count(record: &Interface, catalogue: &Catalogue) -> usize {
    record
        .composition
        .iter()
        .map(|entry| match entry {
            CompositionEntry::Block { id, .. } => {
                catalogue.block(id).map_or(0, |block| block.items.len())
            }
            CompositionEntry::Item { .. } => 1,
            CompositionEntry::Header { .. } => 0,
        })
        .sum()
}

/// Item ids an entry expands to, before item resolution.
fn leaf_item_ids<'a>(
    entry: &'a CompositionEntry,
    catalogue: &'a Catalogue,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match entry {
        CompositionEntry::Block { id, .. } => match catalogue.block(id) {
            Some(block) => Box::new(block.items.iter().map(String::as_str)),
            None => Box::new(std::iter::empty()),
        },
        CompositionEntry::Item { id } => Box::new(std::iter::once(id.as_str())),
        CompositionEntry::Header { .. } => Box::new(std::iter::empty()),
    }
}

// =============================================================================
// COMPOSITION VIEW
// =============================================================================

/// A resolved data item, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub item: &'a DataItem,
}

/// One display section of an interface's composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section<'a> {
    Header { title: &'a str },
    Block {
        id: &'a str,
        title: &'a str,
        items: Vec<ItemRow<'a>>,
    },
    Item { row: ItemRow<'a> },
}

/// Resolve a composition list into display sections, in order.
///
/// Block titles honour the entry's override. Unresolvable blocks and items are
/// dropped; a resolvable block whose items all dangle still yields an empty
/// section so its title stays visible.
pub fn composition_view<'a>(
    record: &'a Interface,
    catalogue: &'a Catalogue,
) -> Vec<Section<'a>> {
    let row = |id: &'a str| catalogue.item(id).map(|item| ItemRow { id, item });

    record
        .composition
        .iter()
        .filter_map(|entry| match entry {
            CompositionEntry::Header { title } => Some(Section::Header { title }),
            CompositionEntry::Block { id, title_override } => {
                catalogue.block(id).map(|block| Section::Block {
                    id,
                    title: title_override.as_deref().unwrap_or(&block.title),
                    items: block
                        .items
                        .iter()
                        .filter_map(|item_id| row(item_id.as_str()))
                        .collect(),
                })
            }
            CompositionEntry::Item { id } => row(id.as_str()).map(|row| Section::Item { row }),
        })
        .collect()
}
