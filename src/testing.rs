// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::dataset::Dataset;
use crate::types::{
    Catalogue, Category, CompositionEntry, DataBlock, DataItem, Interface, Obligation,
    RejectionCode,
};

/// Create a bare interface: empty description, no parties, no composition.
pub fn make_interface(id: &str, name: &str, category: Category) -> Interface {
    Interface {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        sender: None,
        receiver: None,
        context: None,
        category,
        composition: vec![],
        rejection_code_ids: vec![],
    }
}

/// Create a mandatory data item with the given name and rule.
pub fn make_item(name: &str, rule: &str) -> DataItem {
    DataItem {
        name: name.to_string(),
        cmo: Obligation::Mandatory,
        rule: rule.to_string(),
        ..DataItem::default()
    }
}

/// Create a data block listing `items` in order.
pub fn make_block(title: &str, items: &[&str]) -> DataBlock {
    DataBlock {
        title: title.to_string(),
        items: items.iter().map(|id| id.to_string()).collect(),
    }
}

/// Create a rejection code with a description only.
pub fn make_rejection_code(description: &str) -> RejectionCode {
    RejectionCode {
        description: description.to_string(),
        ..RejectionCode::default()
    }
}

/// Assemble a catalogue from item and block pairs. No rejection codes.
pub fn make_catalogue(items: Vec<(&str, DataItem)>, blocks: Vec<(&str, DataBlock)>) -> Catalogue {
    Catalogue {
        data_items: items
            .into_iter()
            .map(|(id, item)| (id.to_string(), item))
            .collect(),
        data_blocks: blocks
            .into_iter()
            .map(|(id, block)| (id.to_string(), block))
            .collect(),
        rejection_codes: Default::default(),
    }
}

/// A small dataset covering every category and composition variant.
///
/// | id     | category | composition                        | items |
/// |--------|----------|------------------------------------|-------|
/// | IF-001 | both     | block DB-01 (3 items), DI-004, hdr | 4     |
/// | IF-002 | none     | DI-001                             | 1     |
/// | IF-003 | send     | block DB-02 (5 items)              | 5     |
/// | IF-004 | receive  | block DB-404 (unresolved), DI-404  | 1     |
pub fn sample_dataset() -> Dataset {
    let mut catalogue = make_catalogue(
        vec![
            ("DI-001", make_item("MPAN Core", "13 digit meter point reference")),
            ("DI-002", make_item("Meter Serial Number", "Serial of the installed meter")),
            ("DI-003", make_item("Reading Date", "Date the reading was taken")),
            ("DI-004", make_item("Register Reading", "Cumulative register value")),
            ("DI-005", make_item("Energisation Status", "Energised or de-energised")),
            ("DI-006", make_item("Connection Type", "Whole current or CT")),
        ],
        vec![
            ("DB-01", make_block("Meter Details", &["DI-001", "DI-002", "DI-003"])),
            (
                "DB-02",
                make_block(
                    "Metering Point",
                    &["DI-001", "DI-002", "DI-003", "DI-005", "DI-006"],
                ),
            ),
        ],
    );
    catalogue
        .rejection_codes
        .insert("ER-001".to_string(), make_rejection_code("Unknown MPAN"));
    catalogue.rejection_codes.insert(
        "ER-002".to_string(),
        RejectionCode {
            description: "Reading out of range".to_string(),
            reason: Some("Register value below previous reading".to_string()),
            resolution: Some("Resubmit with a validated reading".to_string()),
        },
    );

    let mut reading_request = make_interface("IF-001", "Meter Reading Request", Category::Both);
    reading_request.description = "Request a meter reading from the registered supplier".to_string();
    reading_request.sender = Some("Registration Service".to_string());
    reading_request.receiver = Some("Supplier".to_string());
    reading_request.composition = vec![
        CompositionEntry::block("DB-01"),
        CompositionEntry::item("DI-004"),
        CompositionEntry::header("Notes"),
    ];
    reading_request.rejection_code_ids = vec!["ER-002".to_string(), "ER-404".to_string()];

    let mut reading_response = make_interface("IF-002", "Meter Reading Response", Category::Uninvolved);
    reading_response.composition = vec![CompositionEntry::item("DI-001")];

    let mut status_update = make_interface("IF-003", "Energisation Status Update", Category::Send);
    status_update.sender = Some("Supplier".to_string());
    status_update.receiver = Some("Distribution Network Operator".to_string());
    status_update.composition = vec![CompositionEntry::Block {
        id: "DB-02".to_string(),
        title_override: Some("Site Details".to_string()),
    }];
    status_update.rejection_code_ids = vec!["ER-001".to_string()];

    let mut orphan = make_interface("IF-004", "Supplier Appointment", Category::Receive);
    orphan.context = Some("Sent on change of supplier".to_string());
    orphan.composition = vec![
        CompositionEntry::block("DB-404"),
        CompositionEntry::item("DI-404"),
    ];

    match Dataset::new(
        vec![reading_request, reading_response, status_update, orphan],
        catalogue,
    ) {
        Ok(dataset) => dataset,
        Err(error) => panic!("sample dataset is malformed: {error}"),
    }
}
