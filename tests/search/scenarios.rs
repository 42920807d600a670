//! End-to-end scenarios on small hand-built datasets.

use super::common::{filter_ids, ids, make_block, make_catalogue, make_interface, make_item};
use catalens::{
    composed_item_count, AdvancedFilters, Category, CompositionEntry, Dataset, Explorer,
    FilterCriteria,
};

fn explorer(records: Vec<catalens::Interface>, catalogue: catalens::Catalogue) -> Explorer {
    Explorer::new(Dataset::new(records, catalogue).unwrap())
}

#[test]
fn test_meter_search_keeps_stable_order_on_equal_scores() {
    let mut explorer = explorer(
        vec![
            make_interface("A", "Meter Reading Request", Category::Both),
            make_interface("B", "Meter Reading Response", Category::Uninvolved),
        ],
        Default::default(),
    );

    let criteria = FilterCriteria::new().with_search("meter");
    assert_eq!(filter_ids(&mut explorer, &criteria), vec!["A", "B"]);
}

#[test]
fn test_min_items_bound_is_inclusive() {
    let catalogue = make_catalogue(
        vec![],
        vec![
            ("DB-3", make_block("Three", &["I1", "I2", "I3"])),
            ("DB-5", make_block("Five", &["I1", "I2", "I3", "I4", "I5"])),
        ],
    );
    let mut three = make_interface("THREE", "Small", Category::Send);
    three.composition = vec![CompositionEntry::block("DB-3")];
    let mut five = make_interface("FIVE", "Large", Category::Send);
    five.composition = vec![CompositionEntry::block("DB-5")];

    let mut explorer = explorer(vec![three, five], catalogue);
    let criteria = FilterCriteria::new().with_advanced(AdvancedFilters {
        min_data_items: 5,
        ..AdvancedFilters::default()
    });
    assert_eq!(filter_ids(&mut explorer, &criteria), vec!["FIVE"]);
}

#[test]
fn test_favorite_toggle_round_trip() {
    let mut explorer = explorer(
        vec![
            make_interface("A", "First", Category::Send),
            make_interface("B", "Second", Category::Send),
        ],
        Default::default(),
    );
    let favorites = FilterCriteria::new().with_advanced(AdvancedFilters {
        favorites_only: true,
        ..AdvancedFilters::default()
    });

    explorer.toggle_favorite("A");
    assert_eq!(filter_ids(&mut explorer, &favorites), vec!["A"]);

    explorer.toggle_favorite("A");
    assert!(filter_ids(&mut explorer, &favorites).is_empty());
}

#[test]
fn test_block_item_header_count() {
    let catalogue = make_catalogue(
        vec![("I1", make_item("Item", "rule"))],
        vec![("B1", make_block("Block", &["X1", "X2", "X3"]))],
    );
    let mut record = make_interface("R", "Record", Category::Send);
    record.composition = vec![
        CompositionEntry::block("B1"),
        CompositionEntry::item("I1"),
        CompositionEntry::header("Section"),
    ];

    assert_eq!(composed_item_count(&record, &catalogue), 4);
}

#[test]
fn test_both_record_across_category_views() {
    let mut explorer = explorer(
        vec![
            make_interface("BOTH", "Two way", Category::Both),
            make_interface("SEND", "One way", Category::Send),
        ],
        Default::default(),
    );
    let mut view = |category: Option<Category>| {
        let criteria = match category {
            Some(category) => FilterCriteria::new().with_category(category),
            None => FilterCriteria::new(),
        };
        ids(&explorer.filter(&criteria))
    };

    assert_eq!(view(None), vec!["BOTH", "SEND"]);
    assert_eq!(view(Some(Category::Send)), vec!["BOTH", "SEND"]);
    assert_eq!(view(Some(Category::Receive)), vec!["BOTH"]);
}

#[test]
fn test_dangling_references_contribute_nothing() {
    let mut record = make_interface("R", "Record", Category::Send);
    record.composition = vec![
        CompositionEntry::block("MISSING"),
        CompositionEntry::item("ALSO-MISSING"),
    ];
    record.rejection_code_ids = vec!["ER-NOPE".to_string()];
    let mut explorer = explorer(vec![record], Default::default());

    assert_eq!(explorer.composed_item_count("R"), Some(1));
    assert!(explorer.rejection_codes_for("R").is_empty());
    assert_eq!(
        explorer.searchable_content("R").as_deref(),
        Some("r record    ")
    );
    assert_eq!(filter_ids(&mut explorer, &FilterCriteria::new()), vec!["R"]);
}
