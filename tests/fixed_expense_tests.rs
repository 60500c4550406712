use finance_core::errors::ValidationError;
use finance_core::ledger::{FixedExpenseRegistry, IconTag};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn monthly_total_is_an_exact_decimal_sum() {
    let mut registry = FixedExpenseRegistry::new();
    let entries = [
        ("Aluguel", "home", 5, dec!(2000.00)),
        ("Internet", "wifi", 10, dec!(150.00)),
        ("Academia", "activity", 15, dec!(100.00)),
        ("Streaming", "film", 20, dec!(55.90)),
        ("Seguro Auto", "truck", 28, dec!(1144.10)),
    ];
    for (name, icon, due_day, amount) in entries {
        registry
            .add(name, IconTag::new(icon, "#E3F2FD"), due_day, amount)
            .unwrap();
    }
    assert_eq!(registry.monthly_total(), dec!(3450.00));
}

#[test]
fn total_tracks_removals_without_drift() {
    let mut registry = FixedExpenseRegistry::new();
    registry
        .add("Aluguel", IconTag::default(), 5, dec!(2000.00))
        .unwrap();
    let streaming = registry
        .add("Streaming", IconTag::default(), 20, dec!(55.90))
        .unwrap();

    registry.remove(streaming.id);
    assert_eq!(registry.monthly_total(), dec!(2000.00));

    // Idempotent: a second removal of the same id changes nothing.
    registry.remove(streaming.id);
    assert_eq!(registry.monthly_total(), dec!(2000.00));
    assert_eq!(registry.len(), 1);

    registry.remove(uuid::Uuid::new_v4());
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_registry_totals_zero() {
    let registry = FixedExpenseRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.monthly_total(), Decimal::ZERO);
}

#[test]
fn rejected_add_leaves_registry_unchanged() {
    let mut registry = FixedExpenseRegistry::new();
    registry
        .add("Internet", IconTag::default(), 10, dec!(150.00))
        .unwrap();

    assert_eq!(
        registry
            .add("Zero", IconTag::default(), 10, dec!(0))
            .unwrap_err(),
        ValidationError::NonPositiveAmount
    );
    assert_eq!(
        registry
            .add("Bad day", IconTag::default(), 0, dec!(10))
            .unwrap_err(),
        ValidationError::DueDayOutOfRange(0)
    );
    assert_eq!(
        registry
            .add("  ", IconTag::default(), 10, dec!(10))
            .unwrap_err(),
        ValidationError::EmptyField("name")
    );

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.monthly_total(), dec!(150.00));
}

#[test]
fn insertion_order_is_preserved() {
    let mut registry = FixedExpenseRegistry::new();
    registry
        .add("Aluguel", IconTag::default(), 5, dec!(2000.00))
        .unwrap();
    registry
        .add("Internet", IconTag::default(), 10, dec!(150.00))
        .unwrap();
    registry
        .add("Academia", IconTag::default(), 15, dec!(100.00))
        .unwrap();
    let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Aluguel", "Internet", "Academia"]);
}
