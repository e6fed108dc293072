use std::sync::Arc;

use pricing_backend::meta::public::keys;
use pricing_backend::meta::{
    render_declaration, DataType, Name, PaymentMethodTable, SqlType, Table, PAYMENT_METHOD, PRICING_DETAILS,
};

#[test]
fn test_reference_instance_columns() {
    let fields = PAYMENT_METHOD.fields();
    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["ID", "DESCRIPTION", "CHARGE"]);

    assert_eq!(fields[0].data_type(), DataType::BIGINT.nullable(false).identity(true));
    assert_eq!(fields[1].data_type().sql_type, SqlType::Varchar(255));
    assert!(!fields[1].data_type().nullable);
    assert_eq!(fields[2].data_type().sql_type, SqlType::Double);
    assert!(!fields[2].data_type().nullable);
    assert!(!fields[2].data_type().identity);
}

#[test]
fn test_reference_instance_metadata() {
    assert_eq!(PAYMENT_METHOD.name(), &Name::new("PAYMENT_METHOD"));
    assert!(PAYMENT_METHOD.aliased_table().is_none());
    assert_eq!(PAYMENT_METHOD.schema().map(|s| s.name), Some("PUBLIC"));
    assert_eq!(PAYMENT_METHOD.qualified_name().to_string(), "\"PUBLIC\".\"PAYMENT_METHOD\"");
    assert!(PAYMENT_METHOD.references().is_empty());

    let indexes = PAYMENT_METHOD.indexes();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes[0].name, "PRIMARY_KEY_D");
    assert_eq!(indexes[0].columns, &["ID"]);
}

#[test]
fn test_primary_key_and_identity() {
    let pk = PAYMENT_METHOD.primary_key().expect("primary key");
    assert_eq!(pk.name, "CONSTRAINT_D");
    assert_eq!(pk.columns, &["ID"]);
    assert_eq!(PAYMENT_METHOD.keys(), vec![pk]);

    let identity = PAYMENT_METHOD.identity().expect("identity");
    assert_eq!(identity.table, "PAYMENT_METHOD");
    assert_eq!(identity.column, "ID");
    assert_eq!(identity.column, PAYMENT_METHOD.id.name());
}

#[test]
fn test_fields_are_qualified_by_instance_name() {
    assert_eq!(
        PAYMENT_METHOD.charge.qualified_name().to_string(),
        "\"PAYMENT_METHOD\".\"CHARGE\""
    );

    let pm = PaymentMethodTable::aliased("pm");
    assert_eq!(pm.charge.qualified_name().to_string(), "\"pm\".\"CHARGE\"");
    assert_eq!(pm.field("description").map(|f| f.qualified_name()), Some(Name::qualified(["pm", "DESCRIPTION"])));
}

#[test]
fn test_rename_has_no_alias_reference() {
    let renamed = PAYMENT_METHOD.rename("X");
    assert_eq!(renamed.name(), &Name::new("X"));
    assert!(renamed.aliased_table().is_none());
    assert!(renamed.alias_of().is_none());
    assert_eq!(render_declaration(&renamed), "\"PUBLIC\".\"X\"");

    // Renaming an alias does not keep the alias chain either.
    let renamed_alias = PaymentMethodTable::aliased("a").rename(Name::new("Y"));
    assert!(renamed_alias.aliased_table().is_none());
}

#[test]
fn test_as_points_back_to_source() {
    let aliased = PAYMENT_METHOD.as_("X");
    assert_eq!(aliased.name(), &Name::new("X"));
    assert_eq!(aliased.aliased_table(), Some(&**PAYMENT_METHOD));
    assert_eq!(aliased.to_string(), "\"PUBLIC\".\"PAYMENT_METHOD\" AS \"X\"");

    let renamed = PAYMENT_METHOD.rename("R");
    let aliased_renamed = renamed.as_("Z");
    assert_eq!(aliased_renamed.aliased_table(), Some(&renamed));
    assert_eq!(aliased_renamed.to_string(), "\"PUBLIC\".\"R\" AS \"Z\"");
}

#[test]
fn test_alias_constructors() {
    let from_str = PaymentMethodTable::aliased("pm1");
    let from_name = PaymentMethodTable::aliased(Name::new("pm1"));
    assert_eq!(from_str, from_name);

    let reference = from_str.aliased_table().expect("alias reference");
    assert_eq!(reference, &**PAYMENT_METHOD);
}

#[test]
fn test_independent_aliases_share_columns() {
    let a = PaymentMethodTable::aliased("a");
    let b = PaymentMethodTable::aliased("b");

    assert_ne!(a, b);
    assert_ne!(a.id.qualified_name(), b.id.qualified_name());

    for (fa, fb) in a.fields().iter().zip(b.fields().iter()) {
        assert!(std::ptr::eq(fa.column(), fb.column()));
    }
    assert!(std::ptr::eq(a.id.column(), PAYMENT_METHOD.id.column()));
}

#[test]
fn test_child_instance_from_foreign_key() {
    let pm = PRICING_DETAILS.preferred_payment_method_table();
    let path = pm.path().expect("join path");

    assert_eq!(path.child, Name::new("PRICING_DETAILS"));
    assert!(std::ptr::eq(path.key, &keys::PRICING_DETAILS_PREFERRED_PAYMENT_METHOD));
    assert!(std::ptr::eq(path.key.references, &keys::CONSTRAINT_D));
    assert_eq!(pm.name().last(), "PRICING_DETAILS.PRICING_DETAILS_PREFERRED_PAYMENT_METHOD");
    assert_eq!(pm.aliased_table(), Some(&**PAYMENT_METHOD));
    assert_eq!(pm.primary_key(), PAYMENT_METHOD.primary_key());
}

#[test]
fn test_descriptors_are_shareable_across_threads() {
    let shared = Arc::new(PAYMENT_METHOD.as_("t"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&shared);
            std::thread::spawn(move || table.fields().len())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
