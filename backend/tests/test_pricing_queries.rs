use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;

mod helpers;
use helpers as h;

use pricing_backend::data_setup::{seed_test_data, PAYMENT_METHODS, PRICING_DETAILS_COUNT};
use pricing_backend::db::models::{NewPaymentMethod, NewPricingDetails, PaymentMethodRecord};
use pricing_backend::db::schema::{payment_method, pricing_details};

#[test]
fn test_migration_creates_all_tables() {
    let db = h::db_setup();

    let listing = db.do_read(|db_conn| {
        diesel::select(sql::<Text>(
            "(SELECT group_concat(name, ',') FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             AND name != '__diesel_schema_migrations')",
        ))
        .get_result::<String>(db_conn)
    }).expect("Query failed");

    let mut tables: Vec<&str> = listing.split(',').collect();
    tables.sort();

    assert_eq!(tables, vec![
        "company",
        "company_partnership",
        "customer",
        "discount_rate",
        "payment_method",
        "pricing_details",
        "vat_rate",
    ]);
}

#[test]
fn test_seeded_payment_methods() {
    let db = h::seeded_db_setup();

    let methods = db.find_all_payment_methods().expect("Query failed");
    let descriptions: Vec<&str> = methods.iter().map(|m| m.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Cash", "Cheque", "Card"]);

    let cheque = &methods[1];
    assert_eq!(cheque.charge, 2.5);
}

#[test]
fn test_find_payment_methods_by_ids() {
    let db = h::seeded_db_setup();
    let all = db.find_all_payment_methods().expect("Query failed");

    let ids = vec![all[2].id, all[0].id];
    let found = db.find_payment_methods_by_ids(&ids).expect("Query failed");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], all[0]);
    assert_eq!(found[1], all[2]);

    assert!(db.find_payment_methods_by_ids(&[]).expect("Query failed").is_empty());
    assert!(db.find_payment_methods_by_ids(&[-1]).expect("Query failed").is_empty());
}

#[test]
fn test_create_payment_method_assigns_identity() {
    let db = h::db_setup();

    let a = db.create_payment_method(&NewPaymentMethod { description: "Voucher", charge: 0.75 })
        .expect("Insert failed");
    let b = db.create_payment_method(&NewPaymentMethod { description: "Transfer", charge: 0.0 })
        .expect("Insert failed");

    assert!(b.id > a.id);
    assert_eq!(a.description, "Voucher");
    assert_eq!(a.charge, 0.75);
}

#[test]
fn test_pricing_details_are_joined() {
    let db = h::seeded_db_setup();

    let details = db.find_all_pricing_details().expect("Query failed");
    assert_eq!(details.len(), PRICING_DETAILS_COUNT);
    assert_eq!(details[0].description, "PricingDetails-1");

    let method_names: Vec<&str> = PAYMENT_METHODS.iter().map(|(d, _)| *d).collect();
    for d in &details {
        assert!(method_names.contains(&d.preferred_payment_method.description.as_str()));
    }

    // Round-robin assignment: first row gets the first vat rate and the third payment method.
    assert_eq!(details[0].vat_rate.description, "Standard");
    assert_eq!(details[0].discount_rate.description, "Cheap");
    assert_eq!(details[0].preferred_payment_method.description, "Card");
}

#[test]
fn test_find_pricing_details_by_ids() {
    let db = h::seeded_db_setup();
    let all = db.find_all_pricing_details().expect("Query failed");

    let found = db.find_pricing_details_by_ids(&[all[3].id, all[1].id]).expect("Query failed");
    assert_eq!(found, vec![all[1].clone(), all[3].clone()]);

    assert!(db.find_pricing_details_by_ids(&[]).expect("Query failed").is_empty());
}

#[test]
fn test_create_pricing_details() {
    let db = h::seeded_db_setup();
    let vat = db.find_all_vat_rates().expect("Query failed");
    let discount = db.find_all_discount_rates().expect("Query failed");
    let methods = db.find_all_payment_methods().expect("Query failed");

    let created = db.create_pricing_details(&NewPricingDetails {
        description: "Custom",
        vat_rate: vat[1].id,
        discount_rate: discount[2].id,
        preferred_payment_method: methods[0].id,
    }).expect("Insert failed");

    assert_eq!(created.vat_rate, vat[1]);
    assert_eq!(created.discount_rate, discount[2]);
    assert_eq!(created.preferred_payment_method, methods[0]);

    let count_rows = || {
        db.do_read(|db_conn| pricing_details::table.count().get_result::<i64>(db_conn))
            .expect("Count failed")
    };
    let rows_before = count_rows();

    let missing = db.create_pricing_details(&NewPricingDetails {
        description: "Dangling",
        vat_rate: -1,
        discount_rate: discount[0].id,
        preferred_payment_method: methods[0].id,
    });
    assert!(missing.is_err());

    // The failed insert is rolled back, so no unjoinable row is left behind.
    assert_eq!(count_rows(), rows_before);
    let method_record = db.do_read(|db_conn| {
        payment_method::table
            .find(methods[0].id)
            .select(PaymentMethodRecord::as_select())
            .first(db_conn)
    }).expect("Query failed");
    let ids = db.find_pricing_details_ids_for_payment_method(&method_record).expect("Query failed");
    assert!(ids.contains(&created.id));
    assert_eq!(ids.len(), db.find_all_pricing_details().expect("Query failed")
        .iter()
        .filter(|d| d.preferred_payment_method.id == methods[0].id)
        .count());
}

#[test]
fn test_pricing_details_for_payment_method() {
    let db = h::seeded_db_setup();

    let card = db.do_read(|db_conn| {
        payment_method::table
            .filter(payment_method::description.eq("Card"))
            .select(PaymentMethodRecord::as_select())
            .first(db_conn)
    }).expect("Query failed");

    let ids = db.find_pricing_details_ids_for_payment_method(&card).expect("Query failed");
    let expected: Vec<i64> = db.find_all_pricing_details().expect("Query failed")
        .into_iter()
        .filter(|d| d.preferred_payment_method.id == card.id)
        .map(|d| d.id)
        .collect();

    assert!(!ids.is_empty());
    assert_eq!(ids, expected);
}

#[test]
fn test_seeding_is_repeatable() {
    let db = h::seeded_db_setup();
    let summary = seed_test_data(&db).expect("Seed failed");

    assert_eq!(summary.payment_methods, 3);
    assert_eq!(db.find_all_payment_methods().expect("Query failed").len(), 3);
    assert_eq!(db.find_all_pricing_details().expect("Query failed").len(), PRICING_DETAILS_COUNT);
}
