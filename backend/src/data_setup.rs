use anyhow::{Context, Result};
use diesel::prelude::*;

use crate::db::models::*;
use crate::db::schema::{discount_rate, payment_method, pricing_details, vat_rate};
use crate::db::DatabaseHandle;
use crate::logger::info;

pub const VAT_RATES: [(&str, f64); 3] = [("Standard", 20.0), ("Reduced", 5.0), ("Zero", 0.0)];
pub const DISCOUNT_RATES: [(&str, f64); 3] = [("None", 0.0), ("Cheap", 5.0), ("Cheapest", 10.0)];
pub const PAYMENT_METHODS: [(&str, f64); 3] = [("Cash", 0.0), ("Cheque", 2.5), ("Card", 1.5)];
pub const PRICING_DETAILS_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub vat_rates: usize,
    pub discount_rates: usize,
    pub payment_methods: usize,
    pub pricing_details: usize,
}

/// Replaces the contents of the pricing tables with a fixed set of test data.
///
/// Pricing details `PricingDetails-1..4` are assigned rates and payment
/// methods round-robin, so the data set is the same on every run.
pub fn seed_test_data(db: &DatabaseHandle) -> Result<SeedSummary> {
    info("seed_test_data()");

    let summary = db.do_write(|db_conn| {
        db_conn.transaction(|db_conn| {
            diesel::delete(pricing_details::table).execute(db_conn)?;
            diesel::delete(payment_method::table).execute(db_conn)?;
            diesel::delete(discount_rate::table).execute(db_conn)?;
            diesel::delete(vat_rate::table).execute(db_conn)?;

            let mut vat_ids = Vec::new();
            for (description, value) in VAT_RATES {
                let id = diesel::insert_into(vat_rate::table)
                    .values(&NewVatRate { description, value })
                    .returning(vat_rate::id)
                    .get_result::<i64>(db_conn)?;
                vat_ids.push(id);
            }

            let mut discount_ids = Vec::new();
            for (description, value) in DISCOUNT_RATES {
                let id = diesel::insert_into(discount_rate::table)
                    .values(&NewDiscountRate { description, value })
                    .returning(discount_rate::id)
                    .get_result::<i64>(db_conn)?;
                discount_ids.push(id);
            }

            let mut payment_ids = Vec::new();
            for (description, charge) in PAYMENT_METHODS {
                let id = diesel::insert_into(payment_method::table)
                    .values(&NewPaymentMethod { description, charge })
                    .returning(payment_method::id)
                    .get_result::<i64>(db_conn)?;
                payment_ids.push(id);
            }

            for n in 0..PRICING_DETAILS_COUNT {
                let description = format!("PricingDetails-{}", n + 1);
                diesel::insert_into(pricing_details::table)
                    .values(&NewPricingDetails {
                        description: &description,
                        vat_rate: vat_ids[n % vat_ids.len()],
                        discount_rate: discount_ids[(n + 1) % discount_ids.len()],
                        preferred_payment_method: payment_ids[(n + 2) % payment_ids.len()],
                    })
                    .execute(db_conn)?;
            }

            Ok(SeedSummary {
                vat_rates: vat_ids.len(),
                discount_rates: discount_ids.len(),
                payment_methods: payment_ids.len(),
                pricing_details: PRICING_DETAILS_COUNT,
            })
        })
    }).context("Failed to seed test data")?;

    info(&format!("Seeded {:?}", summary));
    Ok(summary)
}
