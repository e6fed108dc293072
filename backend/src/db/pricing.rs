use diesel::prelude::*;
use anyhow::{Context, Result};

use crate::db::models::*;
use crate::db::schema::{discount_rate, payment_method, pricing_details, vat_rate};
use crate::db::DatabaseHandle;
use crate::entities::{DiscountRate, PaymentMethod, PricingDetails, PricingDetailsRecords, VatRate};
use crate::logger::{debug, warn};

pub type PricingDbHandle = DatabaseHandle;

impl PricingDbHandle {
    pub fn find_all_payment_methods(&self) -> Result<Vec<PaymentMethod>> {
        debug("querying payment_method for all records");

        let records = self.do_read(|db_conn| {
            payment_method::table
                .select(PaymentMethodRecord::as_select())
                .order(payment_method::id.asc())
                .load(db_conn)
        }).context("Query failed for all payment methods")?;

        Ok(records.into_iter().map(PaymentMethod::from).collect())
    }

    pub fn find_payment_methods_by_ids(&self, ids: &[i64]) -> Result<Vec<PaymentMethod>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug(&format!("querying payment_method for records with IDs {:?}", ids));

        let ids = ids.to_vec();
        let records = self.do_read(|db_conn| {
            payment_method::table
                .filter(payment_method::id.eq_any(ids))
                .select(PaymentMethodRecord::as_select())
                .order(payment_method::id.asc())
                .load(db_conn)
        }).context("Query failed for payment methods by ids")?;

        Ok(records.into_iter().map(PaymentMethod::from).collect())
    }

    pub fn create_payment_method(&self, new_method: &NewPaymentMethod) -> Result<PaymentMethod> {
        let record = self.do_write(|db_conn| {
            diesel::insert_into(payment_method::table)
                .values(new_method)
                .returning(PaymentMethodRecord::as_returning())
                .get_result(db_conn)
        }).with_context(|| format!("Insert failed for payment method: {}", new_method.description))?;

        Ok(record.into())
    }

    pub fn find_all_vat_rates(&self) -> Result<Vec<VatRate>> {
        let records = self.do_read(|db_conn| {
            vat_rate::table
                .select(VatRateRecord::as_select())
                .order(vat_rate::id.asc())
                .load(db_conn)
        }).context("Query failed for all vat rates")?;

        Ok(records.into_iter().map(VatRate::from).collect())
    }

    pub fn create_vat_rate(&self, new_rate: &NewVatRate) -> Result<VatRate> {
        let record = self.do_write(|db_conn| {
            diesel::insert_into(vat_rate::table)
                .values(new_rate)
                .returning(VatRateRecord::as_returning())
                .get_result(db_conn)
        }).with_context(|| format!("Insert failed for vat rate: {}", new_rate.description))?;

        Ok(record.into())
    }

    pub fn find_all_discount_rates(&self) -> Result<Vec<DiscountRate>> {
        let records = self.do_read(|db_conn| {
            discount_rate::table
                .select(DiscountRateRecord::as_select())
                .order(discount_rate::id.asc())
                .load(db_conn)
        }).context("Query failed for all discount rates")?;

        Ok(records.into_iter().map(DiscountRate::from).collect())
    }

    pub fn create_discount_rate(&self, new_rate: &NewDiscountRate) -> Result<DiscountRate> {
        let record = self.do_write(|db_conn| {
            diesel::insert_into(discount_rate::table)
                .values(new_rate)
                .returning(DiscountRateRecord::as_returning())
                .get_result(db_conn)
        }).with_context(|| format!("Insert failed for discount rate: {}", new_rate.description))?;

        Ok(record.into())
    }

    /// All pricing details, each joined to its vat rate, discount rate and
    /// preferred payment method.
    pub fn find_all_pricing_details(&self) -> Result<Vec<PricingDetails>> {
        debug("querying pricing_details for all records");
        self.find_pricing_details(None)
    }

    pub fn find_pricing_details_by_ids(&self, ids: &[i64]) -> Result<Vec<PricingDetails>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug(&format!("querying pricing_details for records with IDs {:?}", ids));
        self.find_pricing_details(Some(ids.to_vec()))
    }

    fn find_pricing_details(&self, ids: Option<Vec<i64>>) -> Result<Vec<PricingDetails>> {
        let rows = self.do_read(|db_conn| load_pricing_details(db_conn, ids))
            .context("Query failed for pricing details")?;

        Ok(rows.into_iter().map(PricingDetails::from).collect())
    }

    /// Ids of the pricing details which prefer the given payment method.
    pub fn find_pricing_details_ids_for_payment_method(&self, method: &PaymentMethodRecord) -> Result<Vec<i64>> {
        self.do_read(|db_conn| {
            PricingDetailsRecord::belonging_to(method)
                .select(pricing_details::id)
                .order(pricing_details::id.asc())
                .load::<i64>(db_conn)
        }).with_context(|| format!("Query failed for pricing details of payment method {}", method.id))
    }

    /// Inserts the row and reads it back joined to its rates and payment
    /// method. A row whose references don't resolve is rolled back.
    pub fn create_pricing_details(&self, new_details: &NewPricingDetails) -> Result<PricingDetails> {
        let row = self.do_write(|db_conn| {
            db_conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let id = diesel::insert_into(pricing_details::table)
                    .values(new_details)
                    .returning(pricing_details::id)
                    .get_result::<i64>(conn)?;

                load_pricing_details(conn, Some(vec![id]))?
                    .into_iter()
                    .next()
                    .ok_or(diesel::result::Error::NotFound)
            })
        });

        match row {
            Ok(row) => Ok(row.into()),
            Err(e) => {
                warn(&format!("create_pricing_details() rolled back {}: {}", new_details.description, e));
                Err(e.context(format!("Insert failed for pricing details: {}", new_details.description)))
            }
        }
    }
}

fn load_pricing_details(db_conn: &mut SqliteConnection, ids: Option<Vec<i64>>) -> QueryResult<Vec<PricingDetailsRecords>> {
    let mut query = pricing_details::table
        .inner_join(vat_rate::table)
        .inner_join(discount_rate::table)
        .inner_join(payment_method::table)
        .select((
            PricingDetailsRecord::as_select(),
            VatRateRecord::as_select(),
            DiscountRateRecord::as_select(),
            PaymentMethodRecord::as_select(),
        ))
        .order(pricing_details::id.asc())
        .into_boxed();

    if let Some(ids) = ids {
        query = query.filter(pricing_details::id.eq_any(ids));
    }

    query.load::<PricingDetailsRecords>(db_conn)
}
