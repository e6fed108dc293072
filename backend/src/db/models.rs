use diesel::prelude::*;
use crate::db::schema::*;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = payment_method)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentMethodRecord {
    pub id: i64,
    pub description: String,
    pub charge: f64,
}

// The id is an identity column and is never set by callers.
#[derive(Insertable)]
#[diesel(table_name = payment_method)]
pub struct NewPaymentMethod<'a> {
    pub description: &'a str,
    pub charge: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = vat_rate)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VatRateRecord {
    pub id: i64,
    pub description: String,
    pub value: f64,
}

#[derive(Insertable)]
#[diesel(table_name = vat_rate)]
pub struct NewVatRate<'a> {
    pub description: &'a str,
    pub value: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = discount_rate)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DiscountRateRecord {
    pub id: i64,
    pub description: String,
    pub value: f64,
}

#[derive(Insertable)]
#[diesel(table_name = discount_rate)]
pub struct NewDiscountRate<'a> {
    pub description: &'a str,
    pub value: f64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Associations)]
#[diesel(belongs_to(VatRateRecord, foreign_key = vat_rate))]
#[diesel(belongs_to(DiscountRateRecord, foreign_key = discount_rate))]
#[diesel(belongs_to(PaymentMethodRecord, foreign_key = preferred_payment_method))]
#[diesel(table_name = pricing_details)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PricingDetailsRecord {
    pub id: i64,
    pub description: String,
    pub vat_rate: i64,
    pub discount_rate: i64,
    pub preferred_payment_method: i64,
}

#[derive(Insertable)]
#[diesel(table_name = pricing_details)]
pub struct NewPricingDetails<'a> {
    pub description: &'a str,
    pub vat_rate: i64,
    pub discount_rate: i64,
    pub preferred_payment_method: i64,
}
