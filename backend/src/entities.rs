//! Domain objects handed out by the data-access layer.
//!
//! They are kept separate from the diesel records: a pricing details entity
//! is assembled from four joined rows, and callers should not depend on how
//! the tables are laid out.

use serde::{Deserialize, Serialize};

use crate::db::models::{DiscountRateRecord, PaymentMethodRecord, PricingDetailsRecord, VatRateRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRate {
    pub id: i64,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRate {
    pub id: i64,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub description: String,
    pub charge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingDetails {
    pub id: i64,
    pub description: String,
    pub vat_rate: VatRate,
    pub discount_rate: DiscountRate,
    pub preferred_payment_method: PaymentMethod,
}

impl From<VatRateRecord> for VatRate {
    fn from(r: VatRateRecord) -> Self {
        VatRate { id: r.id, description: r.description, value: r.value }
    }
}

impl From<DiscountRateRecord> for DiscountRate {
    fn from(r: DiscountRateRecord) -> Self {
        DiscountRate { id: r.id, description: r.description, value: r.value }
    }
}

impl From<PaymentMethodRecord> for PaymentMethod {
    fn from(r: PaymentMethodRecord) -> Self {
        PaymentMethod { id: r.id, description: r.description, charge: r.charge }
    }
}

/// The rows of one pricing details query result.
pub type PricingDetailsRecords = (PricingDetailsRecord, VatRateRecord, DiscountRateRecord, PaymentMethodRecord);

impl From<PricingDetailsRecords> for PricingDetails {
    fn from((details, vat, discount, payment): PricingDetailsRecords) -> Self {
        PricingDetails {
            id: details.id,
            description: details.description,
            vat_rate: vat.into(),
            discount_rate: discount.into(),
            preferred_payment_method: payment.into(),
        }
    }
}
