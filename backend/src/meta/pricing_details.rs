use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::meta::payment_method::PaymentMethodTable;
use crate::meta::public::{indexes, keys, PUBLIC};
use crate::meta::{
    render_declaration, Column, DataType, Field, ForeignKey, Identity, Index, Name, Schema, Table,
    TableField, UniqueKey,
};

pub const TABLE_NAME: &str = "PRICING_DETAILS";

static COLUMNS: [Column; 5] = [
    Column::new("ID", DataType::BIGINT.nullable(false).identity(true)),
    Column::new("DESCRIPTION", DataType::varchar(255).nullable(false)),
    Column::new("VAT_RATE", DataType::BIGINT.nullable(false)),
    Column::new("DISCOUNT_RATE", DataType::BIGINT.nullable(false)),
    Column::new("PREFERRED_PAYMENT_METHOD", DataType::BIGINT.nullable(false)),
];

lazy_static! {
    /// The reference instance of `PUBLIC.PRICING_DETAILS`.
    pub static ref PRICING_DETAILS: Arc<PricingDetailsTable> = Arc::new(PricingDetailsTable::new());
}

/// Descriptor of `PUBLIC.PRICING_DETAILS`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingDetailsTable {
    name: Name,
    aliased: Option<Arc<PricingDetailsTable>>,

    pub id: TableField<i64>,
    pub description: TableField<String>,
    pub vat_rate: TableField<i64>,
    pub discount_rate: TableField<i64>,
    pub preferred_payment_method: TableField<i64>,
}

impl PricingDetailsTable {
    pub fn new() -> Self {
        Self::with_alias(Name::new(TABLE_NAME), None)
    }

    pub fn aliased(alias: impl Into<Name>) -> Self {
        Self::with_alias(alias.into(), Some(Arc::clone(&PRICING_DETAILS)))
    }

    fn with_alias(name: Name, aliased: Option<Arc<PricingDetailsTable>>) -> Self {
        PricingDetailsTable {
            id: TableField::new(&name, &COLUMNS[0]),
            description: TableField::new(&name, &COLUMNS[1]),
            vat_rate: TableField::new(&name, &COLUMNS[2]),
            discount_rate: TableField::new(&name, &COLUMNS[3]),
            preferred_payment_method: TableField::new(&name, &COLUMNS[4]),
            name,
            aliased,
        }
    }

    pub fn as_(&self, alias: impl Into<Name>) -> Self {
        Self::with_alias(alias.into(), Some(Arc::new(self.clone())))
    }

    pub fn rename(&self, name: impl Into<Name>) -> Self {
        Self::with_alias(name.into(), None)
    }

    pub fn aliased_table(&self) -> Option<&PricingDetailsTable> {
        self.aliased.as_deref()
    }

    /// The payment method joined through `PREFERRED_PAYMENT_METHOD`.
    pub fn preferred_payment_method_table(&self) -> PaymentMethodTable {
        PaymentMethodTable::child(self, &keys::PRICING_DETAILS_PREFERRED_PAYMENT_METHOD)
    }
}

impl Default for PricingDetailsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for PricingDetailsTable {
    fn name(&self) -> &Name {
        &self.name
    }

    fn schema(&self) -> Option<&'static Schema> {
        Some(&PUBLIC)
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            self.id.as_field().clone(),
            self.description.as_field().clone(),
            self.vat_rate.as_field().clone(),
            self.discount_rate.as_field().clone(),
            self.preferred_payment_method.as_field().clone(),
        ]
    }

    fn alias_of(&self) -> Option<&dyn Table> {
        self.aliased.as_deref().map(|t| t as &dyn Table)
    }

    fn indexes(&self) -> Vec<&'static Index> {
        vec![&indexes::PRIMARY_KEY_8]
    }

    fn identity(&self) -> Option<&'static Identity> {
        Some(&keys::IDENTITY_PRICING_DETAILS)
    }

    fn primary_key(&self) -> Option<&'static UniqueKey> {
        Some(&keys::CONSTRAINT_8)
    }

    fn keys(&self) -> Vec<&'static UniqueKey> {
        vec![&keys::CONSTRAINT_8]
    }

    fn references(&self) -> Vec<&'static ForeignKey> {
        vec![&keys::PRICING_DETAILS_PREFERRED_PAYMENT_METHOD]
    }
}

impl fmt::Display for PricingDetailsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_declaration(self))
    }
}
