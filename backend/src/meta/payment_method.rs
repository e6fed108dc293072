use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::meta::public::{indexes, keys, PUBLIC};
use crate::meta::{
    render_declaration, Column, DataType, Field, ForeignKey, Identity, Index, JoinPath, Name, Schema,
    Table, TableField, UniqueKey,
};

pub const TABLE_NAME: &str = "PAYMENT_METHOD";

static COLUMNS: [Column; 3] = [
    Column::new("ID", DataType::BIGINT.nullable(false).identity(true)),
    Column::new("DESCRIPTION", DataType::varchar(255).nullable(false)),
    Column::new("CHARGE", DataType::DOUBLE.nullable(false)),
];

lazy_static! {
    /// The reference instance of `PUBLIC.PAYMENT_METHOD`.
    pub static ref PAYMENT_METHOD: Arc<PaymentMethodTable> = Arc::new(PaymentMethodTable::new());
}

/// Descriptor of `PUBLIC.PAYMENT_METHOD`.
///
/// Instances are immutable. Each one exposes the table's columns as typed
/// fields qualified by the instance's own name, so the same table can appear
/// several times in one query under different aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethodTable {
    name: Name,
    aliased: Option<Arc<PaymentMethodTable>>,
    path: Option<JoinPath>,

    /// `PUBLIC.PAYMENT_METHOD.ID`
    pub id: TableField<i64>,
    /// `PUBLIC.PAYMENT_METHOD.DESCRIPTION`
    pub description: TableField<String>,
    /// `PUBLIC.PAYMENT_METHOD.CHARGE`
    pub charge: TableField<f64>,
}

impl PaymentMethodTable {
    /// Create a `PUBLIC.PAYMENT_METHOD` table reference.
    pub fn new() -> Self {
        Self::with_alias(Name::new(TABLE_NAME), None, None)
    }

    /// Create an aliased `PUBLIC.PAYMENT_METHOD` table reference.
    pub fn aliased(alias: impl Into<Name>) -> Self {
        Self::with_alias(alias.into(), Some(Arc::clone(&PAYMENT_METHOD)), None)
    }

    /// The referenced side of `key`, reached by joining from `child`.
    pub fn child(child: &dyn Table, key: &'static ForeignKey) -> Self {
        let alias = Name::new(format!("{}.{}", child.name().last(), key.name));
        let path = JoinPath {
            child: child.name().clone(),
            key,
        };
        Self::with_alias(alias, Some(Arc::clone(&PAYMENT_METHOD)), Some(path))
    }

    fn with_alias(name: Name, aliased: Option<Arc<PaymentMethodTable>>, path: Option<JoinPath>) -> Self {
        PaymentMethodTable {
            id: TableField::new(&name, &COLUMNS[0]),
            description: TableField::new(&name, &COLUMNS[1]),
            charge: TableField::new(&name, &COLUMNS[2]),
            name,
            aliased,
            path,
        }
    }

    pub fn as_(&self, alias: impl Into<Name>) -> Self {
        Self::with_alias(alias.into(), Some(Arc::new(self.clone())), None)
    }

    /// Rename this table. The result is a fresh reference, not an alias.
    pub fn rename(&self, name: impl Into<Name>) -> Self {
        Self::with_alias(name.into(), None, None)
    }

    pub fn aliased_table(&self) -> Option<&PaymentMethodTable> {
        self.aliased.as_deref()
    }

    pub fn path(&self) -> Option<&JoinPath> {
        self.path.as_ref()
    }
}

impl Default for PaymentMethodTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for PaymentMethodTable {
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
            self.charge.as_field().clone(),
        ]
    }

    fn alias_of(&self) -> Option<&dyn Table> {
        self.aliased.as_deref().map(|t| t as &dyn Table)
    }

    fn indexes(&self) -> Vec<&'static Index> {
        vec![&indexes::PRIMARY_KEY_D]
    }

    fn identity(&self) -> Option<&'static Identity> {
        Some(&keys::IDENTITY_PAYMENT_METHOD)
    }

    fn primary_key(&self) -> Option<&'static UniqueKey> {
        Some(&keys::CONSTRAINT_D)
    }

    fn keys(&self) -> Vec<&'static UniqueKey> {
        vec![&keys::CONSTRAINT_D]
    }
}

impl fmt::Display for PaymentMethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_declaration(self))
    }
}
