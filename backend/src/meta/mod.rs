//! Typed, immutable descriptors of the tables in the `PUBLIC` schema.
//!
//! A descriptor names a table reference as the query builder sees it. The
//! reference instance of each table carries the real table name, aliased
//! instances carry the alias and point back to the instance they were derived
//! from. Column, key and index definitions are static and shared by every
//! instance of the same table.

pub mod payment_method;
pub mod pricing_details;
pub mod public;

use std::fmt;
use std::marker::PhantomData;

pub use payment_method::{PaymentMethodTable, PAYMENT_METHOD};
pub use pricing_details::{PricingDetailsTable, PRICING_DETAILS};
pub use public::PUBLIC;

/// An SQL identifier, unqualified (`X`) or qualified (`PUBLIC.X`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    parts: Vec<String>,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name { parts: vec![name.into()] }
    }

    pub fn qualified<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The unqualified part of the name.
    pub fn last(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or("")
    }

    pub fn is_qualified(&self) -> bool {
        self.parts.len() > 1
    }

    /// Appends `part` to this name, e.g. a column to its table.
    pub fn append(&self, part: impl Into<String>) -> Name {
        let mut parts = self.parts.clone();
        parts.push(part.into());
        Name { parts }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "\"{}\"", part.replace('"', "\"\""))?;
        }
        Ok(())
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name::new(name)
    }
}

impl From<&Name> for Name {
    fn from(name: &Name) -> Self {
        name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    BigInt,
    Varchar(u32),
    Double,
}

/// SQL type of a column together with its nullability and identity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataType {
    pub sql_type: SqlType,
    pub nullable: bool,
    pub identity: bool,
}

impl DataType {
    pub const BIGINT: DataType = DataType::of(SqlType::BigInt);
    pub const DOUBLE: DataType = DataType::of(SqlType::Double);

    const fn of(sql_type: SqlType) -> Self {
        DataType { sql_type, nullable: true, identity: false }
    }

    pub const fn varchar(length: u32) -> Self {
        DataType::of(SqlType::Varchar(length))
    }

    pub const fn nullable(self, nullable: bool) -> Self {
        DataType { nullable, ..self }
    }

    pub const fn identity(self, identity: bool) -> Self {
        DataType { identity, ..self }
    }

    pub fn type_name(&self) -> String {
        match self.sql_type {
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({})", len),
            SqlType::Double => "DOUBLE".to_string(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        if self.identity {
            f.write_str(" IDENTITY")?;
        }
        Ok(())
    }
}

/// Static definition of a column.
#[derive(Debug, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub data_type: DataType,
    pub comment: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Column { name, data_type, comment: "" }
    }
}

/// A column as seen through one table reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    table: Name,
    column: &'static Column,
}

impl Field {
    pub fn new(table: Name, column: &'static Column) -> Self {
        Field { table, column }
    }

    pub fn name(&self) -> &'static str {
        self.column.name
    }

    pub fn table(&self) -> &Name {
        &self.table
    }

    pub fn column(&self) -> &'static Column {
        self.column
    }

    pub fn data_type(&self) -> DataType {
        self.column.data_type
    }

    pub fn qualified_name(&self) -> Name {
        self.table.append(self.column.name)
    }
}

/// A [`Field`] carrying the Rust type its values map to.
#[derive(Debug, Clone, PartialEq)]
pub struct TableField<T> {
    field: Field,
    _value: PhantomData<fn() -> T>,
}

impl<T> TableField<T> {
    pub fn new(table: &Name, column: &'static Column) -> Self {
        TableField {
            field: Field::new(table.clone(), column),
            _value: PhantomData,
        }
    }

    pub fn as_field(&self) -> &Field {
        &self.field
    }
}

impl<T> std::ops::Deref for TableField<T> {
    type Target = Field;

    fn deref(&self) -> &Field {
        &self.field
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
}

impl Schema {
    pub const fn new(name: &'static str) -> Self {
        Schema { name }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Index {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub unique: bool,
}

/// A primary key or unique constraint.
#[derive(Debug, PartialEq, Eq)]
pub struct UniqueKey {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Identity {
    pub table: &'static str,
    pub column: &'static str,
}

/// A join relationship from `table.columns` to the columns of `references`.
#[derive(Debug, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub references: &'static UniqueKey,
}

/// The path a table reference was reached through when created by a join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinPath {
    pub child: Name,
    pub key: &'static ForeignKey,
}

/// Read-only metadata common to all table descriptors.
pub trait Table: fmt::Debug + Send + Sync {
    /// The name this reference presents to the query builder.
    fn name(&self) -> &Name;

    fn schema(&self) -> Option<&'static Schema>;

    fn fields(&self) -> Vec<Field>;

    /// The instance this one aliases, if any.
    fn alias_of(&self) -> Option<&dyn Table>;

    fn indexes(&self) -> Vec<&'static Index> {
        Vec::new()
    }

    fn identity(&self) -> Option<&'static Identity> {
        None
    }

    fn primary_key(&self) -> Option<&'static UniqueKey> {
        None
    }

    fn keys(&self) -> Vec<&'static UniqueKey> {
        Vec::new()
    }

    fn references(&self) -> Vec<&'static ForeignKey> {
        Vec::new()
    }

    fn field(&self, name: &str) -> Option<Field> {
        self.fields()
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    fn qualified_name(&self) -> Name {
        match self.schema() {
            Some(schema) => Name::qualified([schema.name, self.name().last()]),
            None => self.name().clone(),
        }
    }
}

/// Renders a table reference as it appears in a FROM clause, e.g.
/// `"PUBLIC"."PAYMENT_METHOD" AS "pm"` for an alias.
pub fn render_declaration(table: &dyn Table) -> String {
    let mut source = table;
    while let Some(t) = source.alias_of() {
        source = t;
    }

    if table.alias_of().is_some() {
        format!("{} AS {}", source.qualified_name(), table.name())
    } else {
        table.qualified_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rendering() {
        assert_eq!(Name::new("PAYMENT_METHOD").to_string(), "\"PAYMENT_METHOD\"");
        assert_eq!(
            Name::qualified(["PUBLIC", "PAYMENT_METHOD"]).to_string(),
            "\"PUBLIC\".\"PAYMENT_METHOD\""
        );
        assert_eq!(Name::new("a\"b").to_string(), "\"a\"\"b\"");
    }

    #[test]
    fn test_name_append() {
        let n = Name::new("pm").append("ID");
        assert!(n.is_qualified());
        assert_eq!(n.last(), "ID");
        assert_eq!(n.parts(), &["pm".to_string(), "ID".to_string()]);
    }

    #[test]
    fn test_data_type_display() {
        let t = DataType::BIGINT.nullable(false).identity(true);
        assert_eq!(t.to_string(), "BIGINT NOT NULL IDENTITY");
        assert_eq!(DataType::varchar(255).to_string(), "VARCHAR(255)");
        assert_eq!(DataType::DOUBLE.nullable(false).type_name(), "DOUBLE");
    }
}
