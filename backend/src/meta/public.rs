//! Schema-level catalog of `PUBLIC`: indexes and keys.

use crate::meta::{ForeignKey, Identity, Index, Schema, UniqueKey};

pub static PUBLIC: Schema = Schema::new("PUBLIC");

pub mod indexes {
    use super::*;

    pub static PRIMARY_KEY_D: Index = Index {
        name: "PRIMARY_KEY_D",
        table: "PAYMENT_METHOD",
        columns: &["ID"],
        unique: true,
    };

    pub static PRIMARY_KEY_8: Index = Index {
        name: "PRIMARY_KEY_8",
        table: "PRICING_DETAILS",
        columns: &["ID"],
        unique: true,
    };
}

pub mod keys {
    use super::*;

    pub static IDENTITY_PAYMENT_METHOD: Identity = Identity {
        table: "PAYMENT_METHOD",
        column: "ID",
    };

    pub static IDENTITY_PRICING_DETAILS: Identity = Identity {
        table: "PRICING_DETAILS",
        column: "ID",
    };

    pub static CONSTRAINT_D: UniqueKey = UniqueKey {
        name: "CONSTRAINT_D",
        table: "PAYMENT_METHOD",
        columns: &["ID"],
    };

    pub static CONSTRAINT_8: UniqueKey = UniqueKey {
        name: "CONSTRAINT_8",
        table: "PRICING_DETAILS",
        columns: &["ID"],
    };

    // Declared for the query builder only, the database carries no such constraint.
    pub static PRICING_DETAILS_PREFERRED_PAYMENT_METHOD: ForeignKey = ForeignKey {
        name: "PRICING_DETAILS_PREFERRED_PAYMENT_METHOD",
        table: "PRICING_DETAILS",
        columns: &["PREFERRED_PAYMENT_METHOD"],
        references: &CONSTRAINT_D,
    };
}
