//! Identifier generation for cells, entities and documents.
//!
//! # Responsibility
//! - Produce process-unique identifiers for every notebook artefact.
//! - Keep cell, entity and document identifiers as distinct types.
//!
//! # Invariants
//! - Every generated identifier is a random v4 UUID and is never nil.
//! - A `CellId` and an `EntityId` are never compared with each other, even
//!   though both are drawn from the same UUID space.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Returns a fresh random identifier.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

macro_rules! uuid_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocates a new random identifier.
            pub fn generate() -> Self {
                Self(new_id())
            }

            /// Wraps an identifier that already exists elsewhere.
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_newtype!(
    /// Identifier of one notebook cell.
    CellId
);

uuid_newtype!(
    /// Identifier of the object or morphism carried by a formal cell.
    ///
    /// This is the value callers wire into `dom`/`cod`/`over` references.
    EntityId
);

uuid_newtype!(
    /// Server-assigned identifier of a persisted document.
    DocumentId
);

#[cfg(test)]
mod tests {
    use super::{new_id, CellId, EntityId};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique_and_not_nil() {
        let ids = (0..256).map(|_| new_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 256);
        assert!(ids.iter().all(|id| !id.is_nil()));
    }

    #[test]
    fn newtypes_round_trip_through_display_and_parse() {
        let cell = CellId::generate();
        let parsed: CellId = cell.to_string().parse().expect("cell id should parse");
        assert_eq!(parsed, cell);

        let entity = EntityId::generate();
        assert_eq!(entity.to_string(), entity.as_uuid().to_string());
        assert!("not-a-uuid".parse::<EntityId>().is_err());
    }
}
