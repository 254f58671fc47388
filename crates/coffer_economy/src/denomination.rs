//! # Denominations
//!
//! A denomination maps one kind of item to a fixed value in cents.

use std::cmp::Ordering;
use std::fmt;

use crate::cents::Cents;
use crate::item::ItemDescriptor;

/// Identity of a denomination, derived from an item descriptor.
///
/// Two descriptors of the same kind and variant produce equal keys. Count and
/// container contents never take part.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DenominationKey {
    kind: String,
    variant: Option<String>,
}

impl DenominationKey {
    /// The item type id.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The variant discriminator, if any.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl From<&ItemDescriptor> for DenominationKey {
    fn from(descriptor: &ItemDescriptor) -> Self {
        Self {
            kind: descriptor.kind.clone(),
            variant: descriptor.variant.clone(),
        }
    }
}

impl fmt::Display for DenominationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{}[{variant}]", self.kind),
            None => f.write_str(&self.kind),
        }
    }
}

/// A registered item kind with its value and display names.
///
/// Denominations order by descending value; equal values fall back to the
/// key so that the order is total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Denomination {
    key: DenominationKey,
    value: Cents,
    unit_name: String,
    unit_name_plural: String,
}

impl Denomination {
    /// Creates a denomination. `value` is expected to be non-zero.
    #[must_use]
    pub fn new(
        key: DenominationKey,
        value: Cents,
        unit_name: impl Into<String>,
        unit_name_plural: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value,
            unit_name: unit_name.into(),
            unit_name_plural: unit_name_plural.into(),
        }
    }

    /// The identity of this denomination.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &DenominationKey {
        &self.key
    }

    /// Value of a single item, in cents.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Cents {
        self.value
    }

    /// Singular unit name.
    #[must_use]
    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    /// Plural unit name.
    #[must_use]
    pub fn unit_name_plural(&self) -> &str {
        &self.unit_name_plural
    }

    /// Picks the unit name matching `count`.
    #[must_use]
    pub fn unit_name_for(&self, count: u64) -> &str {
        if count == 1 {
            &self.unit_name
        } else {
            &self.unit_name_plural
        }
    }
}

impl Ord for Denomination {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Denomination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
