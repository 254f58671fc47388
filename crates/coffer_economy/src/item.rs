//! # Item Stacks
//!
//! The host's view of an item, reduced to what valuation needs: what kind of
//! item it is, how many there are, and what it holds if it is a container.

use serde::{Deserialize, Serialize};

/// Describes a kind of item as the host sees it.
///
/// `kind` is the host's item type id (for example `gold_ingot`). `variant`
/// distinguishes otherwise identical items, such as a renamed nugget used as
/// a special coin. An empty `kind` means "no item".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Item type id.
    pub kind: String,
    /// Optional variant discriminator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl ItemDescriptor {
    /// Creates a descriptor for a plain item kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            variant: None,
        }
    }

    /// Creates the "no item" descriptor.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            kind: String::new(),
            variant: None,
        }
    }

    /// Sets the variant discriminator.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Returns true if this descriptor denotes no item.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }
}

/// A stack of items in an inventory slot.
///
/// Containers (a box that can be carried as an item) keep their own slots in
/// `contents`. A container kind without contents is treated like any other
/// item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// What the stack is made of.
    pub descriptor: ItemDescriptor,
    /// Number of items in this stack.
    pub count: u32,
    /// Slots held by this item, if it is a container.
    pub contents: Option<Vec<ItemStack>>,
}

impl ItemStack {
    /// Creates an empty item stack.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            descriptor: ItemDescriptor::empty(),
            count: 0,
            contents: None,
        }
    }

    /// Creates a new item stack.
    #[inline]
    #[must_use]
    pub const fn new(descriptor: ItemDescriptor, count: u32) -> Self {
        Self {
            descriptor,
            count,
            contents: None,
        }
    }

    /// Creates a single container item holding the given slots.
    #[must_use]
    pub fn container(descriptor: ItemDescriptor, contents: Vec<ItemStack>) -> Self {
        Self {
            descriptor,
            count: 1,
            contents: Some(contents),
        }
    }

    /// Returns true if this slot holds nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.descriptor.is_empty()
    }

    /// The slots inside this item, if it is a container.
    #[inline]
    #[must_use]
    pub fn contents(&self) -> Option<&[ItemStack]> {
        self.contents.as_deref()
    }
}
