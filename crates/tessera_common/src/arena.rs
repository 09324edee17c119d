//! Append-only, ID-indexed storage for library and fabric entities.
//!
//! Circuit models, circuit ports, fabric modules, configuration blocks and
//! configuration bits all live in an [`Arena`]. IDs are handed out in
//! allocation order and stay valid for the lifetime of the arena, which is
//! what lets parent links be plain IDs instead of references.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::Index;

/// Trait for opaque ID types used as arena keys.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// Declares an opaque `u32` ID newtype implementing [`ArenaId`].
///
/// ```
/// tessera_common::define_id!(
///     /// ID of a widget.
///     WidgetId
/// );
/// let id = WidgetId::from_raw(3);
/// assert_eq!(id.as_raw(), 3);
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns the raw index as a `usize`, for indexing side tables.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl $crate::ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// A dense container addressed by opaque IDs.
///
/// Items are only ever appended, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not allocated by this arena.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Returns the item with the given ID, or `None` if the ID is out of range.
    pub fn try_get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns a mutable reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not allocated by this arena.
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all IDs in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        (0..self.items.len()).map(|i| I::from_raw(i as u32))
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_id!(
        /// Test-only ID.
        NodeId
    );

    #[test]
    fn alloc_assigns_sequential_ids() {
        let mut arena: Arena<NodeId, &str> = Arena::new();
        let a = arena.alloc("root");
        let b = arena.alloc("child");
        assert_eq!(a.as_raw(), 0);
        assert_eq!(b.as_raw(), 1);
        assert_eq!(arena[b], "child");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn try_get_out_of_range() {
        let mut arena: Arena<NodeId, u32> = Arena::new();
        let id = arena.alloc(7);
        assert_eq!(arena.try_get(id), Some(&7));
        assert_eq!(arena.try_get(NodeId::from_raw(5)), None);
    }

    #[test]
    fn ids_follow_allocation_order() {
        let mut arena: Arena<NodeId, u32> = Arena::new();
        arena.alloc(10);
        arena.alloc(20);
        arena.alloc(30);
        let ids: Vec<u32> = arena.ids().map(NodeId::as_raw).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let values: Vec<u32> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![10, 20, 30]);
    }

    #[test]
    fn get_mut_modifies() {
        let mut arena: Arena<NodeId, String> = Arena::new();
        let id = arena.alloc("before".to_string());
        *arena.get_mut(id) = "after".to_string();
        assert_eq!(arena[id], "after");
    }

    #[test]
    fn id_display_and_serde() {
        let id = NodeId::from_raw(42);
        assert_eq!(format!("{id}"), "42");
        let json = serde_json::to_string(&id).unwrap();
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
