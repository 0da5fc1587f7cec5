//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same catalog item, even if
/// their other attributes differ (e.g. a stale copy vs. a fresh fetch).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns true when `other` carries the same identity.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
