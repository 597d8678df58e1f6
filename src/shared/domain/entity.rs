/// Identity capability shared by all aggregates.
///
/// Aggregates compare by identity, not by attribute values: two snapshots
/// of the same book with different lending state are still the same book.
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
