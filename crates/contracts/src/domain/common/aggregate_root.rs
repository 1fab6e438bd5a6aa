use super::EntityMetadata;

/// Aggregate root contract shared by the reference-data aggregates
pub trait AggregateRoot {
    /// Identifier type
    type Id;

    fn id(&self) -> Self::Id;

    /// Business code (e.g. "carlos.arruda", "NF-0001")
    fn code(&self) -> &str;

    /// Display name
    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Table/collection name (e.g. "consultant")
    fn collection_name() -> &'static str;
}
