/// # Status Check Record
///
/// The sole persisted entity: one record per status check reported by a
/// client, with a server-generated id and UTC timestamp. Includes the
/// request shape for the create endpoint and the document (de)serialization
/// used by the store.
pub mod status;

/// # Health Status Response
///
/// Reports whether the required configuration is present in the
/// environment. A configuration probe, not a connectivity probe.
pub mod health;
