/// The account model: a person plus an exact decimal balance, mutated only
/// through the guarded debit/credit operations.
pub mod account;

/// The bank aggregate: an ordered account sequence, the add/lookup
/// operations and the debit-then-credit transfer.
pub mod bank;

/// CSV instruction pipeline wiring the core behind a binary. Kept in the
/// library so the integration tests can drive the same code path.
pub mod bin_utils;
