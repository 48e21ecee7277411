//! Base (English) authoring tables.
//!
//! Total over the registry by construction: every code carries exactly one
//! template and one SQL state, and the base catalog rejects any gap at
//! startup. Entries are grouped to match the registry's condition classes;
//! keep the two lists in the same order when adding a code.

use crate::catalog::{MessageEntry, SqlStateEntry};
use crate::codes::SqlState;
use crate::definitions::*;

/// Default-language message templates, one per registry code.
pub static MESSAGES: &[MessageEntry] = &[
    // General conditions
    (&GENERAL_ERROR, "General error: {0}"),
    (&UNSUPPORTED_FEATURE, "Feature is not supported: {0}"),
    // Connection
    (&CONNECTION_REFUSED, "Connection refused: {0}"),
    (&CONNECTION_CLOSED, "Connection is closed."),
    (&CONNECTION_LOST, "Connection lost: {0}"),
    (&COMMUNICATION_FAILURE, "Communication link failure."),
    // Authorization
    (&INVALID_CREDENTIALS, "Invalid authorization specification for user {0}."),
    (&ACCESS_DENIED, "User lacks privilege {0} on object {1}."),
    // Statements and schema objects
    (&SYNTAX_ERROR, "Syntax error at or near {0}."),
    (&TABLE_NOT_FOUND, "Table not found: {0}"),
    (&TABLE_ALREADY_EXISTS, "Table already exists: {0}"),
    (&COLUMN_NOT_FOUND, "Column not found: {0}"),
    (&COLUMN_ALREADY_EXISTS, "Column already exists: {0}"),
    (&INDEX_NOT_FOUND, "Index not found: {0}"),
    (&AMBIGUOUS_COLUMN, "Column reference {0} is ambiguous."),
    (&FUNCTION_NOT_FOUND, "Function {0} with {1} arguments does not exist."),
    (&WRONG_OBJECT_TYPE, "{0} is not the expected object type."),
    // Data exceptions
    (&DIVISION_BY_ZERO, "Division by zero."),
    (&NUMERIC_OVERFLOW, "Numeric value out of range: {0}"),
    (&STRING_TRUNCATION, "String data exceeds column length {0}."),
    (&INVALID_DATETIME, "Invalid datetime format: {0}"),
    (&INVALID_CAST, "Cannot convert {0} to type {1}."),
    (&NULL_VALUE_NOT_ALLOWED, "Null value not allowed."),
    // Integrity constraints
    (&NOT_NULL_VIOLATION, "Column {0} does not accept null values."),
    (&FOREIGN_KEY_VIOLATION, "Foreign key constraint {0} violated by row in table {1}."),
    (&UNIQUE_VIOLATION, "Unique constraint {0} violated: duplicate value {1}."),
    (&CHECK_VIOLATION, "Check constraint {0} violated."),
    // Transactions
    (&INVALID_TRANSACTION_STATE, "Operation is not allowed in the current transaction state."),
    (&READ_ONLY_TRANSACTION, "Data modification is not allowed in a read-only transaction."),
    (&SERIALIZATION_FAILURE, "Transaction serialization failure; retry the transaction."),
    (&STATEMENT_ROLLED_BACK, "Statement was rolled back: {0}"),
    // Parameters and cursors
    (&PARAM_IDX_OUT_RANGE, "Parameter index {0} out of range. The value must be between 1 and {1}."),
    (&PARAM_COUNT_MISMATCH, "Statement expects {0} parameters, {1} were supplied."),
    (&CURSOR_NOT_OPEN, "Cursor is not in an open state."),
    (&INVALID_CURSOR_NAME, "Invalid cursor name: {0}"),
    // Resources and storage
    (&OUT_OF_MEMORY, "Out of memory while executing statement."),
    (&DISK_FULL, "Disk space exhausted on device {0}."),
    (&STATEMENT_TIMEOUT, "Statement canceled after {0} ms."),
    (&LOCK_TIMEOUT, "Timed out waiting for lock on {0}."),
    (&IO_ERROR, "Input/output error accessing {0}."),
    (&DATA_CORRUPT, "Data file is corrupted: {0}"),
];

/// SQL state classifiers, one per registry code. Defined here only; locale
/// tables never carry classifiers.
pub static SQL_STATES: &[SqlStateEntry] = &[
    // General conditions
    (&GENERAL_ERROR, SqlState::new("S1000")),
    (&UNSUPPORTED_FEATURE, SqlState::new("0A000")),
    // Connection
    (&CONNECTION_REFUSED, SqlState::new("08001")),
    (&CONNECTION_CLOSED, SqlState::new("08003")),
    (&CONNECTION_LOST, SqlState::new("08006")),
    (&COMMUNICATION_FAILURE, SqlState::new("08S01")),
    // Authorization
    (&INVALID_CREDENTIALS, SqlState::new("28000")),
    (&ACCESS_DENIED, SqlState::new("42501")),
    // Statements and schema objects
    (&SYNTAX_ERROR, SqlState::new("42601")),
    (&TABLE_NOT_FOUND, SqlState::new("42S02")),
    (&TABLE_ALREADY_EXISTS, SqlState::new("42S01")),
    (&COLUMN_NOT_FOUND, SqlState::new("42S22")),
    (&COLUMN_ALREADY_EXISTS, SqlState::new("42S21")),
    (&INDEX_NOT_FOUND, SqlState::new("42S12")),
    (&AMBIGUOUS_COLUMN, SqlState::new("42702")),
    (&FUNCTION_NOT_FOUND, SqlState::new("42883")),
    (&WRONG_OBJECT_TYPE, SqlState::new("42809")),
    // Data exceptions
    (&DIVISION_BY_ZERO, SqlState::new("22012")),
    (&NUMERIC_OVERFLOW, SqlState::new("22003")),
    (&STRING_TRUNCATION, SqlState::new("22001")),
    (&INVALID_DATETIME, SqlState::new("22007")),
    (&INVALID_CAST, SqlState::new("22018")),
    (&NULL_VALUE_NOT_ALLOWED, SqlState::new("22004")),
    // Integrity constraints
    (&NOT_NULL_VIOLATION, SqlState::new("23502")),
    (&FOREIGN_KEY_VIOLATION, SqlState::new("23503")),
    (&UNIQUE_VIOLATION, SqlState::new("23505")),
    (&CHECK_VIOLATION, SqlState::new("23514")),
    // Transactions
    (&INVALID_TRANSACTION_STATE, SqlState::new("25000")),
    (&READ_ONLY_TRANSACTION, SqlState::new("25006")),
    (&SERIALIZATION_FAILURE, SqlState::new("40001")),
    (&STATEMENT_ROLLED_BACK, SqlState::new("40000")),
    // Parameters and cursors
    (&PARAM_IDX_OUT_RANGE, SqlState::new("07009")),
    (&PARAM_COUNT_MISMATCH, SqlState::new("07001")),
    (&CURSOR_NOT_OPEN, SqlState::new("24000")),
    (&INVALID_CURSOR_NAME, SqlState::new("34000")),
    // Resources and storage
    (&OUT_OF_MEMORY, SqlState::new("53200")),
    (&DISK_FULL, SqlState::new("53100")),
    (&STATEMENT_TIMEOUT, SqlState::new("57014")),
    (&LOCK_TIMEOUT, SqlState::new("HYT00")),
    (&IO_ERROR, SqlState::new("58030")),
    (&DATA_CORRUPT, SqlState::new("XX001")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;
    use crate::format::template_arity;

    /// Argument count of every registry code, pinned. Raising a code with
    /// the wrong arity renders a half-substituted message, so the contract
    /// is spelled out here rather than discovered in production logs.
    static EXPECTED_ARITY: &[(&Code, usize)] = &[
        (&GENERAL_ERROR, 1),
        (&UNSUPPORTED_FEATURE, 1),
        (&CONNECTION_REFUSED, 1),
        (&CONNECTION_CLOSED, 0),
        (&CONNECTION_LOST, 1),
        (&COMMUNICATION_FAILURE, 0),
        (&INVALID_CREDENTIALS, 1),
        (&ACCESS_DENIED, 2),
        (&SYNTAX_ERROR, 1),
        (&TABLE_NOT_FOUND, 1),
        (&TABLE_ALREADY_EXISTS, 1),
        (&COLUMN_NOT_FOUND, 1),
        (&COLUMN_ALREADY_EXISTS, 1),
        (&INDEX_NOT_FOUND, 1),
        (&AMBIGUOUS_COLUMN, 1),
        (&FUNCTION_NOT_FOUND, 2),
        (&WRONG_OBJECT_TYPE, 1),
        (&DIVISION_BY_ZERO, 0),
        (&NUMERIC_OVERFLOW, 1),
        (&STRING_TRUNCATION, 1),
        (&INVALID_DATETIME, 1),
        (&INVALID_CAST, 2),
        (&NULL_VALUE_NOT_ALLOWED, 0),
        (&NOT_NULL_VIOLATION, 1),
        (&FOREIGN_KEY_VIOLATION, 2),
        (&UNIQUE_VIOLATION, 2),
        (&CHECK_VIOLATION, 1),
        (&INVALID_TRANSACTION_STATE, 0),
        (&READ_ONLY_TRANSACTION, 0),
        (&SERIALIZATION_FAILURE, 0),
        (&STATEMENT_ROLLED_BACK, 1),
        (&PARAM_IDX_OUT_RANGE, 2),
        (&PARAM_COUNT_MISMATCH, 2),
        (&CURSOR_NOT_OPEN, 0),
        (&INVALID_CURSOR_NAME, 1),
        (&OUT_OF_MEMORY, 0),
        (&DISK_FULL, 1),
        (&STATEMENT_TIMEOUT, 1),
        (&LOCK_TIMEOUT, 1),
        (&IO_ERROR, 1),
        (&DATA_CORRUPT, 1),
    ];

    fn template_for(name: &str) -> &'static str {
        MESSAGES
            .iter()
            .find(|(code, _)| code.as_str() == name)
            .map(|(_, template)| *template)
            .unwrap()
    }

    #[test]
    fn arity_is_pinned_for_every_code() {
        assert_eq!(EXPECTED_ARITY.len(), ALL.len());
        for (code, arity) in EXPECTED_ARITY {
            assert_eq!(
                template_arity(template_for(code.as_str())),
                *arity,
                "template for {} does not take {} arguments",
                code,
                arity
            );
        }
    }

    #[test]
    fn both_lists_cover_the_registry() {
        assert_eq!(MESSAGES.len(), ALL.len());
        assert_eq!(SQL_STATES.len(), ALL.len());
    }

    #[test]
    fn classifiers_use_known_condition_classes() {
        for (code, state) in SQL_STATES {
            assert!(
                matches!(
                    state.class(),
                    "S1" | "0A" | "08" | "28" | "42" | "22" | "23" | "25" | "40" | "07"
                        | "24" | "34" | "53" | "57" | "HY" | "58" | "XX"
                ),
                "code {} has unexpected SQL state class {}",
                code,
                state.class()
            );
        }
    }
}
