//! Code and classifier identity types.
//!
//! A [`Code`] names exactly one error/status condition. The set of codes is
//! closed: instances exist only as `pub const` items generated by
//! [`define_codes!`](crate::define_codes), and the full registry lives in
//! [`definitions`](crate::definitions). Codes are stable identifiers that may
//! appear in persisted logs and diagnostics, so a name is never reused for a
//! different meaning once published.
//!
//! # Governance
//!
//! The private field on [`Code`] prevents ad-hoc runtime construction; the
//! registry is a compile-time artifact, enumerable and testable. Catalogs
//! validate their authoring lists against it at construction and reject any
//! code the registry does not define.
//!
//! # Zero-Allocation Guarantee
//!
//! All operations in this module are allocation-free: identity is a static
//! string, display writes directly to the formatter, and [`SqlState`]
//! validation is const evaluation.
//!
//! # Example
//!
//! ```rust
//! use strata_messages::{definitions, SqlState};
//!
//! // Codes are used by reference.
//! fn report(code: &strata_messages::Code) {
//!     println!("raised {}", code);
//! }
//! report(&definitions::PARAM_IDX_OUT_RANGE);
//!
//! // Classifiers are validated at compile time.
//! const PARAM_STATE: SqlState = SqlState::new("07009");
//! assert_eq!(PARAM_STATE.class(), "07");
//! ```

use std::fmt;

// ============================================================================
// Code (Registry Identity Type)
// ============================================================================

/// Opaque, stable identifier for one error/status condition.
///
/// # Frozen Identity
///
/// This type cannot be constructed at runtime: the only constructor is the
/// hidden const hook used by [`define_codes!`](crate::define_codes), and the
/// field is private. It is also not `Copy`/`Clone`; codes are passed by
/// reference, which keeps every use traceable back to a registry constant.
///
/// # Identity Semantics
///
/// Equality and hashing go through the name string. Two codes with the same
/// name are the same condition; the registry uniqueness test in
/// [`definitions`](crate::definitions) guarantees the name space is flat.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Code {
    name: &'static str,
    _private: (),
}

impl Code {
    /// Internal constructor - not for direct use, enforces const-only usage
    /// through the `define_codes!` macro.
    #[doc(hidden)]
    pub const fn __internal_new(name: &'static str) -> Self {
        Self { name, _private: () }
    }

    /// Get the code's name.
    ///
    /// Zero-allocation - returns the static registry string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Code {
    /// Writes the bare code name directly to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// SqlState (Status Classifier)
// ============================================================================

/// Five-character status classifier in the SQLSTATE shape.
///
/// Classifiers group codes into broad condition classes for cross-system
/// reporting. They are defined once, in the base catalog only, and never vary
/// by locale.
///
/// # Format
///
/// Exactly five ASCII characters, each a digit or an uppercase letter. The
/// first two characters are the condition class (`"22"` data exception,
/// `"23"` integrity constraint violation, ...).
///
/// # Copy Semantics
///
/// Unlike [`Code`], this type is `Copy`: it is classification metadata, not
/// governed identity, and callers attach it to their own error objects by
/// value.
///
/// # Example
///
/// ```rust
/// use strata_messages::SqlState;
///
/// const DIVIDE: SqlState = SqlState::new("22012");
/// assert_eq!(DIVIDE.as_str(), "22012");
/// assert_eq!(DIVIDE.class(), "22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlState(&'static str);

impl SqlState {
    /// Create a classifier with compile-time format validation.
    ///
    /// # Panics
    ///
    /// Panics if the string is not exactly five ASCII digits or uppercase
    /// letters. In const contexts the panic is a compile error, which is how
    /// the authored tables are kept well-formed.
    pub const fn new(state: &'static str) -> Self {
        let bytes = state.as_bytes();
        assert!(bytes.len() == 5, "SQL state must be exactly five characters");
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i].is_ascii_digit() || bytes[i].is_ascii_uppercase(),
                "SQL state characters must be digits or uppercase letters"
            );
            i += 1;
        }
        Self(state)
    }

    /// Get the full five-character classifier string.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Get the two-character condition class prefix.
    #[inline]
    pub fn class(self) -> &'static str {
        &self.0[..2]
    }
}

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
