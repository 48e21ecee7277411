//! # Strata Messages
//!
//! Locale-aware error message catalogs with SQL state classification.
//!
//! ## Design Philosophy
//!
//! 1. **Codes are a closed vocabulary** - every condition the hosting engine
//!    can raise is a registry constant, enumerable and stable
//! 2. **The base catalog is authoritative** - total over the registry,
//!    carrying both the English wording and the SQL state for every code
//! 3. **Locales are layered, not forked** - a locale catalog overrides any
//!    subset of the message templates and reads through to the base for the
//!    rest; classifiers never vary by locale
//! 4. **Resolution degrades, it never fails** - an unknown locale walks its
//!    fallback chain and lands on the base catalog, because message lookup
//!    must not raise a secondary failure while reporting a primary one
//! 5. **Configuration defects are fatal at startup** - duplicate or
//!    unregistered authoring entries abort construction before any caller
//!    can observe a half-built catalog
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_messages::{definitions, msg_args, Messages};
//!
//! // Resolve once at startup; "de_DE" falls back to the "de" catalog.
//! let messages = Messages::for_locale(Some("de_DE"));
//!
//! let text = messages
//!     .message(&definitions::TABLE_NOT_FOUND, msg_args!["KUNDEN"])
//!     .unwrap();
//! assert_eq!(text, "Tabelle nicht gefunden: KUNDEN");
//!
//! // Classifiers come from the base catalog regardless of locale.
//! let state = messages.sql_state(&definitions::TABLE_NOT_FOUND).unwrap();
//! assert_eq!(state.as_str(), "42S02");
//! ```
//!
//! ## Resolution
//!
//! A requested identifier like `"de_DE_bavarian"` is tried exact, then
//! truncated segment by segment (`"de_DE"`, `"de"`) until a registered
//! catalog matches; exhaustion yields the base catalog. Results are cached
//! per requested identifier, and each locale catalog is built exactly once
//! and shared. See [`resolver::LocaleResolver`] for the full contract.
//!
//! ## Adding a language
//!
//! Languages are authored as static tables in [`tables`], registered in
//! [`tables::LOCALES`]. There is no runtime registration API; the supported
//! set is fixed when the process starts.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::result;

pub mod accessor;
pub mod catalog;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod format;
pub mod resolver;
pub mod tables;

pub use accessor::*;
pub use catalog::*;
pub use codes::*;
pub use resolver::*;

/// Type alias for Results using the lookup error type.
pub type Result<T> = result::Result<T, MessageError>;

// ============================================================================
// Lookup Errors
// ============================================================================

/// Failure raised by catalog lookups.
///
/// A lookup failure signals an integration bug in the caller: every code the
/// engine raises is expected to pre-exist in the registry the catalogs are
/// built from. It is typed so callers can log it precisely, and deliberately
/// not substituted with placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// The requested code is not defined in the catalog's registry.
    CodeNotFound {
        /// Name of the code the caller asked for.
        code: &'static str,
    },
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeNotFound { code } => {
                write!(f, "message code {} is not defined in the registry", code)
            }
        }
    }
}

impl std::error::Error for MessageError {}
