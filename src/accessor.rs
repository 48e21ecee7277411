//! The caller-facing read surface.
//!
//! A [`Messages`] bundle is one resolved catalog behind a cheap handle. The
//! hosting process resolves its locale once at startup, then asks the bundle
//! for rendered messages and SQL states as conditions are raised. Callers
//! only ever receive owned strings and `Copy` classifiers, never references
//! into catalog internals.
//!
//! # Process-wide bundle
//!
//! Most hosts want exactly one bundle. [`init`] installs it with the locale
//! from configuration, and [`messages`] hands it out everywhere else; if
//! [`init`] is never called, the first [`messages`] call falls back to the
//! ambient system locale. Both are populate-once over a `OnceLock`.
//!
//! # Bootstrap failures
//!
//! Building the base catalog or registering the locale tables can only fail
//! on an authoring defect. That is a broken deployment artifact, so the
//! shared resolver panics with the defect instead of limping along with a
//! partial catalog.

use std::fmt;
use std::sync::{Arc, OnceLock};

use smallvec::SmallVec;

use crate::catalog::Catalog;
use crate::codes::{Code, SqlState};
use crate::format;
use crate::resolver::LocaleResolver;
use crate::tables;
use crate::Result;

/// The process-wide resolver over the compiled-in tables.
///
/// Built on first use; configuration defects in the authored tables abort
/// here, before any lookup can observe them.
fn shared_resolver() -> &'static LocaleResolver {
    static RESOLVER: OnceLock<LocaleResolver> = OnceLock::new();
    RESOLVER.get_or_init(|| {
        let base = match Catalog::base(tables::en::MESSAGES, tables::en::SQL_STATES) {
            Ok(base) => Arc::new(base),
            Err(defect) => panic!("base message tables failed validation: {}", defect),
        };
        match LocaleResolver::new(base, tables::LOCALES, None) {
            Ok(resolver) => resolver,
            Err(defect) => panic!("locale registration failed validation: {}", defect),
        }
    })
}

// ============================================================================
// Message Bundle
// ============================================================================

/// A resolved catalog plus the rendering operations callers use.
///
/// Cloning is cheap (one `Arc` bump); bundles for the same locale share the
/// same underlying catalog instance.
#[derive(Debug, Clone)]
pub struct Messages {
    catalog: Arc<Catalog>,
}

impl Messages {
    /// Resolve a bundle for `locale` against the compiled-in tables.
    ///
    /// Absent or empty input means the ambient system locale; identifiers
    /// with no registered catalog at any fallback level yield the base
    /// (English) bundle. This never fails.
    pub fn for_locale(locale: Option<&str>) -> Self {
        Self {
            catalog: shared_resolver().resolve(locale),
        }
    }

    /// Render the message for `code`, substituting `args` positionally.
    ///
    /// Arguments are stringified with their `Display` impls; no further
    /// formatting is applied. Markers beyond the supplied arity stay
    /// verbatim in the output, and surplus arguments are ignored.
    ///
    /// # Errors
    ///
    /// [`MessageError::CodeNotFound`](crate::MessageError::CodeNotFound)
    /// when `code` is outside the registry. That signals a caller bug and
    /// should be logged, not shown to end users.
    pub fn message(&self, code: &Code, args: &[&dyn fmt::Display]) -> Result<String> {
        let template = self.catalog.template(code)?;
        let owned: SmallVec<[String; 4]> = args.iter().map(|arg| arg.to_string()).collect();
        let borrowed: SmallVec<[&str; 4]> = owned.iter().map(String::as_str).collect();
        Ok(format::render(template, &borrowed))
    }

    /// The SQL state classifier for `code`.
    ///
    /// Identical for every locale; classifiers are defined in the base
    /// tables only.
    ///
    /// # Errors
    ///
    /// [`MessageError::CodeNotFound`](crate::MessageError::CodeNotFound)
    /// when `code` is outside the registry.
    pub fn sql_state(&self, code: &Code) -> Result<SqlState> {
        self.catalog.sql_state(code)
    }

    /// The catalog this bundle renders from.
    #[inline]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

// ============================================================================
// Process-Wide Bundle
// ============================================================================

static ACTIVE: OnceLock<Messages> = OnceLock::new();

/// Install the process-wide bundle for `locale`.
///
/// The first call wins; later calls (and [`messages`]) return the bundle
/// installed then. Hosts call this once at startup with their configured
/// locale, or not at all to accept the ambient default.
pub fn init(locale: Option<&str>) -> &'static Messages {
    ACTIVE.get_or_init(|| Messages::for_locale(locale))
}

/// The process-wide bundle.
///
/// Falls back to the ambient system locale when [`init`] was never called.
pub fn messages() -> &'static Messages {
    ACTIVE.get_or_init(|| Messages::for_locale(None))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{
        DIVISION_BY_ZERO, PARAM_IDX_OUT_RANGE, TABLE_NOT_FOUND, UNIQUE_VIOLATION,
    };
    use crate::msg_args;

    #[test]
    fn renders_the_base_parameter_range_message() {
        let messages = Messages::for_locale(Some("en"));
        let text = messages
            .message(&PARAM_IDX_OUT_RANGE, msg_args![5, 3])
            .unwrap();
        assert_eq!(
            text,
            "Parameter index 5 out of range. The value must be between 1 and 3."
        );
        assert_eq!(messages.sql_state(&PARAM_IDX_OUT_RANGE).unwrap().as_str(), "07009");
    }

    #[test]
    fn french_override_keeps_the_classifier() {
        let english = Messages::for_locale(Some("en"));
        let french = Messages::for_locale(Some("fr"));

        let text = french
            .message(&PARAM_IDX_OUT_RANGE, msg_args![5, 3])
            .unwrap();
        assert_eq!(
            text,
            "L'index de paramètre 5 est hors limites. La valeur doit être comprise entre 1 et 3."
        );
        assert_eq!(
            french.sql_state(&PARAM_IDX_OUT_RANGE).unwrap(),
            english.sql_state(&PARAM_IDX_OUT_RANGE).unwrap()
        );
    }

    #[test]
    fn untranslated_codes_use_base_wording() {
        let english = Messages::for_locale(Some("en"));
        let french = Messages::for_locale(Some("fr"));

        // The French table does not cover this code.
        assert_eq!(
            french.message(&DIVISION_BY_ZERO, msg_args![]).unwrap(),
            english.message(&DIVISION_BY_ZERO, msg_args![]).unwrap()
        );
    }

    #[test]
    fn region_and_variant_identifiers_fall_back() {
        let regional = Messages::for_locale(Some("de_DE_bavarian"));
        let text = regional
            .message(&TABLE_NOT_FOUND, msg_args!["KUNDEN"])
            .unwrap();
        assert_eq!(text, "Tabelle nicht gefunden: KUNDEN");
    }

    #[test]
    fn bundles_for_one_locale_share_a_catalog() {
        let first = Messages::for_locale(Some("de"));
        let second = Messages::for_locale(Some("de"));
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn under_supplied_arguments_keep_markers_verbatim() {
        let messages = Messages::for_locale(Some("en"));
        let text = messages
            .message(&PARAM_IDX_OUT_RANGE, msg_args![5])
            .unwrap();
        assert_eq!(
            text,
            "Parameter index 5 out of range. The value must be between 1 and {1}."
        );
    }

    #[test]
    fn display_arguments_are_stringified() {
        let messages = Messages::for_locale(Some("en"));
        let text = messages
            .message(&UNIQUE_VIOLATION, msg_args!["PK_ORDERS", 42])
            .unwrap();
        assert_eq!(
            text,
            "Unique constraint PK_ORDERS violated: duplicate value 42."
        );
    }

    #[test]
    fn unknown_code_propagates_as_lookup_error() {
        static GHOST: Code = Code::__internal_new("GHOST_CODE");
        let messages = Messages::for_locale(Some("en"));
        assert!(messages.message(&GHOST, msg_args![]).is_err());
        assert!(messages.sql_state(&GHOST).is_err());
    }

    #[test]
    fn process_wide_bundle_installs_once() {
        let installed = init(Some("de"));
        let again = messages();
        assert!(Arc::ptr_eq(installed.catalog(), again.catalog()));

        // Later init calls do not replace the bundle.
        let late = init(Some("fr"));
        assert!(Arc::ptr_eq(installed.catalog(), late.catalog()));
    }
}
