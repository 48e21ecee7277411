//! Immutable message catalogs with base/overlay composition.
//!
//! A [`Catalog`] is one of two shapes built from the same value type:
//!
//! - **Base**: total over the registry, holding both the default-language
//!   template and the [`SqlState`] classifier for every code. Authoritative
//!   for which codes exist.
//! - **Overlay**: a partial message map layered over an `Arc` of the base.
//!   Codes it does not translate read through to the base wording;
//!   classifier lookups always delegate, because SQL states never vary by
//!   locale.
//!
//! Both shapes are validated at construction and never mutated afterward,
//! so a built catalog can be shared freely across threads.
//!
//! # Configuration defects
//!
//! Authoring mistakes surface as [`CatalogDefect`] at construction time:
//! a code listed twice in one table, a code the registry does not define,
//! or a registry code the base tables fail to cover. These indicate a broken
//! deployment artifact and abort subsystem startup rather than being
//! deferred to the first lookup.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::codes::{Code, SqlState};
use crate::definitions;
use crate::MessageError;

/// One authored `(code, template)` pair.
pub type MessageEntry = (&'static Code, &'static str);

/// One authored `(code, classifier)` pair; base tables only.
pub type SqlStateEntry = (&'static Code, SqlState);

// ============================================================================
// Configuration Defects
// ============================================================================

/// Construction-time validation failure in an authored catalog table.
///
/// Fatal by policy: the bootstrap path panics on these before any caller can
/// observe a half-built catalog. They are still typed (rather than panics in
/// the constructors themselves) so table authors can unit-test their data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDefect {
    /// The same code appears twice in one authoring list.
    DuplicateCode {
        /// Which table the duplicate was found in.
        table: Cow<'static, str>,
        /// The offending code name.
        code: &'static str,
    },
    /// An authoring list covers a code the registry does not define.
    UnregisteredCode {
        /// Which table the stray entry was found in.
        table: Cow<'static, str>,
        /// The offending code name.
        code: &'static str,
    },
    /// A registry code has no message template in the base tables.
    MissingTemplate {
        /// The uncovered code name.
        code: &'static str,
    },
    /// A registry code has no SQL state in the base tables.
    MissingSqlState {
        /// The uncovered code name.
        code: &'static str,
    },
    /// Two locale tables were registered under the same identifier.
    DuplicateLocale {
        /// The identifier registered twice.
        locale: &'static str,
    },
}

impl fmt::Display for CatalogDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCode { table, code } => {
                write!(f, "duplicate code {} in {}", code, table)
            }
            Self::UnregisteredCode { table, code } => {
                write!(f, "{} covers code {}, which is not in the registry", table, code)
            }
            Self::MissingTemplate { code } => {
                write!(f, "registry code {} has no template in the base tables", code)
            }
            Self::MissingSqlState { code } => {
                write!(f, "registry code {} has no SQL state in the base tables", code)
            }
            Self::DuplicateLocale { locale } => {
                write!(f, "locale '{}' is registered more than once", locale)
            }
        }
    }
}

impl std::error::Error for CatalogDefect {}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable mapping from registry codes to message templates and, for the
/// base shape, SQL state classifiers.
///
/// Constructed once via [`Catalog::base`] or [`Catalog::overlay`], then
/// read-only. Lookups take the code by reference and return either the
/// static authored data or [`MessageError::CodeNotFound`] for codes outside
/// the registry.
#[derive(Debug)]
pub struct Catalog {
    messages: HashMap<&'static str, &'static str>,
    sql_states: HashMap<&'static str, SqlState>,
    base: Option<Arc<Catalog>>,
    locale: Option<&'static str>,
}

impl Catalog {
    /// Build the base catalog from the default-language authoring tables.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogDefect`] when either list contains a duplicate or
    /// unregistered code, or when any registry code is missing a template or
    /// a SQL state. The result is therefore total over the registry and over
    /// the union of both inputs.
    pub fn base(
        messages: &[MessageEntry],
        sql_states: &[SqlStateEntry],
    ) -> Result<Self, CatalogDefect> {
        let messages = collect(messages, "base message table")?;
        let sql_states = collect(sql_states, "base SQL state table")?;

        for code in definitions::ALL {
            if !messages.contains_key(code.as_str()) {
                return Err(CatalogDefect::MissingTemplate { code: code.as_str() });
            }
            if !sql_states.contains_key(code.as_str()) {
                return Err(CatalogDefect::MissingSqlState { code: code.as_str() });
            }
        }

        Ok(Self {
            messages,
            sql_states,
            base: None,
            locale: None,
        })
    }

    /// Layer a locale's override table over the base catalog.
    ///
    /// The override list may cover any subset of the registry; codes it
    /// leaves out read through to `base` at lookup time. No classifier list
    /// is accepted: SQL states always come from the base.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogDefect`] for duplicate or unregistered codes in
    /// the override list.
    pub fn overlay(
        base: Arc<Catalog>,
        locale: &'static str,
        overrides: &[MessageEntry],
    ) -> Result<Self, CatalogDefect> {
        let messages = collect(overrides, format!("locale '{}' override table", locale))?;

        log::debug!(
            "locale catalog '{}' translates {} of {} registry codes",
            locale,
            messages.len(),
            definitions::ALL.len()
        );

        Ok(Self {
            messages,
            sql_states: HashMap::new(),
            base: Some(base),
            locale: Some(locale),
        })
    }

    /// Look up the message template for `code`.
    ///
    /// Overlay catalogs fall back to the base template for codes they do not
    /// translate; the fallback is silent because partial translation tables
    /// are expected.
    ///
    /// # Errors
    ///
    /// [`MessageError::CodeNotFound`] when `code` is outside the registry
    /// this catalog was built from. That is a caller bug, not a missing
    /// translation.
    pub fn template(&self, code: &Code) -> Result<&'static str, MessageError> {
        if let Some(&template) = self.messages.get(code.as_str()) {
            return Ok(template);
        }
        match &self.base {
            Some(base) => base.template(code),
            None => Err(MessageError::CodeNotFound { code: code.as_str() }),
        }
    }

    /// Look up the SQL state classifier for `code`.
    ///
    /// Always answered by the base catalog; overlays carry no classifiers of
    /// their own.
    ///
    /// # Errors
    ///
    /// [`MessageError::CodeNotFound`] when `code` is outside the registry.
    pub fn sql_state(&self, code: &Code) -> Result<SqlState, MessageError> {
        match &self.base {
            Some(base) => base.sql_state(code),
            None => self
                .sql_states
                .get(code.as_str())
                .copied()
                .ok_or(MessageError::CodeNotFound { code: code.as_str() }),
        }
    }

    /// Whether this is the base catalog (no overlay link).
    #[inline]
    pub fn is_base(&self) -> bool {
        self.base.is_none()
    }

    /// The locale this catalog was registered under; `None` for the base.
    #[inline]
    pub fn locale(&self) -> Option<&'static str> {
        self.locale
    }
}

/// Validate a locale override table without building the catalog.
///
/// The resolver runs this over every registered table at construction so
/// authoring defects abort startup instead of surfacing at first resolution.
pub(crate) fn validate_overrides(
    locale: &'static str,
    overrides: &[MessageEntry],
) -> Result<(), CatalogDefect> {
    collect(overrides, format!("locale '{}' override table", locale)).map(|_| ())
}

/// Validate one authoring list and collect it into a lookup map.
fn collect<V: Copy>(
    entries: &[(&'static Code, V)],
    table: impl Into<Cow<'static, str>>,
) -> Result<HashMap<&'static str, V>, CatalogDefect> {
    let table = table.into();
    let mut map = HashMap::with_capacity(entries.len());
    for (code, value) in entries {
        if !definitions::contains(code.as_str()) {
            return Err(CatalogDefect::UnregisteredCode {
                table,
                code: code.as_str(),
            });
        }
        if map.insert(code.as_str(), *value).is_some() {
            return Err(CatalogDefect::DuplicateCode {
                table,
                code: code.as_str(),
            });
        }
    }
    Ok(map)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{DIVISION_BY_ZERO, TABLE_NOT_FOUND, UNIQUE_VIOLATION};
    use crate::tables;

    fn base() -> Arc<Catalog> {
        Arc::new(Catalog::base(tables::en::MESSAGES, tables::en::SQL_STATES).unwrap())
    }

    #[test]
    fn base_builds_from_authored_tables() {
        let catalog = base();
        assert!(catalog.is_base());
        assert_eq!(catalog.locale(), None);
        assert_eq!(
            catalog.template(&TABLE_NOT_FOUND).unwrap(),
            "Table not found: {0}"
        );
        assert_eq!(catalog.sql_state(&TABLE_NOT_FOUND).unwrap().as_str(), "42S02");
    }

    #[test]
    fn base_rejects_duplicate_code() {
        let messages: Vec<MessageEntry> = tables::en::MESSAGES
            .iter()
            .copied()
            .chain([(&TABLE_NOT_FOUND, "Table not found (again): {0}")])
            .collect();

        let defect = Catalog::base(&messages, tables::en::SQL_STATES).unwrap_err();
        assert_eq!(
            defect,
            CatalogDefect::DuplicateCode {
                table: "base message table".into(),
                code: "TABLE_NOT_FOUND",
            }
        );
    }

    #[test]
    fn base_rejects_unregistered_code() {
        static ROGUE: Code = Code::__internal_new("ROGUE_CODE");
        let messages: Vec<MessageEntry> = tables::en::MESSAGES
            .iter()
            .copied()
            .chain([(&ROGUE, "not a real condition")])
            .collect();

        let defect = Catalog::base(&messages, tables::en::SQL_STATES).unwrap_err();
        assert!(matches!(
            defect,
            CatalogDefect::UnregisteredCode { code: "ROGUE_CODE", .. }
        ));
    }

    #[test]
    fn base_requires_registry_totality() {
        // Drop one template: the gap must be reported, not discovered at
        // lookup time.
        let messages: Vec<MessageEntry> = tables::en::MESSAGES
            .iter()
            .copied()
            .filter(|(code, _)| code.as_str() != DIVISION_BY_ZERO.as_str())
            .collect();

        let defect = Catalog::base(&messages, tables::en::SQL_STATES).unwrap_err();
        assert_eq!(
            defect,
            CatalogDefect::MissingTemplate { code: "DIVISION_BY_ZERO" }
        );
    }

    #[test]
    fn base_requires_sql_state_totality() {
        let states: Vec<SqlStateEntry> = tables::en::SQL_STATES
            .iter()
            .copied()
            .filter(|(code, _)| code.as_str() != UNIQUE_VIOLATION.as_str())
            .collect();

        let defect = Catalog::base(tables::en::MESSAGES, &states).unwrap_err();
        assert_eq!(
            defect,
            CatalogDefect::MissingSqlState { code: "UNIQUE_VIOLATION" }
        );
    }

    #[test]
    fn overlay_overrides_and_falls_back() {
        let base = base();
        let overrides: &[MessageEntry] = &[(&TABLE_NOT_FOUND, "Tabelle nicht gefunden: {0}")];
        let overlay = Catalog::overlay(Arc::clone(&base), "de", overrides).unwrap();

        assert!(!overlay.is_base());
        assert_eq!(overlay.locale(), Some("de"));
        assert_eq!(
            overlay.template(&TABLE_NOT_FOUND).unwrap(),
            "Tabelle nicht gefunden: {0}"
        );
        // Untranslated codes read through to the base wording.
        assert_eq!(
            overlay.template(&DIVISION_BY_ZERO).unwrap(),
            base.template(&DIVISION_BY_ZERO).unwrap()
        );
    }

    #[test]
    fn overlay_classifiers_always_delegate() {
        let base = base();
        let overlay = Catalog::overlay(
            Arc::clone(&base),
            "de",
            &[(&TABLE_NOT_FOUND, "Tabelle nicht gefunden: {0}")],
        )
        .unwrap();

        for code in definitions::ALL {
            assert_eq!(
                overlay.sql_state(code).unwrap(),
                base.sql_state(code).unwrap()
            );
        }
    }

    #[test]
    fn overlay_rejects_duplicate_code() {
        let overrides: &[MessageEntry] = &[
            (&TABLE_NOT_FOUND, "Tabelle nicht gefunden: {0}"),
            (&TABLE_NOT_FOUND, "Tabelle fehlt: {0}"),
        ];
        let defect = Catalog::overlay(base(), "de", overrides).unwrap_err();
        assert_eq!(
            defect,
            CatalogDefect::DuplicateCode {
                table: "locale 'de' override table".into(),
                code: "TABLE_NOT_FOUND",
            }
        );
    }

    #[test]
    fn overlay_rejects_unregistered_code() {
        static ROGUE: Code = Code::__internal_new("ROGUE_CODE");
        let defect =
            Catalog::overlay(base(), "xx", &[(&ROGUE, "stray entry")]).unwrap_err();
        assert!(matches!(
            defect,
            CatalogDefect::UnregisteredCode { code: "ROGUE_CODE", .. }
        ));
    }

    #[test]
    fn unknown_code_is_a_lookup_defect() {
        static GHOST: Code = Code::__internal_new("GHOST_CODE");
        let base = base();
        let overlay = Catalog::overlay(Arc::clone(&base), "de", &[]).unwrap();

        assert_eq!(
            base.template(&GHOST).unwrap_err(),
            MessageError::CodeNotFound { code: "GHOST_CODE" }
        );
        assert_eq!(
            overlay.template(&GHOST).unwrap_err(),
            MessageError::CodeNotFound { code: "GHOST_CODE" }
        );
        assert_eq!(
            overlay.sql_state(&GHOST).unwrap_err(),
            MessageError::CodeNotFound { code: "GHOST_CODE" }
        );
    }
}
