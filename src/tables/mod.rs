//! Compiled-in authoring tables.
//!
//! One submodule per language. [`en`] is the base: a template and a SQL
//! state for every registry code. The other tables are overrides layered on
//! top of it and may cover any subset; untranslated codes fall back to the
//! English wording at lookup time.
//!
//! Adding a language is an authoring change, not an API: write the table,
//! register it in [`LOCALES`], done. The integrity tests below run against
//! every registered table, so a stray or duplicated entry fails the build's
//! test suite and, failing that, aborts the process at startup.

use crate::resolver::LocaleTable;

pub mod de;
pub mod en;
pub mod fr;

/// Every locale shipped with the crate, in registration order.
///
/// Identifiers use the underscore form (`language[_region[_variant]]`).
pub const LOCALES: &[LocaleTable] = &[
    LocaleTable { locale: "de", messages: de::MESSAGES },
    LocaleTable { locale: "fr", messages: fr::MESSAGES },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions;
    use crate::format::template_arity;
    use std::collections::HashMap;

    fn base_arities() -> HashMap<&'static str, usize> {
        en::MESSAGES
            .iter()
            .map(|(code, template)| (code.as_str(), template_arity(template)))
            .collect()
    }

    #[test]
    fn registered_identifiers_are_underscore_form() {
        for table in LOCALES {
            assert!(!table.locale.is_empty());
            assert!(
                table
                    .locale
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_uppercase() || c == '_'),
                "locale identifier {} is not in underscore form",
                table.locale
            );
        }
    }

    #[test]
    fn german_table_is_total() {
        // The German translation is maintained in full; a gap here means a
        // registry code was added without its translation.
        assert_eq!(de::MESSAGES.len(), definitions::ALL.len());
    }

    #[test]
    fn french_table_is_a_strict_subset() {
        assert!(!fr::MESSAGES.is_empty());
        assert!(fr::MESSAGES.len() < definitions::ALL.len());
    }

    #[test]
    fn translations_keep_the_base_arity() {
        let arities = base_arities();
        for table in LOCALES {
            for (code, template) in table.messages {
                assert_eq!(
                    template_arity(template),
                    arities[code.as_str()],
                    "locale {} template for {} changes the argument count",
                    table.locale,
                    code
                );
            }
        }
    }

    #[test]
    fn every_table_builds_a_catalog() {
        use crate::catalog::Catalog;
        use std::sync::Arc;

        let base = Arc::new(Catalog::base(en::MESSAGES, en::SQL_STATES).unwrap());
        for table in LOCALES {
            Catalog::overlay(Arc::clone(&base), table.locale, table.messages).unwrap();
        }
    }
}
