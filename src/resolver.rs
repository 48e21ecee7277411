//! Locale resolution over the registered catalog tables.
//!
//! Resolution maps an arbitrary `language[_region[_variant]]` identifier to
//! one concrete, ready-to-use [`Catalog`] with deterministic degradation.
//! The requested identifier is tried exactly as given, then truncated one
//! underscore-delimited segment at a time (`de_DE_bavarian` -> `de_DE` ->
//! `de`); the first registered match wins, and exhaustion yields the base
//! catalog. A deployment can therefore ship a single coarse `de` table and
//! serve every German region, while a later, more specific `de_AT` table
//! takes precedence automatically.
//!
//! Resolution never fails. The worst case is the base catalog, which is
//! total over the registry, so message lookup cannot become a secondary
//! failure while the caller is reporting a primary one.
//!
//! # Registration
//!
//! Supported locales are an explicit table passed to
//! [`LocaleResolver::new`], not discovered at runtime. This keeps the
//! supported set enumerable and testable, and lets every override table be
//! validated up front: an authoring defect aborts construction instead of
//! surfacing at first resolution.
//!
//! # Caching
//!
//! Two populate-once maps, never invalidated during the process lifetime:
//! one holds each locale's built catalog (so concurrent first resolutions
//! build exactly one instance), the other memoizes results per requested
//! identifier (so the truncation walk runs once per distinct input,
//! including inputs that degrade to base).

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::{self, Catalog, CatalogDefect, MessageEntry};

// ============================================================================
// Registration Table
// ============================================================================

/// One registered locale: its identifier and its authored override table.
///
/// Registered in a static slice (see [`tables::LOCALES`](crate::tables::LOCALES))
/// and handed to [`LocaleResolver::new`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTable {
    /// Identifier the table is registered under, in underscore form.
    pub locale: &'static str,
    /// Message overrides layered over the base catalog.
    pub messages: &'static [MessageEntry],
}

// ============================================================================
// Identifier Helpers
// ============================================================================

/// Iterate the fallback chain of a locale identifier, most specific first.
///
/// Yields the identifier itself, then each truncation at the last
/// underscore, ending with the bare language segment.
///
/// # Example
///
/// ```rust
/// use strata_messages::resolver::fallback_chain;
///
/// let chain: Vec<&str> = fallback_chain("de_DE_bavarian").collect();
/// assert_eq!(chain, ["de_DE_bavarian", "de_DE", "de"]);
/// ```
pub fn fallback_chain(identifier: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(identifier), |current| {
        current.rfind('_').map(|split| &current[..split])
    })
}

/// Normalize a raw operating-system locale into underscore form.
///
/// Strips encoding and modifier suffixes (`.UTF-8`, `@euro`) and replaces
/// BCP 47 hyphens with underscores, so `en-US.UTF-8` becomes `en_US`.
/// Only the ambient default goes through this; caller-supplied identifiers
/// are opaque lookup keys and are used verbatim.
pub fn normalize_system_locale(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.replace('-', "_"))
}

/// Ambient default locale, read from the operating system.
fn ambient_locale() -> Option<String> {
    sys_locale::get_locale()
        .as_deref()
        .and_then(normalize_system_locale)
}

// ============================================================================
// Resolver
// ============================================================================

/// Maps locale identifiers to catalogs with fallback and caching.
///
/// Safe to share across threads: catalogs are immutable once built, and the
/// two internal caches serialize their populate-once inserts.
#[derive(Debug)]
pub struct LocaleResolver {
    base: Arc<Catalog>,
    tables: HashMap<&'static str, &'static [MessageEntry]>,
    built: RwLock<HashMap<&'static str, Arc<Catalog>>>,
    resolved: RwLock<HashMap<String, Arc<Catalog>>>,
    default_locale: Option<String>,
}

impl LocaleResolver {
    /// Create a resolver over `base` and the registered locale tables.
    ///
    /// `default_locale` is the identifier used when a caller resolves with
    /// no identifier of its own; absent means the ambient system locale,
    /// read once here and never re-read per call.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogDefect`] when a registered table contains a
    /// duplicate or unregistered code, or when two tables share one locale
    /// identifier. Validation is eager so broken deployment artifacts stop
    /// the process at startup.
    pub fn new(
        base: Arc<Catalog>,
        registrations: &[LocaleTable],
        default_locale: Option<&str>,
    ) -> Result<Self, CatalogDefect> {
        let mut tables = HashMap::with_capacity(registrations.len());
        for table in registrations {
            catalog::validate_overrides(table.locale, table.messages)?;
            if tables.insert(table.locale, table.messages).is_some() {
                return Err(CatalogDefect::DuplicateLocale { locale: table.locale });
            }
        }

        let default_locale = default_locale
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .or_else(ambient_locale);
        if let Some(id) = &default_locale {
            log::debug!("default locale is '{}'", id);
        }

        Ok(Self {
            base,
            tables,
            built: RwLock::new(HashMap::new()),
            resolved: RwLock::new(HashMap::new()),
            default_locale,
        })
    }

    /// Resolve an identifier to a catalog; never fails.
    ///
    /// Absent or empty input falls back to the default locale fixed at
    /// construction; if no default could be determined either, the base
    /// catalog is returned directly.
    pub fn resolve(&self, requested: Option<&str>) -> Arc<Catalog> {
        let requested = match requested
            .filter(|id| !id.is_empty())
            .or(self.default_locale.as_deref())
        {
            Some(id) => id,
            None => return Arc::clone(&self.base),
        };

        if let Some(hit) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(requested)
        {
            return Arc::clone(hit);
        }

        let catalog = self.walk(requested);
        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(requested.to_owned())
            .or_insert_with(|| Arc::clone(&catalog));
        catalog
    }

    /// The base catalog every resolution ultimately rests on.
    #[inline]
    pub fn base(&self) -> &Arc<Catalog> {
        &self.base
    }

    /// The default locale identifier, if one could be determined.
    #[inline]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Identifiers with a registered override table, in no particular order.
    pub fn registered_locales(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    /// Walk the fallback chain; first registered match wins.
    fn walk(&self, requested: &str) -> Arc<Catalog> {
        for candidate in fallback_chain(requested) {
            if let Some(catalog) = self.locale_catalog(candidate) {
                log::debug!("resolved locale '{}' to catalog '{}'", requested, candidate);
                return catalog;
            }
        }
        log::debug!("no catalog for locale '{}', using base messages", requested);
        Arc::clone(&self.base)
    }

    /// Fetch or lazily build the catalog registered under `candidate`.
    fn locale_catalog(&self, candidate: &str) -> Option<Arc<Catalog>> {
        if let Some(hit) = self
            .built
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(candidate)
        {
            return Some(Arc::clone(hit));
        }

        let (&locale, &entries) = self.tables.get_key_value(candidate)?;

        let mut built = self.built.write().unwrap_or_else(PoisonError::into_inner);
        // Double-checked: another thread may have built it while we waited.
        if let Some(hit) = built.get(locale) {
            return Some(Arc::clone(hit));
        }

        let catalog = match Catalog::overlay(Arc::clone(&self.base), locale, entries) {
            Ok(catalog) => Arc::new(catalog),
            // Entry lists were validated in `new`, so this is unreachable.
            Err(defect) => panic!("locale table '{}' failed validation: {}", locale, defect),
        };
        built.insert(locale, Arc::clone(&catalog));
        Some(catalog)
    }
}

// ============================================================================
// Tests
// ============================================================================
