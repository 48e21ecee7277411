//! Convenience macros for registry definition and message arguments.
//!
//! # Rules
//!
//! 1. **Codes are defined in one batch** - [`define_codes!`] generates the
//!    constants *and* the `ALL` enumeration slice in a single invocation, so
//!    the registry cannot silently drift from its own listing.
//! 2. **Arguments are display values** - [`msg_args!`] erases any mix of
//!    `Display` types into the `&[&dyn Display]` slice the accessor renders
//!    from; no manual `as &dyn Display` casts at call sites.
//!
//! # Usage
//!
//! ```rust
//! use strata_messages::{messages, msg_args, definitions};
//!
//! let text = messages()
//!     .message(&definitions::PARAM_IDX_OUT_RANGE, msg_args![5, 3])
//!     .unwrap();
//! assert!(text.contains('5'));
//! ```

// ============================================================================
// Registry Definition Macro
// ============================================================================

/// Define the closed code registry in one batch.
///
/// Generates one `pub const` [`Code`](crate::Code) per name plus an `ALL`
/// slice enumerating every code in definition order. `ALL` is what catalog
/// validation and the test suite iterate over, so a code cannot exist without
/// being enumerable.
///
/// # Example
///
/// ```rust
/// mod registry {
///     strata_messages::define_codes! {
///         /// Connection attempt rejected by the server.
///         CONNECTION_REFUSED,
///         /// Statement referenced a table that does not exist.
///         TABLE_NOT_FOUND,
///     }
/// }
///
/// assert_eq!(registry::ALL.len(), 2);
/// assert_eq!(registry::TABLE_NOT_FOUND.as_str(), "TABLE_NOT_FOUND");
/// ```
#[macro_export]
macro_rules! define_codes {
    ($( $(#[$meta:meta])* $name:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::Code = $crate::Code::__internal_new(stringify!($name));
        )+

        /// Every code in the registry, in definition order.
        pub const ALL: &[&$crate::Code] = &[$(&$name),+];
    };
}

// ============================================================================
// Argument List Macro
// ============================================================================

/// Build the positional argument slice for message rendering.
///
/// Accepts any mix of `Display` values and produces the
/// `&[&dyn Display]` slice expected by
/// [`Messages::message`](crate::Messages::message). An empty invocation
/// yields the empty slice for zero-argument templates.
///
/// # Example
///
/// ```rust
/// use strata_messages::msg_args;
///
/// let args = msg_args![5, "CUSTOMERS", 3.5];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! msg_args {
    () => {
        &[] as &[&dyn ::std::fmt::Display]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),+][..]
    };
}

// ============================================================================
// Tests
// ============================================================================
