//! Macros for ergonomic catalog construction.

/// Build a [`StateCatalog`](crate::core::StateCatalog) from
/// `NAME => "value"` pairs. The identifier becomes the state name.
///
/// # Example
///
/// ```
/// use statecraft::state_catalog;
///
/// let catalog = state_catalog! {
///     DRAFT => "draft",
///     REVIEW => "review",
///     PUBLISHED => "published",
/// };
///
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.by_name("REVIEW").unwrap().value(), "review");
/// ```
#[macro_export]
macro_rules! state_catalog {
    ($($name:ident => $value:expr),* $(,)?) => {
        $crate::core::StateCatalog::new(vec![
            $($crate::core::State::new(stringify!($name), $value)),*
        ])
    };
}
