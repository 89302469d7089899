mod macros;

/// The version string reported by the binaries and sent in outgoing
/// `User-Agent` headers.
///
/// `STUDIO_VERSION` can be set at build time to embed a release tag,
/// otherwise the crate version is used.
pub fn studio_version() -> &'static str {
    option_env!("STUDIO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }

    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use studio_utils::Apply;
    /// fn prefixed(subject: String, prefix: Option<&str>) -> String {
    ///     subject.apply_map(prefix, |subject, prefix| format!("{prefix} {subject}"))
    /// }
    /// assert_eq!(prefixed("Hello".into(), None), "Hello");
    /// assert_eq!(prefixed("Hello".into(), Some("[Web]")), "[Web] Hello");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
