//! Lazy transforms and the values they produce.
//!
//! A [`Transform`] is stored next to a registered value and only invoked
//! when the collector is collected. The stock transform is
//! [`Wrapper::glue`], which pairs the plugin with an extra payload such as
//! a description or a priority.

use std::fmt;
use std::sync::Arc;

/// A registered value paired with the payload glued onto it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wrapper<T, E> {
    /// The value exactly as it was registered.
    pub original: T,

    /// The payload bound when the transform was created.
    pub extra: E,
}

impl<T, E> Wrapper<T, E> {
    /// Create a wrapper directly.
    pub fn new(original: T, extra: E) -> Self {
        Self { original, extra }
    }

    /// Bind `extra` into a transform that wraps whatever it is applied to.
    ///
    /// ```
    /// use gather::{Collector, Wrapper};
    ///
    /// let plugins: Collector<&str, u8> = Collector::new();
    /// plugins
    ///     .register()
    ///     .transform(Wrapper::glue(5))
    ///     .apply("fooish", "fooish-plugin");
    ///
    /// let collected = plugins.collect();
    /// let wrapper = collected["fooish"].as_wrapper().unwrap();
    /// assert_eq!(wrapper.original, "fooish-plugin");
    /// assert_eq!(wrapper.extra, 5);
    /// ```
    pub fn glue(extra: E) -> Transform<T, E>
    where
        T: 'static,
        E: Clone + Send + Sync + 'static,
    {
        Transform::new(move |original| Wrapper::new(original, extra.clone()))
    }
}

/// Constructor applied to a registered value at collection time.
pub struct Transform<T, E> {
    build: Arc<dyn Fn(T) -> Wrapper<T, E> + Send + Sync>,
}

impl<T, E> Transform<T, E> {
    /// Create a transform from a closure producing the wrapper.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(T) -> Wrapper<T, E> + Send + Sync + 'static,
        T: 'static,
        E: 'static,
    {
        Self {
            build: Arc::new(build),
        }
    }

    /// Apply the transform to a raw value.
    pub fn apply(&self, value: T) -> Wrapper<T, E> {
        (self.build)(value)
    }
}

impl<T, E> Clone for Transform<T, E> {
    fn clone(&self) -> Self {
        Self {
            build: Arc::clone(&self.build),
        }
    }
}

impl<T, E> fmt::Debug for Transform<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

/// A value as it appears in a collected mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Plugin<T, E = ()> {
    /// Registered without a transform; the value is passed through.
    Bare(T),

    /// Registered with a transform; the wrapper it produced.
    Wrapped(Wrapper<T, E>),
}

impl<T, E> Plugin<T, E> {
    /// The value as originally registered.
    pub fn original(&self) -> &T {
        match self {
            Plugin::Bare(value) => value,
            Plugin::Wrapped(wrapper) => &wrapper.original,
        }
    }

    /// The glued payload, if the value was transformed.
    pub fn extra(&self) -> Option<&E> {
        match self {
            Plugin::Bare(_) => None,
            Plugin::Wrapped(wrapper) => Some(&wrapper.extra),
        }
    }

    /// The wrapper, if the value was transformed.
    pub fn as_wrapper(&self) -> Option<&Wrapper<T, E>> {
        match self {
            Plugin::Bare(_) => None,
            Plugin::Wrapped(wrapper) => Some(wrapper),
        }
    }

    /// Consume the plugin, keeping only the registered value.
    pub fn into_original(self) -> T {
        match self {
            Plugin::Bare(value) => value,
            Plugin::Wrapped(wrapper) => wrapper.original,
        }
    }
}
