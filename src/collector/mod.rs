//! Plugin registration and collection.
//!
//! A [`Collector`] accumulates `(name, value, transform)` records as values
//! are registered, and turns them into a name-to-plugin mapping on demand.
//! Collisions are never detected at registration time: every record is
//! kept, and the [`Strategy`] passed to [`Collector::collect_with`] decides
//! what a name with several records resolves to.
//!
//! # Example
//!
//! ```
//! use gather::strategy::{All, ExactlyOne};
//! use gather::{register, Collector};
//!
//! static COMMANDS: Collector<fn() -> &'static str> = Collector::new();
//!
//! fn build() -> &'static str {
//!     "built"
//! }
//!
//! fn clean() -> &'static str {
//!     "cleaned"
//! }
//!
//! let build = register!(COMMANDS, build);
//! register!(COMMANDS, clean, name = "build");
//! assert_eq!(build(), "built");
//!
//! let one = COMMANDS.collect();
//! assert!(one.contains_key("build"));
//!
//! let every = COMMANDS.collect_with(All).unwrap();
//! assert_eq!(every["build"].len(), 2);
//!
//! assert!(COMMANDS.collect_with(ExactlyOne).is_err());
//! ```
//!
//! # Concurrency
//!
//! Records sit behind a read-write lock, so a collector can live in a
//! `static` and be collected from several threads at once. Registrations
//! are expected to finish before collection starts; a `collect` racing a
//! `register` sees some consistent prefix of the records, but which one is
//! up to the caller's ordering.
//!
//! Transforms run after the lock is released, on a snapshot of the records,
//! so a transform may itself register on the collector being collected. Such
//! registrations show up from the next collection on.

pub mod strategy;
pub mod wrapper;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::Result;

use self::strategy::{Group, OneOf, Strategy};
use self::wrapper::{Plugin, Transform};

/// Mapping produced by a collection, ordered by first registration of each name.
pub type Collected<V> = IndexMap<String, V>;

/// One application of a registration.
#[derive(Debug)]
struct Record<T, E> {
    name: String,
    value: T,
    transform: Option<Transform<T, E>>,
}

impl<T: Clone, E> Record<T, E> {
    fn snapshot(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            transform: self.transform.clone(),
        }
    }

    fn resolve(&self) -> Plugin<T, E> {
        match &self.transform {
            Some(transform) => Plugin::Wrapped(transform.apply(self.value.clone())),
            None => Plugin::Bare(self.value.clone()),
        }
    }
}

/// Accumulator of named plugin registrations.
///
/// `T` is the plugin type and `E` the payload carried by transformed
/// registrations. Collectors are independent: registering a name on one
/// never affects another.
#[derive(Debug)]
pub struct Collector<T, E = ()> {
    records: RwLock<Vec<Record<T, E>>>,
}

impl<T, E> Collector<T, E> {
    /// Create an empty collector.
    pub const fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Start a registration on this collector.
    ///
    /// The returned builder records the value when [`Registration::apply`]
    /// is called and hands the value back unchanged.
    pub fn register(&self) -> Registration<'_, T, E> {
        Registration {
            collector: self,
            name: None,
            transform: None,
        }
    }

    /// Number of registrations, counting every record under a shared name.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Distinct registered names, in order of first registration.
    pub fn names(&self) -> Vec<String> {
        let records = self.records.read();
        let mut names: Vec<String> = Vec::new();
        for record in records.iter() {
            if !names.contains(&record.name) {
                names.push(record.name.clone());
            }
        }
        names
    }

    fn push(&self, record: Record<T, E>) {
        tracing::trace!(name = %record.name, "registered plugin");
        self.records.write().push(record);
    }
}

impl<T: Clone, E> Collector<T, E> {
    /// Collect with the default [`OneOf`] strategy.
    ///
    /// Every registered name appears exactly once; when a name has several
    /// registrations, which one is returned is unspecified.
    pub fn collect(&self) -> Collected<Plugin<T, E>> {
        let groups = self.groups();
        groups
            .into_iter()
            .map(|(name, group)| (name, group.into_first()))
            .collect()
    }

    /// Collect, resolving each name's registrations with `strategy`.
    ///
    /// Transforms are applied before the strategy sees the values. The
    /// first failing name aborts the collection.
    pub fn collect_with<S>(&self, strategy: S) -> Result<Collected<S::Output>>
    where
        S: Strategy<Plugin<T, E>>,
    {
        let groups = self.groups();
        let mut collected = IndexMap::with_capacity(groups.len());
        for (name, group) in groups {
            let resolved = strategy.resolve(&name, group)?;
            collected.insert(name, resolved);
        }
        Ok(collected)
    }

    fn groups(&self) -> IndexMap<String, Group<Plugin<T, E>>> {
        let records: Vec<Record<T, E>> = {
            let guard = self.records.read();
            guard.iter().map(Record::snapshot).collect()
        };
        let mut groups: IndexMap<String, Group<Plugin<T, E>>> = IndexMap::new();
        for record in records.iter() {
            let plugin = record.resolve();
            match groups.get_mut(&record.name) {
                Some(group) => group.push(plugin),
                None => {
                    groups.insert(record.name.clone(), Group::new(plugin));
                }
            }
        }
        tracing::debug!(
            records = records.len(),
            names = groups.len(),
            "collected plugins"
        );
        groups
    }
}

impl<T, E> Default for Collector<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending registration on a [`Collector`].
///
/// Built by [`Collector::register`]; nothing is recorded until
/// [`apply`](Registration::apply).
#[must_use = "a registration does nothing until applied"]
#[derive(Debug)]
pub struct Registration<'c, T, E> {
    collector: &'c Collector<T, E>,
    name: Option<String>,
    transform: Option<Transform<T, E>>,
}

impl<'c, T, E> Registration<'c, T, E> {
    /// Register under `name` instead of the value's identifier.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Wrap the value with `transform` whenever the collector is collected.
    pub fn transform(mut self, transform: Transform<T, E>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Record `value` and return it unchanged.
    ///
    /// `identifier` is the value's declared identifier, used as the name
    /// unless one was set explicitly. The [`register!`](crate::register)
    /// macro fills it in from the item being registered.
    pub fn apply(self, identifier: &str, value: T) -> T
    where
        T: Clone,
    {
        let name = self.name.unwrap_or_else(|| identifier.to_string());
        self.collector.push(Record {
            name,
            value: value.clone(),
            transform: self.transform,
        });
        value
    }
}

/// Register an item on a collector under its own identifier.
///
/// Expands to [`Collector::register`] followed by the optional builder
/// calls and [`Registration::apply`], so it evaluates to the item itself
/// and can be nested to register one item on several collectors.
///
/// ```
/// use gather::{register, Collector, Wrapper};
///
/// let main: Collector<fn() -> u8> = Collector::new();
/// let other: Collector<fn() -> u8, &str> = Collector::new();
///
/// fn main3() -> u8 {
///     3
/// }
///
/// register!(main, register!(other, main3, transform = Wrapper::glue("meta")), name = "bar");
///
/// assert!(main.collect().contains_key("bar"));
/// assert_eq!(other.collect()["main3"].extra(), Some(&"meta"));
/// ```
///
/// Items reached through a path are named after their last segment:
///
/// ```
/// use gather::{register, Collector};
///
/// mod tasks {
///     pub fn build() -> u8 {
///         1
///     }
/// }
///
/// let commands: Collector<fn() -> u8> = Collector::new();
/// register!(commands, tasks::build);
/// assert_eq!(commands.names(), vec!["build".to_string()]);
/// ```
#[macro_export]
macro_rules! register {
    ($collector:expr, $($seg:ident)::+ $(, $key:ident = $value:expr)* $(,)?) => {
        $collector
            .register()
            $(.$key($value))*
            .apply($crate::__registered_ident!($($seg)::+), $($seg)::+)
    };
    ($collector:expr, $mac:ident ! $args:tt $(, $key:ident = $value:expr)* $(,)?) => {
        $collector
            .register()
            $(.$key($value))*
            .apply($crate::__registered_ident!($mac ! $args), $mac ! $args)
    };
}

/// Identifier of the item at the bottom of nested `register!` calls.
#[doc(hidden)]
#[macro_export]
macro_rules! __registered_ident {
    ($mac:ident ! ($inner:expr, $($rest:tt)*)) => {
        $crate::__registered_ident!($($rest)*)
    };
    ($item:ident $(, $($rest:tt)*)?) => {
        ::core::stringify!($item)
    };
    ($head:ident :: $($rest:tt)*) => {
        $crate::__registered_ident!($($rest)*)
    };
}
