//! Collision strategies.
//!
//! A strategy turns every value registered under one name into the single
//! entry that name gets in the collected mapping. Strategies are chosen at
//! collection time, so the same registrations can be read as a plugin
//! architecture (one implementation per name) or as an extension point
//! (many implementations per name).
//!
//! | Strategy       | Output          | Fails when        |
//! |----------------|-----------------|-------------------|
//! | [`OneOf`]      | `V`             | never             |
//! | [`All`]        | `IndexSet<V>`   | never             |
//! | [`ExactlyOne`] | `V`             | group length != 1 |

use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{GatherError, Result};

/// All values registered under one name, in registration order.
///
/// A group always holds at least one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<V> {
    first: V,
    rest: Vec<V>,
}

impl<V> Group<V> {
    /// Start a group with its first value.
    pub fn new(first: V) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Append another value to the group.
    pub fn push(&mut self, value: V) {
        self.rest.push(value);
    }

    /// Number of values in the group.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the values in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// The first registered value.
    pub fn first(&self) -> &V {
        &self.first
    }

    /// Consume the group, keeping the first registered value.
    pub fn into_first(self) -> V {
        self.first
    }

    /// Consume the group into a vector in registration order.
    pub fn into_vec(self) -> Vec<V> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.first);
        values.extend(self.rest);
        values
    }
}

impl<V> IntoIterator for Group<V> {
    type Item = V;
    type IntoIter = std::iter::Chain<std::iter::Once<V>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.first).chain(self.rest)
    }
}

/// Policy resolving the group registered under one name into one entry.
pub trait Strategy<V> {
    /// What each name maps to after resolution.
    type Output;

    /// Resolve the values registered under `name`.
    fn resolve(&self, name: &str, group: Group<V>) -> Result<Self::Output>;
}

/// Pick one member of the group.
///
/// Which member is picked is unspecified; only membership is guaranteed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneOf;

impl<V> Strategy<V> for OneOf {
    type Output = V;

    fn resolve(&self, _name: &str, group: Group<V>) -> Result<V> {
        Ok(group.into_first())
    }
}

/// Keep every distinct member of the group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<V: Eq + Hash> Strategy<V> for All {
    type Output = IndexSet<V>;

    fn resolve(&self, _name: &str, group: Group<V>) -> Result<IndexSet<V>> {
        Ok(group.into_iter().collect())
    }
}

/// Require the name to have been registered exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactlyOne;

impl<V> Strategy<V> for ExactlyOne {
    type Output = V;

    fn resolve(&self, name: &str, group: Group<V>) -> Result<V> {
        match group.len() {
            1 => Ok(group.into_first()),
            count => Err(GatherError::Collision {
                name: name.to_string(),
                count,
            }),
        }
    }
}

/// Strategy backed by a closure; see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnStrategy<F>(F);

/// Use a closure as a collision strategy.
///
/// ```
/// use gather::strategy;
/// use gather::Collector;
///
/// let numbers: Collector<u32> = Collector::new();
/// numbers.register().name("total").apply("a", 2);
/// numbers.register().name("total").apply("b", 3);
///
/// let sum = strategy::from_fn(
///     |_name: &str, group: strategy::Group<gather::Plugin<u32>>| -> gather::Result<u32> {
///         Ok(group.into_iter().map(|p| *p.original()).sum())
///     },
/// );
/// let collected = numbers.collect_with(sum).unwrap();
/// assert_eq!(collected["total"], 5);
/// ```
pub fn from_fn<F>(resolve: F) -> FnStrategy<F> {
    FnStrategy(resolve)
}

impl<V, O, F> Strategy<V> for FnStrategy<F>
where
    F: Fn(&str, Group<V>) -> Result<O>,
{
    type Output = O;

    fn resolve(&self, name: &str, group: Group<V>) -> Result<O> {
        (self.0)(name, group)
    }
}

/// Runtime choice between the single-valued strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Resolve with [`OneOf`].
    #[default]
    OneOf,
    /// Resolve with [`ExactlyOne`].
    ExactlyOne,
}

impl<V> Strategy<V> for CollisionPolicy {
    type Output = V;

    fn resolve(&self, name: &str, group: Group<V>) -> Result<V> {
        match self {
            CollisionPolicy::OneOf => OneOf.resolve(name, group),
            CollisionPolicy::ExactlyOne => ExactlyOne.resolve(name, group),
        }
    }
}

impl std::str::FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one_of" => Ok(Self::OneOf),
            "exactly_one" => Ok(Self::ExactlyOne),
            _ => Err(format!("unknown collision policy: {}", s)),
        }
    }
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::OneOf => write!(f, "one_of"),
            CollisionPolicy::ExactlyOne => write!(f, "exactly_one"),
        }
    }
}
