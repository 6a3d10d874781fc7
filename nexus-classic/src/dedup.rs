//! Finds the names that appear in two lists.
//!
//! The first list seeds a [`BinarySearchTree`]; each name of the second list
//! is then checked with [`BinarySearchTree::contains`], whose consuming
//! semantics give the rules below:
//!
//! - a name reported once is not reported again, however often the second
//!   list repeats it;
//! - a name that already occurs more than once in the first list is never
//!   reported.
//!
//! [`Strategy::Set`] applies the same rules with a hash map of counts.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::BinarySearchTree;

/// How [`find_duplicates`] looks names up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Unbalanced search tree, O(depth) per name.
    #[default]
    Tree,
    /// Hash map of counts, O(1) per name.
    Set,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Tree => f.write_str("tree"),
            Strategy::Set => f.write_str("set"),
        }
    }
}

/// Error returned when parsing an unknown [`Strategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected 'tree' or 'set')")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(Strategy::Tree),
            "set" => Ok(Strategy::Set),
            other => Err(UnknownStrategy(other.to_owned())),
        }
    }
}

/// Returns the names of `names_2` that are also in `names_1`, in `names_2`
/// order.
///
/// # Example
///
/// ```
/// use nexus_classic::dedup::{Strategy, find_duplicates};
///
/// let names_1 = ["amy", "bob", "cal"];
/// let names_2 = ["bob", "dan"];
///
/// assert_eq!(find_duplicates(&names_1, &names_2, Strategy::Tree), vec!["bob"]);
/// ```
pub fn find_duplicates<'a, S>(
    names_1: &[S],
    names_2: &'a [S],
    strategy: Strategy,
) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let duplicates = match strategy {
        Strategy::Tree => with_tree(names_1, names_2),
        Strategy::Set => with_counts(names_1, names_2),
    };
    debug!(%strategy, found = duplicates.len(), "duplicate search done");
    duplicates
}

fn with_tree<'a, S: AsRef<str>>(names_1: &[S], names_2: &'a [S]) -> Vec<&'a str> {
    let Some((first, rest)) = names_1.split_first() else {
        return Vec::new();
    };

    let mut tree = BinarySearchTree::with_root(first.as_ref());
    for name in rest {
        tree.insert(name.as_ref());
    }

    names_2
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| tree.contains(name))
        .collect()
}

fn with_counts<'a, S: AsRef<str>>(names_1: &[S], names_2: &'a [S]) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(names_1.len());
    for name in names_1 {
        *counts.entry(name.as_ref()).or_default() += 1;
    }

    names_2
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| match counts.get_mut(name) {
            Some(count) if *count == 1 => {
                *count += 1;
                true
            }
            _ => false,
        })
        .collect()
}
