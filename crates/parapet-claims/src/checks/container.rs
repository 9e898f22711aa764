//! Membership and emptiness checks for collection-like values.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::claim::Claim;
use crate::error::CheckError;

/// Capability of collection-like values: item membership and emptiness.
pub trait Container {
    type Item;

    /// Whether `item` is an element of this container.
    fn holds(&self, item: &Self::Item) -> bool;

    /// Whether this container has no elements.
    fn is_vacant(&self) -> bool;
}

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;

    fn holds(&self, item: &T) -> bool {
        self.iter().any(|v| v == item)
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Container for &[T] {
    type Item = T;

    fn holds(&self, item: &T) -> bool {
        self.iter().any(|v| v == item)
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq, const N: usize> Container for [T; N] {
    type Item = T;

    fn holds(&self, item: &T) -> bool {
        self.iter().any(|v| v == item)
    }

    fn is_vacant(&self) -> bool {
        N == 0
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container for HashSet<T, S> {
    type Item = T;

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;

    fn holds(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

/// Checks over claims holding a [`Container`].
pub trait ContainerChecks: Sized {
    type Item;

    /// Assert that the collection contains `item`.
    fn contains(self, item: &Self::Item) -> Result<Self, CheckError>;

    /// Assert that the collection is empty.
    fn is_empty(self) -> Result<Self, CheckError>;
}

impl<C: Container> ContainerChecks for Claim<C> {
    type Item = C::Item;

    fn contains(self, item: &C::Item) -> Result<Self, CheckError> {
        let holds = self.value().holds(item);
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }

    fn is_empty(self) -> Result<Self, CheckError> {
        let holds = self.value().is_vacant();
        self.judge(holds, |claim, message| CheckError::InvalidArgument {
            name: claim.name().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::check;
    use crate::error::FailureKind;

    #[test]
    fn membership() {
        let items = vec![0, 1, 2];
        let err = check(items.clone(), "items").contains(&4).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidArgument);
        assert_eq!(err.parameter(), "items");

        assert!(check(items.clone(), "items").not().contains(&4).is_ok());
        assert!(check(items, "items").contains(&1).is_ok());
    }

    #[test]
    fn emptiness() {
        assert!(check(Vec::<i32>::new(), "items").is_empty().is_ok());
        assert!(check(vec![1], "items").is_empty().is_err());
        assert!(check(vec![1], "items").not().is_empty().is_ok());
    }

    #[test]
    fn slices_arrays_and_sets() {
        let slice: &[u8] = &[1, 2, 3];
        assert!(check(slice, "bytes").contains(&2).is_ok());

        assert!(check([10, 20], "pair").contains(&20).is_ok());
        assert!(check([0u8; 0], "none").is_empty().is_ok());

        let set: HashSet<_> = ["a", "b"].into_iter().collect();
        assert!(check(set, "set").contains(&"a").is_ok());

        let tree: BTreeSet<_> = [1, 2].into_iter().collect();
        assert!(check(tree, "tree").not().contains(&3).is_ok());
    }
}
