//! Ordering of reference records in listings.

/// A crop or region entry: stable id plus display name.
pub trait Reference {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl<T: Reference + ?Sized> Reference for &T {
    fn id(&self) -> &str {
        (*self).id()
    }
    fn name(&self) -> &str {
        (*self).name()
    }
}

pub trait SortByName {
    /// Ascending by name, then by id.
    ///
    /// Region tables are hash-backed, so entries sharing a name would
    /// otherwise come out in arbitrary order.
    fn sort_by_name(&mut self);
}

impl<T: Reference> SortByName for [T] {
    fn sort_by_name(&mut self) {
        self.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, &'static str);
    impl Reference for Entry {
        fn id(&self) -> &str {
            self.0
        }
        fn name(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_sort_by_name() {
        let mut items = vec![
            Entry("tomato", "Tomato"),
            Entry("lettuce", "Lettuce"),
            Entry("potato", "Potato"),
        ];
        items.as_mut_slice().sort_by_name();
        assert_eq!(items[0].name(), "Lettuce");
        assert_eq!(items[1].name(), "Potato");
        assert_eq!(items[2].name(), "Tomato");
    }

    #[test]
    fn test_equal_names_ordered_by_id() {
        let a = Entry("north-2", "North");
        let b = Entry("north-1", "North");
        let c = Entry("alpine", "Alpine");
        let mut refs = vec![&a, &b, &c];
        refs.as_mut_slice().sort_by_name();
        let ids: Vec<&str> = refs.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["alpine", "north-1", "north-2"]);
    }
}
