//! Grouping of read fragments by read id.

use std::collections::HashMap;

use nonempty::NonEmpty;

use crate::core::DirectedInterval;
use crate::core::Direction;
use crate::core::Interval;
use crate::record::Read;

/// Every fragment sharing one read id, split by direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadGroup {
    /// The read id.
    id: String,

    /// The forward fragments in input order.
    forward: Vec<Interval>,

    /// The reverse fragments in input order.
    reverse: Vec<Interval>,
}

impl ReadGroup {
    /// Creates a new [`ReadGroup`] seeded with its first fragment.
    pub fn new(id: impl Into<String>, interval: DirectedInterval) -> Self {
        let mut group = Self {
            id: id.into(),
            forward: Vec::new(),
            reverse: Vec::new(),
        };

        group.push(interval);
        group
    }

    /// Adds a fragment to the group.
    pub fn push(&mut self, interval: DirectedInterval) {
        match interval.direction() {
            Direction::Forward => self.forward.push(interval.interval()),
            Direction::Reverse => self.reverse.push(interval.interval()),
        }
    }

    /// Gets the read id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the forward fragments in input order.
    pub fn forward(&self) -> &[Interval] {
        &self.forward
    }

    /// Gets the reverse fragments in input order.
    pub fn reverse(&self) -> &[Interval] {
        &self.reverse
    }

    /// Gets the number of fragments in the group.
    pub fn len(&self) -> usize {
        self.forward.len() + self.reverse.len()
    }

    /// Returns whether the group has no fragments (never true for a group
    /// built by [`group_reads`]).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fragments in drawing order.
    ///
    /// Each direction is sorted on its own, the forward block is placed
    /// before the reverse block, and the result is stably sorted by start
    /// position. Fragments starting at the same position therefore keep
    /// forward before reverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::core::Direction;
    /// use trackplot::core::Interval;
    /// use trackplot::layout::ReadGroup;
    ///
    /// let mut group = ReadGroup::new("a", Interval::try_new(10, 20)?.with_direction(Direction::Reverse));
    /// group.push(Interval::try_new(10, 15)?.with_direction(Direction::Forward));
    /// group.push(Interval::try_new(1, 5)?.with_direction(Direction::Reverse));
    ///
    /// let ordered = group.ordered().unwrap();
    /// let starts = ordered.iter().map(|i| (i.start(), i.direction())).collect::<Vec<_>>();
    /// assert_eq!(
    ///     starts,
    ///     vec![(1, Direction::Reverse), (10, Direction::Forward), (10, Direction::Reverse)]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn ordered(&self) -> Option<NonEmpty<DirectedInterval>> {
        let mut forward = self.forward.clone();
        forward.sort();

        let mut reverse = self.reverse.clone();
        reverse.sort();

        let mut intervals = forward
            .into_iter()
            .map(|interval| interval.with_direction(Direction::Forward))
            .chain(
                reverse
                    .into_iter()
                    .map(|interval| interval.with_direction(Direction::Reverse)),
            )
            .collect::<Vec<_>>();

        // `sort_by_key` is stable, which keeps the forward block first on ties.
        intervals.sort_by_key(|interval| interval.start());

        NonEmpty::from_vec(intervals)
    }
}

/// Groups reads by id, in the order each id is first seen.
///
/// # Examples
///
/// ```
/// use trackplot::layout::group_reads;
/// use trackplot::record::Read;
///
/// let reads = ["a: 1-5 FW", "b: 20-25 FW", "a: 10-15 RW"]
///     .into_iter()
///     .map(|s| s.parse::<Read>())
///     .collect::<Result<Vec<_>, _>>()?;
///
/// let groups = group_reads(&reads);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].id(), "a");
/// assert_eq!(groups[0].len(), 2);
/// assert_eq!(groups[1].id(), "b");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn group_reads(reads: &[Read]) -> Vec<ReadGroup> {
    let (groups, _) = reads.iter().fold(
        (Vec::<ReadGroup>::new(), HashMap::<&str, usize>::new()),
        |(mut groups, mut index), read| {
            match index.get(read.id()) {
                Some(&i) => groups[i].push(*read.interval()),
                None => {
                    index.insert(read.id(), groups.len());
                    groups.push(ReadGroup::new(read.id(), *read.interval()));
                }
            }

            (groups, index)
        },
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reads(values: &[&str]) -> Vec<Read> {
        values.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_grouping() {
        let groups = group_reads(&reads(&["a: 1-5 FW", "a: 10-15 RW", "b: 20-25 FW"]));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id(), "a");
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[0].forward().len(), 1);
        assert_eq!(groups[0].reverse().len(), 1);
        assert_eq!(groups[1].id(), "b");
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_first_seen_order() {
        let groups = group_reads(&reads(&[
            "z: 1-2 FW",
            "a: 3-4 FW",
            "z: 5-6 RW",
            "m: 7-8 RW",
            "a: 9-10 FW",
        ]));

        let ids = groups.iter().map(|g| g.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_ids_group_together() {
        let groups = group_reads(&reads(&[": 1-2 FW", ": 3-4 RW"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id(), "");
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_ordering_interleaves_directions() {
        let groups = group_reads(&reads(&[
            "66592: 30703331-30703402 FW",
            "66592: 30702122-30702169 RW",
            "66592: 30702001-30702033 RW",
            "66592: 30703584-30703611 FW",
        ]));

        let ordered = groups[0].ordered().unwrap();
        let ordered = ordered
            .iter()
            .map(|i| (i.start(), i.stop(), i.direction()))
            .collect::<Vec<_>>();

        assert_eq!(
            ordered,
            vec![
                (30702001, 30702033, Direction::Reverse),
                (30702122, 30702169, Direction::Reverse),
                (30703331, 30703402, Direction::Forward),
                (30703584, 30703611, Direction::Forward),
            ]
        );
    }

    #[test]
    fn test_ordering_tie_break() {
        // Reverse is listed first in the input, but forward wins the tie.
        let groups = group_reads(&reads(&["a: 10-30 RW", "a: 10-20 FW", "a: 10-15 FW"]));

        let ordered = groups[0].ordered().unwrap();
        let ordered = ordered
            .iter()
            .map(|i| (i.stop(), i.direction()))
            .collect::<Vec<_>>();

        assert_eq!(
            ordered,
            vec![
                (15, Direction::Forward),
                (20, Direction::Forward),
                (30, Direction::Reverse),
            ]
        );
    }
}
