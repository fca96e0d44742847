//! Vote tallying.
//!
//! Counts are kept in the order each candidate first received a ballot.
//! The leader is the first candidate in that order holding the highest
//! count, so ties go to whoever was voted for earliest, never to a random
//! draw.

use smallvec::SmallVec;

use crate::core::{Ballot, PlayerId};

/// Per-candidate vote counts in first-ballot order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: SmallVec<[(PlayerId, usize); 8]>,
}

impl Tally {
    /// Count ballots in casting order.
    ///
    /// ```
    /// use insider::core::{Ballot, PlayerId};
    /// use insider::rules::Tally;
    ///
    /// let vote = |voter, candidate| Ballot { voter: PlayerId::new(voter), candidate: PlayerId::new(candidate) };
    /// let tally = Tally::from_ballots(&[vote(0, 1), vote(1, 2), vote(2, 1)]);
    ///
    /// assert_eq!(tally.count(PlayerId::new(1)), 2);
    /// assert_eq!(tally.leader(), Some(PlayerId::new(1)));
    /// ```
    pub fn from_ballots<'a>(ballots: impl IntoIterator<Item = &'a Ballot>) -> Self {
        let mut tally = Self::default();
        for ballot in ballots {
            tally.add(ballot.candidate);
        }
        tally
    }

    /// Add one vote for a candidate.
    pub fn add(&mut self, candidate: PlayerId) {
        match self.counts.iter_mut().find(|(id, _)| *id == candidate) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((candidate, 1)),
        }
    }

    /// Votes received by a candidate.
    #[must_use]
    pub fn count(&self, candidate: PlayerId) -> usize {
        self.counts
            .iter()
            .find(|(id, _)| *id == candidate)
            .map_or(0, |(_, count)| *count)
    }

    /// Total ballots counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Candidate to eliminate. `None` when no ballots were counted.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, usize)> = None;
        for &(id, count) in &self.counts {
            // Strict comparison keeps the earliest candidate on ties.
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }

    /// (candidate, count) pairs in first-ballot order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, usize)> + '_ {
        self.counts.iter().copied()
    }
}
