//! Flashcard Deck State Machine
//!
//! Owns the per-group card state and enforces the allowed transitions:
//!
//! - `Unanswered -> Correct` and `Unanswered -> Incorrect` via [`DeckGroup::mark`]
//!   (re-marking overwrites the status, which is idempotent)
//! - `Correct/Incorrect -> Unanswered` only via [`DeckGroup::reset`], which also
//!   reshuffles the presentation order uniformly
//!
//! Filtering is a pure view operation: the visible set is exactly the items
//! whose status equals the group's active filter, and changing the filter
//! never mutates the items.
//!
//! Shuffling takes a caller-supplied RNG so tests can seed a `ChaCha8Rng`
//! for reproducible order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::percentage;
use crate::types::{AnswerStatus, GroupState, QuizItem, WordGroup};

// ==================== Data Structures ====================

/// Per-status item tallies for one group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub unanswered: usize,
    pub correct: usize,
    pub incorrect: usize,
}

/// One word group under study: its title plus mutable card state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckGroup {
    pub title: String,
    pub state: GroupState,
}

/// All groups of a loaded vocabulary set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    groups: Vec<DeckGroup>,
}

// ==================== Deck ====================

impl Deck {
    /// Build a deck from raw word groups. Each group's items are shuffled
    /// uniformly and assigned ids `0..n` with status `Unanswered`.
    pub fn new<R: Rng>(groups: Vec<WordGroup>, rng: &mut R) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| DeckGroup::build(group, rng))
            .collect();
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DeckGroup> {
        self.groups.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DeckGroup> {
        self.groups.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckGroup> {
        self.groups.iter()
    }
}

// ==================== DeckGroup ====================

impl DeckGroup {
    fn build<R: Rng>(group: WordGroup, rng: &mut R) -> Self {
        let mut entries = group.words;
        entries.shuffle(rng);
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(id, entry)| QuizItem {
                id,
                status: AnswerStatus::Unanswered,
                entry,
            })
            .collect();
        Self {
            title: group.title,
            state: GroupState {
                items,
                filter: AnswerStatus::Unanswered,
            },
        }
    }

    /// Set a card's status from a grading action. Overwrites any previous
    /// status. Returns false when no card with this id exists.
    pub fn mark(&mut self, id: usize, status: AnswerStatus) -> bool {
        match self.state.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.status = status;
                true
            }
            None => false,
        }
    }

    /// Reset the group: reshuffle the presentation order uniformly, set
    /// every status back to `Unanswered`, and reset the filter.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.state.items.shuffle(rng);
        for item in &mut self.state.items {
            item.status = AnswerStatus::Unanswered;
        }
        self.state.filter = AnswerStatus::Unanswered;
    }

    /// Change the active filter. Pure view operation, items untouched.
    pub fn set_filter(&mut self, filter: AnswerStatus) {
        self.state.filter = filter;
    }

    pub fn filter(&self) -> AnswerStatus {
        self.state.filter
    }

    pub fn item(&self, id: usize) -> Option<&QuizItem> {
        self.state.items.iter().find(|item| item.id == id)
    }

    /// Items whose status equals the active filter, in presentation order.
    pub fn visible(&self) -> Vec<&QuizItem> {
        self.state
            .items
            .iter()
            .filter(|item| item.status == self.state.filter)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.state.items.len()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for item in &self.state.items {
            match item.status {
                AnswerStatus::Unanswered => counts.unanswered += 1,
                AnswerStatus::Correct => counts.correct += 1,
                AnswerStatus::Incorrect => counts.incorrect += 1,
            }
        }
        counts
    }

    /// Rounded accuracy over the attempted items (total minus unanswered);
    /// 0 when nothing has been attempted yet.
    pub fn accuracy(&self) -> u32 {
        let counts = self.counts();
        let attempted = self.total() - counts.unanswered;
        percentage(counts.correct as u32, attempted as u32)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordEntry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_groups() -> Vec<WordGroup> {
        vec![WordGroup {
            title: "Unit 1".to_string(),
            words: (0..8)
                .map(|i| WordEntry {
                    word: format!("word{i}"),
                    def: format!("釋義{i}"),
                    ..WordEntry::default()
                })
                .collect(),
        }]
    }

    fn deck_with_seed(seed: u64) -> Deck {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Deck::new(sample_groups(), &mut rng)
    }

    #[test]
    fn test_new_deck_items_start_unanswered() {
        let deck = deck_with_seed(7);
        let group = deck.get(0).unwrap();
        assert_eq!(group.title, "Unit 1");
        assert_eq!(group.total(), 8);
        assert_eq!(group.filter(), AnswerStatus::Unanswered);
        assert!(group
            .state
            .items
            .iter()
            .all(|item| item.status == AnswerStatus::Unanswered));
    }

    #[test]
    fn test_ids_unique_within_group() {
        let deck = deck_with_seed(7);
        let group = deck.get(0).unwrap();
        let mut ids: Vec<usize> = group.state.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_new_deck_shuffles_but_keeps_entries() {
        let deck = deck_with_seed(7);
        let group = deck.get(0).unwrap();
        let mut words: Vec<&str> = group
            .state
            .items
            .iter()
            .map(|item| item.entry.word.as_str())
            .collect();
        words.sort_unstable();
        let expected: Vec<String> = (0..8).map(|i| format!("word{i}")).collect();
        assert_eq!(words, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let a = deck_with_seed(42);
        let b = deck_with_seed(42);
        let order = |deck: &Deck| -> Vec<String> {
            deck.get(0)
                .unwrap()
                .state
                .items
                .iter()
                .map(|item| item.entry.word.clone())
                .collect()
        };
        assert_eq!(order(&a), order(&b));
    }

    #[test]
    fn test_mark_transitions_and_overwrite() {
        let mut deck = deck_with_seed(1);
        let group = deck.get_mut(0).unwrap();
        assert!(group.mark(3, AnswerStatus::Correct));
        assert_eq!(group.item(3).unwrap().status, AnswerStatus::Correct);
        // Re-grading overwrites.
        assert!(group.mark(3, AnswerStatus::Incorrect));
        assert_eq!(group.item(3).unwrap().status, AnswerStatus::Incorrect);
        // Unknown id.
        assert!(!group.mark(99, AnswerStatus::Correct));
    }

    #[test]
    fn test_visible_matches_filter_exactly() {
        let mut deck = deck_with_seed(1);
        let group = deck.get_mut(0).unwrap();
        group.mark(0, AnswerStatus::Correct);
        group.mark(1, AnswerStatus::Correct);
        group.mark(2, AnswerStatus::Incorrect);

        assert_eq!(group.visible().len(), 5); // filter still Unanswered

        let before = group.state.items.clone();
        group.set_filter(AnswerStatus::Correct);
        let visible = group.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|item| item.status == AnswerStatus::Correct));
        // Filtering never mutates the items.
        assert_eq!(group.state.items, before);
    }

    #[test]
    fn test_counts_and_accuracy() {
        let mut deck = deck_with_seed(1);
        let group = deck.get_mut(0).unwrap();
        assert_eq!(group.accuracy(), 0); // nothing attempted yet

        group.mark(0, AnswerStatus::Correct);
        group.mark(1, AnswerStatus::Correct);
        group.mark(2, AnswerStatus::Correct);
        group.mark(3, AnswerStatus::Incorrect);
        group.mark(4, AnswerStatus::Incorrect);

        let counts = group.counts();
        assert_eq!(counts.unanswered, 3);
        assert_eq!(counts.correct, 3);
        assert_eq!(counts.incorrect, 2);
        // 3 correct / 5 attempted
        assert_eq!(group.accuracy(), 60);
    }

    #[test]
    fn test_reset_clears_statuses_and_filter() {
        let mut deck = deck_with_seed(1);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let group = deck.get_mut(0).unwrap();
        group.mark(0, AnswerStatus::Correct);
        group.mark(1, AnswerStatus::Incorrect);
        group.set_filter(AnswerStatus::Correct);

        group.reset(&mut rng);

        assert_eq!(group.filter(), AnswerStatus::Unanswered);
        assert!(group
            .state
            .items
            .iter()
            .all(|item| item.status == AnswerStatus::Unanswered));
        // Post-reset, filtering by Correct yields an empty set.
        group.set_filter(AnswerStatus::Correct);
        assert!(group.visible().is_empty());
    }

    #[test]
    fn test_reset_reshuffles_order() {
        let mut deck = deck_with_seed(1);
        let group = deck.get_mut(0).unwrap();
        let before: Vec<usize> = group.state.items.iter().map(|item| item.id).collect();

        // With 8 items, a same-order reshuffle across 16 seeds would be
        // astronomically unlikely; at least one must differ.
        let mut changed = false;
        for seed in 0..16 {
            let mut fresh = deck_with_seed(1);
            let fresh_group = fresh.get_mut(0).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            fresh_group.reset(&mut rng);
            let after: Vec<usize> = fresh_group.state.items.iter().map(|item| item.id).collect();
            if after != before {
                changed = true;
                break;
            }
        }
        assert!(changed);
    }
}
