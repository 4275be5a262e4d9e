use crate::student::StudentIdentity;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const SALUTATION: &str = "salutation";
pub const PRESENTATION: &str = "presentation";
pub const MOTIVATION: &str = "motivation";
pub const CONCLUSION: &str = "conclusion";

/// Block ids in canonical order.
pub const CANONICAL_IDS: [&str; 4] = [SALUTATION, PRESENTATION, MOTIVATION, CONCLUSION];

/// One sentence of the self-introduction pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchBlock {
    pub id: &'static str,
    pub content: String,
    /// Canonical 1-based position.
    pub order: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Target index for a move from `index`, or `None` when it leaves `0..len`.
    #[must_use]
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Up => index.checked_sub(1)?,
            Self::Down => index.checked_add(1)?,
        };
        (target < len && index < len).then_some(target)
    }
}

/// Build the four canonical blocks for a student.
#[must_use]
pub fn canonical_blocks(identity: &StudentIdentity) -> Vec<PitchBlock> {
    let StudentIdentity {
        first_name,
        last_name,
        specialty,
    } = identity;
    vec![
        PitchBlock {
            id: SALUTATION,
            content: "Bonjour, merci de me recevoir aujourd'hui.".to_string(),
            order: 1,
        },
        PitchBlock {
            id: PRESENTATION,
            content: format!(
                "Je m'appelle {first_name} {last_name}, étudiant(e) en 3ème année {specialty}."
            ),
            order: 2,
        },
        PitchBlock {
            id: MOTIVATION,
            content: "Je suis passionné(e) par mon domaine et je souhaite mettre mes compétences au service de TechTunis.".to_string(),
            order: 3,
        },
        PitchBlock {
            id: CONCLUSION,
            content: "Ce stage PFE représente pour moi une opportunité idéale de contribuer à des projets concrets.".to_string(),
            order: 4,
        },
    ]
}

/// Uniform permutation of `blocks` (Fisher-Yates).
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(blocks: &[PitchBlock], rng: &mut R) -> Vec<PitchBlock> {
    let mut out = blocks.to_vec();
    out.shuffle(rng);
    out
}

/// Position-by-position id comparison.
#[must_use]
pub fn matches_canonical(current: &[PitchBlock], canonical: &[PitchBlock]) -> bool {
    current.len() == canonical.len() && current.iter().zip(canonical).all(|(a, b)| a.id == b.id)
}

/// Canonical blocks memoized on the student triple, plus the on-screen ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchDeck {
    identity: StudentIdentity,
    canonical: Vec<PitchBlock>,
    current: Vec<PitchBlock>,
}

impl PitchDeck {
    pub fn new<R: Rng + ?Sized>(identity: StudentIdentity, rng: &mut R) -> Self {
        let canonical = canonical_blocks(&identity);
        let current = shuffled(&canonical, rng);
        Self {
            identity,
            canonical,
            current,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    #[must_use]
    pub fn canonical(&self) -> &[PitchBlock] {
        &self.canonical
    }

    #[must_use]
    pub fn current(&self) -> &[PitchBlock] {
        &self.current
    }

    /// Ids of the on-screen ordering.
    #[must_use]
    pub fn current_ids(&self) -> Vec<&'static str> {
        self.current.iter().map(|b| b.id).collect()
    }

    /// Re-derive the canonical blocks for `identity`.
    ///
    /// Returns `false` without touching anything when the triple is unchanged.
    /// With `keep_order` the current ordering is preserved and only its text is
    /// refreshed; otherwise it is reshuffled.
    pub fn rederive<R: Rng + ?Sized>(
        &mut self,
        identity: StudentIdentity,
        rng: &mut R,
        keep_order: bool,
    ) -> bool {
        if identity == self.identity {
            return false;
        }
        let canonical = canonical_blocks(&identity);
        if keep_order {
            for block in &mut self.current {
                if let Some(fresh) = canonical.iter().find(|c| c.id == block.id) {
                    block.content.clone_from(&fresh.content);
                }
            }
        } else {
            self.current = shuffled(&canonical, rng);
        }
        self.canonical = canonical;
        self.identity = identity;
        true
    }

    /// Swap the block at `index` with its neighbour. Returns whether anything moved.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        match direction.target(index, self.current.len()) {
            Some(target) => {
                self.current.swap(index, target);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_canonical_order(&self) -> bool {
        matches_canonical(&self.current, &self.canonical)
    }

    /// Block contents in displayed order, joined with single spaces.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        self.current
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentInfo;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    fn deck(seed: u64) -> PitchDeck {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        PitchDeck::new(StudentIdentity::default(), &mut rng)
    }

    fn sorted_ids(blocks: &[PitchBlock]) -> Vec<&'static str> {
        let mut ids: Vec<_> = blocks.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn canonical_blocks_follow_definition_order() {
        let blocks = canonical_blocks(&StudentIdentity::default());
        let ids: Vec<_> = blocks.iter().map(|b| b.id).collect();
        assert_eq!(ids, CANONICAL_IDS);
        let orders: Vec<_> = blocks.iter().map(|b| b.order).collect();
        assert_eq!(orders, [1, 2, 3, 4]);
    }

    #[test]
    fn presentation_is_parameterized_by_student() {
        let identity = StudentInfo::new("Amira", "Trabelsi", "Génie Logiciel").identity();
        let blocks = canonical_blocks(&identity);
        assert_eq!(
            blocks[1].content,
            "Je m'appelle Amira Trabelsi, étudiant(e) en 3ème année Génie Logiciel."
        );
    }

    #[test]
    fn shuffle_is_always_a_permutation() {
        let canonical = sorted_ids(&canonical_blocks(&StudentIdentity::default()));
        for seed in 0..200 {
            assert_eq!(sorted_ids(deck(seed).current()), canonical);
        }
    }

    #[test]
    fn shuffle_covers_all_permutations_evenly() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
        let canonical = canonical_blocks(&StudentIdentity::default());
        let runs = 24_000;
        let mut counts: HashMap<Vec<&'static str>, u32> = HashMap::new();
        for _ in 0..runs {
            let ids = shuffled(&canonical, &mut rng).iter().map(|b| b.id).collect();
            *counts.entry(ids).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);
        for (perm, count) in &counts {
            assert!(
                (750..=1250).contains(count),
                "permutation {perm:?} appeared {count} times"
            );
        }
    }

    #[test]
    fn move_up_then_down_restores_order() {
        for index in 1..4 {
            let mut d = deck(7);
            let before = d.current_ids();
            assert!(d.move_block(index, Direction::Up));
            assert!(d.move_block(index - 1, Direction::Down));
            assert_eq!(d.current_ids(), before);
        }
    }

    #[test]
    fn move_swaps_only_the_two_neighbours() {
        let mut d = deck(11);
        let before = d.current_ids();
        assert!(d.move_block(1, Direction::Down));
        let after = d.current_ids();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[1]);
        assert_eq!(after[3], before[3]);
    }

    #[test]
    fn out_of_bounds_moves_are_ignored() {
        let mut d = deck(3);
        let before = d.current_ids();
        assert!(!d.move_block(0, Direction::Up));
        assert!(!d.move_block(3, Direction::Down));
        assert!(!d.move_block(9, Direction::Up));
        assert_eq!(d.current_ids(), before);
    }

    #[test]
    fn canonical_order_matches_and_adjacent_swaps_do_not() {
        let canonical = canonical_blocks(&StudentIdentity::default());
        assert!(matches_canonical(&canonical, &canonical));
        for i in 0..3 {
            let mut swapped = canonical.clone();
            swapped.swap(i, i + 1);
            assert!(!matches_canonical(&swapped, &canonical));
        }
        assert!(!matches_canonical(&canonical[..3], &canonical));
    }

    #[test]
    fn rederive_with_same_identity_keeps_shuffle() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut d = PitchDeck::new(StudentIdentity::default(), &mut rng);
        let before = d.clone();
        assert!(!d.rederive(StudentIdentity::default(), &mut rng, false));
        assert_eq!(d, before);
    }

    #[test]
    fn rederive_with_new_identity_refreshes_content() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut d = PitchDeck::new(StudentIdentity::default(), &mut rng);
        let order = d.current_ids();
        let identity = StudentInfo::new("Yassine", "Gharbi", "Réseaux").identity();
        assert!(d.rederive(identity, &mut rng, true));
        assert_eq!(d.current_ids(), order);
        assert!(d.spoken_text().contains("Yassine Gharbi"));
        assert!(d.canonical()[1].content.contains("Réseaux"));
    }

    #[test]
    fn spoken_text_joins_displayed_order() {
        let d = deck(5);
        let expected = d
            .current()
            .iter()
            .map(|b| b.content.clone())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(d.spoken_text(), expected);
    }
}
