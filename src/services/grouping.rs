//! Grouping of characters by game and class.
//!
//! The grouped index is the data both the character menu and keyboard
//! navigation work from. It is rebuilt from scratch whenever the roster or
//! the class orderings change and is never mutated afterwards.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::models::{Character, ClassOrderings, GameId};

/// Characters of one class, sorted by id.
pub type Bucket = Vec<Character>;

/// Ordered `class -> bucket` mapping for one game.
pub type ClassBuckets = IndexMap<String, Bucket>;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Characters grouped by game, then class.
///
/// Games appear in canonical order and classes in their declared order.
/// Empty buckets are kept so menus can show the class; navigation skips
/// them.
///
/// Every index gets a unique generation number when it is built. Because an
/// index cannot be modified afterwards, the generation identifies its
/// contents and can key caches derived from it.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct GroupedIndex {
    games: IndexMap<GameId, ClassBuckets>,
    #[serde(skip)]
    generation: u64,
}

impl GroupedIndex {
    fn new(games: IndexMap<GameId, ClassBuckets>) -> Self {
        Self {
            games,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Unique stamp of this index instance.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// All games with their class buckets, in order.
    #[must_use]
    pub const fn games(&self) -> &IndexMap<GameId, ClassBuckets> {
        &self.games
    }

    /// Class buckets for one game.
    #[must_use]
    pub fn game(&self, game: GameId) -> Option<&ClassBuckets> {
        self.games.get(&game)
    }

    /// The bucket for `(game, class)`.
    #[must_use]
    pub fn bucket(&self, game: GameId, class: &str) -> Option<&[Character]> {
        self.games
            .get(&game)
            .and_then(|classes| classes.get(class))
            .map(Vec::as_slice)
    }

    /// Iterates `(game, class, bucket)` in traversal order, empty buckets included.
    pub fn buckets(&self) -> impl Iterator<Item = (GameId, &str, &[Character])> {
        self.games.iter().flat_map(|(game, classes)| {
            classes
                .iter()
                .map(move |(class, bucket)| (*game, class.as_str(), bucket.as_slice()))
        })
    }

    /// Number of characters across all buckets.
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.buckets().map(|(_, _, bucket)| bucket.len()).sum()
    }

    /// True if no bucket holds a character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.character_count() == 0
    }
}

/// Result of grouping, including the characters left out of the index.
#[derive(Debug, Clone)]
pub struct GroupingReport {
    /// The grouped index
    pub index: GroupedIndex,
    /// Characters whose class is not declared for their game, sorted by id
    pub excluded: Vec<Character>,
}

/// Groups characters by game and declared class order.
///
/// Characters are sorted by id first, so the result does not depend on the
/// input order. Characters whose class is not declared for their game are
/// dropped; use [`group_characters_with_report`] to see which.
///
/// ```
/// use std::collections::HashMap;
/// use spritedye::models::{Character, GameId};
/// use spritedye::services::grouping::group_characters;
///
/// let characters = vec![
///     Character::new("2", GameId::Eo1, "a"),
///     Character::new("1", GameId::Eo1, "a"),
///     Character::new("3", GameId::Eo1, "b"),
/// ];
/// let orderings = HashMap::from([(GameId::Eo1, vec!["a".to_string(), "b".to_string()])]);
///
/// let index = group_characters(&characters, &orderings);
/// let ids: Vec<_> = index.bucket(GameId::Eo1, "a").unwrap().iter().map(|c| c.id.as_str()).collect();
/// assert_eq!(ids, ["1", "2"]);
/// ```
#[must_use]
pub fn group_characters(characters: &[Character], orderings: &ClassOrderings) -> GroupedIndex {
    group_characters_with_report(characters, orderings).index
}

/// Groups characters and reports the ones excluded from the index.
#[must_use]
pub fn group_characters_with_report(
    characters: &[Character],
    orderings: &ClassOrderings,
) -> GroupingReport {
    let mut sorted: Vec<&Character> = characters.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut games = IndexMap::new();
    for game in GameId::ALL {
        let Some(order) = orderings.get(&game) else {
            continue;
        };

        let mut classes = ClassBuckets::new();
        for class in order {
            if classes.contains_key(class) {
                continue;
            }
            let bucket: Bucket = sorted
                .iter()
                .filter(|c| c.game == game && &c.class == class)
                .map(|c| (*c).clone())
                .collect();
            classes.insert(class.clone(), bucket);
        }
        games.insert(game, classes);
    }

    let excluded: Vec<Character> = sorted
        .into_iter()
        .filter(|c| {
            orderings
                .get(&c.game)
                .is_none_or(|order| !order.iter().any(|class| class == &c.class))
        })
        .inspect(|c| {
            debug!(
                id = %c.id,
                game = %c.game,
                class = %c.class,
                "character class not in declared ordering, excluded from index"
            );
        })
        .cloned()
        .collect();

    GroupingReport {
        index: GroupedIndex::new(games),
        excluded,
    }
}
