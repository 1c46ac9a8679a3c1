//! Directional keyboard navigation over a grouped character index.
//!
//! Left/Right move within the current class bucket. Up/Down move between
//! non-empty buckets in traversal order (games in canonical order, classes in
//! declared order), wrapping at both ends and keeping the column where the
//! target bucket is long enough.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::models::Character;
use crate::services::grouping::GroupedIndex;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Previous character in the bucket
    Left,
    /// Next character in the bucket
    Right,
    /// Previous non-empty bucket
    Up,
    /// Next non-empty bucket
    Down,
}

impl Direction {
    /// Maps a keyboard event key name (`ArrowLeft`, `ArrowUp`, ...) to a direction.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowRight" | "Right" => Some(Self::Right),
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowDown" | "Down" => Some(Self::Down),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Self::from_key_name(s).ok_or_else(|| {
                anyhow::anyhow!("Unknown direction '{s}'. Expected left, right, up or down")
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Navigation behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Wrap Left from the first character to the last one in the bucket.
    ///
    /// Off by default: Left stops at the start of a bucket while Right wraps.
    #[serde(default)]
    pub wrap_left: bool,
}

/// Location of a non-empty bucket inside a [`GroupedIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BucketRef {
    game: usize,
    class: usize,
}

/// Where a character sits in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    bucket: BucketRef,
    position: usize,
}

/// Non-empty buckets of one index, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct FlattenedCache {
    generation: Option<u64>,
    buckets: Vec<BucketRef>,
}

impl FlattenedCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flattened sequence for `index`, rebuilding it if the cache
    /// was filled from a different index.
    fn sequence(&mut self, index: &GroupedIndex) -> &[BucketRef] {
        if self.generation != Some(index.generation()) {
            debug!(generation = index.generation(), "rebuilding flattened bucket cache");
            self.buckets = flatten(index);
            self.generation = Some(index.generation());
        }
        &self.buckets
    }

    /// Generation of the index the cache was last built from.
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        self.generation
    }
}

/// Stateful navigator that memoizes the flattened bucket sequence.
///
/// Each navigator owns its cache, so several menus can navigate different
/// indexes without interfering. Results are identical to [`find_next`].
#[derive(Debug, Clone, Default)]
pub struct GroupedNavigator {
    config: NavigationConfig,
    cache: FlattenedCache,
}

impl GroupedNavigator {
    /// Creates a navigator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator with explicit settings.
    #[must_use]
    pub fn with_config(config: NavigationConfig) -> Self {
        Self {
            config,
            cache: FlattenedCache::new(),
        }
    }

    /// Active settings.
    #[must_use]
    pub const fn config(&self) -> NavigationConfig {
        self.config
    }

    /// The memoized bucket sequence.
    #[must_use]
    pub const fn cache(&self) -> &FlattenedCache {
        &self.cache
    }

    /// Finds the character selected after pressing `direction` on `current`.
    ///
    /// Returns `None` when `current` is not in `index` or there is nowhere
    /// to move.
    pub fn find_next<'a>(
        &mut self,
        index: &'a GroupedIndex,
        current: &Character,
        direction: Direction,
    ) -> Option<&'a Character> {
        let sequence = self.cache.sequence(index);
        step(index, sequence, current, direction, self.config)
    }
}

/// Finds the next character without caching, using default settings.
///
/// ```
/// use std::collections::HashMap;
/// use spritedye::models::{Character, GameId};
/// use spritedye::services::grouping::group_characters;
/// use spritedye::services::navigation::{find_next, Direction};
///
/// let characters = vec![
///     Character::new("1", GameId::Eo1, "a"),
///     Character::new("2", GameId::Eo1, "a"),
/// ];
/// let orderings = HashMap::from([(GameId::Eo1, vec!["a".to_string()])]);
/// let index = group_characters(&characters, &orderings);
///
/// let next = find_next(&index, &characters[1], Direction::Right).unwrap();
/// assert_eq!(next.id, "1");
/// assert!(find_next(&index, &characters[0], Direction::Left).is_none());
/// ```
pub fn find_next<'a>(
    index: &'a GroupedIndex,
    current: &Character,
    direction: Direction,
) -> Option<&'a Character> {
    find_next_with(index, current, direction, NavigationConfig::default())
}

/// Finds the next character without caching, using `config`.
pub fn find_next_with<'a>(
    index: &'a GroupedIndex,
    current: &Character,
    direction: Direction,
    config: NavigationConfig,
) -> Option<&'a Character> {
    let sequence = flatten(index);
    step(index, &sequence, current, direction, config)
}

fn flatten(index: &GroupedIndex) -> Vec<BucketRef> {
    index
        .games()
        .values()
        .enumerate()
        .flat_map(|(game, classes)| {
            classes
                .values()
                .enumerate()
                .filter(|(_, bucket)| !bucket.is_empty())
                .map(move |(class, _)| BucketRef { game, class })
        })
        .collect()
}

fn bucket_at(index: &GroupedIndex, at: BucketRef) -> &[Character] {
    index
        .games()
        .get_index(at.game)
        .and_then(|(_, classes)| classes.get_index(at.class))
        .map(|(_, bucket)| bucket.as_slice())
        .unwrap_or_default()
}

/// Locates `current` by id anywhere in the index.
fn locate(index: &GroupedIndex, current: &Character) -> Option<Cursor> {
    index
        .games()
        .values()
        .enumerate()
        .find_map(|(game, classes)| {
            classes
                .values()
                .enumerate()
                .find_map(|(class, bucket)| {
                    bucket
                        .iter()
                        .position(|c| c == current)
                        .map(|position| Cursor {
                            bucket: BucketRef { game, class },
                            position,
                        })
                })
        })
}

fn step<'a>(
    index: &'a GroupedIndex,
    sequence: &[BucketRef],
    current: &Character,
    direction: Direction,
    config: NavigationConfig,
) -> Option<&'a Character> {
    let Some(cursor) = locate(index, current) else {
        debug!(id = %current.id, "current character not found in grouped index");
        return None;
    };
    let bucket = bucket_at(index, cursor.bucket);

    match direction {
        Direction::Left => {
            if cursor.position > 0 {
                bucket.get(cursor.position - 1)
            } else if config.wrap_left {
                bucket.last()
            } else {
                None
            }
        }
        Direction::Right => bucket.get((cursor.position + 1) % bucket.len()),
        Direction::Up | Direction::Down => {
            if sequence.len() < 2 {
                return None;
            }
            let here = sequence.iter().position(|b| *b == cursor.bucket)?;
            let target = if direction == Direction::Up {
                (here + sequence.len() - 1) % sequence.len()
            } else {
                (here + 1) % sequence.len()
            };
            let target = bucket_at(index, sequence[target]);
            target.get(cursor.position.min(target.len().saturating_sub(1)))
        }
    }
}
