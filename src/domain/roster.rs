//! Standalone data-manipulation helpers over a cartoon character roster.
//!
//! Each helper is independent: they share the [`Character`] shape and
//! nothing else. None of them mutate their input.

use std::collections::{BTreeSet, HashMap};

use async_stream::stream;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    #[serde(default)]
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub species: String,
    pub chaos: u32,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// An episode annotated with the character it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedEpisode {
    pub title: String,
    pub likes: u64,
    pub who: String,
}

pub fn map_indexed<T, U>(items: &[T], mut f: impl FnMut(&T, usize) -> U) -> Vec<U> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

pub fn filter_indexed<T: Clone>(items: &[T], mut keep: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| keep(item, *index))
        .map(|(_, item)| item.clone())
        .collect()
}

pub fn reduce_indexed<T, A>(items: &[T], init: A, mut f: impl FnMut(A, &T, usize) -> A) -> A {
    items
        .iter()
        .enumerate()
        .fold(init, |acc, (index, item)| f(acc, item, index))
}

pub fn names(characters: &[Character]) -> Vec<&str> {
    characters.iter().map(|c| c.name.as_str()).collect()
}

/// Characters whose chaos is strictly above `threshold`.
pub fn chaotic(characters: &[Character], threshold: u32) -> Vec<&Character> {
    characters.iter().filter(|c| c.chaos > threshold).collect()
}

pub fn total_chaos(characters: &[Character]) -> u64 {
    characters.iter().map(|c| u64::from(c.chaos)).sum()
}

/// Copy of `character` with `friend` appended to its friend list.
pub fn with_friend(character: &Character, friend: impl Into<String>) -> Character {
    let mut updated = character.clone();
    updated.friends.push(friend.into());
    updated
}

pub fn find_by_name<'a>(characters: &'a [Character], name: &str) -> Option<&'a Character> {
    characters.iter().find(|c| c.name == name)
}

/// Index of the first character with chaos at or above `chaos`.
pub fn position_at_least(characters: &[Character], chaos: u32) -> Option<usize> {
    characters.iter().position(|c| c.chaos >= chaos)
}

/// The `n` most chaotic characters, most chaotic first. Ties keep roster order.
pub fn top_by_chaos(characters: &[Character], n: usize) -> Vec<&Character> {
    let mut sorted: Vec<&Character> = characters.iter().collect();
    sorted.sort_by(|a, b| b.chaos.cmp(&a.chaos));
    sorted.truncate(n);
    sorted
}

pub fn episodes_with_owner(characters: &[Character]) -> Vec<OwnedEpisode> {
    characters
        .iter()
        .flat_map(|c| {
            c.episodes.iter().map(|e| OwnedEpisode {
                title: e.title.clone(),
                likes: e.likes,
                who: c.name.clone(),
            })
        })
        .collect()
}

/// Recursively flattens nested arrays; non-array values become a single element.
pub fn flatten(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten).collect(),
        other => vec![other.clone()],
    }
}

/// Uppercases every string inside `value`, descending into arrays and object values.
pub fn uppercase(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.to_uppercase()),
        Value::Array(items) => Value::Array(items.iter().map(uppercase).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, inner)| (key.clone(), uppercase(inner)))
                .collect(),
        ),
        other => other.clone(),
    }
}

pub fn unique_friends(characters: &[Character]) -> BTreeSet<&str> {
    characters
        .iter()
        .flat_map(|c| c.friends.iter().map(String::as_str))
        .collect()
}

pub fn species_by_name(characters: &[Character]) -> HashMap<&str, &str> {
    characters
        .iter()
        .map(|c| (c.name.as_str(), c.species.as_str()))
        .collect()
}

/// Episodes keyed by title; a later duplicate title replaces an earlier one.
pub fn episode_index(characters: &[Character]) -> HashMap<&str, &Episode> {
    characters
        .iter()
        .flat_map(|c| c.episodes.iter())
        .map(|e| (e.title.as_str(), e))
        .collect()
}

pub fn first_episode_likes(characters: &[Character]) -> u64 {
    characters
        .first()
        .and_then(|c| c.episodes.first())
        .map(|e| e.likes)
        .unwrap_or(0)
}

pub fn chaos_levels(characters: &[Character]) -> impl Iterator<Item = u32> + '_ {
    characters.iter().map(|c| c.chaos)
}

/// Yields every episode title, handing control back to the runtime between items.
pub fn episode_titles(characters: Vec<Character>) -> impl Stream<Item = String> {
    stream! {
        for character in characters {
            for episode in character.episodes {
                tokio::task::yield_now().await;
                yield episode.title;
            }
        }
    }
}
