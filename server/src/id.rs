//! Todo identifiers.
//!
//! # Design
//! Ids come from a monotonic `u64` counter owned by the store. The counter
//! never wraps: once `u64::MAX` has been handed out the generator reports
//! exhaustion instead of producing a value that could collide with a live
//! or deleted todo.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lookup key of a todo. Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TodoId)
    }
}

/// Hands out fresh `TodoId`s in increasing order, starting at 1.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Returns `None` once the id space is used up.
    pub fn next_id(&mut self) -> Option<TodoId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(TodoId(id))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
