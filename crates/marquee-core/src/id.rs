//! Element identifiers and the sequence that hands them out.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of an element owned by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an element ID from a raw value.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Monotonic source of unique identifiers.
///
/// Whoever needs identifiers (surfaces for elements, controllers for style
/// scopes) receives a shared reference to one sequence instead of touching a
/// global counter. One sequence per page keeps every generated name unique.
///
/// ```
/// use marquee_core::IdSequence;
///
/// let ids = IdSequence::new();
/// assert_eq!(ids.next_raw(), 0);
/// assert_eq!(ids.next_raw(), 1);
/// assert_eq!(ids.scoped("assemble"), "assemble-2");
/// ```
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_raw(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_element(&self) -> ElementId {
        ElementId(self.next_raw())
    }

    /// A unique name with the given prefix, e.g. `assemble-7`.
    pub fn scoped(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_raw())
    }

    /// The value the next call will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
