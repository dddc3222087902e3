// src/crawl/frontier.rs
// =============================================================================
// Bookkeeping for which pages still need fetching and which are done.
//
// - Frontier: URLs discovered but not fetched yet. FIFO order (breadth-first),
//   so pages close to the seed are visited before the cap can trigger.
// - Visited: URLs already taken off the frontier.
//
// A URL lives in at most one of the two, and appears in the frontier at most
// once. `next()` moves a URL from the frontier to visited in one step.
//
// Both sets are created fresh for each crawl and dropped with it.
// =============================================================================

use std::collections::{HashSet, VecDeque};

use url::Url;

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    // Mirrors `queue` for O(1) membership checks
    queued: HashSet<Url>,
    visited: HashSet<Url>,
}

impl Frontier {
    // A frontier holding just the seed
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    // Queues `url` unless it was already visited or is already queued.
    // Returns true if it was actually added.
    pub fn push(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }
        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    // Takes the oldest queued URL and marks it visited
    pub fn next(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.queued.remove(&url);
        self.visited.insert(url.clone());
        Some(url)
    }

    /// Number of URLs still waiting to be fetched
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both a VecDeque and a HashSet for the queue?
//    - VecDeque keeps the order (pop_front = oldest first, breadth-first)
//    - HashSet answers "is this URL already queued?" in O(1)
//    - Scanning the VecDeque instead would be O(n) for every discovered link
//
// 2. Why store Url instead of String?
//    - Url is already parsed and normalized ("HTTP://A.example" == "http://a.example/")
//    - It implements Hash + Eq, so it works directly as a set key
//
// 3. What does the ? do in next()?
//    - pop_front() returns Option<Url>
//    - ? on an Option returns None early if there's nothing left
// -----------------------------------------------------------------------------
