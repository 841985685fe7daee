/*!
 * Memo table for the teleporter check routine.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::constants::{A_SLOTS, B_SLOTS};
use log::trace;

/// Results of `R(a, b)` for a single register value, indexed by `(a, b)`.
///
/// Every 15 bit value is a possible result, so "not computed yet" is `None`
/// rather than a magic number.
pub struct CacheStore {
    slots: Vec<Option<u16>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self { slots: vec![None; A_SLOTS * B_SLOTS] }
    }

    // forget everything - must happen before each new register value
    pub fn reset(&mut self) {
        trace!("resetting cache ({} slots)", self.slots.len());
        self.slots.fill(None);
    }

    pub fn get(&self, a: u16, b: u16) -> Option<u16> {
        self.slots[Self::index(a, b)]
    }

    /// Store `value` at `(a, b)` and hand it back.
    pub fn set(&mut self, a: u16, b: u16, value: u16) -> u16 {
        self.slots[Self::index(a, b)] = Some(value);
        value
    }

    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn index(a: u16, b: u16) -> usize {
        let (a, b) = (a as usize, b as usize);
        assert!(a < A_SLOTS, "cache index a out of range: {}", a);
        assert!(b < B_SLOTS, "cache index b out of range: {}", b);
        a * B_SLOTS + b
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let cache = CacheStore::new();
        assert_eq!(cache.get(0, 0), None);
        assert_eq!(cache.get(4, 32767), None);
        assert_eq!(cache.populated(), 0);
    }

    #[test]
    fn set_returns_value() {
        let mut cache = CacheStore::new();
        assert_eq!(cache.set(3, 100, 32767), 32767);
        assert_eq!(cache.get(3, 100), Some(32767));
        assert_eq!(cache.get(3, 101), None);
        assert_eq!(cache.get(2, 100), None);
    }

    #[test]
    fn every_value_is_storable() {
        // 0x7fff and 0 are both real results, not markers
        let mut cache = CacheStore::new();
        cache.set(1, 1, 0);
        cache.set(1, 2, 0x7fff);
        assert_eq!(cache.get(1, 1), Some(0));
        assert_eq!(cache.get(1, 2), Some(0x7fff));
    }

    #[test]
    fn reset_clears_everything() {
        let mut cache = CacheStore::new();
        cache.set(0, 0, 1);
        cache.set(4, 32767, 2);
        cache.set(2, 12345, 3);
        assert_eq!(cache.populated(), 3);

        cache.reset();
        assert_eq!(cache.populated(), 0);
        assert_eq!(cache.get(4, 32767), None);
    }

    #[test]
    #[should_panic(expected = "cache index a out of range")]
    fn a_out_of_range() {
        CacheStore::new().get(5, 0);
    }

    #[test]
    #[should_panic(expected = "cache index b out of range")]
    fn b_out_of_range() {
        CacheStore::new().set(0, 32768, 1);
    }
}
