/*!
 * The teleporter check routine (the function at 6049 in the challenge binary).
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::cache::CacheStore;
use crate::constants::{A_SLOTS, B_SLOTS, MASK};

/// Evaluates the modified Ackermann function with register 8 fixed:
///
/// ```text
/// R(0, b) = b + 1            (mod 32768)
/// R(a, 0) = R(a - 1, r8)
/// R(a, b) = R(a - 1, R(a, b - 1))
/// ```
///
/// `R(a, b - 1)` is written to the cache by the caller that needed it, so the
/// `a == 0` and `b == 0` cases are never stored under their own index.
///
/// The chains get far too deep for the call stack, so instead of recursing we
/// keep the outstanding `(a, b - 1)` slots on our own stack. That stack lives
/// only for one `evaluate` call; the cache is the only thing carried over.
pub struct Evaluator<'a> {
    cache: &'a mut CacheStore,
    register: u16,
}

impl<'a> Evaluator<'a> {
    pub fn new(cache: &'a mut CacheStore, register: u16) -> Self {
        assert!(
            (register as usize) < B_SLOTS,
            "register value out of range: {}",
            register
        );
        Self { cache, register }
    }

    pub fn evaluate(&mut self, a: u16, b: u16) -> u16 {
        assert!((a as usize) < A_SLOTS, "R(a, b) called with a = {}", a);
        assert!((b as usize) < B_SLOTS, "R(a, b) called with b = {}", b);

        let mut pending: Vec<(u16, u16)> = vec![];
        let (mut a, mut b) = (a, b);
        loop {
            // walk down until something can be answered directly
            let value = loop {
                if let Some(v) = self.cache.get(a, b) {
                    break v;
                }
                if a == 0 {
                    break (b + 1) & MASK;
                }
                if b == 0 {
                    a -= 1;
                    b = self.register;
                    continue;
                }
                b -= 1;
                pending.push((a, b));
            };

            // R(a, b - 1) is known: remember it, then carry on with R(a - 1, _)
            match pending.pop() {
                None => return value,
                Some((pa, pb)) => {
                    b = self.cache.set(pa, pb, value);
                    a = pa - 1;
                }
            }
        }
    }
}
