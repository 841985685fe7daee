/*!
 * Brute force search for the eighth register.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::cache::CacheStore;
use crate::constants::{FAILURE_STATUS, PROBE, REGISTER_HIGH, REGISTER_LOW, TARGET};
use crate::evaluator::Evaluator;
use log::{debug, info, log_enabled, Level};
use std::io::{self, Write};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found(u16),
    Exhausted,
}

impl Outcome {
    /// Process exit status for this outcome.
    ///
    /// A found register is returned as-is; on platforms that only keep the
    /// low 8 bits of the status the caller will see it modulo 256. On Unix a
    /// parent waiting on the process sees 134 for register 25734.
    pub fn exit_status(&self) -> i32 {
        match self {
            Outcome::Found(h) => *h as i32,
            Outcome::Exhausted => FAILURE_STATUS,
        }
    }
}

pub struct Searcher {
    range: RangeInclusive<u16>,
    target: u16,
    cache: CacheStore,
}

impl Searcher {
    pub fn new(range: RangeInclusive<u16>, target: u16) -> Self {
        Self { range, target, cache: CacheStore::default() }
    }

    /// Evaluate the probe point with a fresh cache for register value `h`.
    pub fn trial(&mut self, h: u16) -> u16 {
        self.cache.reset();
        let (a, b) = PROBE;
        let t = Evaluator::new(&mut self.cache, h).evaluate(a, b);

        if log_enabled!(Level::Debug) {
            debug!("h={} t={} ({} slots cached)", h, t, self.cache.populated());
        }

        t
    }

    // one "<h>: <t>" line per register, in order, flushed as we go
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<Outcome> {
        info!(
            "scanning registers {}..={} for R{:?} == {}",
            self.range.start(),
            self.range.end(),
            PROBE,
            self.target
        );

        for h in self.range.clone() {
            let t = self.trial(h);
            write!(out, "{}: {}\r\n", h, t)?;
            out.flush()?;

            if t == self.target {
                info!("register {} gives {}", h, t);
                write!(out, "FOUND IT: {}\r\n", h)?;
                out.flush()?;
                return Ok(Outcome::Found(h));
            }
        }

        info!("no register in range gives {}", self.target);
        writeln!(out, "Search failed")?;
        out.flush()?;
        Ok(Outcome::Exhausted)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(REGISTER_LOW..=REGISTER_HIGH, TARGET)
    }
}
