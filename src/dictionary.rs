//! `DynamicUniverseSampling`: a bucketed two-level ordered dictionary over
//! an integer universe `[0, U)`, supporting insert/remove/contains and
//! predecessor/successor queries without storing the universe explicitly.
//!
//! No implementation of this structure was retrieved from the original
//! source pack (only its usage site in the window index); it is built
//! directly from the structure's documented contract, using
//! `bitset::WordBitSet` (trailing/leading-zero bit scanning) for both the
//! within-bucket membership bitmap and the across-bucket non-empty
//! bitmap. This is one valid realisation of "bucketed universe sampling" —
//! see `DESIGN.md` for why `rst`/`max_i_rst` are provided as a tested
//! primitive but not wired into this particular implementation.

use crate::bitset::WordBitSet;
use std::collections::HashMap;

/// Result of a predecessor/successor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: u64,
    pub value: V,
}

pub struct DynamicUniverseSampling<V> {
    universe: u64,
    bucket_bits: u32,
    bucket_width: u64,
    num_buckets: usize,
    /// Per-bucket membership, keyed by offset within the bucket.
    bucket_occ: Vec<WordBitSet>,
    /// Non-empty-bucket bitmap, for O(log log U)-style inter-bucket search.
    bucket_nonempty: WordBitSet,
    values: Vec<HashMap<u32, V>>,
    counts: Vec<u32>,
}

impl<V: Copy> DynamicUniverseSampling<V> {
    /// `bucket_bits` is `b`; bucket width is `2^b`.
    pub fn new(universe: u64, bucket_bits: u32) -> Self {
        let bucket_width = 1u64 << bucket_bits;
        let num_buckets = universe.div_ceil(bucket_width) as usize;
        let bucket_occ = (0..num_buckets)
            .map(|_| WordBitSet::new(bucket_width as usize))
            .collect();
        DynamicUniverseSampling {
            universe,
            bucket_bits,
            bucket_width,
            num_buckets,
            bucket_occ,
            bucket_nonempty: WordBitSet::new(num_buckets),
            values: (0..num_buckets).map(|_| HashMap::new()).collect(),
            counts: vec![0; num_buckets],
        }
    }

    #[inline]
    fn split(&self, k: u64) -> (usize, u32) {
        debug_assert!(k < self.universe);
        ((k >> self.bucket_bits) as usize, (k & (self.bucket_width - 1)) as u32)
    }

    pub fn contains(&self, k: u64) -> bool {
        let (b, local) = self.split(k);
        self.bucket_occ[b].get(local as usize)
    }

    pub fn insert(&mut self, k: u64, v: V) {
        let (b, local) = self.split(k);
        debug_assert!(!self.bucket_occ[b].get(local as usize), "key already present");
        self.bucket_occ[b].set(local as usize);
        self.values[b].insert(local, v);
        if self.counts[b] == 0 {
            self.bucket_nonempty.set(b);
        }
        self.counts[b] += 1;
    }

    pub fn remove(&mut self, k: u64) {
        let (b, local) = self.split(k);
        debug_assert!(self.bucket_occ[b].get(local as usize), "key not present");
        self.bucket_occ[b].clear_bit(local as usize);
        self.values[b].remove(&local);
        self.counts[b] -= 1;
        if self.counts[b] == 0 {
            self.bucket_nonempty.clear_bit(b);
        }
    }

    pub fn clear(&mut self) {
        for b in 0..self.num_buckets {
            if self.counts[b] != 0 {
                self.bucket_occ[b] = WordBitSet::new(self.bucket_width as usize);
                self.values[b].clear();
                self.counts[b] = 0;
            }
        }
        self.bucket_nonempty = WordBitSet::new(self.num_buckets);
    }

    pub fn predecessor(&self, k: u64) -> Option<Entry<V>> {
        let k = k.min(self.universe - 1);
        let (b, local) = self.split(k);
        if let Some(p) = self.bucket_occ[b].pred_le(local as usize) {
            return Some(Entry {
                key: (b as u64) * self.bucket_width + p as u64,
                value: self.values[b][&(p as u32)],
            });
        }
        if b == 0 {
            return None;
        }
        let pb = self.bucket_nonempty.pred_le(b - 1)?;
        let p = self.bucket_occ[pb].pred_le(self.bucket_width as usize - 1)?;
        Some(Entry {
            key: (pb as u64) * self.bucket_width + p as u64,
            value: self.values[pb][&(p as u32)],
        })
    }

    pub fn successor(&self, k: u64) -> Option<Entry<V>> {
        if k >= self.universe {
            return None;
        }
        let (b, local) = self.split(k);
        if let Some(s) = self.bucket_occ[b].succ_ge(local as usize) {
            return Some(Entry {
                key: (b as u64) * self.bucket_width + s as u64,
                value: self.values[b][&(s as u32)],
            });
        }
        let sb = self.bucket_nonempty.succ_ge(b + 1)?;
        let s = self.bucket_occ[sb].succ_ge(0)?;
        Some(Entry {
            key: (sb as u64) * self.bucket_width + s as u64,
            value: self.values[sb][&(s as u32)],
        })
    }
}
