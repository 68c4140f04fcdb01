//! The LZ-End parsing store: an append-only sequence of phrases supporting
//! reverse decoding by following phrase links.
//!
//! Grounded in `original_source/include/lzend_parsing.hpp` and
//! `lzend_phrase.hpp`, with one deliberate correction to this crate's
//! design notes: the reverse-decode stack is owned per call, never a
//! process-global `static` (the retrieved C++ header uses exactly such a
//! static queue, a concurrency and re-entrancy hazard avoided here).

/// 1-based phrase identifier; `0` is the phantom empty phrase.
pub type PhraseId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub link: PhraseId,
    pub len: u32,
    pub last: u8,
}

pub struct LZEndParsing {
    phrases: Vec<Phrase>,
    /// `prefix_len[i] = sum of phrases[0..=i].len`, so `prefix_len[0] == 0`
    /// (the phantom phrase) and the end position (0-based) of phrase `i`
    /// is `prefix_len[i] - 1`.
    prefix_len: Vec<u64>,
}

impl Default for LZEndParsing {
    fn default() -> Self {
        Self::new()
    }
}

impl LZEndParsing {
    pub fn new() -> Self {
        LZEndParsing {
            phrases: vec![Phrase { link: 0, len: 0, last: 0 }],
            prefix_len: vec![0],
        }
    }

    /// Number of real phrases (excludes the phantom phrase 0).
    pub fn size(&self) -> usize {
        self.phrases.len() - 1
    }

    pub fn total_len(&self) -> u64 {
        *self.prefix_len.last().unwrap()
    }

    pub fn phrase(&self, id: PhraseId) -> Phrase {
        self.phrases[id as usize]
    }

    pub fn phrase_len(&self, id: PhraseId) -> u32 {
        self.phrases[id as usize].len
    }

    /// 0-based text position of the last byte of phrase `id`.
    pub fn end_pos(&self, id: PhraseId) -> u64 {
        debug_assert!(id >= 1 && (id as usize) < self.phrases.len());
        self.prefix_len[id as usize] - 1
    }

    pub fn append(&mut self, link: PhraseId, len: u32, last: u8) -> PhraseId {
        debug_assert!((link as usize) < self.phrases.len(), "link must reference an existing phrase");
        self.phrases.push(Phrase { link, len, last });
        let new_total = self.total_len() + len as u64;
        self.prefix_len.push(new_total);
        (self.phrases.len() - 1) as PhraseId
    }

    pub fn pop_last(&mut self) -> Phrase {
        debug_assert!(self.size() > 0, "cannot pop the phantom phrase");
        self.prefix_len.pop();
        self.phrases.pop().unwrap()
    }

    pub fn replace_last(&mut self, link: PhraseId, len: u32, last: u8) {
        self.pop_last();
        self.append(link, len, last);
    }

    /// Returns the phrase id covering 0-based text position `text_pos`
    /// (the phrase whose span `[prefix_len[id-1], prefix_len[id])` contains
    /// it), found by binary search over the prefix-sum array.
    pub fn phrase_at(&self, text_pos: u64) -> PhraseId {
        debug_assert!(text_pos < self.total_len());
        // First index i (>=1) with prefix_len[i] > text_pos.
        let mut lo = 1usize;
        let mut hi = self.phrases.len() - 1;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.prefix_len[mid] > text_pos {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo as PhraseId
    }

    /// Emits the last `k` bytes of the text ending at the end of phrase
    /// `p`, in reverse order, to `sink`. Stops early if `sink` returns
    /// `false`. Uses an explicitly owned LIFO stack, never global state.
    pub fn decode_reverse_from_end_of(&self, p: PhraseId, k: u64, mut sink: impl FnMut(u8) -> bool) {
        let mut stack: Vec<(PhraseId, u64)> = vec![(p, k)];
        while let Some((mut p, mut k)) = stack.pop() {
            let plen = self.phrases[p as usize].len as u64;
            if k > plen {
                stack.push((p - 1, k - plen));
                k = plen;
            }
            if !sink(self.phrases[p as usize].last) {
                return;
            }
            if k > 1 {
                stack.push((self.phrases[p as usize].link, k - 1));
            }
            let _ = &mut p; // p no longer used past this point
        }
    }
}
