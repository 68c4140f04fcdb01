//! Suffix array, inverse suffix array, and LCP array construction.
//!
//! Any O(n log n)-or-better construction is acceptable here (an upstream
//! reference implementation delegates to `libsais` externally); this crate
//! builds its own, grounded in a from-scratch `SuffixTable` construction
//! retrieved from the example pack (a prefix-doubling rank sort),
//! simplified to operate on raw bytes only (no generic/UTF-8 alphabet
//! abstraction, consistent with the 8-bit-alphabet non-goal). This is
//! `O(n log^2 n)` comparisons rather than the linear-time DC3/SA-IS
//! construction — a documented trade-off, see `DESIGN.md`. The LCP array
//! is then derived in `O(n)` via Kasai's algorithm, which is the standard
//! pairing for this construction.

/// Suffix array, inverse suffix array, and LCP array of `text` (expected
/// to already carry its sentinel byte, as the window index does).
///
/// `lcp[0]` is `0` by convention (undefined: there is no suffix before
/// `sa[0]`). For `i > 0`, `lcp[i]` is the length of the common prefix of
/// the suffixes at `sa[i-1]` and `sa[i]`.
pub fn sa_isa_lcp(text: &[u8]) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    let sa = build_sa(text);
    let isa = invert(&sa);
    let lcp = kasai_lcp(text, &sa, &isa);
    (
        sa.into_iter().map(|x| x as u32).collect(),
        isa.into_iter().map(|x| x as u32).collect(),
        lcp,
    )
}

fn build_sa(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&b| b as i64).collect();
    let mut tmp = vec![0i64; n];
    let mut k = 1usize;

    let key = |i: usize, rank: &[i64], k: usize| -> (i64, i64) {
        let a = rank[i];
        let b = if i + k < n { rank[i + k] } else { -1 };
        (a, b)
    };

    loop {
        sa.sort_unstable_by_key(|&i| key(i, &rank, k));
        tmp[sa[0]] = 0;
        for i in 1..n {
            let prev = key(sa[i - 1], &rank, k);
            let cur = key(sa[i], &rank, k);
            tmp[sa[i]] = tmp[sa[i - 1]] + if cur > prev { 1 } else { 0 };
        }
        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        if k >= n {
            break;
        }
        k *= 2;
    }
    sa
}

fn invert(sa: &[usize]) -> Vec<usize> {
    let mut isa = vec![0usize; sa.len()];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[pos] = rank;
    }
    isa
}

fn kasai_lcp(text: &[u8], sa: &[usize], isa: &[usize]) -> Vec<u32> {
    let n = text.len();
    let mut lcp = vec![0u32; n];
    let mut h = 0usize;
    for i in 0..n {
        if isa[i] > 0 {
            let j = sa[isa[i] - 1];
            while i + h < n && j + h < n && text[i + h] == text[j + h] {
                h += 1;
            }
            lcp[isa[i]] = h as u32;
            if h > 0 {
                h -= 1;
            }
        } else {
            h = 0;
        }
    }
    lcp
}
