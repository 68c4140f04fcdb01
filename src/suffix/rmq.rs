//! Sparse-table range-minimum query over the LCP array.
//!
//! `O(n log n)` preprocessing, `O(1)` query — the "sparse-table hybrid"
//! option allowed as an alternative to a `±1` RMQ.
//! Only the minimum *value* is needed by `marked_lcp`/`marked_lcp2` (the
//! value at the argmin position, which by definition of minimum is the
//! value returned directly), so the table stores values, not indices.

pub struct RangeMinQuery {
    /// `table[k][i] = min(data[i..i + 2^k])`.
    table: Vec<Vec<u32>>,
}

impl RangeMinQuery {
    pub fn new(data: &[u32]) -> Self {
        let n = data.len();
        if n == 0 {
            return RangeMinQuery { table: vec![Vec::new()] };
        }
        let levels = (usize::BITS - n.leading_zeros()) as usize;
        let mut table = vec![data.to_vec()];
        for k in 1..levels {
            let half = 1usize << (k - 1);
            let prev = &table[k - 1];
            let len = n - (1usize << k) + 1;
            let mut row = Vec::with_capacity(len.max(0));
            for i in 0..len {
                row.push(prev[i].min(prev[i + half]));
            }
            table.push(row);
        }
        RangeMinQuery { table }
    }

    /// Minimum of `data[l..=r]`. `l` and `r` must be valid indices with
    /// `l <= r`.
    pub fn query(&self, l: usize, r: usize) -> u32 {
        debug_assert!(l <= r);
        let len = r - l + 1;
        let k = (usize::BITS - len.leading_zeros() - 1) as usize;
        let half = 1usize << k;
        let row = &self.table[k];
        row[l].min(row[r + 1 - half])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_min(data: &[u32], l: usize, r: usize) -> u32 {
        *data[l..=r].iter().min().unwrap()
    }

    #[test]
    fn matches_naive_on_all_ranges() {
        let data: Vec<u32> = vec![5, 2, 4, 7, 1, 3, 9, 0, 6, 8, 2, 2];
        let rmq = RangeMinQuery::new(&data);
        for l in 0..data.len() {
            for r in l..data.len() {
                assert_eq!(rmq.query(l, r), naive_min(&data, l, r), "l={l} r={r}");
            }
        }
    }

    #[test]
    fn single_element() {
        let data = vec![42u32];
        let rmq = RangeMinQuery::new(&data);
        assert_eq!(rmq.query(0, 0), 42);
    }
}
