use lzend::fingerprint::FingerprintView;

fn brute_force_fp(text: &[u8]) -> u64 {
    // Mirrors the internal recurrence without touching private API: build a
    // fresh view over just this slice and read its own last prefix value.
    FingerprintView::new(text).prefix_fp(text.len() - 1)
}

#[test]
fn substring_fingerprint_matches_a_fresh_view_over_the_same_bytes() {
    let text = b"the quick brown fox jumps over the lazy dog the quick brown fox";
    let fp = FingerprintView::new(text);
    for i in 0..text.len() {
        for j in i..text.len() {
            assert_eq!(fp.substring_fp(i, j), brute_force_fp(&text[i..=j]), "i={i} j={j}");
        }
    }
}

#[test]
fn equal_substrings_share_fingerprints_across_the_text() {
    let text = b"abcabcabc";
    let fp = FingerprintView::new(text);
    assert_eq!(fp.substring_fp(0, 2), fp.substring_fp(3, 5));
    assert_eq!(fp.substring_fp(0, 2), fp.substring_fp(6, 8));
    assert_ne!(fp.substring_fp(0, 2), fp.substring_fp(1, 3));
}
