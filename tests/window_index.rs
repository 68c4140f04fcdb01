use lzend::window_index::WindowIndex;

#[test]
fn marking_a_repeated_suffix_lets_a_later_query_find_it() {
    let mut idx = WindowIndex::new(b"abcabc");
    idx.mark(2, 42);
    let (link, lce) = idx.marked_lcp(5);
    assert_eq!(link, 42);
    assert_eq!(lce, 3);
}

#[test]
fn unmark_removes_a_position_from_consideration() {
    let mut idx = WindowIndex::new(b"abcabc");
    idx.mark(2, 42);
    idx.unmark(2);
    let (link, _) = idx.marked_lcp(5);
    assert_eq!(link, 0);
}

#[test]
fn reverse_fp_is_equal_for_equal_runs() {
    let idx = WindowIndex::new(b"xyzxyzxyz");
    assert_eq!(idx.reverse_fp(0, 3), idx.reverse_fp(3, 6));
    assert_eq!(idx.reverse_fp(0, 3), idx.reverse_fp(6, 9));
}
