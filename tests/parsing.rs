use lzend::LZEndParsing;

#[test]
fn phrase_at_follows_the_expected_step_function() {
    let mut p = LZEndParsing::new();
    p.append(0, 1, b'a');
    p.append(0, 1, b'b');
    p.append(2, 3, b'b');
    p.append(3, 5, b'a');
    p.append(4, 8, b'a');

    let expect = [1u32, 2, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5];
    for (i, &want) in expect.iter().enumerate() {
        assert_eq!(p.phrase_at(i as u64), want, "i={i}");
    }
}

#[test]
fn reverse_decode_reconstructs_the_whole_text() {
    let s = b"ababbbabbabbbabbaa";
    let mut p = LZEndParsing::new();
    p.append(0, 1, s[0]);
    p.append(0, 1, s[1]);
    p.append(2, 3, s[4]);
    p.append(3, 5, s[9]);
    p.append(4, 8, s[17]);

    let mut out = Vec::new();
    p.decode_reverse_from_end_of(p.size() as u32, p.total_len(), |b| {
        out.push(b);
        true
    });
    out.reverse();
    assert_eq!(out, s);
}
