use nulstr::{make_nulstr, BoundedSegments, NulstrIter, NulstrPairIter, Strv};

#[test]
fn test_nulstr_iter_empty() {
    let mut iter = NulstrIter::new(b"");
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));

    let mut iter = NulstrIter::new(b"\0\0");
    assert_eq!(iter.next(), None);
}

#[test]
fn test_nulstr_iter_populated() {
    let mut iter = NulstrIter::new(b"hello\0world\0\0trailing\0\0");

    assert_eq!(iter.next(), Some(&b"hello"[..]));
    assert_eq!(iter.next(), Some(&b"world"[..]));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_nulstr_iter_via_nulstr() {
    let nulstr = make_nulstr(Some(&["a", "b"][..])).unwrap();

    let collected: Vec<_> = nulstr.iter().collect();
    assert_eq!(collected, vec![&b"a"[..], &b"b"[..]]);

    let mut count = 0;
    for _ in &nulstr {
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_nulstr_iter_size_hint_upper_bound() {
    let data = b"a\0b\0c\0\0";
    let iter = NulstrIter::new(data);
    let (_, upper) = iter.size_hint();
    assert!(upper.unwrap() >= iter.clone().count());
}

#[test]
fn test_pair_iter_even_elements() {
    let pairs: Vec<_> = NulstrPairIter::new(b"key1\0value1\0key2\0value2\0\0").collect();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], (&b"key1"[..], &b"value1"[..]));
    assert_eq!(pairs[1], (&b"key2"[..], &b"value2"[..]));
}

#[test]
fn test_pair_iter_ignores_unpaired_element() {
    let pairs: Vec<_> = NulstrPairIter::new(b"key1\0value1\0key2\0\0").collect();

    assert_eq!(pairs, vec![(&b"key1"[..], &b"value1"[..])]);
}

#[test]
fn test_bounded_segments_exact_size() {
    let mut iter = BoundedSegments::new(b"a\0\0b");
    assert_eq!(iter.len(), 3);

    assert_eq!(iter.next(), Some(&b"a"[..]));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&b""[..]));
    assert_eq!(iter.next(), Some(&b"b"[..]));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_bounded_segments_trailing_nul() {
    let collected: Vec<_> = BoundedSegments::new(b"a\0b\0").collect();
    assert_eq!(collected, vec![&b"a"[..], &b"b"[..]]);
}

#[test]
fn test_strv_iter_both_directions() {
    let strv: Strv = [&b"first"[..], b"second", b"third"].into_iter().collect();

    let mut iter = strv.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.next(), Some(&b"first"[..]));
    assert_eq!(iter.next_back(), Some(&b"third"[..]));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&b"second"[..]));
    assert_eq!(iter.next(), None);

    let reversed: Vec<_> = strv.iter().rev().collect();
    assert_eq!(reversed, vec![&b"third"[..], &b"second"[..], &b"first"[..]]);
}
