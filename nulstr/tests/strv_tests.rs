use nulstr::{NulstrError, Strv};

#[test]
fn test_strv_initialization() {
    let strv = Strv::new();
    assert_eq!(strv.len(), 0);
    assert!(strv.is_empty());
    assert!(strv.get(0).is_none());
}

#[test]
fn test_strv_with_capacity() {
    let strv = Strv::try_with_capacity(16).unwrap();
    assert!(strv.is_empty());
}

#[test]
fn test_strv_extend_copies() {
    let mut strv = Strv::new();
    let mut source = b"hello".to_vec();

    strv.try_extend(&source).unwrap();
    source[0] = b'j';
    strv.try_extend(b"").unwrap();

    assert_eq!(strv.len(), 2);
    assert_eq!(strv.get(0), Some(&b"hello"[..]));
    assert_eq!(strv.get(1), Some(&b""[..]));
    assert_eq!(strv.get(2), None);
}

#[test]
fn test_strv_contains() {
    let strv: Strv = [&b"foo"[..], b"bar"].into_iter().collect();
    assert!(strv.contains(b"foo"));
    assert!(!strv.contains(b"baz"));
}

#[test]
fn test_strv_conversions() {
    let strv = Strv::from(vec![b"a".to_vec(), b"b".to_vec()]);
    assert_eq!(strv, ["a", "b"]);

    let owned: Vec<Vec<u8>> = strv.clone().into_iter().collect();
    assert_eq!(owned, strv.into_inner());
}

#[test]
fn test_strv_comparison_with_slices() {
    let strv: Strv = [&b"x"[..], b"y"].into_iter().collect();

    assert_eq!(strv, [b"x", b"y"]);
    assert_ne!(strv, [b"x"]);
    assert_ne!(strv, [b"y", b"x"]);
}

#[test]
fn test_error_display() {
    let err = NulstrError::OutOfMemory { requested: 42 };
    assert_eq!(
        err.to_string(),
        "Out of memory: failed to reserve 42 more elements"
    );
}

#[test]
fn test_huge_capacity_reports_out_of_memory() {
    let result = Strv::try_with_capacity(usize::MAX);
    assert_eq!(
        result.unwrap_err(),
        NulstrError::OutOfMemory {
            requested: usize::MAX
        }
    );
}
