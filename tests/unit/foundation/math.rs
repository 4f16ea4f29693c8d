use super::*;

#[test]
fn fnv_hash_is_stable_across_chunking() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"thumbkit");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"thumb");
    b.write_bytes(b"kit");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn hash_bytes_separates_lengths() {
    assert_ne!(hash_bytes(b""), hash_bytes(b"\0"));
    assert_eq!(hash_bytes(b"font"), hash_bytes(b"font"));
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(200, 0), 0);
}
