use isaac64::{Isaac64Rng, Isaac64Seed, SEED_LEN};
use rand_core::{RngCore, SeedableRng};

#[cfg(feature = "std")]
#[test]
fn test_isaac64_construction() {
    // Test that various construction techniques produce a working RNG.
    let mut rng1 = Isaac64Rng::seed_from_u64(0);
    assert_eq!(rng1.next_u64(), 0x4b73dab7cd5c5cdd);

    let mut rng2 = Isaac64Rng::from_rng(&mut rng1).unwrap();
    let mut rng3 = Isaac64Rng::from_rng(Isaac64Rng::seed_from_u64(0)).unwrap();
    // rng3's source was not advanced, so the two seeds differ by one word
    assert_ne!(rng2.next_u64(), rng3.next_u64());

    let mut bytes = [0u8; SEED_LEN];
    bytes[0] = 1;
    let mut rng4 = Isaac64Rng::from_seed(Isaac64Seed::from(bytes));
    let mut rng5 = Isaac64Rng::new();
    rng5.seed_from(&bytes[..]).unwrap();
    for _ in 0..300 {
        assert_eq!(rng4.next_u64(), rng5.next_u64());
    }
}

#[test]
fn test_isaac64_reference_stream() {
    let mut rng = Isaac64Rng::seed_from_u64(0);
    let mut skip = [0u8; 64 * 256 * 8];
    rng.fill_bytes(&mut skip);

    let mut buf = [0u8; 27 * 8];
    rng.fill_bytes(&mut buf);
    let expected: [u64; 27] = [
        0x76da1d9489e950e0, 0xc1c5482e8b47ba48, 0xb734c4e94c6e03fe,
        0x281c6b8319ee67f9, 0x3f58339754ab4c23, 0x030b5b3e26049fe1,
        0xd582f73a4a41be9b, 0x488bdc4908a24b8f, 0xa0721d57a72d145e,
        0xf399b8eec2bf350b, 0xd30522ee409ee782, 0x9a8f7010f223f282,
        0x88ee43dfc50af116, 0x149fd9bd3ead9db6, 0x97633755ea1f03c5,
        0x057b0a7edf20587f, 0x525a4ea2a98762f2, 0x3f3b47739cb698b3,
        0x3b14d0c4027d589d, 0x9856051346083769, 0xb7d14423e9eea9ac,
        0x17dbf7489d0fffe8, 0x3e0007d504a5784f, 0x7c9a51a719279f8b,
        0x9e9991e53d988ccd, 0x65b68b3d8a2161cc, 0x014d5f57792cd613,
    ];
    for (chunk, &e) in buf.chunks_exact(8).zip(expected.iter()) {
        assert_eq!(chunk, &e.to_le_bytes()[..]);
    }
}

#[test]
fn test_isaac64_trait_object() {
    let mut rng: Box<dyn RngCore> = Box::new(Isaac64Rng::seed_from_u64(0));
    assert_eq!(rng.next_u64(), 0x4b73dab7cd5c5cdd);
    assert_eq!(rng.next_u32(), 0xa89b4c0b);
    let mut buf = [0u8; 8];
    rng.try_fill_bytes(&mut buf).unwrap();
    assert_eq!(u64::from_le_bytes(buf), 0xb37bbb5840ff12c2);
}

#[cfg(feature = "std")]
#[test]
fn test_isaac64_seed_from_short_read() {
    let mut rng = Isaac64Rng::seed_from_u64(1);
    let mut clone = rng.clone();

    let err = rng.seed_from(&[0u8; SEED_LEN - 1][..]).unwrap_err();
    assert_eq!(err.kind(), isaac64::ErrorKind::ShortRead);
    for _ in 0..16 {
        assert_eq!(rng.next_u64(), clone.next_u64());
    }

    let io_err: std::io::Error = err.into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);
}
