//! End-to-end protocol tests over the public API.

use num_bigint::{BigUint, RandBigInt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use threshold_elgamal::{
    combine_partials, decrypt_message, derive_key, encrypt_message, partial_decrypt,
    split_secret, weights_at_zero, EncryptedEnvelope, GroupParameters, HybridError, Keypair,
    PartialDecryption, SharedSecret,
};

// p = 607, q = 101 (606 = 2 * 3 * 101), g = 3^6 mod 607 = 122 has order 101.
fn small_group() -> GroupParameters {
    GroupParameters::new(
        BigUint::from(607u32),
        BigUint::from(101u32),
        BigUint::from(122u32),
    )
    .unwrap()
}

// p = 2579 (safe prime, 2578 = 2 * 1289), q = 1289, g = 2^2 = 4 has order 1289.
fn larger_group() -> GroupParameters {
    GroupParameters::new(
        BigUint::from(2579u32),
        BigUint::from(1289u32),
        BigUint::from(4u32),
    )
    .unwrap()
}

/// Runs one full decryption round for a fixed quorum and returns both the
/// directly computed and the threshold-combined shared secret.
fn run_quorum(
    params: &GroupParameters,
    secret: &BigUint,
    big_b: &BigUint,
    shares: &[threshold_elgamal::Share],
    quorum: &[u32],
) -> (SharedSecret, SharedSecret) {
    let s_direct = SharedSecret::new(big_b.modpow(secret, params.p()));

    let weights = weights_at_zero(quorum, params.q()).unwrap();
    let partials: Vec<PartialDecryption> = quorum
        .iter()
        .map(|&i| {
            let share = shares.iter().find(|s| s.index == i).unwrap();
            partial_decrypt(big_b, share, params.p())
        })
        .collect();
    let s_threshold = combine_partials(&partials, &weights, params.p()).unwrap();

    (s_direct, s_threshold)
}

#[test]
fn welcome_message_roundtrip() {
    // t = 2, n = 5, quorum {1, 3, 5}.
    let params = small_group();
    let mut rng = StdRng::seed_from_u64(0xE16A3A1);

    let keypair = Keypair::generate(&params, &mut rng);
    let shares = split_secret(&keypair.secret, 2, 5, params.q(), &mut rng).unwrap();

    let ephemeral = Keypair::generate(&params, &mut rng);
    let (s_direct, s_threshold) = run_quorum(
        &params,
        &keypair.secret,
        &ephemeral.public,
        &shares,
        &[1, 3, 5],
    );
    assert_eq!(s_direct, s_threshold);

    let key = derive_key(&s_threshold);
    let message = b"Welcome to my Threshold ElGamal project!";
    let envelope = encrypt_message(&key, message).unwrap();

    // The receiving side re-derives the key from its own combination.
    let receiver_key = derive_key(&s_direct);
    let recovered = decrypt_message(&receiver_key, &envelope).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn all_quorums_agree() {
    let params = small_group();
    let mut rng = StdRng::seed_from_u64(0xA11);

    let a = rng.gen_biguint_below(params.q());
    let shares = split_secret(&a, 2, 5, params.q(), &mut rng).unwrap();

    let b_exp = rng.gen_biguint_below(params.q());
    let big_b = params.g().modpow(&b_exp, params.p());

    // Every size-3 quorum out of 5 shares must produce the same secret.
    let quorums: [[u32; 3]; 10] = [
        [1, 2, 3],
        [1, 2, 4],
        [1, 2, 5],
        [1, 3, 4],
        [1, 3, 5],
        [1, 4, 5],
        [2, 3, 4],
        [2, 3, 5],
        [2, 4, 5],
        [3, 4, 5],
    ];
    for quorum in &quorums {
        let (s_direct, s_threshold) = run_quorum(&params, &a, &big_b, &shares, quorum);
        assert_eq!(s_direct, s_threshold, "quorum {:?} disagreed", quorum);
    }
}

#[test]
fn quorum_order_does_not_matter() {
    let params = larger_group();
    let mut rng = StdRng::seed_from_u64(0x0D3);

    let a = rng.gen_biguint_below(params.q());
    let shares = split_secret(&a, 2, 5, params.q(), &mut rng).unwrap();
    let b_exp = rng.gen_biguint_below(params.q());
    let big_b = params.g().modpow(&b_exp, params.p());

    for quorum in [[5u32, 1, 3], [3, 5, 1], [1, 3, 5]] {
        let (s_direct, s_threshold) = run_quorum(&params, &a, &big_b, &shares, &quorum);
        assert_eq!(s_direct, s_threshold);
    }
}

#[test]
fn threshold_equivalence_on_larger_group() {
    let params = larger_group();
    let mut rng = StdRng::seed_from_u64(0x1289);

    for round in 0..5 {
        let a = rng.gen_biguint_below(params.q());
        let shares = split_secret(&a, 3, 7, params.q(), &mut rng).unwrap();
        let b_exp = rng.gen_biguint_below(params.q());
        let big_b = params.g().modpow(&b_exp, params.p());

        let (s_direct, s_threshold) =
            run_quorum(&params, &a, &big_b, &shares, &[2, 4, 6, 7]);
        assert_eq!(s_direct, s_threshold, "round {}", round);
    }
}

#[test]
fn t_shares_are_consistent_with_any_secret() {
    // Privacy bound: t shares plus a suitably chosen completing share can
    // reconstruct to ANY target value, so t shares alone pin down nothing.
    let params = small_group();
    let q = params.q();
    let mut rng = StdRng::seed_from_u64(0x5EC);

    let a = rng.gen_biguint_below(q);
    let shares = split_secret(&a, 2, 5, q, &mut rng).unwrap();

    // Adversary holds t = 2 shares: indices 1 and 3.
    let held = [shares[0].clone(), shares[2].clone()];

    // For a different candidate secret, solve for the share value at index 5
    // that would make the quorum {1, 3, 5} reconstruct to it:
    //   w1*y1 + w3*y3 + w5*y5 = target  =>  y5 = (target - w1*y1 - w3*y3) / w5
    let target = (&a + BigUint::from(1u32)) % q;
    assert_ne!(target, a);

    let weights = weights_at_zero(&[1, 3, 5], q).unwrap();
    let field = params.exponent_field();
    let w1 = &weights.pairs()[0].1;
    let w3 = &weights.pairs()[1].1;
    let w5 = &weights.pairs()[2].1;

    let partial_sum = field.add(
        &field.mul(w1, &held[0].value),
        &field.mul(w3, &held[1].value),
    );
    let y5 = field.mul(
        &field.sub(&target, &partial_sum),
        &field.inv(w5).unwrap(),
    );

    let forged = [
        held[0].clone(),
        held[1].clone(),
        threshold_elgamal::Share::new(5, y5).unwrap(),
    ];
    let recovered =
        threshold_elgamal::sharing::reconstruct_secret(&forged, 2, q).unwrap();
    assert_eq!(recovered, target);
}

#[test]
fn tampered_envelope_always_rejected() {
    let params = small_group();
    let mut rng = StdRng::seed_from_u64(0x7A3);

    let keypair = Keypair::generate(&params, &mut rng);
    let shares = split_secret(&keypair.secret, 2, 5, params.q(), &mut rng).unwrap();
    let ephemeral = Keypair::generate(&params, &mut rng);
    let (_, s_threshold) = run_quorum(
        &params,
        &keypair.secret,
        &ephemeral.public,
        &shares,
        &[2, 3, 4],
    );

    let key = derive_key(&s_threshold);
    let envelope = encrypt_message(&key, b"tamper target").unwrap();
    let bytes = envelope.to_bytes();

    for byte_index in 0..bytes.len() {
        for bit in 0..8 {
            let mut tampered = bytes.clone();
            tampered[byte_index] ^= 1 << bit;
            let parsed = EncryptedEnvelope::from_bytes(&tampered).unwrap();
            assert_eq!(
                decrypt_message(&key, &parsed),
                Err(HybridError::AuthenticationFailure),
                "flip at byte {} bit {} went undetected",
                byte_index,
                bit
            );
        }
    }
}
