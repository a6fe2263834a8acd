// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    verifier::{verify, VerifierChannel},
    DefaultProverChannel, FriOptions, FriProver, LowDegreeProof, VerifierError,
};
use crypto::{Hasher, Sha2_256};
use math::{fft, fields::f32::BaseElement, get_power_series, FieldElement, StarkField};
use utils::{log2, ByteReader, Serializable, SliceReader};

// TEST PARAMETERS
// ================================================================================================

const TRACE_LENGTH: usize = 256;
const BLOWUP_FACTOR: usize = 8;
const DOMAIN_SIZE: usize = TRACE_LENGTH * BLOWUP_FACTOR;
const NUM_QUERIES: usize = 32;

// TESTS
// ================================================================================================

#[test]
fn fri_prove_verify() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();

    let proof = build_proof(&evaluations, &domain, &options, &positions);

    // the proof must verify against the original evaluations
    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    let channel = VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options)
        .expect("failed to parse proof");
    assert_eq!(Ok(()), verify(&channel, &queried, &positions, TRACE_LENGTH));
}

#[test]
fn fri_proof_serialization_roundtrip() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let proof = build_proof(&evaluations, &domain, &options, &positions);

    let proof_bytes = proof.to_bytes();
    let mut reader = SliceReader::new(&proof_bytes);
    let num_layers = options.num_fri_layers(DOMAIN_SIZE);
    let parsed = LowDegreeProof::read_from(&mut reader, num_layers).unwrap();
    assert_eq!(proof, parsed);
    assert!(!reader.has_more_bytes());

    // the parsed proof verifies just like the original
    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    let channel =
        VerifierChannel::<BaseElement, Sha2_256>::new(parsed, DOMAIN_SIZE, &options).unwrap();
    assert_eq!(Ok(()), verify(&channel, &queried, &positions, TRACE_LENGTH));
}

#[test]
fn fri_verify_fails_on_wrong_evaluations() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let proof = build_proof(&evaluations, &domain, &options, &positions);

    let mut queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    queried[2] += BaseElement::ONE;

    let channel =
        VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options).unwrap();
    assert_eq!(
        Err(VerifierError::LinearCombinationMismatch(positions[2])),
        verify(&channel, &queried, &positions, TRACE_LENGTH)
    );
}

#[test]
fn fri_verify_fails_on_smaller_degree_bound() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let proof = build_proof(&evaluations, &domain, &options, &positions);

    // the codeword has degree just below TRACE_LENGTH, so claiming a bound
    // four times smaller must be rejected by the remainder check
    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    let channel =
        VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options).unwrap();
    let result = verify(&channel, &queried, &positions, TRACE_LENGTH / 4);
    assert!(matches!(result, Err(VerifierError::RemainderDegreeMismatch(_))));
}

#[test]
fn fri_verify_fails_on_tampered_layer_nodes() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let mut proof = build_proof(&evaluations, &domain, &options, &positions);

    // flip a byte inside the interior nodes of the second component
    let byte_idx = proof.components[1].column_proof.paths.len() / 2;
    proof.components[1].column_proof.paths[byte_idx] ^= 1;

    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    match VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options) {
        // the flipped byte may corrupt the node encoding itself
        Err(VerifierError::LayerDeserializationError(1, _)) => (),
        Err(err) => panic!("unexpected parse error: {}", err),
        Ok(channel) => assert_eq!(
            Err(VerifierError::LayerCommitmentMismatch(1)),
            verify(&channel, &queried, &positions, TRACE_LENGTH)
        ),
    }
}

#[test]
fn fri_verify_fails_on_tampered_column_root() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let mut proof = build_proof(&evaluations, &domain, &options, &positions);

    // mutating a column root changes the positions and folding randomness
    // the verifier re-derives, so the openings no longer match
    proof.components[0].column_root = Sha2_256::hash(b"wrong root");

    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    let channel =
        VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options).unwrap();
    assert!(verify(&channel, &queried, &positions, TRACE_LENGTH).is_err());
}

#[test]
fn fri_verify_fails_on_tampered_remainder() {
    let (evaluations, domain, options) = build_fri_inputs();
    let positions = test_positions();
    let mut proof = build_proof(&evaluations, &domain, &options, &positions);

    // replace one remainder element with a different field element
    proof.remainder[0] ^= 1;

    let queried = positions.iter().map(|&p| evaluations[p]).collect::<Vec<_>>();
    match VerifierChannel::<BaseElement, Sha2_256>::new(proof, DOMAIN_SIZE, &options) {
        // the flipped byte may produce a non-canonical field element
        Err(VerifierError::RemainderDeserializationError(_)) => (),
        Err(err) => panic!("unexpected parse error: {}", err),
        Ok(channel) => {
            let result = verify(&channel, &queried, &positions, TRACE_LENGTH);
            assert!(matches!(
                result,
                Err(VerifierError::RemainderCommitmentMismatch)
                    | Err(VerifierError::RemainderDegreeMismatch(_))
            ));
        }
    }
}

#[test]
fn fri_prover_self_check_catches_high_degree() {
    // evaluations of a polynomial with degree above the claimed bound; the
    // prover's remainder self-check must refuse to produce the proof
    let mut p = (0..TRACE_LENGTH * 2).map(|i| BaseElement::new(i as u32 + 1)).collect::<Vec<_>>();
    p.resize(DOMAIN_SIZE, BaseElement::ZERO);
    let twiddles = fft::get_twiddles::<BaseElement>(DOMAIN_SIZE);
    let mut evaluations = p;
    fft::evaluate_poly(&mut evaluations, &twiddles);

    let g = BaseElement::get_root_of_unity(log2(DOMAIN_SIZE));
    let domain = get_power_series(g, DOMAIN_SIZE);
    let options = FriOptions::new(BLOWUP_FACTOR, NUM_QUERIES);

    let mut channel = DefaultProverChannel::<BaseElement, Sha2_256>::new();
    let mut prover = FriProver::new(options);
    prover.build_layers(&mut channel, evaluations, &domain).unwrap();
    assert!(prover.build_proof(&test_positions(), TRACE_LENGTH).is_err());
}

// TEST UTILS
// ================================================================================================

fn build_fri_inputs() -> (Vec<BaseElement>, Vec<BaseElement>, FriOptions) {
    // evaluations of a random-looking polynomial with degree TRACE_LENGTH - 1
    // over a domain BLOWUP_FACTOR times larger
    let mut p = (0..TRACE_LENGTH).map(|i| BaseElement::new(i as u32 * 19 + 3)).collect::<Vec<_>>();
    p.resize(DOMAIN_SIZE, BaseElement::ZERO);
    let twiddles = fft::get_twiddles::<BaseElement>(DOMAIN_SIZE);
    fft::evaluate_poly(&mut p, &twiddles);

    let g = BaseElement::get_root_of_unity(log2(DOMAIN_SIZE));
    let domain = get_power_series(g, DOMAIN_SIZE);

    (p, domain, FriOptions::new(BLOWUP_FACTOR, NUM_QUERIES))
}

fn test_positions() -> Vec<usize> {
    vec![2, 11, 77, 561, 1023, 1981]
}

fn build_proof(
    evaluations: &[BaseElement],
    domain: &[BaseElement],
    options: &FriOptions,
    positions: &[usize],
) -> LowDegreeProof {
    let mut channel = DefaultProverChannel::<BaseElement, Sha2_256>::new();
    let mut prover = FriProver::new(options.clone());
    prover
        .build_layers(&mut channel, evaluations.to_vec(), domain)
        .expect("failed to build FRI layers");
    prover.build_proof(positions, TRACE_LENGTH).expect("failed to build FRI proof")
}
