// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Runnable examples for the Glacier STARK prover and verifier.

use glacier::{ConfigurationError, HashAlgorithm, ProofOptions, StarkProof, VerifierError};
use structopt::StructOpt;

pub mod fibonacci;

// EXAMPLE TRAIT
// ================================================================================================

/// A self-contained computation which can be proven and verified.
pub trait Example {
    /// Generates a proof of the example computation.
    fn prove(&self) -> StarkProof;

    /// Verifies the provided proof against the example's public inputs.
    fn verify(&self, proof: StarkProof) -> Result<(), VerifierError>;

    /// Verifies the provided proof against wrong public inputs; this is
    /// expected to fail.
    fn verify_with_wrong_inputs(&self, proof: StarkProof) -> Result<(), VerifierError>;
}

// EXAMPLE OPTIONS
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "glacier-demos", about = "Glacier STARK examples")]
pub struct ExampleOptions {
    #[structopt(subcommand)]
    pub example: ExampleType,

    /// Hash function used in the protocol
    #[structopt(short = "h", long = "hash_fn", default_value = "sha256")]
    hash_fn: String,

    /// Blowup factor for low-degree extension
    #[structopt(short = "b", long = "blowup")]
    extension_factor: Option<usize>,

    /// Number of execution spot checks to include in a proof
    #[structopt(short = "q", long = "queries")]
    exe_query_count: Option<usize>,

    /// Number of spot checks per FRI layer
    #[structopt(short = "f", long = "fri_queries")]
    fri_query_count: Option<usize>,
}

impl ExampleOptions {
    /// Converts CLI options into protocol options for a constraint system of
    /// the specified maximum degree, applying defaults where no explicit
    /// value was given.
    pub fn to_proof_options(
        &self,
        max_constraint_degree: usize,
    ) -> Result<ProofOptions, ConfigurationError> {
        let hash_algorithm = match self.hash_fn.as_str() {
            "sha256" => HashAlgorithm::Sha2_256,
            "blake2s256" => HashAlgorithm::Blake2s_256,
            value => panic!("'{}' is not a valid hash function option", value),
        };

        let defaults = ProofOptions::default_for_degree(max_constraint_degree);
        ProofOptions::new(
            hash_algorithm,
            self.extension_factor.unwrap_or_else(|| defaults.extension_factor()),
            self.exe_query_count.unwrap_or_else(|| defaults.exe_query_count()),
            self.fri_query_count.unwrap_or_else(|| defaults.fri_query_count()),
        )
    }
}

#[derive(StructOpt, Debug)]
pub enum ExampleType {
    /// Computes a double-step Fibonacci sequence
    Fib {
        /// Number of steps in the execution trace
        #[structopt(short = "n", default_value = "8192")]
        sequence_length: usize,
    },
}
