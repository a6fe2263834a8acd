// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use glacier_demos::{fibonacci, ExampleOptions, ExampleType};
use glacier::StarkProof;
use log::debug;
use std::io::Write;
use std::time::Instant;
use structopt::StructOpt;

// EXAMPLE RUNNER
// ================================================================================================

fn main() {
    // configure logging
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(log::LevelFilter::Debug)
        .init();

    // read command-line args
    let options = ExampleOptions::from_args();

    debug!("============================================================");

    // instantiate and prepare the example
    let example = match options.example {
        ExampleType::Fib { sequence_length } => fibonacci::get_example(&options, sequence_length),
    }
    .expect("the example failed to initialize");

    // generate the proof
    let now = Instant::now();
    let proof = example.prove();
    debug!("---------------------\nProof generated in {} ms", now.elapsed().as_millis());

    let proof_bytes = proof.to_bytes();
    debug!("Proof size: {:.1} KB", proof_bytes.len() as f64 / 1024f64);

    // make sure the proof round-trips through serialization, then verify it
    debug!("---------------------");
    let parsed_proof = StarkProof::from_bytes(&proof_bytes).unwrap();
    assert_eq!(proof, parsed_proof);
    let now = Instant::now();
    match example.verify(parsed_proof) {
        Ok(_) => {
            debug!("Proof verified in {:.1} ms", now.elapsed().as_micros() as f64 / 1000f64)
        }
        Err(err) => debug!("Failed to verify proof: {}", err),
    }
    debug!("============================================================");
}
