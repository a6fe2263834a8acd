// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::RandomCoin;
use crate::hash::{Blake2s_256, Hasher, Sha2_256};
use math::fields::f32::BaseElement;

type Sha2Coin = RandomCoin<BaseElement, Sha2_256>;

#[test]
fn draw_is_deterministic() {
    let seed = Sha2_256::hash(b"commitment");

    let mut coin1 = Sha2Coin::new(seed);
    let mut coin2 = Sha2Coin::new(seed);
    for _ in 0..10 {
        assert_eq!(coin1.draw().unwrap(), coin2.draw().unwrap());
    }

    // a different seed produces a different stream
    let mut coin3 = Sha2Coin::new(Sha2_256::hash(b"other commitment"));
    let mut coin1 = Sha2Coin::new(seed);
    assert_ne!(coin1.draw().unwrap(), coin3.draw().unwrap());
}

#[test]
fn draw_many_elements_are_distinct() {
    let mut coin = Sha2Coin::new(Sha2_256::hash(b"seed"));
    let elements = coin.draw_many(16).unwrap();
    for (i, a) in elements.iter().enumerate() {
        for b in elements.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn draw_integers() {
    let num_values = 20;
    let domain_size = 64;

    let mut coin = Sha2Coin::new(Sha2_256::hash(b"seed"));
    let values = coin.draw_integers(num_values, domain_size, 0).unwrap();

    assert_eq!(num_values, values.len());
    for (i, &value) in values.iter().enumerate() {
        assert!(value < domain_size);
        assert!(!values[i + 1..].contains(&value), "duplicate value drawn");
    }

    // deterministic for the same seed
    let mut coin = Sha2Coin::new(Sha2_256::hash(b"seed"));
    assert_eq!(values, coin.draw_integers(num_values, domain_size, 0).unwrap());
}

#[test]
fn draw_integers_with_exclude_stride() {
    let mut coin = RandomCoin::<BaseElement, Blake2s_256>::new(Blake2s_256::hash(b"seed"));
    let values = coin.draw_integers(48, 1024, 8).unwrap();

    assert_eq!(48, values.len());
    for &value in values.iter() {
        assert!(value < 1024);
        assert_ne!(0, value % 8, "excluded position {} was drawn", value);
    }
}
