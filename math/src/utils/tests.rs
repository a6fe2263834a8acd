// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{batch_inversion, get_power_series, get_power_series_with_offset};
use crate::fields::f32::BaseElement;
use crate::FieldElement;

#[test]
fn power_series() {
    let n = 1024;
    let b = BaseElement::new(3);

    let expected = (0..n).map(|p| b.exp(p as u64)).collect::<Vec<_>>();
    assert_eq!(expected, get_power_series(b, n));

    let s = BaseElement::new(7);
    let expected = (0..n).map(|p| s * b.exp(p as u64)).collect::<Vec<_>>();
    assert_eq!(expected, get_power_series_with_offset(b, s, n));
}

#[test]
fn batch_inv() {
    let values = (0..64u32).map(BaseElement::new).collect::<Vec<_>>();
    let inverses = batch_inversion(&values);

    assert_eq!(values.len(), inverses.len());
    // zero maps to zero
    assert_eq!(BaseElement::ZERO, inverses[0]);
    for (&value, &inverse) in values.iter().zip(inverses.iter()).skip(1) {
        assert_eq!(BaseElement::ONE, value * inverse);
    }
}
