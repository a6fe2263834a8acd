// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{degree_of, div, eval, eval_many, interpolate, mul};
use crate::fields::f32::BaseElement;
use crate::FieldElement;

fn build_poly(coefficients: &[u32]) -> Vec<BaseElement> {
    coefficients.iter().map(|&c| BaseElement::new(c)).collect()
}

#[test]
fn eval_poly() {
    // p(x) = 4x^3 + 3x^2 + 2x + 1
    let p = build_poly(&[1, 2, 3, 4]);

    assert_eq!(BaseElement::new(1), eval(&p, BaseElement::ZERO));
    assert_eq!(BaseElement::new(10), eval(&p, BaseElement::ONE));
    assert_eq!(BaseElement::new(49), eval(&p, BaseElement::new(2)));

    // empty polynomial evaluates to zero
    assert_eq!(BaseElement::ZERO, eval(&[], BaseElement::new(2)));
}

#[test]
fn interpolate_roundtrip() {
    let p = build_poly(&[7, 1, 0, 5]);
    let xs = (1u32..=4).map(BaseElement::new).collect::<Vec<_>>();
    let ys = eval_many(&p, &xs);

    let interpolated = interpolate(&xs, &ys, true);
    assert_eq!(p, interpolated);
}

#[test]
fn mul_div() {
    // (x + 1) * (x + 2) = x^2 + 3x + 2
    let a = build_poly(&[1, 1]);
    let b = build_poly(&[2, 1]);
    let c = mul(&a, &b);
    assert_eq!(build_poly(&[2, 3, 1]), c);
    assert_eq!(a, div(&c, &b));
    assert_eq!(b, div(&c, &a));
}

#[test]
fn degree() {
    assert_eq!(0, degree_of(&build_poly(&[1])));
    assert_eq!(1, degree_of(&build_poly(&[1, 2])));
    assert_eq!(1, degree_of(&build_poly(&[1, 2, 0])));
    assert_eq!(3, degree_of(&build_poly(&[1, 2, 0, 3])));
}
