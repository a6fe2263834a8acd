// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{
    evaluate_poly, evaluate_poly_with_offset, get_inv_twiddles, get_twiddles, infer_degree,
    interpolate_poly, interpolate_poly_with_offset,
};
use crate::{fields::f32::BaseElement, get_power_series, polynom, FieldElement, StarkField};
use utils::log2;

fn rand_vector(n: usize) -> Vec<BaseElement> {
    (0..n).map(|_| BaseElement::rand()).collect()
}

#[test]
fn fft_evaluate_poly() {
    let n = 1024;
    let p = rand_vector(n);

    let g = BaseElement::get_root_of_unity(log2(n));
    let domain = get_power_series(g, n);
    let expected = polynom::eval_many(&p, &domain);

    let twiddles = get_twiddles::<BaseElement>(n);
    let mut actual = p;
    evaluate_poly(&mut actual, &twiddles);

    assert_eq!(expected, actual);
}

#[test]
fn fft_evaluate_poly_with_offset() {
    let n = 256;
    let blowup = 8;
    let p = rand_vector(n);

    let g = BaseElement::get_root_of_unity(log2(n * blowup));
    let offset = BaseElement::GENERATOR;
    let domain = get_power_series(g, n * blowup);
    let shifted = domain.iter().map(|&x| x * offset).collect::<Vec<_>>();
    let expected = polynom::eval_many(&p, &shifted);

    let twiddles = get_twiddles::<BaseElement>(n);
    let actual = evaluate_poly_with_offset(&p, &twiddles, offset, blowup);

    assert_eq!(expected, actual);
}

#[test]
fn fft_interpolate_poly() {
    let n = 512;
    let p = rand_vector(n);

    let twiddles = get_twiddles::<BaseElement>(n);
    let mut evaluations = p.clone();
    evaluate_poly(&mut evaluations, &twiddles);

    let inv_twiddles = get_inv_twiddles::<BaseElement>(n);
    interpolate_poly(&mut evaluations, &inv_twiddles);

    assert_eq!(p, evaluations);
}

#[test]
fn fft_interpolate_poly_with_offset() {
    let n = 512;
    let offset = BaseElement::GENERATOR;
    let p = rand_vector(n / 4);

    let twiddles = get_twiddles::<BaseElement>(n / 4);
    let mut evaluations = evaluate_poly_with_offset(&p, &twiddles, offset, 4);

    let inv_twiddles = get_inv_twiddles::<BaseElement>(n);
    interpolate_poly_with_offset(&mut evaluations, &inv_twiddles, offset);

    assert_eq!(p, evaluations[..p.len()]);
    assert!(evaluations[p.len()..].iter().all(|&e| e == BaseElement::ZERO));
}

#[test]
fn degree_inference() {
    let n = 256;
    // p(x) = x^17 + 2
    let mut p = BaseElement::zeroed_vector(n);
    p[0] = BaseElement::new(2);
    p[17] = BaseElement::ONE;

    let twiddles = get_twiddles::<BaseElement>(n);
    let mut evaluations = p;
    evaluate_poly(&mut evaluations, &twiddles);

    assert_eq!(17, infer_degree(&evaluations, BaseElement::ONE));
}
