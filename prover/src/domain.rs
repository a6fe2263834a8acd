// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use common::ComputationContext;
use math::{fft, get_power_series, StarkField};

// STARK DOMAIN
// ================================================================================================

/// Evaluation domains and cached twiddles for a single proving run.
pub struct StarkDomain<B: StarkField> {
    /// All values of the low-degree extension domain, in natural (g^i)
    /// order. The trace domain is embedded in it at stride positions.
    lde_domain: Vec<B>,

    /// Twiddles used to evaluate trace polynomials; length is half the
    /// trace length.
    trace_twiddles: Vec<B>,

    /// Twiddles used to interpolate trace registers into polynomials.
    trace_inv_twiddles: Vec<B>,

    extension_factor: usize,
}

impl<B: StarkField> StarkDomain<B> {
    /// Returns a new domain initialized for the provided context.
    pub fn new(context: &ComputationContext) -> Self {
        let g = context.get_lde_domain_generator::<B>();
        StarkDomain {
            lde_domain: get_power_series(g, context.lde_domain_size()),
            trace_twiddles: fft::get_twiddles(context.trace_length()),
            trace_inv_twiddles: fft::get_inv_twiddles(context.trace_length()),
            extension_factor: context.extension_factor(),
        }
    }

    // EXECUTION TRACE
    // --------------------------------------------------------------------------------------------

    /// Returns the length of the execution trace for this computation.
    pub fn trace_length(&self) -> usize {
        self.trace_twiddles.len() * 2
    }

    /// Returns twiddles which can be used to evaluate trace polynomials.
    pub fn trace_twiddles(&self) -> &[B] {
        &self.trace_twiddles
    }

    /// Returns twiddles which can be used to interpolate trace registers.
    pub fn trace_inv_twiddles(&self) -> &[B] {
        &self.trace_inv_twiddles
    }

    // LOW-DEGREE EXTENSION DOMAIN
    // --------------------------------------------------------------------------------------------

    /// Returns the size of the low-degree extension domain.
    pub fn lde_domain_size(&self) -> usize {
        self.lde_domain.len()
    }

    /// Returns all values of the LDE domain.
    pub fn lde_values(&self) -> &[B] {
        &self.lde_domain
    }

    /// Returns the blowup factor from the trace domain to the LDE domain.
    pub fn extension_factor(&self) -> usize {
        self.extension_factor
    }
}
