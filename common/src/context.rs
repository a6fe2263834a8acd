// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{errors::ConfigurationError, ProofOptions};
use math::StarkField;
use utils::log2;

// COMPUTATION CONTEXT
// ================================================================================================

/// Describes a single execution of a computation: the shape of its trace,
/// the degree profile of its constraint system, and the protocol options the
/// proof is generated with. The context is shared, immutable state for all
/// stages of proving and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationContext {
    options: ProofOptions,
    trace_width: usize,
    trace_length: usize,
    num_constraints: usize,
    max_constraint_degree: usize,
}

impl ComputationContext {
    // CONSTANTS
    // --------------------------------------------------------------------------------------------

    /// Minimum supported execution trace length.
    pub const MIN_TRACE_LENGTH: usize = 8;

    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a new context for the specified trace shape and constraint
    /// profile.
    ///
    /// # Errors
    /// Returns a [ConfigurationError] if the extension factor carried by the
    /// options is too small to evaluate constraints of the specified degree.
    ///
    /// # Panics
    /// Panics if trace dimensions or the constraint profile are inconsistent
    /// (zero registers, non-power-of-two trace length, no constraints).
    pub fn new(
        trace_width: usize,
        trace_length: usize,
        num_constraints: usize,
        max_constraint_degree: usize,
        options: ProofOptions,
    ) -> Result<Self, ConfigurationError> {
        assert!(trace_width > 0, "trace width must be greater than 0");
        assert!(
            trace_length >= Self::MIN_TRACE_LENGTH,
            "trace length must be at least {}, but was {}",
            Self::MIN_TRACE_LENGTH,
            trace_length
        );
        assert!(
            trace_length.is_power_of_two(),
            "trace length must be a power of 2, but was {}",
            trace_length
        );
        assert!(num_constraints > 0, "at least one transition constraint must be specified");
        assert!(max_constraint_degree > 0, "max constraint degree must be greater than 0");

        // the composition domain must be large enough to hold evaluations of
        // constraint quotients
        let min_extension_factor = max_constraint_degree.next_power_of_two().max(2);
        if options.extension_factor() < min_extension_factor {
            return Err(ConfigurationError::ExtensionFactorTooSmall(
                min_extension_factor,
                max_constraint_degree,
                options.extension_factor(),
            ));
        }

        Ok(ComputationContext {
            options,
            trace_width,
            trace_length,
            num_constraints,
            max_constraint_degree,
        })
    }

    // TRACE INFO
    // --------------------------------------------------------------------------------------------

    /// Returns the number of registers in the execution trace.
    pub fn trace_width(&self) -> usize {
        self.trace_width
    }

    /// Returns the number of steps in the execution trace.
    pub fn trace_length(&self) -> usize {
        self.trace_length
    }

    // CONSTRAINT INFO
    // --------------------------------------------------------------------------------------------

    /// Returns the number of transition constraints of the computation.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Returns the maximum algebraic degree of the transition constraints.
    pub fn max_constraint_degree(&self) -> usize {
        self.max_constraint_degree
    }

    /// Returns the degree bound claimed for the combined evaluation vector
    /// handed to the low-degree test.
    pub fn composition_degree(&self) -> usize {
        self.trace_length * core::cmp::max(self.max_constraint_degree - 1, 1)
    }

    // DOMAIN INFO
    // --------------------------------------------------------------------------------------------

    /// Returns the extension (blowup) factor of the evaluation domain.
    pub fn extension_factor(&self) -> usize {
        self.options.extension_factor()
    }

    /// Returns the size of the low-degree extension domain.
    pub fn lde_domain_size(&self) -> usize {
        self.trace_length * self.extension_factor()
    }

    /// Returns a generator of the trace domain in the specified field.
    pub fn get_trace_domain_generator<B: StarkField>(&self) -> B {
        B::get_root_of_unity(log2(self.trace_length))
    }

    /// Returns a generator of the LDE domain in the specified field.
    pub fn get_lde_domain_generator<B: StarkField>(&self) -> B {
        B::get_root_of_unity(log2(self.lde_domain_size()))
    }

    // OTHER PROPERTIES
    // --------------------------------------------------------------------------------------------

    /// Returns the protocol options of this context.
    pub fn options(&self) -> &ProofOptions {
        &self.options
    }
}
