// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{ComputationContext, ProofOptions};
use crypto::{BatchMerkleProof, ByteDigest, Hasher};
use fri::LowDegreeProof;
use math::{read_elements_into_vec, FieldElement, StarkField};
use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
};

// STARK PROOF
// ================================================================================================

/// A proof generated by the Glacier prover.
///
/// The proof is the sole artifact surviving a proving run; everything the
/// verifier needs — the computation context, the trace commitment with its
/// query openings, and the self-contained low-degree proof — travels inside
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarkProof {
    /// Shape of the computation and protocol options.
    pub context: Context,
    /// Commitment to the extended execution trace.
    pub trace_root: ByteDigest<32>,
    /// Openings of trace rows at the execution query positions.
    pub trace_queries: Queries,
    /// Low-degree proof for the combined evaluation vector.
    pub low_degree_proof: LowDegreeProof,
}

impl StarkProof {
    /// Serializes this proof into a vector of bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();
        self.write_into(&mut result);
        result
    }

    /// Deserializes a proof from the provided bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes do not encode a structurally valid
    /// proof, or if trailing bytes remain after parsing.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeserializationError> {
        let mut source = SliceReader::new(bytes);

        let context = Context::read_from(&mut source)?;
        let trace_root = ByteDigest::read_from(&mut source)?;
        let trace_queries = Queries::read_from(&mut source)?;

        // the number of folding layers is implied by the domain size
        let num_layers =
            context.options().to_fri_options().num_fri_layers(context.lde_domain_size());
        let low_degree_proof = LowDegreeProof::read_from(&mut source, num_layers)?;

        if source.has_more_bytes() {
            return Err(DeserializationError::UnconsumedBytes);
        }

        Ok(StarkProof { context, trace_root, trace_queries, low_degree_proof })
    }
}

impl Serializable for StarkProof {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.context.write_into(target);
        self.trace_root.write_into(target);
        self.trace_queries.write_into(target);
        self.low_degree_proof.write_into(target);
    }
}

// PROOF CONTEXT
// ================================================================================================

/// Wire form of the computation context carried inside a proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    trace_width: u8,
    trace_length_log: u8,
    num_constraints: u8,
    max_constraint_degree: u8,
    field_modulus_bytes: Vec<u8>,
    options: ProofOptions,
}

impl Context {
    /// Builds a proof context from the specified computation context,
    /// binding it to the specified base field.
    pub fn new<B: StarkField>(context: &ComputationContext) -> Self {
        Context {
            trace_width: context.trace_width() as u8,
            trace_length_log: utils::log2(context.trace_length()) as u8,
            num_constraints: context.num_constraints() as u8,
            max_constraint_degree: context.max_constraint_degree() as u8,
            field_modulus_bytes: B::get_modulus_le_bytes(),
            options: context.options().clone(),
        }
    }

    /// Returns the number of registers in the execution trace.
    pub fn trace_width(&self) -> usize {
        self.trace_width as usize
    }

    /// Returns the number of steps in the execution trace.
    pub fn trace_length(&self) -> usize {
        1 << self.trace_length_log
    }

    /// Returns the number of transition constraints.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints as usize
    }

    /// Returns the maximum algebraic degree of the transition constraints.
    pub fn max_constraint_degree(&self) -> usize {
        self.max_constraint_degree as usize
    }

    /// Returns the size of the low-degree extension domain.
    pub fn lde_domain_size(&self) -> usize {
        self.trace_length() * self.options.extension_factor()
    }

    /// Returns little-endian bytes of the modulus of the field the proof was
    /// generated over.
    pub fn field_modulus_bytes(&self) -> &[u8] {
        &self.field_modulus_bytes
    }

    /// Returns the protocol options the proof was generated with.
    pub fn options(&self) -> &ProofOptions {
        &self.options
    }
}

impl Serializable for Context {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(self.trace_width);
        target.write_u8(self.trace_length_log);
        target.write_u8(self.num_constraints);
        target.write_u8(self.max_constraint_degree);
        target.write_u8(self.field_modulus_bytes.len() as u8);
        target.write_bytes(&self.field_modulus_bytes);
        self.options.write_into(target);
    }
}

impl Deserializable for Context {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let trace_width = source.read_u8()?;
        let trace_length_log = source.read_u8()?;
        if trace_length_log as u32 > usize::BITS - 1 {
            return Err(DeserializationError::InvalidValue(format!(
                "trace length 2^{} does not fit into a usize",
                trace_length_log
            )));
        }
        let num_constraints = source.read_u8()?;
        let max_constraint_degree = source.read_u8()?;
        let num_modulus_bytes = source.read_u8()? as usize;
        let field_modulus_bytes = source.read_vec(num_modulus_bytes)?;
        let options = ProofOptions::read_from(source)?;
        Ok(Context {
            trace_width,
            trace_length_log,
            num_constraints,
            max_constraint_degree,
            field_modulus_bytes,
            options,
        })
    }
}

// QUERY POSITION MAPPING
// ================================================================================================

/// Expands execution query positions into the set of trace positions which
/// must be opened: the position itself and the position one execution step
/// later (the trace domain is embedded in the extension domain at stride
/// `extension_factor`, so one step corresponds to that stride).
///
/// The returned list is de-duplicated and preserves the order of first
/// occurrence; both the prover and the verifier must derive it identically
/// because revealed rows are indexed by position in this list.
pub fn augment_trace_positions(
    positions: &[usize],
    extension_factor: usize,
    domain_size: usize,
) -> Vec<usize> {
    let mut result = Vec::with_capacity(positions.len() * 2);
    for &position in positions {
        if !result.contains(&position) {
            result.push(position);
        }
        let shifted = (position + extension_factor) % domain_size;
        if !result.contains(&shifted) {
            result.push(shifted);
        }
    }
    result
}

// QUERIES
// ================================================================================================

/// Openings of committed rows at a set of query positions, stored in wire
/// form: raw row bytes in query-position order plus the interior nodes of a
/// batch Merkle proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queries {
    /// Raw bytes of the revealed rows.
    pub values: Vec<u8>,
    /// Serialized interior sibling digests.
    pub paths: Vec<u8>,
    /// Depth of the committed tree.
    pub depth: u8,
}

impl Queries {
    /// Creates a new query object from the specified rows and the
    /// corresponding batch Merkle proof.
    ///
    /// # Panics
    /// Panics if `query_values` is empty or rows have inconsistent widths.
    pub fn new<H: Hasher, B: FieldElement>(
        query_values: Vec<Vec<B>>,
        merkle_proof: BatchMerkleProof<H>,
    ) -> Self {
        assert!(!query_values.is_empty(), "query values cannot be empty");
        let row_width = query_values[0].len();

        let mut values = Vec::with_capacity(query_values.len() * row_width * B::ELEMENT_BYTES);
        for row in query_values.iter() {
            assert_eq!(row_width, row.len(), "rows must have consistent width");
            values.extend_from_slice(B::elements_as_bytes(row));
        }

        let paths = merkle_proof.serialize_nodes();

        Queries { values, paths, depth: merkle_proof.depth }
    }

    /// Decomposes this object into rows of the specified width and the
    /// corresponding batch Merkle proof with leaf digests computed from the
    /// rows.
    #[allow(clippy::type_complexity)]
    pub fn parse<H: Hasher, B: FieldElement>(
        &self,
        row_width: usize,
    ) -> Result<(Vec<Vec<B>>, BatchMerkleProof<H>), DeserializationError> {
        let row_bytes = row_width * B::ELEMENT_BYTES;
        if self.values.is_empty() || self.values.len() % row_bytes != 0 {
            return Err(DeserializationError::InvalidValue(format!(
                "number of value bytes ({}) does not divide into rows of width {}",
                self.values.len(),
                row_width
            )));
        }

        let num_rows = self.values.len() / row_bytes;
        let mut rows = Vec::with_capacity(num_rows);
        let mut hashed_rows = Vec::with_capacity(num_rows);
        for row_chunk in self.values.chunks(row_bytes) {
            let row = read_elements_into_vec::<B>(row_chunk)?;
            hashed_rows.push(H::hash_elements(&row));
            rows.push(row);
        }

        let merkle_proof = BatchMerkleProof::deserialize(&self.paths, hashed_rows, self.depth)?;

        Ok((rows, merkle_proof))
    }

    /// Reads a query object from the provided source.
    pub fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let num_value_bytes = source.read_u32()? as usize;
        let values = source.read_vec(num_value_bytes)?;
        let num_path_bytes = source.read_u32()? as usize;
        let paths = source.read_vec(num_path_bytes)?;
        let depth = source.read_u8()?;
        Ok(Queries { values, paths, depth })
    }
}

impl Serializable for Queries {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u32(self.values.len() as u32);
        target.write_bytes(&self.values);
        target.write_u32(self.paths.len() as u32);
        target.write_bytes(&self.paths);
        target.write_u8(self.depth);
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::augment_trace_positions;

    #[test]
    fn augmented_positions_preserve_first_occurrence_order() {
        // each position is followed by its one-step-later counterpart
        assert_eq!(vec![3, 11, 17, 25], augment_trace_positions(&[3, 17], 8, 64));

        // duplicates are dropped: 11 + 8 = 19 already present via 19 itself,
        // and 63 + 8 wraps around the domain
        assert_eq!(vec![11, 19, 27, 63, 7], augment_trace_positions(&[11, 19, 63], 8, 64));
    }
}
