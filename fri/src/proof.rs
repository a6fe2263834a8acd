// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{BatchMerkleProof, ByteDigest, Hasher};
use math::{read_elements_into_vec, FieldElement};
use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};

// LOW-DEGREE PROOF
// ================================================================================================

/// A proof that a committed evaluation vector is close to a polynomial of
/// bounded degree.
///
/// The proof is self-contained: it carries the commitment to the combined
/// evaluation vector (`lc_root` with the batch proof at the execution query
/// positions), one [FriComponent] per folding layer, and the terminal
/// remainder which the verifier checks for low degree directly. All query
/// values are stored as raw field-element bytes so that the verifier can
/// both re-hash them for Merkle checking and use them algebraically.
///
/// The number of components is never stored; it is implied by the size of
/// the evaluation domain and re-derived at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowDegreeProof {
    /// Commitment to the combined evaluation vector (the depth-0 layer).
    pub lc_root: ByteDigest<32>,
    /// Batch proof for combination rows at the execution query positions.
    pub lc_proof: ProofLayer,
    /// One component per folding step.
    pub components: Vec<FriComponent>,
    /// Raw bytes of the unfolded terminal codeword.
    pub remainder: Vec<u8>,
}

impl LowDegreeProof {
    /// Returns the remainder parsed into field elements.
    pub fn parse_remainder<E: FieldElement>(&self) -> Result<Vec<E>, DeserializationError> {
        read_elements_into_vec(&self.remainder)
    }

    /// Reads a proof with the specified number of folding layers from the
    /// provided source.
    pub fn read_from<R: ByteReader>(
        source: &mut R,
        num_layers: usize,
    ) -> Result<Self, DeserializationError> {
        let lc_root = ByteDigest::read_from(source)?;
        let lc_proof = ProofLayer::read_from(source)?;
        let mut components = Vec::with_capacity(num_layers);
        for _ in 0..num_layers {
            components.push(FriComponent::read_from(source)?);
        }
        let num_remainder_bytes = source.read_usize()?;
        let remainder = source.read_vec(num_remainder_bytes)?;
        Ok(LowDegreeProof { lc_root, lc_proof, components, remainder })
    }
}

impl Serializable for LowDegreeProof {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.lc_root.write_into(target);
        self.lc_proof.write_into(target);
        for component in self.components.iter() {
            component.write_into(target);
        }
        target.write_usize(self.remainder.len());
        target.write_bytes(&self.remainder);
    }
}

// FRI COMPONENT
// ================================================================================================

/// Commitment and query openings for a single folding layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriComponent {
    /// Commitment to the folded column.
    pub column_root: ByteDigest<32>,
    /// Openings of folded-column rows at the augmented query positions.
    pub column_proof: ProofLayer,
    /// Openings of current-layer rows at the query positions.
    pub poly_proof: ProofLayer,
}

impl FriComponent {
    /// Reads a component from the provided source.
    pub fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(FriComponent {
            column_root: ByteDigest::read_from(source)?,
            column_proof: ProofLayer::read_from(source)?,
            poly_proof: ProofLayer::read_from(source)?,
        })
    }
}

impl Serializable for FriComponent {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.column_root.write_into(target);
        self.column_proof.write_into(target);
        self.poly_proof.write_into(target);
    }
}

// PROOF LAYER
// ================================================================================================

/// A batch Merkle proof over 4-element rows, stored in wire form.
///
/// `values` contains the un-hashed rows in query-position order; leaf
/// digests are reconstructed from them at parse time, which is what binds
/// the algebraic checks to the Merkle checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofLayer {
    /// Raw bytes of the revealed 4-element rows.
    pub values: Vec<u8>,
    /// Serialized interior sibling digests.
    pub paths: Vec<u8>,
    /// Depth of the committed tree.
    pub depth: u8,
}

impl ProofLayer {
    /// Creates a new proof layer from the specified query rows and the
    /// corresponding batch Merkle proof.
    ///
    /// # Panics
    /// Panics if `query_values` is empty.
    pub fn new<H: Hasher, E: FieldElement>(
        query_values: Vec<[E; 4]>,
        merkle_proof: BatchMerkleProof<H>,
    ) -> Self {
        assert!(!query_values.is_empty(), "query values cannot be empty");

        // concatenate all query rows into a single vector of bytes
        let mut values = Vec::with_capacity(query_values.len() * 4 * E::ELEMENT_BYTES);
        for row in query_values.iter() {
            values.extend_from_slice(E::elements_as_bytes(row));
        }

        // record interior proof nodes only; leaf digests are reconstructed
        // from the rows on the verifier side
        let paths = merkle_proof.serialize_nodes();

        ProofLayer { values, paths, depth: merkle_proof.depth }
    }

    /// Decomposes this layer into query rows and the corresponding batch
    /// Merkle proof with leaf digests computed from the rows.
    #[allow(clippy::type_complexity)]
    pub fn parse<H: Hasher, E: FieldElement>(
        &self,
    ) -> Result<(Vec<[E; 4]>, BatchMerkleProof<H>), DeserializationError> {
        let row_bytes = 4 * E::ELEMENT_BYTES;
        if self.values.is_empty() || self.values.len() % row_bytes != 0 {
            return Err(DeserializationError::InvalidValue(format!(
                "number of value bytes ({}) does not divide into whole number of rows",
                self.values.len()
            )));
        }

        let num_rows = self.values.len() / row_bytes;
        let mut rows = Vec::with_capacity(num_rows);
        let mut hashed_rows = Vec::with_capacity(num_rows);

        for row_chunk in self.values.chunks(row_bytes) {
            let elements = read_elements_into_vec::<E>(row_chunk)?;
            let row: [E; 4] = elements.try_into().expect("chunk contains exactly 4 elements");
            hashed_rows.push(H::hash_elements(&row));
            rows.push(row);
        }

        let merkle_proof = BatchMerkleProof::deserialize(&self.paths, hashed_rows, self.depth)?;

        Ok((rows, merkle_proof))
    }

    /// Reads a proof layer from the provided source.
    pub fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let num_value_bytes = source.read_u32()? as usize;
        let values = source.read_vec(num_value_bytes)?;
        let num_path_bytes = source.read_u32()? as usize;
        let paths = source.read_vec(num_path_bytes)?;
        let depth = source.read_u8()?;
        Ok(ProofLayer { values, paths, depth })
    }
}

impl Serializable for ProofLayer {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u32(self.values.len() as u32);
        target.write_bytes(&self.values);
        target.write_u32(self.paths.len() as u32);
        target.write_bytes(&self.paths);
        target.write_u8(self.depth);
    }
}
