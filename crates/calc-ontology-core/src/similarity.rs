//! Dense vector similarity primitives.
//!
//! The vocabulary vectors in this system are tiny (3 components), so a
//! scalar implementation is all that is needed. Cosine similarity here
//! is `1 - cosine_distance`, i.e. the raw normalized dot product.

use thiserror::Error;

/// Errors from dense vector similarity computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    /// Dimension mismatch between vectors.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension (from first vector)
        expected: usize,
        /// Actual dimension (from second vector)
        actual: usize,
    },

    /// Empty vector provided.
    #[error("Empty vector provided")]
    EmptyVector,

    /// Zero magnitude vector - cosine undefined.
    #[error("Zero magnitude vector - cosine undefined")]
    ZeroMagnitude,
}

/// Calculate L2 norm (magnitude) of a vector.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Internal dot product without validation.
/// Caller must ensure vectors have equal length.
#[inline]
fn dot_product_unchecked(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Calculate dot product between two dense vectors.
///
/// # Errors
/// - `SimilarityError::EmptyVector` if either vector is empty
/// - `SimilarityError::DimensionMismatch` if vectors have different lengths
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.is_empty() || b.is_empty() {
        return Err(SimilarityError::EmptyVector);
    }
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(dot_product_unchecked(a, b))
}

/// Calculate cosine similarity between two dense vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction,
/// 0.0 means orthogonal, and -1.0 means opposite direction. For the
/// all-positive vocabulary vectors in this system the practical range
/// is [0.0, 1.0].
///
/// # Errors
/// - `SimilarityError::EmptyVector` if either vector is empty
/// - `SimilarityError::DimensionMismatch` if vectors have different lengths
/// - `SimilarityError::ZeroMagnitude` if either vector has zero norm
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.is_empty() || b.is_empty() {
        return Err(SimilarityError::EmptyVector);
    }
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot = dot_product_unchecked(a, b);
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);

    if norm_a < f32::EPSILON || norm_b < f32::EPSILON {
        return Err(SimilarityError::ZeroMagnitude);
    }

    let result = dot / (norm_a * norm_b);
    // Clamp to valid range to handle floating point errors
    Ok(result.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.1, 0.2, 0.3];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!(
            (sim - 1.0).abs() < 1e-6,
            "Identical vectors should have similarity 1.0, got {}",
            sim
        );
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!(
            sim.abs() < 1e-6,
            "Orthogonal vectors should have similarity 0.0, got {}",
            sim
        );
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-1.0, -2.0, -3.0];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vocabulary_pair_similarity() {
        // differentiation vs integration from the builtin table
        let a = vec![0.1, 0.2, 0.3];
        let b = vec![0.2, 0.1, 0.4];
        let sim = cosine_similarity(&a, &b).unwrap();
        // (0.02 + 0.02 + 0.12) / (sqrt(0.14) * sqrt(0.21)) ~= 0.9331
        assert!((sim - 0.9331).abs() < 1e-3, "got {}", sim);
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        let result = cosine_similarity(&a, &b);
        assert!(matches!(
            result,
            Err(SimilarityError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_empty_vector_error() {
        let a: Vec<f32> = vec![];
        let b = vec![1.0, 2.0];
        let result = cosine_similarity(&a, &b);
        assert!(matches!(result, Err(SimilarityError::EmptyVector)));
    }

    #[test]
    fn test_zero_magnitude_error() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        let result = cosine_similarity(&a, &b);
        assert!(matches!(result, Err(SimilarityError::ZeroMagnitude)));
    }

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        let dot = dot_product(&a, &b).unwrap();
        assert!((dot - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_dot_product_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            dot_product(&a, &b),
            Err(SimilarityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_l2_norm() {
        let v = vec![3.0, 4.0];
        assert!((l2_norm(&v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_norm_zero_vector() {
        let v = vec![0.0, 0.0, 0.0];
        assert!(l2_norm(&v).abs() < 1e-6);
    }
}
