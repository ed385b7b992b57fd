//! Population members.

use crate::matrix::DistanceMatrix;
use crate::path::Path;

/// A candidate path paired with its cached cycle length.
///
/// Lower length is better. The length is computed once when the
/// individual is built and must be refreshed with
/// [`reevaluate`](Individual::reevaluate) after the path is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The visit order.
    pub path: Path,
    /// Cycle length of `path`.
    pub length: u64,
}

impl Individual {
    /// Measures `path` against `matrix`.
    pub fn evaluate(path: Path, matrix: &DistanceMatrix) -> Self {
        let length = path.length(matrix);
        Self { path, length }
    }

    /// Recomputes the cached length after an in-place edit.
    pub fn reevaluate(&mut self, matrix: &DistanceMatrix) {
        self.length = self.path.length(matrix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::four_node;

    #[test]
    fn test_evaluate_and_reevaluate() {
        let m = four_node();
        let mut ind = Individual::evaluate(Path::identity(4), &m);
        assert_eq!(ind.length, 95);

        ind.path.swap(2, 3);
        assert_eq!(ind.length, 95);
        ind.reevaluate(&m);
        assert_eq!(ind.length, 80);
    }
}
