//! Dense Damerau-Levenshtein matrix with an operation grid for backtracking.

use super::cost::{Cost, SubstitutionCost};

/// The edit that produced a matrix cell's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    /// Origin cell.
    None,
    /// Equal characters, no cost.
    Match,
    /// One character replaced by another.
    Substitute,
    /// A target character added.
    Insert,
    /// A source character dropped.
    Delete,
    /// Two adjacent characters swapped.
    Transpose,
}

/// Cost and operation grids of size `(n + 1) × (m + 1)`, row-major.
///
/// Cell `(i, j)` holds the cheapest way to turn the first `i` source
/// characters into the first `j` target characters.
pub(crate) struct EditMatrix<C> {
    cols: usize,
    costs: Vec<C>,
    operations: Vec<Operation>,
}

impl<C: Cost> EditMatrix<C> {
    /// Fill the matrix for already case-folded character sequences.
    ///
    /// Ties are broken in a fixed order so the backtracked edit script is
    /// reproducible:
    ///
    /// 1. the diagonal candidate (transposition when the cell is a genuine
    ///    adjacent swap, otherwise match/substitution), if it is no worse than
    ///    both deletion and insertion
    /// 2. deletion, if it is no worse than insertion
    /// 3. insertion
    ///
    /// When a transposition applies, substitution does not compete for the
    /// cell: a swap is a sequencing error and always costs exactly one.
    pub(crate) fn fill<P>(source: &[char], target: &[char], policy: &P) -> Self
    where
        P: SubstitutionCost<C>,
    {
        let rows = source.len() + 1;
        let cols = target.len() + 1;

        let mut matrix = Self {
            cols,
            costs: vec![C::ZERO; rows * cols],
            operations: vec![Operation::None; rows * cols],
        };

        for i in 1..rows {
            matrix.set(i, 0, C::from_len(i), Operation::Delete);
        }
        for j in 1..cols {
            matrix.set(0, j, C::from_len(j), Operation::Insert);
        }

        for i in 1..rows {
            for j in 1..cols {
                let s = source[i - 1];
                let t = target[j - 1];

                let deletion = matrix.cost(i - 1, j) + C::ONE;
                let insertion = matrix.cost(i, j - 1) + C::ONE;

                // The last condition rules out runs of a repeated character
                let is_transposition = i > 1
                    && j > 1
                    && s == target[j - 2]
                    && source[i - 2] == t
                    && s != t;

                let (diagonal, diagonal_op) = if is_transposition {
                    (matrix.cost(i - 2, j - 2) + C::ONE, Operation::Transpose)
                } else if s == t {
                    (matrix.cost(i - 1, j - 1), Operation::Match)
                } else {
                    (
                        matrix.cost(i - 1, j - 1) + policy.substitution_cost(s, t),
                        Operation::Substitute,
                    )
                };

                let (cost, operation) = if diagonal <= deletion && diagonal <= insertion {
                    (diagonal, diagonal_op)
                } else if deletion <= insertion {
                    (deletion, Operation::Delete)
                } else {
                    (insertion, Operation::Insert)
                };

                matrix.set(i, j, cost, operation);
            }
        }

        matrix
    }

    /// Value of the terminal cell.
    #[inline]
    pub(crate) fn distance(&self) -> C {
        self.costs[self.costs.len() - 1]
    }

    /// Walk from the terminal cell back to the origin.
    pub(crate) fn backtrack(&self) -> Backtrack<'_, C> {
        Backtrack {
            matrix: self,
            i: self.costs.len() / self.cols - 1,
            j: self.cols - 1,
        }
    }

    #[inline(always)]
    fn cost(&self, i: usize, j: usize) -> C {
        self.costs[i * self.cols + j]
    }

    #[inline(always)]
    fn operation(&self, i: usize, j: usize) -> Operation {
        self.operations[i * self.cols + j]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, j: usize, cost: C, operation: Operation) {
        let index = i * self.cols + j;
        self.costs[index] = cost;
        self.operations[index] = operation;
    }
}

/// A single step of the optimal edit script, in reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) operation: Operation,
    /// Number of source characters consumed up to and including this step.
    pub(crate) source_len: usize,
    /// Number of target characters consumed up to and including this step.
    pub(crate) target_len: usize,
}

/// Iterator over the recorded operations from `(n, m)` to `(0, 0)`.
///
/// Matches are yielded too. Transposition steps move back two cells in both
/// dimensions.
pub(crate) struct Backtrack<'m, C> {
    matrix: &'m EditMatrix<C>,
    i: usize,
    j: usize,
}

impl<C: Cost> Iterator for Backtrack<'_, C> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.i == 0 && self.j == 0 {
            return None;
        }

        let step = Step {
            operation: self.matrix.operation(self.i, self.j),
            source_len: self.i,
            target_len: self.j,
        };

        match step.operation {
            Operation::Match | Operation::Substitute => {
                self.i -= 1;
                self.j -= 1;
            }
            Operation::Insert => self.j -= 1,
            Operation::Delete => self.i -= 1,
            Operation::Transpose => {
                self.i -= 2;
                self.j -= 2;
            }
            // Only the origin is untagged, and iteration stops there
            Operation::None => {
                self.i = 0;
                self.j = 0;
            }
        }

        Some(step)
    }
}
