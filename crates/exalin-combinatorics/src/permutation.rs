//! Permutations of `{0..n-1}`.
//!
//! A [`Permutation`] stores its images: `p.image(i)` is where `i` is sent.
//! [`Permutations`] enumerates the whole symmetric group.

use std::fmt;
use std::ops::Index;

use crate::error::PermutationError;

/// A bijection on `{0..n-1}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    /// Creates a permutation from its images.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::NotAPermutation`] if some image is out of
    /// range or appears twice.
    pub fn new(images: Vec<usize>) -> Result<Self, PermutationError> {
        let n = images.len();
        let mut seen = vec![false; n];
        for &image in &images {
            if image >= n || seen[image] {
                return Err(PermutationError::NotAPermutation(images));
            }
            seen[image] = true;
        }
        Ok(Self { images })
    }

    /// The identity on `{0..n-1}`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// Size of the underlying set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true for the permutation of the empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The image of `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn image(&self, i: usize) -> usize {
        self.images[i]
    }

    /// All images in order.
    #[must_use]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// Returns true if every point is fixed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// The inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.len()];
        for (i, &p) in self.images.iter().enumerate() {
            images[p] = i;
        }
        Self { images }
    }

    /// The composition `self ∘ other`, sending `i` to `self(other(i))`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::LengthMismatch`] if the lengths differ.
    pub fn compose(&self, other: &Self) -> Result<Self, PermutationError> {
        if self.len() != other.len() {
            return Err(PermutationError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(Self {
            images: other.images.iter().map(|&i| self.images[i]).collect(),
        })
    }

    /// Disjoint cycle decomposition, fixed points included.
    ///
    /// Each cycle starts at its smallest element; cycles are ordered by
    /// that element.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                cycle.push(i);
                i = self.images[i];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Number of pairs `i < j` with `self(i) > self(j)`.
    #[must_use]
    pub fn inversions(&self) -> u64 {
        let mut values = self.images.clone();
        merge_count(&mut values)
    }

    /// `1` for an even permutation, `-1` for an odd one.
    #[must_use]
    pub fn sign(&self) -> i8 {
        if self.inversions() % 2 == 0 {
            1
        } else {
            -1
        }
    }

    /// The order in the symmetric group: the lcm of the cycle lengths.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.cycles()
            .iter()
            .map(|cycle| cycle.len() as u64)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.images[i]
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in self.cycles().iter().filter(|c| c.len() > 1) {
            write!(f, "(")?;
            for (k, i) in cycle.iter().enumerate() {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}")?;
            }
            write!(f, ")")?;
        }
        if self.is_identity() {
            write!(f, "()")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(images: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(images)
    }
}

fn merge_count(values: &mut [usize]) -> u64 {
    let n = values.len();
    if n < 2 {
        return 0;
    }
    let mid = n / 2;
    let mut count = merge_count(&mut values[..mid]) + merge_count(&mut values[mid..]);

    let mut merged = Vec::with_capacity(n);
    let (left, right) = values.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
            count += (left.len() - i) as u64;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    values.copy_from_slice(&merged);
    count
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Iterator over all n! permutations of `{0..n-1}`.
///
/// Uses the Steinhaus-Johnson-Trotter order: the first item is the
/// identity and consecutive items differ by one adjacent transposition,
/// so their signs alternate. `n = 0` yields the single empty permutation.
#[derive(Clone, Debug)]
pub struct Permutations {
    current: Vec<usize>,
    // Direction of each value, indexed by value: true points left.
    left: Vec<bool>,
    pending: bool,
}

impl Permutations {
    /// Enumerates the permutations of `{0..n-1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            left: vec![true; n],
            pending: true,
        }
    }

    /// Moves the largest mobile value one step; false once none is left.
    fn advance(&mut self) -> bool {
        let n = self.current.len();
        let mut mobile: Option<(usize, usize)> = None;

        for (pos, &value) in self.current.iter().enumerate() {
            let neighbour = if self.left[value] {
                pos.checked_sub(1)
            } else {
                Some(pos + 1).filter(|&t| t < n)
            };
            if let Some(t) = neighbour {
                if self.current[t] < value && mobile.map_or(true, |(m, _)| value > m) {
                    mobile = Some((value, pos));
                }
            }
        }

        let Some((value, pos)) = mobile else {
            return false;
        };
        let target = if self.left[value] { pos - 1 } else { pos + 1 };
        self.current.swap(pos, target);
        for larger in value + 1..n {
            self.left[larger] = !self.left[larger];
        }
        true
    }
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        if !self.pending {
            return None;
        }
        let item = Permutation {
            images: self.current.clone(),
        };
        self.pending = self.advance();
        Some(item)
    }
}
