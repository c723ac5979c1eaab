//! Dense row-major square matrix.
//!
//! Adjacency, distance, and predecessor tables are all `N×N`, stored as one
//! flat `Vec` indexed `row * size + col`.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// `size × size` matrix with every cell set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Self { size, data: vec![fill; size * size] }
    }

    /// Assemble a matrix from `size` rows of length `size`.
    ///
    /// # Panics
    /// Panics if any row has the wrong length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "row length must equal row count");
            data.extend(row);
        }
        Self { size, data }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.size..(row + 1) * self.size]
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.size + col]
    }
}
