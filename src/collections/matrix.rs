//! `DenseMatrix`: a 2D dense matrix in one contiguous row-major buffer.
//!
//! Rows are stored back to back, so scanning a row walks consecutive memory
//! while scanning a column strides by `cols`. The adjacency-matrix graph
//! relies on this: out-neighbor scans are row scans.

/// A row-major `rows x cols` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DenseMatrix<T> {
    /// Creates a new matrix with dimensions `rows x cols`, initialized with default values.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self {
            data: vec![T::default(); Self::cell_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates a new matrix from a linear row-major vector.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows or `vec.len() != rows * cols`.
    pub fn from_vec(vec: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(vec.len(), Self::cell_count(rows, cols), "Vector length must match dimensions");
        Self {
            data: vec,
            rows,
            cols,
        }
    }

    #[inline]
    fn cell_count(rows: usize, cols: usize) -> usize {
        match rows.checked_mul(cols) {
            Some(count) => count,
            None => panic!("Matrix dimensions overflow: {rows} x {cols}"),
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns an iterator over column `col`, top to bottom.
    ///
    /// Yields nothing if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        let (start, len) = if col < self.cols { (col, self.rows) } else { (0, 0) };
        self.data.iter().skip(start).step_by(self.cols.max(1)).take(len)
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks_exact(0)` panics; a zero-width matrix has an empty buffer anyway.
        self.data.chunks_exact(self.cols.max(1))
    }
}
