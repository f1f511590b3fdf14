use std::ops::{Index, IndexMut};

use crate::dtype::Element;
use crate::error::{Result, TileError};
use crate::shape::Dims;

/// A dense 2-D grid stored as one flat row-major buffer.
///
/// Grids are owned by the caller. The kernels borrow them and read or write
/// elements in place; they never resize or reallocate the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    dims: Dims,
}

impl<T: Element> Grid<T> {
    /// Create a grid from row-major data.
    ///
    /// # Errors
    /// Returns `TileError::BufferLength` if `data.len() != dims.numel()`.
    pub fn new(data: Vec<T>, dims: Dims) -> Result<Self> {
        if data.len() != dims.numel() {
            return Err(TileError::BufferLength {
                len: data.len(),
                expected: dims.numel(),
                dims,
            });
        }
        Ok(Grid { data, dims })
    }

    /// Create a zero-filled grid.
    pub fn zeros(dims: Dims) -> Self {
        Self::filled(dims, T::ZERO)
    }

    /// Create a grid with every element set to `value`.
    pub fn filled(dims: Dims, value: T) -> Self {
        Grid {
            data: vec![value; dims.numel()],
            dims,
        }
    }

    /// Create a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(dims: Dims, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dims.numel());
        for i in 0..dims.rows {
            for j in 0..dims.cols {
                data.push(f(i, j));
            }
        }
        Grid { data, dims }
    }

    /// Create a grid from nested rows.
    ///
    /// # Errors
    /// Returns `TileError::RaggedRows` if the rows differ in length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(TileError::RaggedRows {
                    row,
                    expected: cols,
                    got: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Grid {
            data,
            dims: Dims::new(rows.len(), cols),
        })
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.dims.offset(row, col).map(|o| self.data[o])
    }
}

impl<T> Grid<T> {
    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.dims.rows, "row {} out of bounds for {}", i, self.dims);
        &self.data[i * self.dims.cols..(i + 1) * self.dims.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.dims.offset(row, col) {
            Some(o) => &self.data[o],
            None => panic!("index ({row}, {col}) out of bounds for {}", self.dims),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.dims.offset(row, col) {
            Some(o) => &mut self.data[o],
            None => panic!("index ({row}, {col}) out of bounds for {}", self.dims),
        }
    }
}
