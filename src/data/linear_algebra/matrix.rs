//! # Dense matrices
//!
//! The simplex tableau is stored as a dense, row-major matrix of `f64` values. Dimensions are fixed
//! at creation; all operations work in place.
use std::slice::Iter;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0);
        debug_assert!(columns > 0);

        Self {
            data: vec![vec![0_f64; columns]; rows],
            nr_rows: rows,
            nr_columns: columns,
        }
    }

    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of equal, nonzero length. There should be at least one row.
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(nr_rows > 0 && nr_columns > 0);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Divide every value in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value /= divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let difference = factor * self.data[read_row][j];
            self.data[write_row][j] += difference;
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }
}
