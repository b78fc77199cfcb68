use super::Matrix;

impl Matrix {
    /// Rank by row reduction with exact-zero pivot tests.
    ///
    /// The column window starts at `ncols` and shrinks whenever a column has
    /// no non-zero pivot candidate, the last column in the window taking its
    /// place. Wide matrices are reduced through their transpose. A single row
    /// or column has rank 1 if any entry is non-zero, else 0.
    ///
    /// ```
    /// use linalg_kernel::Matrix;
    /// let m = Matrix::from_rows(vec![
    ///     vec![1.0, 2.0, 3.0],
    ///     vec![2.0, 4.0, 6.0],
    ///     vec![3.0, 6.0, 9.0],
    /// ]).unwrap();
    /// assert_eq!(m.rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        if self.nrows == 1 || self.ncols == 1 {
            return usize::from(self.data.iter().any(|&x| x != 0.0));
        }
        if self.ncols > self.nrows {
            return self.transpose().rank();
        }

        let rows = self.nrows;
        let mut data = self.to_rows();
        let mut rank = self.ncols;
        let mut row = 0;

        while row < rank {
            if data[row][row] != 0.0 {
                let pivot_row = data[row].clone();
                for (r, other) in data.iter_mut().enumerate() {
                    if r == row {
                        continue;
                    }
                    let multiplier = other[row] / pivot_row[row];
                    for i in row..rank {
                        other[i] -= multiplier * pivot_row[i];
                    }
                }
                row += 1;
            } else if let Some(swap) = (row + 1..rows).find(|&r| data[r][row] != 0.0) {
                data.swap(row, swap);
            } else {
                rank -= 1;
                for r in data.iter_mut() {
                    r[row] = r[rank];
                }
            }
        }

        log::trace!("rank of {}x{} matrix: {}", self.nrows, self.ncols, rank);
        rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn full_rank() {
        assert_eq!(Matrix::identity(4).unwrap().rank(), 4);
        let a = m(&[&[2.0, 1.0], &[1.0, 3.0]]);
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn rank_one() {
        let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[3.0, 6.0, 9.0]]);
        assert_eq!(a.rank(), 1);
    }

    #[test]
    fn zero_matrix() {
        assert_eq!(Matrix::zeros(3, 3).unwrap().rank(), 0);
        assert_eq!(Matrix::zeros(2, 5).unwrap().rank(), 0);
        assert_eq!(Matrix::zeros(1, 4).unwrap().rank(), 0);
    }

    #[test]
    fn single_row_or_column() {
        assert_eq!(m(&[&[0.0, 0.0, 7.0]]).rank(), 1);
        assert_eq!(m(&[&[0.0], &[3.0]]).rank(), 1);
    }

    #[test]
    fn needs_row_swap() {
        let a = m(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0], &[1.0, 1.0, 5.0]]);
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn wide_and_tall() {
        let wide = m(&[&[1.0, 0.0, 2.0, 1.0], &[0.0, 1.0, 1.0, 0.0]]);
        assert_eq!(wide.rank(), 2);
        let tall = wide.transpose();
        assert_eq!(tall.rank(), 2);
    }

    #[test]
    fn rank_bound() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert!(a.rank() <= 2);
        assert_eq!(a.rank(), 2);
    }
}
