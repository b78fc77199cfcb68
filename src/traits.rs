/// Read-only access to a matrix-like type.
///
/// Implemented by [`Matrix`](crate::Matrix), [`ComplexMatrix`](crate::ComplexMatrix)
/// and [`Vector`](crate::Vector) (as a single row), so presenters such as
/// [`Grid`](crate::display::Grid) can work over any of them without
/// touching their storage.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// `true` when the view has as many rows as columns.
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

impl<T, M: MatrixRef<T> + ?Sized> MatrixRef<T> for &M {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        (**self).get(row, col)
    }
}
