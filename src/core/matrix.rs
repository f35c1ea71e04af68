use std::ops::{Index, IndexMut};

/// Dense square matrix stored in a single row-major vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> Matrix<T> {
    /// # Panics
    ///
    /// Panics if the matrix does not fit in memory. See
    /// [`try_new`](Matrix::try_new) for the fallible version.
    pub fn new(size: usize, value: T) -> Self {
        Self::try_new(size, value).expect("matrix does not fit in memory")
    }

    /// Returns `None` if the number of entries overflows `usize` or the
    /// allocation fails.
    pub fn try_new(size: usize, value: T) -> Option<Self> {
        let len = size.checked_mul(size)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, value);

        Some(Self { data, size })
    }
}

impl<T> Matrix<T> {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(index(row, col, self.size))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.size && col < self.size {
            self.data.get_mut(index(row, col, self.size))
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = index(row, 0, self.size);
        &self.data[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.size).map(move |row| self.row(row))
    }

    /// Iterates over all entries together with their `(row, col)` coordinates,
    /// row by row.
    pub fn entries(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (coords(i, self.size), value))
    }

    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size).map(move |i| &self[(i, i)])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.size && col < self.size);
        &self.data[index(row, col, self.size)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.size && col < self.size);
        &mut self.data[index(row, col, self.size)]
    }
}

fn index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

fn coords(index: usize, size: usize) -> (usize, usize) {
    let col = index % size;
    let row = index / size;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coords_inverse() {
        let size = 5;
        for row in 0..size {
            for col in 0..size {
                assert_eq!(coords(index(row, col, size), size), (row, col));
            }
        }
    }

    #[test]
    fn try_new_too_large() {
        assert_eq!(Matrix::try_new(usize::MAX, 0u8), None);
        assert_eq!(Matrix::try_new(1 << (usize::BITS / 2), 0u8), None);
        assert_eq!(Matrix::try_new(usize::MAX / 2, 0u8), None);
        assert_eq!(Matrix::try_new(2, 0u8).map(|matrix| matrix.size()), Some(2));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn try_new_allocation_fails() {
        // The entry count fits in usize, the byte count does not.
        assert_eq!(Matrix::try_new(1 << 31, 0u64), None);
    }

    #[test]
    fn get_out_of_bounds() {
        let matrix = Matrix::new(3, 0u8);

        assert_eq!(matrix.get(2, 2), Some(&0));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn rows_and_entries() {
        let mut matrix = Matrix::new(2, 0);
        matrix[(0, 1)] = 1;
        matrix[(1, 0)] = 2;
        matrix[(1, 1)] = 3;

        assert_eq!(
            matrix.rows().collect::<Vec<_>>(),
            vec![&[0, 1][..], &[2, 3][..]]
        );
        assert_eq!(
            matrix.entries().filter(|(_, v)| **v > 1).collect::<Vec<_>>(),
            vec![((1, 0), &2), ((1, 1), &3)]
        );
        assert_eq!(matrix.diagonal().copied().collect::<Vec<_>>(), vec![0, 3]);
    }
}
