//! Training batch passed to optimizer steps

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, CowArray, Ix1, Ix2};

/// One optimizer step's worth of data: inputs and targets
///
/// A batch either borrows the caller's full dataset or owns a row-selected
/// subset of it, depending on the training loop's batching mode.
pub struct Batch<'a> {
    x: CowArray<'a, f64, Ix2>,
    y: CowArray<'a, f64, Ix1>,
}

impl<'a> Batch<'a> {
    /// Borrow the full dataset
    pub fn full(x: &'a Array2<f64>, y: &'a Array1<f64>) -> Self {
        Self {
            x: CowArray::from(x.view()),
            y: CowArray::from(y.view()),
        }
    }

    /// Own the rows of the dataset selected by `indices`
    pub fn select(x: &Array2<f64>, y: &Array1<f64>, indices: &[usize]) -> Batch<'a> {
        Batch {
            x: CowArray::from(x.select(Axis(0), indices)),
            y: CowArray::from(y.select(Axis(0), indices)),
        }
    }

    /// Input rows
    pub fn x(&self) -> ArrayView2<f64> {
        self.x.view()
    }

    /// Target values
    pub fn y(&self) -> ArrayView1<f64> {
        self.y.view()
    }

    /// Number of samples in this batch
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
