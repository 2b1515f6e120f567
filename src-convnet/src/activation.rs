use ndarray::{Array1, Array2, s};

use crate::error::ConvolutionError;
use crate::kernel::{ConvolutionKernel, DotProductKernel};
use crate::schema::perfect_square_side;

/// Slides a square filter over a 2D input and produces the feature map.
///
/// Stride is 1 and there is no padding, so an input of `rows x cols` and a
/// filter of side `s` yield `(rows - s + 1) * (cols - s + 1)` activations,
/// one per valid placement, flattened in row-major scan order.
pub struct FeatureMapActivation {
    kernel: Box<dyn ConvolutionKernel + Send + Sync>,
}

impl FeatureMapActivation {
    pub fn new(kernel: Box<dyn ConvolutionKernel + Send + Sync>) -> Self {
        Self { kernel }
    }

    /// One kernel application for a single window placement.
    pub fn convolve_window(
        &self,
        window: &Array1<f64>,
        filter: &Array1<f64>,
    ) -> Result<f64, ConvolutionError> {
        self.kernel.calculate(window, filter)
    }

    /// Full feature map of `filter` slid over `input`.
    ///
    /// The filter side is derived from its length, which must be a perfect
    /// square no larger than either input dimension.
    pub fn activate(
        &self,
        input: &Array2<f64>,
        filter: &Array1<f64>,
    ) -> Result<Array1<f64>, ConvolutionError> {
        let side = perfect_square_side(filter.len())
            .ok_or(ConvolutionError::NonSquareFilter { size: filter.len() })?;
        let (rows, cols) = input.dim();
        if side > rows || side > cols {
            return Err(ConvolutionError::FilterExceedsInput { side, rows, cols });
        }

        let mut outputs = Vec::with_capacity((rows - side + 1) * (cols - side + 1));
        for r in 0..=rows - side {
            for c in 0..=cols - side {
                let window: Array1<f64> =
                    input.slice(s![r..r + side, c..c + side]).iter().copied().collect();
                outputs.push(self.convolve_window(&window, filter)?);
            }
        }
        Ok(Array1::from(outputs))
    }
}

impl Default for FeatureMapActivation {
    fn default() -> Self {
        Self::new(Box::new(DotProductKernel))
    }
}
