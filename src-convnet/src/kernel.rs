use ndarray::Array1;

use crate::error::ConvolutionError;

/// Numeric kernel applied to one window/filter pair.
///
/// Implementations must be pure: the activation strategy calls the kernel
/// once per window placement and relies on call order for nothing else.
pub trait ConvolutionKernel {
    fn calculate(&self, window: &Array1<f64>, filter: &Array1<f64>)
    -> Result<f64, ConvolutionError>;
}

/// Plain dot product, the standard convolution kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotProductKernel;

impl ConvolutionKernel for DotProductKernel {
    fn calculate(
        &self,
        window: &Array1<f64>,
        filter: &Array1<f64>,
    ) -> Result<f64, ConvolutionError> {
        if window.len() != filter.len() {
            return Err(ConvolutionError::ShapeMismatch {
                window: window.len(),
                filter: filter.len(),
            });
        }
        Ok(window.dot(filter))
    }
}
