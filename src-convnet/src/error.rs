use thiserror::Error;

/// Errors raised while decoding a genome or running the convolution
/// pipeline. All of them abort the evaluation they occur in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvolutionError {
    /// Dot-product inputs of unequal length.
    #[error("shape mismatch: window has {window} values but filter has {filter}")]
    ShapeMismatch { window: usize, filter: usize },

    /// The genome is shorter than the layer schema demands.
    #[error("genome length mismatch: schema requires {required} weights but the genome has {actual}")]
    GenomeLengthMismatch { required: usize, actual: usize },

    /// A filter length with no integer square side.
    #[error("filter of {size} weights is not square")]
    NonSquareFilter { size: usize },

    /// A layer schema with no layers at all.
    #[error("layer schema has no layers")]
    EmptySchema,

    /// A layer descriptor declaring no filters.
    #[error("layer {layer} declares no filters")]
    EmptyLayer { layer: usize },

    /// A filter too large for the input it should slide over.
    #[error("filter side {side} exceeds the {rows}x{cols} input")]
    FilterExceedsInput { side: usize, rows: usize, cols: usize },
}
