use serde::{Deserialize, Serialize};

use crate::error::ConvolutionError;

/// One network layer: how many filters it has and how many weights each
/// filter carries. Filter weights form a square window, so the size must be
/// a perfect square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub filter_count: usize,
    pub filter_size: usize,
}

impl LayerDescriptor {
    pub fn new(filter_count: usize, filter_size: usize) -> Self {
        Self { filter_count, filter_size }
    }

    /// Weights this layer consumes from a flat genome.
    pub fn weights(&self) -> usize {
        self.filter_count * self.filter_size
    }
}

/// Validated sequence of layer descriptors, outermost layer first.
///
/// Construction is the single validation point: every later consumer may
/// assume positive filter counts and square filter sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSchema {
    layers: Vec<LayerDescriptor>,
}

impl LayerSchema {
    pub fn new(layers: Vec<LayerDescriptor>) -> Result<Self, ConvolutionError> {
        if layers.is_empty() {
            return Err(ConvolutionError::EmptySchema);
        }
        for (index, layer) in layers.iter().enumerate() {
            if layer.filter_count == 0 {
                return Err(ConvolutionError::EmptyLayer { layer: index });
            }
            if perfect_square_side(layer.filter_size).is_none() {
                return Err(ConvolutionError::NonSquareFilter { size: layer.filter_size });
            }
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    /// Total weights a genome must provide to fill every filter.
    pub fn genome_length(&self) -> usize {
        self.layers.iter().map(LayerDescriptor::weights).sum()
    }
}

/// Integer square side of `len`, or `None` when `len` is zero or not a
/// perfect square.
pub(crate) fn perfect_square_side(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let side = (len as f64).sqrt().round() as usize;
    (side * side == len).then_some(side)
}
