use ndarray::{Array1, s};

use crate::error::ConvolutionError;
use crate::schema::LayerSchema;

/// Filters of one layer, in genome order.
pub type FilterGroup = Vec<Array1<f64>>;

/// Decodes a flat weight genome into per-layer filter groups.
pub trait FilterGroupMapper {
    fn filter_groups(
        &self,
        position: &Array1<f64>,
        schema: &LayerSchema,
    ) -> Result<Vec<FilterGroup>, ConvolutionError>;
}

/// Sequential decoder: the genome is consumed front to back, layer by layer
/// and filter by filter, exactly `filter_count * filter_size` weights per
/// layer. Stateless, so the same genome always decodes to the same groups.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayeredFilterMapper;

impl FilterGroupMapper for LayeredFilterMapper {
    fn filter_groups(
        &self,
        position: &Array1<f64>,
        schema: &LayerSchema,
    ) -> Result<Vec<FilterGroup>, ConvolutionError> {
        let required = schema.genome_length();
        if position.len() < required {
            return Err(ConvolutionError::GenomeLengthMismatch {
                required,
                actual: position.len(),
            });
        }

        let mut offset = 0;
        let mut groups = Vec::with_capacity(schema.layers().len());
        for layer in schema.layers() {
            let mut group = Vec::with_capacity(layer.filter_count);
            for _ in 0..layer.filter_count {
                group.push(position.slice(s![offset..offset + layer.filter_size]).to_owned());
                offset += layer.filter_size;
            }
            groups.push(group);
        }
        Ok(groups)
    }
}
