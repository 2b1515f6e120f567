use std::error::Error;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use evoconv_de::{FitnessEvaluation, Individual};

use crate::activation::FeatureMapActivation;
use crate::error::ConvolutionError;
use crate::mapper::{FilterGroup, FilterGroupMapper, LayeredFilterMapper};
use crate::schema::{LayerSchema, perfect_square_side};

/// One labeled training example: a 2D input and the value the network
/// should produce for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Array2<f64>,
    pub label: f64,
}

impl TrainingExample {
    pub fn new(input: Array2<f64>, label: f64) -> Self {
        Self { input, label }
    }
}

/// Turns one example's final feature-map activations into a score.
/// Lower scores are better.
pub trait ScoringPolicy: Send + Sync {
    fn score(&self, activations: &[f64], label: f64) -> f64;
}

/// Squared error between the label and the mean of the final activations.
/// An empty activation list predicts 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanSquaredScore;

impl ScoringPolicy for MeanSquaredScore {
    fn score(&self, activations: &[f64], label: f64) -> f64 {
        let prediction = if activations.is_empty() {
            0.0
        } else {
            activations.iter().sum::<f64>() / activations.len() as f64
        };
        let diff = prediction - label;
        diff * diff
    }
}

/// Fitness of a weight genome over a labeled dataset.
///
/// Each evaluation decodes the genome into per-layer filters, pushes every
/// example through the layer stack and averages the per-example scores.
/// Decode or shape failures abort the evaluation and propagate to the
/// engine, which in turn aborts the generation.
pub struct ConvNetFitness {
    schema: LayerSchema,
    examples: Vec<TrainingExample>,
    mapper: Box<dyn FilterGroupMapper + Send + Sync>,
    activation: FeatureMapActivation,
    scoring: Box<dyn ScoringPolicy + Send + Sync>,
}

impl ConvNetFitness {
    /// Pipeline with the standard pieces: sequential genome decoding, a
    /// dot-product kernel and mean-prediction squared error.
    pub fn new(schema: LayerSchema, examples: Vec<TrainingExample>) -> Self {
        Self {
            schema,
            examples,
            mapper: Box::new(LayeredFilterMapper),
            activation: FeatureMapActivation::default(),
            scoring: Box::new(MeanSquaredScore),
        }
    }

    pub fn with_mapper(mut self, mapper: Box<dyn FilterGroupMapper + Send + Sync>) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_activation(mut self, activation: FeatureMapActivation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_scoring(mut self, scoring: Box<dyn ScoringPolicy + Send + Sync>) -> Self {
        self.scoring = scoring;
        self
    }

    /// Weights a genome must carry to fill every filter of the schema.
    /// Engines should use this as their dimension.
    pub fn genome_length(&self) -> usize {
        self.schema.genome_length()
    }

    /// Forward pass of one example: every filter of a layer convolves every
    /// feature map the previous layer produced, and the outputs become the
    /// next layer's inputs. Returns the final layer's activations flattened
    /// across its feature maps, in map order.
    fn propagate(
        &self,
        groups: &[FilterGroup],
        example: &TrainingExample,
    ) -> Result<Vec<f64>, ConvolutionError> {
        let mut inputs = vec![example.input.clone()];
        let mut final_activations = Vec::new();

        for (index, group) in groups.iter().enumerate() {
            let last = index + 1 == groups.len();
            let mut next_inputs = Vec::with_capacity(inputs.len() * group.len());
            for input in &inputs {
                for filter in group {
                    let side = perfect_square_side(filter.len())
                        .ok_or(ConvolutionError::NonSquareFilter { size: filter.len() })?;
                    let map = self.activation.activate(input, filter)?;
                    if last {
                        final_activations.extend(map.iter().copied());
                    } else {
                        let (rows, cols) = input.dim();
                        let out_cols = cols - side + 1;
                        next_inputs.push(Array2::from_shape_fn(
                            (rows - side + 1, out_cols),
                            |(r, c)| map[r * out_cols + c],
                        ));
                    }
                }
            }
            inputs = next_inputs;
        }
        Ok(final_activations)
    }
}

impl FitnessEvaluation for ConvNetFitness {
    fn fitness_for(&self, individual: &Individual) -> Result<f64, Box<dyn Error + Send + Sync>> {
        let groups = self.mapper.filter_groups(individual.position(), &self.schema)?;
        if self.examples.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for example in &self.examples {
            let activations = self.propagate(&groups, example)?;
            total += self.scoring.score(&activations, example.label);
        }
        Ok(total / self.examples.len() as f64)
    }
}
