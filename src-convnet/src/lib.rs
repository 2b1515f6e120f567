//! Convolutional feature extraction trained by differential evolution.
//!
//! A candidate's flat weight genome is decoded into per-layer convolution
//! filters, each example is pushed through the layer stack with a sliding
//! dot-product kernel, and a pluggable scoring policy turns the final
//! feature maps into the fitness the engine minimizes.
//!
//! The pieces compose through small traits, mirroring the engine's strategy
//! seams: swap the kernel, the genome decoder or the scoring policy without
//! touching the pipeline.

pub mod activation;
pub mod error;
pub mod fitness;
pub mod kernel;
pub mod mapper;
pub mod schema;

pub use activation::FeatureMapActivation;
pub use error::ConvolutionError;
pub use fitness::{ConvNetFitness, MeanSquaredScore, ScoringPolicy, TrainingExample};
pub use kernel::{ConvolutionKernel, DotProductKernel};
pub use mapper::{FilterGroup, FilterGroupMapper, LayeredFilterMapper};
pub use schema::{LayerDescriptor, LayerSchema};
