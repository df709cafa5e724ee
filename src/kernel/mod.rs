//! Cluster-kernel families

mod gamma;
mod gaussian;

pub use gamma::{
    ChainConfig, ChainConfigError, ChainTrace, GammaHyper, GammaHyperError,
    GammaKernel, GammaKernelError, ShapeRate,
};
pub use gaussian::{GaussianHyper, GaussianHyperError, GaussianKernel, MeanPrec};
