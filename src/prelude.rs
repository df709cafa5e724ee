//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::data::{GammaSuffStat, GaussianSuffStat};
#[doc(no_inline)]
pub use crate::kernel::{
    ChainConfig, ChainTrace, GammaHyper, GammaKernel, GaussianHyper,
    GaussianKernel, MeanPrec, ShapeRate,
};
#[doc(no_inline)]
pub use crate::traits::{Conjugacy, DrawError, MixtureComponent, SuffStat};
