//! Cluster-kernel distributions for Dirichlet process mixture models.
//!
//! A DPMM inference engine owns the assignment of observations to an
//! unbounded number of clusters and, per active cluster, one set of
//! kernel parameters. This crate supplies the other half of that
//! contract: the [`MixtureComponent`](traits::MixtureComponent) trait
//! the engine scores and resamples through, and concrete kernel
//! families implementing it.
//!
//! The [`GammaKernel`](kernel::GammaKernel) is the interesting one: its
//! rate parameter has an exact conjugate conditional, but its shape
//! parameter — a scaled negative-log transform of a Beta draw — does
//! not, so posterior draws run an internal chain interleaving an exact
//! Gibbs rate update with a random-walk Metropolis shape update. The
//! [`GaussianKernel`](kernel::GaussianKernel) is the fully conjugate
//! counterpart: exact posterior draws, closed-form predictive.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use dpmix::prelude::*;
//!
//! let hyper = GammaHyper::new(2.0, 2.0, 2.0, 0.5, 5.0).unwrap();
//! let kernel = GammaKernel::new(hyper);
//! let mut rng = SmallRng::seed_from_u64(0x72);
//!
//! // seed a new cluster from the prior
//! let theta = kernel.prior_draw(1, &mut rng).unwrap()[0];
//! assert!(theta.shape > 0.0 && theta.rate > 0.0);
//!
//! // refresh it against the observations assigned to the cluster
//! let xs = [1.0, 1.5, 2.0, 2.5, 3.0];
//! let theta = kernel.posterior_draw(&xs, 1, &mut rng).unwrap()[0];
//! assert!(kernel.likelihood(2.0, &theta) > 0.0);
//!
//! // density is zero off the support, never an error
//! assert_eq!(kernel.likelihood(-1.0, &theta), 0.0);
//! ```

pub mod consts;
pub mod data;
pub mod kernel;
pub mod mh;
pub mod misc;
pub mod prelude;
pub mod traits;

pub use traits::MixtureComponent;
