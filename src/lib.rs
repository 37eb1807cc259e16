//! # polka-rs: Convex Polyhedra with Exact Arithmetic
//!
//! **`polka-rs`** is the data-model core of a polyhedra abstract domain for static analysis.
//! A polyhedron over-approximates a set of program states as a conjunction of linear
//! (in)equalities over a fixed set of integer and real dimensions.
//!
//! ## Dual Representation
//!
//! Every non-empty polyhedron may carry two descriptions of the same set:
//!
//! - a **constraint matrix** `C`: equalities and inequalities `a·x + b (= | ≥) 0`,
//! - a **generator matrix** `F`: lines, rays and vertices whose combinations span the set,
//!
//! plus **saturation matrices** linking each generator to the constraints it does not
//! make tight. The empty polyhedron has neither matrix.
//!
//! Strict inequalities are supported through an extra `ε` column: `e > 0` becomes
//! `e - ε ≥ 0` with `0 ≤ ε ≤ 1`. Enable it with [`PolkaConfig::with_strict`][crate::config::PolkaConfig::with_strict].
//!
//! ## Basic Usage
//!
//! ```rust
//! use polka_rs::constructor::Polka;
//! use polka_rs::interval::Interval;
//! use polka_rs::num::Bound;
//! use polka_rs::types::Dimension;
//!
//! // 1. Initialize the manager
//! let polka = Polka::default();
//!
//! // 2. One integer and one real dimension
//! let dim = Dimension::new(1, 1);
//!
//! // 3. The universe is already minimal in both representations
//! let top = polka.mk_top(dim).into_inner();
//! assert!(top.is_minimal());
//! assert_eq!(top.nbline(), 2);
//!
//! // 4. A box: x0 in [0.5, 2.7] is tightened to [1, 2], x1 >= 0
//! let boxed = polka
//!     .mk_box(dim, &[Interval::new(Bound::ratio(1, 2), Bound::ratio(27, 10)), Interval::at_least(0)])
//!     .unwrap()
//!     .into_inner();
//! assert_eq!(boxed.constraints().unwrap().nbrows(), 4);
//! assert!(boxed.generators().is_none());
//! ```
//!
//! ## Core Components
//!
//! - **[`constructor`]**: The [`Polka`][crate::constructor::Polka] manager and the canonical constructors.
//! - **[`poly`]**: The [`Polyhedron`][crate::poly::Polyhedron] value and its consistency check.
//! - **[`matrix`]** and **[`satmat`]**: Exact row-major matrices and saturation bit matrices.

pub mod bitset;
pub mod config;
pub mod constructor;
pub mod error;
pub mod interval;
pub mod matrix;
pub mod num;
pub mod poly;
pub mod satmat;
pub mod status;
pub mod types;
pub mod vector;
