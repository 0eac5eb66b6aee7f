//! # Dependency Inversion with Static Generics
//!
//! "High level modules should not depend on low level modules. Both should
//! depend on abstractions."
//!
//! This crate demonstrates the principle with compile-time binding only:
//!
//! ## Basic DIP
//! - High level part: [`Demo<C>`](Demo)
//! - Low level parts: [`First`], [`Second`]
//! - Abstraction: trait [`Capability`]
//!
//! The definitions of `First` and `Second` can change in any way compatible
//! with `Capability` without affecting compilation of `Demo<C>`.
//!
//! ## Generic (arithmetic) DIP
//! - High level parts: [`ArithHost<T>`](ArithHost), [`CalcDemo<U, T>`](CalcDemo)
//! - Low level parts: [`Plus<T>`](Plus), [`Times<T>`](Times), any payload type
//! - Abstractions: traits [`Arithmetic`] and [`Calc<T>`](Calc)
//!
//! `Arithmetic` is a named bound over `Add` and `Mul`, so the hosts are
//! checked once at their definition site and any payload type without the
//! operators is rejected before the program runs.
//!
//! Run the demos with:
//!
//! ```bash
//! cargo run --bin basic_dip
//! cargo run --bin generic_dip -- demo.toml
//! ```

pub mod arith;
pub mod calc;
pub mod capability;
pub mod config;
pub mod demo;
pub mod demos;
pub mod error;
pub mod logging;
pub mod sink;

pub use arith::{ArithHost, Arithmetic};
pub use calc::{Calc, CalcDemo, Plus, Times};
pub use capability::{Capability, First, Second, Token};
pub use config::{BasicConfig, CalcConfig, DemoConfig, OutputConfig};
pub use demo::Demo;
pub use error::{ConfigError, Result};
pub use sink::{Console, Sink, Transcript};
