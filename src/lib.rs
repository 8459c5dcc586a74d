//! # shrubbery
//!
//! A sovereign sketching crate that grows plant shrubbery from bracketed
//! [L-System](https://en.wikipedia.org/wiki/L-system) grammars and renders it through
//! engine-agnostic turtle graphics.
//!
//! It decouples the *Genotype* (the L-System string) from the *Phenotype* (the drawn plant),
//! producing a [`PlantSketch`] of colored, width-tapered line segments that any backend
//! (SDL, wgpu, an SVG writer) can display by implementing the [`stage`] collaborator traits.

pub mod grammar;
pub mod interpreter;
pub mod sketch;
pub mod stage;
pub mod turtle;

pub use grammar::*;
pub use interpreter::*;
pub use sketch::*;
pub use stage::*;
pub use turtle::*;

/// Errors surfaced while growing a plant.
#[derive(thiserror::Error, Debug)]
pub enum ShrubberyError {
    /// A `]` was read while the branch stack was empty. The bundled grammar keeps its
    /// brackets balanced, so this means the symbol string was corrupted or hand-built.
    #[error("unbalanced ']' at symbol {0}: the branch stack is empty")]
    UnbalancedPop(usize),

    /// The control source asked to quit; the pass was abandoned mid-string.
    #[error("terminated by user")]
    Terminated,
}
