//! String-rewriting grammar that grows plant genotypes.

use std::collections::HashMap;

/// A set of context-free production rules, applied simultaneously to every symbol of a
/// generation.
///
/// Symbols without a production are constants and survive rewriting unchanged, so the
/// alphabet stays open for drawing-only symbols like `+` and `[`.
#[derive(Clone, Debug, Default)]
pub struct Ruleset {
    rules: HashMap<char, String>,
}

impl Ruleset {
    /// Creates an empty ruleset; every symbol is a constant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a production for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: char, production: &str) -> Self {
        self.rules.insert(symbol, production.to_owned());
        self
    }

    /// The bracketed shrub grammar: `X → F-[[X]+X]+F[+FX]-X`, `F → FF`.
    ///
    /// `X` is a growth placeholder that never draws; `F` doubles every generation, which
    /// is what keeps the trunk long relative to the youngest twigs.
    pub fn shrub() -> Self {
        Self::new()
            .with_rule('X', "F-[[X]+X]+F[+FX]-X")
            .with_rule('F', "FF")
    }

    /// Rewrites `seed` through `rounds` generations and returns the final string.
    ///
    /// Rewriting is left-to-right concatenation of per-symbol productions, so relative
    /// symbol order is preserved. With `rounds == 0` the seed comes back unchanged.
    /// Expansion is fully deterministic; all randomness lives in the interpreter.
    pub fn expand(&self, seed: &str, rounds: u32) -> String {
        let mut current = seed.to_owned();
        for generation in 1..=rounds {
            let mut next = String::with_capacity(current.len() * 2);
            for sym in current.chars() {
                match self.rules.get(&sym) {
                    Some(production) => next.push_str(production),
                    None => next.push(sym),
                }
            }
            current = next;
            log::debug!("generation {generation}: {} symbols", current.len());
        }
        current
    }
}
