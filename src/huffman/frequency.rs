use std::collections::HashMap;

use super::{Symbol, WeightedSymbol};

/// Counts how often each symbol occurs.
pub struct SymbolCounter<S> {
    symbol_frequencies: HashMap<S, usize>,
}

impl<S: Symbol> SymbolCounter<S> {
    pub fn new() -> Self {
        Self {
            symbol_frequencies: HashMap::new(),
        }
    }

    pub fn increment_symbol(&mut self, symbol: S) {
        *self.symbol_frequencies.entry(symbol).or_insert(0) += 1;
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbol_frequencies.len()
    }

    pub fn total(&self) -> usize {
        self.symbol_frequencies.values().sum()
    }

    /// One entry per distinct symbol, ordered by symbol.
    pub fn to_weighted_symbols(&self) -> Vec<WeightedSymbol<S>> {
        let mut weighted_symbols: Vec<WeightedSymbol<S>> = self
            .symbol_frequencies
            .iter()
            .map(|(symbol, &frequency)| WeightedSymbol::leaf(symbol.clone(), frequency))
            .collect();
        weighted_symbols.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        weighted_symbols
    }
}

impl<S: Symbol> Default for SymbolCounter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for SymbolCounter<S> {
    fn from_iter<T: IntoIterator<Item = S>>(symbols: T) -> Self {
        let mut counter = Self::new();
        for symbol in symbols {
            counter.increment_symbol(symbol);
        }
        counter
    }
}

pub fn count_symbols<S, I>(symbols: I) -> Vec<WeightedSymbol<S>>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    symbols
        .into_iter()
        .collect::<SymbolCounter<S>>()
        .to_weighted_symbols()
}
