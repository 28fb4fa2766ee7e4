use crate::error::{HuffError, Result};

/// Number of byte values we can count. Anything at or above this is rejected.
pub const SYMBOL_LIMIT: usize = 128;

/// Occurrence counts of every byte in a text, plus the order in which each
/// distinct byte first showed up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [usize; SYMBOL_LIMIT],
    order: Vec<u8>,
    total: usize,
}

impl FreqTable {
    /// Occurrences of one byte value.
    pub fn count(&self, symbol: u8) -> usize {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Number of distinct bytes present.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Length of the text that was counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct bytes with their counts, in order of first appearance.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.order.iter().map(|&sym| (sym, self.counts[sym as usize]))
    }
}

/// Returns a frequency count of the input data. Bytes outside 0..128 are an error.
pub fn freqs(data: &[u8]) -> Result<FreqTable> {
    let mut counts = [0_usize; SYMBOL_LIMIT];
    let mut order = Vec::new();

    for (position, &symbol) in data.iter().enumerate() {
        let slot = counts
            .get_mut(symbol as usize)
            .ok_or(HuffError::SymbolOutOfRange { symbol, position })?;
        // First sighting fixes this byte's place in the leaf order
        if *slot == 0 {
            order.push(symbol);
        }
        *slot += 1;
    }

    Ok(FreqTable {
        counts,
        order,
        total: data.len(),
    })
}
