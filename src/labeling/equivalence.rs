//! Provisional-label equivalences and their resolution.

use crate::types::Label;

/// Pairs of provisional labels discovered to denote one physical
/// component. Recorded during the first labeling pass, consumed by
/// [`EquivalenceTable::resolve`], never persisted.
#[derive(Debug, Default)]
pub(crate) struct EquivalenceTable {
    pairs: Vec<(Label, Label)>,
}

impl EquivalenceTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, a: Label, b: Label) {
        if a != b {
            self.pairs.push(if a < b { (a, b) } else { (b, a) });
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Resolve every label in `0..label_count` to the smallest label of
    /// its connected set.
    ///
    /// The pairs form edges of an undirected graph over provisional
    /// labels. Resolution runs a relabel pass over a label-index array
    /// and iterates to a fixed point, so transitive merges propagate
    /// fully even though the pairs were discovered in raster order, not
    /// merge order. Pointers only ever decrease, which bounds the
    /// iteration.
    pub(crate) fn resolve(&self, label_count: usize) -> Vec<Label> {
        let mut canonical: Vec<Label> = (0..label_count).map(|i| i as Label).collect();
        loop {
            let mut changed = false;
            for &(a, b) in &self.pairs {
                let target = canonical[a as usize].min(canonical[b as usize]);
                if canonical[a as usize] != target {
                    canonical[a as usize] = target;
                    changed = true;
                }
                if canonical[b as usize] != target {
                    canonical[b as usize] = target;
                    changed = true;
                }
            }
            for i in 0..canonical.len() {
                let shortcut = canonical[canonical[i] as usize];
                if shortcut != canonical[i] {
                    canonical[i] = shortcut;
                    changed = true;
                }
            }
            if !changed {
                return canonical;
            }
        }
    }
}
