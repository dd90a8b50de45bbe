//! Corpus state carried through the yearly projection walk

/// State of the savings corpus at a yearly step
#[derive(Debug, Clone)]
pub struct CorpusState {
    /// Years elapsed since today (0 = today)
    pub year: u32,

    /// Attained age at this step
    pub age: i64,

    /// Accumulated corpus in rupees
    pub corpus: f64,
}

impl CorpusState {
    /// Nothing saved yet, at today's age
    pub fn start(current_age: i64) -> Self {
        Self {
            year: 0,
            age: current_age,
            corpus: 0.0,
        }
    }

    /// Advance one year: the prior balance earns a full year of growth,
    /// then the year's contributions land at year end.
    pub fn advance_year(&mut self, annual_return_rate: f64, annual_contribution: f64) {
        self.year += 1;
        self.age += 1;
        self.corpus = self.corpus * (1.0 + annual_return_rate) + annual_contribution;
    }
}
