use action_shrink_catalog::AccessLevel;

/// How many reduction passes [`crate::shrink_resolved_list`] may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationBudget {
    Limited(usize),
    /// Run until a pass no longer shrinks the list
    Unlimited,
}

impl IterationBudget {
    /// Zero or a negative count means no limit
    pub fn from_count(count: i64) -> Self {
        match usize::try_from(count) {
            Ok(count) if count > 0 => Self::Limited(count),
            _ => Self::Unlimited,
        }
    }

    /// Spend one pass. Returns `false` once the budget is exhausted.
    pub(crate) fn consume(&mut self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(remaining) => {
                *remaining = remaining.saturating_sub(1);
                *remaining > 0
            }
        }
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self::Limited(2)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShrinkOptions {
    pub iterations: IterationBudget,

    /// Only actions with these access levels are reduced. Empty means every level.
    pub levels: Vec<AccessLevel>,
}

impl ShrinkOptions {
    pub fn iterations(mut self, iterations: IterationBudget) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn levels(mut self, levels: impl IntoIterator<Item = AccessLevel>) -> Self {
        self.levels = levels.into_iter().collect();
        self.levels.sort();
        self.levels.dedup();
        self
    }

    pub fn covers_all_levels(&self) -> bool {
        self.levels.is_empty()
            || AccessLevel::ALL
                .iter()
                .all(|level| self.levels.contains(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_counts_are_unlimited() {
        assert_eq!(IterationBudget::from_count(0), IterationBudget::Unlimited);
        assert_eq!(IterationBudget::from_count(-3), IterationBudget::Unlimited);
        assert_eq!(IterationBudget::from_count(3), IterationBudget::Limited(3));
    }

    #[test]
    fn budget_runs_out() {
        let mut budget = IterationBudget::Limited(2);
        assert!(budget.consume());
        assert!(!budget.consume());

        let mut unlimited = IterationBudget::Unlimited;
        assert!((0..100).all(|_| unlimited.consume()));
    }

    #[test]
    fn level_coverage() {
        assert!(ShrinkOptions::default().covers_all_levels());
        assert!(ShrinkOptions::default()
            .levels(AccessLevel::ALL)
            .covers_all_levels());
        assert!(!ShrinkOptions::default()
            .levels([AccessLevel::Write])
            .covers_all_levels());
    }
}
