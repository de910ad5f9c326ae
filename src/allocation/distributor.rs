use crate::allocation::candidates::CandidateSelector;
use crate::allocation::ranking::{PairedRankingHeuristic, RankingHeuristic};
use crate::augmentation::incremental::IncrementalBfs;
use crate::augmentation::residual::ResidualGraph;
use num_traits::{Bounded, NumAssign};
use std::collections::BTreeMap;

/// Edge id -> additional flow actually bought on that edge.
pub type Distribution<Flow> = BTreeMap<usize, Flow>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    BudgetExhausted,
    NoCandidates,
}

pub struct AllocationReport<Flow> {
    pub distribution: Distribution<Flow>,
    pub residual: ResidualGraph<Flow>,
    pub termination: Termination,
}

impl<Flow> AllocationReport<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn total_increase(&self) -> Flow {
        self.distribution.values().fold(Flow::zero(), |mut total, &increase| {
            total += increase;
            total
        })
    }
}

/// Spends a capacity budget on candidate edges, verifying every tentative
/// increase against the incremental engine before committing it.
///
/// The input residual graph is expected to already carry a maximum flow; the
/// distributor works on an owned clone and never mutates the caller's graph.
pub struct BudgetDistributor<Flow> {
    engine: IncrementalBfs<Flow>,
    rejected: Vec<bool>,
}

impl<Flow> Default for BudgetDistributor<Flow> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Flow> BudgetDistributor<Flow> {
    pub fn new() -> Self {
        Self { engine: IncrementalBfs::new(), rejected: Vec::new() }
    }
}

impl<Flow> BudgetDistributor<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    /// Greedy variant: the whole remaining budget goes tentatively onto the
    /// edge the heuristic picks.
    pub fn distribute<C, H>(
        &mut self,
        residual: &ResidualGraph<Flow>,
        budget: Flow,
        selector: &C,
        heuristic: &mut H,
    ) -> AllocationReport<Flow>
    where
        C: CandidateSelector<Flow>,
        H: RankingHeuristic<Flow>,
    {
        self.run(residual, budget, selector, |residual, candidates, remaining| {
            heuristic.pick(residual, candidates).map(|edge_id| (edge_id, remaining))
        })
    }

    /// Fair variant: the tentative increase is capped at the heuristic's
    /// secondary bound so one edge is not over-funded past the point where a
    /// different edge becomes the better target.
    pub fn distribute_fair<C, H>(
        &mut self,
        residual: &ResidualGraph<Flow>,
        budget: Flow,
        selector: &C,
        heuristic: &mut H,
    ) -> AllocationReport<Flow>
    where
        C: CandidateSelector<Flow>,
        H: PairedRankingHeuristic<Flow>,
    {
        self.run(residual, budget, selector, |residual, candidates, remaining| {
            heuristic.pick(residual, candidates).map(|(edge_id, bound)| (edge_id, remaining.min(bound)))
        })
    }

    fn run<C>(
        &mut self,
        residual: &ResidualGraph<Flow>,
        budget: Flow,
        selector: &C,
        mut pick: impl FnMut(&ResidualGraph<Flow>, &[usize], Flow) -> Option<(usize, Flow)>,
    ) -> AllocationReport<Flow>
    where
        C: CandidateSelector<Flow>,
    {
        let mut residual = residual.clone();
        let mut distribution = Distribution::new();
        let mut remaining = budget;

        self.rejected.clear();
        self.rejected.resize(residual.num_network_edges(), false);

        while remaining > Flow::zero() {
            let mut candidates = selector.candidates(&residual);
            candidates.retain(|&edge_id| !self.rejected[edge_id]);

            let (edge_id, tentative) = match pick(&residual, &candidates, remaining) {
                Some(choice) => choice,
                None => return AllocationReport { distribution, residual, termination: Termination::NoCandidates },
            };

            residual.increase_capacity(edge_id, tentative);
            let increase = self.engine.augment(&mut residual);

            if increase == Flow::zero() {
                // zero gain: roll back and bar the edge until a commit succeeds
                residual.decrease_capacity(edge_id, tentative);
                self.rejected[edge_id] = true;
                continue;
            }

            self.rejected.fill(false);
            *distribution.entry(edge_id).or_insert(Flow::zero()) += increase;
            remaining -= increase;
            // keep only the capacity the confirmed flow consumed
            residual.decrease_capacity(edge_id, tentative - increase);
        }

        AllocationReport { distribution, residual, termination: Termination::BudgetExhausted }
    }
}
