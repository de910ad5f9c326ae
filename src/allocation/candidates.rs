use crate::augmentation::residual::ResidualGraph;
use num_traits::{Bounded, NumAssign};

/// Picks the pool of edges worth spending budget on. Expects a residual graph
/// at a max-flow fixed point; super edges are never returned.
pub trait CandidateSelector<Flow> {
    fn candidates(&self, residual: &ResidualGraph<Flow>) -> Vec<usize>;
}

/// The provably correct pool: edges from the source side of every min cut to
/// the true reverse-reachable sink side. Increasing capacity on any edge
/// outside this set cannot raise max flow.
pub struct GuaranteedEdges;

impl<Flow> CandidateSelector<Flow> for GuaranteedEdges
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    fn candidates(&self, residual: &ResidualGraph<Flow>) -> Vec<usize> {
        let source_side = residual.reachable_from_source();
        let sink_side = residual.reverse_reachable_to_sink();

        (0..residual.num_network_edges())
            .filter(|&edge_id| {
                let (u, v) = residual.edge_ends(edge_id);
                source_side[u] && sink_side[v]
            })
            .collect()
    }
}

/// The weaker pool: sink side computed by forward reachability from the super
/// sink, which can admit edges whose increase never helps.
pub struct MinCutEdges;

impl<Flow> CandidateSelector<Flow> for MinCutEdges
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    fn candidates(&self, residual: &ResidualGraph<Flow>) -> Vec<usize> {
        let source_side = residual.reachable_from_source();
        let sink_side = residual.forward_reachable_from_sink();

        (0..residual.num_network_edges())
            .filter(|&edge_id| {
                let (u, v) = residual.edge_ends(edge_id);
                residual.capacity(edge_id) > Flow::zero() && source_side[u] && sink_side[v]
            })
            .collect()
    }
}
