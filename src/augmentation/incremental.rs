use crate::augmentation::residual::ResidualGraph;
use crate::network::graph::FlowNetwork;
use num_traits::{Bounded, NumAssign};
use std::collections::VecDeque;

/// Incremental max-flow engine.
///
/// Assumes the residual graph already holds a feasible flow and pushes
/// whatever additional flow the current capacities admit. The return value is
/// the increase only, not the network's total max flow.
#[derive(Default)]
pub struct IncrementalBfs<Flow> {
    prev: Vec<(usize, usize)>,
    que: VecDeque<(usize, Flow)>,
}

impl<Flow> IncrementalBfs<Flow> {
    pub fn new() -> Self {
        Self { prev: Vec::new(), que: VecDeque::new() }
    }
}

impl<Flow> IncrementalBfs<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    pub fn augment(&mut self, residual: &mut ResidualGraph<Flow>) -> Flow {
        let source = residual.super_source();
        let sink = residual.super_sink();
        let mut total = Flow::zero();

        loop {
            let delta = self.augmenting_path(residual);
            if delta == Flow::zero() {
                break;
            }

            // walk the predecessor chain, pushing the bottleneck
            let mut v = sink;
            while v != source {
                let (u, inside_edge_id) = self.prev[v];
                residual.push_flow(inside_edge_id, delta);
                v = u;
            }
            total += delta;
        }
        total
    }

    /// Non-mutating form: reports the achievable increase on a throwaway copy.
    pub fn additional_flow(&mut self, residual: &ResidualGraph<Flow>) -> Flow {
        let mut copy = residual.clone();
        self.augment(&mut copy)
    }

    // bfs carrying the bottleneck-so-far; fills self.prev, returns the
    // bottleneck of one augmenting path, or zero if the sink is unreachable
    fn augmenting_path(&mut self, residual: &ResidualGraph<Flow>) -> Flow {
        let source = residual.super_source();
        let sink = residual.super_sink();

        self.prev.clear();
        self.prev.resize(residual.num_nodes(), (usize::MAX, usize::MAX));
        self.prev[source] = (source, usize::MAX);
        self.que.clear();
        self.que.push_back((source, Flow::max_value()));

        while let Some((u, bottleneck)) = self.que.pop_front() {
            for inside_edge_id in residual.csr.start[u]..residual.csr.start[u + 1] {
                let edge = &residual.csr.inside_edge_list[inside_edge_id];
                if self.prev[edge.to].0 != usize::MAX || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.prev[edge.to] = (u, inside_edge_id);
                let new_bottleneck = bottleneck.min(edge.residual_capacity());
                if edge.to == sink {
                    return new_bottleneck;
                }
                self.que.push_back((edge.to, new_bottleneck));
            }
        }

        Flow::zero()
    }
}

/// Exact max flow from scratch: resets flows, attaches the super nodes and
/// augments from zero.
pub fn maximum_flow<Flow>(network: &FlowNetwork<Flow>) -> Flow
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    let mut fresh = network.clone();
    fresh.reset_flows();
    let mut residual = ResidualGraph::from_network(&fresh);
    IncrementalBfs::new().augment(&mut residual)
}
