use num_traits::NumAssign;
use std::ops::Sub;

#[derive(Clone, PartialEq, Debug)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Adjacency storage with a paired reverse entry for every edge so flow can
/// be pushed back. Reverse entries carry `upper = 0` and the negated flow.
#[derive(Clone)]
pub struct ResidualCsr<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub edge_index_to_inside_edge_index: Vec<usize>,

    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
}

impl<Flow> ResidualCsr<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// `edges` entries are `(from, to, flow, upper)`.
    pub fn build(num_nodes: usize, edges: &[(usize, usize, Flow, Flow)]) -> Self {
        let num_edges = edges.len();
        let mut edge_index_to_inside_edge_index = vec![usize::MAX; num_edges];
        let mut start = vec![0; num_nodes + 1];
        let mut inside_edge_list: Vec<InsideEdge<Flow>> =
            (0..2 * num_edges).map(|_| InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();

        let mut degree = vec![0; num_nodes];
        for &(from, to, _, _) in edges {
            degree[from] += 1;
            degree[to] += 1;
        }

        for i in 1..=num_nodes {
            start[i] += start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; num_nodes];
        for (edge_index, &(u, v, flow, upper)) in edges.iter().enumerate() {
            let inside_edge_index_u = start[u] + counter[u];
            counter[u] += 1;
            let inside_edge_index_v = start[v] + counter[v];
            counter[v] += 1;
            edge_index_to_inside_edge_index[edge_index] = inside_edge_index_u;

            inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow, upper, rev: inside_edge_index_v };
            inside_edge_list[inside_edge_index_v] =
                InsideEdge { to: u, flow: Flow::zero() - flow, upper: Flow::zero(), rev: inside_edge_index_u };
        }

        Self { num_nodes, num_edges, edge_index_to_inside_edge_index, start, inside_edge_list }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<InsideEdge<Flow>> {
        self.inside_edge_list[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;
        self.inside_edge_list[inside_edge_index].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }
}
