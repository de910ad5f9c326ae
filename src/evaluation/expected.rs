use crate::allocation::ranking::expected_capacity;
use crate::augmentation::incremental::maximum_flow;
use crate::network::graph::FlowNetwork;
use num_traits::{Bounded, NumAssign, NumCast};

/// Substitutes every capacity with its expected value under the edge's own
/// slowing model. Flows are reset since they were computed for the old
/// capacities.
pub fn expected_capacity_network<Flow>(network: &FlowNetwork<Flow>) -> FlowNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy + NumCast,
{
    let mut expected = network.clone();
    for edge in expected.edges.iter_mut() {
        edge.capacity = expected_capacity(edge.capacity, &edge.weather);
        edge.flow = Flow::zero();
    }
    expected
}

/// Deterministic score: exact max flow of the expected-capacity network.
pub fn expected_max_flow<Flow>(network: &FlowNetwork<Flow>) -> Flow
where
    Flow: NumAssign + Ord + Copy + Bounded + NumCast,
{
    maximum_flow(&expected_capacity_network(network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::graph::Weather;

    #[test]
    fn single_edge_expected_flow_is_its_truncated_ev() {
        let mut network = FlowNetwork::new();
        let u = network.add_node("u").unwrap();
        let v = network.add_node("v").unwrap();
        network.add_source(u).unwrap();
        network.add_sink(v).unwrap();
        network.add_weather_edge(u, v, 10, Weather::slowing(0.5, 0.2).unwrap()).unwrap();

        assert_eq!(expected_max_flow(&network), 6);
    }

    #[test]
    fn clear_weather_leaves_capacities_alone() {
        let mut network = FlowNetwork::new();
        let u = network.add_node("u").unwrap();
        let v = network.add_node("v").unwrap();
        network.add_source(u).unwrap();
        network.add_sink(v).unwrap();
        network.add_directed_edge(u, v, 7).unwrap();

        let expected = expected_capacity_network(&network);
        assert_eq!(expected.get_edge(0).unwrap().capacity, 7);
        assert_eq!(expected_max_flow(&network), 7);
    }
}
