use network_robustness::allocation::candidates::{CandidateSelector, GuaranteedEdges};
use network_robustness::allocation::distributor::{BudgetDistributor, Termination};
use network_robustness::allocation::ranking::{LowestSlowingProb, MinCapacityPaired};
use network_robustness::augmentation::incremental::{maximum_flow, IncrementalBfs};
use network_robustness::augmentation::residual::ResidualGraph;
use network_robustness::evaluation::expected::expected_max_flow;
use network_robustness::network::graph::FlowNetwork;

/// a->x 3, a->y 2, b->x 1, b->z 1, c->y 1, c->z 3 with sources {a,b,c} and
/// sinks {x,y,z}: every edge is source- and sink-adjacent, so max flow is the
/// total capacity, 11.
fn six_edge_network() -> FlowNetwork<i64> {
    let mut network = FlowNetwork::new();
    let a = network.add_node("a").unwrap();
    let b = network.add_node("b").unwrap();
    let c = network.add_node("c").unwrap();
    let x = network.add_node("x").unwrap();
    let y = network.add_node("y").unwrap();
    let z = network.add_node("z").unwrap();
    for source in [a, b, c] {
        network.add_source(source).unwrap();
    }
    for sink in [x, y, z] {
        network.add_sink(sink).unwrap();
    }
    network.add_directed_edge(a, x, 3).unwrap();
    network.add_directed_edge(a, y, 2).unwrap();
    network.add_directed_edge(b, x, 1).unwrap();
    network.add_directed_edge(b, z, 1).unwrap();
    network.add_directed_edge(c, y, 1).unwrap();
    network.add_directed_edge(c, z, 3).unwrap();
    network
}

fn two_path_network() -> FlowNetwork<i64> {
    let mut network = FlowNetwork::new();
    let a = network.add_node("a").unwrap();
    let b = network.add_node("b").unwrap();
    let x = network.add_node("x").unwrap();
    let y = network.add_node("y").unwrap();
    network.add_source(a).unwrap();
    network.add_source(b).unwrap();
    network.add_sink(x).unwrap();
    network.add_sink(y).unwrap();
    network.add_directed_edge(a, x, 2).unwrap();
    network.add_directed_edge(b, y, 5).unwrap();
    network
}

fn max_flow_residual(network: &FlowNetwork<i64>) -> ResidualGraph<i64> {
    let mut residual = ResidualGraph::from_network(network);
    IncrementalBfs::new().augment(&mut residual);
    residual
}

#[test]
fn fair_allocation_bounds_the_first_increase_to_the_second_smallest_capacity() {
    let residual = max_flow_residual(&two_path_network());
    let report =
        BudgetDistributor::new().distribute_fair(&residual, 10, &GuaranteedEdges, &mut MinCapacityPaired);

    // min(10, 5) = 5 on the cap-2 edge first, then 5 on the other
    assert_eq!(report.distribution.get(&0), Some(&5));
    assert_eq!(report.distribution.get(&1), Some(&5));
    assert_eq!(report.termination, Termination::BudgetExhausted);
    assert_eq!(report.residual.extract_network().total_flow(), 17);
}

#[test]
fn greedy_allocation_conserves_budget_and_raises_flow_by_the_distribution_total() {
    let network = six_edge_network();
    let initial = maximum_flow(&network);
    assert_eq!(initial, 11);

    let residual = max_flow_residual(&network);
    let budget = 4;
    let report =
        BudgetDistributor::new().distribute(&residual, budget, &GuaranteedEdges, &mut LowestSlowingProb);

    assert!(report.total_increase() <= budget);
    assert_eq!(report.residual.extract_network().total_flow(), initial + report.total_increase());
    assert_eq!(report.termination, Termination::BudgetExhausted);
}

#[test]
fn more_budget_never_buys_less_flow() {
    let network = six_edge_network();
    let residual = max_flow_residual(&network);

    let mut previous = 0;
    for budget in 1..=6 {
        let report =
            BudgetDistributor::new().distribute(&residual, budget, &GuaranteedEdges, &mut LowestSlowingProb);
        let increase = report.total_increase();
        assert!(increase >= previous, "budget {budget} bought {increase} < {previous}");
        previous = increase;
    }
}

#[test]
fn every_saturated_edge_of_the_six_edge_network_is_guaranteed() {
    let network = six_edge_network();
    let residual = max_flow_residual(&network);
    assert_eq!(GuaranteedEdges.candidates(&residual), vec![0, 1, 2, 3, 4, 5]);

    // defining property: a unit bump on any of them raises flow past 11
    let mut engine = IncrementalBfs::new();
    for edge_id in 0..6 {
        let mut bumped = residual.clone();
        bumped.increase_capacity(edge_id, 1);
        assert_eq!(engine.augment(&mut bumped), 1, "edge {edge_id}");
    }
}

#[test]
fn allocation_then_cleaning_then_scoring_reports_the_improvement() {
    let network = six_edge_network();
    let before = expected_max_flow(&network);
    assert_eq!(before, 11);

    let residual = max_flow_residual(&network);
    let report =
        BudgetDistributor::new().distribute(&residual, 4, &GuaranteedEdges, &mut LowestSlowingProb);

    let improved = report.residual.extract_network().clean();
    let after = expected_max_flow(&improved);
    assert_eq!(after, before + report.total_increase());
    assert_eq!(after, 15);
}
