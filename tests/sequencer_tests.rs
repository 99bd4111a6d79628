//! Multi-stop sequencing tests
//!
//! Nearest-neighbor plans over the shared city network fixture, plus
//! infeasibility reporting.

mod fixtures;

use delivery_planner::network::{DeliveryNetwork, PlanError};

use fixtures::city_network::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Nearest-Neighbor Plans
// ============================================================================

#[test]
fn visits_every_stop_exactly_once() {
    let mut network = city_network();
    let stops = [
        HOSPITAL,
        AIRPORT,
        RESIDENTIAL,
        UNIVERSITY,
    ];
    let plan = network
        .sequence(WAREHOUSE, &stops, false)
        .expect("all stops are reachable");

    assert_eq!(plan.order.len(), stops.len() + 1);
    assert_eq!(plan.order[0], WAREHOUSE);
    for stop in stops {
        let count = plan.order.iter().filter(|name| name == &stop).count();
        assert_eq!(count, 1, "{stop} should be visited exactly once");
    }
}

#[test]
fn total_distance_is_sum_of_segment_distances() {
    let mut network = city_network();
    let plan = network
        .sequence(
            WAREHOUSE,
            &[HOSPITAL, SHOPPING_MALL],
            true,
        )
        .expect("plan should be feasible");

    let summed: f64 = plan
        .segments
        .iter()
        .map(|segment| network.path_distance(segment))
        .sum();
    assert_close(plan.total_distance, summed);
}

#[test]
fn segments_chain_through_the_visit_order() {
    let mut network = city_network();
    let plan = network
        .sequence(
            WAREHOUSE,
            &[
                UNIVERSITY,
                HOSPITAL,
                SHOPPING_MALL,
            ],
            false,
        )
        .expect("plan should be feasible");

    assert_eq!(plan.segments.len(), plan.order.len() - 1);
    for (leg, segment) in plan.segments.iter().enumerate() {
        let segment_names = network.path_names(segment).expect("indices resolve");
        assert_eq!(segment_names.first(), Some(&plan.order[leg]));
        assert_eq!(segment_names.last(), Some(&plan.order[leg + 1]));
    }
}

#[test]
fn greedy_picks_nearest_stop_first() {
    let mut network = city_network();
    // From the warehouse: University 7.3, Shopping Mall 9.5, Hospital 10.8.
    // Then University-Hospital 3.5 beats University-Mall 5.7.
    let plan = network
        .sequence(
            WAREHOUSE,
            &[
                SHOPPING_MALL,
                HOSPITAL,
                UNIVERSITY,
            ],
            false,
        )
        .expect("plan should be feasible");

    assert_eq!(
        plan.order,
        vec![
            WAREHOUSE,
            UNIVERSITY,
            HOSPITAL,
            SHOPPING_MALL,
        ]
    );
    assert_close(plan.total_distance, 7.3 + 3.5 + 4.0);
}

#[test]
fn return_to_depot_appends_closing_leg() {
    let mut network = city_network();
    let open = network
        .sequence(
            WAREHOUSE,
            &[UNIVERSITY, HOSPITAL],
            false,
        )
        .expect("open plan should be feasible");
    let closed = network
        .sequence(
            WAREHOUSE,
            &[UNIVERSITY, HOSPITAL],
            true,
        )
        .expect("closed plan should be feasible");

    assert_eq!(closed.order.len(), open.order.len() + 1);
    assert_eq!(closed.order.last().map(String::as_str), Some(WAREHOUSE));
    assert_eq!(closed.segments.len(), open.segments.len() + 1);
    assert!(closed.total_distance > open.total_distance);
}

#[test]
fn nearer_stop_b_is_sequenced_before_d() {
    let mut network = DeliveryNetwork::new();
    network.add_route("A", "B", 5.2);
    network.add_route("A", "C", 3.8);
    network.add_route("B", "D", 2.1);

    let plan = network.sequence("A", &["B", "D"], false).expect("feasible");
    assert_eq!(plan.order, vec!["A", "B", "D"]);
    assert_close(plan.total_distance, 7.3);
}

// ============================================================================
// Infeasible Plans
// ============================================================================

#[test]
fn unreachable_stop_fails_the_plan() {
    let mut network = city_network();
    network.register_location("Island Depot");

    let err = network
        .sequence(
            WAREHOUSE,
            &[DOWNTOWN, "Island Depot"],
            false,
        )
        .unwrap_err();
    assert!(matches!(err, PlanError::Sequence(_)));
}

#[test]
fn depot_in_stop_list_costs_nothing_extra() {
    let mut network = city_network();
    let plan = network
        .sequence(
            WAREHOUSE,
            &[WAREHOUSE, DOWNTOWN],
            false,
        )
        .expect("feasible");
    // The depot "stop" is a trivial zero-length leg taken first.
    assert_eq!(
        plan.order,
        vec![
            WAREHOUSE,
            WAREHOUSE,
            DOWNTOWN,
        ]
    );
    assert_close(plan.total_distance, 5.2);
}

// ============================================================================
// Serialization Boundary
// ============================================================================

#[test]
fn delivery_plan_serializes_for_the_frontend() {
    let mut network = city_network();
    let plan = network
        .sequence(WAREHOUSE, &[DOWNTOWN], true)
        .expect("feasible");
    let json = serde_json::to_string(&plan).expect("plan should serialize");
    assert!(json.contains("total_distance"));
    assert!(json.contains(WAREHOUSE));
}
