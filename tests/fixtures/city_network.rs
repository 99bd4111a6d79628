//! Canonical 8-location city delivery network.
//!
//! Distances are kilometers. The layout has enough cycles to produce
//! several alternative routes between most pairs, plus it is small enough
//! to verify expected paths by hand.

use delivery_planner::network::DeliveryNetwork;

pub const WAREHOUSE: &str = "Warehouse";
pub const DOWNTOWN: &str = "Downtown";
pub const UNIVERSITY: &str = "University";
pub const SHOPPING_MALL: &str = "Shopping Mall";
pub const RESIDENTIAL: &str = "Residential Area";
pub const INDUSTRIAL_PARK: &str = "Industrial Park";
pub const AIRPORT: &str = "Airport";
pub const HOSPITAL: &str = "Hospital";

pub const ALL_LOCATIONS: [&str; 8] = [
    WAREHOUSE,
    DOWNTOWN,
    UNIVERSITY,
    SHOPPING_MALL,
    RESIDENTIAL,
    INDUSTRIAL_PARK,
    AIRPORT,
    HOSPITAL,
];

/// Builds the standard city network used across the integration suites.
pub fn city_network() -> DeliveryNetwork {
    let mut network = DeliveryNetwork::new();

    for location in ALL_LOCATIONS {
        network.register_location(location);
    }

    network.add_route(WAREHOUSE, DOWNTOWN, 5.2);
    network.add_route(WAREHOUSE, INDUSTRIAL_PARK, 3.8);
    network.add_route(DOWNTOWN, UNIVERSITY, 2.1);
    network.add_route(DOWNTOWN, SHOPPING_MALL, 4.3);
    network.add_route(UNIVERSITY, HOSPITAL, 3.5);
    network.add_route(SHOPPING_MALL, RESIDENTIAL, 2.8);
    network.add_route(INDUSTRIAL_PARK, AIRPORT, 6.7);
    network.add_route(RESIDENTIAL, HOSPITAL, 3.2);
    network.add_route(AIRPORT, HOSPITAL, 8.1);
    network.add_route(SHOPPING_MALL, HOSPITAL, 4.0);
    network.add_route(UNIVERSITY, RESIDENTIAL, 2.9);

    network
}
