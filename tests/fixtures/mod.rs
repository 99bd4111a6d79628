//! Test fixtures for delivery-planner.
//!
//! Provides a canonical city delivery network with realistic distances,
//! shared by the routing and sequencing integration suites.

pub mod city_network;

pub use city_network::*;
