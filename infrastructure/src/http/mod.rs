//! HTTP adapter for the council service

mod gateway;

pub use gateway::HttpCouncilGateway;
