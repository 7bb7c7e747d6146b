//! Command line client for the modulus server.

pub mod api_client;
