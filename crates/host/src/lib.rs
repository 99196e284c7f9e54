// kinetics-web-host library
// Dev host: static UI assets plus a relay for the /data endpoint

// Configuration
pub mod config;

// REST API
pub mod api;

// Upstream relay
pub mod forward;
