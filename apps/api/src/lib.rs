/// The fixed listener address.
pub mod config;

/// Contains the setup code for the API
///
/// The API Routes are in the `routes/**` child modules of this
pub mod http;

/// Log filtering shared by the binary and its tests.
pub mod telemetry;
