/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (file system,
/// console) through the driven ports in `outbound`. The CLI drives the use
/// cases directly.
pub mod outbound;
