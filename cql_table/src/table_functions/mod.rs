/// Módulo para manejar keyspaces.
pub mod keyspace;
/// Módulo para las consultas ligadas a una tabla.
pub mod query;
/// Módulo con la configuración de replicación de un keyspace.
pub mod replication_config;
/// Módulo con la sesión que ejecuta las sentencias.
pub mod session;
