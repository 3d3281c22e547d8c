use crate::error::SchemaError;
use serde_json::Value;

/// Conexión al cluster capaz de ejecutar una sentencia CQL.
///
/// La sesión la crea y la administra el llamador; las tablas y keyspaces sólo
/// reciben un `Arc` y le delegan la ejecución.
pub trait Session: Send + Sync {
    fn execute(&self, statement: &str, values: &[Value]) -> Result<(), SchemaError>;
}
