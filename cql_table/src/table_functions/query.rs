use crate::error::SchemaError;
use crate::table_functions::session::Session;
use log::debug;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// Sentencia con sus valores, ligada a la tabla y a la sesión que la ejecuta
#[derive(Clone)]
pub struct Query {
    pub statement: String,             // Sentencia CQL
    pub values: Vec<Value>,            // Valores de los marcadores `?`
    pub table: String,                 // Tabla sobre la que se arma
    session: Option<Arc<dyn Session>>, // Sesión del keyspace, si hay
}

impl Query {
    pub fn new(
        statement: &str,
        values: Vec<Value>,
        table: &str,
        session: Option<Arc<dyn Session>>,
    ) -> Self {
        Query {
            statement: statement.to_string(),
            values,
            table: table.to_string(),
            session,
        }
    }

    /// Ejecuta la sentencia en la sesión.
    pub fn exec(&self) -> Result<(), SchemaError> {
        let session = self.session.as_ref().ok_or_else(|| {
            SchemaError::Session(format!("no hay sesión para la tabla {}", self.table))
        })?;
        debug!("Ejecutando sobre {}: {}", self.table, self.statement);
        session.execute(&self.statement, &self.values)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("statement", &self.statement)
            .field("values", &self.values)
            .field("table", &self.table)
            .field("session", &self.session.is_some())
            .finish()
    }
}
