use crate::error::SchemaError;
use crate::record::Record;
use crate::table::Table;
use crate::table_functions::replication_config::ReplicationConfig;
use crate::table_functions::session::Session;
use log::info;
use std::fmt;
use std::sync::Arc;

// Estructura que representa un keyspace
#[derive(Clone)]
pub struct Keyspace {
    name: String,                      // Nombre del keyspace
    session: Option<Arc<dyn Session>>, // Sesión que ejecuta las sentencias
}

impl Keyspace {
    pub fn new(name: &str, session: Arc<dyn Session>) -> Self {
        Keyspace {
            name: name.to_string(),
            session: Some(session),
        }
    }

    /// Keyspace sin sesión: sirve para armar esquemas y sentencias, pero no
    /// para ejecutarlas.
    pub fn without_session(name: &str) -> Self {
        Keyspace {
            name: name.to_string(),
            session: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session(&self) -> Option<&Arc<dyn Session>> {
        self.session.as_ref()
    }

    /// Tabla del registro `R` dentro de este keyspace.
    pub fn table<R: Record>(&self) -> Result<Table<R>, SchemaError> {
        Table::new(self.clone())
    }

    pub fn create_statement(&self, replicacion: &ReplicationConfig) -> String {
        format!(
            "CREATE KEYSPACE \"{}\" WITH replication = {}",
            self.name,
            replicacion.to_cql()
        )
    }

    pub fn create(&self, replicacion: &ReplicationConfig) -> Result<(), SchemaError> {
        self.execute(&self.create_statement(replicacion))?;
        info!("Keyspace {} creado", self.name);
        Ok(())
    }

    pub fn drop(&self) -> Result<(), SchemaError> {
        self.execute(&format!("DROP KEYSPACE \"{}\"", self.name))?;
        info!("Keyspace {} eliminado", self.name);
        Ok(())
    }

    pub(crate) fn execute(&self, statement: &str) -> Result<(), SchemaError> {
        match &self.session {
            Some(session) => session.execute(statement, &[]),
            None => Err(SchemaError::Session(format!(
                "el keyspace {} no tiene sesión",
                self.name
            ))),
        }
    }
}

impl fmt::Debug for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyspace")
            .field("name", &self.name)
            .field("session", &self.session.is_some())
            .finish()
    }
}
