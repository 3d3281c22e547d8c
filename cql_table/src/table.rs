use crate::config::SchemaOptions;
use crate::error::SchemaError;
use crate::record::Record;
use crate::registry::SchemaRegistry;
use crate::schema::TableSchema;
use crate::table_functions::{keyspace::Keyspace, query::Query};
use log::{debug, info};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Tabla del registro `R` dentro de un keyspace.
///
/// El esquema se deriva al crear la tabla; si falla, no hay tabla. Las
/// operaciones que hablan con el cluster usan la sesión del keyspace.
#[derive(Debug)]
pub struct Table<R> {
    keyspace: Keyspace,
    schema: Arc<TableSchema>,
    propiedades: Vec<String>, // Propiedades por defecto del CREATE TABLE
    record: PhantomData<fn() -> R>,
}

// Clone manual: R no necesita ser Clone
impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Table {
            keyspace: self.keyspace.clone(),
            schema: Arc::clone(&self.schema),
            propiedades: self.propiedades.clone(),
            record: PhantomData,
        }
    }
}

impl<R: Record> Table<R> {
    pub fn new(keyspace: Keyspace) -> Result<Self, SchemaError> {
        Self::with_options(keyspace, &SchemaOptions::default())
    }

    /// Deriva el esquema con `opciones`; sus `table_properties` quedan como
    /// propiedades por defecto de [`Table::create`].
    pub fn with_options(keyspace: Keyspace, opciones: &SchemaOptions) -> Result<Self, SchemaError> {
        let schema = Arc::new(TableSchema::derive_with::<R>(opciones)?);
        Ok(Self::from_parts(keyspace, schema, opciones))
    }

    /// Usa el esquema memorizado en el registro.
    pub fn from_registry(keyspace: Keyspace, registro: &SchemaRegistry) -> Result<Self, SchemaError>
    where
        R: 'static,
    {
        let schema = registro.schema::<R>()?;
        Ok(Self::from_parts(keyspace, schema, registro.options()))
    }

    fn from_parts(keyspace: Keyspace, schema: Arc<TableSchema>, opciones: &SchemaOptions) -> Self {
        Table {
            keyspace,
            schema,
            propiedades: opciones.table_properties.clone(),
            record: PhantomData,
        }
    }
}

impl<R> Table<R> {
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    pub fn schema(&self) -> &Arc<TableSchema> {
        &self.schema
    }

    /// Claves de partición (row keys), en orden de declaración.
    pub fn row_keys(&self) -> &[String] {
        self.schema.partition_keys()
    }

    /// Claves de agrupamiento (range keys), en orden de declaración.
    pub fn range_keys(&self) -> &[String] {
        self.schema.clustering_keys()
    }

    /// Columnas guardadas, en orden alfabético.
    pub fn rows(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn partition_keys(&self) -> &[String] {
        self.schema.partition_keys()
    }

    pub fn clustering_keys(&self) -> &[String] {
        self.schema.clustering_keys()
    }

    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn column_type(&self, columna: &str) -> Option<&str> {
        self.schema.column_type(columna)
    }

    /// Sentencia `CREATE TABLE` con las propiedades indicadas.
    pub fn create_statement<S: AsRef<str>>(&self, propiedades: &[S]) -> String {
        self.schema.create_statement(self.keyspace.name(), propiedades)
    }

    /// Crea la tabla con las propiedades por defecto.
    pub fn create(&self) -> Result<(), SchemaError> {
        self.create_with_properties(&self.propiedades)
    }

    pub fn create_with_properties<S: AsRef<str>>(&self, propiedades: &[S]) -> Result<(), SchemaError> {
        let sentencia = self.create_statement(propiedades);
        debug!("{}", sentencia);
        self.keyspace.execute(&sentencia)?;
        info!("Tabla {}.{} creada", self.keyspace.name(), self.name());
        Ok(())
    }

    pub fn drop(&self) -> Result<(), SchemaError> {
        self.keyspace.execute(&format!(
            "DROP TABLE \"{}\".\"{}\"",
            self.keyspace.name(),
            self.name()
        ))?;
        info!("Tabla {}.{} eliminada", self.keyspace.name(), self.name());
        Ok(())
    }

    /// Arma una consulta sobre esta tabla con la sesión del keyspace.
    pub fn query(&self, statement: &str, values: Vec<Value>) -> Query {
        Query::new(
            statement,
            values,
            self.name(),
            self.keyspace.session().cloned(),
        )
    }
}
