// error.rs

use std::fmt;

// Define los tipos de errores de la derivación del esquema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// El tipo no expone una tabla de campos válida (por ejemplo, cero campos).
    TypeIntrospection(String),
    /// Un campo marcado como clave o columna no tiene nombre de columna.
    MissingStorageName(String),
    /// El tipo nativo del campo no tiene entrada en la tabla de tipos CQL.
    UnsupportedType { field: String, native_type: String },
    /// Un campo es a la vez clave de partición y de agrupamiento.
    ConflictingKeyRole(String),
    /// Dos campos guardan en la misma columna.
    DuplicateColumn(String),
    /// La sesión rechazó la sentencia o no hay sesión configurada.
    Session(String),
    /// No se pudo leer o interpretar la configuración.
    Config(String),
}

// Implementa fmt::Display para SchemaError
impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::TypeIntrospection(description) => {
                write!(f, "Invalid record type: {}", description)
            }
            SchemaError::MissingStorageName(field) => {
                write!(f, "Missing storage column name for field: {}", field)
            }
            SchemaError::UnsupportedType { field, native_type } => {
                write!(
                    f,
                    "Unsupported type {} for column of field: {}",
                    native_type, field
                )
            }
            SchemaError::ConflictingKeyRole(field) => {
                write!(f, "Field is both partition and clustering key: {}", field)
            }
            SchemaError::DuplicateColumn(column) => {
                write!(f, "Column defined by more than one field: {}", column)
            }
            SchemaError::Session(description) => write!(f, "Session error: {}", description),
            SchemaError::Config(description) => write!(f, "Config error: {}", description),
        }
    }
}

// Implementa el trait std::error::Error para SchemaError
impl std::error::Error for SchemaError {}

impl From<std::io::Error> for SchemaError {
    fn from(error: std::io::Error) -> Self {
        SchemaError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(error: serde_json::Error) -> Self {
        SchemaError::Config(error.to_string())
    }
}
