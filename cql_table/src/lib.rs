//! Deriva el esquema y la sentencia `CREATE TABLE` de una tabla CQL a partir
//! de la tabla de campos declarada de un registro.
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod record;
pub mod registry;
pub mod schema;
pub mod schema_functions;
pub mod table;
pub mod table_functions;

pub use config::SchemaOptions;
pub use error::SchemaError;
pub use record::{FieldDescriptor, Record};
pub use registry::SchemaRegistry;
pub use schema::TableSchema;
pub use schema_functions::native_type::{NativeType, NativeTyped};
pub use table::Table;
pub use table_functions::{
    keyspace::Keyspace,
    query::Query,
    replication_config::{ReplicationClass, ReplicationConfig},
    session::Session,
};
