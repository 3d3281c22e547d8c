use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Opciones de la derivación: nombres de las marcas y tokens de rol de clave
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    pub storage_marker: String,        // Marca con el nombre de la columna
    pub serialization_marker: String,  // Marca que indica que el campo se guarda
    pub role_marker: String,           // Marca con la lista de roles de clave
    pub partition_token: String,       // Token de clave de partición
    pub clustering_token: String,      // Token de clave de agrupamiento
    pub table_properties: Vec<String>, // Propiedades para el WITH del CREATE TABLE
}

impl Default for SchemaOptions {
    fn default() -> Self {
        SchemaOptions {
            storage_marker: String::from("cql"),
            serialization_marker: String::from("cql"),
            role_marker: String::from("cqlx"),
            partition_token: String::from("partkey"),
            clustering_token: String::from("softkey"),
            table_properties: Vec::new(),
        }
    }
}

impl SchemaOptions {
    /// Lee las opciones de un JSON; los campos ausentes toman el valor por defecto.
    pub fn from_json(contenido: &str) -> Result<Self, SchemaError> {
        let opciones: SchemaOptions = serde_json::from_str(contenido)?;
        opciones.validate()?;
        Ok(opciones)
    }

    /// Lee las opciones de un archivo JSON.
    pub fn from_file<P: AsRef<Path>>(ruta: P) -> Result<Self, SchemaError> {
        let contenido = fs::read_to_string(ruta)?;
        Self::from_json(&contenido)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let obligatorios = [
            ("storage_marker", &self.storage_marker),
            ("serialization_marker", &self.serialization_marker),
            ("role_marker", &self.role_marker),
            ("partition_token", &self.partition_token),
            ("clustering_token", &self.clustering_token),
        ];
        for (nombre, valor) in obligatorios.iter() {
            if valor.is_empty() {
                return Err(SchemaError::Config(format!("{} no puede estar vacío", nombre)));
            }
        }
        if self.partition_token == self.clustering_token {
            return Err(SchemaError::Config(
                "partition_token y clustering_token deben ser distintos".to_string(),
            ));
        }
        Ok(())
    }
}
