use crate::config::SchemaOptions;
use crate::error::SchemaError;
use crate::metadata::fields_with_marker;
use crate::record::{FieldDescriptor, Record};
use crate::schema_functions::{primary_key::PrimaryKey, table_name::default_table_name};
use log::{debug, warn};
use std::collections::HashMap;

/// Esquema de una tabla derivado de la tabla de campos de un registro.
///
/// Se construye entero o no se construye: si alguna marca o tipo no es válido
/// la derivación devuelve el error y no queda ningún esquema parcial. Una vez
/// creado no se modifica, así que puede compartirse entre hilos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,                   // Nombre de la tabla
    primary_key: PrimaryKey,        // Claves de partición y agrupamiento
    columnas: Vec<String>,          // Columnas ordenadas alfabéticamente
    tipos: HashMap<String, String>, // Tipo CQL de cada columna
}

impl TableSchema {
    /// Deriva el esquema de `R` con las marcas por defecto (`cql`, `cqlx`).
    pub fn derive<R: Record>() -> Result<Self, SchemaError> {
        Self::derive_with::<R>(&SchemaOptions::default())
    }

    /// Deriva el esquema de `R` con las marcas y tokens de `opciones`.
    pub fn derive_with<R: Record>(opciones: &SchemaOptions) -> Result<Self, SchemaError> {
        let campos = R::fields();
        let type_name = R::type_name();

        let name = R::table_name().unwrap_or_else(|| default_table_name(type_name));

        let partition_key = key_columns(
            type_name,
            &campos,
            opciones,
            &opciones.partition_token,
        )?;
        let clustering_key = key_columns(
            type_name,
            &campos,
            opciones,
            &opciones.clustering_token,
        )?;
        if let Some(columna) = partition_key.iter().find(|c| clustering_key.contains(*c)) {
            return Err(SchemaError::ConflictingKeyRole(columna.clone()));
        }

        let mut columnas = Vec::new();
        let mut tipos = HashMap::new();
        for campo in fields_with_marker(type_name, &campos, &opciones.serialization_marker, None)? {
            let columna = storage_name(campo, opciones)?;
            if tipos.contains_key(&columna) {
                return Err(SchemaError::DuplicateColumn(columna));
            }
            let tipo = campo
                .native_type
                .cql_type()
                .ok_or_else(|| SchemaError::UnsupportedType {
                    field: campo.name.to_string(),
                    native_type: campo.native_type.to_string(),
                })?;
            tipos.insert(columna.clone(), tipo);
            columnas.push(columna);
        }
        columnas.sort();

        // Las claves tienen que ser columnas guardadas
        let primary_key = PrimaryKey {
            partition_key,
            clustering_key,
        };
        for clave in primary_key
            .partition_key
            .iter()
            .chain(primary_key.clustering_key.iter())
        {
            if !tipos.contains_key(clave) {
                return Err(SchemaError::MissingStorageName(format!(
                    "{} (la clave no es una columna guardada)",
                    clave
                )));
            }
        }

        if primary_key.partition_key.is_empty() {
            warn!("{} no declara claves de partición", type_name);
        }
        debug!(
            "Esquema derivado para {}: tabla {}, {}",
            type_name,
            name,
            primary_key.clause()
        );

        Ok(TableSchema {
            name,
            primary_key,
            columnas,
            tipos,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Claves de partición en orden de declaración.
    pub fn partition_keys(&self) -> &[String] {
        &self.primary_key.partition_key
    }

    /// Claves de agrupamiento en orden de declaración.
    pub fn clustering_keys(&self) -> &[String] {
        &self.primary_key.clustering_key
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    /// Todas las columnas guardadas, en orden alfabético.
    pub fn columns(&self) -> &[String] {
        &self.columnas
    }

    pub fn column_type(&self, columna: &str) -> Option<&str> {
        self.tipos.get(columna).map(String::as_str)
    }

    /// Arma la sentencia `CREATE TABLE` para el keyspace indicado.
    ///
    /// El formato se respeta byte a byte: salto de línea antes de la primera
    /// columna, `",\n"` entre definiciones, y las propiedades unidas con
    /// `" AND "` después de `WITH`. Sin propiedades la sentencia termina en
    /// `") "`. Las propiedades no se validan.
    pub fn create_statement<S: AsRef<str>>(&self, keyspace: &str, propiedades: &[S]) -> String {
        let mut definiciones: Vec<String> = self
            .columnas
            .iter()
            .map(|columna| {
                let tipo = self.column_type(columna).unwrap_or_default();
                format!("{} {}", columna, tipo)
            })
            .collect();
        definiciones.push(self.primary_key.clause());
        definiciones[0] = format!("\n{}", definiciones[0]);

        let propiedades_str = if propiedades.is_empty() {
            String::new()
        } else {
            let unidas: Vec<&str> = propiedades.iter().map(|p| p.as_ref()).collect();
            format!("WITH {}", unidas.join(" AND "))
        };

        format!(
            "CREATE TABLE \"{}\".\"{}\" ({}) {}",
            keyspace,
            self.name,
            definiciones.join(",\n"),
            propiedades_str
        )
    }
}

// Nombre de la columna de un campo, error si la marca falta o está vacía
fn storage_name(campo: &FieldDescriptor, opciones: &SchemaOptions) -> Result<String, SchemaError> {
    let nombre = campo.marker(&opciones.storage_marker);
    if nombre.is_empty() {
        return Err(SchemaError::MissingStorageName(campo.name.to_string()));
    }
    Ok(nombre.to_string())
}

// Columnas de los campos cuyo rol de clave contiene el token
fn key_columns(
    type_name: &str,
    campos: &[FieldDescriptor],
    opciones: &SchemaOptions,
    token: &str,
) -> Result<Vec<String>, SchemaError> {
    fields_with_marker(type_name, campos, &opciones.role_marker, Some(token))?
        .into_iter()
        .map(|campo| storage_name(campo, opciones))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::schema_functions::native_type::NativeType;

    #[allow(dead_code)]
    struct Vuelo {
        numero: String,
        origen: String,
        fecha: String,
        destino: String,
        capacidad: u32,
    }

    record!(Vuelo {
        numero: String => { cql: "numero", cqlx: "softkey" },
        origen: String => { cql: "origen", cqlx: "partkey" },
        fecha: String => { cql: "fecha", cqlx: "partkey" },
        destino: String => { cql: "destino" },
        capacidad: u32 => { cql: "capacidad" },
    });

    #[allow(dead_code)]
    struct SinNombre {
        codigo: String,
    }

    record!(SinNombre {
        codigo: String => { cqlx: "partkey" },
    });

    #[allow(dead_code)]
    struct Radar {
        id: String,
        altitud: i16,
    }

    record!(Radar {
        id: String => { cql: "id", cqlx: "partkey" },
        altitud: i16 => { cql: "altitud" },
    });

    #[allow(dead_code)]
    struct Conflicto {
        id: String,
    }

    record!(Conflicto {
        id: String => { cql: "id", cqlx: "partkey;softkey" },
    });

    #[allow(dead_code)]
    struct Escala {
        aeropuerto: String,
        orden: u32,
    }

    record!(Escala {
        aeropuerto: String => { cql: "aeropuerto", cqlx: "partkey" },
        orden: u32 => { cql: "orden" },
    });

    #[allow(dead_code)]
    struct Duplicado {
        codigo: String,
        alias: i32,
    }

    record!(Duplicado {
        codigo: String => { cql: "codigo", cqlx: "partkey" },
        alias: i32 => { cql: "codigo" },
    });

    #[allow(dead_code)]
    struct Mixto {
        id: String,
        ciudad: String,
    }

    // Con `json` como marca de serialización, `cql` sólo da el nombre
    record!(Mixto {
        id: String => { cql: "id", json: "id", cqlx: "partkey" },
        ciudad: String => { json: "ciudad" },
    });

    #[allow(dead_code)]
    struct ClaveSinGuardar {
        id: String,
        ciudad: String,
    }

    record!(ClaveSinGuardar {
        id: String => { cql: "id", cqlx: "partkey" },
        ciudad: String => { cql: "ciudad", json: "ciudad" },
    });

    fn opciones_json() -> SchemaOptions {
        SchemaOptions {
            serialization_marker: String::from("json"),
            ..SchemaOptions::default()
        }
    }

    #[test]
    fn test_derive_keys_and_columns() {
        let esquema = TableSchema::derive::<Vuelo>().unwrap();
        assert_eq!(esquema.name(), "vuelos");
        assert_eq!(esquema.partition_keys(), ["origen", "fecha"]);
        assert_eq!(esquema.clustering_keys(), ["numero"]);
        assert_eq!(
            esquema.columns(),
            ["capacidad", "destino", "fecha", "numero", "origen"]
        );
        assert_eq!(esquema.column_type("capacidad"), Some("int"));
        assert_eq!(esquema.column_type("inexistente"), None);
    }

    #[test]
    fn test_create_statement_format() {
        let esquema = TableSchema::derive::<Vuelo>().unwrap();
        let sentencia = esquema.create_statement::<&str>("aerolineas", &[]);
        assert_eq!(
            sentencia,
            "CREATE TABLE \"aerolineas\".\"vuelos\" (\ncapacidad int,\ndestino varchar,\nfecha varchar,\nnumero varchar,\norigen varchar,\nPRIMARY KEY ((origen, fecha), numero)) "
        );
    }

    #[test]
    fn test_create_statement_with_properties() {
        let esquema = TableSchema::derive::<Escala>().unwrap();
        let sentencia = esquema.create_statement(
            "aerolineas",
            &[
                "compaction = {'class': 'LeveledCompactionStrategy'}",
                "comment = 'escalas'",
            ],
        );
        assert!(sentencia.ends_with(
            "PRIMARY KEY ((aeropuerto))) WITH compaction = {'class': 'LeveledCompactionStrategy'} AND comment = 'escalas'"
        ));
    }

    #[test]
    fn test_missing_storage_name() {
        let resultado = TableSchema::derive::<SinNombre>();
        assert_eq!(
            resultado,
            Err(SchemaError::MissingStorageName("codigo".to_string()))
        );
    }

    #[test]
    fn test_unsupported_type() {
        let resultado = TableSchema::derive::<Radar>();
        assert_eq!(
            resultado,
            Err(SchemaError::UnsupportedType {
                field: "altitud".to_string(),
                native_type: NativeType::Int16.to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_column() {
        let resultado = TableSchema::derive::<Duplicado>();
        assert_eq!(
            resultado,
            Err(SchemaError::DuplicateColumn("codigo".to_string()))
        );
    }

    #[test]
    fn test_serialized_field_without_storage_name() {
        let resultado = TableSchema::derive_with::<Mixto>(&opciones_json());
        assert_eq!(
            resultado,
            Err(SchemaError::MissingStorageName("ciudad".to_string()))
        );
    }

    #[test]
    fn test_key_that_is_not_stored() {
        let resultado = TableSchema::derive_with::<ClaveSinGuardar>(&opciones_json());
        match resultado {
            Err(SchemaError::MissingStorageName(detalle)) => {
                assert!(detalle.starts_with("id "));
                assert!(detalle.contains("no es una columna guardada"));
            }
            otro => panic!("se esperaba MissingStorageName, se obtuvo {:?}", otro),
        }
    }

    #[test]
    fn test_conflicting_roles() {
        let resultado = TableSchema::derive::<Conflicto>();
        assert_eq!(
            resultado,
            Err(SchemaError::ConflictingKeyRole("id".to_string()))
        );
    }

    #[test]
    fn test_custom_options() {
        let opciones = SchemaOptions {
            clustering_token: String::from("rangekey"),
            ..SchemaOptions::default()
        };
        let esquema = TableSchema::derive_with::<Vuelo>(&opciones).unwrap();
        assert!(esquema.clustering_keys().is_empty());
        assert_eq!(
            esquema.create_statement::<&str>("ks", &[]).lines().last(),
            Some("PRIMARY KEY ((origen, fecha))) ")
        );
    }

    #[test]
    fn test_derive_is_idempotent() {
        let primero = TableSchema::derive::<Vuelo>().unwrap();
        let segundo = TableSchema::derive::<Vuelo>().unwrap();
        assert_eq!(primero, segundo);
        assert_eq!(
            primero.create_statement::<&str>("ks", &[]),
            segundo.create_statement::<&str>("ks", &[])
        );
    }
}
