use crate::config::SchemaOptions;
use crate::error::SchemaError;
use crate::record::Record;
use crate::schema::TableSchema;
use log::info;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Guarda el esquema derivado de cada tipo de registro para no repetir la
/// derivación. El esquema se inserta sólo cuando está completo, y como no se
/// modifica se comparte con `Arc` sin más sincronización.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    opciones: SchemaOptions,
    esquemas: Mutex<HashMap<TypeId, Arc<TableSchema>>>,
}

impl SchemaRegistry {
    pub fn new(opciones: SchemaOptions) -> Self {
        SchemaRegistry {
            opciones,
            esquemas: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.opciones
    }

    /// Devuelve el esquema de `R`, derivándolo la primera vez.
    ///
    /// Si la derivación falla no se guarda nada y el error vuelve al llamador.
    pub fn schema<R: Record + 'static>(&self) -> Result<Arc<TableSchema>, SchemaError> {
        // Los esquemas guardados nunca quedan a medio armar, así que un lock
        // envenenado se puede seguir usando
        let mut esquemas = self
            .esquemas
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(esquema) = esquemas.get(&TypeId::of::<R>()) {
            return Ok(Arc::clone(esquema));
        }

        let esquema = Arc::new(TableSchema::derive_with::<R>(&self.opciones)?);
        info!(
            "Registrado el esquema de la tabla {} para {}",
            esquema.name(),
            R::type_name()
        );
        esquemas.insert(TypeId::of::<R>(), Arc::clone(&esquema));
        Ok(esquema)
    }

    /// Cantidad de esquemas registrados.
    pub fn len(&self) -> usize {
        self.esquemas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use std::thread;

    #[allow(dead_code)]
    struct Aeropuerto {
        codigo: String,
        ciudad: String,
    }

    record!(Aeropuerto {
        codigo: String => { cql: "codigo", cqlx: "partkey" },
        ciudad: String => { cql: "ciudad" },
    });

    #[allow(dead_code)]
    struct Roto {
        valor: char,
    }

    record!(Roto {
        valor: char => { cql: "valor", cqlx: "partkey" },
    });

    #[test]
    fn test_schema_is_memoized() {
        let registro = SchemaRegistry::default();
        assert!(registro.is_empty());
        let primero = registro.schema::<Aeropuerto>().unwrap();
        let segundo = registro.schema::<Aeropuerto>().unwrap();
        assert!(Arc::ptr_eq(&primero, &segundo));
        assert_eq!(registro.len(), 1);
        assert_eq!(primero.name(), "aeropuertos");
    }

    #[test]
    fn test_failed_derivation_is_not_stored() {
        let registro = SchemaRegistry::default();
        assert!(matches!(
            registro.schema::<Roto>(),
            Err(SchemaError::UnsupportedType { .. })
        ));
        assert!(registro.is_empty());
    }

    #[test]
    fn test_shared_between_threads() {
        let registro = Arc::new(SchemaRegistry::default());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let registro = Arc::clone(&registro);
            handles.push(thread::spawn(move || {
                registro.schema::<Aeropuerto>().map(|e| e.columns().to_vec())
            }));
        }
        for handle in handles {
            let columnas = handle.join().unwrap().unwrap();
            assert_eq!(columnas, vec!["ciudad", "codigo"]);
        }
        assert_eq!(registro.len(), 1);
    }
}
