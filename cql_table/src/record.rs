use crate::schema_functions::native_type::NativeType;

// Descripción estática de un campo declarado del registro
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub index: usize,                                // Orden de declaración
    pub name: &'static str,                          // Identificador del campo
    pub native_type: NativeType,                     // Tipo de valor del campo
    pub markers: Vec<(&'static str, &'static str)>, // Marcas (nombre, valor)
}

impl FieldDescriptor {
    /// Valor crudo de la marca `nombre`, vacío si el campo no la tiene.
    pub fn marker(&self, nombre: &str) -> &'static str {
        self.markers
            .iter()
            .find(|(marca, _)| *marca == nombre)
            .map(|(_, valor)| *valor)
            .unwrap_or("")
    }
}

/// Tipo de registro cuya tabla de campos se declara de forma estática.
///
/// Normalmente se implementa con la macro [`record!`](crate::record!), que
/// arma la tabla de campos con sus marcas a partir de la declaración.
pub trait Record {
    /// Nombre del tipo; por defecto el que informa el compilador.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Nombre de tabla definido por el usuario, si existe.
    fn table_name() -> Option<String> {
        None
    }

    /// Campos del registro en orden de declaración.
    fn fields() -> Vec<FieldDescriptor>;
}

// Una referencia o un Box describen la misma tabla que el valor
impl<'a, R: Record> Record for &'a R {
    fn type_name() -> &'static str {
        R::type_name()
    }

    fn table_name() -> Option<String> {
        R::table_name()
    }

    fn fields() -> Vec<FieldDescriptor> {
        R::fields()
    }
}

impl<R: Record> Record for Box<R> {
    fn type_name() -> &'static str {
        R::type_name()
    }

    fn table_name() -> Option<String> {
        R::table_name()
    }

    fn fields() -> Vec<FieldDescriptor> {
        R::fields()
    }
}

/// Declara la tabla de campos de un registro e implementa [`Record`].
///
/// ```
/// use cql_table::record;
///
/// pub struct Usuario {
///     pub email: String,
///     pub activo: bool,
/// }
///
/// record!(Usuario {
///     email: String => { cql: "email" },
///     activo: bool => { cql: "activo", cqlx: "partkey" },
/// });
/// ```
///
/// Con `as "nombre"` se fija el nombre de la tabla en vez de derivarlo:
/// `record!(Usuario as "usuarios_v2" { ... })`.
#[macro_export]
macro_rules! record {
    (
        $tipo:ident $(as $tabla:literal)? {
            $( $campo:ident : $ty:ty $(=> { $( $marca:ident : $valor:literal ),* $(,)? })? ),* $(,)?
        }
    ) => {
        impl $crate::record::Record for $tipo {
            fn type_name() -> &'static str {
                stringify!($tipo)
            }

            $(
                fn table_name() -> Option<String> {
                    Some(String::from($tabla))
                }
            )?

            #[allow(unused_mut)]
            fn fields() -> Vec<$crate::record::FieldDescriptor> {
                let mut campos = Vec::new();
                $(
                    campos.push($crate::record::FieldDescriptor {
                        index: campos.len(),
                        name: stringify!($campo),
                        native_type:
                            <$ty as $crate::schema_functions::native_type::NativeTyped>::native_type(),
                        markers: vec![$($( (stringify!($marca), $valor) ),*)?],
                    });
                )*
                campos
            }
        }
    };
}
