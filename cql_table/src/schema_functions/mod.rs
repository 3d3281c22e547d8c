/// Módulo con la tabla de tipos nativos a tipos CQL.
pub mod native_type;
/// Módulo con la clave primaria de una tabla.
pub mod primary_key;
/// Módulo para derivar el nombre de la tabla.
pub mod table_name;
