use chrono::{DateTime, Utc};
use cql_table::logging::init_logger;
use cql_table::{record, Keyspace, SchemaOptions, SchemaRegistry, Table};
use log::{error, info};
use std::env;
use std::process;

// Registro de ejemplo: un vuelo de la aerolínea
#[allow(dead_code)]
struct Vuelo {
    numero: String,
    origen: String,
    destino: String,
    fecha: String,
    partida: DateTime<Utc>,
    asientos: u32,
    estado: String,
}

record!(Vuelo {
    numero: String => { cql: "numero", cqlx: "softkey" },
    origen: String => { cql: "origen", cqlx: "partkey" },
    destino: String => { cql: "destino" },
    fecha: String => { cql: "fecha", cqlx: "partkey" },
    partida: DateTime<Utc> => { cql: "partida" },
    asientos: u32 => { cql: "asientos" },
    estado: String => { cql: "estado" },
});

// Uso: cql_table [keyspace] [config.json]
fn main() {
    let args: Vec<String> = env::args().collect();
    let keyspace = args.get(1).map(String::as_str).unwrap_or("aerolineas");

    let _logger = match init_logger("info", "logs") {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Error al inicializar el logger: {:?}", e);
            None
        }
    };

    let opciones = match args.get(2) {
        Some(ruta) => match SchemaOptions::from_file(ruta) {
            Ok(opciones) => opciones,
            Err(e) => {
                error!("Error al leer la configuración {}: {}", ruta, e);
                process::exit(1);
            }
        },
        None => SchemaOptions::default(),
    };

    let registro = SchemaRegistry::new(opciones);
    let tabla: Table<Vuelo> =
        match Table::from_registry(Keyspace::without_session(keyspace), &registro) {
            Ok(tabla) => tabla,
            Err(e) => {
                error!("Error al derivar el esquema: {}", e);
                process::exit(1);
            }
        };

    info!(
        "Tabla {} con claves de partición {:?} y de agrupamiento {:?}",
        tabla.name(),
        tabla.row_keys(),
        tabla.range_keys()
    );
    let propiedades = registro.options().table_properties.clone();
    println!("{}", tabla.create_statement(&propiedades));
}
