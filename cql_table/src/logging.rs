use flexi_logger::{
    DeferredNow, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode,
};
use log::Record;
use std::io::Write;

/// Inicializa el logger: escribe en `directorio` con buffer y duplica los
/// mensajes de nivel `Info` o mayor a stdout.
///
/// El handle devuelto tiene que vivir mientras se quiera loguear; al
/// descartarlo se vacía el buffer.
pub fn init_logger(nivel: &str, directorio: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    // Definimos un FileSpec que almacene los logs en el directorio indicado
    let file_spec = FileSpec::default().directory(directorio);

    Logger::try_with_str(nivel)? // "debug", "info", "warn", ...
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stdout(Duplicate::Info)
        .format(formato)
        .start()
}

// "<fecha> [<nivel>] - <mensaje>"
fn formato(write: &mut dyn Write, _now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    write!(
        write,
        "{} [{}] - {}",
        chrono::Local::now().format("%Y-%m-%d: %H:%M:%S"),
        record.level(),
        record.args()
    )
}
