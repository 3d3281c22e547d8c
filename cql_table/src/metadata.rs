use crate::error::SchemaError;
use crate::record::{FieldDescriptor, Record};

// Separador de la lista de tokens de una marca ("partkey;unique")
const SEPARADOR: char = ';';

/// Evalúa si el valor crudo de una marca contiene el token buscado.
///
/// El valor es una lista de tokens separados por `;`. Hay coincidencia si el
/// valor es igual al token, empieza con `"<token>;"`, termina con
/// `";<token>"` o contiene `";<token>;"`. Son comparaciones de subcadenas
/// acotadas por el separador, no una comparación de conjuntos: un token que
/// contenga `;` se compara tal cual.
pub fn marker_matches(valor: &str, token: &str) -> bool {
    if valor == token {
        return true;
    }
    valor.starts_with(&format!("{}{}", token, SEPARADOR))
        || valor.ends_with(&format!("{}{}", SEPARADOR, token))
        || valor.contains(&format!("{}{}{}", SEPARADOR, token, SEPARADOR))
}

/// Filtra los campos cuyo valor de la marca `marca` no está vacío y, si se
/// pasa un token, coincide con él. Respeta el orden de declaración.
///
/// Un registro sin campos es un error: no se puede distinguir de un tipo cuya
/// tabla de campos no se declaró.
pub fn fields_with_marker<'a>(
    type_name: &str,
    campos: &'a [FieldDescriptor],
    marca: &str,
    token: Option<&str>,
) -> Result<Vec<&'a FieldDescriptor>, SchemaError> {
    if campos.is_empty() {
        return Err(SchemaError::TypeIntrospection(format!(
            "{} no declara ningún campo",
            type_name
        )));
    }

    let token = token.filter(|t| !t.is_empty());
    let mut resultado: Vec<&FieldDescriptor> = campos
        .iter()
        .filter(|campo| {
            let valor = campo.marker(marca);
            if valor.is_empty() {
                return false;
            }
            match token {
                Some(token) => marker_matches(valor, token),
                None => true,
            }
        })
        .collect();

    // La tabla de campos puede venir de una implementación manual
    resultado.sort_by_key(|campo| campo.index);
    Ok(resultado)
}

/// Identificadores de los campos del registro `R` que tienen la marca
/// `marca` (y el token, si se indica), en orden de declaración.
pub fn names_with_marker<R: Record>(
    marca: &str,
    token: Option<&str>,
) -> Result<Vec<&'static str>, SchemaError> {
    let campos = R::fields();
    let nombres = fields_with_marker(R::type_name(), &campos, marca, token)?
        .into_iter()
        .map(|campo| campo.name)
        .collect();
    Ok(nombres)
}
