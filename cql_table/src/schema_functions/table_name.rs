/// Nombre simple de un tipo: sin ruta de módulos, sin referencias y sin
/// argumentos genéricos (`crate::models::User<T>` → `User`).
pub fn simple_type_name(type_name: &str) -> &str {
    let sin_genericos = match type_name.find('<') {
        Some(indice) => &type_name[..indice],
        None => type_name,
    };
    let sin_ruta = match sin_genericos.rfind("::") {
        Some(indice) => &sin_genericos[indice + 2..],
        None => sin_genericos,
    };
    sin_ruta.trim_start_matches(&['&', ' '][..])
}

/// Nombre de tabla por defecto: el nombre simple del tipo en plural y en
/// snake case (`UserAccount` → `user_accounts`).
pub fn default_table_name(type_name: &str) -> String {
    to_snake_case(&format!("{}s", simple_type_name(type_name)))
}

/// Convierte un nombre en camel case o Pascal case a snake case en minúsculas.
///
/// Una mayúscula seguida de minúscula empieza una palabra nueva, de modo que
/// en una sigla la última mayúscula queda con la palabra siguiente
/// (`HTTPServer` → `http_server`). Una minúscula o un dígito seguido de una
/// mayúscula también separa palabras.
pub fn to_snake_case(nombre: &str) -> String {
    let caracteres: Vec<char> = nombre.chars().collect();

    // Primera pasada: separa antes de cada mayúscula seguida de minúscula
    let mut primera = Vec::with_capacity(caracteres.len() + 4);
    for (i, c) in caracteres.iter().enumerate() {
        let empieza_palabra = i > 0
            && c.is_ascii_uppercase()
            && caracteres
                .get(i + 1)
                .map_or(false, |siguiente| siguiente.is_ascii_lowercase());
        if empieza_palabra {
            primera.push('_');
        }
        primera.push(*c);
    }

    // Segunda pasada: separa minúscula o dígito seguido de mayúscula
    let mut resultado = String::with_capacity(primera.len() + 4);
    for (i, c) in primera.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let anterior = primera[i - 1];
            if anterior.is_ascii_lowercase() || anterior.is_ascii_digit() {
                resultado.push('_');
            }
        }
        resultado.push(c.to_ascii_lowercase());
    }
    resultado
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("User"), "user");
        assert_eq!(to_snake_case("UserAccount"), "user_account");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("Vuelo2Destino"), "vuelo2_destino");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_default_table_name() {
        assert_eq!(default_table_name("User"), "users");
        assert_eq!(default_table_name("app::models::UserAccount"), "user_accounts");
        assert_eq!(default_table_name("&app::HTTPServer"), "http_servers");
        assert_eq!(default_table_name("app::Wrapper<app::Inner>"), "wrappers");
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("core::option::Option<i32>"), "Option");
        assert_eq!(simple_type_name("Avion"), "Avion");
    }
}
