// Estructura de clave primaria
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryKey {
    pub partition_key: Vec<String>,  // Clave de partición, en orden de declaración
    pub clustering_key: Vec<String>, // Clave de agrupamiento, en orden de declaración
}

impl PrimaryKey {
    /// Cláusula `PRIMARY KEY ((<pk>, ...)[, <ck>, ...])`. Si no hay claves de
    /// agrupamiento se omite el grupo entero, coma incluida.
    pub fn clause(&self) -> String {
        let mut clausula = format!("PRIMARY KEY (({})", self.partition_key.join(", "));
        if !self.clustering_key.is_empty() {
            clausula.push_str(", ");
            clausula.push_str(&self.clustering_key.join(", "));
        }
        clausula.push(')');
        clausula
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_with_clustering() {
        let clave = PrimaryKey {
            partition_key: vec!["origen".to_string(), "fecha".to_string()],
            clustering_key: vec!["numero".to_string()],
        };
        assert_eq!(clave.clause(), "PRIMARY KEY ((origen, fecha), numero)");
    }

    #[test]
    fn test_clause_without_clustering() {
        let clave = PrimaryKey {
            partition_key: vec!["codigo".to_string()],
            clustering_key: Vec::new(),
        };
        assert_eq!(clave.clause(), "PRIMARY KEY ((codigo))");
    }
}
