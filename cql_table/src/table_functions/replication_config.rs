use std::fmt;

// Estrategias de replicación de un keyspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationClass {
    SimpleStrategy,
    NetworkTopologyStrategy,
}

impl fmt::Display for ReplicationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplicationClass::SimpleStrategy => write!(f, "SimpleStrategy"),
            ReplicationClass::NetworkTopologyStrategy => write!(f, "NetworkTopologyStrategy"),
        }
    }
}

// Configuración de replicación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationConfig {
    pub class: ReplicationClass, // Estrategia de replicación
    pub replication_factor: u32, // Factor de replicación
}

impl ReplicationConfig {
    /// Mapa de replicación tal como va en el `WITH replication = ...`.
    pub fn to_cql(&self) -> String {
        format!(
            "{{'class': '{}', 'replication_factor': {}}}",
            self.class, self.replication_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cql() {
        let config = ReplicationConfig {
            class: ReplicationClass::SimpleStrategy,
            replication_factor: 3,
        };
        assert_eq!(
            config.to_cql(),
            "{'class': 'SimpleStrategy', 'replication_factor': 3}"
        );
    }
}
