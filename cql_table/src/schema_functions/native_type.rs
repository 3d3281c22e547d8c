use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

// Tipos de valor nativos que puede declarar un campo
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Char,
    Text,
    Timestamp,
    Uuid,
    Blob,
    List(Box<NativeType>),
    Set(Box<NativeType>),
    Map(Box<NativeType>, Box<NativeType>),
    Other(&'static str), // Cualquier otro tipo, nunca tiene columna CQL
}

impl NativeType {
    /// Devuelve el tipo CQL de la columna, o `None` si el tipo no tiene mapeo.
    ///
    /// Los enteros sin signo se guardan sin verificar desbordamiento: `u32`
    /// como `int` y `u64` como `bigint`, así que un `u64` mayor que
    /// `i64::MAX` se lee negativo. Las colecciones se mapean de forma recursiva: si un
    /// elemento no tiene mapeo, la colección entera tampoco.
    pub fn cql_type(&self) -> Option<String> {
        let cql = match self {
            NativeType::Bool => "boolean",
            NativeType::Int32 | NativeType::UInt32 => "int",
            NativeType::Int64 | NativeType::UInt64 => "bigint",
            NativeType::Float32 => "float",
            NativeType::Float64 => "double",
            NativeType::Text => "varchar",
            NativeType::Timestamp => "timestamp",
            NativeType::Uuid => "uuid",
            NativeType::Blob => "blob",
            NativeType::List(elemento) => return Some(format!("list<{}>", elemento.cql_type()?)),
            NativeType::Set(elemento) => return Some(format!("set<{}>", elemento.cql_type()?)),
            NativeType::Map(clave, valor) => {
                return Some(format!(
                    "map<{}, {}>",
                    clave.cql_type()?,
                    valor.cql_type()?
                ))
            }
            NativeType::Int8
            | NativeType::Int16
            | NativeType::UInt8
            | NativeType::UInt16
            | NativeType::Char
            | NativeType::Other(_) => return None,
        };
        Some(cql.to_string())
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Bool => write!(f, "bool"),
            NativeType::Int8 => write!(f, "i8"),
            NativeType::Int16 => write!(f, "i16"),
            NativeType::Int32 => write!(f, "i32"),
            NativeType::Int64 => write!(f, "i64"),
            NativeType::UInt8 => write!(f, "u8"),
            NativeType::UInt16 => write!(f, "u16"),
            NativeType::UInt32 => write!(f, "u32"),
            NativeType::UInt64 => write!(f, "u64"),
            NativeType::Float32 => write!(f, "f32"),
            NativeType::Float64 => write!(f, "f64"),
            NativeType::Char => write!(f, "char"),
            NativeType::Text => write!(f, "text"),
            NativeType::Timestamp => write!(f, "timestamp"),
            NativeType::Uuid => write!(f, "uuid"),
            NativeType::Blob => write!(f, "bytes"),
            NativeType::List(elemento) => write!(f, "list<{}>", elemento),
            NativeType::Set(elemento) => write!(f, "set<{}>", elemento),
            NativeType::Map(clave, valor) => write!(f, "map<{}, {}>", clave, valor),
            NativeType::Other(nombre) => write!(f, "{}", nombre),
        }
    }
}

/// Asocia un tipo de Rust con su `NativeType`.
pub trait NativeTyped {
    fn native_type() -> NativeType;
}

macro_rules! native_typed {
    ($($ty:ty => $native:expr),* $(,)?) => {
        $(
            impl NativeTyped for $ty {
                fn native_type() -> NativeType {
                    $native
                }
            }
        )*
    };
}

native_typed! {
    bool => NativeType::Bool,
    i8 => NativeType::Int8,
    i16 => NativeType::Int16,
    i32 => NativeType::Int32,
    i64 => NativeType::Int64,
    u8 => NativeType::UInt8,
    u16 => NativeType::UInt16,
    u32 => NativeType::UInt32,
    u64 => NativeType::UInt64,
    f32 => NativeType::Float32,
    f64 => NativeType::Float64,
    char => NativeType::Char,
    String => NativeType::Text,
    &str => NativeType::Text,
    DateTime<Utc> => NativeType::Timestamp,
    NaiveDateTime => NativeType::Timestamp,
    [u8; 16] => NativeType::Uuid,
}

// Vec<u8> es un blob, cualquier otro Vec es una lista
impl<T: NativeTyped> NativeTyped for Vec<T> {
    fn native_type() -> NativeType {
        match T::native_type() {
            NativeType::UInt8 => NativeType::Blob,
            elemento => NativeType::List(Box::new(elemento)),
        }
    }
}

impl<T: NativeTyped> NativeTyped for Option<T> {
    fn native_type() -> NativeType {
        T::native_type()
    }
}

impl<T: NativeTyped, S> NativeTyped for HashSet<T, S> {
    fn native_type() -> NativeType {
        NativeType::Set(Box::new(T::native_type()))
    }
}

impl<T: NativeTyped> NativeTyped for BTreeSet<T> {
    fn native_type() -> NativeType {
        NativeType::Set(Box::new(T::native_type()))
    }
}

impl<K: NativeTyped, V: NativeTyped, S> NativeTyped for HashMap<K, V, S> {
    fn native_type() -> NativeType {
        NativeType::Map(Box::new(K::native_type()), Box::new(V::native_type()))
    }
}

impl<K: NativeTyped, V: NativeTyped> NativeTyped for BTreeMap<K, V> {
    fn native_type() -> NativeType {
        NativeType::Map(Box::new(K::native_type()), Box::new(V::native_type()))
    }
}
