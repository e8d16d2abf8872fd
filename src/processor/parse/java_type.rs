// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Closed set of persistable Java types.
//!
//! # Type Mapping
//!
//! | Java type | Boxed | Storage | Cursor read |
//! |-----------|-------|---------|-------------|
//! | `boolean` / `java.lang.Boolean` | no / yes | `INTEGER` | `getInt(i) == 1` |
//! | `short` / `java.lang.Short` | no / yes | `INTEGER` | `getShort(i)` |
//! | `int` / `java.lang.Integer` | no / yes | `INTEGER` | `getInt(i)` |
//! | `long` / `java.lang.Long` | no / yes | `INTEGER` | `getLong(i)` |
//! | `float` / `java.lang.Float` | no / yes | `REAL` | `getFloat(i)` |
//! | `double` / `java.lang.Double` | no / yes | `REAL` | `getDouble(i)` |
//! | `java.lang.String` | yes | `TEXT` | `getString(i)` |
//! | `byte[]` | yes | `BLOB` | `getBlob(i)` |
//!
//! Anything else is rejected; there is no extension hook.

use crate::{
    host::TypeMirror,
    utils::java::{ClassName, JavaFile, string_literal}
};

/// Supported column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaType {
    /// `boolean`
    Boolean,
    /// `java.lang.Boolean`
    BooleanObject,
    /// `short`
    Short,
    /// `java.lang.Short`
    ShortObject,
    /// `int`
    Integer,
    /// `java.lang.Integer`
    IntegerObject,
    /// `long`
    Long,
    /// `java.lang.Long`
    LongObject,
    /// `float`
    Float,
    /// `java.lang.Float`
    FloatObject,
    /// `double`
    Double,
    /// `java.lang.Double`
    DoubleObject,
    /// `java.lang.String`
    String,
    /// `byte[]`
    ByteArray
}

/// SQLite storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// Whole numbers and booleans.
    Integer,
    /// Floating point numbers.
    Real,
    /// Strings.
    Text,
    /// Byte arrays.
    Blob
}

impl StorageType {
    /// DDL spelling.
    #[must_use]
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB"
        }
    }
}

impl JavaType {
    /// Classify a printed host type.
    ///
    /// Returns `None` for every type outside the supported set.
    #[must_use]
    pub fn from_type_mirror(ty: &TypeMirror) -> Option<Self> {
        let java_type = match ty.as_str() {
            "boolean" => Self::Boolean,
            "java.lang.Boolean" => Self::BooleanObject,
            "short" => Self::Short,
            "java.lang.Short" => Self::ShortObject,
            "int" => Self::Integer,
            "java.lang.Integer" => Self::IntegerObject,
            "long" => Self::Long,
            "java.lang.Long" => Self::LongObject,
            "float" => Self::Float,
            "java.lang.Float" => Self::FloatObject,
            "double" => Self::Double,
            "java.lang.Double" => Self::DoubleObject,
            "java.lang.String" => Self::String,
            "byte[]" => Self::ByteArray,
            _ => return None
        };
        Some(java_type)
    }

    /// Whether values of this type may be `null`.
    #[must_use]
    pub fn is_boxed(&self) -> bool {
        !matches!(
            self,
            Self::Boolean | Self::Short | Self::Integer | Self::Long | Self::Float | Self::Double
        )
    }

    /// Storage class used in DDL.
    #[must_use]
    pub fn storage(&self) -> StorageType {
        match self {
            Self::Boolean
            | Self::BooleanObject
            | Self::Short
            | Self::ShortObject
            | Self::Integer
            | Self::IntegerObject
            | Self::Long
            | Self::LongObject => StorageType::Integer,
            Self::Float | Self::FloatObject | Self::Double | Self::DoubleObject => {
                StorageType::Real
            }
            Self::String => StorageType::Text,
            Self::ByteArray => StorageType::Blob
        }
    }

    /// `Cursor` getter reading this type.
    #[must_use]
    pub fn cursor_getter(&self) -> &'static str {
        match self {
            Self::Boolean | Self::BooleanObject | Self::Integer | Self::IntegerObject => "getInt",
            Self::Short | Self::ShortObject => "getShort",
            Self::Long | Self::LongObject => "getLong",
            Self::Float | Self::FloatObject => "getFloat",
            Self::Double | Self::DoubleObject => "getDouble",
            Self::String => "getString",
            Self::ByteArray => "getBlob"
        }
    }

    /// Expression reading `column` from a variable named `cursor`.
    #[must_use]
    pub fn cursor_read(&self, column: &str) -> String {
        let read = format!("cursor.{}({})", self.cursor_getter(), column_index(column));
        match self {
            Self::Boolean | Self::BooleanObject => format!("{read} == 1"),
            _ => read
        }
    }

    /// Name of the type in generated code, importing it into `file` if
    /// needed.
    pub fn declare(&self, file: &mut JavaFile) -> String {
        let boxed = match self {
            Self::Boolean => return "boolean".to_string(),
            Self::Short => return "short".to_string(),
            Self::Integer => return "int".to_string(),
            Self::Long => return "long".to_string(),
            Self::Float => return "float".to_string(),
            Self::Double => return "double".to_string(),
            Self::ByteArray => return "byte[]".to_string(),
            Self::BooleanObject => "Boolean",
            Self::ShortObject => "Short",
            Self::IntegerObject => "Integer",
            Self::LongObject => "Long",
            Self::FloatObject => "Float",
            Self::DoubleObject => "Double",
            Self::String => "String"
        };
        file.import(&ClassName::new("java.lang", boxed))
    }
}

/// `cursor.getColumnIndex("column")`.
#[must_use]
pub fn column_index(column: &str) -> String {
    format!("cursor.getColumnIndex({})", string_literal(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> Option<JavaType> {
        JavaType::from_type_mirror(&TypeMirror::new(name))
    }

    #[test]
    fn classifies_every_supported_type() {
        let cases = [
            ("boolean", JavaType::Boolean, false, StorageType::Integer),
            ("java.lang.Boolean", JavaType::BooleanObject, true, StorageType::Integer),
            ("short", JavaType::Short, false, StorageType::Integer),
            ("java.lang.Short", JavaType::ShortObject, true, StorageType::Integer),
            ("int", JavaType::Integer, false, StorageType::Integer),
            ("java.lang.Integer", JavaType::IntegerObject, true, StorageType::Integer),
            ("long", JavaType::Long, false, StorageType::Integer),
            ("java.lang.Long", JavaType::LongObject, true, StorageType::Integer),
            ("float", JavaType::Float, false, StorageType::Real),
            ("java.lang.Float", JavaType::FloatObject, true, StorageType::Real),
            ("double", JavaType::Double, false, StorageType::Real),
            ("java.lang.Double", JavaType::DoubleObject, true, StorageType::Real),
            ("java.lang.String", JavaType::String, true, StorageType::Text),
            ("byte[]", JavaType::ByteArray, true, StorageType::Blob)
        ];
        for (name, expected, boxed, storage) in cases {
            let java_type = classify(name).unwrap();
            assert_eq!(java_type, expected, "{name}");
            assert_eq!(java_type.is_boxed(), boxed, "{name}");
            assert_eq!(java_type.storage(), storage, "{name}");
        }
    }

    #[test]
    fn rejects_unsupported_types() {
        for name in ["java.util.Date", "char", "byte", "java.lang.Object", "Integer", "int[]"] {
            assert_eq!(classify(name), None, "{name}");
        }
    }

    #[test]
    fn boolean_reads_compare_with_one() {
        assert_eq!(
            JavaType::Boolean.cursor_read("done"),
            "cursor.getInt(cursor.getColumnIndex(\"done\")) == 1"
        );
        assert_eq!(
            JavaType::ByteArray.cursor_read("data"),
            "cursor.getBlob(cursor.getColumnIndex(\"data\"))"
        );
    }

    #[test]
    fn declare_imports_boxed_types_only() {
        let mut file = JavaFile::new("com.test", "Gen");
        assert_eq!(JavaType::Long.declare(&mut file), "long");
        assert_eq!(JavaType::ByteArray.declare(&mut file), "byte[]");
        assert_eq!(JavaType::LongObject.declare(&mut file), "Long");
        assert_eq!(JavaType::String.declare(&mut file), "String");
        assert!(file.to_source().contains("import java.lang.Long;\nimport java.lang.String;\n"));
    }
}
