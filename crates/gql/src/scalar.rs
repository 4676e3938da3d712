//! GraphQL scalar to protobuf primitive mapping.

use gqlproto_schema::ScalarKind;

/// Map a scalar kind to its protobuf primitive type name.
///
/// Returns `None` for every kind outside the fixed table; callers turn that
/// into [`TranslateError::UnsupportedScalarKind`](crate::TranslateError) with
/// the offending field attached.
pub fn proto_primitive(kind: &ScalarKind) -> Option<&'static str> {
    match kind {
        ScalarKind::String => Some("string"),
        ScalarKind::Boolean => Some("bool"),
        ScalarKind::Float => Some("float"),
        ScalarKind::Int => Some("int32"),
        ScalarKind::Long => Some("int64"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        assert_eq!(proto_primitive(&ScalarKind::String), Some("string"));
        assert_eq!(proto_primitive(&ScalarKind::Boolean), Some("bool"));
        assert_eq!(proto_primitive(&ScalarKind::Float), Some("float"));
        assert_eq!(proto_primitive(&ScalarKind::Int), Some("int32"));
        assert_eq!(proto_primitive(&ScalarKind::Long), Some("int64"));
    }

    #[test]
    fn test_unmapped_kinds() {
        for kind in [
            ScalarKind::Id,
            ScalarKind::Short,
            ScalarKind::Byte,
            ScalarKind::BigInteger,
            ScalarKind::BigDecimal,
            ScalarKind::Char,
            ScalarKind::Custom("DateTime".to_string()),
        ] {
            assert_eq!(proto_primitive(&kind), None, "{kind} should not map");
        }
    }
}
