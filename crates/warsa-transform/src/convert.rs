//! Converter dispatch.

use warsa_model::{ConverterKind, FieldValue};

use crate::datetime::convert_date;
use crate::name::decompose_person_name;
use crate::numeric::{parse_leading_int, strip_dash};

/// Convert one trimmed field piece with the given converter.
///
/// `None` means the piece carries no value and produces no statement.
pub fn convert_value(kind: ConverterKind, piece: &str) -> Option<FieldValue> {
    let piece = piece.trim();
    match kind {
        ConverterKind::None => (!piece.is_empty()).then(|| FieldValue::Text(piece.to_string())),
        ConverterKind::Integer => parse_leading_int(piece).map(FieldValue::Integer),
        ConverterKind::Date => convert_date(piece),
        ConverterKind::StripDash => strip_dash(piece).map(FieldValue::Text),
        ConverterKind::PersonName => {
            decompose_person_name(piece).map(|name| FieldValue::Text(name.display_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn dispatches_by_kind() {
        assert_eq!(
            convert_value(ConverterKind::None, " Maanviljelijä "),
            Some(FieldValue::Text("Maanviljelijä".to_string()))
        );
        assert_eq!(convert_value(ConverterKind::None, "  "), None);
        assert_eq!(
            convert_value(ConverterKind::Integer, "3 children"),
            Some(FieldValue::Integer(3))
        );
        assert_eq!(
            convert_value(ConverterKind::Date, "12.5.1941"),
            Some(FieldValue::Date(NaiveDate::from_ymd_opt(1941, 5, 12).unwrap()))
        );
        assert_eq!(convert_value(ConverterKind::StripDash, "-"), None);
        assert_eq!(
            convert_value(ConverterKind::PersonName, "Meikäläinen Matti"),
            Some(FieldValue::Text("Matti Meikäläinen".to_string()))
        );
    }
}
