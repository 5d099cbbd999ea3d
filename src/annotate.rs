use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::Annotation;

/// Parses tagger output shaped as `[{"word": "LABEL"}, ...]`.
///
/// Each object contributes its entries in document order, so multi-key
/// objects are accepted as well.
pub fn parse_annotations(json: &str) -> Result<Vec<Annotation>> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    let mut annotations = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        for (word, tag) in record {
            match tag {
                Value::String(tag) => annotations.push(Annotation { word, tag }),
                other => {
                    return Err(Error::Input(format!(
                        "record {index}: label for {word:?} must be a string, got {other}"
                    )))
                }
            }
        }
    }
    Ok(annotations)
}

/// Splits annotations into parallel `(tags, words)`.
///
/// With `split` set, tags are returned untouched. Otherwise every tag that
/// is not in `keep` becomes `default_label`, so a later merge folds those
/// neighbours together while kept tags only merge with themselves.
pub fn extract<S: AsRef<str>>(
    annotations: &[Annotation],
    split: bool,
    keep: &[S],
    default_label: &str,
) -> (Vec<String>, Vec<String>) {
    annotations
        .iter()
        .map(|annotation| {
            let kept = split || keep.iter().any(|tag| tag.as_ref() == annotation.tag);
            let tag = if kept {
                annotation.tag.clone()
            } else {
                default_label.to_string()
            };
            (tag, annotation.word.clone())
        })
        .unzip()
}

#[cfg(test)]
mod annotate_tests {
    use super::{extract, parse_annotations};
    use crate::{Annotation, Error};

    #[test]
    fn parses_single_key_records_in_order() {
        let json = r#"[{"Elon": "PERSON"}, {"Musk": "PERSON"}, {"founded": "O"}]"#;
        let annotations = parse_annotations(json).unwrap();
        assert_eq!(
            annotations,
            vec![
                Annotation::new("Elon", "PERSON"),
                Annotation::new("Musk", "PERSON"),
                Annotation::new("founded", "O"),
            ]
        );
    }

    #[test]
    fn multi_key_records_keep_document_order() {
        let json = r#"[{"zeta": "B", "alpha": "A"}]"#;
        let annotations = parse_annotations(json).unwrap();
        assert_eq!(annotations[0].word, "zeta");
        assert_eq!(annotations[1].word, "alpha");
    }

    #[test]
    fn rejects_non_string_label() {
        let err = parse_annotations(r#"[{"Elon": 3}]"#).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(matches!(
            parse_annotations("{\"Elon\": \"PERSON\"}"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn split_keeps_tags() {
        let annotations = [Annotation::new("12", "NUM"), Annotation::new("Main", "STREET")];
        let (tags, words) = extract(&annotations, true, &["O"], "Address");
        assert_eq!(tags, ["NUM", "STREET"]);
        assert_eq!(words, ["12", "Main"]);
    }

    #[test]
    fn merge_mode_substitutes_non_kept_tags() {
        let annotations = [
            Annotation::new("12", "NUM"),
            Annotation::new("Main", "STREET"),
            Annotation::new("at", "O"),
            Annotation::new("40.7,-74.0", "GPS"),
        ];
        let (tags, _) = extract(&annotations, false, &["O", "GPS"], "Address");
        assert_eq!(tags, ["Address", "Address", "O", "GPS"]);
    }
}
