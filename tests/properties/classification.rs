//! Property tests for path classification and output naming.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use pageit::domain::services::PathClassifier;
use pageit::domain::value_objects::{Classification, EntryKind, TemplateMarker};

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[a-z]{1,4})?").unwrap()
}

fn dirs() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z]{1,8}").unwrap(),
        0..=3,
    )
}

fn rel(dirs: &[String], name: &str) -> PathBuf {
    let mut path: PathBuf = dirs.iter().collect();
    path.push(name);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A suffixed file is a template whose output drops exactly the suffix.
    #[test]
    fn property_suffix_template_output_strips_marker(dirs in dirs(), stem in stem()) {
        let classifier = PathClassifier::new(TemplateMarker::suffix(".tera"));
        let entry = classifier.entry(&rel(&dirs, &format!("{stem}.tera")), EntryKind::File);

        prop_assert_eq!(entry.classification(), Classification::Template);
        let output = classifier.output_path(&entry).unwrap().unwrap();
        prop_assert_eq!(output, rel(&dirs, &stem));
    }

    /// PROPERTY: A prefixed file is a template whose output drops exactly the prefix.
    #[test]
    fn property_prefix_template_output_strips_marker(dirs in dirs(), stem in stem()) {
        let classifier = PathClassifier::new(TemplateMarker::prefix("tera."));
        let entry = classifier.entry(&rel(&dirs, &format!("tera.{stem}")), EntryKind::File);

        prop_assert_eq!(entry.classification(), Classification::Template);
        let output = classifier.output_path(&entry).unwrap().unwrap();
        prop_assert_eq!(output, rel(&dirs, &stem));
    }

    /// PROPERTY: Unmarked entries map to the identical relative output path.
    #[test]
    fn property_passthrough_output_is_identity(dirs in dirs(), stem in stem(), is_dir in any::<bool>()) {
        prop_assume!(!stem.ends_with(".tera"));
        let classifier = PathClassifier::new(TemplateMarker::suffix(".tera"));
        let kind = if is_dir { EntryKind::Directory } else { EntryKind::File };
        let path = rel(&dirs, &stem);
        let entry = classifier.entry(&path, kind);

        prop_assert_eq!(entry.classification(), Classification::Passthrough);
        prop_assert_eq!(classifier.output_path(&entry).unwrap(), Some(path));
    }

    /// PROPERTY: Marked directories are excluded and produce no output.
    #[test]
    fn property_marked_directory_is_excluded(stem in stem()) {
        let classifier = PathClassifier::new(TemplateMarker::suffix(".tera"));
        let entry = classifier.entry(Path::new(&format!("{stem}.tera")), EntryKind::Directory);

        prop_assert!(entry.is_excluded());
        prop_assert_eq!(classifier.output_path(&entry).unwrap(), None);
    }

    /// PROPERTY: Classification never panics on arbitrary names.
    #[test]
    fn property_classify_never_panics(name in "(?s).{0,64}", marker in ".{0,6}", prefix in any::<bool>()) {
        let marker = if prefix {
            TemplateMarker::prefix(marker)
        } else {
            TemplateMarker::suffix(marker)
        };
        let classifier = PathClassifier::new(marker);
        let _ = classifier.classify(&name, EntryKind::File);
        let _ = classifier.classify(&name, EntryKind::Directory);
    }
}
