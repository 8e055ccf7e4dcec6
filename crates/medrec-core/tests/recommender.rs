use medrec_core::config::{self, RecommenderConfig, CONFIG_FILE_NAME};
use medrec_core::error::{ExitCode, MedrecError};
use medrec_core::link::LinkTemplate;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_to_recommendations() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("medicine_dict.json"),
        r#"{"Drug_Name": {"0": "A", "1": "B", "2": "C", "3": "D", "4": "E", "5": "F"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("similarity.json"),
        "[[1.0, 0.9, 0.9, 0.5, 0.1, 0.0],
          [0.9, 1.0, 0.0, 0.0, 0.0, 0.0],
          [0.9, 0.0, 1.0, 0.0, 0.0, 0.0],
          [0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
          [0.1, 0.0, 0.0, 0.0, 1.0, 0.0],
          [0.0, 0.0, 0.0, 0.0, 0.0, 1.0]]",
    )
    .unwrap();
    RecommenderConfig::default()
        .save(&dir.path().join(CONFIG_FILE_NAME))
        .unwrap();

    let resolved = config::resolve(dir.path(), None).unwrap();
    let recommender = resolved.artifact_paths().load().unwrap();

    assert_eq!(
        recommender.recommend("A", resolved.config.default_limit).unwrap(),
        vec!["B", "C", "D", "E", "F"]
    );
    assert_eq!(recommender.recommend("A", 2).unwrap(), vec!["B", "C"]);

    let template = LinkTemplate::new(resolved.config.link_template.as_str()).unwrap();
    assert_eq!(
        template.render("B"),
        "https://pharmeasy.in/search/all?name=B"
    );
}

#[test]
fn test_unknown_item_surfaces_typed_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("medicine_dict.json"), r#"["A", "B"]"#).unwrap();
    fs::write(dir.path().join("similarity.json"), "[[1, 0.5], [0.5, 1]]").unwrap();
    RecommenderConfig::default()
        .save(&dir.path().join(CONFIG_FILE_NAME))
        .unwrap();

    let recommender = config::resolve(dir.path(), None)
        .unwrap()
        .artifact_paths()
        .load()
        .unwrap();

    let err = recommender.recommend("not-a-real-drug", 5).unwrap_err();
    assert!(matches!(err, MedrecError::NotFound { .. }));
    assert_eq!(err.exit_code(), ExitCode::Data);
}
