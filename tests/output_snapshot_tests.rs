//! Snapshot tests for the rendered output record

use config_composer::composer::evaluate;
use config_composer::config::example_attrs;
use config_composer::library::StandardLibrary;
use config_composer::output::{render, OutputFormat};

#[test]
fn test_json_output_snapshot() {
    let record = evaluate(&example_attrs(), &StandardLibrary).unwrap();
    insta::assert_json_snapshot!(record, @r###"
    {
      "name": "\"example\"",
      "version": "1.0.0",
      "system": {
        "arch": "x86_64",
        "os": "linux"
      },
      "calculated": {
        "nameWithVersion": "example-1.0.0",
        "numbers": 15
      }
    }
    "###);
}

#[test]
fn test_yaml_output_parses_back() {
    let record = evaluate(&example_attrs(), &StandardLibrary).unwrap();
    let text = render(&record, OutputFormat::Yaml, false).unwrap();
    let value: serde_json::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(value, serde_json::to_value(&record).unwrap());
    assert_eq!(value["name"], "\"example\"");
}
