use pretty_assertions::assert_eq;
use qa_service::config::Config;

#[test]
fn test_full_config_parses() {
    let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: debug
model:
  base_url: "https://api-inference.huggingface.co"
  model: "deepset/roberta-base-squad2"
  api_key: "hf_test"
  timeout_secs: 10
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.logs.level, "debug");

    let model = config.model.unwrap();
    assert_eq!(model.base_url, "https://api-inference.huggingface.co");
    assert_eq!(model.model, "deepset/roberta-base-squad2");
    assert_eq!(model.api_key, "hf_test");
    assert_eq!(model.timeout_secs, 10);
}

#[test]
fn test_defaults_apply() {
    let config: Config = serde_yaml::from_str("{}").unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "info");
    assert!(config.model.is_none());
}

#[test]
fn test_model_defaults_apply() {
    let yaml = r#"
model:
  base_url: "https://api-inference.huggingface.co"
  model: "deepset/roberta-base-squad2"
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();

    let model = config.model.unwrap();
    assert_eq!(model.api_key, "");
    assert_eq!(model.timeout_secs, 30);
}
