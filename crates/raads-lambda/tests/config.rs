use std::io::Write;

use raads_core::models::score::Score;
use raads_export::context::ReportContext;
use raads_export::render::DEFAULT_REPORT_TEMPLATE;
use raads_lambda::config::ApiConfig;
use raads_lambda::state::AppState;

#[test]
fn default_config_uses_builtin_template() {
    let config = ApiConfig::default();
    assert_eq!(config.service_name, "raads");
    assert_eq!(config.load_report_template().unwrap(), DEFAULT_REPORT_TEMPLATE);
}

#[test]
fn template_path_is_read_at_startup() {
    let path = std::env::temp_dir().join(format!("raads-template-{}.tera", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "Score: {{{{ total }}}}").unwrap();

    let config = ApiConfig {
        report_template_path: Some(path.clone()),
        ..ApiConfig::default()
    };
    let state = AppState::from_config(config).unwrap();
    let context = ReportContext::build(&Score::default()).unwrap();
    assert_eq!(state.renderer.render(&context).unwrap(), "Score: 0");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_template_file_is_an_error() {
    let config = ApiConfig {
        report_template_path: Some("/nonexistent/raads/report.tera".into()),
        ..ApiConfig::default()
    };
    let err = config.load_report_template().unwrap_err().to_string();
    assert!(err.contains("failed to read report template"));
}

#[test]
fn malformed_template_fails_at_startup() {
    let path = std::env::temp_dir().join(format!("raads-broken-{}.tera", std::process::id()));
    std::fs::write(&path, "{% for x in %}").unwrap();

    let config = ApiConfig {
        report_template_path: Some(path.clone()),
        ..ApiConfig::default()
    };
    let err = AppState::from_config(config).err().unwrap().to_string();
    assert!(err.contains("template parse error"), "{err}");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn inline_malformed_template_is_rejected() {
    assert!(AppState::new(ApiConfig::default(), "{{ total").is_err());
}
