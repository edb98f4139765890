use parser_factura::infrastructure::llm::{
    DEEPSEEK_API_KEY_ENV, ProviderFactory, ProviderFactoryError, ProviderKind,
};
use parser_factura::presentation::config::{AiSettings, ProviderSettings};

fn provider_settings(base_url: Option<&str>, model: Option<&str>) -> ProviderSettings {
    ProviderSettings {
        base_url: base_url.map(str::to_string),
        model: model.map(str::to_string),
        ..ProviderSettings::default()
    }
}

fn lm_studio_settings(provider: &str, settings: Option<ProviderSettings>) -> AiSettings {
    AiSettings {
        provider: provider.to_string(),
        lmstudio: settings,
        deepseek: None,
    }
}

fn deepseek_settings(settings: ProviderSettings) -> AiSettings {
    AiSettings {
        provider: "deepseek".to_string(),
        lmstudio: None,
        deepseek: Some(settings),
    }
}

fn no_env(_key: &str) -> Option<String> {
    None
}

#[test]
fn given_unknown_provider_when_creating_then_returns_unknown_provider_error() {
    let settings = lm_studio_settings("ollama", None);

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::UnknownProvider(ref name)) if name == "ollama"
    ));
}

#[test]
fn given_mixed_case_provider_name_when_creating_then_matches_case_insensitively() {
    let settings = lm_studio_settings(
        " LMStudio ",
        Some(provider_settings(
            Some("http://localhost:1234"),
            Some("qwen2.5-vl-7b-instruct"),
        )),
    );

    let client = ProviderFactory::create_with_env(&settings, no_env).unwrap();

    assert_eq!(client.name(), "lmstudio");
}

#[test]
fn given_lm_studio_without_settings_block_when_creating_then_returns_missing_settings() {
    let settings = lm_studio_settings("lmstudio", None);

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::MissingSettings("lmstudio"))
    ));
}

#[test]
fn given_lm_studio_without_model_when_creating_then_returns_missing_model() {
    let settings = lm_studio_settings(
        "lmstudio",
        Some(provider_settings(Some("http://localhost:1234"), Some("  "))),
    );

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::MissingModel("lmstudio"))
    ));
}

#[test]
fn given_lm_studio_without_base_url_when_creating_then_returns_missing_base_url() {
    let settings = lm_studio_settings(
        "lmstudio",
        Some(provider_settings(None, Some("qwen2.5-vl-7b-instruct"))),
    );

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::MissingBaseUrl("lmstudio"))
    ));
}

#[test]
fn given_deepseek_without_any_api_key_when_creating_then_returns_missing_api_key() {
    let settings = deepseek_settings(provider_settings(None, Some("deepseek-chat")));

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::MissingApiKey {
            provider: "deepseek",
            env_var: DEEPSEEK_API_KEY_ENV,
        })
    ));
}

#[test]
fn given_deepseek_key_in_environment_when_creating_then_returns_client() {
    let settings = deepseek_settings(provider_settings(None, Some("deepseek-chat")));

    let client = ProviderFactory::create_with_env(&settings, |key| {
        (key == DEEPSEEK_API_KEY_ENV).then(|| "sk-from-env".to_string())
    })
    .unwrap();

    assert_eq!(client.name(), "deepseek");
}

#[test]
fn given_deepseek_key_only_in_config_when_creating_then_falls_back_to_config() {
    let settings = deepseek_settings(ProviderSettings {
        api_key: Some("sk-from-config".to_string()),
        ..provider_settings(None, Some("deepseek-chat"))
    });

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(result.is_ok());
}

#[test]
fn given_deepseek_without_model_when_creating_then_returns_missing_model() {
    let settings = deepseek_settings(ProviderSettings {
        api_key: Some("sk-from-config".to_string()),
        ..provider_settings(None, None)
    });

    let result = ProviderFactory::create_with_env(&settings, no_env);

    assert!(matches!(
        result,
        Err(ProviderFactoryError::MissingModel("deepseek"))
    ));
}

#[test]
fn given_provider_names_when_parsing_kind_then_maps_known_names() {
    assert_eq!(ProviderKind::try_from("lmstudio").unwrap(), ProviderKind::LmStudio);
    assert_eq!(ProviderKind::try_from("DeepSeek").unwrap(), ProviderKind::DeepSeek);
    assert!(ProviderKind::try_from("").is_err());
}
