//! Snapshot tests for the Groq client

#[cfg(test)]
mod snapshot_tests {
    use crate::{GroqClient, GroqConfig, LLMProvider};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = GroqConfig::new("test_api_key_redacted", GroqClient::LLAMA_4_SCOUT);

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        model_name: meta-llama/llama-4-scout-17b-16e-instruct
        api_url: "https://api.groq.com/openai/v1"
        "###);
    }

    #[test]
    fn test_with_model_overrides_default() {
        let config = GroqConfig::new("test_key", GroqClient::LLAMA_4_SCOUT);
        let client = GroqClient::new(config)
            .unwrap()
            .with_model(GroqClient::LLAMA_3_3_70B);

        assert_eq!(client.model_id(), "llama-3.3-70b-versatile");
        assert_eq!(client.config().api_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_model_constants() {
        assert_eq!(GroqClient::LLAMA_4_SCOUT, crate::DEFAULT_MODEL);
        assert_eq!(GroqClient::LLAMA_3_3_70B, "llama-3.3-70b-versatile");
    }
}
