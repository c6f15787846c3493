mod common;

use hirelens_common::Result;
use hirelens_llm::openai::OpenAiClient;
use hirelens_llm::traits::LlmClient;
use hirelens_llm::DEFAULT_OPENAI_MODEL;

const ARTICLE: &str = "Acme Corp announced a new engineering hub in Austin \
and plans to add 200 staff over the next year, while winding down its \
legacy hardware line.";

fn make_client_or_skip() -> OpenAiClient {
    let key = std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
        tracing::debug!("Skipping: OPENAI_API_KEY not set");
        panic!("SKIP");
    });

    OpenAiClient::new(key, DEFAULT_OPENAI_MODEL.to_string()).expect("should work")
}

#[tokio::test]
#[ignore]
async fn openai_summarize_smoketest() -> Result<()> {
    common::init_test_tracing();
    let client = make_client_or_skip();

    let summary = client.summarize_article("Acme Corp", ARTICLE, 4000).await?;
    tracing::debug!("OpenAI summary is: {}", summary);

    assert!(
        !summary.trim().is_empty(),
        "summary text should not be empty"
    );
    Ok(())
}
