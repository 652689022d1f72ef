//! Tests for the interactive loop, driven through in-memory input and output.

use std::io::Cursor;
use std::sync::Arc;

use askgh::{
    AnswerQuestionUseCase, ClientConfig, Credential, InferenceClient, MockChatTransport, Repl,
};

fn repl_with(transport: Arc<MockChatTransport>, config: ClientConfig) -> Repl {
    let client = Arc::new(InferenceClient::new(transport, config));
    Repl::new(AnswerQuestionUseCase::new(client))
}

async fn run(repl: &Repl, input: &str) -> (usize, String) {
    let mut output = Vec::new();
    let turns = repl
        .run(Cursor::new(input.as_bytes().to_vec()), &mut output)
        .await
        .expect("repl failed");
    (turns, String::from_utf8(output).expect("utf-8 output"))
}

#[tokio::test]
async fn answers_each_question_until_exit() {
    let transport = Arc::new(MockChatTransport::answering("Forty-two."));
    let repl = repl_with(
        transport.clone(),
        ClientConfig::default().with_credential(Credential::new("t")),
    );

    let (turns, output) = run(&repl, "Hello, World!!!\nexit\nnot reached\n").await;

    assert_eq!(turns, 1);
    assert_eq!(transport.call_count(), 1);
    assert!(output.contains("[Processed]: hello world"));
    assert!(output.contains(r#"[Tokens]: ["hello", "world"]"#));
    assert!(output.contains("[LLM Answer]:\nForty-two."));
    assert!(output.contains("Exiting..."));
}

#[tokio::test]
async fn quit_is_case_insensitive() {
    let transport = Arc::new(MockChatTransport::default());
    let repl = repl_with(
        transport.clone(),
        ClientConfig::default().with_credential(Credential::new("t")),
    );

    let (turns, _) = run(&repl, "QUIT\n").await;

    assert_eq!(turns, 0);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn blank_lines_are_skipped() {
    let transport = Arc::new(MockChatTransport::default());
    let repl = repl_with(
        transport.clone(),
        ClientConfig::default().with_credential(Credential::new("t")),
    );

    let (turns, output) = run(&repl, "\n   \n\t\nwhy?\nexit\n").await;

    assert_eq!(turns, 1);
    assert_eq!(transport.call_count(), 1);
    assert_eq!(output.matches("[Processed]:").count(), 1);
}

#[tokio::test]
async fn end_of_input_stops_cleanly() {
    let transport = Arc::new(MockChatTransport::default());
    let repl = repl_with(
        transport.clone(),
        ClientConfig::default().with_credential(Credential::new("t")),
    );

    let (turns, _) = run(&repl, "first\nsecond").await;

    assert_eq!(turns, 2);
    let calls = transport.calls();
    assert_eq!(calls[0].request.user_prompt(), Some("first"));
    assert_eq!(calls[1].request.user_prompt(), Some("second"));
}

#[tokio::test]
async fn errors_are_printed_and_the_loop_continues() {
    let transport = Arc::new(MockChatTransport::failing("dns error"));
    let repl = repl_with(
        transport.clone(),
        ClientConfig::default().with_credential(Credential::new("t")),
    );

    let (turns, output) = run(&repl, "one\ntwo\nexit\n").await;

    assert_eq!(turns, 2);
    assert_eq!(output.matches("Request failed: dns error").count(), 2);
}

#[tokio::test]
async fn missing_token_warns_and_reports_per_turn() {
    let transport = Arc::new(MockChatTransport::default());
    let repl = repl_with(transport.clone(), ClientConfig::default());

    let (turns, output) = run(&repl, "anyone there?\nexit\n").await;

    assert_eq!(turns, 1);
    assert_eq!(transport.call_count(), 0);
    assert!(output.contains("Warning: GITHUB_TOKEN not found"));
    assert!(output.contains("Error: No API key provided."));
}
