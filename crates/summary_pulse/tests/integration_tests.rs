mod mocks;

use mocks::local_summarizer::MockLocalSummarizer;
use mocks::remote_summarizer::{MockRemoteSummarizer, TinyWindowSummarizer};
use summary_history::{HistoryStore, SessionHistory, SourceMode};
use summary_pulse::{
    embedding::EmbeddingError,
    text::Language,
    types::{LocalStyle, RemoteStyle, SummaryMode, SummaryRequest},
    RemoteFailure, SummaryError, SummarySession, SummarySessionBuilder, TextRankSummarizer,
};

fn build_session(
    local: MockLocalSummarizer,
    remote: MockRemoteSummarizer,
) -> SummarySession<MockLocalSummarizer, MockRemoteSummarizer, SessionHistory> {
    SummarySessionBuilder::new()
        .local_summarizer(local)
        .remote_summarizer(remote)
        .history(SessionHistory::new())
        .build()
}

fn local_mode() -> SummaryMode {
    SummaryMode::Local {
        style: LocalStyle::Balanced,
    }
}

fn remote_mode() -> SummaryMode {
    SummaryMode::Remote {
        style: RemoteStyle::Concise,
    }
}

const INPUT: &str = "The committee reviewed the budget. Members debated the allocation. \
    A final vote is expected next week.";

// ─── Happy paths ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_local_summary_is_produced_and_recorded() {
    let local = MockLocalSummarizer::new("The committee reviewed the budget.");
    let remote = MockRemoteSummarizer::new("unused");

    let local_calls = local.calls.clone();
    let mut session = build_session(local, remote);

    let request = SummaryRequest::new(INPUT, 0.4);
    let result = session
        .produce_summary(&request, local_mode())
        .await
        .expect("local summarization should succeed");

    assert_eq!(result.summary_text, "The committee reviewed the budget.");
    assert_eq!(result.word_count, 5);
    assert_eq!(result.source_mode, SourceMode::Local);

    assert_eq!(local_calls.lock().unwrap().len(), 1);

    let history = session.history();
    assert_eq!(history.len(), 1);
    let recent = history.recent(1);
    assert_eq!(recent[0].summary.summary_text, result.summary_text);
    assert!(recent[0].title.starts_with("The committee reviewed"));
}

#[tokio::test]
async fn test_remote_summary_carries_style_and_percentage_in_prompt() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::new("A generated summary.");

    let remote_calls = remote.calls.clone();
    let mut session = build_session(local, remote);

    let request = SummaryRequest::new(INPUT, 0.5);
    let result = session
        .produce_summary(&request, remote_mode())
        .await
        .expect("remote summarization should succeed");

    assert_eq!(result.summary_text, "A generated summary.");
    assert_eq!(result.source_mode, SourceMode::Remote);
    assert_eq!(result.word_count, 3);

    let calls = remote_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("in a concise manner"));
    assert!(calls[0].contains("about 50%"));
    assert!(calls[0].contains("The committee reviewed the budget."));

    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_word_count_matches_whitespace_tokens() {
    let local = MockLocalSummarizer::new("one two three\nfour  five");
    let remote = MockRemoteSummarizer::new("unused");
    let mut session = build_session(local, remote);

    let result = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.4), local_mode())
        .await
        .unwrap();

    assert_eq!(
        result.word_count,
        result.summary_text.split_whitespace().count()
    );
    assert_eq!(result.word_count, 5);
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_input_is_rejected_before_any_adapter_runs() {
    for raw_text in ["", "   ", "\n\t "] {
        let local = MockLocalSummarizer::new("unused");
        let remote = MockRemoteSummarizer::new("unused");

        let local_calls = local.calls.clone();
        let remote_calls = remote.calls.clone();
        let mut session = build_session(local, remote);

        let request = SummaryRequest::new(raw_text, 0.4);

        let local_err = session
            .produce_summary(&request, local_mode())
            .await
            .unwrap_err();
        assert!(matches!(local_err, SummaryError::Validation(_)));

        let remote_err = session
            .produce_summary(&request, remote_mode())
            .await
            .unwrap_err();
        assert!(matches!(remote_err, SummaryError::Validation(_)));

        assert!(local_calls.lock().unwrap().is_empty());
        assert!(remote_calls.lock().unwrap().is_empty());
        assert!(session.history().is_empty());
    }
}

#[tokio::test]
async fn test_non_finite_ratio_is_rejected() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::new("unused");
    let mut session = build_session(local, remote);

    let request = SummaryRequest::new(INPUT, f32::NAN);
    let err = session
        .produce_summary(&request, local_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Validation(_)));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_ratio_is_clamped_to_mode_bounds() {
    let local = MockLocalSummarizer::new("a summary");
    let remote = MockRemoteSummarizer::new("unused");

    let local_calls = local.calls.clone();
    let mut session = build_session(local, remote);

    session
        .produce_summary(&SummaryRequest::new(INPUT, 5.0), local_mode())
        .await
        .unwrap();
    session
        .produce_summary(&SummaryRequest::new(INPUT, 0.01), local_mode())
        .await
        .unwrap();

    let calls = local_calls.lock().unwrap();
    assert_eq!(calls[0].1, 1.0);
    assert_eq!(calls[1].1, 0.1);
}

#[tokio::test]
async fn test_oversized_input_fails_validation_before_the_network() {
    let local = MockLocalSummarizer::new("unused");
    let remote = TinyWindowSummarizer::default();

    let remote_calls = remote.calls.clone();
    let mut session = SummarySessionBuilder::new()
        .local_summarizer(local)
        .remote_summarizer(remote)
        .history(SessionHistory::new())
        .build();

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Validation(_)));
    assert!(err.to_string().contains("tiny-window"));
    assert!(remote_calls.lock().unwrap().is_empty());
    assert!(session.history().is_empty());
}

// ─── Empty output ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_local_output_is_not_a_hard_failure() {
    let local = MockLocalSummarizer::new("   ");
    let remote = MockRemoteSummarizer::new("unused");
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.1), local_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::EmptyOutput(_)));
    assert!(err.to_string().contains("increasing the ratio"));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_empty_remote_reply_maps_to_empty_output() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::failing(RemoteFailure::EmptyResponse);
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::EmptyOutput(_)));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_whitespace_remote_reply_maps_to_empty_output() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::new("  \n ");
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::EmptyOutput(_)));
    assert!(session.history().is_empty());
}

// ─── Failure mapping ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_local_adapter_failure_maps_to_adapter_error() {
    let local = MockLocalSummarizer::failing("ranking blew up");
    let remote = MockRemoteSummarizer::new("unused");
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.4), local_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Adapter(_)));
    assert!(err.to_string().contains("ranking blew up"));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_provider_failure_maps_to_remote_error_and_leaves_history_alone() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::failing(RemoteFailure::Provider {
        status: 503,
        message: "Service unavailable".into(),
    });
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Remote(_)));
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("Service unavailable"));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_timeout_maps_to_remote_error() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::failing(RemoteFailure::Timeout);
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Remote(_)));
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_malformed_payload_is_remote_error_not_empty_output() {
    let local = MockLocalSummarizer::new("unused");
    let remote =
        MockRemoteSummarizer::failing(RemoteFailure::MalformedResponse("not json".into()));
    let mut session = build_session(local, remote);

    let err = session
        .produce_summary(&SummaryRequest::new(INPUT, 0.5), remote_mode())
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Remote(_)));
}

// ─── History ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_history_accumulates_and_exports_then_clears() {
    let local = MockLocalSummarizer::new("first summary");
    let remote = MockRemoteSummarizer::new("second summary");
    let mut session = build_session(local, remote);

    session
        .produce_summary(&SummaryRequest::new("first input text", 0.4), local_mode())
        .await
        .unwrap();
    session
        .produce_summary(&SummaryRequest::new("second input text", 0.5), remote_mode())
        .await
        .unwrap();

    let export = session
        .history()
        .export_text()
        .expect("two entries to export");
    let blocks: Vec<&str> = export.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("Summary: first summary"));
    assert!(blocks[1].contains("Summary: second summary"));

    let recent = session.history().recent(5);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].summary.summary_text, "second summary");

    session.clear_history();
    assert!(session.history().is_empty());
    assert!(session.history().recent(5).is_empty());
    assert!(session.history().export_text().is_none());
}

// ─── Real local pipeline ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_textrank_end_to_end_through_the_session() {
    let remote = MockRemoteSummarizer::new("unused");
    let mut session = SummarySessionBuilder::new()
        .local_summarizer(TextRankSummarizer::new(Language::English))
        .remote_summarizer(remote)
        .history(SessionHistory::new())
        .build();

    let text = "The committee reviewed the national budget on Tuesday. \
        Members debated the budget allocation for rural schools. \
        The weather in the capital was unusually warm. \
        A final vote on the budget allocation is expected next week. \
        Several members proposed amendments to the school budget. \
        Street vendors sold umbrellas near the station.";

    let result = session
        .produce_summary(&SummaryRequest::new(text, 0.5), local_mode())
        .await
        .expect("real pipeline should succeed");

    assert!(!result.summary_text.trim().is_empty());
    assert_eq!(result.source_mode, SourceMode::Local);
    assert_eq!(session.history().len(), 1);

    // Too little input for the ratio: empty output, not a panic.
    let err = session
        .produce_summary(&SummaryRequest::new("One sentence.", 0.1), local_mode())
        .await
        .unwrap_err();
    assert!(matches!(err, SummaryError::EmptyOutput(_)));
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_embedding_lookup_through_the_session() {
    let local = MockLocalSummarizer::new("unused");
    let remote = MockRemoteSummarizer::new("unused");
    let session = build_session(local, remote);

    let text = "The cat sat on the mat. The cat chased the mouse. \
        The dog sat on the log. The dog chased the cat. \
        A mouse ran from the cat. The cat and the dog slept on the mat.";

    let model = session
        .train_embedding_model(text)
        .expect("training should succeed");

    let neighbors = model.most_similar("cat", 3).unwrap();
    assert_eq!(neighbors.len(), 3);
    assert!(neighbors.windows(2).all(|w| w[0].1 >= w[1].1));

    let err = model.most_similar("giraffe", 3).unwrap_err();
    assert!(matches!(err, EmbeddingError::UnknownWord(_)));

    let err = session.train_embedding_model("   ").unwrap_err();
    assert!(matches!(err, SummaryError::Validation(_)));
}
