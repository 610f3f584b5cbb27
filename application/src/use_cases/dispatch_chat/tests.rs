use super::*;
use crate::ports::progress::NoDispatchProgress;
use crate::use_cases::test_support::{
    NameOnlySchema, RecordingProgress, Scripted, ScriptedModel, StaticContentStore, StaticSearch,
    StaticTools, tool_use,
};
use legalai_domain::{ConversationHistory, ConversationTurn, DEFAULT_CONTENT, UserRole};
use serde_json::json;
use std::time::Duration;

struct Harness {
    model: Arc<ScriptedModel>,
    content: Arc<StaticContentStore>,
    search: Arc<StaticSearch>,
    tools: Arc<StaticTools>,
    dispatcher: ChatDispatcher,
}

fn harness(responses: Vec<Scripted>) -> Harness {
    harness_with(responses, ExecutionParams::default())
}

fn harness_with(responses: Vec<Scripted>, params: ExecutionParams) -> Harness {
    let model = Arc::new(ScriptedModel::new(responses));
    let content = Arc::new(StaticContentStore::default());
    let search = Arc::new(StaticSearch::default());
    let tools = Arc::new(StaticTools::default());
    let dispatcher = ChatDispatcher::new(
        model.clone(),
        content.clone(),
        search.clone(),
        tools.clone(),
        Arc::new(NameOnlySchema),
    )
    .with_params(params);
    Harness {
        model,
        content,
        search,
        tools,
        dispatcher,
    }
}

impl Harness {
    fn no_port_called(&self) -> bool {
        self.model.call_count() == 0
            && self.model.session_options().is_empty()
            && self.content.call_count() == 0
            && self.search.call_count() == 0
            && self.tools.call_count() == 0
    }
}

// ==================== Task flows ====================

#[tokio::test]
async fn test_draft_as_public() {
    let h = harness(vec![Scripted::text(
        r#"{"draft": "IN THE COURT OF [Court Name]\nPRAYER", "citations": ["Consumer Protection Act, 2019"]}"#,
    )]);
    let request = ChatRequest::new("/draft File a consumer complaint").with_role(UserRole::Public);

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.role(), "model");
    assert_eq!(envelope.content(), "IN THE COURT OF [Court Name]\nPRAYER");
    assert_eq!(
        envelope.payload(),
        &ResponsePayload::Draft {
            citations: vec!["Consumer Protection Act, 2019".into()]
        }
    );

    let prompt = h.model.first_prompt().unwrap();
    assert!(prompt.contains("Drafting Request: File a consumer complaint"));
    assert!(prompt.contains("User Role: Public"));
}

#[tokio::test]
async fn test_draft_uses_first_line_of_body() {
    let h = harness(vec![Scripted::text(r#"{"draft": "ok"}"#)]);
    let request = ChatRequest::new("/draft Bail application\nAccused held since March");

    h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    let prompt = h.model.first_prompt().unwrap();
    assert!(prompt.contains("Drafting Request: Bail application"));
    assert!(!prompt.contains("Accused held since March"));
}

#[tokio::test]
async fn test_summarize_with_document() {
    let h = harness(vec![Scripted::text(
        r#"{"summary": "Eleven-month lease.", "citations": ["Transfer of Property Act, 1882"]}"#,
    )]);
    let request = ChatRequest::new("/summarize").with_document("lease.pdf");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.content(), "Eleven-month lease.");
    assert_eq!(envelope.payload().citations(), ["Transfer of Property Act, 1882"]);
    assert_eq!(h.content.call_count(), 1);
}

#[tokio::test]
async fn test_timeline() {
    let h = harness(vec![Scripted::text(
        r#"{"timeline": "01/02/2020: FIR filed\n05/03/2020: Chargesheet"}"#,
    )]);
    let request = ChatRequest::new("/timeline FIR on 1 Feb 2020, chargesheet on 5 Mar 2020");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    let wire = serde_json::to_value(&envelope).unwrap();
    assert_eq!(wire["timeline"], wire["content"]);
    assert!(envelope.content().starts_with("01/02/2020"));
}

#[tokio::test]
async fn test_analyze_round_trip() {
    let analysis = json!({"analysisResults": {
        "annotatedClauses": "Clause 9: unilateral termination.",
        "suggestedEdits": "Add a 30 day cure period.",
        "matchingPrecedent": "AIR 1973 SC 1461"
    }});
    let h = harness(vec![
        Scripted::Response(tool_use("call_1", "legal_search", "unilateral termination")),
        Scripted::text(&analysis.to_string()),
    ]);
    let request = ChatRequest::new("/analyze").with_document("contract.pdf");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(h.tools.call_count(), 1);
    assert_eq!(h.model.call_count(), 2);
    let ResponsePayload::Analysis { report } = envelope.payload() else {
        panic!("expected analysis payload");
    };
    assert_eq!(report.matching_precedent, "AIR 1973 SC 1461");
    let content: serde_json::Value = serde_json::from_str(envelope.content()).unwrap();
    assert_eq!(content, analysis["analysisResults"]);
}

#[tokio::test]
async fn test_translate() {
    let h = harness(vec![Scripted::text(r#"{"translatedText": "सुप्रभात"}"#)]);
    let request = ChatRequest::new("/translate to Hindi Good morning");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.content(), "सुप्रभात");
    assert_eq!(
        envelope.payload(),
        &ResponsePayload::Translation {
            target_language: "Hindi".into()
        }
    );
    let prompt = h.model.first_prompt().unwrap();
    assert!(prompt.contains("into Hindi"));
    assert!(prompt.contains("Good morning"));
}

#[tokio::test]
async fn test_transcribe_with_audio() {
    let h = harness(vec![Scripted::text(r#"{"transcript": "Speaker 1: Hello."}"#)]);
    let request = ChatRequest::new("/transcribe").with_audio("hearing.mp3");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.content(), "Speaker 1: Hello.");
    assert_eq!(envelope.payload(), &ResponsePayload::Transcript);
}

#[tokio::test]
async fn test_search_skips_model() {
    let h = harness(vec![]);
    let request = ChatRequest::new("/search basic structure court:supreme");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.content(), "Found 1 cases.");
    let ResponsePayload::Search { results } = envelope.payload() else {
        panic!("expected search payload");
    };
    assert_eq!(results[0].citation, "AIR 1973 SC 1461");
    assert_eq!(h.model.call_count(), 0);

    let queries = h.search.queries.lock().unwrap();
    assert_eq!(queries[0].0, "basic structure");
    assert_eq!(queries[0].2, 5);
}

#[tokio::test]
async fn test_search_without_matches() {
    let h = harness(vec![]);
    let request = ChatRequest::new("/search privacy year:2017");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();
    assert_eq!(envelope.content(), "Found 0 cases.");
}

// ==================== Fallback ====================

#[tokio::test]
async fn test_plain_message_uses_fallback_with_history() {
    let h = harness(vec![Scripted::text("Hello! How can I help with your legal question?")]);
    let history = ConversationHistory::from(vec![
        ConversationTurn::user("What is an FIR?"),
        ConversationTurn::model("A First Information Report."),
    ]);
    let request = ChatRequest::new("hello").with_history(history.clone());

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.content(), "Hello! How can I help with your legal question?");
    assert_eq!(envelope.payload(), &ResponsePayload::Conversation);
    assert!(h.model.first_prompt().unwrap().contains(&history.render()));
}

#[tokio::test]
async fn test_unknown_command_falls_back_with_full_message() {
    let h = harness(vec![Scripted::text("I can draft, summarize, and more.")]);
    let request = ChatRequest::new("/help me please");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(envelope.payload(), &ResponsePayload::Conversation);
    assert!(h.model.first_prompt().unwrap().contains("User: /help me please"));
}

#[tokio::test]
async fn test_empty_reply_gets_default_content() {
    let h = harness(vec![Scripted::text("   ")]);
    let request = ChatRequest::new("hello");

    let envelope = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();
    assert_eq!(envelope.content(), DEFAULT_CONTENT);
}

// ==================== Validation before any call ====================

#[tokio::test]
async fn test_transcribe_without_audio() {
    let h = harness(vec![]);
    let request = ChatRequest::new("/transcribe").with_document("not-audio.pdf");

    let err = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap_err();

    assert!(matches!(err, DispatchError::MissingInput(ref m) if m == "Audio file required for transcription."));
    assert!(h.no_port_called());
}

#[tokio::test]
async fn test_document_tasks_without_document() {
    for (message, expected) in [
        ("/summarize", "Document required for summarization."),
        ("/analyze", "Document required for analysis."),
    ] {
        let h = harness(vec![]);
        let request = ChatRequest::new(message).with_audio("call.mp3");

        let err = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap_err();

        assert!(matches!(err, DispatchError::MissingInput(ref m) if m == expected));
        assert!(h.no_port_called());
    }
}

#[tokio::test]
async fn test_translate_without_language() {
    for message in ["/translate", "/translate   ", "/translate ..."] {
        let h = harness(vec![]);
        let err = h
            .dispatcher
            .dispatch(&ChatRequest::new(message), &NoDispatchProgress)
            .await
            .unwrap_err();

        assert!(
            matches!(err, DispatchError::InvalidCommandSyntax(_)),
            "{} should be rejected",
            message
        );
        assert!(h.no_port_called());
    }
}

#[tokio::test]
async fn test_translate_with_empty_text_reaches_model() {
    let h = harness(vec![Scripted::text(r#"{"translatedText": ""}"#)]);
    let envelope = h
        .dispatcher
        .dispatch(&ChatRequest::new("/translate to hindi"), &NoDispatchProgress)
        .await
        .unwrap();

    assert_eq!(h.model.call_count(), 1);
    assert_eq!(envelope.content(), DEFAULT_CONTENT);
    assert_eq!(
        envelope.payload(),
        &ResponsePayload::Translation {
            target_language: "hindi".into()
        }
    );
}

// ==================== Properties ====================

#[tokio::test]
async fn test_idempotent_with_deterministic_model() {
    let reply = r#"{"draft": "Same draft", "citations": ["A v B"]}"#;
    let h = harness(vec![Scripted::text(reply), Scripted::text(reply)]);
    let request = ChatRequest::new("/draft Rent agreement").with_role(UserRole::Advocate);

    let first = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();
    let second = h.dispatcher.dispatch(&request, &NoDispatchProgress).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(h.model.session_options().len(), 2);
}

#[tokio::test]
async fn test_progress_events() {
    let h = harness(vec![Scripted::text(r#"{"draft": "x"}"#)]);
    let progress = RecordingProgress::default();

    h.dispatcher
        .dispatch(&ChatRequest::new("/draft x"), &progress)
        .await
        .unwrap();

    assert_eq!(
        progress.events(),
        vec!["task_start:draft", "model_turn:1", "task_complete:draft:true"]
    );
}

#[tokio::test]
async fn test_model_output_invalid_propagates() {
    let h = harness(vec![Scripted::text("not json")]);
    let progress = RecordingProgress::default();

    let err = h
        .dispatcher
        .dispatch(&ChatRequest::new("/timeline x"), &progress)
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::ModelOutputInvalid(_)));
    assert_eq!(progress.events().last().unwrap(), "task_complete:timeline:false");
}

#[tokio::test]
async fn test_deadline_elapsed() {
    let params = ExecutionParams::default().with_deadline(Some(Duration::from_millis(50)));
    let h = harness_with(vec![Scripted::Stall], params);

    let err = h
        .dispatcher
        .dispatch(&ChatRequest::new("hello"), &NoDispatchProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::Timeout(d) if d == Duration::from_millis(50)));
}

#[tokio::test]
async fn test_cancelled_dispatch() {
    let token = CancellationToken::new();
    let model = Arc::new(ScriptedModel::new(vec![Scripted::Stall]));
    let dispatcher = ChatDispatcher::new(
        model.clone(),
        Arc::new(StaticContentStore::default()),
        Arc::new(StaticSearch::default()),
        Arc::new(StaticTools::default()),
        Arc::new(NameOnlySchema),
    )
    .with_cancellation(token.clone());

    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.cancel();
    });

    let err = dispatcher
        .dispatch(&ChatRequest::new("/draft x"), &NoDispatchProgress)
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}
