mod test_utils;

use scriptforge_core::{ApiKey, SectionStatus};
use scriptforge_error::GeminiErrorKind;
use scriptforge_interface::SectionEvent;
use scriptforge_retry::{CredentialTable, RetryPolicy};
use scriptforge_screenplay::{ScreenplayOrchestrator, SectionGenerator};
use test_utils::{MockResponse, ScriptedDriver, nova_brief, orchestrator, test_credentials};
use tokio::sync::mpsc;

fn status(code: u16) -> MockResponse {
    MockResponse::Error(GeminiErrorKind::HttpError {
        status_code: code,
        message: format!("status {code}"),
    })
}

#[tokio::test(start_paused = true)]
async fn test_all_sections_complete_in_order() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new();
    let run = orchestrator(driver.clone()).run(&nova_brief()).await?;

    let ordinals: Vec<u8> = run.sections().iter().map(|s| *s.ordinal()).collect();
    assert_eq!(ordinals, [1, 2, 3, 4, 5]);
    assert!(run.is_complete());
    assert!(run.is_finished());
    assert!(run.failed_ordinals().is_empty());

    let calls = driver.calls();
    assert_eq!(calls.len(), 5);
    for (index, call) in calls.iter().enumerate() {
        assert_eq!(call.credential().expose(), format!("key-{}", index + 1));
        let prompt = call.prompt();
        assert!(prompt.contains("Nova"));
        assert!(prompt.contains("sci-fi"));
        assert!(prompt.contains("Mars"));
        assert!(prompt.contains(&format!("This is section {} of 5 total sections", index + 1)));
    }

    assert_eq!(run.section(3).unwrap().content(), "Section text for key-3");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_previous_section_excerpt_feeds_next_prompt() -> anyhow::Result<()> {
    let opening = format!("{}{}", "a".repeat(1000), "b".repeat(500));
    let driver = ScriptedDriver::new().script("key-1", vec![MockResponse::Success(opening)]);

    orchestrator(driver.clone()).run(&nova_brief()).await?;

    assert!(!driver.prompts_for("key-1")[0].contains("PREVIOUS SECTION CONTEXT"));

    let second = &driver.prompts_for("key-2")[0];
    let expected = format!("PREVIOUS SECTION CONTEXT:\n{}...", "a".repeat(1000));
    assert!(second.contains(&expected));
    assert!(!second.contains("bb"));

    let third = &driver.prompts_for("key-3")[0];
    assert!(third.contains("PREVIOUS SECTION CONTEXT:\nSection text for key-2..."));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failed_section_leaves_gap_and_run_continues() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new().script("key-2", vec![status(400)]);

    let run = orchestrator(driver.clone()).run(&nova_brief()).await?;

    let failed = run.section(2).unwrap();
    assert_eq!(*failed.status(), SectionStatus::Error);
    assert!(failed.content().is_empty());
    assert!(failed.error().as_deref().unwrap_or_default().contains("400"));
    assert_eq!(driver.call_count_for("key-2"), 1);

    assert_eq!(run.failed_ordinals(), [2]);
    assert!(!run.is_complete());
    assert!(run.is_finished());

    let third = &driver.prompts_for("key-3")[0];
    assert!(!third.contains("PREVIOUS SECTION CONTEXT"));
    assert_eq!(*run.section(5).unwrap().status(), SectionStatus::Completed);

    let text = run.plain_text();
    assert!(text.starts_with("Section text for key-1\n\n\n\nSection text for key-3"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_are_retried() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new()
        .script("key-3", vec![status(503), status(429), MockResponse::Success("Recovered".into())])
        .script("key-4", (0..5).map(|_| status(500)).collect());

    let run = orchestrator(driver.clone()).run(&nova_brief()).await?;

    assert_eq!(driver.call_count_for("key-3"), 3);
    assert_eq!(run.section(3).unwrap().content(), "Recovered");

    assert_eq!(driver.call_count_for("key-4"), 5);
    assert_eq!(*run.section(4).unwrap().status(), SectionStatus::Error);
    assert_eq!(driver.prompts_for("key-4").iter().collect::<std::collections::HashSet<_>>().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_events_follow_every_transition() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new().script("key-5", vec![status(401)]);
    let (tx, mut rx) = mpsc::unbounded_channel();

    orchestrator(driver).with_events(tx).run(&nova_brief()).await?;

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events.len(), 10);
    for (index, pair) in events.chunks(2).enumerate() {
        let ordinal = u8::try_from(index + 1)?;
        assert_eq!(pair[0], SectionEvent { ordinal, status: SectionStatus::Generating, error: None });
        assert_eq!(pair[1].ordinal, ordinal);
    }

    assert_eq!(events[1].status, SectionStatus::Completed);
    assert_eq!(events[9].status, SectionStatus::Error);
    assert!(events[9].error.as_deref().unwrap_or_default().contains("401"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropped_receiver_does_not_affect_run() -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let run = orchestrator(ScriptedDriver::new()).with_events(tx).run(&nova_brief()).await?;
    assert!(run.is_complete());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_section_reuses_original_context() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new()
        .script("key-1", vec![MockResponse::Success("FADE IN:\n\nEXT. MARS - DAY".into())])
        .script("key-2", vec![status(403), MockResponse::Success("Second try".into())]);
    let orchestrator = orchestrator(driver.clone());

    let mut run = orchestrator.run(&nova_brief()).await?;
    assert_eq!(run.failed_ordinals(), [2]);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = orchestrator.with_events(tx);
    let status = orchestrator.retry_section(&mut run, 2).await?;

    assert_eq!(status, SectionStatus::Completed);
    assert_eq!(run.section(2).unwrap().content(), "Second try");
    assert!(run.is_complete());

    let prompts = driver.prompts_for("key-2");
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], prompts[1]);
    assert!(prompts[1].contains("PREVIOUS SECTION CONTEXT:\nFADE IN:\n\nEXT. MARS - DAY..."));
    assert_eq!(driver.call_count_for("key-3"), 1);

    assert_eq!(rx.try_recv()?.status, SectionStatus::Generating);
    assert_eq!(rx.try_recv()?.status, SectionStatus::Completed);
    assert!(rx.try_recv().is_err());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_retry_section_rejects_non_errored_sections() -> anyhow::Result<()> {
    let orchestrator = orchestrator(ScriptedDriver::new());
    let mut run = orchestrator.run(&nova_brief()).await?;

    assert!(orchestrator.retry_section(&mut run, 1).await.is_err());
    assert!(orchestrator.retry_section(&mut run, 9).await.is_err());
    assert_eq!(*run.section(1).unwrap().status(), SectionStatus::Completed);
    Ok(())
}

#[test]
fn test_credential_table_must_match_catalog() {
    let keys = (1..=3).map(|n| ApiKey::new(format!("key-{n}"))).collect();
    let credentials = CredentialTable::new(keys, 3).unwrap();
    let generator = SectionGenerator::new(ScriptedDriver::new(), credentials, RetryPolicy::default());

    assert!(ScreenplayOrchestrator::new(generator).is_err());

    let generator = SectionGenerator::new(ScriptedDriver::new(), test_credentials(), RetryPolicy::default());
    assert!(ScreenplayOrchestrator::new(generator).is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_each_run_starts_fresh() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new().script("key-1", vec![status(404)]);
    let orchestrator = orchestrator(driver.clone());

    let first = orchestrator.run(&nova_brief()).await?;
    let second = orchestrator.run(&nova_brief()).await?;

    assert_eq!(first.failed_ordinals(), [1]);
    assert!(second.is_complete());
    assert_ne!(first.id(), second.id());
    Ok(())
}
