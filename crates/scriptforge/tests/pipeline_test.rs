//! End-to-end pipeline through the facade re-exports.

use async_trait::async_trait;
use scriptforge::{
    ApiKey, BlockKind, Brief, CredentialTable, DocxRenderer, GenerateRequest, GenerateResponse,
    GenerationDriver, RetryPolicy, ScreenplayOrchestrator, ScriptforgeResult, SectionGenerator,
    assemble_document, write_document, write_plain_text,
};
use std::time::Duration;

/// Answers every section with a short, well-formed scene.
struct SceneDriver;

#[async_trait]
impl GenerationDriver for SceneDriver {
    async fn generate(&self, request: &GenerateRequest) -> ScriptforgeResult<GenerateResponse> {
        Ok(GenerateResponse {
            text: format!(
                "INT. BRIDGE - NIGHT\nThe console hums.\nAVA\n(quietly)\nWe're early. ({})",
                request.credential().expose()
            ),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scene"
    }

    fn model_name(&self) -> &str {
        "scene-model"
    }
}

fn brief() -> anyhow::Result<Brief> {
    Ok(Brief::builder()
        .title("Nova")
        .genre("sci-fi")
        .plot("A colony ship wakes its crew forty years early.")
        .main_characters("Ava")
        .tone("dramatic")
        .setting("Mars")
        .build()?)
}

#[tokio::test]
async fn test_brief_to_exports() -> anyhow::Result<()> {
    let keys = (1..=5).map(|n| ApiKey::new(format!("key-{n}"))).collect();
    let credentials = CredentialTable::new(keys, 5)?;
    let generator = SectionGenerator::new(
        SceneDriver,
        credentials,
        RetryPolicy::new(1, Duration::from_millis(1)),
    );
    let orchestrator = ScreenplayOrchestrator::new(generator)?;

    let run = orchestrator.run(&brief()?).await?;
    assert!(run.is_complete());

    let document = assemble_document(run.brief(), run.sections());
    assert_eq!(document.sections().len(), 5);
    let kinds: Vec<BlockKind> = document.sections()[0]
        .blocks()
        .iter()
        .map(|b| *b.kind())
        .collect();
    assert_eq!(
        kinds,
        [
            BlockKind::SceneHeading,
            BlockKind::Dialogue,
            BlockKind::CharacterCue,
            BlockKind::Parenthetical,
            BlockKind::Dialogue,
        ]
    );

    let dir = tempfile::tempdir()?;
    let text_path = write_plain_text(&run, dir.path())?;
    let docx_path = write_document(&DocxRenderer::new(), &document, dir.path())?;

    assert_eq!(text_path.file_name().and_then(|n| n.to_str()), Some("Nova.txt"));
    assert_eq!(docx_path.file_name().and_then(|n| n.to_str()), Some("Nova.docx"));

    let text = std::fs::read_to_string(&text_path)?;
    assert!(text.contains("We're early. (key-5)"));
    assert!(std::fs::metadata(&docx_path)?.len() > 0);
    Ok(())
}
