// profanity-core/tests/pipeline_integration_tests.rs
//! End-to-end runs of the pipeline against the bundled word lists.

use anyhow::Result;
use profanity_core::word_lists::repository::bundled_word_list_dir;
use profanity_core::{
    CancelToken, FilterParameters, FilterPipeline, FilterResponse, FilterTarget, ProfaneSourceFilter,
    ReplacementStrategy, WordListRepository,
};

fn bundled_pipeline() -> FilterPipeline {
    FilterPipeline::new(WordListRepository::new(bundled_word_list_dir()))
}

async fn run(text: Option<&str>, strategy: ReplacementStrategy) -> Result<profanity_core::FilterResult> {
    let params = FilterParameters::new(strategy, FilterTarget::Body);
    Ok(bundled_pipeline().run(text, &params, &CancelToken::new()).await?)
}

#[test_log::test(tokio::test)]
async fn asterisk_masks_a_single_word() -> Result<()> {
    let result = run(Some("This is a sentence with the word crap."), ReplacementStrategy::Asterisk).await?;

    assert!(result.is_filtered());
    assert_eq!(result.final_output(), Some("This is a sentence with the word ****."));
    assert_eq!(result.matches(), ["crap"]);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn markdown_safe_body_escapes_asterisks() -> Result<()> {
    let pipeline = bundled_pipeline().with_escape_markdown(true);
    let params = FilterParameters::new(ReplacementStrategy::Asterisk, FilterTarget::Body);
    let result = pipeline
        .run(Some("This is a sentence with the word crap."), &params, &CancelToken::new())
        .await?;

    assert_eq!(result.final_output(), Some(r"This is a sentence with the word \*\*\*\*."));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn middle_asterisk_across_several_sources() -> Result<()> {
    let result = run(Some("Lots of fucking words like manky and arrusa!"), ReplacementStrategy::MiddleAsterisk).await?;

    let source_count = WordListRepository::new(bundled_word_list_dir()).source_names().await?.len();
    assert_eq!(result.steps().len(), source_count);

    let changed: Vec<&str> = result.changed_steps().map(|s| s.source_name.as_str()).collect();
    assert_eq!(changed, vec!["american_english", "british_english", "spanish"]);
    assert_eq!(result.final_output(), Some("Lots of f*****g words like m***y and a****a!"));
    assert_eq!(result.matches(), ["fucking", "manky", "arrusa"]);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn blank_input_is_never_filtered() -> Result<()> {
    for text in [None, Some(""), Some("   \n\t")] {
        let result = run(text, ReplacementStrategy::Grawlix).await?;
        assert!(!result.is_filtered());
        assert!(result.steps().is_empty());
        assert!(result.final_output().is_none());
    }
    Ok(())
}

#[test_log::test(tokio::test)]
async fn clean_text_is_left_alone() -> Result<()> {
    let result = run(Some("A perfectly classy assessment of the glass."), ReplacementStrategy::Asterisk).await?;

    assert!(!result.is_filtered());
    assert!(result.final_output().is_none());
    assert!(result.steps().iter().all(|s| s.output.is_none()));
    assert!(result.matches().is_empty());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn matching_ignores_case() -> Result<()> {
    let lower = run(Some("crap"), ReplacementStrategy::Asterisk).await?;
    let mixed = run(Some("CrAp"), ReplacementStrategy::Asterisk).await?;

    assert_eq!(lower.final_output(), Some("****"));
    assert_eq!(mixed.final_output(), Some("****"));
    assert_eq!(mixed.matches(), ["CrAp"]);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn additional_sources_run_after_built_ins() -> Result<()> {
    let params = FilterParameters::new(ReplacementStrategy::Bleep, FilterTarget::Comment)
        .with_source(ProfaneSourceFilter::manual(["Test"])?);
    let result = bundled_pipeline().run(Some("Test"), &params, &CancelToken::new()).await?;

    let last = result.steps().last().unwrap();
    assert_eq!(last.source_name, "manual(1)");
    assert_eq!(last.output.as_deref(), Some("bleep"));

    let response = FilterResponse::from(&result);
    assert!(response.contains_profanity);
    assert_eq!(response.filtration_steps.map(|s| s.len()), Some(1));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn concurrent_runs_keep_their_own_matches() -> Result<()> {
    let pipeline = bundled_pipeline();
    let params = FilterParameters::default();
    let cancel = CancelToken::new();

    let (first, second) = tokio::join!(
        pipeline.run(Some("crap crap"), &params, &cancel),
        pipeline.run(Some("bollocks"), &params, &cancel),
    );

    assert_eq!(first?.matches(), ["crap", "crap"]);
    assert_eq!(second?.matches(), ["bollocks"]);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn large_inputs_are_filtered_off_the_runtime() -> Result<()> {
    let text = "clean words and one crap ".repeat(4_000);
    let result = run(Some(&text), ReplacementStrategy::Underscores).await?;

    let output = result.final_output().unwrap();
    assert_eq!(output.chars().count(), text.chars().count());
    assert!(!output.contains("crap"));
    assert_eq!(result.matches().len(), 4_000);
    Ok(())
}
