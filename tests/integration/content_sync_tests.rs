use super::build_integration_test;
use markmap_preview::{PreviewConfig, RendererState};

#[test]
fn given_content_before_load_should_dispatch_once_after_load() {
    let mut test = build_integration_test().build();

    test.edit("# A\n## B");
    assert!(test.host.scripts().is_empty());

    test.finish_load();

    assert_eq!(test.host.dispatched_snapshots(), vec!["# A\n## B"]);
    assert!(test.driver.pipeline().pending().is_none());
}

#[test]
fn given_several_edits_before_load_should_dispatch_only_the_newest() {
    let mut test = build_integration_test().build();

    test.edit("# One");
    test.edit("# Two");
    test.edit("# Three");
    test.finish_load();

    assert_eq!(test.host.dispatched_snapshots(), vec!["# Three"]);
}

#[test]
fn given_no_load_completion_should_never_dispatch() {
    let mut test = build_integration_test().build();

    test.edit("# Waiting");
    test.edit("# Still waiting");

    assert!(test.host.scripts().is_empty());
    assert_eq!(test.driver.pipeline().state(), RendererState::Loading);
}

#[test]
fn given_ready_renderer_when_edits_processed_one_by_one_should_dispatch_each_in_order() {
    let mut test = build_integration_test().build();
    test.finish_load();

    test.edit("x");
    test.edit("y");
    test.edit("z");

    assert_eq!(test.host.dispatched_snapshots(), vec!["x", "y", "z"]);
}

#[test]
fn given_ready_renderer_when_edits_queued_back_to_back_should_dispatch_the_last() {
    let mut test = build_integration_test().build();
    test.finish_load();

    let emitter = test.driver.emitter();
    emitter.content_changed("x");
    emitter.content_changed("y");
    emitter.content_changed("z");
    test.driver.process_events();

    let renders = test.host.dispatched_snapshots();
    assert_eq!(renders.last().map(String::as_str), Some("z"));
    assert_eq!(renders.len(), 1);
}

#[test]
fn given_duplicate_load_signals_should_dispatch_pending_once() {
    let mut test = build_integration_test().build();
    test.edit("# Once");

    test.finish_load();
    test.finish_load();

    assert_eq!(test.host.dispatched_snapshots(), vec!["# Once"]);
}

#[test]
fn given_awkward_text_should_arrive_unchanged() {
    let mut test = build_integration_test().build();
    test.finish_load();

    let text = "# It's \"quoted\"\r\n## back\\slash\n### 思维导图 🧠 </script>";
    test.edit(text);

    assert_eq!(test.host.dispatched_snapshots(), vec![text]);
}

#[test]
fn given_custom_placeholder_should_embed_it_in_the_document() {
    let test = build_integration_test()
        .given_config(PreviewConfig {
            placeholder: "# Nothing here yet".to_string(),
            ..PreviewConfig::default()
        })
        .build();

    let documents = test.host.documents();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].contains("\"# Nothing here yet\""));
}
