use super::{build_integration_test, DARK, LIGHT};
use markmap_preview::{RendererState, FALLBACK_ERROR_MARKER};

#[test]
fn given_ready_preview_when_theme_changes_should_replay_latest_document_after_reload() {
    let mut test = build_integration_test()
        .given_themes(vec![LIGHT, DARK])
        .build();
    test.finish_load();
    test.edit("# Hi");
    test.host.clear();

    test.driver.emitter().theme_changed();
    test.driver.process_events();

    // Nothing is sent to the document that is being replaced
    assert_eq!(test.driver.pipeline().state(), RendererState::Loading);
    assert!(test.host.scripts().is_empty());
    let documents = test.host.documents();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].contains("--mm-background: #2b2b2b;"));

    test.finish_load();

    assert_eq!(test.host.dispatched_snapshots(), vec!["# Hi"]);
}

#[test]
fn given_edit_during_reload_should_render_the_edit_instead_of_the_old_text() {
    let mut test = build_integration_test()
        .given_themes(vec![LIGHT, DARK])
        .build();
    test.finish_load();
    test.edit("# Old");
    test.host.clear();

    test.driver.emitter().theme_changed();
    test.driver.process_events();
    test.edit("# New");
    test.finish_load();

    assert_eq!(test.host.dispatched_snapshots(), vec!["# New"]);
}

#[test]
fn given_theme_change_before_first_load_should_flush_pending_once() {
    let mut test = build_integration_test()
        .given_themes(vec![LIGHT, DARK])
        .build();
    test.edit("# Early");

    test.driver.emitter().theme_changed();
    test.driver.process_events();
    test.finish_load();

    assert_eq!(test.host.documents().len(), 2);
    assert_eq!(test.host.dispatched_snapshots(), vec!["# Early"]);
}

#[test]
fn given_repeated_theme_changes_should_rebuild_with_each_sampled_theme() {
    let mut test = build_integration_test()
        .given_themes(vec![LIGHT, DARK, LIGHT])
        .build();
    test.finish_load();

    for _ in 0..2 {
        test.driver.emitter().theme_changed();
        test.driver.process_events();
        test.finish_load();
    }

    let documents = test.host.documents();
    assert_eq!(documents.len(), 3);
    assert!(documents[0].contains("--mm-background: #f2f2f2;"));
    assert!(documents[1].contains("--mm-background: #2b2b2b;"));
    assert!(documents[2].contains("--mm-background: #f2f2f2;"));
    assert!(test.host.scripts().is_empty());
}

#[test]
fn given_missing_assets_should_load_themed_fallback_document() {
    let mut test = build_integration_test()
        .given_themes(vec![DARK])
        .given_missing_assets()
        .build();

    let documents = test.host.documents();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].contains(FALLBACK_ERROR_MARKER));
    assert!(documents[0].contains("background: #2b2b2b;"));

    // The pipeline keeps working; the page simply has no entry point.
    test.edit("# Anyway");
    test.finish_load();
    assert_eq!(test.host.dispatched_snapshots(), vec!["# Anyway"]);
}
