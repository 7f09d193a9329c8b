mod content_sync_tests;
mod theme_reload_tests;

use markmap_preview::{
    AssetSource, PreviewConfig, PreviewError, RecordingHost, Rgb, TemplateProvider,
    TestPreviewDriver, TestPreviewRuntime, ThemeSnapshot, ThemeSource,
};
use mockall::{mock, Sequence};

pub(crate) const LIGHT: ThemeSnapshot =
    ThemeSnapshot::new(Rgb::new(0xf2, 0xf2, 0xf2), Rgb::new(0x1e, 0x1e, 0x1e));
pub(crate) const DARK: ThemeSnapshot =
    ThemeSnapshot::new(Rgb::new(0x2b, 0x2b, 0x2b), Rgb::new(0xa9, 0xb7, 0xc6));

mock! {
    pub Theme {}

    impl ThemeSource for Theme {
        fn sample(&self) -> ThemeSnapshot;
    }
}

/// Asset source that either serves a marker comment per library or serves nothing.
pub(crate) struct StubAssets {
    available: bool,
}

impl AssetSource for StubAssets {
    fn load(&self, name: &str) -> markmap_preview::Result<String> {
        if self.available {
            Ok(format!("/* {name} */"))
        } else {
            Err(PreviewError::AssetMissing {
                name: name.to_string(),
                searched: "stub".to_string(),
            })
        }
    }
}

pub(crate) struct IntegrationTest {
    pub(crate) driver: TestPreviewDriver<RecordingHost, MockTheme, StubAssets>,
    pub(crate) host: RecordingHost,
}

impl IntegrationTest {
    /// Report the current document as loaded and process everything queued.
    pub(crate) fn finish_load(&mut self) {
        self.driver.emitter().load_completed(200);
        self.driver.process_events();
    }

    pub(crate) fn edit(&mut self, text: &str) {
        self.driver.emitter().content_changed(text);
        self.driver.process_events();
    }
}

pub(crate) struct IntegrationTestBuilder {
    themes: Vec<ThemeSnapshot>,
    assets_available: bool,
    config: PreviewConfig,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    let _ = env_logger::builder().is_test(true).try_init();

    IntegrationTestBuilder {
        themes: vec![LIGHT],
        assets_available: true,
        config: PreviewConfig::default(),
    }
}

impl IntegrationTestBuilder {
    /// Themes returned by successive samples: the initial load first, then
    /// one per theme change the test triggers.
    pub(crate) fn given_themes(mut self, themes: Vec<ThemeSnapshot>) -> Self {
        self.themes = themes;
        self
    }

    pub(crate) fn given_missing_assets(mut self) -> Self {
        self.assets_available = false;
        self
    }

    pub(crate) fn given_config(mut self, config: PreviewConfig) -> Self {
        self.config = config;
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let mut theme = MockTheme::new();
        let mut sequence = Sequence::new();
        for snapshot in self.themes {
            theme
                .expect_sample()
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(snapshot);
        }

        let host = RecordingHost::new();
        let templates = TemplateProvider::new(
            StubAssets {
                available: self.assets_available,
            },
            self.config,
        );
        let driver = TestPreviewRuntime::new(host.clone(), theme, templates).run();

        IntegrationTest { driver, host }
    }
}
