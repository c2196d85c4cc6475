// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ExpectedError, Result,
    exit_codes::TreeReportExitCode,
    input::{EventSource, apply_events},
    output::{OutputContext, OutputOpts, OutputWriter},
};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;
use tree_reporter::{
    model::TreeBuilder,
    reporter::{Styles, TreePrinter},
    user_config::{UserConfig, UserConfigLocation},
};

/// Draws a recorded test run as a tree.
///
/// Reads execution events, one JSON object per line, and prints the tree of
/// engines, containers and tests with their results.
#[derive(Debug, Parser)]
#[command(
    version,
    name = "tree-report",
    styles = crate::output::clap_styles::style(),
    max_term_width = 100,
)]
pub struct TreeReportApp {
    #[clap(flatten)]
    output: OutputOpts,

    /// User config file [default: $XDG_CONFIG_HOME/tree-report/config.toml],
    /// or `none` to skip loading user config
    #[arg(long, value_name = "PATH", env = "TREE_REPORT_USER_CONFIG_FILE")]
    user_config_file: Option<String>,

    /// Caption of the root of the tree
    #[arg(long, value_name = "TEXT", default_value = "Test plan")]
    plan_caption: String,

    /// Event stream to read, or `-` for standard input [default: -]
    #[arg(value_name = "EVENTS")]
    events: Option<Utf8PathBuf>,
}

impl TreeReportApp {
    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    pub fn exec(self, output: OutputContext, output_writer: &mut OutputWriter) -> Result<i32> {
        let location = UserConfigLocation::from_cli_or_env(self.user_config_file.as_deref());
        let user_config = UserConfig::from_location(location)?;

        let theme_setting = output
            .theme
            .map(Into::into)
            .unwrap_or(user_config.ui.theme);
        let theme = theme_setting.resolve();
        let color = output
            .color
            .unwrap_or_else(|| user_config.ui.color.into());
        let styles = Styles::new(color.should_colorize(supports_color::Stream::Stdout));
        debug!("theme: {theme} (from {theme_setting}), color: {color:?}");

        let source_name = EventSource::from_arg(self.events);
        let reader = source_name.open()?;
        let mut builder = TreeBuilder::new(&self.plan_caption);
        apply_events(&source_name, reader, &mut builder)?;
        let tree = builder.build();

        let mut writer = output_writer.stdout_writer();
        TreePrinter::new(theme, &styles)
            .print(&tree, &mut writer)
            .map_err(|err| ExpectedError::WriteOutputError { err })?;

        Ok(TreeReportExitCode::OK)
    }
}
