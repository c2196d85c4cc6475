// Copyright (c) The tree-report Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prints an execution tree.
//!
//! The main structure in this module is [`TreePrinter`].

use super::{
    Color, Styles, Theme,
    formatters::{
        DisplayDurationMillis, DisplayReportTimestamp, SLOW_LEAF_THRESHOLD, is_blank,
        split_message_lines,
    },
};
use crate::model::{ExecutionTree, NodeState, ReportEntry, ResultStatus, TreeNode};
use std::io::{self, Write};
use tracing::trace;

/// Draws an [`ExecutionTree`] with the glyphs of a [`Theme`].
///
/// For a root with one container holding one passing test, the ASCII theme
/// with colors off prints:
///
/// ```text
/// .
/// '-- container [OK]
///   '-- t() [OK]
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TreePrinter<'a> {
    theme: Theme,
    styles: &'a Styles,
}

impl<'a> TreePrinter<'a> {
    /// Creates a new printer.
    pub fn new(theme: Theme, styles: &'a Styles) -> Self {
        Self { theme, styles }
    }

    /// Prints the whole tree, then flushes `writer` once.
    ///
    /// If writing fails, an unspecified prefix of the tree has been written.
    pub fn print(&self, tree: &ExecutionTree, writer: &mut dyn Write) -> io::Result<()> {
        trace!(
            "printing {} node(s) with the {} theme",
            tree.primary_line_count(),
            self.theme
        );
        writeln!(
            writer,
            "{}",
            self.styles.paint(Color::Container, self.theme.root())
        )?;
        self.print_children(tree.root(), "", writer)?;
        writer.flush()
    }

    fn print_node(
        &self,
        node: &TreeNode,
        indent: &str,
        continuous: bool,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        if node.is_visible() {
            self.print_visible(node, indent, continuous, writer)?;
        }
        if node.children().is_empty() {
            return Ok(());
        }
        if node.is_visible() {
            let column = self.column(continuous);
            self.print_children(node, &format!("{indent}{column}"), writer)
        } else {
            self.print_children(node, indent, writer)
        }
    }

    fn print_children(
        &self,
        node: &TreeNode,
        indent: &str,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            let continuous = index + 1 < children.len();
            self.print_node(child, indent, continuous, writer)?;
        }
        Ok(())
    }

    fn print_visible(
        &self,
        node: &TreeNode,
        indent: &str,
        continuous: bool,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let bullet = if continuous {
            self.theme.entry()
        } else {
            self.theme.end()
        };
        let prefix = format!("{indent}{bullet}");
        let tabbed = format!("{indent}{}{}", self.column(continuous), self.theme.blank());
        let tabbed = self.styles.paint(Color::Container, &tabbed).to_string();

        write!(
            writer,
            "{} ",
            self.styles.paint(Color::Container, &prefix)
        )?;
        write!(
            writer,
            "{}",
            self.styles.paint(caption_color(node), node.caption())
        )?;
        if node.duration() > SLOW_LEAF_THRESHOLD && node.children().is_empty() {
            let duration = DisplayDurationMillis(node.duration()).to_string();
            write!(
                writer,
                " {}",
                self.styles.paint(Color::Container, &duration)
            )?;
        }
        write!(writer, " ")?;
        match node.state() {
            NodeState::Finished(result) => {
                let icon = self.theme.status(result.status);
                write!(
                    writer,
                    "{}",
                    self.styles.paint(Color::for_status(result.status), icon)
                )?;
                if let Some(message) = result.failure_message() {
                    self.print_message(Color::Failed, &tabbed, message, writer)?;
                }
            }
            NodeState::Skipped { reason } => {
                self.print_skipped_icon(writer)?;
                self.print_message(Color::Skipped, &tabbed, reason, writer)?;
            }
            // Nodes without a result show the skip icon as a placeholder.
            NodeState::Running => self.print_skipped_icon(writer)?,
        }
        for entry in node.reports() {
            self.print_report_entry(&tabbed, entry, writer)?;
        }
        writeln!(writer)
    }

    fn print_skipped_icon(&self, writer: &mut dyn Write) -> io::Result<()> {
        write!(
            writer,
            "{}",
            self.styles.paint(Color::Skipped, self.theme.skipped())
        )
    }

    /// Prints a possibly multi-line message, starting on the current line.
    fn print_message(
        &self,
        color: Color,
        indent: &str,
        message: &str,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let mut lines = split_message_lines(message).into_iter();
        let first = lines.next().unwrap_or_default();
        write!(writer, " {}", self.styles.paint(color, first))?;
        for line in lines {
            writeln!(writer)?;
            write!(writer, "{indent}")?;
            if !is_blank(line) {
                let text = format!("{}{line}", self.theme.blank());
                write!(writer, "{}", self.styles.paint(color, &text))?;
            }
        }
        Ok(())
    }

    fn print_report_entry(
        &self,
        indent: &str,
        entry: &ReportEntry,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        write!(
            writer,
            "{indent}{}",
            DisplayReportTimestamp(entry.timestamp())
        )?;
        let pairs = entry.key_value_pairs();
        if pairs.len() == 1 {
            if let Some((key, value)) = pairs.first() {
                self.print_key_value(" ", key, value, writer)?;
            }
            return Ok(());
        }
        let pair_indent = format!("{indent}{}", self.theme.blank());
        for (key, value) in pairs {
            writeln!(writer)?;
            self.print_key_value(&pair_indent, key, value, writer)?;
        }
        Ok(())
    }

    fn print_key_value(
        &self,
        indent: &str,
        key: &str,
        value: &str,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        write!(
            writer,
            "{indent}{} = `{}`",
            self.styles.paint(Color::ReportKey, key),
            self.styles.paint(Color::ReportValue, value)
        )
    }

    fn column(&self, continuous: bool) -> &'static str {
        if continuous {
            self.theme.vertical()
        } else {
            self.theme.blank()
        }
    }
}

/// Failed and aborted nodes take their result color, skipped nodes the skip
/// color. Everything else is colored by kind.
fn caption_color(node: &TreeNode) -> Color {
    match node.state() {
        NodeState::Finished(result) if result.status != ResultStatus::Successful => {
            Color::for_status(result.status)
        }
        NodeState::Skipped { .. } => Color::Skipped,
        NodeState::Finished(_) | NodeState::Running => Color::for_kind(node.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        FailureDetail, IdentifierKind, TestExecutionResult, TestIdentifier, TreeBuilder,
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::time::Duration;
    use test_case::test_case;
    use test_strategy::proptest;

    const ENGINE: &str = "engine";
    const CONTAINER: &str = "container";

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 9, 10)
            .unwrap()
            .and_hms_milli_opt(11, 12, 13, 14)
            .unwrap()
    }

    fn method(name: &str) -> TestIdentifier {
        TestIdentifier::new(name, name, IdentifierKind::Test).with_parent(CONTAINER)
    }

    fn finish(builder: &mut TreeBuilder, id: &str, result: TestExecutionResult, millis: u64) {
        builder
            .on_finish_with_duration(&id.into(), result, Duration::from_millis(millis))
            .unwrap();
    }

    /// Builds engine > container > (whatever `add_tests` adds), all finished successfully.
    fn details_tree(add_tests: impl FnOnce(&mut TreeBuilder)) -> ExecutionTree {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new(
                ENGINE,
                "JUnit Jupiter",
                IdentifierKind::Engine,
            ))
            .unwrap();
        builder
            .on_start(
                TestIdentifier::new(
                    CONTAINER,
                    "ConsoleDetailsTests$Container",
                    IdentifierKind::Container,
                )
                .with_parent(ENGINE),
            )
            .unwrap();
        add_tests(&mut builder);
        finish(&mut builder, CONTAINER, TestExecutionResult::successful(), 5);
        finish(&mut builder, ENGINE, TestExecutionResult::successful(), 5);
        builder.build()
    }

    fn failing(name: &str, message: &str) -> ExecutionTree {
        details_tree(|builder| {
            builder.on_start(method(name)).unwrap();
            finish(
                builder,
                name,
                TestExecutionResult::failed(Some(FailureDetail::new(message))),
                5,
            );
        })
    }

    fn render(tree: &ExecutionTree, theme: Theme) -> String {
        render_with(tree, theme, &Styles::default())
    }

    fn render_with(tree: &ExecutionTree, theme: Theme, styles: &Styles) -> String {
        let mut out = Vec::new();
        TreePrinter::new(theme, styles)
            .print(tree, &mut out)
            .expect("writing to a Vec succeeds");
        String::from_utf8(out).expect("output is valid UTF-8")
    }

    fn assert_lines(actual: &str, expected: &[&str]) {
        assert!(actual.ends_with('\n'), "output ends with a newline");
        let actual: Vec<_> = actual.lines().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn container_with_passing_test() {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new(
                "c",
                "container",
                IdentifierKind::Container,
            ))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("t", "t()", IdentifierKind::Test).with_parent("c"))
            .unwrap();
        finish(&mut builder, "t", TestExecutionResult::successful(), 5);
        finish(&mut builder, "c", TestExecutionResult::successful(), 5);
        let tree = builder.build();

        assert_eq!(
            render(&tree, Theme::Ascii),
            ".\n'-- container [OK]\n  '-- t() [OK]\n"
        );
    }

    #[test_case(Theme::Unicode, &[
        "╷",
        "└─ JUnit Jupiter ✔",
        "   └─ ConsoleDetailsTests$Container ✔",
        "      └─ skipWithSingleLineReason() ↷ single line skip reason",
    ]; "unicode")]
    #[test_case(Theme::Ascii, &[
        ".",
        "'-- JUnit Jupiter [OK]",
        "  '-- ConsoleDetailsTests$Container [OK]",
        "    '-- skipWithSingleLineReason() [S] single line skip reason",
    ]; "ascii")]
    fn skip_with_single_line_reason(theme: Theme, expected: &[&str]) {
        let tree = details_tree(|builder| {
            builder
                .on_skip(
                    method("skipWithSingleLineReason()"),
                    "single line skip reason",
                )
                .unwrap();
        });
        assert_lines(&render(&tree, theme), expected);
    }

    #[test_case(Theme::Unicode, &[
        "╷",
        "└─ JUnit Jupiter ✔",
        "   └─ ConsoleDetailsTests$Container ✔",
        "      └─ failWithSingleLineMessage() ✘ single line fail message",
    ]; "unicode")]
    #[test_case(Theme::Ascii, &[
        ".",
        "'-- JUnit Jupiter [OK]",
        "  '-- ConsoleDetailsTests$Container [OK]",
        "    '-- failWithSingleLineMessage() [X] single line fail message",
    ]; "ascii")]
    fn fail_with_single_line_message(theme: Theme, expected: &[&str]) {
        let tree = failing("failWithSingleLineMessage()", "single line fail message");
        assert_lines(&render(&tree, theme), expected);
    }

    #[test_case(Theme::Unicode, &[
        "╷",
        "└─ JUnit Jupiter ✔",
        "   └─ ConsoleDetailsTests$Container ✔",
        "      └─ failWithMultiLineMessage() ✘ multi",
        "               line",
        "               fail",
        "               message",
    ]; "unicode")]
    #[test_case(Theme::Ascii, &[
        ".",
        "'-- JUnit Jupiter [OK]",
        "  '-- ConsoleDetailsTests$Container [OK]",
        "    '-- failWithMultiLineMessage() [X] multi",
        "          line",
        "          fail",
        "          message",
    ]; "ascii")]
    fn fail_with_multi_line_message(theme: Theme, expected: &[&str]) {
        let tree = failing("failWithMultiLineMessage()", "multi\nline\nfail\nmessage");
        assert_lines(&render(&tree, theme), expected);
    }

    #[test]
    fn blank_message_lines_keep_only_the_indent() {
        let tree = failing("t()", "first\r\n\n  \nfourth");
        assert_lines(
            &render(&tree, Theme::Unicode),
            &[
                "╷",
                "└─ JUnit Jupiter ✔",
                "   └─ ConsoleDetailsTests$Container ✔",
                "      └─ t() ✘ first",
                "            ",
                "            ",
                "               fourth",
            ],
        );
    }

    #[test]
    fn report_single_entry_with_single_mapping() {
        let tree = details_tree(|builder| {
            builder
                .on_start(method("reportSingleEntryWithSingleMapping(TestReporter)"))
                .unwrap();
            builder
                .on_report(
                    &"reportSingleEntryWithSingleMapping(TestReporter)".into(),
                    ReportEntry::new(timestamp()).with("foo", "bar"),
                )
                .unwrap();
            finish(
                builder,
                "reportSingleEntryWithSingleMapping(TestReporter)",
                TestExecutionResult::successful(),
                5,
            );
        });
        assert_lines(
            &render(&tree, Theme::Unicode),
            &[
                "╷",
                "└─ JUnit Jupiter ✔",
                "   └─ ConsoleDetailsTests$Container ✔",
                "      └─ reportSingleEntryWithSingleMapping(TestReporter) ✔",
                "            2017-09-10T11:12:13.014 foo = `bar`",
            ],
        );
    }

    #[test]
    fn report_multi_entries_with_multi_mappings() {
        let name = "reportMultiEntriesWithMultiMappings(TestReporter)";
        let tree = details_tree(|builder| {
            builder.on_start(method(name)).unwrap();
            let entries = [
                ReportEntry::new(timestamp())
                    .with("user name", "dk38")
                    .with("award year", "1974"),
                ReportEntry::new(timestamp()).with("single", "mapping"),
                ReportEntry::new(timestamp())
                    .with("user name", "st77")
                    .with("award year", "1977")
                    .with("last seen", "2001"),
            ];
            for entry in entries {
                builder.on_report(&name.into(), entry).unwrap();
            }
            finish(builder, name, TestExecutionResult::successful(), 5);
        });
        assert_lines(
            &render(&tree, Theme::Unicode),
            &[
                "╷",
                "└─ JUnit Jupiter ✔",
                "   └─ ConsoleDetailsTests$Container ✔",
                "      └─ reportMultiEntriesWithMultiMappings(TestReporter) ✔",
                "            2017-09-10T11:12:13.014",
                "               user name = `dk38`",
                "               award year = `1974`",
                "            2017-09-10T11:12:13.014 single = `mapping`",
                "            2017-09-10T11:12:13.014",
                "               user name = `st77`",
                "               award year = `1977`",
                "               last seen = `2001`",
            ],
        );
    }

    #[test]
    fn report_entry_without_pairs() {
        let tree = details_tree(|builder| {
            builder.on_start(method("t()")).unwrap();
            builder
                .on_report(&"t()".into(), ReportEntry::new(timestamp()))
                .unwrap();
            finish(builder, "t()", TestExecutionResult::successful(), 5);
        });
        let output = render(&tree, Theme::Ascii);
        assert_eq!(
            output.lines().skip(3).collect::<Vec<_>>(),
            ["    '-- t() [OK]", "        2017-09-10T11:12:13.014"]
        );
    }

    #[test]
    fn sibling_glyphs() {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new("e", "E", IdentifierKind::Engine))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("a", "A", IdentifierKind::Container).with_parent("e"))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("x", "x()", IdentifierKind::Test).with_parent("a"))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("b", "b()", IdentifierKind::Test).with_parent("e"))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("c", "c()", IdentifierKind::Test).with_parent("e"))
            .unwrap();
        for id in ["x", "a", "b", "c", "e"] {
            finish(&mut builder, id, TestExecutionResult::successful(), 1);
        }
        let tree = builder.build();

        assert_lines(
            &render(&tree, Theme::Ascii),
            &[
                ".",
                "'-- E [OK]",
                "  +-- A [OK]",
                "  | '-- x() [OK]",
                "  +-- b() [OK]",
                "  '-- c() [OK]",
            ],
        );
        assert_lines(
            &render(&tree, Theme::Unicode),
            &[
                "╷",
                "└─ E ✔",
                "   ├─ A ✔",
                "   │  └─ x() ✔",
                "   ├─ b() ✔",
                "   └─ c() ✔",
            ],
        );
    }

    #[test]
    fn hidden_node_children_take_its_place() {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new("e", "E", IdentifierKind::Engine).hidden())
            .unwrap();
        builder
            .on_start(TestIdentifier::new("c1", "C1", IdentifierKind::Container).with_parent("e"))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("t", "t()", IdentifierKind::Test).with_parent("c1"))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("c2", "C2", IdentifierKind::Container).with_parent("e"))
            .unwrap();
        for id in ["t", "c1", "c2", "e"] {
            finish(&mut builder, id, TestExecutionResult::successful(), 1);
        }
        let tree = builder.build();

        assert_eq!(tree.primary_line_count(), 4);
        assert_lines(
            &render(&tree, Theme::Ascii),
            &[".", "+-- C1 [OK]", "| '-- t() [OK]", "'-- C2 [OK]"],
        );
    }

    #[test]
    fn slow_duration_only_on_leaves() {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new("c", "c", IdentifierKind::Container))
            .unwrap();
        for name in ["slow()", "boundary()"] {
            builder
                .on_start(TestIdentifier::new(name, name, IdentifierKind::Test).with_parent("c"))
                .unwrap();
        }
        finish(&mut builder, "slow()", TestExecutionResult::successful(), 15000);
        finish(&mut builder, "boundary()", TestExecutionResult::successful(), 10000);
        finish(&mut builder, "c", TestExecutionResult::successful(), 15000);
        let tree = builder.build();

        assert_lines(
            &render(&tree, Theme::Ascii),
            &[
                ".",
                "'-- c [OK]",
                "  +-- slow() 15000 ms [OK]",
                "  '-- boundary() [OK]",
            ],
        );
    }

    #[test]
    fn unfinished_and_aborted_icons() {
        let tree = details_tree(|builder| {
            builder.on_start(method("running()")).unwrap();
            builder.on_start(method("aborted()")).unwrap();
            finish(
                builder,
                "aborted()",
                TestExecutionResult::aborted(Some(FailureDetail::new("assumption failed"))),
                5,
            );
            builder.on_start(method("no-message()")).unwrap();
            finish(
                builder,
                "no-message()",
                TestExecutionResult::failed(Some(FailureDetail::default())),
                5,
            );
        });
        assert_lines(
            &render(&tree, Theme::Ascii),
            &[
                ".",
                "'-- JUnit Jupiter [OK]",
                "  '-- ConsoleDetailsTests$Container [OK]",
                "    +-- running() [S]",
                "    +-- aborted() [A] assumption failed",
                "    '-- no-message() [X]",
            ],
        );
    }

    #[test]
    fn colored_output() {
        let mut builder = TreeBuilder::new("plan");
        builder
            .on_start(TestIdentifier::new("c", "c", IdentifierKind::Container))
            .unwrap();
        builder
            .on_start(TestIdentifier::new("t", "t()", IdentifierKind::Test).with_parent("c"))
            .unwrap();
        builder
            .on_skip(
                TestIdentifier::new("s", "s()", IdentifierKind::Test).with_parent("c"),
                "slow",
            )
            .unwrap();
        finish(&mut builder, "t", TestExecutionResult::successful(), 1);
        finish(&mut builder, "c", TestExecutionResult::successful(), 1);
        let tree = builder.build();

        let output = render_with(&tree, Theme::Ascii, &Styles::new(true));
        assert_lines(
            &output,
            &[
                "\u{1b}[36m.\u{1b}[0m",
                "\u{1b}[36m'--\u{1b}[0m \u{1b}[36mc\u{1b}[0m \u{1b}[32m[OK]\u{1b}[0m",
                "\u{1b}[36m  +--\u{1b}[0m \u{1b}[34mt()\u{1b}[0m \u{1b}[32m[OK]\u{1b}[0m",
                "\u{1b}[36m  '--\u{1b}[0m \u{1b}[35ms()\u{1b}[0m \u{1b}[35m[S]\u{1b}[0m \u{1b}[35mslow\u{1b}[0m",
            ],
        );
    }

    #[test]
    fn colored_report_entry() {
        let tree = details_tree(|builder| {
            builder.on_start(method("t()")).unwrap();
            builder
                .on_report(
                    &"t()".into(),
                    ReportEntry::new(timestamp()).with("k", "v"),
                )
                .unwrap();
            finish(builder, "t()", TestExecutionResult::successful(), 5);
        });
        let output = render_with(&tree, Theme::Ascii, &Styles::new(true));
        assert_eq!(
            output.lines().last(),
            Some(
                "\u{1b}[36m        \u{1b}[0m2017-09-10T11:12:13.014 \
                 \u{1b}[33mk\u{1b}[0m = `\u{1b}[32mv\u{1b}[0m`"
            )
        );
    }

    struct FlushCounter {
        buf: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.write(data)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn flushes_once() {
        let tree = failing("t()", "multi\nline");
        let mut writer = FlushCounter {
            buf: Vec::new(),
            flushes: 0,
        };
        TreePrinter::new(Theme::Ascii, &Styles::default())
            .print(&tree, &mut writer)
            .unwrap();
        assert_eq!(writer.flushes, 1);
        assert!(!writer.buf.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let tree = failing("t()", "boom");
        let error = TreePrinter::new(Theme::Unicode, &Styles::default())
            .print(&tree, &mut BrokenPipe)
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    /// Builds a tree from `(parent, visible)` pairs. Node `i` hangs off the
    /// root if `parent % (i + 1)` is zero, and off node `parent % (i + 1) - 1`
    /// otherwise.
    fn tree_from_shape(shape: &[(usize, bool)]) -> ExecutionTree {
        let mut builder = TreeBuilder::new("plan");
        for (index, &(parent, visible)) in shape.iter().enumerate() {
            let mut identifier = TestIdentifier::new(
                format!("n{index}"),
                format!("node {index}"),
                IdentifierKind::Container,
            );
            let parent = parent % (index + 1);
            if parent > 0 {
                identifier = identifier.with_parent(format!("n{}", parent - 1));
            }
            if !visible {
                identifier = identifier.hidden();
            }
            builder.on_start(identifier).unwrap();
        }
        for index in 0..shape.len() {
            finish(
                &mut builder,
                &format!("n{index}"),
                TestExecutionResult::successful(),
                1,
            );
        }
        builder.build()
    }

    #[proptest]
    fn one_line_per_visible_node(
        #[strategy(proptest::collection::vec((any::<usize>(), any::<bool>()), 0..40))]
        shape: Vec<(usize, bool)>,
        unicode: bool,
    ) {
        let theme = if unicode { Theme::Unicode } else { Theme::Ascii };
        let tree = tree_from_shape(&shape);
        let output = render(&tree, theme);
        let visible = shape.iter().filter(|(_, visible)| *visible).count();

        prop_assert_eq!(output.lines().count(), tree.primary_line_count());
        prop_assert_eq!(tree.primary_line_count(), visible + 1);
    }

    #[proptest]
    fn lines_are_columns_then_a_bullet(
        #[strategy(proptest::collection::vec((any::<usize>(), any::<bool>()), 0..40))]
        shape: Vec<(usize, bool)>,
        unicode: bool,
    ) {
        let theme = if unicode { Theme::Unicode } else { Theme::Ascii };
        let output = render(&tree_from_shape(&shape), theme);

        let mut lines = output.lines();
        prop_assert_eq!(lines.next(), Some(theme.root()));
        for line in lines {
            let mut rest = line;
            while let Some(stripped) = rest
                .strip_prefix(theme.vertical())
                .or_else(|| rest.strip_prefix(theme.blank()))
            {
                rest = stripped;
            }
            let bullet = format!("{} ", theme.entry());
            let end = format!("{} ", theme.end());
            prop_assert!(
                rest.starts_with(&bullet) || rest.starts_with(&end),
                "line {:?} does not start with a bullet after its columns",
                line
            );
        }
    }
}
