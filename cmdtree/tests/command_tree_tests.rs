//! End-to-end tests for assembling, validating and rendering command trees

use cmdtree::{Command, CommandError, CommandOption, DynamicParam, ExecContext, RunState};
use rstest::rstest;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn noop(_: &mut ExecContext<'_>) -> anyhow::Result<()> {
    Ok(())
}

fn leaf(name: &str, description: &str) -> Command {
    Command::new(name, description).with_run(noop)
}

fn files(input: &str) -> Vec<String> {
    ["Cargo.toml", "Cargo.lock", "README.md"]
        .iter()
        .filter(|name| name.starts_with(input))
        .map(|name| name.to_string())
        .collect()
}

/// A small but complete tree: router -> router -> leaves
fn sample_tree() -> Command {
    let mut remote = Command::new("remote", "Manage remotes");
    remote.add_command([
        leaf("add", "Add a remote").with_option(CommandOption::new("-f", "Fetch after adding")),
        leaf("remove", "Remove a remote"),
    ]);

    let mut root = Command::new("git", "Version control");
    root.add_command([
        leaf("status", "Show the working tree status"),
        leaf("add", "Add file contents to the index")
            .with_dynamic_param(DynamicParam::new("path", "File to stage").with_completion(files))
            .with_option(CommandOption::new("-p", "Stage hunks interactively")),
        remote,
    ]);
    root
}

fn help_of(command: &Command) -> Vec<u8> {
    let mut out = Vec::new();
    command.write_help(&mut out).unwrap();
    out
}

#[test]
fn test_sample_tree_checks() {
    let mut root = sample_tree();
    assert!(root.check().is_ok());

    assert_eq!(root.run_state(), RunState::Help);
    let remote = root.find_command("remote").unwrap();
    assert_eq!(remote.run_state(), RunState::Help);
    assert_eq!(remote.commands()[0].run_state(), RunState::Explicit);
}

#[test]
fn test_default_run_matches_help_output() {
    let mut root = sample_tree();
    root.check().unwrap();

    let remote = root.find_command("remote").unwrap();
    let mut out = Vec::new();
    let mut ctx = ExecContext::new(remote, &mut out);
    remote.run(&mut ctx).unwrap();

    assert_eq!(out, help_of(remote));
}

#[test]
fn test_deep_descendant_error_propagates_to_root() {
    let mut root = sample_tree();
    let mut deep = Command::new("prune", "Prune stale branches");
    deep.add_command([Command::new("dry-run", "").with_run(noop)]);
    let mut remote = Command::new("remote", "Manage remotes");
    remote.add_command([leaf("add", "Add a remote"), deep]);
    root.add_command([remote]);

    assert_eq!(
        root.check(),
        Err(CommandError::MissingCommandDescription {
            command: "dry-run".to_string()
        })
    );
}

#[rstest]
#[case(DynamicParam::new("", ""), CommandError::MissingParamFlag)]
#[case(
    DynamicParam::new("path", ""),
    CommandError::MissingParamDescription { flag: "path".to_string() }
)]
#[case(
    DynamicParam::new("path", "File to stage"),
    CommandError::MissingCompletion { flag: "path".to_string() }
)]
fn test_invalid_dynamic_param_fails_tree(
    #[case] param: DynamicParam,
    #[case] expected: CommandError,
) {
    let mut root = Command::new("git", "Version control")
        .with_command(leaf("add", "Stage files").with_dynamic_param(param));
    assert_eq!(root.check(), Err(expected));
}

#[rstest]
#[case("", "Whatever", CommandError::MissingOptionName)]
#[case("", "", CommandError::MissingOptionName)]
#[case("-v", "", CommandError::MissingOptionDescription { option: "-v".to_string() })]
fn test_invalid_option_fails_tree(
    #[case] name: &str,
    #[case] description: &str,
    #[case] expected: CommandError,
) {
    let mut root = Command::new("git", "Version control").with_command(
        leaf("log", "Show history").with_option(CommandOption::new(name, description)),
    );
    assert_eq!(root.check(), Err(expected));
}

#[test]
fn test_explicit_run_receives_context() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let command = Command::new("echo", "Print arguments").with_run(move |ctx| {
        counter.fetch_add(1, Ordering::SeqCst);
        let line = format!("{}: {}", ctx.command().name(), ctx.args().join(","));
        writeln!(ctx.output(), "{line}")?;
        Ok(())
    });

    let mut out = Vec::new();
    let mut ctx = ExecContext::new(&command, &mut out).with_args(["a", "b"]);
    command.run(&mut ctx).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "echo: a,b\n");
}

#[test]
fn test_run_error_surfaces_to_dispatcher() {
    let command = Command::new("fail", "Always fails").with_run(|_| anyhow::bail!("boom"));
    let mut out = Vec::new();
    let mut ctx = ExecContext::new(&command, &mut out);
    let err = command.run(&mut ctx).unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_help_on_router_is_header_plus_one_line_per_child() {
    let root = Command::new("menu", "Main menu")
        .with_command(leaf("A", "desc A"))
        .with_command(leaf("B", "desc B"));

    let output = String::from_utf8(help_of(&root)).unwrap();
    let output = output.strip_prefix(cmdtree::CLEAR_LINE).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "menu:");
    assert!(lines[1].contains('A') && lines[1].contains("desc A"));
    assert!(lines[2].contains('B') && lines[2].contains("desc B"));
}

#[test]
fn test_help_on_leaf_with_option_omits_param_line() {
    let command = leaf("log", "Show history").with_option(CommandOption::new("--stat", "Diffstat"));
    let output = String::from_utf8(help_of(&command)).unwrap();
    let output = output.strip_prefix(cmdtree::CLEAR_LINE).unwrap();

    assert_eq!(output, "log:\n  options:\n    --stat\tDiffstat\n");
}

#[test]
fn test_help_available_before_check() {
    let root = sample_tree();
    let output = String::from_utf8(help_of(&root)).unwrap();
    assert!(output.contains("git:"));
    assert!(output.contains("remote\tManage remotes"));
}

#[test]
fn test_completion_is_not_invoked_by_check_or_help() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let param = DynamicParam::new("path", "File").with_completion(move |_: &str| -> Vec<String> {
        counter.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    });
    let mut command = leaf("add", "Stage files").with_dynamic_param(param);

    command.check().unwrap();
    help_of(&command);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let param = command.dynamic_param().unwrap();
    assert!(param.complete("src").is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
