use crate::{
    App, DisplayInformation, Features, MAX_SHORTCUT_COUNT, MAX_SLASH_COMMAND_COUNT, Shortcut,
    ShortcutType, SlashCommand,
};

fn commands(n: usize) -> Vec<SlashCommand> {
    (0..n)
        .map(|i| SlashCommand::new(format!("/cmd{i}"), "d"))
        .collect()
}

fn shortcuts(n: usize) -> Vec<Shortcut> {
    (0..n)
        .map(|i| Shortcut {
            name: format!("s{i}"),
            callback_id: format!("cb{i}"),
            description: "d".to_string(),
            kind: ShortcutType::Message,
        })
        .collect()
}

/// **VALUE**: Verifies manifests at the limit produce no warnings.
///
/// **WHY THIS MATTERS**: Spurious warnings train users to ignore real ones.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one (`>=` instead of `>`).
#[test]
fn given_counts_at_limit_when_linted_then_no_warnings() {
    // GIVEN
    let app = App::new(DisplayInformation::new("L")).with_features(Features {
        slash_commands: Some(commands(MAX_SLASH_COMMAND_COUNT)),
        shortcuts: Some(shortcuts(MAX_SHORTCUT_COUNT)),
        ..Features::default()
    });

    // WHEN / THEN
    assert!(app.lint().is_empty());
    assert!(App::new(DisplayInformation::new("bare")).lint().is_empty());
}

/// **VALUE**: Verifies each exceeded limit yields one warning at its pointer.
///
/// **WHY THIS MATTERS**: Callers attach warnings to the manifest location they name.
///
/// **BUG THIS CATCHES**: Would catch a swapped pointer or a merged warning.
#[test]
fn given_counts_over_limit_when_linted_then_one_warning_per_list() {
    // GIVEN
    let app = App::new(DisplayInformation::new("L")).with_features(Features {
        slash_commands: Some(commands(6)),
        shortcuts: Some(shortcuts(7)),
        ..Features::default()
    });

    // WHEN
    let warnings = app.lint();

    // THEN
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].pointer, "/features/slash_commands");
    assert!(warnings[0].detail.starts_with("6 slash commands"));
    assert_eq!(warnings[1].pointer, "/features/shortcuts");
    assert!(warnings[1].summary.contains("More than 5 shortcuts"));
}
