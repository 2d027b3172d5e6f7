use anyhow::Context;
use colored::Colorize;
use novabridge_plist::{read_document, write_document};
use novabridge_plugins::{PatchConfig, PatchSummary, PluginPatcher};
use novabridge_types::PluginFlags;
use tracing::info;

use crate::cli::{Cli, OutputFormat};

/// Patch both documents and write back the ones that changed.
///
/// Flags and config are validated before either document is read.
pub fn run(cli: &Cli) -> anyhow::Result<PatchSummary> {
    let flags = PluginFlags::from_json(&cli.plugins).context("invalid --plugins payload")?;

    let config = match &cli.config {
        Some(path) => PatchConfig::load(path)?,
        None => PatchConfig::default(),
    };

    let info_plist = read_document(&cli.info_plist)
        .with_context(|| format!("reading {}", cli.info_plist.display()))?;
    let entitlements = read_document(&cli.entitlements)
        .with_context(|| format!("reading {}", cli.entitlements.display()))?;

    let report = PluginPatcher::new(config).apply(&info_plist, &entitlements, &flags);

    if cli.dry_run {
        info!("dry run; no files written");
        return Ok(report.summary());
    }

    if report.info_plist_changed {
        write_document(&cli.info_plist, &report.next_info_plist)
            .with_context(|| format!("writing {}", cli.info_plist.display()))?;
        info!(path = %cli.info_plist.display(), "Info.plist updated");
    }
    if report.entitlements_changed {
        write_document(&cli.entitlements, &report.next_entitlements)
            .with_context(|| format!("writing {}", cli.entitlements.display()))?;
        info!(path = %cli.entitlements.display(), "entitlements updated");
    }

    Ok(report.summary())
}

/// Render the summary for stdout.
pub fn render(summary: &PatchSummary, format: &OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

fn render_text(summary: &PatchSummary) -> String {
    let mut lines = Vec::new();
    for (name, changed, added) in [
        ("Info.plist", summary.info_plist_changed, &summary.added_info_plist_keys),
        ("entitlements", summary.entitlements_changed, &summary.added_entitlement_keys),
    ] {
        if changed {
            lines.push(format!("{} {} updated", "✓".green().bold(), name.bold()));
            for key in added {
                lines.push(format!("  {} {}", "added:".green(), key));
            }
        } else {
            lines.push(format!("  {} unchanged", name.dimmed()));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use novabridge_types::Value;

    fn cli_for(dir: &Path, plugins: &str) -> Cli {
        Cli {
            info_plist: dir.join("Info.plist"),
            entitlements: dir.join("App.entitlements"),
            plugins: plugins.into(),
            config: None,
            dry_run: false,
            verbose: false,
            format: OutputFormat::Json,
        }
    }

    fn write_info_plist(path: &Path, camera: &str) {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>NSCameraUsageDescription</key>
	<string>{camera}</string>
</dict>
</plist>
"#
        );
        fs::write(path, xml).unwrap();
    }

    #[test]
    fn creates_missing_documents() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":true,"push":true,"secure_storage":true}"#);

        let summary = run(&cli).unwrap();
        assert!(summary.ok);
        assert!(summary.info_plist_changed);
        assert!(summary.entitlements_changed);
        assert_eq!(
            summary.added_info_plist_keys,
            vec!["NSCameraUsageDescription", "UIBackgroundModes"]
        );
        assert_eq!(
            summary.added_entitlement_keys,
            vec!["aps-environment", "keychain-access-groups"]
        );

        let ent = read_document(&cli.entitlements).unwrap();
        assert_eq!(ent["aps-environment"], Value::string("development"));
    }

    #[test]
    fn second_run_reports_no_change() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":true,"gps":true,"push":true,"biometric":true}"#);

        run(&cli).unwrap();
        let before = fs::read(&cli.info_plist).unwrap();
        let summary = run(&cli).unwrap();

        assert!(!summary.info_plist_changed);
        assert!(!summary.entitlements_changed);
        assert_eq!(fs::read(&cli.info_plist).unwrap(), before);
    }

    #[test]
    fn unchanged_documents_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":true}"#);
        write_info_plist(&cli.info_plist, "We scan your receipts.");
        let original = fs::read_to_string(&cli.info_plist).unwrap();

        let summary = run(&cli).unwrap();
        assert!(!summary.info_plist_changed);
        assert_eq!(fs::read_to_string(&cli.info_plist).unwrap(), original);
        assert!(!cli.entitlements.exists());
    }

    #[test]
    fn all_flags_off_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":false}"#);

        let summary = run(&cli).unwrap();
        assert!(!summary.info_plist_changed);
        assert!(!summary.entitlements_changed);
        assert!(!cli.info_plist.exists());
        assert!(!cli.entitlements.exists());
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(dir.path(), r#"{"push":true}"#);
        cli.dry_run = true;

        let summary = run(&cli).unwrap();
        assert!(summary.info_plist_changed);
        assert!(summary.entitlements_changed);
        assert!(!cli.info_plist.exists());
        assert!(!cli.entitlements.exists());
    }

    #[test]
    fn invalid_flags_fail_before_reading_documents() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), "{camera:true");
        // A malformed document would fail too; the flags error must come first.
        fs::write(&cli.info_plist, "<plist><dict>").unwrap();

        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("--plugins"));
    }

    #[test]
    fn truthy_flag_values_enable_plugins() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":1,"push":"yes","gps":0}"#);

        let summary = run(&cli).unwrap();
        assert_eq!(
            summary.added_info_plist_keys,
            vec!["NSCameraUsageDescription", "UIBackgroundModes"]
        );
        assert_eq!(summary.added_entitlement_keys, vec!["aps-environment"]);
    }

    #[test]
    fn malformed_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), r#"{"camera":true}"#);
        fs::write(&cli.info_plist, "<plist><dict>").unwrap();

        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Info.plist"));
        assert!(!cli.entitlements.exists());
    }

    #[test]
    fn config_overrides_declarations() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("novabridge.toml");
        fs::write(&config_path, "aps_environment = \"production\"\n").unwrap();
        let mut cli = cli_for(dir.path(), r#"{"push":true}"#);
        cli.config = Some(config_path);

        run(&cli).unwrap();
        let ent = read_document(&cli.entitlements).unwrap();
        assert_eq!(ent["aps-environment"], Value::string("production"));
    }

    #[test]
    fn render_json_summary() {
        let summary = PatchSummary {
            ok: true,
            info_plist_changed: true,
            entitlements_changed: false,
            added_info_plist_keys: vec!["NSCameraUsageDescription".into()],
            added_entitlement_keys: vec![],
        };
        let out = render(&summary, &OutputFormat::Json).unwrap();
        let parsed: PatchSummary = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, summary);
        assert!(out.contains("\"infoPlistChanged\": true"));
    }

    #[test]
    fn render_text_summary() {
        let summary = PatchSummary {
            ok: true,
            info_plist_changed: false,
            entitlements_changed: true,
            added_info_plist_keys: vec![],
            added_entitlement_keys: vec!["aps-environment".into()],
        };
        let out = render(&summary, &OutputFormat::Text).unwrap();
        assert!(out.contains("Info.plist"));
        assert!(out.contains("unchanged"));
        assert!(out.contains("aps-environment"));
    }
}
