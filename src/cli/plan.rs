//! `plan` command.
//!
//! Applies the render behavior lists to a fresh [`RenderScope`], reports the
//! outcome per map and writes the viewer manifest as JSON to stdout.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Result, bail};

use super::PlanArgs;
use super::common::{render_report, resolve_config};
use crate::config::RenderConfig;
use crate::log;
use crate::render::{RenderScope, manifest_json};

/// Resolve the configuration and print the render plan.
pub fn plan_render(path: &Path, args: &PlanArgs) -> Result<()> {
    let resolved = resolve_config(path);
    if !resolved.ok {
        eprintln!("{}", render_report(&resolved.validation, false));
        bail!("configuration invalid");
    }

    let mut scope = RenderScope::new(&resolved.config);
    let warnings = scope.parse_render_behaviors(
        args.skip_all,
        args.skip.as_slice(),
        args.auto.as_slice(),
        args.force.as_slice(),
    );
    for warning in warnings.iter() {
        log!("warning"; "{}", warning.message);
    }

    for line in behavior_summary(&scope, &resolved.config) {
        log!("plan"; "{line}");
    }

    let manifest = manifest_json(&scope.generate_manifest())?;
    let json = if args.compact {
        serde_json::to_string(&manifest)?
    } else {
        serde_json::to_string_pretty(&manifest)?
    };

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

/// One line per map, e.g. `day: tl=force tr=auto`.
fn behavior_summary(scope: &RenderScope<'_>, config: &RenderConfig) -> Vec<String> {
    config
        .maps()
        .iter()
        .map(|map| {
            let name = map.short_name();
            if scope.is_complete_render_skip(name) {
                return format!("{name}: skip");
            }
            if scope.is_complete_render_force(name) {
                return format!("{name}: force");
            }

            let slots: Vec<_> = map
                .rotations()
                .iter()
                .map(|rotation| {
                    let behavior = scope.render_behavior(name, rotation);
                    format!("{}={behavior}", rotation.short_name())
                })
                .collect();
            format!("{name}: {}", slots.join(" "))
        })
        .collect()
}
