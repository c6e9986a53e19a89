//! Command-line utility for inspecting left-action bindings of a menu scenario.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use menu_left::{CallbackSlot, EntryDescriptor, LeftResolver};
use menu_services::MenuConfig;
use mock::MockMenu;
use std::path::PathBuf;

/// Text rendering helpers used by the CLI commands.
mod render {
    use menu_abi::{
        ActionOutcome, CheatManager, Navigation, SettingsStore, ShaderManager, StringArray,
    };
    use menu_left::{Binding, CallbackSlot, EntryDescriptor};
    use mock::MockMenu;

    fn columns(index: &str, type_code: &str, tab: &str, handler: &str, rule: &str) -> String {
        format!("{index:>3}  {type_code:<7}  {tab:<16}  {handler:<28}  {rule}")
    }

    pub fn header() -> String {
        columns("idx", "type", "tab", "handler", "rule")
    }

    /// One row of the binding table; unresolved entries show `-` as rule.
    pub fn binding_row(
        entry: &EntryDescriptor,
        slot: &CallbackSlot,
        binding: Option<&Binding>,
    ) -> String {
        let rule = binding.map_or_else(|| "-".to_owned(), |binding| binding.rule.to_string());
        columns(
            &entry.index().to_string(),
            &entry.type_code().to_string(),
            entry.tab().label(),
            slot.ident(),
            &rule,
        )
    }

    pub fn outcome(press: u32, outcome: ActionOutcome) -> String {
        let text = match outcome {
            ActionOutcome::Handled => "handled",
            ActionOutcome::ExitMenu => "exit_menu",
        };
        format!("press {press}: {text}")
    }

    /// State of every subsystem after a run of presses.
    pub fn summary(menu: &MockMenu) -> String {
        let nav = &menu.navigation;
        let shader = match &menu.shader {
            Some(shader) => format!(
                "passes={} parameters={}",
                shader.pass_count(),
                shader.parameters().len()
            ),
            None => "none".to_owned(),
        };
        let resolution = menu
            .display
            .current()
            .map_or_else(|| "none".to_owned(), |res| format!("{}x{}", res.width, res.height));
        let disk = menu
            .disk
            .map_or_else(|| "none".to_owned(), |disk| format!("{}/{}", disk.index(), disk.count()));

        [
            format!("selection: {}/{}", nav.selection(), nav.entries()),
            format!("refresh_pending: {}", nav.refresh_pending),
            format!("cheats: {}", menu.cheats.len()),
            format!("shader: {shader}"),
            format!(
                "playlist_cores: {:?}",
                menu.settings.string_array(StringArray::PlaylistCores)
            ),
            format!("resolution: {resolution}"),
            format!("disk: {disk}"),
        ]
        .join("\n")
    }
}

/// Inspect and replay left (decrement) actions of a menu scenario.
#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect menu left-action bindings", long_about = None)]
struct Cli {
    /// Scenario file (menu configuration plus `[[entries]]`).
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every entry and print the binding table.
    Bind,
    /// Resolve one entry and press left on it.
    Press {
        /// Entry index in the scenario list.
        #[arg(short, long)]
        entry: usize,
        /// Number of presses (defaults to 1).
        #[arg(short, long, default_value_t = 1)]
        times: u32,
        /// Pass the wraparound flag to the handler.
        #[arg(short, long)]
        wrap: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = MenuConfig::load(&cli.scenario)
        .with_context(|| format!("failed to load scenario {:?}", cli.scenario))?;
    let entries = descriptors(&config);
    let mut menu = MockMenu::from_config(&config, entries.len());

    let output = match cli.command {
        Command::Bind => bind_table(&menu.resolver(), &entries),
        Command::Press { entry, times, wrap } => press(&mut menu, &entries, entry, times, wrap)?,
    };
    println!("{output}");
    Ok(())
}

fn descriptors(config: &MenuConfig) -> Vec<EntryDescriptor> {
    config
        .entries
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut builder = EntryDescriptor::builder(row.label.clone(), row.type_code)
                .path(row.path.clone())
                .index(index)
                .tab(row.tab.clone());
            if let Some(label) = row.enum_label {
                builder = builder.enum_label(label);
            }
            if let Some(setting) = &row.setting {
                builder = builder.setting(setting.clone());
            }
            builder.build()
        })
        .collect()
}

fn bind_table(resolver: &LeftResolver, entries: &[EntryDescriptor]) -> String {
    let mut lines = vec![render::header()];
    for entry in entries {
        let mut slot = CallbackSlot::default();
        let binding = resolver.bind(&mut slot, entry).ok();
        lines.push(render::binding_row(entry, &slot, binding.as_ref()));
    }
    lines.join("\n")
}

fn press(
    menu: &mut MockMenu,
    entries: &[EntryDescriptor],
    index: usize,
    times: u32,
    wrap: bool,
) -> Result<String> {
    let entry = entries
        .get(index)
        .ok_or_else(|| anyhow!("entry {index} out of range ({} entries)", entries.len()))?;

    let mut slot = CallbackSlot::default();
    let binding = match menu.resolver().bind(&mut slot, entry) {
        Ok(binding) => Some(binding),
        Err(err) => {
            info!("press: {err}; using {}", slot.ident());
            None
        }
    };

    let mut lines = vec![
        render::header(),
        render::binding_row(entry, &slot, binding.as_ref()),
    ];
    for n in 1..=times {
        let outcome = menu.press(&slot, entry, wrap)?;
        lines.push(render::outcome(n, outcome));
        if outcome.is_exit() {
            break;
        }
    }
    lines.push(render::summary(menu));
    Ok(lines.join("\n"))
}
